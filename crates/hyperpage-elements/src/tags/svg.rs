//! SVG element functions.
//!
//! Camel-cased SVG tags keep their case in the rendered markup while the
//! functions use snake case: `linear_gradient` builds `<linearGradient>`.
//! `use` is a keyword, so its function is `r#use`.

define_elements! {
	/// Every SVG tag with a function in this module.
	SVG_TAGS;

	svg => "svg",
	g => "g",
	defs => "defs",
	desc => "desc",
	symbol => "symbol",
	r#use => "use",
	switch => "switch",
	foreign_object => "foreignObject",

	// Shapes
	circle => "circle",
	ellipse => "ellipse",
	line => "line",
	path => "path",
	polygon => "polygon",
	polyline => "polyline",
	rect => "rect",

	// Text
	text => "text",
	text_path => "textPath",
	tspan => "tspan",

	// Paint servers, clipping and masking
	clip_path => "clipPath",
	linear_gradient => "linearGradient",
	marker => "marker",
	mask => "mask",
	pattern => "pattern",
	radial_gradient => "radialGradient",
	stop => "stop",

	// Images and filters
	image => "image",
	filter => "filter",
	fe_gaussian_blur => "feGaussianBlur",
	fe_offset => "feOffset",
	fe_blend => "feBlend",
	fe_color_matrix => "feColorMatrix",

	// Animation
	animate => "animate",
	animate_transform => "animateTransform",
	set => "set",
}
