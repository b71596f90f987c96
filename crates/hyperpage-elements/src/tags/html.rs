//! HTML element functions.
//!
//! ```
//! use hyperpage_core::Props;
//! use hyperpage_elements::html::{a, nav};
//!
//! let page = nav(a((Props::new().attr("href", "/"), "Home")));
//! assert_eq!(page.render_to_string(), "<nav><a href=\"/\">Home</a></nav>");
//! ```

define_elements! {
	/// Every HTML tag with a function in this module.
	HTML_TAGS;

	// Document metadata
	html => "html",
	head => "head",
	title => "title",
	base => "base",
	link => "link",
	meta => "meta",
	style => "style",
	body => "body",

	// Sectioning
	address => "address",
	article => "article",
	aside => "aside",
	footer => "footer",
	header => "header",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	hgroup => "hgroup",
	main => "main",
	nav => "nav",
	section => "section",
	search => "search",

	// Text content
	blockquote => "blockquote",
	dd => "dd",
	div => "div",
	dl => "dl",
	dt => "dt",
	figcaption => "figcaption",
	figure => "figure",
	hr => "hr",
	li => "li",
	menu => "menu",
	ol => "ol",
	p => "p",
	pre => "pre",
	ul => "ul",

	// Inline text semantics
	a => "a",
	abbr => "abbr",
	b => "b",
	bdi => "bdi",
	bdo => "bdo",
	br => "br",
	cite => "cite",
	code => "code",
	data => "data",
	dfn => "dfn",
	em => "em",
	i => "i",
	kbd => "kbd",
	mark => "mark",
	q => "q",
	rp => "rp",
	rt => "rt",
	ruby => "ruby",
	s => "s",
	samp => "samp",
	small => "small",
	span => "span",
	strong => "strong",
	sub => "sub",
	sup => "sup",
	time => "time",
	u => "u",
	var => "var",
	wbr => "wbr",

	// Image and multimedia
	area => "area",
	audio => "audio",
	img => "img",
	map => "map",
	track => "track",
	video => "video",

	// Embedded content
	embed => "embed",
	iframe => "iframe",
	object => "object",
	picture => "picture",
	portal => "portal",
	source => "source",

	// Scripting
	canvas => "canvas",
	noscript => "noscript",
	script => "script",

	// Demarcating edits
	del => "del",
	ins => "ins",

	// Table content
	caption => "caption",
	col => "col",
	colgroup => "colgroup",
	table => "table",
	tbody => "tbody",
	td => "td",
	tfoot => "tfoot",
	th => "th",
	thead => "thead",
	tr => "tr",

	// Forms
	button => "button",
	datalist => "datalist",
	fieldset => "fieldset",
	form => "form",
	input => "input",
	label => "label",
	legend => "legend",
	meter => "meter",
	optgroup => "optgroup",
	option => "option",
	output => "output",
	progress => "progress",
	select => "select",
	textarea => "textarea",

	// Interactive elements
	details => "details",
	dialog => "dialog",
	summary => "summary",

	// Web components
	slot => "slot",
	template => "template",
}
