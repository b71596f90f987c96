//! Per-tag element functions.
//!
//! Each function binds its tag at compile time and builds through a fresh
//! [`ElementFactory`](crate::ElementFactory) on the default host.

macro_rules! define_elements {
	($(#[$list_meta:meta])* $list:ident; $($name:ident => $tag:literal),* $(,)?) => {
		$(
			#[doc = concat!("Builds a `<", $tag, ">` element.")]
			pub fn $name(args: impl $crate::args::IntoArgs) -> $crate::Page {
				$crate::factory::ElementFactory::new($tag).build(args)
			}
		)*

		$(#[$list_meta])*
		pub const $list: &[&str] = &[$($tag),*];
	};
}

pub mod html;
#[cfg(feature = "mathml")]
pub mod math;
#[cfg(feature = "svg")]
pub mod svg;
