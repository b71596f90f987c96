//! # hyperpage
//!
//! Build page trees with plain function calls instead of a markup templating
//! syntax.
//!
//! Every supported tag has an element function taking an optional
//! properties object followed by any number of children. The properties
//! object's `className` accepts a single name, a list with falsy entries
//! skipped, or a map of names to inclusion flags:
//!
//! ```
//! use hyperpage::html::{div, h1, p};
//! use hyperpage::prelude::*;
//!
//! let highlighted = true;
//! let page = div((
//!     Props::new().class_name(class_list!["card", class_map! { "highlighted" => highlighted }]),
//!     h1("Title"),
//!     p("Body"),
//! ));
//! assert_eq!(
//!     page.render_to_string(),
//!     "<div class=\"card highlighted\"><h1>Title</h1><p>Body</p></div>"
//! );
//! ```
//!
//! ## Crates
//!
//! - `hyperpage-classnames`: [`ClassValue`] and [`class_names`].
//! - `hyperpage-core`: the node model ([`Page`]), [`Props`], [`Component`]
//!   and the [`Host`] construction primitive.
//! - `hyperpage-elements`: element functions, [`ElementFactory`],
//!   [`make_element`], [`fragment`] and the component wrappers.
//!
//! ## Feature Flags
//!
//! - `svg` (default): the [`svg`] element functions.
//! - `mathml` (default): the [`math`] element functions.
//! - `json` (default): `Props::from_json` and `ClassValue: From<serde_json::Value>`.

pub use hyperpage_classnames::{ClassValue, class_list, class_map, class_names};
pub use hyperpage_core::{
	Component, ComponentElement, ComponentRef, ConstructError, ElementType, Event, EventHandler,
	EventType, FnComponent, Host, IntoPage, Page, PageElement, PageHost, PropValue, Props,
	StrictHost, component_fn, into_ok,
};
pub use hyperpage_elements::{
	Arg, Args, Dispatch, ElementFactory, FactoryRegistry, IntoArgs, component,
	component_with_children, fragment, make_element, normalize_class_name,
};

pub use hyperpage_elements::html;
#[cfg(feature = "mathml")]
pub use hyperpage_elements::math;
#[cfg(feature = "svg")]
pub use hyperpage_elements::svg;

/// Lower-level modules, for hosts and custom integrations.
pub mod core {
	pub use hyperpage_core::{component, error, host, page, props};
}

/// Types and functions most programs need.
pub mod prelude {
	pub use crate::{
		Args, ClassValue, Component, ComponentRef, IntoArgs, IntoPage, Page, PageElement, Props,
		class_list, class_map, class_names, component, component_fn, component_with_children,
		fragment, make_element,
	};
}
