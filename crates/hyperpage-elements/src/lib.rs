//! Hyperscript-style element functions.
//!
//! Every supported tag has a function of the same name that takes an
//! optional properties object followed by children:
//!
//! ```
//! use hyperpage_core::Props;
//! use hyperpage_elements::html::{div, li, ul};
//!
//! let list = ul((Props::new().class_name("menu"), li("One"), li("Two")));
//! assert_eq!(
//!     list.render_to_string(),
//!     "<ul class=\"menu\"><li>One</li><li>Two</li></ul>"
//! );
//!
//! // Without properties the first argument is simply the first child.
//! assert_eq!(div("hello").render_to_string(), "<div>hello</div>");
//! ```
//!
//! ## Modules
//!
//! - [`html`], [`svg`] (feature `svg`) and [`math`] (feature `mathml`): one
//!   function per tag.
//! - [`factory`]: the [`ElementFactory`] every element function goes through.
//! - [`registry`]: factories for tags only known at runtime.
//! - [`wrap`]: [`fragment`] and the component wrappers.
//!
//! ## Class names
//!
//! The `className` property of intrinsic elements accepts anything
//! convertible into a [`ClassValue`] and is normalized before construction:
//!
//! ```
//! use hyperpage_classnames::{class_list, class_map};
//! use hyperpage_core::Props;
//! use hyperpage_elements::html::span;
//!
//! let active = true;
//! let page = span(Props::new().class_name(class_list!["tab", class_map! { "active" => active }]));
//! assert_eq!(page.render_to_string(), "<span class=\"tab active\"></span>");
//! ```

pub mod args;
pub mod factory;
pub mod registry;
mod tags;
pub mod wrap;

pub use args::{Arg, Args, IntoArgs};
pub use factory::{Dispatch, ElementFactory, normalize_class_name};
pub use registry::{FactoryRegistry, make_element};
pub use wrap::{component, component_with_children, fragment};

pub use tags::html;
#[cfg(feature = "mathml")]
pub use tags::math;
#[cfg(feature = "svg")]
pub use tags::svg;

pub use hyperpage_classnames::{ClassValue, class_names};
pub use hyperpage_core::{ComponentRef, Page, Props};
