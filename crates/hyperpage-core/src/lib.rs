//! Core types of the hyperpage rendering model.
//!
//! - [`page`]: the node vocabulary ([`Page`], [`PageElement`]) and SSR.
//! - [`props`]: the properties object passed when constructing nodes.
//! - [`component`]: user-defined components.
//! - [`host`]: the [`Host`] construction primitive and the provided hosts.

pub mod component;
pub mod error;
pub mod host;
pub mod page;
pub mod props;

pub use component::{Component, ComponentRef, FnComponent, component_fn};
pub use error::ConstructError;
pub use host::{ElementType, Host, PageHost, StrictHost, into_ok};
pub use page::{ComponentElement, Event, EventHandler, EventType, IntoPage, Page, PageElement};
pub use props::{PropValue, Props};
