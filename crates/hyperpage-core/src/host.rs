//! The element construction primitive.
//!
//! A [`Host`] turns an element type, an optional properties object and a
//! list of children into a node. Everything that builds nodes goes through
//! this one call, so swapping the host swaps how nodes are validated and
//! represented.
//!
//! Two hosts are provided:
//!
//! - [`PageHost`] never fails. Input it cannot represent is logged with
//!   `tracing::warn!` and dropped.
//! - [`StrictHost`] applies the same mapping but rejects such input with a
//!   [`ConstructError`].

mod assemble;

use crate::component::ComponentRef;
use crate::error::ConstructError;
use crate::page::Page;
use crate::props::Props;
use std::borrow::Cow;
use std::convert::Infallible;

/// What a node is built from.
#[derive(Clone)]
pub enum ElementType {
	/// A markup element identified by its tag name.
	Intrinsic(Cow<'static, str>),
	/// A user-defined component.
	Component(ComponentRef),
	/// A grouping that renders its children without a wrapper element.
	Fragment,
}

impl ElementType {
	/// Creates an intrinsic element type.
	pub fn intrinsic(tag: impl Into<Cow<'static, str>>) -> Self {
		ElementType::Intrinsic(tag.into())
	}

	/// Returns the tag name, the component name, or `"Fragment"`.
	pub fn name(&self) -> &str {
		match self {
			ElementType::Intrinsic(tag) => tag,
			ElementType::Component(component) => component.name(),
			ElementType::Fragment => "Fragment",
		}
	}

	/// Returns `true` for intrinsic elements.
	pub fn is_intrinsic(&self) -> bool {
		matches!(self, ElementType::Intrinsic(_))
	}
}

impl std::fmt::Debug for ElementType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ElementType::Intrinsic(tag) => f.debug_tuple("Intrinsic").field(tag).finish(),
			ElementType::Component(component) => {
				f.debug_tuple("Component").field(&component.name()).finish()
			}
			ElementType::Fragment => f.write_str("Fragment"),
		}
	}
}

impl From<&'static str> for ElementType {
	fn from(tag: &'static str) -> Self {
		ElementType::Intrinsic(Cow::Borrowed(tag))
	}
}

impl From<String> for ElementType {
	fn from(tag: String) -> Self {
		ElementType::Intrinsic(Cow::Owned(tag))
	}
}

impl From<ComponentRef> for ElementType {
	fn from(component: ComponentRef) -> Self {
		ElementType::Component(component)
	}
}

/// The node-construction primitive.
pub trait Host {
	/// The node type produced.
	type Node;
	/// The error raised for input the host rejects.
	type Error: std::error::Error + 'static;

	/// Constructs one node.
	fn construct(
		&self,
		element_type: &ElementType,
		props: Option<Props>,
		children: Vec<Page>,
	) -> Result<Self::Node, Self::Error>;
}

impl<H: Host + ?Sized> Host for &H {
	type Node = H::Node;
	type Error = H::Error;

	fn construct(
		&self,
		element_type: &ElementType,
		props: Option<Props>,
		children: Vec<Page>,
	) -> Result<Self::Node, Self::Error> {
		(**self).construct(element_type, props, children)
	}
}

/// Lenient host producing [`Page`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageHost;

impl Host for PageHost {
	type Node = Page;
	type Error = Infallible;

	fn construct(
		&self,
		element_type: &ElementType,
		props: Option<Props>,
		children: Vec<Page>,
	) -> Result<Page, Infallible> {
		assemble::construct(element_type, props, children, &|violation: ConstructError| {
			tracing::warn!(element = element_type.name(), %violation, "dropping construction input");
			Ok(())
		})
	}
}

/// Validating host producing [`Page`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictHost;

impl Host for StrictHost {
	type Node = Page;
	type Error = ConstructError;

	fn construct(
		&self,
		element_type: &ElementType,
		props: Option<Props>,
		children: Vec<Page>,
	) -> Result<Page, ConstructError> {
		assemble::construct(element_type, props, children, &|violation: ConstructError| {
			tracing::trace!(element = element_type.name(), %violation, "rejecting construction");
			Err(violation)
		})
	}
}

/// Unwraps a result whose error type cannot be constructed.
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
	match result {
		Ok(value) => value,
		Err(never) => match never {},
	}
}
