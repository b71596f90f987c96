//! Component trait definition.

use crate::page::Page;
use crate::props::Props;
use std::sync::Arc;

/// Trait for reusable UI components.
///
/// Components receive the properties they were constructed with, including
/// any children under [`crate::props::CHILDREN`], and render them to a
/// [`Page`]. Rendering happens when the tree is rendered, not when the
/// component node is built.
///
/// # Example
///
/// ```
/// use hyperpage_core::component::Component;
/// use hyperpage_core::page::{IntoPage, Page, PageElement};
/// use hyperpage_core::props::Props;
///
/// struct Card;
///
/// impl Component for Card {
///     fn render(&self, props: &Props) -> Page {
///         PageElement::new("section")
///             .attr("class", "card")
///             .child(props.get_text("title").unwrap_or_default().to_string())
///             .into_page()
///     }
///
///     fn name(&self) -> &'static str {
///         "Card"
///     }
/// }
/// ```
pub trait Component: Send + Sync + 'static {
	/// Renders the component with the given properties.
	fn render(&self, props: &Props) -> Page;

	/// Returns the component's name for debugging.
	fn name(&self) -> &'static str;
}

/// Shared handle to a component.
pub type ComponentRef = Arc<dyn Component>;

/// A component defined by a named closure.
pub struct FnComponent<F> {
	name: &'static str,
	render: F,
}

impl<F> FnComponent<F>
where
	F: Fn(&Props) -> Page + Send + Sync + 'static,
{
	/// Creates a component from a render closure.
	pub fn new(name: &'static str, render: F) -> Self {
		Self { name, render }
	}
}

impl<F> Component for FnComponent<F>
where
	F: Fn(&Props) -> Page + Send + Sync + 'static,
{
	fn render(&self, props: &Props) -> Page {
		(self.render)(props)
	}

	fn name(&self) -> &'static str {
		self.name
	}
}

impl<F> std::fmt::Debug for FnComponent<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnComponent")
			.field("name", &self.name)
			.finish()
	}
}

/// Wraps a render closure into a shared component handle.
pub fn component_fn<F>(name: &'static str, render: F) -> ComponentRef
where
	F: Fn(&Props) -> Page + Send + Sync + 'static,
{
	Arc::new(FnComponent::new(name, render))
}
