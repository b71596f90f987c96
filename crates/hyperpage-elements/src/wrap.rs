//! Fragments and component wrappers.
//!
//! These share the dispatch of the element functions: a leading
//! [`Props`](hyperpage_core::Props) is forwarded as the properties object,
//! anything else is the first child. `className` is passed through
//! untouched.

use crate::args::IntoArgs;
use crate::factory::ElementFactory;
use hyperpage_core::{ComponentRef, Page, PageHost};

/// Groups children without a wrapper element.
///
/// ```
/// use hyperpage_elements::fragment;
/// use hyperpage_elements::html::div;
///
/// let page = fragment((div("1"), div("2")));
/// assert_eq!(page.render_to_string(), "<div>1</div><div>2</div>");
/// ```
pub fn fragment(args: impl IntoArgs) -> Page {
	ElementFactory::fragment(PageHost).build(args)
}

/// Wraps a component that takes no children.
///
/// Only the properties object reaches the component. Positional children
/// are dropped with a `tracing::warn!`.
///
/// ```
/// use hyperpage_core::{IntoPage, PageElement, Props, component_fn};
/// use hyperpage_elements::component;
///
/// let greeting = component(component_fn("Greeting", |props: &Props| {
///     PageElement::new("p")
///         .child(format!("Hello, {}", props.get_text("name").unwrap_or("stranger")))
///         .into_page()
/// }));
/// let page = greeting.build(Props::new().attr("name", "Ana"));
/// assert_eq!(page.render_to_string(), "<p>Hello, Ana</p>");
/// ```
pub fn component(component: ComponentRef) -> ElementFactory {
	ElementFactory::component(component, PageHost)
}

/// Wraps a component that reads its children from the `children` property.
///
/// Children given in a call replace any `children` property already set.
pub fn component_with_children(component: ComponentRef) -> ElementFactory {
	ElementFactory::component_with_children(component, PageHost)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::html::{li, ul};
	use hyperpage_core::props::CHILDREN;
	use hyperpage_core::{IntoPage, PageElement, Props, component_fn};
	use rstest::rstest;

	fn list() -> ComponentRef {
		component_fn("List", |props: &Props| {
			PageElement::new("ul")
				.children(props.children_views().iter().cloned())
				.into_page()
		})
	}

	#[rstest]
	fn test_fragment_without_arguments_is_empty() {
		let page = fragment(());
		assert_eq!(page.as_fragment().map(<[Page]>::len), Some(0));
		assert_eq!(page.render_to_string(), "");
	}

	#[rstest]
	fn test_fragment_with_key() {
		let page = fragment((Props::new().key("group"), li("a"), li("b")));
		assert_eq!(page.render_to_string(), "<li>a</li><li>b</li>");
	}

	#[rstest]
	fn test_fragment_inside_element() {
		let page = ul(fragment((li("a"), li("b"))));
		assert_eq!(page.render_to_string(), "<ul><li>a</li><li>b</li></ul>");
	}

	#[rstest]
	fn test_component_ignores_positional_children() {
		let page = component(list()).build((li("a"), li("b")));
		let Page::Component(element) = &page else {
			panic!("expected a component node");
		};
		assert_eq!(element.component().name(), "List");
		assert!(!element.props().contains(CHILDREN));
		assert_eq!(page.render_to_string(), "<ul></ul>");
	}

	#[rstest]
	fn test_wrappers_differ_on_positional_children() {
		let show = component_fn("Show", |props: &Props| {
			PageElement::new("div")
				.children(props.children_views().iter().cloned())
				.into_page()
		});

		let without = component(show.clone()).build((Props::new(), li("child")));
		let with = component_with_children(show).build((Props::new(), li("child")));

		assert_eq!(without.render_to_string(), "<div></div>");
		assert_eq!(with.render_to_string(), "<div><li>child</li></div>");
	}

	#[rstest]
	fn test_component_with_children_replaces_children_prop() {
		let factory = component_with_children(list());
		let props = Props::new().children([li("stale")]);
		let page = factory.build((props, li("fresh")));
		let Page::Component(element) = &page else {
			panic!("expected a component node");
		};
		assert!(element.props().contains(CHILDREN));
		assert_eq!(page.render_to_string(), "<ul><li>fresh</li></ul>");
	}
}
