//! The element factory.
//!
//! An [`ElementFactory`] is bound to one element type and one host. Each
//! call classifies the first argument, normalizes `className` for intrinsic
//! elements, and forwards everything to [`Host::construct`]. The host's
//! result, success or error, is returned unchanged.

use crate::args::{Arg, Args, IntoArgs};
use hyperpage_classnames::class_names;
use hyperpage_core::props::{CHILDREN, CLASS_NAME};
use hyperpage_core::{
	ComponentRef, ElementType, Host, Page, PageHost, PropValue, Props, into_ok,
};
use std::borrow::Cow;

/// How a factory treats its arguments before handing them to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// Markup elements: `className` is normalized.
	Intrinsic,
	/// Fragments: arguments are forwarded as given.
	Fragment,
	/// Components without children support: only the properties object is
	/// forwarded and positional children are dropped.
	Component,
	/// Components that read their children from the `children` property.
	ComponentWithChildren,
}

/// Builds nodes of one element type through one host.
#[derive(Debug, Clone)]
pub struct ElementFactory<H = PageHost> {
	element_type: ElementType,
	dispatch: Dispatch,
	host: H,
}

impl ElementFactory<PageHost> {
	/// Creates a factory for a markup tag on the default host.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::intrinsic(tag, PageHost)
	}

	/// Builds a node; the default host cannot fail.
	pub fn build(&self, args: impl IntoArgs) -> Page {
		into_ok(self.call(args))
	}
}

impl<H: Host> ElementFactory<H> {
	/// Creates a factory for a markup tag.
	pub fn intrinsic(tag: impl Into<Cow<'static, str>>, host: H) -> Self {
		Self {
			element_type: ElementType::Intrinsic(tag.into()),
			dispatch: Dispatch::Intrinsic,
			host,
		}
	}

	/// Creates a fragment factory.
	pub fn fragment(host: H) -> Self {
		Self {
			element_type: ElementType::Fragment,
			dispatch: Dispatch::Fragment,
			host,
		}
	}

	/// Creates a factory for a component without children support.
	///
	/// Positional children given in a call are dropped with a warning; a
	/// `children` property set by the caller is forwarded like any other.
	pub fn component(component: ComponentRef, host: H) -> Self {
		Self {
			element_type: ElementType::Component(component),
			dispatch: Dispatch::Component,
			host,
		}
	}

	/// Creates a factory for a component that reads children from its properties.
	///
	/// Children given in the call are moved into the `children` property,
	/// replacing any value already there.
	pub fn component_with_children(component: ComponentRef, host: H) -> Self {
		Self {
			element_type: ElementType::Component(component),
			dispatch: Dispatch::ComponentWithChildren,
			host,
		}
	}

	/// Returns the element type this factory builds.
	pub fn element_type(&self) -> &ElementType {
		&self.element_type
	}

	/// Returns how arguments are treated.
	pub fn dispatch(&self) -> Dispatch {
		self.dispatch
	}

	/// Returns the host nodes are constructed with.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Builds one node.
	///
	/// A properties object as first argument is forwarded (with `className`
	/// normalized for intrinsic elements) and the remaining arguments become
	/// the children. Any other first argument is the first child and no
	/// properties are forwarded.
	pub fn call(&self, args: impl IntoArgs) -> Result<H::Node, H::Error> {
		let (props, children) = self.prepare(args.into_args());
		self.host.construct(&self.element_type, props, children)
	}

	fn prepare(&self, args: Args) -> (Option<Props>, Vec<Page>) {
		let (first, rest) = args.into_parts();
		let (props, children) = match first {
			Some(Arg::Props(mut props)) => {
				if self.dispatch == Dispatch::Intrinsic {
					normalize_class_name(&mut props);
				}
				(Some(props), rest)
			}
			Some(Arg::Child(child)) => {
				let mut children = Vec::with_capacity(rest.len() + 1);
				children.push(child);
				children.extend(rest);
				(None, children)
			}
			None => (None, rest),
		};

		if children.is_empty() {
			return (props, children);
		}
		match self.dispatch {
			Dispatch::ComponentWithChildren => {
				let mut props = props.unwrap_or_default();
				props.set(CHILDREN, PropValue::Children(children));
				(Some(props), Vec::new())
			}
			Dispatch::Component => {
				tracing::warn!(
					component = %self.element_type.name(),
					dropped = children.len(),
					"component takes no children, dropping positional children"
				);
				(props, Vec::new())
			}
			Dispatch::Intrinsic | Dispatch::Fragment => (props, children),
		}
	}
}

/// Replaces a `className` property with its normalized string form.
///
/// Properties without `className` are left untouched.
pub fn normalize_class_name(props: &mut Props) {
	if let Some(value) = props.get_mut(CLASS_NAME) {
		let normalized = class_names(&value.to_class_value());
		*value = PropValue::Text(Cow::Owned(normalized));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyperpage_classnames::{ClassValue, class_list, class_map};
	use hyperpage_core::{ConstructError, IntoPage, PageElement, StrictHost, component_fn};
	use rstest::rstest;
	use std::cell::RefCell;
	use std::convert::Infallible;

	/// Records every construction instead of building nodes.
	#[derive(Default)]
	struct RecordingHost {
		calls: RefCell<Vec<String>>,
	}

	impl Host for RecordingHost {
		type Node = (Option<Props>, Vec<Page>);
		type Error = Infallible;

		fn construct(
			&self,
			element_type: &ElementType,
			props: Option<Props>,
			children: Vec<Page>,
		) -> Result<Self::Node, Infallible> {
			self.calls.borrow_mut().push(element_type.name().to_string());
			Ok((props, children))
		}
	}

	#[rstest]
	fn test_empty_call_forwards_nothing() {
		let host = RecordingHost::default();
		let factory = ElementFactory::intrinsic("div", &host);
		let (props, children) = into_ok(factory.call(()));
		assert!(props.is_none());
		assert!(children.is_empty());
		assert_eq!(*host.calls.borrow(), ["div"]);
	}

	#[rstest]
	fn test_first_child_is_prepended() {
		let host = RecordingHost::default();
		let factory = ElementFactory::intrinsic("ul", &host);
		let (props, children) = into_ok(factory.call(("first", "second", "third")));
		assert!(props.is_none());
		let texts: Vec<String> = children.iter().map(Page::render_to_string).collect();
		assert_eq!(texts, ["first", "second", "third"]);
	}

	#[rstest]
	fn test_props_without_class_name_are_forwarded_unchanged() {
		let host = RecordingHost::default();
		let factory = ElementFactory::intrinsic("a", &host);
		let props = Props::new().attr("href", "/docs").attr("tabIndex", 1);
		let (props, children) = into_ok(factory.call((props, "Docs")));
		let props = props.expect("props forwarded");
		assert_eq!(props.names().collect::<Vec<_>>(), ["href", "tabIndex"]);
		assert_eq!(props.get_text("href"), Some("/docs"));
		assert_eq!(props.get("tabIndex").and_then(PropValue::as_number), Some(1.0));
		assert_eq!(children.len(), 1);
	}

	#[rstest]
	#[case(ClassValue::from("container"), "container")]
	#[case(class_list!["a", false, "b"], "a b")]
	#[case(class_map! { "a" => true, "b" => false }, "a")]
	#[case(ClassValue::Empty, "")]
	#[case(class_list!["base", class_map! { "cond" => true, "hidden" => false }, "extra"], "base cond extra")]
	fn test_class_name_is_normalized(#[case] class: ClassValue, #[case] expected: &str) {
		let host = RecordingHost::default();
		let factory = ElementFactory::intrinsic("div", &host);
		let (props, _) = into_ok(factory.call(Props::new().class_name(class).attr("id", "x")));
		let props = props.expect("props forwarded");
		assert_eq!(props.get_text(CLASS_NAME), Some(expected));
		assert_eq!(props.names().collect::<Vec<_>>(), [CLASS_NAME, "id"]);
	}

	#[rstest]
	fn test_fragment_and_components_keep_class_name_as_given() {
		let host = RecordingHost::default();
		let value = class_list!["a", false];

		let fragment = ElementFactory::fragment(&host);
		let (props, _) = into_ok(fragment.call(Props::new().class_name(value.clone())));
		assert!(matches!(
			props.as_ref().and_then(|p| p.get(CLASS_NAME)),
			Some(PropValue::Class(_))
		));

		let card = component_fn("Card", |_| Page::Empty);
		let component = ElementFactory::component(card, &host);
		let (props, _) = into_ok(component.call(Props::new().class_name(value)));
		assert!(matches!(
			props.as_ref().and_then(|p| p.get(CLASS_NAME)),
			Some(PropValue::Class(_))
		));
	}

	#[rstest]
	fn test_component_with_children_moves_children_into_props() {
		let host = RecordingHost::default();
		let layout = component_fn("Layout", |_| Page::Empty);
		let factory = ElementFactory::component_with_children(layout, &host);

		let (props, children) = into_ok(factory.call(("a", "b")));
		assert!(children.is_empty());
		let props = props.expect("children property created");
		assert_eq!(props.children_views().len(), 2);

		let (props, _) = into_ok(factory.call(Props::new().children(["kept"])));
		assert_eq!(props.map(|p| p.children_views().len()), Some(1));
	}

	#[rstest]
	fn test_component_drops_positional_children() {
		let host = RecordingHost::default();
		let layout = component_fn("Layout", |_| Page::Empty);
		let factory = ElementFactory::component(layout, &host);

		let (props, children) = into_ok(factory.call((Props::new().attr("id", "x"), "a", "b")));
		assert!(children.is_empty());
		let props = props.expect("props forwarded");
		assert_eq!(props.names().collect::<Vec<_>>(), ["id"]);

		let (props, children) = into_ok(factory.call("only child"));
		assert!(props.is_none());
		assert!(children.is_empty());
	}

	#[rstest]
	fn test_component_forwards_children_property_as_given() {
		let host = RecordingHost::default();
		let layout = component_fn("Layout", |_| Page::Empty);
		let factory = ElementFactory::component(layout, &host);
		let (props, children) = into_ok(factory.call(Props::new().children(["kept"])));
		assert!(children.is_empty());
		assert_eq!(props.map(|p| p.children_views().len()), Some(1));
	}

	#[rstest]
	fn test_host_errors_propagate_unchanged() {
		let factory = ElementFactory::intrinsic("img", StrictHost);
		let result = factory.call((Props::new().attr("src", "/a.png"), "caption"));
		assert_eq!(
			result.unwrap_err(),
			ConstructError::VoidElementChildren {
				tag: "img".to_string()
			}
		);
	}

	#[rstest]
	fn test_factory_is_stable_across_calls() {
		let factory = ElementFactory::new("span");
		let first = factory.build("x").render_to_string();
		let second = factory.build("x").render_to_string();
		assert_eq!(first, "<span>x</span>");
		assert_eq!(first, second);
		assert_eq!(factory.element_type().name(), "span");
	}

	#[rstest]
	fn test_normalize_class_name_without_class_name_is_noop() {
		let mut props = Props::new().attr("id", "x");
		normalize_class_name(&mut props);
		assert_eq!(props.len(), 1);
		assert!(!props.contains(CLASS_NAME));
	}

	#[rstest]
	fn test_element_children_are_nodes() {
		let factory = ElementFactory::new("div");
		let page = factory.build((PageElement::new("hr"), 3i32.into_page()));
		assert_eq!(page.render_to_string(), "<div><hr />3</div>");
	}
}
