//! The node tree and its HTML rendering.
//!
//! [`Page`] is what every host call returns: an element, text, a fragment,
//! a component waiting to be rendered, or nothing. Building a tree renders
//! nothing; [`Page::render_to_string`] walks the finished tree once.
//!
//! ## Example
//!
//! ```
//! use hyperpage_core::page::{IntoPage, PageElement};
//!
//! let note = PageElement::new("aside")
//!     .attr("role", "note")
//!     .child("Read me")
//!     .into_page();
//!
//! assert_eq!(note.render_to_string(), "<aside role=\"note\">Read me</aside>");
//! ```

pub mod event;
mod util;

pub use event::{Event, EventHandler, EventType, ParseEventTypeError};
pub(crate) use util::html_escape;
pub use util::{
	BOOLEAN_ATTRS, VOID_ELEMENTS, is_boolean_attr_truthy, is_valid_attr_name, is_valid_tag_name,
	is_void_element,
};

use crate::component::ComponentRef;
use crate::props::Props;
use std::borrow::Cow;

/// One node of a page tree.
#[derive(Debug, Clone)]
pub enum Page {
	/// A markup element.
	Element(PageElement),
	/// Escaped text.
	Text(Cow<'static, str>),
	/// Children rendered in sequence without a wrapper element.
	Fragment(Vec<Page>),
	/// A component rendered with its properties when the tree is rendered.
	Component(ComponentElement),
	/// Renders nothing.
	Empty,
}

/// A markup element with its attributes, children, key and handlers.
#[derive(Clone)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	// Cached from the tag at construction.
	is_void: bool,
	key: Option<Cow<'static, str>>,
	event_handlers: Vec<(EventType, EventHandler)>,
}

impl std::fmt::Debug for PageElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut debug = f.debug_struct("PageElement");
		debug.field("tag", &self.tag);
		if !self.attrs.is_empty() {
			debug.field("attrs", &self.attrs);
		}
		if let Some(key) = &self.key {
			debug.field("key", key);
		}
		if !self.event_handlers.is_empty() {
			let events: Vec<EventType> = self.event_handlers.iter().map(|(ty, _)| *ty).collect();
			debug.field("events", &events);
		}
		debug.field("children", &self.children).finish()
	}
}

impl PageElement {
	/// Creates an element with no attributes or children.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		Self {
			is_void: is_void_element(&tag),
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			key: None,
			event_handlers: Vec::new(),
		}
	}

	/// Appends an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.add_attr(name, value);
		self
	}

	/// Appends `name="name"` when `on` is set; otherwise leaves the element unchanged.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
		if !on {
			return self;
		}
		let name = name.into();
		self.attr(name.clone(), name)
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.add_child(child);
		self
	}

	/// Appends every child of an iterator.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		for child in children {
			self.add_child(child);
		}
		self
	}

	/// Sets the key used to tell siblings apart.
	pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
		self.set_key(key);
		self
	}

	/// Registers a handler for `event_type`.
	pub fn on(mut self, event_type: EventType, handler: EventHandler) -> Self {
		self.add_event_handler(event_type, handler);
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Attributes in the order they were added.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns `true` for void elements such as `<br>`, which never render children.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	pub fn key_value(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Handlers in registration order.
	pub fn event_handlers(&self) -> &[(EventType, EventHandler)] {
		&self.event_handlers
	}

	/// Invokes every handler registered for `event_type`, in registration order.
	///
	/// Returns the dispatched event so callers can inspect
	/// [`Event::default_prevented`].
	pub fn dispatch(&self, event_type: EventType) -> Event {
		let event = Event::new(event_type);
		self.event_handlers
			.iter()
			.filter(|(ty, _)| *ty == event_type)
			.for_each(|(_, handler)| handler(&event));
		event
	}

	pub fn add_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		self.attrs.push((name.into(), value.into()));
	}

	pub fn add_child(&mut self, child: impl IntoPage) {
		self.children.push(child.into_page());
	}

	pub fn add_event_handler(&mut self, event_type: EventType, handler: EventHandler) {
		self.event_handlers.push((event_type, handler));
	}

	pub fn set_key(&mut self, key: impl Into<Cow<'static, str>>) {
		self.key = Some(key.into());
	}
}

/// A component paired with its properties, rendered when the tree is rendered.
#[derive(Clone)]
pub struct ComponentElement {
	component: ComponentRef,
	props: Props,
}

impl ComponentElement {
	pub fn new(component: ComponentRef, props: Props) -> Self {
		Self { component, props }
	}

	pub fn component(&self) -> &ComponentRef {
		&self.component
	}

	/// The properties the component will be rendered with, `children` included.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Runs the component now.
	pub fn render(&self) -> Page {
		self.component.render(&self.props)
	}
}

impl std::fmt::Debug for ComponentElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("ComponentElement")
			.field(&self.component.name())
			.field(&self.props)
			.finish()
	}
}

impl Page {
	/// Shorthand for [`PageElement::new`].
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Groups children without a wrapper element.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(IntoPage::into_page).collect())
	}

	pub fn empty() -> Self {
		Self::Empty
	}

	pub fn is_element(&self) -> bool {
		matches!(self, Page::Element(_))
	}

	pub fn as_element(&self) -> Option<&PageElement> {
		if let Page::Element(element) = self {
			Some(element)
		} else {
			None
		}
	}

	pub fn as_fragment(&self) -> Option<&[Page]> {
		if let Page::Fragment(children) = self {
			Some(children)
		} else {
			None
		}
	}

	/// The tag name, for element nodes only.
	pub fn tag_name(&self) -> Option<&str> {
		self.as_element().map(PageElement::tag_name)
	}

	/// Renders the tree to HTML.
	///
	/// Text and attribute values are escaped. Boolean attributes with a falsy
	/// value are skipped, void elements render as `<tag />`, and components
	/// are rendered here rather than when they were constructed.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		match self {
			Page::Element(element) => element.write_html(output),
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::Fragment(children) => children.iter().for_each(|child| child.write_html(output)),
			Page::Component(component) => component.render().write_html(output),
			Page::Empty => {}
		}
	}
}

impl PageElement {
	fn write_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		for (name, value) in &self.attrs {
			if BOOLEAN_ATTRS.contains(&&**name) && !is_boolean_attr_truthy(value) {
				continue;
			}
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}
		if self.is_void {
			output.push_str(" />");
			return;
		}
		output.push('>');
		for child in &self.children {
			child.write_html(output);
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

/// Values usable as page nodes: nodes, text, numbers, options, sequences.
pub trait IntoPage {
	fn into_page(self) -> Page;
}

macro_rules! impl_into_page {
	($($ty:ty => |$value:ident| $node:expr),* $(,)?) => {
		$(
			impl IntoPage for $ty {
				fn into_page(self) -> Page {
					let $value = self;
					$node
				}
			}
		)*
	};
}

impl_into_page! {
	Page => |page| page,
	PageElement => |element| Page::Element(element),
	ComponentElement => |component| Page::Component(component),
	String => |text| Page::Text(Cow::Owned(text)),
	&String => |text| Page::Text(Cow::Owned(text.clone())),
	&'static str => |text| Page::Text(Cow::Borrowed(text)),
	Cow<'static, str> => |text| Page::Text(text),
	() => |_unit| Page::Empty,
}

macro_rules! impl_into_page_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoPage for $ty {
				fn into_page(self) -> Page {
					Page::Text(Cow::Owned(self.to_string()))
				}
			}
		)*
	};
}

impl_into_page_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

/// `None` renders nothing.
impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		self.map_or(Page::Empty, IntoPage::into_page)
	}
}

/// Sequences become fragments.
impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::fragment(self)
	}
}

macro_rules! impl_into_page_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoPage),+> IntoPage for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_page(self) -> Page {
				let ($($name,)+) = self;
				Page::Fragment(vec![$($name.into_page()),+])
			}
		}
	};
}

impl_into_page_tuple!(A, B);
impl_into_page_tuple!(A, B, C);
impl_into_page_tuple!(A, B, C, D);
