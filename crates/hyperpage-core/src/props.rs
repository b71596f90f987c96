//! Element and component properties.
//!
//! [`Props`] is the open, insertion-ordered mapping passed as the optional
//! first argument when constructing a node. Only a few names carry meaning
//! for the host: [`CLASS_NAME`], [`CHILDREN`], [`KEY`], [`HTML_FOR`] and
//! `on*` event handlers. Everything else becomes an attribute.

use crate::page::{Event, EventHandler, IntoPage, Page};
use hyperpage_classnames::ClassValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Property holding the element's class names.
pub const CLASS_NAME: &str = "className";
/// Property holding children passed by name instead of positionally.
pub const CHILDREN: &str = "children";
/// Property holding the reconciliation key.
pub const KEY: &str = "key";
/// Property rendered as the `for` attribute.
pub const HTML_FOR: &str = "htmlFor";

/// A single property value.
#[derive(Clone)]
pub enum PropValue {
	/// A string value.
	Text(Cow<'static, str>),
	/// A boolean value; for attributes, `true` renders the attribute and `false` omits it.
	Bool(bool),
	/// A floating-point value.
	Number(f64),
	/// An integer value, kept exact.
	Integer(i128),
	/// An unnormalized class-name value.
	Class(ClassValue),
	/// An event handler.
	Handler(EventHandler),
	/// Child nodes.
	Children(Vec<Page>),
}

impl PropValue {
	/// Returns the string value, if this is [`PropValue::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			PropValue::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean value, if this is [`PropValue::Bool`].
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			PropValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the numeric value of [`PropValue::Number`] or [`PropValue::Integer`].
	///
	/// Integers beyond 2^53 are rounded; use [`PropValue::as_integer`] for
	/// the exact value.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			PropValue::Number(n) => Some(*n),
			PropValue::Integer(n) => Some(*n as f64),
			_ => None,
		}
	}

	/// Returns the integer value, if this is [`PropValue::Integer`].
	pub fn as_integer(&self) -> Option<i128> {
		match self {
			PropValue::Integer(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the class-name value this property stands for.
	///
	/// Handlers and children are not class names and map to [`ClassValue::Empty`].
	pub fn to_class_value(&self) -> ClassValue {
		match self {
			PropValue::Text(s) => ClassValue::Str(s.clone()),
			PropValue::Bool(b) => ClassValue::Bool(*b),
			PropValue::Number(n) => ClassValue::Number(*n),
			PropValue::Integer(n) => ClassValue::Integer(*n),
			PropValue::Class(value) => value.clone(),
			PropValue::Handler(_) | PropValue::Children(_) => ClassValue::Empty,
		}
	}
}

impl fmt::Debug for PropValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PropValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
			PropValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			PropValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
			PropValue::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
			PropValue::Class(value) => f.debug_tuple("Class").field(value).finish(),
			PropValue::Handler(_) => f.write_str("Handler(<closure>)"),
			PropValue::Children(children) => f.debug_tuple("Children").field(children).finish(),
		}
	}
}

impl From<&'static str> for PropValue {
	fn from(value: &'static str) -> Self {
		PropValue::Text(Cow::Borrowed(value))
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for PropValue {
	fn from(value: Cow<'static, str>) -> Self {
		PropValue::Text(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Bool(value)
	}
}

macro_rules! impl_prop_from_number {
	($variant:ident as $repr:ty: $($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					PropValue::$variant(value as $repr)
				}
			}
		)*
	};
}

impl_prop_from_number!(Integer as i128: i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
impl_prop_from_number!(Number as f64: f32, f64);

impl From<ClassValue> for PropValue {
	fn from(value: ClassValue) -> Self {
		PropValue::Class(value)
	}
}

impl From<EventHandler> for PropValue {
	fn from(value: EventHandler) -> Self {
		PropValue::Handler(value)
	}
}

impl From<Vec<Page>> for PropValue {
	fn from(value: Vec<Page>) -> Self {
		PropValue::Children(value)
	}
}

/// An insertion-ordered mapping from property names to values.
#[derive(Debug, Clone, Default)]
pub struct Props {
	entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl Props {
	/// Creates an empty properties object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a property, returning the previous value.
	///
	/// An existing property keeps its position; a new one is appended.
	pub fn set(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((name, value));
				None
			}
		}
	}

	/// Returns the value of a property.
	pub fn get(&self, name: &str) -> Option<&PropValue> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	/// Returns the value of a property mutably.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut PropValue> {
		self.entries
			.iter_mut()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	/// Returns the string value of a property.
	pub fn get_text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(PropValue::as_text)
	}

	/// Removes a property and returns its value.
	pub fn remove(&mut self, name: &str) -> Option<PropValue> {
		let index = self.entries.iter().position(|(n, _)| n == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns `true` if the property is defined.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|(n, _)| n == name)
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no property is defined.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the properties in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.entries.iter().map(|(n, v)| (n.as_ref(), v))
	}

	/// Returns the property names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(n, _)| n.as_ref())
	}

	/// Returns the children passed through the [`CHILDREN`] property.
	pub fn children_views(&self) -> &[Page] {
		match self.get(CHILDREN) {
			Some(PropValue::Children(children)) => children,
			_ => &[],
		}
	}

	/// Adds a property (builder form of [`Props::set`]).
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Sets a boolean property such as `disabled`.
	pub fn flag(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		self.attr(name, PropValue::Bool(value))
	}

	/// Sets the [`CLASS_NAME`] property.
	///
	/// ## Example
	///
	/// ```
	/// use hyperpage_classnames::class_map;
	/// use hyperpage_core::props::Props;
	///
	/// let props = Props::new().class_name(class_map! { "open" => true });
	/// assert!(props.contains("className"));
	/// ```
	pub fn class_name(self, value: impl Into<ClassValue>) -> Self {
		self.attr(CLASS_NAME, PropValue::Class(value.into()))
	}

	/// Sets an event handler property such as `onClick`.
	pub fn on<F>(self, name: impl Into<Cow<'static, str>>, handler: F) -> Self
	where
		F: Fn(&Event) + Send + Sync + 'static,
	{
		let handler: EventHandler = Arc::new(handler);
		self.attr(name, PropValue::Handler(handler))
	}

	/// Sets the [`KEY`] property.
	pub fn key(self, key: impl Into<Cow<'static, str>>) -> Self {
		self.attr(KEY, PropValue::Text(key.into()))
	}

	/// Sets the [`CHILDREN`] property.
	pub fn children(self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		let children: Vec<Page> = children.into_iter().map(IntoPage::into_page).collect();
		self.attr(CHILDREN, PropValue::Children(children))
	}

	/// Builds properties from a JSON object.
	///
	/// Strings, booleans and numbers map to their property counterparts and
	/// `null` entries are skipped. Arrays and objects become class-name values
	/// under [`CLASS_NAME`] and JSON-encoded text elsewhere.
	#[cfg(feature = "json")]
	pub fn from_json(object: serde_json::Map<String, serde_json::Value>) -> Self {
		use serde_json::Value;

		let mut props = Props::new();
		for (name, value) in object {
			let value = match value {
				Value::Null => continue,
				Value::Bool(b) => PropValue::Bool(b),
				Value::Number(n) => {
					if let Some(n) = n.as_i64() {
						PropValue::Integer(i128::from(n))
					} else if let Some(n) = n.as_u64() {
						PropValue::Integer(i128::from(n))
					} else {
						n.as_f64().map_or_else(
							|| PropValue::Text(Cow::Owned(n.to_string())),
							PropValue::Number,
						)
					}
				}
				Value::String(s) => PropValue::Text(Cow::Owned(s)),
				value @ (Value::Array(_) | Value::Object(_)) if name == CLASS_NAME => {
					PropValue::Class(ClassValue::from(value))
				}
				value => PropValue::Text(Cow::Owned(value.to_string())),
			};
			props.set(name, value);
		}
		props
	}
}

impl IntoIterator for Props {
	type Item = (Cow<'static, str>, PropValue);
	type IntoIter = std::vec::IntoIter<(Cow<'static, str>, PropValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Props
where
	K: Into<Cow<'static, str>>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Props::new();
		for (name, value) in iter {
			props.set(name, value);
		}
		props
	}
}
