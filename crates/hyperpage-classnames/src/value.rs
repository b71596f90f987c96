//! The class-name value union.

use std::borrow::Cow;

/// Every shape a `className` property value may take.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClassValue {
	/// No value (null, undefined or absent).
	#[default]
	Empty,
	/// A boolean. Booleans only gate other entries and never produce a name.
	Bool(bool),
	/// A floating-point number, included in its `Display` form when non-zero.
	Number(f64),
	/// An integer, included in its `Display` form when non-zero.
	Integer(i128),
	/// A single name, or several names already joined by spaces.
	Str(Cow<'static, str>),
	/// An ordered list of values, each normalized recursively.
	List(Vec<ClassValue>),
	/// Names with inclusion flags, in insertion order.
	Map(Vec<(Cow<'static, str>, bool)>),
}

impl ClassValue {
	/// Returns `true` if the value is truthy in the JavaScript sense.
	///
	/// Lists and maps are always truthy, even when empty.
	pub fn is_truthy(&self) -> bool {
		match self {
			ClassValue::Empty => false,
			ClassValue::Bool(b) => *b,
			ClassValue::Number(n) => *n != 0.0 && !n.is_nan(),
			ClassValue::Integer(n) => *n != 0,
			ClassValue::Str(s) => !s.is_empty(),
			ClassValue::List(_) | ClassValue::Map(_) => true,
		}
	}

	/// Returns `true` if normalizing this value yields an empty string.
	pub fn is_empty_output(&self) -> bool {
		match self {
			ClassValue::Empty | ClassValue::Bool(_) => true,
			ClassValue::Number(_) | ClassValue::Integer(_) | ClassValue::Str(_) => {
				!self.is_truthy()
			}
			ClassValue::List(items) => items.iter().all(ClassValue::is_empty_output),
			ClassValue::Map(entries) => !entries
				.iter()
				.any(|(name, flag)| *flag && !name.is_empty()),
		}
	}
}

impl From<&'static str> for ClassValue {
	fn from(value: &'static str) -> Self {
		ClassValue::Str(Cow::Borrowed(value))
	}
}

impl From<String> for ClassValue {
	fn from(value: String) -> Self {
		ClassValue::Str(Cow::Owned(value))
	}
}

impl From<&String> for ClassValue {
	fn from(value: &String) -> Self {
		ClassValue::Str(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for ClassValue {
	fn from(value: Cow<'static, str>) -> Self {
		ClassValue::Str(value)
	}
}

impl From<bool> for ClassValue {
	fn from(value: bool) -> Self {
		ClassValue::Bool(value)
	}
}

impl From<()> for ClassValue {
	fn from(_: ()) -> Self {
		ClassValue::Empty
	}
}

macro_rules! impl_from_number {
	($variant:ident as $repr:ty: $($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for ClassValue {
				fn from(value: $ty) -> Self {
					ClassValue::$variant(value as $repr)
				}
			}
		)*
	};
}

impl_from_number!(Integer as i128: i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
impl_from_number!(Number as f64: f32, f64);

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(ClassValue::Empty, Into::into)
	}
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
	fn from(value: Vec<T>) -> Self {
		ClassValue::List(value.into_iter().map(Into::into).collect())
	}
}

impl<const N: usize> From<[&'static str; N]> for ClassValue {
	fn from(value: [&'static str; N]) -> Self {
		ClassValue::List(value.into_iter().map(ClassValue::from).collect())
	}
}

impl FromIterator<ClassValue> for ClassValue {
	fn from_iter<I: IntoIterator<Item = ClassValue>>(iter: I) -> Self {
		ClassValue::List(iter.into_iter().collect())
	}
}
