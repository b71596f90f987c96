//! Class-name values for element properties.
//!
//! A `className` property may be given as a single name, an ordered list of
//! names (with falsy entries skipped), or a mapping from name to inclusion
//! flag. [`ClassValue`] captures every accepted shape and [`class_names`]
//! flattens it into the single space-separated string an HTML `class`
//! attribute expects.
//!
//! ## Example
//!
//! ```
//! use hyperpage_classnames::{class_list, class_map, class_names};
//!
//! let is_active = true;
//! let value = class_list!["btn", class_map! { "btn-active" => is_active, "hidden" => false }];
//! assert_eq!(class_names(&value), "btn btn-active");
//! ```

#[cfg(feature = "json")]
mod json;
mod normalize;
mod value;

pub use normalize::class_names;
pub use value::ClassValue;

/// Builds a [`ClassValue::List`] from heterogeneous entries.
///
/// Every entry is converted with `ClassValue::from`, so strings, booleans,
/// numbers, options and nested values may be mixed freely.
///
/// ```
/// use hyperpage_classnames::{class_list, class_names};
///
/// assert_eq!(class_names(&class_list!["a", false, "b"]), "a b");
/// ```
#[macro_export]
macro_rules! class_list {
	() => {
		$crate::ClassValue::List(::std::vec::Vec::new())
	};
	($($item:expr),+ $(,)?) => {
		$crate::ClassValue::List(::std::vec![$($crate::ClassValue::from($item)),+])
	};
}

/// Builds a [`ClassValue::Map`] of names to inclusion flags, in the order given.
///
/// ```
/// use hyperpage_classnames::{class_map, class_names};
///
/// assert_eq!(class_names(&class_map! { "a" => true, "b" => false }), "a");
/// ```
#[macro_export]
macro_rules! class_map {
	() => {
		$crate::ClassValue::Map(::std::vec::Vec::new())
	};
	($($name:expr => $flag:expr),+ $(,)?) => {
		$crate::ClassValue::Map(::std::vec![
			$((::std::borrow::Cow::from($name), $flag)),+
		])
	};
}
