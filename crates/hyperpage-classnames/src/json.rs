//! `serde_json` interop.

use crate::ClassValue;
use serde_json::Value;

/// Returns `true` for JSON values that are truthy in JavaScript.
fn is_json_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => ClassValue::from(n.clone()).is_truthy(),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Integers stay exact; other numbers go through `f64`.
impl From<serde_json::Number> for ClassValue {
	fn from(n: serde_json::Number) -> Self {
		if let Some(n) = n.as_i64() {
			ClassValue::Integer(i128::from(n))
		} else if let Some(n) = n.as_u64() {
			ClassValue::Integer(i128::from(n))
		} else {
			n.as_f64().map_or(ClassValue::Empty, ClassValue::Number)
		}
	}
}

impl From<Value> for ClassValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => ClassValue::Empty,
			Value::Bool(b) => ClassValue::Bool(b),
			Value::Number(n) => ClassValue::from(n),
			Value::String(s) => ClassValue::from(s),
			Value::Array(items) => items.into_iter().map(ClassValue::from).collect(),
			Value::Object(entries) => ClassValue::Map(
				entries
					.into_iter()
					.map(|(name, flag)| {
						let included = is_json_truthy(&flag);
						(name.into(), included)
					})
					.collect(),
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{ClassValue, class_names};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_json_array_with_falsy_entries() {
		let value = ClassValue::from(json!(["a", false, null, "", 0, "b"]));
		assert_eq!(class_names(&value), "a b");
	}

	#[rstest]
	fn test_json_object_uses_truthiness_and_insertion_order() {
		let value = ClassValue::from(json!({
			"zeta": 1,
			"alpha": "",
			"mid": [],
			"off": null
		}));
		assert_eq!(class_names(&value), "zeta mid");
	}

	#[rstest]
	fn test_json_nested() {
		let value = ClassValue::from(json!(["base", { "cond": true, "hidden": false }, "extra"]));
		assert_eq!(class_names(&value), "base cond extra");
	}

	#[rstest]
	fn test_json_large_integer_is_exact() {
		let value = ClassValue::from(json!([9007199254740993u64, 0, 1.5]));
		assert_eq!(class_names(&value), "9007199254740993 1.5");
	}

	#[rstest]
	fn test_json_null_is_empty() {
		assert_eq!(ClassValue::from(json!(null)), ClassValue::Empty);
	}
}
