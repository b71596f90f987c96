use crate::ClassValue;

/// Flattens a class-name value into a single space-separated string.
///
/// Strings are kept verbatim when non-empty, numbers are kept when non-zero,
/// lists are flattened recursively, and maps contribute the names whose flag
/// is set. Booleans, empty strings and [`ClassValue::Empty`] contribute
/// nothing, so `class_names(&ClassValue::Empty)` is `""`.
///
/// ```
/// use hyperpage_classnames::{class_list, class_map, class_names, ClassValue};
///
/// assert_eq!(class_names(&class_list!["a", false, "b"]), "a b");
/// assert_eq!(class_names(&class_map! { "a" => true, "b" => false }), "a");
/// assert_eq!(class_names(&ClassValue::Empty), "");
/// ```
pub fn class_names(value: &ClassValue) -> String {
	let mut output = String::new();
	push_classes(value, &mut output);
	output
}

fn push_classes(value: &ClassValue, output: &mut String) {
	match value {
		ClassValue::Empty | ClassValue::Bool(_) => {}
		ClassValue::Number(n) => {
			if value.is_truthy() {
				push_name(&n.to_string(), output);
			}
		}
		ClassValue::Integer(n) => {
			if *n != 0 {
				push_name(&n.to_string(), output);
			}
		}
		ClassValue::Str(s) => push_name(s, output),
		ClassValue::List(items) => {
			for item in items {
				push_classes(item, output);
			}
		}
		ClassValue::Map(entries) => {
			for (name, flag) in entries {
				if *flag {
					push_name(name, output);
				}
			}
		}
	}
}

fn push_name(name: &str, output: &mut String) {
	if name.is_empty() {
		return;
	}
	if !output.is_empty() {
		output.push(' ');
	}
	output.push_str(name);
}
