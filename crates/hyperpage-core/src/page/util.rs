//! Escaping and name rules shared by node construction and rendering.

use std::borrow::Cow;

/// Escapes text for use in element content and quoted attribute values.
///
/// Text without `&`, `<`, `>` or quotes is returned borrowed.
pub(crate) fn html_escape(text: &str) -> Cow<'_, str> {
	let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(text);
	};
	let mut escaped = String::with_capacity(text.len() + 16);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		let entity = match c {
			'&' => "&amp;",
			'<' => "&lt;",
			'>' => "&gt;",
			'"' => "&quot;",
			'\'' => "&#x27;",
			_ => {
				escaped.push(c);
				continue;
			}
		};
		escaped.push_str(entity);
	}
	Cow::Owned(escaped)
}

/// HTML void elements: they never have children and render without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// HTML boolean attributes, which are active whenever present.
///
/// `<button disabled="false">` is still disabled, so attributes in this list
/// are only rendered when their value is truthy.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Returns `true` if `tag` is an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns `true` if a boolean attribute with this value should be rendered.
///
/// Empty, `"false"` and `"0"` values leave the attribute off.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}

/// Returns `true` if `name` can be used as an element tag name.
///
/// Tag names start with an ASCII letter and continue with ASCII
/// alphanumerics, `-`, `_`, `.` or `:` (custom elements and namespaced SVG).
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
		}
		_ => false,
	}
}

/// Returns `true` if `name` can be rendered as an attribute name.
///
/// Rejects empty names, whitespace, controls, quotes, `>`, `/` and `=`.
pub fn is_valid_attr_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
		})
}
