//! End-to-end tests through the facade crate
//!
//! Builds a small page the way an application would and checks the
//! server-rendered markup.

use hyperpage::html::{a, body, footer, h1, head, html, li, main, meta, nav, p, title, ul};
use hyperpage::prelude::*;
use hyperpage::{ConstructError, ElementFactory, StrictHost};
use rstest::rstest;

fn nav_link(href: &'static str, label: &'static str, current: bool) -> Page {
	li(a((
		Props::new()
			.attr("href", href)
			.class_name(class_list!["nav-link", class_map! { "current" => current }])
			.attr("aria-current", current),
		label,
	)))
}

fn layout() -> ComponentRef {
	component_fn("Layout", |props: &Props| {
		html((
			head((
				meta(Props::new().attr("charset", "utf-8")),
				title(props.get_text("title").unwrap_or("Untitled").to_string()),
			)),
			body((
				nav(ul((
					nav_link("/", "Home", true),
					nav_link("/about", "About", false),
				))),
				main(Page::fragment(props.children_views().iter().cloned())),
				footer(p("fin")),
			)),
		))
	})
}

#[rstest]
fn test_full_page() {
	// Arrange
	let page = component_with_children(layout());

	// Act
	let rendered = page
		.build((Props::new().attr("title", "Home"), h1("Welcome"), p("Hello")))
		.render_to_string();

	// Assert
	assert_eq!(
		rendered,
		concat!(
			"<html><head><meta charset=\"utf-8\" /><title>Home</title></head><body>",
			"<nav><ul>",
			"<li><a href=\"/\" class=\"nav-link current\" aria-current=\"true\">Home</a></li>",
			"<li><a href=\"/about\" class=\"nav-link\" aria-current=\"false\">About</a></li>",
			"</ul></nav>",
			"<main><h1>Welcome</h1><p>Hello</p></main>",
			"<footer><p>fin</p></footer>",
			"</body></html>",
		)
	);
}

#[rstest]
fn test_fragment_at_top_level() {
	let page = fragment((h1("a"), p("b")));
	assert_eq!(page.render_to_string(), "<h1>a</h1><p>b</p>");
}

#[rstest]
fn test_custom_element_through_registry() {
	let widget = make_element("x-counter");
	let page = widget.build((Props::new().attr("data-start", 3), "3"));
	assert_eq!(
		page.render_to_string(),
		"<x-counter data-start=\"3\">3</x-counter>"
	);
}

#[rstest]
fn test_strict_factory() {
	let link = ElementFactory::intrinsic("a", StrictHost);
	let result = link.call(Props::new().on("onTeleport", |_| {}));
	assert_eq!(
		result.unwrap_err(),
		ConstructError::UnknownEvent {
			tag: "a".to_string(),
			prop: "onTeleport".to_string()
		}
	);
}

#[cfg(feature = "json")]
#[rstest]
fn test_props_from_json() {
	let serde_json::Value::Object(object) = serde_json::json!({
		"className": ["btn", { "btn-primary": true, "disabled": false }],
		"id": "save",
	}) else {
		panic!("expected an object");
	};
	let page = hyperpage::html::button((Props::from_json(object), "Save"));
	assert_eq!(
		page.render_to_string(),
		"<button class=\"btn btn-primary\" id=\"save\">Save</button>"
	);
}

#[cfg(feature = "json")]
#[rstest]
fn test_json_children_field_renders_as_content() {
	let serde_json::Value::Object(object) = serde_json::json!({
		"title": "note",
		"children": "Saved",
	}) else {
		panic!("expected an object");
	};
	let page = hyperpage::html::p(Props::from_json(object));
	assert_eq!(page.render_to_string(), "<p title=\"note\">Saved</p>");
}
