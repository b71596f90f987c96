//! Property-based tests for element function dispatch
//!
//! Uses proptest to check the forwarding rules for arbitrary tags,
//! children and properties.

use hyperpage_core::{ElementType, Host, IntoPage, Page, PageHost, PropValue, Props, into_ok};
use hyperpage_elements::html::HTML_TAGS;
use hyperpage_elements::{Arg, Args, ElementFactory, make_element};
use proptest::prelude::*;
use std::cell::RefCell;
use std::convert::Infallible;

/// Keeps the last forwarded properties and children.
#[derive(Default)]
struct CapturingHost {
	last: RefCell<Option<(Option<Props>, Vec<Page>)>>,
}

impl Host for CapturingHost {
	type Node = ();
	type Error = Infallible;

	fn construct(
		&self,
		_element_type: &ElementType,
		props: Option<Props>,
		children: Vec<Page>,
	) -> Result<(), Infallible> {
		*self.last.borrow_mut() = Some((props, children));
		Ok(())
	}
}

fn any_tag() -> impl Strategy<Value = &'static str> {
	prop::sample::select(HTML_TAGS)
}

fn any_child() -> impl Strategy<Value = Page> {
	prop_oneof![
		"[a-zA-Z0-9 <>&]{0,12}".prop_map(IntoPage::into_page),
		any::<i64>().prop_map(IntoPage::into_page),
		"[a-z]{1,6}".prop_map(|text| hyperpage_elements::html::span(text)),
		prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(IntoPage::into_page),
	]
}

fn any_attrs() -> impl Strategy<Value = Vec<(String, String)>> {
	prop::collection::vec(("[a-z][a-z0-9-]{0,8}", "[ -~]{0,12}"), 0..6)
}

#[test]
fn every_tag_without_arguments_matches_bare_construction() {
	for tag in HTML_TAGS {
		let built = make_element(*tag).build(());
		let direct = into_ok(PageHost.construct(&ElementType::intrinsic(*tag), None, Vec::new()));
		assert_eq!(built.render_to_string(), direct.render_to_string(), "tag {}", tag);
		assert_eq!(built.tag_name(), Some(*tag));
	}
}

proptest! {
	/// Property: a leading child is equivalent to an absent first argument
	/// followed by that child
	#[test]
	fn prop_first_child_promotion_is_transparent(
		tag in any_tag(),
		first in any_child(),
		rest in prop::collection::vec(any_child(), 0..4),
	) {
		let factory = ElementFactory::new(tag);

		let mut children = vec![first.clone()];
		children.extend(rest.iter().cloned());
		let promoted = factory.build(Args::from_parts(Some(Arg::Child(first)), rest));
		let explicit = factory.build(Args::from_parts(
			Some(Arg::from(None::<Page>)),
			children,
		));

		prop_assert_eq!(promoted.render_to_string(), explicit.render_to_string());
	}

	/// Property: properties without `className` reach the host unchanged
	#[test]
	fn prop_props_without_class_name_are_forwarded(
		tag in any_tag(),
		attrs in any_attrs(),
		rest in prop::collection::vec(any_child(), 0..3),
	) {
		let props: Props = attrs
			.into_iter()
			.map(|(name, value)| (name, PropValue::from(value)))
			.collect();
		let expected: Vec<(String, Option<String>)> = props
			.iter()
			.map(|(name, value)| (name.to_string(), value.as_text().map(str::to_string)))
			.collect();
		let rest_len = rest.len();

		let host = CapturingHost::default();
		let factory = ElementFactory::intrinsic(tag, &host);
		into_ok(factory.call(Args::from_parts(Some(Arg::Props(props)), rest)));

		let captured = host.last.borrow_mut().take();
		let (forwarded, children) = captured.unwrap_or_default();
		let forwarded: Vec<(String, Option<String>)> = forwarded
			.unwrap_or_default()
			.iter()
			.map(|(name, value)| (name.to_string(), value.as_text().map(str::to_string)))
			.collect();
		prop_assert_eq!(forwarded, expected);
		prop_assert_eq!(children.len(), rest_len);
	}

	/// Property: the factory cache hands out one factory per tag
	#[test]
	fn prop_make_element_is_idempotent(tag in "[a-z]{1,8}(-[a-z]{1,8})?") {
		let first = make_element(tag.clone());
		let second = make_element(tag);
		prop_assert!(std::sync::Arc::ptr_eq(&first, &second));
		prop_assert_eq!(
			first.build("x").render_to_string(),
			second.build("x").render_to_string()
		);
	}
}
