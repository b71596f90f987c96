//! Property-to-node mapping shared by the provided hosts.
//!
//! Every violation is passed to `reject`. Returning `Ok(())` drops the
//! offending input and continues; returning `Err` aborts construction.

use super::ElementType;
use crate::component::ComponentRef;
use crate::error::ConstructError;
use crate::page::{
	BOOLEAN_ATTRS, ComponentElement, EventType, Page, PageElement, is_valid_attr_name,
	is_valid_tag_name,
};
use crate::props::{CHILDREN, CLASS_NAME, HTML_FOR, KEY, PropValue, Props};
use hyperpage_classnames::class_names;
use std::borrow::Cow;
use std::sync::Arc;

pub(super) fn construct<E, R>(
	element_type: &ElementType,
	props: Option<Props>,
	children: Vec<Page>,
	reject: &R,
) -> Result<Page, E>
where
	R: Fn(ConstructError) -> Result<(), E>,
{
	match element_type {
		ElementType::Intrinsic(tag) => element(tag, props, children, reject).map(Page::Element),
		ElementType::Component(component) => self::component(component, props, children, reject),
		ElementType::Fragment => fragment(props, children, reject),
	}
}

fn element<E, R>(
	tag: &Cow<'static, str>,
	props: Option<Props>,
	children: Vec<Page>,
	reject: &R,
) -> Result<PageElement, E>
where
	R: Fn(ConstructError) -> Result<(), E>,
{
	if !is_valid_tag_name(tag) {
		reject(ConstructError::InvalidTagName(tag.to_string()))?;
	}

	let mut element = PageElement::new(tag.clone());
	let mut prop_children = None;

	for (name, value) in props.into_iter().flatten() {
		match (&*name, value) {
			(CHILDREN, value) => match children_prop(value) {
				Some(nodes) => prop_children = Some(nodes),
				None => reject(ConstructError::MisplacedChildren {
					tag: tag.to_string(),
					prop: name.to_string(),
				})?,
			},
			(_, PropValue::Handler(handler)) => match EventType::from_prop_name(&name) {
				Ok(event_type) => element.add_event_handler(event_type, handler),
				Err(_) if EventType::is_handler_prop(&name) => {
					reject(ConstructError::UnknownEvent {
						tag: tag.to_string(),
						prop: name.to_string(),
					})?;
				}
				Err(_) => reject(ConstructError::HandlerOnAttribute {
					tag: tag.to_string(),
					prop: name.to_string(),
				})?,
			},
			(_, PropValue::Children(_)) => reject(ConstructError::MisplacedChildren {
				tag: tag.to_string(),
				prop: name.to_string(),
			})?,
			(KEY, value) => {
				if let Some(key) = scalar_text(&value) {
					element.set_key(key);
				}
			}
			(CLASS_NAME, value) => {
				let class = value.to_class_value();
				if !class.is_empty_output() {
					element.add_attr("class", class_names(&class));
				}
			}
			(_, value) => {
				let attr_name = match &*name {
					HTML_FOR => Cow::Borrowed("for"),
					_ => name.clone(),
				};
				if !is_valid_attr_name(&attr_name) {
					reject(ConstructError::InvalidAttributeName {
						tag: tag.to_string(),
						name: name.to_string(),
					})?;
					continue;
				}
				if let Some(attr_value) = attribute_value(&attr_name, value) {
					element.add_attr(attr_name, attr_value);
				}
			}
		}
	}

	let children = merge_children(tag, children, prop_children, reject)?;
	if element.is_void() {
		if children.iter().any(|child| !matches!(child, Page::Empty)) {
			reject(ConstructError::VoidElementChildren {
				tag: tag.to_string(),
			})?;
		}
	} else {
		for child in children {
			element.add_child(child);
		}
	}
	Ok(element)
}

fn component<E, R>(
	component: &ComponentRef,
	props: Option<Props>,
	children: Vec<Page>,
	reject: &R,
) -> Result<Page, E>
where
	R: Fn(ConstructError) -> Result<(), E>,
{
	let mut props = props.unwrap_or_default();
	if !children.is_empty() {
		if props.contains(CHILDREN) {
			reject(ConstructError::ConflictingChildren {
				element: component.name().to_string(),
			})?;
		}
		props.set(CHILDREN, PropValue::Children(children));
	}
	Ok(Page::Component(ComponentElement::new(
		Arc::clone(component),
		props,
	)))
}

fn fragment<E, R>(props: Option<Props>, children: Vec<Page>, reject: &R) -> Result<Page, E>
where
	R: Fn(ConstructError) -> Result<(), E>,
{
	let mut prop_children = None;
	for (name, value) in props.into_iter().flatten() {
		match (&*name, value) {
			(KEY, _) => {}
			(CHILDREN, value) => match children_prop(value) {
				Some(nodes) => prop_children = Some(nodes),
				None => reject(ConstructError::MisplacedChildren {
					tag: "Fragment".to_string(),
					prop: name.to_string(),
				})?,
			},
			_ => reject(ConstructError::FragmentProp {
				prop: name.to_string(),
			})?,
		}
	}
	let children = merge_children("Fragment", children, prop_children, reject)?;
	Ok(Page::Fragment(children))
}

/// Reads a `children` property of an element or fragment.
///
/// Text and numbers stand for one text child and booleans for an empty one.
/// Handlers and class values cannot be children.
fn children_prop(value: PropValue) -> Option<Vec<Page>> {
	match value {
		PropValue::Children(nodes) => Some(nodes),
		PropValue::Bool(_) => Some(vec![Page::Empty]),
		value @ (PropValue::Text(_) | PropValue::Number(_) | PropValue::Integer(_)) => {
			scalar_text(&value).map(|text| vec![Page::Text(text)])
		}
		PropValue::Class(_) | PropValue::Handler(_) => None,
	}
}

/// Positional children win; a `children` property is only used when there are none.
fn merge_children<E, R>(
	element: &str,
	positional: Vec<Page>,
	from_prop: Option<Vec<Page>>,
	reject: &R,
) -> Result<Vec<Page>, E>
where
	R: Fn(ConstructError) -> Result<(), E>,
{
	match from_prop {
		None => Ok(positional),
		Some(nodes) if positional.is_empty() => Ok(nodes),
		Some(_) => {
			reject(ConstructError::ConflictingChildren {
				element: element.to_string(),
			})?;
			Ok(positional)
		}
	}
}

fn attribute_value(name: &str, value: PropValue) -> Option<Cow<'static, str>> {
	match value {
		PropValue::Bool(flag) if is_stringified_bool(name) => {
			Some(Cow::Borrowed(if flag { "true" } else { "false" }))
		}
		PropValue::Bool(true) => {
			if BOOLEAN_ATTRS.contains(&name) {
				Some(Cow::Owned(name.to_string()))
			} else {
				Some(Cow::Borrowed("true"))
			}
		}
		PropValue::Bool(false) => None,
		value => scalar_text(&value),
	}
}

/// `aria-*` and `data-*` attributes render booleans as `"true"`/`"false"`.
fn is_stringified_bool(name: &str) -> bool {
	name.starts_with("aria-") || name.starts_with("data-")
}

fn scalar_text(value: &PropValue) -> Option<Cow<'static, str>> {
	match value {
		PropValue::Text(s) => Some(s.clone()),
		PropValue::Bool(b) => Some(Cow::Owned(b.to_string())),
		PropValue::Number(n) => Some(Cow::Owned(n.to_string())),
		PropValue::Integer(n) => Some(Cow::Owned(n.to_string())),
		PropValue::Class(class) => Some(Cow::Owned(class_names(class))),
		PropValue::Handler(_) | PropValue::Children(_) => None,
	}
}
