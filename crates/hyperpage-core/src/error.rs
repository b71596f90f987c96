//! Errors raised by the strict host when a node cannot be constructed.

/// Reasons [`crate::host::StrictHost`] refuses to construct a node.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructError {
	/// The tag name is empty or contains characters not allowed in tag names.
	#[error("invalid tag name: {0:?}")]
	InvalidTagName(String),
	/// A property name cannot be rendered as an attribute.
	#[error("invalid attribute name {name:?} on <{tag}>")]
	InvalidAttributeName {
		/// Element tag.
		tag: String,
		/// Offending property name.
		name: String,
	},
	/// A void element such as `<br>` was given children.
	#[error("<{tag}> is a void element and cannot have children")]
	VoidElementChildren {
		/// Element tag.
		tag: String,
	},
	/// An `on*` property names an event that does not exist.
	#[error("unknown event handler property {prop:?} on <{tag}>")]
	UnknownEvent {
		/// Element tag.
		tag: String,
		/// Offending property name.
		prop: String,
	},
	/// A handler was given for a property that is not an event.
	#[error("property {prop:?} on <{tag}> is not an event but was given a handler")]
	HandlerOnAttribute {
		/// Element tag.
		tag: String,
		/// Offending property name.
		prop: String,
	},
	/// Nodes were given under a property other than `children`.
	#[error("property {prop:?} on <{tag}> holds child nodes")]
	MisplacedChildren {
		/// Element tag.
		tag: String,
		/// Offending property name.
		prop: String,
	},
	/// Children were passed both positionally and through the `children` property.
	#[error("{element} received children both positionally and as a property")]
	ConflictingChildren {
		/// Element tag or component name.
		element: String,
	},
	/// A fragment was given a property other than `key`.
	#[error("fragments only accept a key, got {prop:?}")]
	FragmentProp {
		/// Offending property name.
		prop: String,
	},
}
