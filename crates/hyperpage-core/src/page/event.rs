//! DOM event types and handlers.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Event handler attached to an element.
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync + 'static>;

/// Error returned when an event name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct ParseEventTypeError(pub String);

macro_rules! event_types {
	($($variant:ident => $name:literal),* $(,)?) => {
		/// DOM event types that handlers can be attached to.
		#[non_exhaustive]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum EventType {
			$(
				#[doc = concat!("The `", $name, "` event.")]
				$variant,
			)*
		}

		impl EventType {
			/// Returns the DOM event name (e.g. `"click"`).
			pub fn as_str(&self) -> &'static str {
				match self {
					$(EventType::$variant => $name,)*
				}
			}
		}

		impl FromStr for EventType {
			type Err = ParseEventTypeError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($name => Ok(EventType::$variant),)*
					_ => Err(ParseEventTypeError(s.to_string())),
				}
			}
		}
	};
}

event_types! {
	Click => "click",
	DblClick => "dblclick",
	ContextMenu => "contextmenu",
	MouseDown => "mousedown",
	MouseUp => "mouseup",
	MouseEnter => "mouseenter",
	MouseLeave => "mouseleave",
	MouseMove => "mousemove",
	MouseOver => "mouseover",
	MouseOut => "mouseout",
	KeyDown => "keydown",
	KeyUp => "keyup",
	KeyPress => "keypress",
	Focus => "focus",
	Blur => "blur",
	Input => "input",
	Change => "change",
	Submit => "submit",
	Reset => "reset",
	Scroll => "scroll",
	Wheel => "wheel",
	Load => "load",
	Error => "error",
	TouchStart => "touchstart",
	TouchEnd => "touchend",
	TouchMove => "touchmove",
	DragStart => "dragstart",
	Drag => "drag",
	DragEnd => "dragend",
	Drop => "drop",
}

impl EventType {
	/// Parses a React-style handler property name such as `onClick`.
	///
	/// The `on` prefix must be followed by an uppercase letter; the rest is
	/// lowercased to the DOM name. `onDoubleClick` maps to `dblclick`.
	pub fn from_prop_name(prop: &str) -> Result<Self, ParseEventTypeError> {
		let rest = prop
			.strip_prefix("on")
			.filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
			.ok_or_else(|| ParseEventTypeError(prop.to_string()))?;
		if rest == "DoubleClick" {
			return Ok(EventType::DblClick);
		}
		rest.to_ascii_lowercase()
			.parse()
			.map_err(|_| ParseEventTypeError(prop.to_string()))
	}

	/// Returns `true` if `prop` looks like an event handler property (`on` + uppercase).
	pub fn is_handler_prop(prop: &str) -> bool {
		prop.strip_prefix("on")
			.is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The event passed to handlers when an element dispatches an event.
#[derive(Debug)]
pub struct Event {
	event_type: EventType,
	default_prevented: Cell<bool>,
}

impl Event {
	/// Creates an event of the given type.
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			default_prevented: Cell::new(false),
		}
	}

	/// Returns the event type.
	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	/// Marks the event's default action as cancelled.
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	/// Returns `true` if a handler called [`Event::prevent_default`].
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}
