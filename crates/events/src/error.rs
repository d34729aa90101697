//! Error types for event lookups and registry integrity checks.

use thiserror::Error;

use crate::Event;

/// A name that is not in the event registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
	"unknown event `{name}`{}",
	.suggestion.map(|s| format!(" (did you mean `{s}`?)")).unwrap_or_default()
)]
pub struct UnknownEvent {
	/// The rejected name.
	pub name: String,
	/// Closest registered name, if any is similar enough.
	pub suggestion: Option<&'static str>,
}

impl UnknownEvent {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		let suggestion = Event::suggest(&name);
		Self { name, suggestion }
	}
}

/// Defects in authored registry data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
	/// An event name appears more than once in the event list.
	#[error("event `{0}` is listed more than once")]
	DuplicateEvent(String),

	/// An event has more than one parameter spec.
	#[error("event `{0}` has more than one parameter spec")]
	DuplicateParamKey(String),

	/// A parameter spec refers to an event missing from the event list.
	#[error("parameter spec for `{0}` has no matching event")]
	DanglingParamKey(String),

	/// A parameter spec declares no parameters.
	#[error("parameter spec for `{0}` is empty")]
	EmptyParamSpec(String),

	/// A declared parameter is not a valid identifier.
	#[error("parameter `{param}` of `{event}` is not a valid identifier")]
	InvalidParamName {
		/// Event owning the spec.
		event: String,
		/// The offending entry, as written.
		param: String,
	},
}

/// Result type for registry integrity checks.
pub type Result<T> = std::result::Result<T, IntegrityError>;
