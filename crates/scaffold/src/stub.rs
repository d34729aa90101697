//! Handler signature generation.
//!
//! Every handler is a method on the plugin's `Command` class and receives
//! [`DEFAULT_PARAMS`] before the event's own parameters.

use std::fmt::Write as _;

use cudamake_events::Event;

/// Parameters every handler receives, ahead of the event's extra ones.
pub const DEFAULT_PARAMS: &[&str] = &["self", "ed_self"];

/// Full parameter list of the handler for `event`.
pub fn handler_params(event: Event) -> Vec<&'static str> {
	DEFAULT_PARAMS
		.iter()
		.chain(event.params())
		.copied()
		.collect()
}

/// A generated event handler method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerStub {
	pub event: Event,
	pub params: Vec<&'static str>,
}

impl HandlerStub {
	pub fn new(event: Event) -> Self {
		Self {
			event,
			params: handler_params(event),
		}
	}

	/// The `def` line, e.g. `def on_key(self, ed_self, key, state):`.
	pub fn signature(&self) -> String {
		format!("def {}({}):", self.event, self.params.join(", "))
	}

	/// Renders the method one `indent` deep, with a `pass` body.
	pub fn render(&self, indent: &str) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "{indent}{}", self.signature());
		let _ = writeln!(out, "{indent}{indent}pass");
		out
	}
}

/// Stubs for `events` in the given order; repeated events are emitted once.
pub fn stubs_for(events: impl IntoIterator<Item = Event>) -> Vec<HandlerStub> {
	let mut stubs: Vec<HandlerStub> = Vec::new();
	for event in events {
		if stubs.iter().all(|s| s.event != event) {
			stubs.push(HandlerStub::new(event));
		}
	}
	stubs
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn defaults_only_for_plain_event() {
		assert_eq!(handler_params(Event::Save), ["self", "ed_self"]);
	}

	#[test]
	fn extra_params_follow_defaults() {
		assert_eq!(
			handler_params(Event::ClickGutter),
			["self", "ed_self", "state", "nline", "nband"]
		);
	}

	#[test]
	fn render_stub() {
		let stub = HandlerStub::new(Event::Paste);
		assert_eq!(
			stub.render("    "),
			"    def on_paste(self, ed_self, keep_caret, select_then):\n        pass\n"
		);
	}

	#[test]
	fn stubs_skip_repeats() {
		let stubs = stubs_for([Event::Key, Event::Open, Event::Key]);
		let events: Vec<_> = stubs.iter().map(|s| s.event).collect();
		assert_eq!(events, [Event::Key, Event::Open]);
	}
}
