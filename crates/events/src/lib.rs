#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editor event registry.
//!
//! The host editor calls plugin handlers named after lifecycle events
//! (`on_open`, `on_key`, ...). Every handler receives a fixed set of implicit
//! arguments; some events pass extra ones, listed here per event. The
//! registry is static data: it does not dispatch or validate calls.
//!
//! # Lookups
//!
//! ```
//! use cudamake_events::{Event, list_events, params_for};
//!
//! assert_eq!(list_events()[0], "on_caret");
//! assert_eq!(params_for("on_paste"), Some("keep_caret, select_then"));
//! assert_eq!(params_for("on_save"), None);
//! assert_eq!(Event::Key.params(), ["key", "state"]);
//! ```

#[macro_use]
mod macros;
mod error;
mod integrity;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use error::{IntegrityError, Result, UnknownEvent};
pub use integrity::{check_integrity, is_identifier, split_param_spec, verify_registry};

define_events! {
	/// Caret position or selection changed.
	Caret => "on_caret",
	/// Text was modified.
	Change => "on_change",
	/// Text was modified and the editor has been idle for a while.
	ChangeSlow => "on_change_slow",
	/// Mouse click in the text area.
	Click => "on_click" (state),
	/// Mouse double-click in the text area.
	ClickDbl => "on_click_dbl" (state),
	/// Click on an inter-line gap item.
	ClickGap => "on_click_gap" (state, nline, ntag, size_x, size_y, pos_x, pos_y),
	/// Click on a gutter band.
	ClickGutter => "on_click_gutter" (state, nline, nband),
	/// Click on a highlighted link.
	ClickLink => "on_click_link" (state, link),
	/// Editor tab was closed.
	Close => "on_close",
	/// Editor tab is about to close.
	ClosePre => "on_close_pre",
	/// Auto-completion was requested.
	Complete => "on_complete",
	/// Double-click in the console output.
	ConsoleNav => "on_console_nav" (text),
	/// Application is exiting.
	Exit => "on_exit",
	/// Editor received focus.
	Focus => "on_focus",
	/// Function hint was requested.
	FuncHint => "on_func_hint",
	/// Go-to-definition was requested.
	GotoDef => "on_goto_def",
	/// Enter pressed in a goto dialog.
	GotoEnter => "on_goto_enter" (text),
	/// Mouse entered or left a hotspot.
	Hotspot => "on_hotspot" (entered, hotspot_index),
	/// Text is about to be typed.
	Insert => "on_insert" (text),
	/// Key pressed.
	Key => "on_key" (key, state),
	/// Key released.
	KeyUp => "on_key_up" (key, state),
	/// Lexer of the document changed.
	Lexer => "on_lexer",
	/// Lexer finished parsing the document.
	LexerParsed => "on_lexer_parsed",
	/// Macro recording stopped.
	Macro => "on_macro" (text),
	/// Mouse stopped moving over the editor.
	MouseStop => "on_mouse_stop" (x, y),
	/// File was opened.
	Open => "on_open",
	/// Application started with no file opened.
	OpenNone => "on_open_none",
	/// File is about to be opened.
	OpenPre => "on_open_pre" (filename),
	/// Double-click in the output panel.
	OutputNav => "on_output_nav" (text, tag),
	/// Clipboard paste is about to happen.
	Paste => "on_paste" (keep_caret, select_then),
	/// File was saved.
	Save => "on_save",
	/// File is about to be saved.
	SavePre => "on_save_pre",
	/// Untitled document needs a file name on save.
	SaveNaming => "on_save_naming",
	/// Editor scrolled.
	Scroll => "on_scroll",
	/// Snippet insertion was requested.
	Snippet => "on_snippet" (snippet_id, snippet_text),
	/// Application started.
	Start => "on_start",
	/// Application state changed.
	State => "on_state" (state),
	/// Editor state changed.
	StateEd => "on_state_ed" (state),
	/// Active tab changed.
	TabChange => "on_tab_change",
	/// Tab was moved.
	TabMove => "on_tab_move",
}

/// Canonical event names, in registry order.
pub fn list_events() -> &'static [&'static str] {
	&EVENTS
}

/// The extra-parameter spec declared for `event_name`.
///
/// `None` covers both events without extra parameters and unknown names;
/// callers that care about the difference use [`Event::lookup`].
pub fn params_for(event_name: &str) -> Option<&'static str> {
	EVENT_PARAMS
		.iter()
		.find(|(name, _)| *name == event_name)
		.map(|(_, spec)| *spec)
}

/// Structured form of [`params_for`].
pub fn params_list_for(event_name: &str) -> Option<&'static [&'static str]> {
	Event::lookup(event_name)
		.map(Event::params)
		.filter(|params| !params.is_empty())
}

impl Event {
	/// Whether the handler takes parameters beyond the implicit defaults.
	pub const fn has_params(self) -> bool {
		!self.params().is_empty()
	}

	/// Iterates over every event in registry order.
	pub fn iter() -> impl ExactSizeIterator<Item = Event> {
		Self::ALL.into_iter()
	}

	/// Closest registered name to `name`, for "did you mean" hints.
	pub fn suggest(name: &str) -> Option<&'static str> {
		EVENTS
			.iter()
			.copied()
			.min_by_key(|known| strsim::levenshtein(name, known))
			.filter(|known| strsim::levenshtein(name, known) <= 3)
	}
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Event {
	type Err = UnknownEvent;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Event::lookup(s).ok_or_else(|| UnknownEvent::new(s))
	}
}

impl Serialize for Event {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Event {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let name = String::deserialize(deserializer)?;
		name.parse().map_err(serde::de::Error::custom)
	}
}
