//! Plugin description loaded from TOML.
//!
//! ```toml
//! name = "cuda_hello"
//! title = "Hello"
//! events = ["on_open", "on_key"]
//!
//! [[commands]]
//! caption = "Say hello"
//! method = "run"
//! ```

use std::collections::HashSet;
use std::path::Path;

use cudamake_events::{Event, is_identifier};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::stub::DEFAULT_PARAMS;

/// Required prefix of plugin module names.
pub const PLUGIN_PREFIX: &str = "cuda_";

/// Python keywords, which cannot name a generated method.
pub const PYTHON_KEYWORDS: &[&str] = &[
	"False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
	"continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
	"if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
	"try", "while", "with", "yield",
];

/// Whether `method` may not name a command method of the generated class.
///
/// Covers keywords, the handlers' default parameter names and dunder names,
/// which belong to the class protocol (`__init__` is always generated).
pub fn is_reserved_method(method: &str) -> bool {
	PYTHON_KEYWORDS.contains(&method)
		|| DEFAULT_PARAMS.contains(&method)
		|| (method.len() > 4 && method.starts_with("__") && method.ends_with("__"))
}

/// Checks a manifest value that is written as a single `key=value` line.
fn check_single_line(field: &str, value: &str) -> Result<()> {
	if value.contains(['\r', '\n']) {
		return Err(ScaffoldError::Invalid(format!("{field} must be a single line")));
	}
	Ok(())
}

/// Checks a manifest value that is also a menu path segment.
fn check_menu_text(field: &str, value: &str) -> Result<()> {
	check_single_line(field, value)?;
	if value.contains('\\') {
		return Err(ScaffoldError::Invalid(format!(
			"{field} `{value}` must not contain `\\` (menu path separator)"
		)));
	}
	Ok(())
}

/// A plugin to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
	/// Module directory name, e.g. `cuda_hello`.
	pub name: String,
	/// Human-readable title shown in the plugin menu.
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub homepage: String,
	/// Events the plugin subscribes to, in handler order.
	#[serde(default)]
	pub events: Vec<Event>,
	/// Menu commands the plugin provides.
	#[serde(default)]
	pub commands: Vec<CommandConfig>,
}

/// A menu command bound to a method of the plugin's `Command` class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
	pub caption: String,
	pub method: String,
}

impl PluginConfig {
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			description: String::new(),
			homepage: String::new(),
			events: Vec::new(),
			commands: Vec::new(),
		}
	}

	/// Reads, parses and validates a config file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
		debug!(path = %path.display(), "loading plugin config");
		Self::from_toml(&text)
	}

	/// Parses and validates a config from TOML text.
	pub fn from_toml(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Subscribes to an event by handler name.
	pub fn subscribe(&mut self, name: &str) -> Result<()> {
		let event: Event = name.parse()?;
		self.events.push(event);
		Ok(())
	}

	pub fn add_command(&mut self, caption: impl Into<String>, method: impl Into<String>) {
		self.commands.push(CommandConfig {
			caption: caption.into(),
			method: method.into(),
		});
	}

	/// Checks that the plugin can be rendered into a loadable module.
	pub fn validate(&self) -> Result<()> {
		let invalid = |msg: String| Err(ScaffoldError::Invalid(msg));

		if !self.name.starts_with(PLUGIN_PREFIX) || self.name.len() == PLUGIN_PREFIX.len() {
			return invalid(format!(
				"plugin name `{}` must start with `{PLUGIN_PREFIX}` followed by a name",
				self.name
			));
		}
		if !is_identifier(&self.name) {
			return invalid(format!("plugin name `{}` is not a valid module name", self.name));
		}
		if self.title.trim().is_empty() {
			return invalid("plugin title is empty".to_string());
		}
		check_menu_text("plugin title", &self.title)?;
		check_single_line("plugin description", &self.description)?;
		check_single_line("plugin homepage", &self.homepage)?;

		let mut events = HashSet::new();
		for event in &self.events {
			if !events.insert(event.as_str()) {
				return invalid(format!("event `{event}` is listed more than once"));
			}
		}

		let mut methods = HashSet::new();
		for cmd in &self.commands {
			if cmd.caption.trim().is_empty() {
				return invalid(format!("command `{}` has an empty caption", cmd.method));
			}
			check_menu_text("command caption", &cmd.caption)?;
			if !is_identifier(&cmd.method) {
				return invalid(format!("command method `{}` is not a valid identifier", cmd.method));
			}
			if is_reserved_method(&cmd.method) {
				return invalid(format!("command method `{}` is a reserved name", cmd.method));
			}
			if events.contains(cmd.method.as_str()) {
				return invalid(format!("command method `{}` shadows an event handler", cmd.method));
			}
			if !methods.insert(cmd.method.as_str()) {
				return invalid(format!("command method `{}` is defined more than once", cmd.method));
			}
		}

		Ok(())
	}
}
