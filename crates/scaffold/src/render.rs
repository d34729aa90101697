//! Rendering of the plugin module and its `install.inf` manifest.

use std::fmt::Write as _;

use tracing::debug;

use crate::config::PluginConfig;
use crate::stub::stubs_for;

/// Indentation used in generated Python code.
pub const INDENT: &str = "    ";

/// Renders `__init__.py`: a `Command` class with one method per menu
/// command followed by one handler per subscribed event.
pub fn render_module(config: &PluginConfig) -> String {
	let mut out = String::new();
	out.push_str("import os\n");
	out.push_str("from cudatext import *\n");
	out.push_str("\n\n");
	out.push_str("class Command:\n");
	out.push('\n');
	let _ = writeln!(out, "{INDENT}def __init__(self):");
	let _ = writeln!(out, "{INDENT}{INDENT}pass");

	for cmd in &config.commands {
		out.push('\n');
		let _ = writeln!(out, "{INDENT}def {}(self):", cmd.method);
		let _ = writeln!(out, "{INDENT}{INDENT}pass");
	}

	let stubs = stubs_for(config.events.iter().copied());
	for stub in &stubs {
		out.push('\n');
		out.push_str(&stub.render(INDENT));
	}

	debug!(
		plugin = %config.name,
		commands = config.commands.len(),
		handlers = stubs.len(),
		"rendered module"
	);
	out
}

/// Renders `install.inf`.
///
/// Commands become `[itemN]` entries under the plugin's menu title; events,
/// when any are subscribed, become a single trailing `section=events` item.
pub fn render_install_inf(config: &PluginConfig) -> String {
	let mut out = String::new();
	out.push_str("[info]\n");
	let _ = writeln!(out, "title={}", config.title);
	let _ = writeln!(out, "desc={}", config.description);
	out.push_str("type=cudatext-plugin\n");
	let _ = writeln!(out, "subdir={}", config.name);
	let _ = writeln!(out, "homepage={}", config.homepage);

	let mut item = 0;
	for cmd in &config.commands {
		item += 1;
		let _ = write!(out, "\n[item{item}]\n");
		out.push_str("section=commands\n");
		let _ = writeln!(out, "caption={}\\{}", config.title, cmd.caption);
		let _ = writeln!(out, "method={}", cmd.method);
	}

	if !config.events.is_empty() {
		item += 1;
		let names: Vec<_> = config.events.iter().map(|e| e.as_str()).collect();
		let _ = write!(out, "\n[item{item}]\n");
		out.push_str("section=events\n");
		let _ = writeln!(out, "events={}", names.join(","));
	}

	debug!(plugin = %config.name, items = item, "rendered install.inf");
	out
}
