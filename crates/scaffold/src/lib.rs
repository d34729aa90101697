#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Plugin scaffolding for editor events.
//!
//! Turns a [`PluginConfig`] into a plugin directory: a Python module whose
//! `Command` class has one handler per subscribed event, with the handler
//! signatures taken from [`cudamake_events`], and the `install.inf` manifest
//! that registers the commands and events with the editor.

mod config;
mod error;
mod render;
mod stub;
mod write;

pub use config::{
	CommandConfig, PLUGIN_PREFIX, PYTHON_KEYWORDS, PluginConfig, is_reserved_method,
};
pub use error::{Result, ScaffoldError};
pub use render::{INDENT, render_install_inf, render_module};
pub use stub::{DEFAULT_PARAMS, HandlerStub, handler_params, stubs_for};
pub use write::{MANIFEST_FILE, MODULE_FILE, WriteOptions, write_plugin};
