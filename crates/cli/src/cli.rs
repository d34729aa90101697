use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cudamake")]
#[command(about = "Editor event registry and plugin scaffolder")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// List event names in registry order
	Events {
		/// Also show each event's extra handler parameters
		#[arg(long)]
		params: bool,
	},
	/// Print the full handler parameter list of an event
	Params {
		/// Event name, e.g. on_key
		event: String,
	},
	/// Print handler stubs for the given events
	Stub {
		/// Event names, e.g. on_open on_key
		#[arg(required = true)]
		events: Vec<String>,
	},
	/// Create a plugin directory
	New(NewArgs),
}

/// Arguments of `cudamake new`.
#[derive(clap::Args, Debug)]
pub struct NewArgs {
	/// Plugin config file (TOML)
	#[arg(long, short = 'c', value_name = "FILE", conflicts_with_all = ["name", "title", "events"])]
	pub config: Option<PathBuf>,

	/// Plugin module name, e.g. cuda_hello
	#[arg(long, required_unless_present = "config")]
	pub name: Option<String>,

	/// Plugin title (defaults to the module name)
	#[arg(long)]
	pub title: Option<String>,

	/// Event to subscribe to (repeatable)
	#[arg(long = "event", short = 'e', value_name = "EVENT")]
	pub events: Vec<String>,

	/// Directory the plugin directory is created in
	#[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
	pub out: PathBuf,

	/// Overwrite generated files if the plugin directory exists
	#[arg(long)]
	pub force: bool,
}
