//! Subcommand implementations.
//!
//! Output goes to the supplied writer so the commands can be exercised
//! without a terminal.

use std::io::Write;

use anyhow::{Context, Result};
use cudamake_events::{Event, list_events, params_for};
use cudamake_scaffold::{INDENT, PluginConfig, WriteOptions, handler_params, stubs_for, write_plugin};
use tracing::debug;

use crate::cli::{Command, NewArgs};

pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
	match command {
		Command::Events { params } => events(params, out),
		Command::Params { event } => params(&event, out),
		Command::Stub { events } => stub(&events, out),
		Command::New(args) => new(args, out),
	}
}

fn events(with_params: bool, out: &mut impl Write) -> Result<()> {
	let names = list_events();
	let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
	for name in names {
		match params_for(name).filter(|_| with_params) {
			Some(spec) => writeln!(out, "{name:<width$}  {spec}")?,
			None => writeln!(out, "{name}")?,
		}
	}
	Ok(())
}

fn params(name: &str, out: &mut impl Write) -> Result<()> {
	let event: Event = name.parse()?;
	writeln!(out, "{}", handler_params(event).join(", "))?;
	Ok(())
}

fn stub(names: &[String], out: &mut impl Write) -> Result<()> {
	let events = names
		.iter()
		.map(|n| n.parse::<Event>())
		.collect::<Result<Vec<_>, _>>()?;
	debug!(count = events.len(), "rendering stubs");

	for (i, stub) in stubs_for(events).iter().enumerate() {
		if i > 0 {
			writeln!(out)?;
		}
		write!(out, "{}", stub.render(INDENT))?;
	}
	Ok(())
}

fn new(args: NewArgs, out: &mut impl Write) -> Result<()> {
	let config = match &args.config {
		Some(path) => PluginConfig::load(path)
			.with_context(|| format!("failed to load {}", path.display()))?,
		None => {
			let name = args.name.context("--name is required without --config")?;
			let title = args.title.unwrap_or_else(|| name.clone());
			let mut config = PluginConfig::new(name, title);
			for event in &args.events {
				config.subscribe(event)?;
			}
			config
		}
	};

	let dir = write_plugin(&config, &args.out, WriteOptions { force: args.force })?;
	writeln!(out, "created {}", dir.display())?;
	Ok(())
}
