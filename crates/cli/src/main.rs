#![cfg_attr(test, allow(unused_crate_dependencies))]
//! `cudamake`: inspect the editor event registry and scaffold plugins.

mod cli;
mod run;
#[cfg(test)]
mod tests;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let stdout = std::io::stdout();
	run::run(cli.command, &mut stdout.lock())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("cudamake=debug,cudamake_scaffold=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
