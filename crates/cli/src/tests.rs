use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Command};
use crate::run::run;

fn output(args: &[&str]) -> anyhow::Result<String> {
	let cli = Cli::try_parse_from(std::iter::once("cudamake").chain(args.iter().copied()))?;
	let mut out = Vec::new();
	run(cli.command, &mut out)?;
	Ok(String::from_utf8(out)?)
}

#[test]
fn cli_definition_is_valid() {
	Cli::command().debug_assert();
}

#[test]
fn events_lists_names_in_order() {
	let out = output(&["events"]).unwrap();
	let lines: Vec<_> = out.lines().collect();
	assert_eq!(lines.len(), 40);
	assert_eq!(lines[0], "on_caret");
	assert_eq!(lines[39], "on_tab_move");
}

#[test]
fn events_with_params() {
	let out = output(&["events", "--params"]).unwrap();
	let paste = out.lines().find(|l| l.starts_with("on_paste ")).unwrap();
	assert!(paste.ends_with("  keep_caret, select_then"), "{paste}");
	assert!(out.lines().any(|l| l == "on_save"));
}

#[test]
fn params_prints_full_handler_params() {
	assert_eq!(output(&["params", "on_mouse_stop"]).unwrap(), "self, ed_self, x, y\n");
	assert_eq!(output(&["params", "on_save"]).unwrap(), "self, ed_self\n");
}

#[test]
fn params_rejects_unknown_event() {
	let err = output(&["params", "on_svae"]).unwrap_err();
	assert_eq!(err.to_string(), "unknown event `on_svae` (did you mean `on_save`?)");
}

#[test]
fn stub_renders_each_event_once() {
	assert_eq!(
		output(&["stub", "on_open", "on_insert", "on_open"]).unwrap(),
		"    def on_open(self, ed_self):\n        pass\n\n    def on_insert(self, ed_self, text):\n        pass\n"
	);
}

#[test]
fn stub_requires_an_event() {
	assert!(Cli::try_parse_from(["cudamake", "stub"]).is_err());
}

#[test]
fn new_parses_inline_plugin() {
	let cli = Cli::try_parse_from([
		"cudamake", "new", "--name", "cuda_x", "-e", "on_open", "-e", "on_key", "--force",
	])
	.unwrap();
	let Command::New(args) = cli.command else {
		panic!("expected new");
	};
	assert_eq!(args.name.as_deref(), Some("cuda_x"));
	assert_eq!(args.events, ["on_open", "on_key"]);
	assert_eq!(args.out, std::path::PathBuf::from("."));
	assert!(args.force);
}

#[test]
fn new_config_conflicts_with_inline_fields() {
	assert!(Cli::try_parse_from(["cudamake", "new", "--config", "p.toml", "--name", "cuda_x"]).is_err());
	assert!(Cli::try_parse_from(["cudamake", "new"]).is_err());
}

#[test]
fn verbose_is_global() {
	let cli = Cli::try_parse_from(["cudamake", "events", "-v"]).unwrap();
	assert!(cli.verbose);
}

#[test]
fn new_writes_plugin_from_flags() {
	let out = tempfile::tempdir().unwrap();
	let out_dir = out.path().to_str().unwrap();

	let printed = output(&[
		"new", "--name", "cuda_demo", "-e", "on_open", "-e", "on_paste", "-o", out_dir,
	])
	.unwrap();
	let dir = out.path().join("cuda_demo");
	assert_eq!(printed, format!("created {}\n", dir.display()));

	let module = std::fs::read_to_string(dir.join("__init__.py")).unwrap();
	assert!(module.contains("    def on_paste(self, ed_self, keep_caret, select_then):\n"));
	let inf = std::fs::read_to_string(dir.join("install.inf")).unwrap();
	assert!(inf.contains("title=cuda_demo\n"));
	assert!(inf.contains("events=on_open,on_paste\n"));

	let err = output(&["new", "--name", "cuda_demo", "-o", out_dir]).unwrap_err();
	assert!(err.to_string().contains("already exists"), "{err}");
}

#[test]
fn new_writes_plugin_from_config() {
	let out = tempfile::tempdir().unwrap();
	let config = out.path().join("plugin.toml");
	std::fs::write(
		&config,
		"name = \"cuda_cfg\"\ntitle = \"Cfg\"\n\n[[commands]]\ncaption = \"Run\"\nmethod = \"run\"\n",
	)
	.unwrap();

	output(&["new", "-c", config.to_str().unwrap(), "-o", out.path().to_str().unwrap()]).unwrap();
	let inf = std::fs::read_to_string(out.path().join("cuda_cfg").join("install.inf")).unwrap();
	assert!(inf.contains("caption=Cfg\\Run\nmethod=run\n"));
}
