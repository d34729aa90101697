//! Writing a rendered plugin to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::PluginConfig;
use crate::error::{Result, ScaffoldError};
use crate::render::{render_install_inf, render_module};

/// Name of the generated module file.
pub const MODULE_FILE: &str = "__init__.py";
/// Name of the generated manifest file.
pub const MANIFEST_FILE: &str = "install.inf";

/// Options for [`write_plugin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
	/// Overwrite generated files in an existing plugin directory.
	pub force: bool,
}

/// Validates `config` and writes `out_dir/<name>/{__init__.py,install.inf}`.
///
/// Returns the plugin directory. An existing directory is an error unless
/// [`WriteOptions::force`] is set; files other than the generated ones are
/// left untouched. A directory created by this call is removed again if
/// any file fails to write.
pub fn write_plugin(config: &PluginConfig, out_dir: &Path, opts: WriteOptions) -> Result<PathBuf> {
	config.validate()?;

	let dir = out_dir.join(&config.name);
	let existed = dir.exists();
	if existed {
		if !opts.force {
			return Err(ScaffoldError::AlreadyExists(dir));
		}
		warn!(dir = %dir.display(), "overwriting existing plugin");
	}
	fs::create_dir_all(&dir).map_err(|e| ScaffoldError::io(&dir, e))?;

	let files = [
		(MODULE_FILE, render_module(config)),
		(MANIFEST_FILE, render_install_inf(config)),
	];
	write_files(&dir, &files, !existed)?;

	info!(
		plugin = %config.name,
		dir = %dir.display(),
		events = config.events.len(),
		"plugin written"
	);
	Ok(dir)
}

/// Writes `files` into `dir`, removing `dir` on failure when `created`.
fn write_files(dir: &Path, files: &[(&str, String)], created: bool) -> Result<()> {
	for (file, contents) in files {
		let path = dir.join(file);
		if let Err(e) = fs::write(&path, contents) {
			if created && let Err(cleanup) = fs::remove_dir_all(dir) {
				warn!(dir = %dir.display(), error = %cleanup, "failed to remove partial plugin");
			}
			return Err(ScaffoldError::io(&path, e));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_write_removes_created_dir() {
		let out = tempfile::tempdir().unwrap();
		let dir = out.path().join("cuda_partial");
		fs::create_dir(&dir).unwrap();

		let files = [
			(MODULE_FILE, "pass\n".to_string()),
			("missing/install.inf", String::new()),
		];
		let err = write_files(&dir, &files, true).unwrap_err();
		assert!(matches!(err, ScaffoldError::Io { .. }), "{err:?}");
		assert!(!dir.exists());
	}

	#[test]
	fn failed_write_keeps_existing_dir() {
		let out = tempfile::tempdir().unwrap();
		let dir = out.path().join("cuda_partial");
		fs::create_dir(&dir).unwrap();
		fs::write(dir.join("notes.txt"), "mine").unwrap();

		let files = [("missing/install.inf", String::new())];
		assert!(write_files(&dir, &files, false).is_err());
		assert_eq!(fs::read_to_string(dir.join("notes.txt")).unwrap(), "mine");
	}
}
