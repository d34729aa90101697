//! Error types for plugin scaffolding.

use std::path::PathBuf;

use cudamake_events::UnknownEvent;
use thiserror::Error;

/// Errors that can occur while loading a plugin config or writing a plugin.
#[derive(Debug, Error)]
pub enum ScaffoldError {
	/// Error reading or writing a file.
	#[error("I/O error at {path}: {error}")]
	Io {
		/// Path of the file or directory involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The config file is not valid TOML or does not match the schema.
	#[error("invalid plugin config: {0}")]
	Parse(#[from] toml::de::Error),

	/// The config parsed but describes an unusable plugin.
	#[error("invalid plugin config: {0}")]
	Invalid(String),

	/// An event name is not in the registry.
	#[error(transparent)]
	Event(#[from] UnknownEvent),

	/// The plugin directory exists and overwriting was not requested.
	#[error("{} already exists (use --force to overwrite)", .0.display())]
	AlreadyExists(PathBuf),
}

impl ScaffoldError {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			error,
		}
	}
}

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
