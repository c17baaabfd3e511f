//! Configuration file for the command pipeline.
//!
//! ```toml
//! [discord]
//! force_defer_ephemeral = true
//!
//! [messages]
//! not_in_guild = "Use this in a server."
//! ```

use std::path::{Path, PathBuf};

use herald_reply::DiscordSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file is not valid configuration TOML.
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// User-facing texts for failures that must not be shown raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
	/// Shown when a command is used outside a guild.
	pub not_in_guild: String,
	/// Shown when the dispatcher is miswired.
	pub internal_error: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			not_in_guild: "This command can only be used inside a server.".to_string(),
			internal_error: "An internal error occurred while running this command.".to_string(),
		}
	}
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeraldConfig {
	/// Global reply settings.
	pub discord: DiscordSettings,
	/// Failure texts.
	pub messages: Messages,
}

impl HeraldConfig {
	/// Parses configuration from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), "config.loaded");
		Ok(config)
	}
}
