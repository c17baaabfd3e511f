use herald_primitives::ReplyPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing reply settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The TOML input was malformed or had unexpected keys.
	#[error("invalid discord settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Global reply behavior applied when a command has no override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscordSettings {
	/// Defer every reply as ephemeral.
	pub force_defer_ephemeral: bool,
	/// Defer every reply publicly. Ignored when `force_defer_ephemeral` is set.
	pub force_defer_non_ephemeral: bool,
}

impl DiscordSettings {
	/// Parses settings from a TOML table.
	pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(input)?)
	}

	/// Returns the policy used when a command does not override it.
	///
	/// Ephemeral deferral wins over public deferral, which wins over replying directly.
	pub const fn fallback_policy(&self) -> ReplyPolicy {
		if self.force_defer_ephemeral {
			ReplyPolicy::deferred(true)
		} else if self.force_defer_non_ephemeral {
			ReplyPolicy::deferred(false)
		} else {
			ReplyPolicy::not_deferred()
		}
	}
}
