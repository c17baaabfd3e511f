use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string could not be read as a snowflake id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid snowflake id")]
pub struct IdParseError {
	/// The rejected input.
	pub input: String,
}

macro_rules! snowflake_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub u64);

		impl $name {
			/// Returns the underlying u64 value.
			#[inline]
			pub const fn get(self) -> u64 {
				self.0
			}
		}

		impl From<u64> for $name {
			fn from(raw: u64) -> Self {
				Self(raw)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl FromStr for $name {
			type Err = IdParseError;

			/// Accepts decimal digits only; signs and whitespace are rejected.
			fn from_str(s: &str) -> Result<Self, Self::Err> {
				if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
					return Err(IdParseError { input: s.to_string() });
				}
				s.parse::<u64>().map(Self).map_err(|_| IdParseError { input: s.to_string() })
			}
		}
	};
}

snowflake_id! {
	/// Identifier of a guild (community server).
	GuildId
}

snowflake_id! {
	/// Identifier of a role inside a guild.
	RoleId
}

snowflake_id! {
	/// Identifier of an inbound interaction.
	InteractionId
}
