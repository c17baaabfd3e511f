use serde::{Deserialize, Serialize};

use crate::ids::{GuildId, RoleId};

/// A role defined inside a guild.
///
/// Owned by the role directory; resolvers hand out shared references to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildRole {
	/// Stable role id.
	pub id: RoleId,
	/// Guild that defines the role.
	pub guild_id: GuildId,
	/// Display name. Not unique within a guild.
	pub name: String,
}

impl GuildRole {
	/// Creates a role value.
	pub fn new(guild_id: GuildId, id: RoleId, name: impl Into<String>) -> Self {
		Self {
			id,
			guild_id,
			name: name.into(),
		}
	}

	/// Returns the mention syntax that refers to this role.
	pub fn mention(&self) -> String {
		format!("<@&{}>", self.id)
	}
}
