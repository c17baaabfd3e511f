//! Guild role directory.
//!
//! Provides the [`DirectoryLookup`] capability that argument parsers resolve
//! roles through, and [`RoleDirectory`], an in-memory cache implementing it:
//!
//! ```rust,ignore
//! let directory = RoleDirectory::new();
//! directory.insert_role(GuildRole::new(guild, RoleId(123), "mods"));
//! assert!(directory.find_by_id(guild, RoleId(123)).is_some());
//! ```

use std::sync::Arc;

use herald_primitives::{GuildId, GuildRole, RoleId};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Role lookups scoped to one guild.
///
/// Implementations may be remote; callers own any timeout around a lookup.
pub trait DirectoryLookup: Send + Sync {
	/// Looks up a role by id.
	fn find_by_id(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>>;

	/// Returns every role whose name equals `name`.
	///
	/// Names are not unique, so callers must handle more than one match.
	fn find_by_name_exact(&self, guild: GuildId, name: &str, case_insensitive: bool) -> Vec<Arc<GuildRole>>;
}

impl<T: DirectoryLookup + ?Sized> DirectoryLookup for Arc<T> {
	fn find_by_id(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>> {
		(**self).find_by_id(guild, role)
	}

	fn find_by_name_exact(&self, guild: GuildId, name: &str, case_insensitive: bool) -> Vec<Arc<GuildRole>> {
		(**self).find_by_name_exact(guild, name, case_insensitive)
	}
}

impl<T: DirectoryLookup + ?Sized> DirectoryLookup for &T {
	fn find_by_id(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>> {
		(**self).find_by_id(guild, role)
	}

	fn find_by_name_exact(&self, guild: GuildId, name: &str, case_insensitive: bool) -> Vec<Arc<GuildRole>> {
		(**self).find_by_name_exact(guild, name, case_insensitive)
	}
}

/// Roles of a single guild with O(1) lookup by id or case-folded name.
#[derive(Default)]
struct GuildRoles {
	by_id: FxHashMap<RoleId, Arc<GuildRole>>,
	by_name: FxHashMap<String, SmallVec<[RoleId; 2]>>,
}

impl GuildRoles {
	fn insert(&mut self, role: Arc<GuildRole>) -> Option<Arc<GuildRole>> {
		let previous = self.by_id.insert(role.id, Arc::clone(&role));
		if let Some(old) = &previous {
			self.unindex_name(old);
		}
		self.by_name.entry(name_key(&role.name)).or_default().push(role.id);
		previous
	}

	fn remove(&mut self, id: RoleId) -> Option<Arc<GuildRole>> {
		let removed = self.by_id.remove(&id)?;
		self.unindex_name(&removed);
		Some(removed)
	}

	fn unindex_name(&mut self, role: &GuildRole) {
		let key = name_key(&role.name);
		if let Some(bucket) = self.by_name.get_mut(&key) {
			bucket.retain(|id| *id != role.id);
			if bucket.is_empty() {
				self.by_name.remove(&key);
			}
		}
	}
}

/// Thread-safe in-memory role cache keyed by guild.
///
/// Shared across concurrent invocations via `Arc<RoleDirectory>`; lookups take
/// a read lock and never mutate.
#[derive(Default)]
pub struct RoleDirectory {
	guilds: RwLock<FxHashMap<GuildId, GuildRoles>>,
}

impl RoleDirectory {
	/// Creates an empty directory.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a directory from a set of roles.
	pub fn from_roles<I: IntoIterator<Item = GuildRole>>(roles: I) -> Self {
		let directory = Self::new();
		for role in roles {
			directory.insert_role(role);
		}
		directory
	}

	/// Inserts or replaces a role, returning the previous value for its id.
	pub fn insert_role(&self, role: GuildRole) -> Option<Arc<GuildRole>> {
		let role = Arc::new(role);
		tracing::trace!(guild = %role.guild_id, role = %role.id, name = %role.name, "directory.insert");
		self.guilds.write().entry(role.guild_id).or_default().insert(role)
	}

	/// Removes a role by id.
	pub fn remove_role(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>> {
		let mut guilds = self.guilds.write();
		let roles = guilds.get_mut(&guild)?;
		let removed = roles.remove(role);
		if roles.by_id.is_empty() {
			guilds.remove(&guild);
		}
		removed
	}

	/// Drops every role of a guild, returning how many were removed.
	pub fn remove_guild(&self, guild: GuildId) -> usize {
		self.guilds.write().remove(&guild).map_or(0, |roles| roles.by_id.len())
	}

	/// Returns all roles of a guild ordered by id.
	pub fn roles(&self, guild: GuildId) -> Vec<Arc<GuildRole>> {
		let guilds = self.guilds.read();
		let Some(roles) = guilds.get(&guild) else {
			return Vec::new();
		};
		let mut out: Vec<_> = roles.by_id.values().cloned().collect();
		out.sort_by_key(|role| role.id);
		out
	}

	/// Returns the number of roles cached for a guild.
	pub fn role_count(&self, guild: GuildId) -> usize {
		self.guilds.read().get(&guild).map_or(0, |roles| roles.by_id.len())
	}
}

impl DirectoryLookup for RoleDirectory {
	fn find_by_id(&self, guild: GuildId, role: RoleId) -> Option<Arc<GuildRole>> {
		self.guilds.read().get(&guild)?.by_id.get(&role).cloned()
	}

	fn find_by_name_exact(&self, guild: GuildId, name: &str, case_insensitive: bool) -> Vec<Arc<GuildRole>> {
		let guilds = self.guilds.read();
		let Some(roles) = guilds.get(&guild) else {
			return Vec::new();
		};
		let Some(bucket) = roles.by_name.get(&name_key(name)) else {
			return Vec::new();
		};
		let mut out: Vec<_> = bucket
			.iter()
			.filter_map(|id| roles.by_id.get(id))
			.filter(|role| case_insensitive || role.name == name)
			.cloned()
			.collect();
		out.sort_by_key(|role| role.id);
		out
	}
}

/// Folds `name` one character at a time: upper case, then lower case.
///
/// Context-sensitive and expanding mappings are skipped, so `ΟΔΟΣ` and
/// `οδοσ` share a key while `ß` never matches `ss`.
fn name_key(name: &str) -> String {
	name.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
	let upper = single(c.to_uppercase()).unwrap_or(c);
	// `İ` lowers to `i` plus a combining dot; the base letter is the simple mapping.
	upper.to_lowercase().next().unwrap_or(upper)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
	let first = mapped.next()?;
	mapped.next().is_none().then_some(first)
}
