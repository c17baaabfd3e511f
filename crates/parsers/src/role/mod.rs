use std::fmt;
use std::sync::Arc;

use herald_directory::DirectoryLookup;
use herald_invocation::{InputCursor, SessionContext};
use herald_primitives::{GuildId, GuildRole, RoleId};
use tracing::{debug, trace};

use crate::ArgumentParser;
use crate::error::{ArgumentBuildError, ResolutionError};
use crate::mode::{ParseMode, ParseModes};

const MENTION_PREFIX: &str = "<@&";
const MENTION_SUFFIX: &str = ">";

/// Directory access bound to the guild of the current invocation.
struct GuildScope<'a> {
	directory: &'a dyn DirectoryLookup,
	guild: GuildId,
}

impl GuildScope<'_> {
	fn find(&self, mode: ParseMode, input: &str) -> Result<Arc<GuildRole>, ResolutionError> {
		match mode {
			ParseMode::Mention => by_mention(self, input),
			ParseMode::Id => by_id(self, input),
			ParseMode::Name => by_name(self, input),
		}
	}
}

fn by_mention(scope: &GuildScope<'_>, input: &str) -> Result<Arc<GuildRole>, ResolutionError> {
	let id = input
		.strip_prefix(MENTION_PREFIX)
		.and_then(|rest| rest.strip_suffix(MENTION_SUFFIX))
		.filter(|id| !id.is_empty())
		.ok_or_else(|| ResolutionError::MalformedMention(input.to_string()))?;
	role_from_id(scope, input, id)
}

fn by_id(scope: &GuildScope<'_>, input: &str) -> Result<Arc<GuildRole>, ResolutionError> {
	role_from_id(scope, input, input)
}

fn by_name(scope: &GuildScope<'_>, input: &str) -> Result<Arc<GuildRole>, ResolutionError> {
	let mut roles = scope.directory.find_by_name_exact(scope.guild, input, true);
	match roles.len() {
		0 => Err(ResolutionError::NotFound(input.to_string())),
		1 => Ok(roles.swap_remove(0)),
		_ => Err(ResolutionError::AmbiguousMatch(input.to_string())),
	}
}

/// An unparsable id and an unknown id both report the raw input as not found.
fn role_from_id(scope: &GuildScope<'_>, input: &str, id: &str) -> Result<Arc<GuildRole>, ResolutionError> {
	id.parse::<RoleId>()
		.ok()
		.and_then(|id| scope.directory.find_by_id(scope.guild, id))
		.ok_or_else(|| ResolutionError::NotFound(input.to_string()))
}

/// Resolves one input token to a guild role.
///
/// Enabled modes are tried in [`ParseMode`] declaration order and the first
/// match wins. When every mode fails, the failure of the last enabled mode is
/// returned, so a malformed mention can be reported as a name miss when
/// [`ParseMode::Name`] is enabled too.
#[derive(Clone)]
pub struct RoleParser {
	modes: ParseModes,
	directory: Arc<dyn DirectoryLookup>,
}

impl fmt::Debug for RoleParser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RoleParser").field("modes", &self.modes).finish_non_exhaustive()
	}
}

impl RoleParser {
	/// Creates a parser for the given modes.
	///
	/// Fails if `modes` is empty.
	pub fn new(modes: ParseModes, directory: Arc<dyn DirectoryLookup>) -> Result<Self, ArgumentBuildError> {
		if modes.is_empty() {
			return Err(ArgumentBuildError::NoParseModes);
		}
		Ok(Self { modes, directory })
	}

	/// Returns the enabled modes.
	pub fn modes(&self) -> ParseModes {
		self.modes
	}

	/// Resolves the next token, consuming it only on success.
	pub fn resolve(&self, ctx: &SessionContext, input: &mut InputCursor<'_>) -> Result<Arc<GuildRole>, ResolutionError> {
		let token = input.peek_token();
		if token.is_empty() {
			return Err(ResolutionError::NoInput);
		}

		let interaction = ctx.interaction()?;
		if !interaction.is_from_guild() {
			return Err(ResolutionError::NotInGuild);
		}
		let Some(guild) = interaction.guild_id() else {
			return Err(ResolutionError::NotInGuild);
		};

		let scope = GuildScope {
			directory: self.directory.as_ref(),
			guild,
		};
		let mut last_failure = None;
		for mode in self.modes.modes() {
			match scope.find(mode, token) {
				Ok(role) => {
					input.read_token();
					debug!(%mode, input = token, role = %role.id, "role.resolved");
					return Ok(role);
				}
				Err(error) => {
					trace!(%mode, input = token, %error, "role.mode_failed");
					last_failure = Some(error);
				}
			}
		}

		// `modes` is never empty, so at least one strategy ran.
		Err(last_failure.unwrap_or_else(|| ResolutionError::NotFound(token.to_string())))
	}
}

impl ArgumentParser for RoleParser {
	type Output = Arc<GuildRole>;

	fn parse(&self, ctx: &SessionContext, input: &mut InputCursor<'_>) -> Result<Self::Output, ResolutionError> {
		self.resolve(ctx, input)
	}
}

/// A named role argument of a command.
#[derive(Debug, Clone)]
pub struct RoleArgument {
	name: String,
	description: String,
	parser: RoleParser,
}

impl RoleArgument {
	/// Starts building a role argument. All modes are enabled unless configured.
	pub fn builder(name: impl Into<String>, directory: Arc<dyn DirectoryLookup>) -> RoleArgumentBuilder {
		RoleArgumentBuilder {
			name: name.into(),
			description: String::new(),
			modes: ParseModes::all(),
			directory,
		}
	}

	/// Creates an argument with every mode enabled.
	pub fn of(name: impl Into<String>, directory: Arc<dyn DirectoryLookup>) -> Self {
		Self {
			name: name.into(),
			description: String::new(),
			parser: RoleParser {
				modes: ParseModes::all(),
				directory,
			},
		}
	}

	/// Argument name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Help text.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Enabled modes.
	pub fn modes(&self) -> ParseModes {
		self.parser.modes()
	}

	/// Parser backing this argument.
	pub fn parser(&self) -> &RoleParser {
		&self.parser
	}
}

/// Builder for [`RoleArgument`].
pub struct RoleArgumentBuilder {
	name: String,
	description: String,
	modes: ParseModes,
	directory: Arc<dyn DirectoryLookup>,
}

impl RoleArgumentBuilder {
	/// Sets the help text.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the enabled modes.
	pub fn modes(mut self, modes: ParseModes) -> Self {
		self.modes = modes;
		self
	}

	/// Builds the argument. Fails if the configured mode set is empty.
	pub fn build(self) -> Result<RoleArgument, ArgumentBuildError> {
		Ok(RoleArgument {
			name: self.name,
			description: self.description,
			parser: RoleParser::new(self.modes, self.directory)?,
		})
	}
}

#[cfg(test)]
mod tests;
