use herald_invocation::ContextError;
use thiserror::Error;

/// Why an argument could not be resolved.
///
/// Resolution is a pure function of its inputs, so none of these are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
	/// The argument was never supplied.
	#[error("no input was provided")]
	NoInput,
	/// The invocation did not come from inside a guild.
	#[error("role arguments can only be parsed in guilds")]
	NotInGuild,
	/// The token does not follow the `<@&id>` mention syntax.
	#[error("input '{0}' is not a role mention")]
	MalformedMention(String),
	/// No role matches the token.
	#[error("role not found for '{0}'")]
	NotFound(String),
	/// More than one role matches the token by name.
	#[error("too many roles found for '{0}'")]
	AmbiguousMatch(String),
	/// A required context slot was not populated by the dispatcher.
	#[error("{0} was not in the command context")]
	MissingContext(&'static str),
}

/// How a dispatcher should surface a [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
	/// Shown to the invoking user as a readable message.
	UserInput,
	/// The command cannot run in this environment.
	Environment,
	/// Dispatcher bug; logged and reported as an internal error.
	Wiring,
}

impl ResolutionError {
	/// Returns the category that decides how the failure is reported.
	pub const fn category(&self) -> ErrorCategory {
		match self {
			Self::NoInput | Self::MalformedMention(_) | Self::NotFound(_) | Self::AmbiguousMatch(_) => ErrorCategory::UserInput,
			Self::NotInGuild => ErrorCategory::Environment,
			Self::MissingContext(_) => ErrorCategory::Wiring,
		}
	}

	/// Returns the offending raw token, if the failure carries one.
	pub fn input(&self) -> Option<&str> {
		match self {
			Self::MalformedMention(input) | Self::NotFound(input) | Self::AmbiguousMatch(input) => Some(input),
			Self::NoInput | Self::NotInGuild | Self::MissingContext(_) => None,
		}
	}
}

impl From<ContextError> for ResolutionError {
	fn from(error: ContextError) -> Self {
		match error {
			ContextError::Missing(slot) => Self::MissingContext(slot),
		}
	}
}

/// A parser could not be constructed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentBuildError {
	/// The mode set was empty.
	#[error("at least one parsing mode is required")]
	NoParseModes,
}
