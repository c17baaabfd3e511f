//! Argument parsers that turn command input tokens into guild entities.
//!
//! - [`ArgumentParser`]: shared parser contract
//! - [`RoleParser`]: resolves one token to a [`GuildRole`](herald_primitives::GuildRole)
//! - [`RoleArgument`]: named role argument with its configured [`ParseModes`]
//! - [`ResolutionError`]: failure taxonomy shared by every parser

/// Parser failures and their categories.
pub mod error;
/// Recognition modes.
pub mod mode;
/// Guild role argument.
pub mod role;

use herald_invocation::{InputCursor, SessionContext};

pub use error::{ArgumentBuildError, ErrorCategory, ResolutionError};
pub use mode::{ParseMode, ParseModes};
pub use role::{RoleArgument, RoleArgumentBuilder, RoleParser};

/// Parses one argument from the front of the input.
///
/// Implementations consume input only on success and never retain the cursor
/// or context past the call.
pub trait ArgumentParser {
	/// Value produced on success.
	type Output;

	/// Parses the next argument.
	fn parse(&self, ctx: &SessionContext, input: &mut InputCursor<'_>) -> Result<Self::Output, ResolutionError>;

	/// Returns true if parsing depends only on the current token, not on
	/// previously parsed arguments.
	fn is_context_free(&self) -> bool {
		true
	}
}
