use std::sync::Arc;

use herald_invocation::{ContextError, InputCursor, SessionContext};
use herald_parsers::{ArgumentParser, ErrorCategory, ResolutionError, RoleArgument};
use herald_primitives::{GuildRole, ReplyPolicy};
use herald_reply::ReplyScheduler;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::{HeraldConfig, Messages};

/// A command as seen by the pipeline: its role arguments in order and an
/// optional reply policy override.
#[derive(Debug, Clone)]
pub struct CommandSpec {
	name: String,
	arguments: Vec<RoleArgument>,
	reply_policy: Option<ReplyPolicy>,
}

impl CommandSpec {
	/// Creates a command with no arguments and no reply override.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			arguments: Vec::new(),
			reply_policy: None,
		}
	}

	/// Appends an argument.
	pub fn argument(mut self, argument: RoleArgument) -> Self {
		self.arguments.push(argument);
		self
	}

	/// Overrides the global reply settings for this command.
	pub fn reply_policy(mut self, policy: ReplyPolicy) -> Self {
		self.reply_policy = Some(policy);
		self
	}

	/// Command name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Arguments in parse order.
	pub fn arguments(&self) -> &[RoleArgument] {
		&self.arguments
	}

	/// Reply override, if any.
	pub fn reply_override(&self) -> Option<ReplyPolicy> {
		self.reply_policy
	}
}

/// A command whose arguments all resolved and whose reply is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInvocation {
	/// Resolved roles, one per argument.
	pub roles: Vec<Arc<GuildRole>>,
	/// Reply policy recorded in the session context.
	pub reply: ReplyPolicy,
}

/// Why an invocation stopped before its handler ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationFailure {
	/// An argument failed to resolve; later arguments were not attempted.
	#[error("argument '{argument}' of '{command}' failed: {error}")]
	Argument {
		/// Command name.
		command: String,
		/// Name of the failing argument.
		argument: String,
		/// Resolution failure.
		error: ResolutionError,
	},
	/// The reply could not be scheduled.
	#[error("reply scheduling for '{command}' failed: {error}")]
	Reply {
		/// Command name.
		command: String,
		/// Context failure.
		error: ContextError,
	},
}

impl InvocationFailure {
	/// Returns how the failure should be surfaced.
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::Argument { error, .. } => error.category(),
			Self::Reply { .. } => ErrorCategory::Wiring,
		}
	}
}

/// Resolves arguments and schedules the reply for one invocation at a time.
#[derive(Debug, Clone, Default)]
pub struct CommandPipeline {
	scheduler: ReplyScheduler,
	messages: Messages,
}

impl CommandPipeline {
	/// Creates a pipeline.
	pub fn new(scheduler: ReplyScheduler, messages: Messages) -> Self {
		Self { scheduler, messages }
	}

	/// Creates a pipeline from loaded configuration.
	pub fn from_config(config: &HeraldConfig) -> Self {
		Self::new(ReplyScheduler::new(config.discord), config.messages.clone())
	}

	/// Returns the reply scheduler.
	pub fn scheduler(&self) -> &ReplyScheduler {
		&self.scheduler
	}

	/// Resolves every argument of `command` from `input`, then schedules the reply.
	///
	/// Stops at the first failing argument. Input left after the last argument
	/// is not consumed.
	pub fn prepare(
		&self,
		ctx: &SessionContext,
		input: &mut InputCursor<'_>,
		command: &CommandSpec,
	) -> Result<PreparedInvocation, InvocationFailure> {
		let mut roles = Vec::with_capacity(command.arguments.len());
		for argument in &command.arguments {
			match argument.parser().parse(ctx, input) {
				Ok(role) => roles.push(role),
				Err(error) => {
					let failure = InvocationFailure::Argument {
						command: command.name.clone(),
						argument: argument.name().to_string(),
						error,
					};
					self.report(&failure);
					return Err(failure);
				}
			}
		}

		let reply = self.scheduler.schedule(ctx, command.reply_policy).map_err(|error| {
			let failure = InvocationFailure::Reply {
				command: command.name.clone(),
				error,
			};
			self.report(&failure);
			failure
		})?;

		debug!(command = %command.name, roles = roles.len(), "invocation.prepared");
		Ok(PreparedInvocation { roles, reply })
	}

	/// Returns the text to show the invoking user for a failure.
	pub fn user_message(&self, failure: &InvocationFailure) -> String {
		match failure {
			InvocationFailure::Argument { error, .. } => match error.category() {
				ErrorCategory::UserInput => capitalize(&error.to_string()),
				ErrorCategory::Environment => self.messages.not_in_guild.clone(),
				ErrorCategory::Wiring => self.messages.internal_error.clone(),
			},
			InvocationFailure::Reply { .. } => self.messages.internal_error.clone(),
		}
	}

	fn report(&self, failure: &InvocationFailure) {
		match failure.category() {
			ErrorCategory::Wiring => error!(%failure, "invocation.wiring_error"),
			ErrorCategory::UserInput | ErrorCategory::Environment => debug!(%failure, "invocation.rejected"),
		}
	}
}

fn capitalize(message: &str) -> String {
	let mut chars = message.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
