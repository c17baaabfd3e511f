use herald_invocation::{ContextError, SessionContext};
use herald_primitives::ReplyPolicy;
use tracing::{debug, warn};

use crate::settings::DiscordSettings;

/// Decides and applies the reply policy of each matched command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyScheduler {
	settings: DiscordSettings,
}

impl ReplyScheduler {
	/// Creates a scheduler using the given global settings.
	pub const fn new(settings: DiscordSettings) -> Self {
		Self { settings }
	}

	/// Returns the global settings.
	pub const fn settings(&self) -> DiscordSettings {
		self.settings
	}

	/// Picks the policy for this invocation, defers the interaction if needed,
	/// and records the policy in the context.
	///
	/// The command override wins over the global fallback. The deferred
	/// acknowledgement is queued, not awaited. If the context already holds a
	/// policy, nothing is deferred again and the stored policy is returned.
	pub fn schedule(&self, ctx: &SessionContext, command_override: Option<ReplyPolicy>) -> Result<ReplyPolicy, ContextError> {
		let interaction = ctx.interaction()?;
		let policy = command_override.unwrap_or_else(|| self.settings.fallback_policy());

		if let Err(existing) = ctx.record_reply_policy(policy) {
			warn!(interaction = %interaction.id(), ?existing, "reply already scheduled for this invocation");
			return Ok(existing);
		}

		if policy.defer() {
			interaction.defer_reply(policy.ephemeral());
		}
		debug!(
			interaction = %interaction.id(),
			defer = policy.defer(),
			ephemeral = policy.ephemeral(),
			overridden = command_override.is_some(),
			"reply.scheduled"
		);
		Ok(policy)
	}
}
