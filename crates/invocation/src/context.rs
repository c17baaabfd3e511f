use std::sync::{Arc, OnceLock};

use herald_primitives::ReplyPolicy;
use thiserror::Error;

use crate::interaction::Interaction;

/// Name of the originating interaction slot, reported by [`ContextError::Missing`].
pub const INTERACTION_SLOT: &str = "interaction";

/// A required slot was absent from the session context.
///
/// This is a wiring error in the dispatcher, never a user error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
	/// The named slot was not populated.
	#[error("{0} was not in the command context")]
	Missing(&'static str),
}

/// Typed state for one command invocation.
///
/// The originating interaction is the only collaborator-supplied slot and may
/// be absent. The reply policy slot is written once by the reply scheduler and
/// read by every later stage.
#[derive(Debug, Default)]
pub struct SessionContext {
	interaction: Option<Arc<dyn Interaction>>,
	reply_policy: OnceLock<ReplyPolicy>,
}

impl SessionContext {
	/// Creates a context for the given interaction.
	pub fn new(interaction: Arc<dyn Interaction>) -> Self {
		Self {
			interaction: Some(interaction),
			reply_policy: OnceLock::new(),
		}
	}

	/// Creates a context with no originating interaction.
	pub fn detached() -> Self {
		Self::default()
	}

	/// Returns the originating interaction.
	pub fn interaction(&self) -> Result<&dyn Interaction, ContextError> {
		self.interaction.as_deref().ok_or(ContextError::Missing(INTERACTION_SLOT))
	}

	/// Returns the reply policy chosen for this invocation, if scheduled yet.
	pub fn reply_policy(&self) -> Option<ReplyPolicy> {
		self.reply_policy.get().copied()
	}

	/// Records the reply policy for this invocation.
	///
	/// Only the first write sticks; a later write returns the stored policy as the error.
	pub fn record_reply_policy(&self, policy: ReplyPolicy) -> Result<(), ReplyPolicy> {
		self.reply_policy.set(policy).map_err(|_| self.reply_policy().unwrap_or(policy))
	}
}
