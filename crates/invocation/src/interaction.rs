use std::fmt;

use herald_primitives::{GuildId, InteractionId};

use crate::ack::{AckSender, DeferRequest};

/// The inbound event that started a command invocation.
pub trait Interaction: fmt::Debug + Send + Sync {
	/// Interaction id, used to address acknowledgements.
	fn id(&self) -> InteractionId;

	/// Guild the interaction was sent from, if any.
	fn guild_id(&self) -> Option<GuildId>;

	/// Returns true if the interaction originates inside a guild.
	fn is_from_guild(&self) -> bool {
		self.guild_id().is_some()
	}

	/// Requests a deferred acknowledgement.
	///
	/// Fire-and-forget: delivery and ordering belong to the transport.
	fn defer_reply(&self, ephemeral: bool);
}

/// Interaction handle that forwards acknowledgements onto an [`AckSender`].
#[derive(Debug, Clone)]
pub struct QueuedInteraction {
	id: InteractionId,
	guild_id: Option<GuildId>,
	acks: AckSender,
}

impl QueuedInteraction {
	/// Creates a handle for an interaction sent from inside a guild.
	pub fn in_guild(id: InteractionId, guild_id: GuildId, acks: AckSender) -> Self {
		Self {
			id,
			guild_id: Some(guild_id),
			acks,
		}
	}

	/// Creates a handle for an interaction sent from a direct message.
	pub fn direct(id: InteractionId, acks: AckSender) -> Self {
		Self { id, guild_id: None, acks }
	}
}

impl Interaction for QueuedInteraction {
	fn id(&self) -> InteractionId {
		self.id
	}

	fn guild_id(&self) -> Option<GuildId> {
		self.guild_id
	}

	fn defer_reply(&self, ephemeral: bool) {
		let request = DeferRequest {
			interaction: self.id,
			ephemeral,
		};
		if !self.acks.send(request) {
			tracing::warn!(interaction = %self.id, ephemeral, "ack transport closed, dropping deferred acknowledgement");
		}
	}
}
