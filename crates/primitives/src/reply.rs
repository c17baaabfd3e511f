use serde::{Deserialize, Serialize};

/// How the reply to a command is scheduled.
///
/// A deferred reply is acknowledged before the handler runs, which holds the
/// interaction open while the real response is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "PolicyTable")]
pub struct ReplyPolicy {
	defer: bool,
	ephemeral: bool,
}

/// Serialized form; visibility is ignored unless the reply is deferred.
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct PolicyTable {
	defer: bool,
	ephemeral: bool,
}

impl From<PolicyTable> for ReplyPolicy {
	fn from(table: PolicyTable) -> Self {
		if table.defer {
			Self::deferred(table.ephemeral)
		} else {
			Self::not_deferred()
		}
	}
}

impl ReplyPolicy {
	/// Defers the reply with the given visibility.
	///
	/// * `true`: only the invoking user sees the response
	/// * `false`: the response is public
	pub const fn deferred(ephemeral: bool) -> Self {
		Self { defer: true, ephemeral }
	}

	/// Replies directly without a preliminary acknowledgement.
	pub const fn not_deferred() -> Self {
		Self {
			defer: false,
			ephemeral: false,
		}
	}

	/// Returns true if a deferred acknowledgement is issued.
	#[inline]
	pub const fn defer(self) -> bool {
		self.defer
	}

	/// Returns true if the deferred reply is only visible to the invoker.
	#[inline]
	pub const fn ephemeral(self) -> bool {
		self.ephemeral
	}
}
