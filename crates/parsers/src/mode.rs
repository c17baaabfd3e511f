use std::fmt;

/// A way of recognizing a role in command input.
///
/// Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParseMode {
	/// Role mention syntax, `<@&id>`.
	Mention,
	/// Bare numeric role id.
	Id,
	/// Case-insensitive exact display name.
	Name,
}

impl ParseMode {
	/// Every mode in evaluation order.
	pub const ALL: [ParseMode; 3] = [ParseMode::Mention, ParseMode::Id, ParseMode::Name];

	/// Returns the bitflag for this mode.
	pub const fn as_set(self) -> ParseModes {
		match self {
			Self::Mention => ParseModes::MENTION,
			Self::Id => ParseModes::ID,
			Self::Name => ParseModes::NAME,
		}
	}
}

impl fmt::Display for ParseMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mention => f.write_str("mention"),
			Self::Id => f.write_str("id"),
			Self::Name => f.write_str("name"),
		}
	}
}

bitflags::bitflags! {
	/// A set of enabled role recognition modes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ParseModes: u8 {
		/// Role mention syntax.
		const MENTION = 1 << 0;
		/// Bare numeric id.
		const ID = 1 << 1;
		/// Display name.
		const NAME = 1 << 2;
	}
}

impl ParseModes {
	/// Returns true if `mode` is enabled.
	#[inline]
	pub fn enables(self, mode: ParseMode) -> bool {
		self.contains(mode.as_set())
	}

	/// Iterates the enabled modes in evaluation order.
	pub fn modes(self) -> impl Iterator<Item = ParseMode> {
		ParseMode::ALL.into_iter().filter(move |mode| self.enables(*mode))
	}
}

impl From<ParseMode> for ParseModes {
	fn from(mode: ParseMode) -> Self {
		mode.as_set()
	}
}

impl FromIterator<ParseMode> for ParseModes {
	fn from_iter<I: IntoIterator<Item = ParseMode>>(iter: I) -> Self {
		iter.into_iter().fold(Self::empty(), |set, mode| set | mode.as_set())
	}
}
