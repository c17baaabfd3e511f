//! Reply scheduling for matched commands.
//!
//! Runs once per invocation after every argument resolved and before the
//! handler body: picks a [`ReplyPolicy`], defers the interaction if the policy
//! says so, and records the policy in the [`SessionContext`](herald_invocation::SessionContext).

/// Reply scheduler.
pub mod scheduler;
/// Global reply settings.
pub mod settings;

pub use herald_primitives::ReplyPolicy;
pub use scheduler::ReplyScheduler;
pub use settings::{DiscordSettings, SettingsError};
