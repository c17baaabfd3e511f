//! Role argument resolution and reply scheduling for guild chat commands.
//!
//! The [`CommandPipeline`] drives one invocation: it resolves every role
//! argument left to right, stops at the first failure, and schedules the
//! reply once all arguments matched. Everything else is re-exported from the
//! member crates.

/// Configuration file loading.
pub mod config;
/// Per-invocation argument and reply pipeline.
pub mod pipeline;

pub use config::{ConfigError, HeraldConfig, Messages};
pub use herald_directory::{DirectoryLookup, RoleDirectory};
pub use herald_invocation::{
	AckQueue, AckReceiver, AckSender, ContextError, DeferRequest, InputCursor, Interaction, QueuedInteraction, SessionContext,
};
pub use herald_parsers::{
	ArgumentBuildError, ArgumentParser, ErrorCategory, ParseMode, ParseModes, ResolutionError, RoleArgument, RoleParser,
};
pub use herald_primitives::{GuildId, GuildRole, InteractionId, ReplyPolicy, RoleId};
pub use herald_reply::{DiscordSettings, ReplyScheduler};
pub use pipeline::{CommandPipeline, CommandSpec, InvocationFailure, PreparedInvocation};
