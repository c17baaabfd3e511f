//! Core value types shared by the argument parsers and the reply scheduler.

/// Snowflake identifier newtypes.
pub mod ids;
/// Reply deferral policy.
pub mod reply;
/// Guild role values.
pub mod role;

pub use ids::{GuildId, IdParseError, InteractionId, RoleId};
pub use reply::ReplyPolicy;
pub use role::GuildRole;
