//! Per-invocation state shared by argument parsers and the reply scheduler.
//!
//! A dispatcher creates one [`SessionContext`] and one [`InputCursor`] per
//! command invocation and drops both once the invocation completes.

/// Deferred acknowledgement queue.
pub mod ack;
/// Typed session context.
pub mod context;
/// Token cursor over raw command input.
pub mod cursor;
/// Originating interaction handles.
pub mod interaction;

pub use ack::{AckQueue, AckReceiver, AckSender, DeferRequest};
pub use context::{ContextError, SessionContext};
pub use cursor::InputCursor;
pub use interaction::{Interaction, QueuedInteraction};
