//! Game session: the state machine that owns a game.
//!
//! ## Key Types
//!
//! - `GameSession`: commands, queries and persistence hooks
//! - `SessionState`: the serializable aggregate (board, player, resources,
//!   ledgers, draft, log, status)
//! - `Rejection`: why a command did nothing
//! - `MessageLog`: capped player-facing history
//! - `Snapshot`: config + state + RNG position, the unit of saving

pub mod error;
pub mod focus;
pub mod log;
pub mod state;
pub mod snapshot;
pub mod game;
pub mod queries;

pub use error::{CommandResult, Rejection};
pub use focus::{Focus, FocusMode};
pub use log::{LogEntry, LogKind, MessageLog};
pub use state::{SessionState, UsageKey};
pub use snapshot::Snapshot;
pub use game::{GameSession, Transition};
pub use queries::Progress;

// Re-export status types from rules for convenience
pub use crate::rules::{GameStatus, LossReason};
