//! Game rules as pure functions over board state.
//!
//! - `scoring`: derived VP
//! - `quests`: quest ledger and expenditure tracking
//! - `passives`: passive ability propagation on placement
//! - `outcome`: game status and terminal evaluation
//!
//! Rules compute; the session applies. Nothing here mutates resources or
//! the message log.

pub mod payout;
pub mod scoring;
pub mod quests;
pub mod passives;
pub mod outcome;

pub use payout::{Payout, PayoutSource};
pub use scoring::{color_counts, score, victory_points, ScoreBreakdown};
pub use quests::{QuestBook, QuestKey, QuestState};
pub use passives::propagate;
pub use outcome::{evaluate, GameStatus, LossReason};
