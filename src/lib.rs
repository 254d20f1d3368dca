//! # tile-explorer
//!
//! A single-player tile-placement exploration game engine.
//!
//! The player walks an avatar across a fixed grid. Stepping toward an
//! unexplored cell opens a draft of random tiles; the chosen tile is placed
//! (rotated so its front door faces back the way the player came) and the
//! player moves onto it. Tiles carry actions, passive abilities, quests and
//! scoring rules. The game is won at a victory-point threshold and lost
//! when energy runs out, the board fills up, or a draft offers nothing
//! affordable.
//!
//! ## Design Principles
//!
//! 1. **One Authority**: `GameSession` owns all mutable state; front ends
//!    send commands and read queries.
//!
//! 2. **Rejections, Not Errors**: Invalid intents are routine. Commands
//!    return `Result<_, Rejection>` and a rejection never changes state.
//!
//! 3. **Derived Scores**: VP is recomputed from the board on demand.
//!
//! 4. **Configuration Over Convention**: Board size, starting resources,
//!    thresholds, draft limits and the movement mode live in
//!    `SessionConfig`; tiles live in a `TileCatalog`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the message log uses `im-rs` so
//!   snapshots clone cheaply.
//!
//! - **Deterministic Drafts**: a seeded ChaCha8 RNG whose position is part
//!   of every save.
//!
//! ## Modules
//!
//! - `core`: Geometry, doors and rotation, resources, RNG, configuration
//! - `tiles`: Templates, placed tiles, the catalog and a standard tile set
//! - `board`: The grid of placed tiles
//! - `rules`: Scoring, quests, passive abilities, game-over evaluation
//! - `draft`: Pending drafts and option sampling
//! - `session`: The `GameSession` state machine
//! - `persist`: Versioned saves over pluggable blob stores

pub mod core;
pub mod tiles;
pub mod board;
pub mod rules;
pub mod draft;
pub mod session;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    Direction, Doors, GameRng, GameRngState, GridSize, Position, Resource, Resources, Rotation,
    SessionConfig,
};

pub use crate::tiles::{
    ActionId, PlacedTile, TemplateId, TileAction, TileCatalog, TileColor, TileTemplate,
};

pub use crate::board::Board;

pub use crate::rules::{GameStatus, LossReason, ScoreBreakdown};

pub use crate::draft::PendingDraft;

pub use crate::session::{
    GameSession, LogEntry, LogKind, MessageLog, Progress, Rejection, SessionState, Snapshot,
    Transition,
};

pub use crate::persist::{FileStore, MemoryStore, PersistError, Persistence, SaveCodec};
