//! Drafting engine: `idle → drafting → idle`.
//!
//! ## Key Types
//!
//! - `PendingDraft`: direction, target cell, options and reroll count
//! - `DraftOptions`: the offered templates
//!
//! Drawing is uniform with replacement over the catalog's draft pool. The
//! session decides when drafts open, close, or end the game.

pub mod pending;

pub use pending::{any_affordable, draw_options, DraftOptions, PendingDraft};
