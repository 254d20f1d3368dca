//! Board system for tile locations.
//!
//! ## Key Types
//!
//! - `Board`: Fixed-size grid of placed tiles
//! - `GridSize`, `Position`: Board geometry (from `core::geometry`)

pub mod grid;

pub use grid::Board;

// Re-export geometry types from core for convenience
pub use crate::core::geometry::{GridSize, Position};
