//! Core engine types: geometry, doors, resources, RNG, configuration, ledgers.
//!
//! These are the building blocks shared by tiles, rules and the session.
//! None of them know about the catalog or the session state.

pub mod geometry;
pub mod doors;
pub mod resources;
pub mod rng;
pub mod config;
pub mod ledger;

pub use geometry::{direction_between, is_adjacent, Direction, GridSize, Position};
pub use doors::{door_facing, rotation_for_entry, Doors, Rotation};
pub use resources::{Resource, Resources};
pub use rng::{GameRng, GameRngState};
pub use ledger::Ledger;
pub use config::{SessionConfig, STARTING_ENERGY, STARTING_WORKERS, WIN_VP_THRESHOLD};
