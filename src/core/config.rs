//! Session configuration.
//!
//! A session is configured once at creation. Configuration covers board
//! shape, starting position and resources, the win threshold, drafting
//! limits, and the movement mode.
//!
//! ## Movement Mode
//!
//! With `door_restricted` on, moving out of a tile requires an exit door on
//! the current tile and (for placed targets) an entrance door on the target.
//! With it off, any orthogonal step is allowed. Both movement and the UI
//! affordance query read this one flag.

use serde::{Deserialize, Serialize};

use super::geometry::{GridSize, Position};
use super::resources::{Resource, Resources};

/// Starting energy for a default session.
pub const STARTING_ENERGY: i64 = 50;

/// Starting workers for a default session.
pub const STARTING_WORKERS: i64 = 6;

/// Victory points needed to win a default session.
pub const WIN_VP_THRESHOLD: i64 = 100;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board dimensions.
    pub grid: GridSize,

    /// Cell that receives the starter tile and the player.
    pub start: Position,

    /// Resources at the start of a session.
    pub starting_resources: Resources,

    /// VP at or above which the session is won.
    pub win_threshold: i64,

    /// Require connecting doors for movement and discovery.
    pub door_restricted: bool,

    /// Options offered per draft.
    pub draft_size: usize,

    /// Maximum rerolls per draft cycle.
    pub max_rerolls: u32,

    /// Most recent message-log entries kept.
    pub log_capacity: usize,

    /// RNG seed. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Default configuration for a board of the given size.
    ///
    /// The start cell is the bottom-centre of the board.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            start: Position::new((grid.width / 2) as i32, grid.height as i32 - 1),
            starting_resources: Resources::default()
                .with(Resource::Energy, STARTING_ENERGY)
                .with(Resource::Workers, STARTING_WORKERS),
            win_threshold: WIN_VP_THRESHOLD,
            door_restricted: true,
            draft_size: 3,
            max_rerolls: 3,
            log_capacity: 100,
            seed: None,
        }
    }

    /// Set the start cell.
    ///
    /// Panics if the cell is off the board.
    #[must_use]
    pub fn with_start(mut self, start: Position) -> Self {
        assert!(self.grid.contains(start), "Start position {start} is off the board");
        self.start = start;
        self
    }

    /// Set the starting resources.
    #[must_use]
    pub fn with_starting_resources(mut self, resources: Resources) -> Self {
        self.starting_resources = resources;
        self
    }

    /// Set one starting resource.
    #[must_use]
    pub fn with_starting(mut self, resource: Resource, amount: i64) -> Self {
        self.starting_resources = self.starting_resources.with(resource, amount);
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, vp: i64) -> Self {
        self.win_threshold = vp;
        self
    }

    /// Allow free orthogonal movement, ignoring doors.
    #[must_use]
    pub fn free_movement(mut self) -> Self {
        self.door_restricted = false;
        self
    }

    /// Set the number of options per draft.
    ///
    /// Panics on zero.
    #[must_use]
    pub fn with_draft_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Drafts must offer at least one option");
        self.draft_size = size;
        self
    }

    /// Set the reroll cap per draft.
    #[must_use]
    pub fn with_max_rerolls(mut self, rerolls: u32) -> Self {
        self.max_rerolls = rerolls;
        self
    }

    /// Set the message-log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
