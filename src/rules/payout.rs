//! Rewards produced by rule resolution.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::tiles::{Reward, TileColor};

/// Why a payout was granted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutSource {
    /// A passive ability reacting to a placement of this colour.
    Passive { trigger: TileColor },
    /// A quest reaching its target.
    Quest,
}

/// A reward owed to the player, attributed to a placed tile.
///
/// Rules compute payouts without touching the session; the session applies
/// them (resources to the pool, VP to the accumulator) and logs them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// Tile that owns the ability or quest.
    pub owner: Position,
    /// Owner template name, for messages.
    pub owner_name: String,
    /// Ability or quest label.
    pub label: String,
    pub reward: Reward,
    pub source: PayoutSource,
}
