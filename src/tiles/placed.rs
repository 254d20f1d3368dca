//! Placed tiles - runtime tile state.
//!
//! A `PlacedTile` is created exactly once, when a draft resolves (or when
//! the starter is laid down), and is never removed. Only action claims
//! mutate it afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::template::{ActionId, TemplateId, TileTemplate};
use crate::core::{door_facing, Direction, Position, Rotation};

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Cell this tile occupies.
    pub position: Position,

    /// Reference to the template.
    pub template: TemplateId,

    /// Clockwise rotation applied to the template's doors.
    pub rotation: Rotation,

    /// One-time actions already claimed on this instance.
    #[serde(default)]
    pub claimed_actions: SmallVec<[ActionId; 4]>,

    /// Times this instance has used each repeatable action.
    ///
    /// The cap itself is enforced by the session-wide usage ledger, which
    /// is shared by every copy of the template.
    #[serde(default)]
    pub action_usage: FxHashMap<ActionId, u32>,
}

impl PlacedTile {
    /// Create a freshly placed tile.
    #[must_use]
    pub fn new(position: Position, template: TemplateId, rotation: Rotation) -> Self {
        Self {
            position,
            template,
            rotation,
            claimed_actions: SmallVec::new(),
            action_usage: FxHashMap::default(),
        }
    }

    /// Has this instance claimed a one-time action?
    #[must_use]
    pub fn has_claimed(&self, action: ActionId) -> bool {
        self.claimed_actions.contains(&action)
    }

    /// Mark a one-time action as claimed.
    pub fn claim(&mut self, action: ActionId) {
        if !self.has_claimed(action) {
            self.claimed_actions.push(action);
        }
    }

    /// Record one use of a repeatable action on this instance.
    pub fn record_use(&mut self, action: ActionId) {
        *self.action_usage.entry(action).or_insert(0) += 1;
    }

    /// Uses of a repeatable action on this instance.
    #[must_use]
    pub fn uses_of(&self, action: ActionId) -> u32 {
        self.action_usage.get(&action).copied().unwrap_or(0)
    }

    /// Does this tile expose a door toward `direction` after rotation?
    ///
    /// `template` must be this tile's template.
    #[must_use]
    pub fn has_door(&self, template: &TileTemplate, direction: Direction) -> bool {
        debug_assert_eq!(template.id, self.template, "door lookup against the wrong template");
        door_facing(template.doors, self.rotation, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Doors;
    use crate::tiles::TileColor;

    fn tile() -> PlacedTile {
        PlacedTile::new(Position::new(1, 2), TemplateId::new(3), Rotation::Deg0)
    }

    #[test]
    fn test_placed_tile_new() {
        let placed = tile();

        assert_eq!(placed.position, Position::new(1, 2));
        assert_eq!(placed.template, TemplateId::new(3));
        assert!(placed.claimed_actions.is_empty());
        assert!(placed.action_usage.is_empty());
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut placed = tile();

        assert!(!placed.has_claimed(ActionId::new(0)));
        placed.claim(ActionId::new(0));
        placed.claim(ActionId::new(0));

        assert!(placed.has_claimed(ActionId::new(0)));
        assert_eq!(placed.claimed_actions.len(), 1);
    }

    #[test]
    fn test_record_use() {
        let mut placed = tile();

        placed.record_use(ActionId::new(1));
        placed.record_use(ActionId::new(1));

        assert_eq!(placed.uses_of(ActionId::new(1)), 2);
        assert_eq!(placed.uses_of(ActionId::new(2)), 0);
    }

    #[test]
    fn test_has_door_applies_rotation() {
        let template = TileTemplate::new(TemplateId::new(3), "Corridor", TileColor::Blue)
            .with_doors(Doors::new(true, false, true, false));

        let upright = tile();
        assert!(upright.has_door(&template, Direction::N));
        assert!(!upright.has_door(&template, Direction::E));

        let turned = PlacedTile::new(Position::new(1, 2), TemplateId::new(3), Rotation::Deg90);
        assert!(turned.has_door(&template, Direction::E));
        assert!(turned.has_door(&template, Direction::W));
        assert!(!turned.has_door(&template, Direction::N));
    }

    #[test]
    fn test_placed_tile_serialization() {
        let mut placed = tile();
        placed.claim(ActionId::new(2));
        placed.record_use(ActionId::new(1));

        let json = serde_json::to_string(&placed).unwrap();
        let back: PlacedTile = serde_json::from_str(&json).unwrap();

        assert_eq!(placed, back);
    }
}
