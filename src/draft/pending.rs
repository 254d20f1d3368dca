//! The pending draft record.
//!
//! A draft opens when the player steps toward an empty cell. It remembers
//! the movement direction, the target cell, the offered templates and how
//! many rerolls this cycle has used. It is set and cleared atomically.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{rotation_for_entry, Direction, GameRng, Position, Rotation};
use crate::tiles::{TemplateId, TileCatalog};

/// Offered templates. Three inline, the default draft size.
pub type DraftOptions = SmallVec<[TemplateId; 3]>;

/// An in-progress draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDraft {
    /// Direction the player was moving in.
    pub direction: Direction,
    /// Empty cell the chosen tile will fill.
    pub target: Position,
    /// Rerolls used this cycle.
    pub rerolls: u32,
    pub options: DraftOptions,
}

impl PendingDraft {
    /// Open a draft with a fresh reroll counter.
    #[must_use]
    pub fn open(direction: Direction, target: Position, options: DraftOptions) -> Self {
        Self {
            direction,
            target,
            rerolls: 0,
            options,
        }
    }

    /// Side of the new tile the player enters through.
    #[must_use]
    pub fn entry_side(&self) -> Direction {
        self.direction.inverse()
    }

    /// Rotation the chosen tile will be placed with.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        rotation_for_entry(self.entry_side())
    }

    /// Energy cost of the next reroll (the Nth reroll costs N).
    #[must_use]
    pub fn next_reroll_cost(&self) -> i64 {
        i64::from(self.rerolls) + 1
    }

    /// Is another reroll allowed under `max_rerolls`?
    #[must_use]
    pub fn can_reroll(&self, max_rerolls: u32) -> bool {
        self.rerolls < max_rerolls
    }

    /// Is `template` among the offered options?
    #[must_use]
    pub fn offers(&self, template: TemplateId) -> bool {
        self.options.contains(&template)
    }

    /// Replace the options after a paid reroll.
    pub fn reroll(&mut self, options: DraftOptions) {
        self.options = options;
        self.rerolls += 1;
    }
}

/// Draw `count` options uniformly, with replacement, from the draft pool.
///
/// An empty pool yields no options.
pub fn draw_options(rng: &mut GameRng, catalog: &TileCatalog, count: usize) -> DraftOptions {
    rng.sample_with_replacement(catalog.draft_pool(), count)
        .into_iter()
        .collect()
}

/// Can any option be paid for with `workers`?
#[must_use]
pub fn any_affordable(options: &[TemplateId], catalog: &TileCatalog, workers: i64) -> bool {
    options
        .iter()
        .filter_map(|id| catalog.get(*id))
        .any(|template| template.cost <= workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::standard;

    fn draft() -> PendingDraft {
        let options = [standard::PARK, standard::FARM, standard::BANK].into_iter().collect();
        PendingDraft::open(Direction::N, Position::new(2, 6), options)
    }

    #[test]
    fn test_open_resets_rerolls() {
        let draft = draft();
        assert_eq!(draft.rerolls, 0);
        assert_eq!(draft.options.len(), 3);
        assert_eq!(draft.next_reroll_cost(), 1);
    }

    #[test]
    fn test_entry_rotation() {
        // Moving north enters through the south side: no rotation
        assert_eq!(draft().rotation(), Rotation::Deg0);

        let east = PendingDraft::open(Direction::E, Position::new(3, 7), DraftOptions::new());
        assert_eq!(east.entry_side(), Direction::W);
        assert_eq!(east.rotation(), Rotation::Deg90);
    }

    #[test]
    fn test_reroll_escalates_and_caps() {
        let mut draft = draft();
        let options: DraftOptions = [standard::MONUMENT; 3].into_iter().collect();

        for expected_cost in 1..=3 {
            assert!(draft.can_reroll(3));
            assert_eq!(draft.next_reroll_cost(), expected_cost);
            draft.reroll(options.clone());
        }

        assert!(!draft.can_reroll(3));
        assert!(draft.offers(standard::MONUMENT));
        assert!(!draft.offers(standard::PARK));
    }

    #[test]
    fn test_draw_options_is_deterministic() {
        let catalog = standard::catalog();
        let a = draw_options(&mut GameRng::new(7), &catalog, 3);
        let b = draw_options(&mut GameRng::new(7), &catalog, 3);

        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
        assert!(a.iter().all(|id| catalog.draft_pool().contains(id)));
    }

    #[test]
    fn test_any_affordable() {
        let catalog = standard::catalog();
        // Monument costs 3, Park costs 1
        assert!(!any_affordable(&[standard::MONUMENT; 3], &catalog, 2));
        assert!(any_affordable(&[standard::MONUMENT, standard::PARK], &catalog, 1));
        assert!(!any_affordable(&[], &catalog, 10));
    }
}
