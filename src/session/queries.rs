//! Read-only views of a session.
//!
//! Everything here is derived fresh on each call; nothing is cached.

use serde::{Deserialize, Serialize};

use super::game::GameSession;
use crate::core::{Direction, Resources, Rotation};
use crate::rules::{self, QuestKey, ScoreBreakdown};
use crate::tiles::{ActionId, PlacedTile, TileTemplate};

/// Usage of an action or progress of a quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub max: u32,
    pub complete: bool,
}

impl GameSession {
    /// Tile under the player.
    #[must_use]
    pub fn current_tile(&self) -> Option<&PlacedTile> {
        self.state().current_tile()
    }

    /// Template of the tile under the player.
    #[must_use]
    pub fn current_template(&self) -> Option<&TileTemplate> {
        self.current_tile().and_then(|t| self.catalog().get(t.template))
    }

    /// Tile in the selected cell.
    #[must_use]
    pub fn selected_tile(&self) -> Option<&PlacedTile> {
        self.state().selected_tile()
    }

    /// Total VP.
    #[must_use]
    pub fn victory_points(&self) -> i64 {
        self.score().total()
    }

    /// VP by source.
    #[must_use]
    pub fn score(&self) -> ScoreBreakdown {
        rules::score(&self.state().board, self.catalog(), self.state().bonus_vp)
    }

    /// Number of placed tiles, starter included.
    #[must_use]
    pub fn tiles_placed(&self) -> usize {
        self.state().board.tiles_placed()
    }

    #[must_use]
    pub fn is_drafting(&self) -> bool {
        self.state().is_drafting()
    }

    /// Usage of an action on a placed tile.
    ///
    /// Capped actions report the usage shared by every copy of the
    /// template; one-time actions report this tile's claim.
    #[must_use]
    pub fn action_usage(&self, tile: &PlacedTile, action: ActionId) -> Option<Progress> {
        let template = self.catalog().get(tile.template)?;
        let action = template.action(action)?;

        Some(match action.max_uses {
            Some(max) => {
                let current = self.state().capped_uses(template.id, action.id);
                Progress {
                    current,
                    max,
                    complete: current >= max,
                }
            }
            None => {
                let claimed = tile.has_claimed(action.id);
                Progress {
                    current: u32::from(claimed),
                    max: 1,
                    complete: claimed,
                }
            }
        })
    }

    /// Progress of a tile's quest, if it has one.
    #[must_use]
    pub fn quest_progress(&self, tile: &PlacedTile) -> Option<Progress> {
        let quest = self.catalog().get(tile.template)?.quest.as_ref()?;
        let state = self.state().quests.state(&QuestKey {
            position: tile.position,
            quest: quest.id,
        });
        Some(Progress {
            current: state.progress,
            max: quest.target,
            complete: state.completed,
        })
    }

    /// Are all of a tile's actions used up? Tiles without actions are complete.
    #[must_use]
    pub fn is_tile_complete(&self, tile: &PlacedTile) -> bool {
        self.action_states(tile).all(|p| p.complete)
    }

    /// Does a tile have an action left to use?
    #[must_use]
    pub fn has_unused_actions(&self, tile: &PlacedTile) -> bool {
        self.action_states(tile).any(|p| !p.complete)
    }

    fn action_states<'a>(&'a self, tile: &'a PlacedTile) -> impl Iterator<Item = Progress> + 'a {
        self.catalog()
            .get(tile.template)
            .into_iter()
            .flat_map(|t| t.actions.iter())
            .filter_map(move |a| self.action_usage(tile, a.id))
    }

    /// Shortfall for paying `cost`. Empty when affordable.
    #[must_use]
    pub fn missing_resources(&self, cost: &Resources) -> Resources {
        self.resources().missing(cost)
    }

    #[must_use]
    pub fn can_afford(&self, cost: &Resources) -> bool {
        self.resources().can_afford(cost)
    }

    /// Does the current tile have an action that is neither used up nor
    /// unaffordable?
    #[must_use]
    pub fn has_usable_action(&self) -> bool {
        let (Some(tile), Some(template)) = (self.current_tile(), self.current_template()) else {
            return false;
        };
        template.actions.iter().any(|action| {
            self.action_usage(tile, action.id)
                .is_some_and(|p| !p.complete)
                && self.can_afford(&action.cost)
        })
    }

    /// Directions the player may step in right now, under the movement
    /// mode. Empty while drafting or after the game ends.
    #[must_use]
    pub fn reachable_directions(&self) -> Vec<Direction> {
        if !self.status().is_playing() || self.is_drafting() {
            return Vec::new();
        }
        Direction::all().filter(|d| self.can_step(*d)).collect()
    }

    /// Rotation the next placed tile will get.
    #[must_use]
    pub fn draft_preview_rotation(&self) -> Option<Rotation> {
        self.state().draft.as_ref().map(|d| d.rotation())
    }

    /// Energy cost of the next reroll, if one is allowed.
    #[must_use]
    pub fn reroll_cost(&self) -> Option<i64> {
        self.state()
            .draft
            .as_ref()
            .filter(|d| d.can_reroll(self.config().max_rerolls))
            .map(|d| d.next_reroll_cost())
    }
}
