//! Quest progress tracking.
//!
//! Quest state is keyed by the owning tile's position plus the quest id, so
//! every placed copy of a template runs its own quest. A quest advances by
//! exactly one step per matching expenditure, whatever the amount spent,
//! and completes once.

use serde::{Deserialize, Serialize};

use super::payout::{Payout, PayoutSource};
use crate::board::Board;
use crate::core::{Ledger, Position, Resources};
use crate::tiles::{QuestId, TileCatalog};

/// Ledger key for one quest on one placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestKey {
    pub position: Position,
    pub quest: QuestId,
}

/// Progress of a single quest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestState {
    pub progress: u32,
    pub completed: bool,
}

/// Session-wide quest ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestBook {
    entries: Ledger<QuestKey, QuestState>,
}

impl QuestBook {
    /// Create an empty quest book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a quest; untouched quests read as zero progress.
    #[must_use]
    pub fn state(&self, key: &QuestKey) -> QuestState {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Has this quest completed?
    #[must_use]
    pub fn is_completed(&self, key: &QuestKey) -> bool {
        self.state(key).completed
    }

    /// Number of completed quests.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|(_, s)| s.completed).count()
    }

    /// Advance every open quest on the board whose trigger matches `spent`.
    ///
    /// Returns the rewards of quests that completed with this expenditure.
    pub fn record_expenditure(
        &mut self,
        board: &Board,
        catalog: &TileCatalog,
        spent: &Resources,
    ) -> Vec<Payout> {
        let mut payouts = Vec::new();

        for tile in board.tiles() {
            let Some(template) = catalog.get(tile.template) else {
                continue;
            };
            let Some(quest) = &template.quest else {
                continue;
            };
            if !quest.trigger.matches(spent) {
                continue;
            }

            let key = QuestKey {
                position: tile.position,
                quest: quest.id,
            };
            let mut state = self.state(&key);
            if state.completed {
                continue;
            }

            state.progress += 1;
            if state.progress >= quest.target {
                state.completed = true;
                tracing::info!(
                    tile = %tile.position,
                    quest = %quest.label,
                    "quest completed"
                );
                payouts.push(Payout {
                    owner: tile.position,
                    owner_name: template.name.clone(),
                    label: quest.label.clone(),
                    reward: quest.reward,
                    source: PayoutSource::Quest,
                });
            }
            self.entries.insert(key, state);
        }

        payouts
    }
}
