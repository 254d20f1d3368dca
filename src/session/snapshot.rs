//! Serializable session snapshots.

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::core::{GameRngState, SessionConfig};
use crate::persist::PersistError;
use crate::tiles::TileCatalog;

/// Everything needed to resume a session: configuration, state and the
/// RNG position, so a resumed session drafts exactly what the original
/// would have.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: SessionConfig,
    pub state: SessionState,
    pub rng: GameRngState,
}

impl Snapshot {
    /// Check that the snapshot is consistent with itself and with `catalog`.
    pub fn validate(&self, catalog: &TileCatalog) -> Result<(), PersistError> {
        let board = &self.state.board;
        if board.size() != self.config.grid || !board.is_well_formed() {
            return Err(PersistError::CorruptSnapshot(format!(
                "board does not match the {}x{} grid",
                self.config.grid.width, self.config.grid.height
            )));
        }

        for tile in board.tiles() {
            if !catalog.contains(tile.template) {
                return Err(PersistError::UnknownTemplate(tile.template));
            }
        }

        if !board.is_occupied(self.state.player) {
            return Err(PersistError::CorruptSnapshot(format!(
                "player stands on empty cell {}",
                self.state.player
            )));
        }

        if let Some(draft) = &self.state.draft {
            if let Some(unknown) = draft.options.iter().find(|id| !catalog.contains(**id)) {
                return Err(PersistError::UnknownTemplate(*unknown));
            }
            if !self.config.grid.contains(draft.target) || board.is_occupied(draft.target) {
                return Err(PersistError::CorruptSnapshot(format!(
                    "draft target {} is not an empty cell",
                    draft.target
                )));
            }
        }

        Ok(())
    }
}
