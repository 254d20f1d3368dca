//! The session aggregate.
//!
//! `SessionState` holds everything that changes during play. It is plain
//! data: the [`GameSession`](super::GameSession) owns it and is the only
//! thing that mutates it. Everything in here serializes, so a snapshot of
//! the state is a complete save.
//!
//! ## Invariants
//!
//! - The player always stands on a placed tile
//! - Once `status` leaves `Playing` it never changes again
//! - `draft` is `Some` exactly while a draft is open

use serde::{Deserialize, Serialize};

use super::focus::Focus;
use super::log::{LogKind, MessageLog};
use crate::board::Board;
use crate::core::{Ledger, Position, Resources, Rotation, SessionConfig};
use crate::draft::PendingDraft;
use crate::rules::{GameStatus, QuestBook};
use crate::tiles::{ActionId, PlacedTile, TemplateId, TileCatalog};

/// Ledger key for a capped action.
///
/// Keyed by template, not by placed tile: every copy of a template shares
/// one usage counter per action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UsageKey {
    pub template: TemplateId,
    pub action: ActionId,
}

/// Mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub board: Board,
    pub player: Position,
    /// Cell shown in the details panel. May be any cell.
    pub selected: Option<Position>,
    pub resources: Resources,
    pub status: GameStatus,
    pub draft: Option<PendingDraft>,
    pub log: MessageLog,
    /// VP from actions, passive abilities and quests.
    pub bonus_vp: i64,
    /// Uses of capped actions, shared per template.
    pub action_usage: Ledger<UsageKey, u32>,
    pub quests: QuestBook,
    #[serde(default)]
    pub focus: Focus,
}

impl SessionState {
    /// Fresh state: starter tile at the start cell, player and selection on it.
    #[must_use]
    pub fn new(config: &SessionConfig, catalog: &TileCatalog) -> Self {
        let mut board = Board::new(config.grid);
        let starter = catalog.starter();
        board.place(PlacedTile::new(config.start, starter.id, Rotation::Deg0));

        let mut log = MessageLog::new(config.log_capacity);
        log.push(
            LogKind::Movement,
            format!("You start at the {}. Explore to earn {} VP.", starter.name, config.win_threshold),
        );

        Self {
            board,
            player: config.start,
            selected: Some(config.start),
            resources: config.starting_resources,
            status: GameStatus::Playing,
            draft: None,
            log,
            bonus_vp: 0,
            action_usage: Ledger::new(),
            quests: QuestBook::new(),
            focus: Focus::default(),
        }
    }

    /// Is a draft open?
    #[must_use]
    pub fn is_drafting(&self) -> bool {
        self.draft.is_some()
    }

    /// Tile under the player.
    #[must_use]
    pub fn current_tile(&self) -> Option<&PlacedTile> {
        self.board.get(self.player)
    }

    /// Tile in the selected cell, if the cell is occupied.
    #[must_use]
    pub fn selected_tile(&self) -> Option<&PlacedTile> {
        self.selected.and_then(|pos| self.board.get(pos))
    }

    /// Uses of a capped action across every copy of its template.
    #[must_use]
    pub fn capped_uses(&self, template: TemplateId, action: ActionId) -> u32 {
        self.action_usage.count(&UsageKey { template, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridSize;
    use crate::tiles::standard;

    #[test]
    fn test_new_state() {
        let config = SessionConfig::default();
        let state = SessionState::new(&config, &standard::catalog());

        assert_eq!(state.player, Position::new(2, 7));
        assert_eq!(state.selected, Some(state.player));
        assert_eq!(state.board.tiles_placed(), 1);
        assert_eq!(state.current_tile().unwrap().template, standard::HOME_BASE);
        assert_eq!(state.current_tile().unwrap().rotation, Rotation::Deg0);
        assert_eq!(state.resources.energy, 50);
        assert!(!state.is_drafting());
        assert!(state.status.is_playing());
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_custom_start() {
        let config = SessionConfig::new(GridSize::new(5, 5)).with_start(Position::new(0, 0));
        let state = SessionState::new(&config, &standard::catalog());

        assert!(state.board.is_occupied(Position::new(0, 0)));
        assert!(!state.board.is_occupied(Position::new(2, 4)));
    }

    #[test]
    fn test_state_json_roundtrip() {
        let config = SessionConfig::default();
        let mut state = SessionState::new(&config, &standard::catalog());
        state.action_usage.increment(UsageKey {
            template: standard::WORKSHOP,
            action: ActionId::new(0),
        });

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.capped_uses(standard::WORKSHOP, ActionId::new(0)), 1);
    }
}
