//! Game status and terminal evaluation.
//!
//! Checks run in priority order against the freshly computed VP; the
//! first match wins:
//!
//! 1. VP at or above the threshold: **won**
//! 2. Energy at or below zero: **lost**, out of energy
//! 3. Every cell occupied: **lost**, board full
//!
//! Terminal statuses are final. Draft exhaustion (no affordable option) is
//! a fourth loss reason, decided by the drafting engine rather than here.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Resources;

/// Why a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    OutOfEnergy,
    BoardFull,
    /// A draft offered nothing the player could pay for.
    NoAffordableDraft { vp: i64 },
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LossReason::OutOfEnergy => f.write_str("Out of energy"),
            LossReason::BoardFull => f.write_str("Board full, not enough VP"),
            LossReason::NoAffordableDraft { vp } => {
                write!(f, "No affordable tiles to draft. Final VP: {vp}")
            }
        }
    }
}

/// Session status. Only `Playing` accepts commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost(LossReason),
}

impl GameStatus {
    /// Is the session still accepting commands?
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == GameStatus::Playing
    }

    /// Has the session ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_playing()
    }

    /// Loss reason, if lost.
    #[must_use]
    pub fn loss_reason(self) -> Option<LossReason> {
        match self {
            GameStatus::Lost(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Playing => f.write_str("Playing"),
            GameStatus::Won => f.write_str("Won"),
            GameStatus::Lost(reason) => write!(f, "Lost: {reason}"),
        }
    }
}

/// Decide whether the session has ended.
///
/// Returns the terminal status, or `None` while play continues.
#[must_use]
pub fn evaluate(
    vp: i64,
    win_threshold: i64,
    resources: &Resources,
    board: &Board,
) -> Option<GameStatus> {
    if vp >= win_threshold {
        Some(GameStatus::Won)
    } else if resources.energy <= 0 {
        Some(GameStatus::Lost(LossReason::OutOfEnergy))
    } else if board.is_full() {
        Some(GameStatus::Lost(LossReason::BoardFull))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridSize, Position, Resource, Rotation};
    use crate::tiles::{PlacedTile, TemplateId};

    fn energy(amount: i64) -> Resources {
        Resources::default().with(Resource::Energy, amount)
    }

    fn full_board() -> Board {
        let mut board = Board::new(GridSize::new(1, 1));
        board.place(PlacedTile::new(Position::new(0, 0), TemplateId::new(0), Rotation::Deg0));
        board
    }

    #[test]
    fn test_playing() {
        let board = Board::new(GridSize::new(2, 2));
        assert_eq!(evaluate(10, 100, &energy(5), &board), None);
    }

    #[test]
    fn test_win_beats_energy_loss() {
        let board = Board::new(GridSize::new(2, 2));
        assert_eq!(evaluate(100, 100, &energy(0), &board), Some(GameStatus::Won));
    }

    #[test]
    fn test_out_of_energy() {
        let board = Board::new(GridSize::new(2, 2));
        assert_eq!(
            evaluate(99, 100, &energy(0), &board),
            Some(GameStatus::Lost(LossReason::OutOfEnergy))
        );
    }

    #[test]
    fn test_energy_beats_board_full() {
        assert_eq!(
            evaluate(0, 100, &energy(0), &full_board()),
            Some(GameStatus::Lost(LossReason::OutOfEnergy))
        );
        assert_eq!(
            evaluate(0, 100, &energy(3), &full_board()),
            Some(GameStatus::Lost(LossReason::BoardFull))
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Playing.to_string(), "Playing");
        assert_eq!(
            GameStatus::Lost(LossReason::OutOfEnergy).to_string(),
            "Lost: Out of energy"
        );
        assert!(GameStatus::Lost(LossReason::NoAffordableDraft { vp: 42 })
            .to_string()
            .ends_with("Final VP: 42"));
        assert!(GameStatus::Won.is_terminal());
    }
}
