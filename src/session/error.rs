//! Command rejections.
//!
//! Invalid intents are routine in an interactive game, so a rejected
//! command is not a failure of the engine. Every `Err(Rejection)` leaves
//! the session exactly as it was, apart from an optional feedback entry in
//! the message log.

use thiserror::Error;

use crate::core::{Direction, Position, Resources};
use crate::tiles::{ActionId, TemplateId};

/// Why a command did nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over")]
    NotPlaying,

    #[error("a draft is in progress")]
    Drafting,

    #[error("no draft is in progress")]
    NotDrafting,

    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("{0} is not adjacent to the player")]
    NotAdjacent(Position),

    #[error("no door leads {0} from the current tile")]
    NoExitDoor(Direction),

    #[error("the tile at {0} has no door facing back")]
    NoEntranceDoor(Position),

    #[error("no tile at {0}")]
    EmptyTarget(Position),

    #[error("the player is already at {0}")]
    AlreadyThere(Position),

    #[error("not enough energy: need {needed}, have {available}")]
    InsufficientEnergy { needed: i64, available: i64 },

    #[error("missing {missing}")]
    InsufficientResources { missing: Resources },

    #[error("not enough workers: need {needed}, have {available}")]
    InsufficientWorkers { needed: i64, available: i64 },

    #[error("reroll limit of {0} reached")]
    RerollLimit(u32),

    #[error("{0} is not one of the offered tiles")]
    NotOffered(TemplateId),

    #[error("the current tile has no action {0:?}")]
    UnknownAction(ActionId),

    #[error("action {0:?} cannot be used again")]
    ActionExhausted(ActionId),

    #[error("the focused tile has no actions")]
    NoFocusedAction,
}

/// Result of a session command.
pub type CommandResult<T> = std::result::Result<T, Rejection>;
