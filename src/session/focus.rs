//! Keyboard focus projection.
//!
//! Focus is a convenience for front ends that drive the game from the
//! keyboard: either the grid has focus, or the details panel of the
//! current tile does, with one of its actions highlighted. It never
//! affects simulation results.

use serde::{Deserialize, Serialize};

/// Which panel has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusMode {
    #[default]
    Grid,
    Details,
}

/// Current focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub mode: FocusMode,
    /// Highlighted action on the current tile.
    pub action_index: usize,
}

impl Focus {
    /// Switch mode. Entering details highlights the first action.
    pub fn set_mode(&mut self, mode: FocusMode) {
        self.mode = mode;
        if mode == FocusMode::Details {
            self.action_index = 0;
        }
    }

    /// Highlight an action, clamped to `0..action_count`.
    pub fn set_action_index(&mut self, index: usize, action_count: usize) {
        self.action_index = index.min(action_count.saturating_sub(1));
    }

    /// Back to the grid.
    pub fn reset(&mut self) {
        self.mode = FocusMode::Grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_resets_index() {
        let mut focus = Focus {
            mode: FocusMode::Grid,
            action_index: 2,
        };
        focus.set_mode(FocusMode::Details);
        assert_eq!(focus.action_index, 0);

        focus.set_action_index(1, 3);
        focus.set_mode(FocusMode::Grid);
        assert_eq!(focus.action_index, 1);
    }

    #[test]
    fn test_index_is_clamped() {
        let mut focus = Focus::default();
        focus.set_action_index(9, 3);
        assert_eq!(focus.action_index, 2);

        focus.set_action_index(4, 0);
        assert_eq!(focus.action_index, 0);
    }
}
