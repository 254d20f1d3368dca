//! Victory point computation.
//!
//! VP is derived on demand from the board and never cached:
//!
//! - **Flat**: each placed non-starter tile adds its template's flat VP
//! - **Per colour**: each "N VP per tile of colour X" rule multiplies by the
//!   number of tiles of colour X on the board *now*, the defining tile
//!   included when it has that colour
//! - **Accumulated**: VP granted by actions, passives and quests
//!
//! Tiles whose template is missing from the catalog contribute nothing.

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::tiles::{TileCatalog, TileColor};

/// VP split by source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub flat: i64,
    pub per_color: i64,
    pub accumulated: i64,
}

impl ScoreBreakdown {
    /// Total VP.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.flat + self.per_color + self.accumulated
    }
}

/// Count placed tiles by colour.
#[must_use]
pub fn color_counts(board: &Board, catalog: &TileCatalog) -> FxHashMap<TileColor, i64> {
    let mut counts = FxHashMap::default();
    for template in board.tiles().filter_map(|t| catalog.get(t.template)) {
        *counts.entry(template.color).or_insert(0) += 1;
    }
    counts
}

/// Score the board.
#[must_use]
pub fn score(board: &Board, catalog: &TileCatalog, accumulated: i64) -> ScoreBreakdown {
    let counts = color_counts(board, catalog);
    let mut breakdown = ScoreBreakdown {
        accumulated,
        ..ScoreBreakdown::default()
    };

    for template in board.tiles().filter_map(|t| catalog.get(t.template)) {
        if template.is_starter() {
            continue;
        }
        let Some(logic) = &template.vp else {
            continue;
        };
        breakdown.flat += logic.flat;
        for (color, per) in &logic.per_color {
            breakdown.per_color += per * counts.get(color).copied().unwrap_or(0);
        }
    }

    breakdown
}

/// Total VP for the board plus accumulated VP.
#[must_use]
pub fn victory_points(board: &Board, catalog: &TileCatalog, accumulated: i64) -> i64 {
    score(board, catalog, accumulated).total()
}
