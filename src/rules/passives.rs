//! Passive ability propagation.
//!
//! Whenever a tile is placed, every tile on the board (the new one
//! included) whose passive ability triggers on the new tile's colour pays
//! out once.

use super::payout::{Payout, PayoutSource};
use crate::board::Board;
use crate::tiles::{TileCatalog, TileColor};

/// Collect the passive payouts caused by placing a tile of `placed`.
///
/// The new tile must already be on the board.
#[must_use]
pub fn propagate(board: &Board, catalog: &TileCatalog, placed: TileColor) -> Vec<Payout> {
    board
        .tiles()
        .filter_map(|tile| catalog.get(tile.template).map(|t| (tile.position, t)))
        .flat_map(|(owner, template)| {
            template
                .passives
                .iter()
                .filter(move |ability| ability.trigger_color == placed)
                .map(move |ability| Payout {
                    owner,
                    owner_name: template.name.clone(),
                    label: ability.label.clone(),
                    reward: ability.reward,
                    source: PayoutSource::Passive { trigger: placed },
                })
        })
        .collect()
}
