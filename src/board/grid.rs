//! Board of placed tiles.
//!
//! The `Board` is a fixed-size, row-major grid of optional [`PlacedTile`]s.
//! It supports:
//! - Lookup by position (off-board positions read as empty)
//! - One-shot placement (a cell is filled once and never cleared)
//! - Iteration over placed tiles in row-major order

use serde::{Deserialize, Serialize};

use crate::core::{GridSize, Position};
use crate::tiles::PlacedTile;

/// The game board.
///
/// ## Usage
///
/// ```
/// use tile_explorer::board::Board;
/// use tile_explorer::core::{GridSize, Position, Rotation};
/// use tile_explorer::tiles::{PlacedTile, TemplateId};
///
/// let mut board = Board::new(GridSize::new(5, 5));
/// let at = Position::new(2, 4);
///
/// board.place(PlacedTile::new(at, TemplateId::new(0), Rotation::Deg0));
///
/// assert!(board.is_occupied(at));
/// assert_eq!(board.tiles_placed(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    cells: Vec<Option<PlacedTile>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Tile at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&PlacedTile> {
        self.size.index_of(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable tile at `pos`, if any.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut PlacedTile> {
        self.size.index_of(pos).and_then(|i| self.cells[i].as_mut())
    }

    /// Is there a tile at `pos`?
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Place a tile at its own position.
    ///
    /// Placing off the board or onto an occupied cell is a programming
    /// error: callers validate the target first.
    pub fn place(&mut self, tile: PlacedTile) {
        let index = self
            .size
            .index_of(tile.position)
            .unwrap_or_else(|| panic!("placement at {} is off the board", tile.position));
        assert!(
            self.cells[index].is_none(),
            "cell {} is already occupied",
            tile.position
        );
        self.cells[index] = Some(tile);
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn tiles_placed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Is every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles_placed() == self.size.cell_count()
    }

    /// Iterate over placed tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.cells.iter().flatten()
    }

    /// Does the cell list match the declared size?
    ///
    /// Only a hand-edited or corrupted snapshot can fail this.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.size.cell_count()
            && self.cells.iter().enumerate().all(|(i, cell)| {
                cell.as_ref()
                    .map_or(true, |tile| tile.position == self.size.position_of(i))
            })
    }
}
