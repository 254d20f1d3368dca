//! Grid geometry: positions, cardinal directions, and bounds.
//!
//! ## Coordinates
//!
//! `x` grows eastwards, `y` grows southwards. `(0, 0)` is the north-west
//! corner of the board. Moving North therefore decrements `y`.
//!
//! Neighbour lookups never fail: a step that leaves the board yields `None`.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A cell on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// The position one step away in `direction`, ignoring bounds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    /// All four directions, clockwise from North.
    pub fn all() -> impl Iterator<Item = Direction> {
        Direction::iter()
    }

    /// The opposite direction (N↔S, E↔W).
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::E => Direction::W,
            Direction::S => Direction::N,
            Direction::W => Direction::E,
        }
    }

    /// Unit offset `(dx, dy)` of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::E => (1, 0),
            Direction::S => (0, 1),
            Direction::W => (-1, 0),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::N => "north",
            Direction::E => "east",
            Direction::S => "south",
            Direction::W => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Create a new grid size.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Grid must have at least one cell");
        Self { width, height }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Is `pos` on the board?
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Row-major index of `pos`, or `None` when off the board.
    #[must_use]
    pub fn index_of(self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Position of a row-major index.
    #[must_use]
    pub fn position_of(self, index: usize) -> Position {
        debug_assert!(index < self.cell_count(), "cell index {index} out of bounds");
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    /// The neighbouring cell in `direction`, or `None` if it falls off the board.
    #[must_use]
    pub fn adjacent_position(self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.step(direction);
        self.contains(next).then_some(next)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { width: 5, height: 8 }
    }
}

/// Cardinal direction from `from` to `to`, if they are orthogonal neighbours.
#[must_use]
pub fn direction_between(from: Position, to: Position) -> Option<Direction> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    Direction::all().find(|d| {
        let (ox, oy) = d.offset();
        (i64::from(ox), i64::from(oy)) == (dx, dy)
    })
}

/// Are `a` and `b` orthogonal neighbours (Manhattan distance exactly 1)?
#[must_use]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.manhattan(b) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_adjacent_position_in_bounds() {
        let grid = GridSize::new(5, 8);
        let pos = Position::new(2, 7);

        assert_eq!(grid.adjacent_position(pos, Direction::N), Some(Position::new(2, 6)));
        assert_eq!(grid.adjacent_position(pos, Direction::E), Some(Position::new(3, 7)));
        assert_eq!(grid.adjacent_position(pos, Direction::W), Some(Position::new(1, 7)));
        assert_eq!(grid.adjacent_position(pos, Direction::S), None);
    }

    #[test]
    fn test_adjacent_position_corners() {
        let grid = GridSize::new(5, 5);

        assert_eq!(grid.adjacent_position(Position::new(0, 0), Direction::N), None);
        assert_eq!(grid.adjacent_position(Position::new(0, 0), Direction::W), None);
        assert_eq!(grid.adjacent_position(Position::new(4, 4), Direction::E), None);
        assert_eq!(grid.adjacent_position(Position::new(4, 4), Direction::S), None);
    }

    #[test]
    fn test_direction_between() {
        let origin = Position::new(2, 2);

        assert_eq!(direction_between(origin, Position::new(2, 1)), Some(Direction::N));
        assert_eq!(direction_between(origin, Position::new(3, 2)), Some(Direction::E));
        assert_eq!(direction_between(origin, Position::new(2, 3)), Some(Direction::S));
        assert_eq!(direction_between(origin, Position::new(1, 2)), Some(Direction::W));

        assert_eq!(direction_between(origin, origin), None);
        assert_eq!(direction_between(origin, Position::new(3, 3)), None);
        assert_eq!(direction_between(origin, Position::new(2, 4)), None);
    }

    #[test]
    fn test_extreme_coordinates() {
        let low = Position::new(i32::MIN, i32::MIN);
        let high = Position::new(i32::MAX, i32::MAX);

        assert_eq!(low.manhattan(high), 2 * u64::from(u32::MAX));
        assert!(!is_adjacent(low, high));
        assert_eq!(direction_between(low, high), None);

        let edge = Position::new(i32::MAX, 0);
        assert_eq!(direction_between(edge, Position::new(i32::MAX - 1, 0)), Some(Direction::W));
        assert!(is_adjacent(edge, Position::new(i32::MAX - 1, 0)));
    }

    #[test]
    fn test_inverse_is_involution() {
        for d in Direction::all() {
            assert_eq!(d.inverse().inverse(), d);
            assert_ne!(d.inverse(), d);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = GridSize::new(5, 8);
        for index in 0..grid.cell_count() {
            let pos = grid.position_of(index);
            assert_eq!(grid.index_of(pos), Some(index));
        }
        assert_eq!(grid.index_of(Position::new(5, 0)), None);
        assert_eq!(grid.index_of(Position::new(0, -1)), None);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn test_zero_grid_panics() {
        let _ = GridSize::new(0, 3);
    }

    proptest! {
        #[test]
        fn prop_adjacency_symmetric(ax in -2i32..8, ay in -2i32..10, bx in -2i32..8, by in -2i32..10) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(is_adjacent(a, b), is_adjacent(b, a));
        }

        #[test]
        fn prop_direction_between_inverse(ax in 0i32..6, ay in 0i32..6, bx in 0i32..6, by in 0i32..6) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            if let (Some(ab), Some(ba)) = (direction_between(a, b), direction_between(b, a)) {
                prop_assert_eq!(ab.inverse(), ba);
            }
        }
    }
}
