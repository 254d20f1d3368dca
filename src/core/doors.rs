//! Door flags and tile rotation.
//!
//! Templates author their doors once. Placed tiles carry a [`Rotation`] that
//! is applied on read, so the template itself is never mutated.
//!
//! One clockwise quarter-turn moves every face one step clockwise: the new
//! North face shows what was on the West face, East shows old North, South
//! shows old East, West shows old South.

use serde::{Deserialize, Serialize};

use super::geometry::Direction;

/// Passable edges of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doors {
    pub n: bool,
    pub e: bool,
    pub s: bool,
    pub w: bool,
}

impl Doors {
    /// Doors on every edge.
    pub const ALL: Doors = Doors { n: true, e: true, s: true, w: true };

    /// Create a door set.
    #[must_use]
    pub const fn new(n: bool, e: bool, s: bool, w: bool) -> Self {
        Self { n, e, s, w }
    }

    /// Read the flag for one edge.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::N => self.n,
            Direction::E => self.e,
            Direction::S => self.s,
            Direction::W => self.w,
        }
    }

    /// Number of open edges.
    #[must_use]
    pub fn count(self) -> usize {
        [self.n, self.e, self.s, self.w].into_iter().filter(|d| *d).count()
    }

    /// One clockwise quarter-turn.
    #[must_use]
    pub const fn rotate_quarter(self) -> Self {
        Self {
            n: self.w,
            e: self.n,
            s: self.e,
            w: self.s,
        }
    }

    /// Apply a rotation (a sequence of clockwise quarter-turns).
    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Self {
        (0..rotation.quarter_turns()).fold(self, |doors, _| doors.rotate_quarter())
    }
}

/// Clockwise rotation of a placed tile, restricted to multiples of 90°.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation from degrees. Only 0, 90, 180 and 270 are valid.
    #[must_use]
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Rotation in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// Number of clockwise quarter-turns.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees).ok_or_else(|| format!("invalid rotation {degrees}°"))
    }
}

/// Rotation that makes a fresh tile's template South door face `entry_side`,
/// the edge the player walks in through.
///
/// The entry side is the inverse of the movement direction: stepping North
/// onto a new cell enters it through its South edge, which needs no turn.
#[must_use]
pub const fn rotation_for_entry(entry_side: Direction) -> Rotation {
    match entry_side {
        Direction::S => Rotation::Deg0,
        Direction::W => Rotation::Deg90,
        Direction::N => Rotation::Deg180,
        Direction::E => Rotation::Deg270,
    }
}

/// Rotate `doors` then read the flag for `direction`.
#[must_use]
pub fn door_facing(doors: Doors, rotation: Rotation, direction: Direction) -> bool {
    doors.rotated(rotation).has(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_doors() -> impl Strategy<Value = Doors> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(n, e, s, w)| Doors::new(n, e, s, w))
    }

    #[test]
    fn test_quarter_turn_mapping() {
        let only_west = Doors::new(false, false, false, true);
        assert_eq!(only_west.rotated(Rotation::Deg90), Doors::new(true, false, false, false));

        let only_south = Doors::new(false, false, true, false);
        assert_eq!(only_south.rotated(Rotation::Deg90), Doors::new(false, false, false, true));
        assert_eq!(only_south.rotated(Rotation::Deg180), Doors::new(true, false, false, false));
        assert_eq!(only_south.rotated(Rotation::Deg270), Doors::new(false, true, false, false));
    }

    #[test]
    fn test_rotation_degrees() {
        for degrees in [0u16, 90, 180, 270] {
            let rotation = Rotation::from_degrees(degrees).unwrap();
            assert_eq!(rotation.degrees(), degrees);
        }
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(360), None);
    }

    #[test]
    fn test_rotation_serde() {
        let json = serde_json::to_string(&Rotation::Deg270).unwrap();
        assert_eq!(json, "270");
        let back: Rotation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rotation::Deg270);

        assert!(serde_json::from_str::<Rotation>("45").is_err());
    }

    #[test]
    fn test_entry_rotation_table() {
        assert_eq!(rotation_for_entry(Direction::S), Rotation::Deg0);
        assert_eq!(rotation_for_entry(Direction::W), Rotation::Deg90);
        assert_eq!(rotation_for_entry(Direction::N), Rotation::Deg180);
        assert_eq!(rotation_for_entry(Direction::E), Rotation::Deg270);
    }

    #[test]
    fn test_door_count() {
        assert_eq!(Doors::ALL.count(), 4);
        assert_eq!(Doors::default().count(), 0);
        assert_eq!(Doors::new(true, false, true, false).count(), 2);
    }

    proptest! {
        #[test]
        fn prop_full_turn_is_identity(doors in arb_doors()) {
            let turned = (0..4).fold(doors, |d, _| d.rotated(Rotation::Deg90));
            prop_assert_eq!(turned, doors);
        }

        #[test]
        fn prop_rotation_preserves_door_count(doors in arb_doors(), turns in 0u16..4) {
            let rotation = Rotation::from_degrees(turns * 90).unwrap();
            prop_assert_eq!(doors.rotated(rotation).count(), doors.count());
        }

        #[test]
        fn prop_entry_rotation_points_south_door_back(doors in arb_doors()) {
            for side in Direction::all() {
                prop_assert_eq!(door_facing(doors, rotation_for_entry(side), side), doors.s);
            }
        }
    }
}
