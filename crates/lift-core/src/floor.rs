//! Floor numbers and travel direction.

use std::fmt;

/// A floor of the building.  Floor 0 is the lobby, where guests arrive and
/// from which they leave.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Cast to `usize` for indexing per-floor counters.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// The adjacent floor in `dir`, or `None` below the ground floor.
    ///
    /// The upper bound is the building's business, not the floor's.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Floor> {
        match dir {
            Direction::Up   => self.0.checked_add(1).map(Floor),
            Direction::Down => self.0.checked_sub(1).map(Floor),
        }
    }

    /// `true` if `self` lies strictly past `from` when travelling in `dir`.
    #[inline]
    pub fn is_beyond(self, from: Floor, dir: Direction) -> bool {
        match dir {
            Direction::Up   => self > from,
            Direction::Down => self < from,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Scan direction of an elevator, or desired direction of a waiting guest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Direction a guest at `from` must travel to reach `to`.
    ///
    /// `from == to` counts as `Down`, matching the rule that anything not
    /// strictly above is served on the way down.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
