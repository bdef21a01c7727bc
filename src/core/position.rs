//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the square board grid.
///
/// Coordinates are 0-based with `x` as the column and `y` as the row.
/// Values are immutable; whether a position lies on a given board is
/// checked by [`Board::contains`](crate::board::Board::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    x: u8,
    y: u8,
}

impl BoardPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Check whether the position lies on a board of side `size`.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// Chebyshev distance (king moves) between two cells.
    #[must_use]
    pub fn distance(self, other: Self) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(u8, u8)> for BoardPosition {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(BoardPosition::new(3, 4), BoardPosition::new(3, 4));
        assert_ne!(BoardPosition::new(3, 4), BoardPosition::new(4, 3));
        assert_eq!(BoardPosition::from((1, 2)), BoardPosition::new(1, 2));
    }

    #[test]
    fn test_is_within() {
        assert!(BoardPosition::new(0, 0).is_within(8));
        assert!(BoardPosition::new(7, 7).is_within(8));
        assert!(!BoardPosition::new(8, 0).is_within(8));
        assert!(!BoardPosition::new(0, 8).is_within(8));
        assert!(!BoardPosition::new(0, 0).is_within(0));
    }

    #[test]
    fn test_distance() {
        let origin = BoardPosition::new(0, 0);
        assert_eq!(origin.distance(origin), 0);
        assert_eq!(origin.distance(BoardPosition::new(3, 1)), 3);
        assert_eq!(BoardPosition::new(5, 2).distance(BoardPosition::new(1, 7)), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoardPosition::new(0, 7)), "(0, 7)");
    }
}
