//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// Coordinates are signed so that offsets and out-of-board neighbours can be
/// expressed without wrapping; boards decide which cells actually exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// This cell shifted by `(dx, dy)`, or `None` on overflow.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        Some(Coord::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Coord::new(2, 3).offset(-1, 1), Some(Coord::new(1, 4)));
        assert_eq!(Coord::new(i8::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(15, 0)), "(15, 0)");
    }
}
