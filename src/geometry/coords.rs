use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A cell on the grid. Rows grow downward, columns grow rightward.
///
/// Ordering is row-major, which is also the order cells are visited when a
/// representation is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub r: i32,
    pub c: i32,
}

impl Coord {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    pub fn min(self, other: Coord) -> Coord {
        Coord::new(self.r.min(other.r), self.c.min(other.c))
    }

    pub fn max(self, other: Coord) -> Coord {
        Coord::new(self.r.max(other.r), self.c.max(other.c))
    }

    /// True when both cells share a row or a column
    pub fn is_colinear_with(self, other: Coord) -> bool {
        self.r == other.r || self.c == other.c
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Offset between two cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub r: i32,
    pub c: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { r: 0, c: 0 };

    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Add<Delta> for Coord {
    type Output = Coord;
    fn add(self, rhs: Delta) -> Coord {
        Coord::new(self.r + rhs.r, self.c + rhs.c)
    }
}

impl Sub<Coord> for Coord {
    type Output = Delta;
    fn sub(self, rhs: Coord) -> Delta {
        Delta::new(self.r - rhs.r, self.c - rhs.c)
    }
}

/// Number of rows and columns of the canvas. Valid cells are
/// `[0, rows) x [0, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub rows: i32,
    pub cols: i32,
}

impl CanvasSize {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.rows).contains(&coord.r) && (0..self.cols).contains(&coord.c)
    }

    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_contains_is_half_open() {
        let canvas = CanvasSize::new(10, 10);
        assert!(canvas.contains(Coord::new(0, 0)));
        assert!(canvas.contains(Coord::new(9, 9)));
        assert!(!canvas.contains(Coord::new(10, 0)));
        assert!(!canvas.contains(Coord::new(0, -1)));
    }

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(3, 4);
        let b = Coord::new(1, 7);
        assert_eq!(a - b, Delta::new(2, -3));
        assert_eq!(b + (a - b), a);
        assert_eq!(a.min(b), Coord::new(1, 4));
        assert_eq!(a.max(b), Coord::new(3, 7));
    }
}
