use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Delta};

/// Axis-aligned box. Once committed, `tl <= br` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub tl: Coord,
    pub br: Coord,
}

/// A corner of a rectangle, used as a resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

impl Rectangle {
    /// Rectangle spanned by any two opposite cells, normalized so `tl <= br`
    pub fn from_corners(a: Coord, b: Coord) -> Self {
        Self {
            tl: a.min(b),
            br: a.max(b),
        }
    }

    pub fn corner(&self, corner: Corner) -> Coord {
        match corner {
            Corner::TopLeft => self.tl,
            Corner::TopRight => Coord::new(self.tl.r, self.br.c),
            Corner::BottomLeft => Coord::new(self.br.r, self.tl.c),
            Corner::BottomRight => self.br,
        }
    }

    /// Which corner sits at `point`, checked in `Corner::ALL` order
    pub fn corner_at(&self, point: Coord) -> Option<Corner> {
        Corner::ALL.into_iter().find(|corner| self.corner(*corner) == point)
    }

    /// Zero area: a single row or a single column of cells
    pub fn is_degenerate(&self) -> bool {
        self.tl.r == self.br.r || self.tl.c == self.br.c
    }

    pub fn contains(&self, point: Coord) -> bool {
        (self.tl.r..=self.br.r).contains(&point.r) && (self.tl.c..=self.br.c).contains(&point.c)
    }

    pub fn translated(&self, delta: Delta) -> Self {
        Self {
            tl: self.tl + delta,
            br: self.br + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_normalize() {
        let rect = Rectangle::from_corners(Coord::new(5, 1), Coord::new(2, 7));
        assert_eq!(rect.tl, Coord::new(2, 1));
        assert_eq!(rect.br, Coord::new(5, 7));
        assert_eq!(rect.corner(Corner::TopRight), Coord::new(2, 7));
        assert_eq!(rect.corner_at(Coord::new(5, 1)), Some(Corner::BottomLeft));
        assert_eq!(rect.corner_at(Coord::new(3, 3)), None);
    }

    #[test]
    fn single_row_is_degenerate() {
        assert!(Rectangle::from_corners(Coord::new(1, 1), Coord::new(1, 9)).is_degenerate());
        assert!(!Rectangle::from_corners(Coord::new(1, 1), Coord::new(2, 2)).is_degenerate());
    }
}
