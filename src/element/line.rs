use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Delta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Travel direction of a segment, from its start towards its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    Up,
    Down,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::LeftToRight | Direction::RightToLeft => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Horizontal direction implied by a column delta; zero counts as left-to-right
    pub fn horizontal(dc: i32) -> Direction {
        if dc < 0 { Direction::RightToLeft } else { Direction::LeftToRight }
    }

    /// Vertical direction implied by a row delta; zero counts as downward
    pub fn vertical(dr: i32) -> Direction {
        if dr < 0 { Direction::Up } else { Direction::Down }
    }
}

/// A straight, single-axis run of cells.
///
/// `start` and `end` share a row when horizontal and a column when vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub axis: Axis,
    pub direction: Direction,
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    /// Build a segment between two colinear cells. Returns `None` when the
    /// cells share neither a row nor a column.
    pub fn between(start: Coord, end: Coord) -> Option<Segment> {
        if start.r == end.r {
            let direction = Direction::horizontal(end.c - start.c);
            Some(Segment { axis: Axis::Horizontal, direction, start, end })
        } else if start.c == end.c {
            let direction = Direction::vertical(end.r - start.r);
            Some(Segment { axis: Axis::Vertical, direction, start, end })
        } else {
            None
        }
    }

    /// Number of cells the segment spans minus one
    pub fn length(&self) -> i32 {
        match self.axis {
            Axis::Horizontal => (self.end.c - self.start.c).abs(),
            Axis::Vertical => (self.end.r - self.start.r).abs(),
        }
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    pub fn reversed(&self) -> Segment {
        Segment {
            axis: self.axis,
            direction: self.direction.reversed(),
            start: self.end,
            end: self.start,
        }
    }

    pub fn translated(&self, delta: Delta) -> Segment {
        Segment {
            start: self.start + delta,
            end: self.end + delta,
            ..*self
        }
    }

    /// Whether the stored axis and direction agree with the endpoints.
    ///
    /// A zero-length segment only needs a direction on its own axis.
    pub fn is_well_formed(&self) -> bool {
        if self.direction.axis() != self.axis {
            return false;
        }
        if self.is_zero_length() {
            return true;
        }
        Segment::between(self.start, self.end).as_ref() == Some(self)
    }

    /// Every cell from `start` to `end` inclusive.
    ///
    /// The walk follows the endpoints rather than the stored direction, so a
    /// malformed segment still yields a finite run ending at `end`.
    pub fn cells(&self) -> Vec<Coord> {
        let delta = self.end - self.start;
        let steps = delta.r.abs().max(delta.c.abs());
        let mut cells = Vec::with_capacity(steps as usize + 1);
        let mut cell = self.start;
        cells.push(cell);
        for _ in 0..steps {
            cell = Coord::new(
                cell.r + (self.end.r - cell.r).signum(),
                cell.c + (self.end.c - cell.c).signum(),
            );
            cells.push(cell);
        }
        cells
    }
}

/// Placeholder segment used before the first drag: horizontal, `start == end`
pub fn create_zero_width_segment(point: Coord) -> Segment {
    Segment {
        axis: Axis::Horizontal,
        direction: Direction::LeftToRight,
        start: point,
        end: point,
    }
}

/// Snap a two-point drag onto the dominant axis.
///
/// Horizontal wins ties (`|dc| >= |dr|`). The end cell is projected onto the
/// start's row or column so the result is always a valid segment.
pub fn create_line_segment(start: Coord, end: Coord) -> Segment {
    let delta = end - start;
    if delta.c.abs() >= delta.r.abs() {
        Segment {
            axis: Axis::Horizontal,
            direction: Direction::horizontal(delta.c),
            start,
            end: Coord::new(start.r, end.c),
        }
    } else {
        Segment {
            axis: Axis::Vertical,
            direction: Direction::vertical(delta.r),
            start,
            end: Coord::new(end.r, start.c),
        }
    }
}
