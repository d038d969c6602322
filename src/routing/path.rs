//! Path segments and the predicates used to rank candidate routes.

use crate::element::{Axis, Direction, Segment};
use crate::geometry::Coord;

/// One axis-typed leg of a routed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Horizontal {
        r: i32,
        c_from: i32,
        c_to: i32,
        direction: Direction,
    },
    Vertical {
        c: i32,
        r_from: i32,
        r_to: i32,
        direction: Direction,
    },
}

/// Ordered legs of a route; consecutive legs share their joint cell
pub type Path = Vec<PathSegment>;

impl PathSegment {
    pub fn horizontal(r: i32, c_from: i32, c_to: i32) -> Self {
        PathSegment::Horizontal {
            r,
            c_from,
            c_to,
            direction: Direction::horizontal(c_to - c_from),
        }
    }

    pub fn vertical(c: i32, r_from: i32, r_to: i32) -> Self {
        PathSegment::Vertical {
            c,
            r_from,
            r_to,
            direction: Direction::vertical(r_to - r_from),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            PathSegment::Horizontal { .. } => Axis::Horizontal,
            PathSegment::Vertical { .. } => Axis::Vertical,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            PathSegment::Horizontal { direction, .. } | PathSegment::Vertical { direction, .. } => *direction,
        }
    }

    pub fn start(&self) -> Coord {
        match *self {
            PathSegment::Horizontal { r, c_from, .. } => Coord::new(r, c_from),
            PathSegment::Vertical { c, r_from, .. } => Coord::new(r_from, c),
        }
    }

    pub fn end(&self) -> Coord {
        match *self {
            PathSegment::Horizontal { r, c_to, .. } => Coord::new(r, c_to),
            PathSegment::Vertical { c, r_to, .. } => Coord::new(r_to, c),
        }
    }

    pub fn is_zero_length(&self) -> bool {
        self.start() == self.end()
    }

    pub fn to_segment(&self) -> Segment {
        Segment {
            axis: self.axis(),
            direction: self.direction(),
            start: self.start(),
            end: self.end(),
        }
    }
}

impl From<&Segment> for PathSegment {
    fn from(seg: &Segment) -> Self {
        match seg.axis {
            Axis::Horizontal => PathSegment::Horizontal {
                r: seg.start.r,
                c_from: seg.start.c,
                c_to: seg.end.c,
                direction: seg.direction,
            },
            Axis::Vertical => PathSegment::Vertical {
                c: seg.start.c,
                r_from: seg.start.r,
                r_to: seg.end.r,
                direction: seg.direction,
            },
        }
    }
}

/// Every minimal rectilinear route between two cells.
///
/// Identical cells give a single zero-length horizontal leg, cells sharing a
/// row or column give the straight leg, anything else gives the
/// horizontal-then-vertical route followed by the vertical-then-horizontal one.
pub fn get_all_paths_between_two_points(from: Coord, to: Coord) -> Vec<Path> {
    if from == to {
        return vec![vec![PathSegment::Horizontal {
            r: from.r,
            c_from: from.c,
            c_to: from.c,
            direction: Direction::LeftToRight,
        }]];
    }
    if from.r == to.r {
        return vec![vec![PathSegment::horizontal(from.r, from.c, to.c)]];
    }
    if from.c == to.c {
        return vec![vec![PathSegment::vertical(from.c, from.r, to.r)]];
    }
    vec![
        vec![
            PathSegment::horizontal(from.r, from.c, to.c),
            PathSegment::vertical(to.c, from.r, to.r),
        ],
        vec![
            PathSegment::vertical(from.c, from.r, to.r),
            PathSegment::horizontal(to.r, from.c, to.c),
        ],
    ]
}

pub fn join_paths(first: &[PathSegment], second: &[PathSegment]) -> Path {
    first.iter().chain(second).copied().collect()
}

/// Direction changes between adjacent legs, reversals included
pub fn get_turn_count(path: &[PathSegment]) -> usize {
    path.windows(2)
        .filter(|pair| pair[0].axis() != pair[1].axis() || pair[0].direction() != pair[1].direction())
        .count()
}

/// Two adjacent legs on the same axis running opposite ways
pub fn has_u_turn(path: &[PathSegment]) -> bool {
    path.windows(2)
        .any(|pair| pair[0].axis() == pair[1].axis() && pair[0].direction() != pair[1].direction())
}

/// True when some vertical leg passes through the interior of some horizontal
/// leg. Touching at an endpoint is not a crossing.
pub fn has_crossing(path: &[PathSegment]) -> bool {
    path.iter().any(|h| {
        let PathSegment::Horizontal { r, c_from, c_to, .. } = *h else {
            return false;
        };
        path.iter().any(|v| {
            let PathSegment::Vertical { c, r_from, r_to, .. } = *v else {
                return false;
            };
            strictly_between(c, c_from, c_to) && strictly_between(r, r_from, r_to)
        })
    })
}

fn strictly_between(value: i32, a: i32, b: i32) -> bool {
    a.min(b) < value && value < a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero_length_left_to_right() {
        let paths = get_all_paths_between_two_points(Coord::new(2, 2), Coord::new(2, 2));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 1);
        assert!(paths[0][0].is_zero_length());
        assert_eq!(paths[0][0].direction(), Direction::LeftToRight);
    }

    #[test]
    fn diagonal_points_give_both_elbows() {
        let paths = get_all_paths_between_two_points(Coord::new(4, 0), Coord::new(2, 2));
        assert_eq!(
            paths,
            vec![
                vec![PathSegment::horizontal(4, 0, 2), PathSegment::vertical(2, 4, 2)],
                vec![PathSegment::vertical(0, 4, 2), PathSegment::horizontal(2, 0, 2)],
            ]
        );
        assert_eq!(paths[1][0].direction(), Direction::Up);
    }

    #[test]
    fn turn_count_includes_reversals() {
        let path = vec![
            PathSegment::horizontal(0, 0, 4),
            PathSegment::horizontal(0, 4, 6),
            PathSegment::vertical(6, 0, 3),
            PathSegment::vertical(6, 3, 1),
        ];
        assert_eq!(get_turn_count(&path), 2);
        assert!(has_u_turn(&path));
    }

    #[test]
    fn crossing_needs_strict_interiors() {
        let crossing = vec![
            PathSegment::horizontal(2, 0, 4),
            PathSegment::vertical(4, 2, 0),
            PathSegment::horizontal(0, 4, 2),
            PathSegment::vertical(2, 0, 4),
        ];
        assert!(has_crossing(&crossing));

        let touching = vec![PathSegment::horizontal(2, 0, 4), PathSegment::vertical(4, 2, 6)];
        assert!(!has_crossing(&touching));
    }

    #[test]
    fn segment_conversion_round_trips() {
        let seg = crate::element::create_line_segment(Coord::new(5, 5), Coord::new(1, 5));
        assert_eq!(PathSegment::from(&seg).to_segment(), seg);
    }
}
