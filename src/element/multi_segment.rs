use serde::{Deserialize, Serialize};

use super::line::Segment;
use crate::error::Rejection;
use crate::geometry::{Coord, Delta};

/// Continuous rectilinear polyline: `segments[i].end == segments[i + 1].start`.
///
/// Committed lines are normalized (see [`normalize_segments`]); the shape
/// being drawn may carry a trailing zero-length segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiSegment {
    pub segments: Vec<Segment>,
}

impl MultiSegment {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Start of the first segment followed by the end of every segment
    pub fn vertices(&self) -> Vec<Coord> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.start);
        }
        points.extend(self.segments.iter().map(|seg| seg.end));
        points
    }

    pub fn first_point(&self) -> Option<Coord> {
        self.segments.first().map(|seg| seg.start)
    }

    pub fn last_point(&self) -> Option<Coord> {
        self.segments.last().map(|seg| seg.end)
    }

    pub fn translated(&self, delta: Delta) -> Self {
        Self {
            segments: self.segments.iter().map(|seg| seg.translated(delta)).collect(),
        }
    }

    pub fn normalized(&self) -> Result<MultiSegment, Rejection> {
        normalize_segments(&self.segments).map(MultiSegment::new)
    }
}

/// Rebuild segments from a vertex list. Every consecutive pair must share a
/// row or a column.
pub fn segments_from_vertices(points: &[Coord]) -> Result<Vec<Segment>, Rejection> {
    points
        .windows(2)
        .map(|pair| Segment::between(pair[0], pair[1]).ok_or(Rejection::Degenerate))
        .collect()
}

/// Canonical form of a polyline.
///
/// Zero-length segments are dropped, consecutive segments running the same
/// way are merged, and a reversal on the same axis is refused. A polyline
/// with nothing left is degenerate.
pub fn normalize_segments(segments: &[Segment]) -> Result<Vec<Segment>, Rejection> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments.iter().filter(|seg| !seg.is_zero_length()) {
        match out.last_mut() {
            Some(prev) if prev.axis == seg.axis && prev.direction == seg.direction => {
                prev.end = seg.end;
            }
            Some(prev) if prev.axis == seg.axis => return Err(Rejection::UTurn),
            _ => out.push(*seg),
        }
    }
    if out.is_empty() {
        return Err(Rejection::Degenerate);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::line::{Axis, Direction, create_line_segment, create_zero_width_segment};

    fn seg(a: (i32, i32), b: (i32, i32)) -> Segment {
        Segment::between(Coord::new(a.0, a.1), Coord::new(b.0, b.1)).unwrap()
    }

    #[test]
    fn merges_colinear_runs() {
        let merged = normalize_segments(&[seg((0, 0), (0, 3)), seg((0, 3), (0, 6)), seg((0, 6), (4, 6))]).unwrap();
        assert_eq!(merged, vec![seg((0, 0), (0, 6)), seg((0, 6), (4, 6))]);
    }

    #[test]
    fn drops_zero_length_middle_then_merges() {
        let merged = normalize_segments(&[
            seg((0, 0), (0, 3)),
            create_zero_width_segment(Coord::new(0, 3)),
            seg((0, 3), (0, 5)),
        ])
        .unwrap();
        assert_eq!(merged, vec![seg((0, 0), (0, 5))]);
        assert_eq!(merged[0].direction, Direction::LeftToRight);
    }

    #[test]
    fn refuses_u_turn() {
        let result = normalize_segments(&[seg((0, 0), (0, 5)), seg((0, 5), (0, 2))]);
        assert_eq!(result, Err(Rejection::UTurn));
    }

    #[test]
    fn all_zero_is_degenerate() {
        let result = normalize_segments(&[create_zero_width_segment(Coord::new(1, 1))]);
        assert_eq!(result, Err(Rejection::Degenerate));
    }

    #[test]
    fn vertices_round_trip() {
        let line = MultiSegment::new(vec![
            create_line_segment(Coord::new(1, 1), Coord::new(1, 4)),
            create_line_segment(Coord::new(1, 4), Coord::new(6, 4)),
        ]);
        let points = line.vertices();
        assert_eq!(points, vec![Coord::new(1, 1), Coord::new(1, 4), Coord::new(6, 4)]);
        let rebuilt = segments_from_vertices(&points).unwrap();
        assert_eq!(rebuilt, line.segments);
        assert_eq!(rebuilt[1].axis, Axis::Vertical);
    }
}
