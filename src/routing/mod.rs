//! Rectilinear path routing.
//!
//! Lines are drawn along routes made only of horizontal and vertical legs.
//! Given two or three logical points this module enumerates the candidate
//! routes and picks one deterministically, so a line always renders the
//! same way for the same input.

mod canonical;
mod path;

pub use canonical::{ThreePointLine, get_canonical_path, get_path_combinations};
pub use path::{
    Path, PathSegment, get_all_paths_between_two_points, get_turn_count, has_crossing, has_u_turn,
    join_paths,
};

use crate::element::{Segment, Shape};

/// Route drawn for a line-like shape; `None` for rectangles and text
pub fn shape_path(shape: &Shape) -> Option<Path> {
    match shape {
        Shape::Line(seg) => Some(get_canonical_path(&ThreePointLine::straight(seg.start, seg.end))),
        Shape::MultiSegment(line) => Some(line.segments.iter().map(PathSegment::from).collect()),
        Shape::Rectangle(_) | Shape::Text(_) => None,
    }
}

/// Convert a routed path back into plain segments
pub fn path_to_segments(path: &[PathSegment]) -> Vec<Segment> {
    path.iter().map(PathSegment::to_segment).collect()
}
