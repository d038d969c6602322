use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub(crate) mod common;
pub mod line;
pub mod multi_segment;
pub mod rectangle;
pub mod text;

pub use line::{Axis, Direction, Segment, create_line_segment, create_zero_width_segment};
pub use multi_segment::{MultiSegment, normalize_segments};
pub use rectangle::{Corner, Rectangle};
pub use text::Text;

use crate::geometry::{Coord, Delta};
use crate::style::PartialStyle;

/// Opaque identifier of a shape within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every kind of shape a diagram can hold
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Rectangle(Rectangle),
    Line(Segment),
    MultiSegment(MultiSegment),
    Text(Text),
}

impl Shape {
    pub fn element_type(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Line(_) => "line",
            Shape::MultiSegment(_) => "multi_segment",
            Shape::Text(_) => "text",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Shape::Text(_))
    }

    /// The cells that must stay on the canvas for the shape to be legal
    pub fn anchor_points(&self) -> Vec<Coord> {
        match self {
            Shape::Rectangle(rect) => vec![rect.tl, rect.br],
            Shape::Line(seg) => vec![seg.start, seg.end],
            Shape::MultiSegment(line) => line.vertices(),
            Shape::Text(text) => vec![text.start, text.last_cell()],
        }
    }

    /// Check the structural invariants a loaded shape must satisfy: segments
    /// agree with their endpoints, polylines are continuous and rectangles
    /// have `tl <= br`.
    pub fn check_structure(&self) -> Result<(), String> {
        match self {
            Shape::Rectangle(rect) if rect.tl.r > rect.br.r || rect.tl.c > rect.br.c => {
                Err(format!("rectangle corners {:?} and {:?} are not ordered", rect.tl, rect.br))
            }
            Shape::Line(seg) if !seg.is_well_formed() => Err(format!("malformed segment {seg:?}")),
            Shape::MultiSegment(line) => {
                if line.segments.is_empty() {
                    return Err("multi-segment line has no segments".into());
                }
                if let Some(seg) = line.segments.iter().find(|seg| !seg.is_well_formed()) {
                    return Err(format!("malformed segment {seg:?}"));
                }
                match line.segments.windows(2).position(|pair| pair[0].end != pair[1].start) {
                    Some(idx) => Err(format!("segments {idx} and {} are not connected", idx + 1)),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// Shift every coordinate by `delta`, without any bounds check
    pub fn translated(&self, delta: Delta) -> Shape {
        match self {
            Shape::Rectangle(rect) => Shape::Rectangle(rect.translated(delta)),
            Shape::Line(seg) => Shape::Line(seg.translated(delta)),
            Shape::MultiSegment(line) => Shape::MultiSegment(line.translated(delta)),
            Shape::Text(text) => Shape::Text(text.translated(delta)),
        }
    }
}

/// A shape as stored in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeObject {
    pub id: ShapeId,
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PartialStyle>,
}

impl ShapeObject {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: ShapeId::new(),
            shape,
            style: None,
        }
    }

    pub fn with_style(mut self, style: PartialStyle) -> Self {
        self.style = if style.is_empty() { None } else { Some(style) };
        self
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    pub fn rectangle(a: Coord, b: Coord) -> Shape {
        Shape::Rectangle(Rectangle::from_corners(a, b))
    }

    pub fn line(start: Coord, end: Coord) -> Shape {
        Shape::Line(create_line_segment(start, end))
    }

    /// Polyline through `points`; consecutive points must share a row or column
    pub fn multi_segment(points: &[Coord]) -> Option<Shape> {
        multi_segment::segments_from_vertices(points)
            .ok()
            .map(|segments| Shape::MultiSegment(MultiSegment::new(segments)))
    }

    pub fn text(start: Coord, lines: &[&str]) -> Shape {
        Shape::Text(Text {
            start,
            lines: lines.iter().map(|line| line.to_string()).collect(),
        })
    }
}
