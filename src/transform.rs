//! Moving and resizing shapes, plus the legality rules every edit must pass.
//!
//! Nothing here mutates a document. Each operation returns the shape it
//! would produce, or a [`Rejection`] saying why the edit was refused, and the
//! caller decides whether to keep the original.

use log::debug;

use crate::element::common::calculate_bounds;
use crate::element::multi_segment::segments_from_vertices;
use crate::element::{Axis, MultiSegment, Rectangle, Segment, Shape, create_line_segment};
use crate::error::{EditorError, EditorResult, Rejection};
use crate::geometry::{CanvasSize, Coord, Delta};
use crate::routing::{ThreePointLine, get_canonical_path, path_to_segments};

/// Inclusive axis-aligned bounds of one or more shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub tl: Coord,
    pub br: Coord,
}

impl BoundingBox {
    pub fn union(self, other: BoundingBox) -> BoundingBox {
        BoundingBox {
            tl: self.tl.min(other.tl),
            br: self.br.max(other.br),
        }
    }
}

/// Every anchor point of `shape` lies on the canvas
pub fn is_shape_legal(shape: &Shape, canvas: CanvasSize) -> bool {
    shape.anchor_points().into_iter().all(|point| canvas.contains(point))
}

fn in_bounds(shape: Shape, canvas: CanvasSize) -> Result<Shape, Rejection> {
    if is_shape_legal(&shape, canvas) {
        Ok(shape)
    } else {
        Err(Rejection::OutOfBounds)
    }
}

/// Shift `shape` by `delta`, refusing any move that leaves the canvas
pub fn translate(shape: &Shape, delta: Delta, canvas: CanvasSize) -> Result<Shape, Rejection> {
    if delta.is_zero() {
        return Ok(shape.clone());
    }
    in_bounds(shape.translated(delta), canvas)
}

/// Translate every shape on its own.
///
/// A shape that would leave the canvas keeps its original position while the
/// others still move.
pub fn translate_all(shapes: &[Shape], delta: Delta, canvas: CanvasSize) -> Vec<Shape> {
    shapes
        .iter()
        .map(|shape| {
            translate(shape, delta, canvas).unwrap_or_else(|reason| {
                debug!("translate by ({}, {}) refused: {reason}", delta.r, delta.c);
                shape.clone()
            })
        })
        .collect()
}

/// Cells that act as resize handles
pub fn resize_handles(shape: &Shape) -> Vec<Coord> {
    match shape {
        Shape::Rectangle(rect) => crate::element::Corner::ALL
            .into_iter()
            .map(|corner| rect.corner(corner))
            .collect(),
        Shape::Line(seg) => vec![seg.start, seg.end],
        Shape::MultiSegment(line) => line.vertices(),
        Shape::Text(_) => Vec::new(),
    }
}

/// Move the handle of `shape` sitting at `grabbed` by `delta`.
///
/// Rectangles are rebuilt from the moved corner and its opposite, so a drag
/// past the opposite corner flips the box instead of inverting it. Lines
/// re-snap to their dominant axis. Multi-segment lines reroute an end leg or
/// slide the legs meeting at an interior vertex, then renormalize.
pub fn resize(shape: &Shape, grabbed: Coord, delta: Delta, canvas: CanvasSize) -> Result<Shape, Rejection> {
    let resized = match shape {
        Shape::Rectangle(rect) => resize_rectangle(rect, grabbed, delta)?,
        Shape::Line(seg) => resize_line(seg, grabbed, delta)?,
        Shape::MultiSegment(line) => resize_multi_segment(line, grabbed, delta)?,
        Shape::Text(_) => return Err(Rejection::NotResizable),
    };
    in_bounds(resized, canvas)
}

fn resize_rectangle(rect: &Rectangle, grabbed: Coord, delta: Delta) -> Result<Shape, Rejection> {
    let corner = rect.corner_at(grabbed).ok_or(Rejection::NoHandle)?;
    let moved = rect.corner(corner) + delta;
    let resized = Rectangle::from_corners(moved, rect.corner(corner.opposite()));
    if resized.is_degenerate() {
        return Err(Rejection::Degenerate);
    }
    Ok(Shape::Rectangle(resized))
}

fn resize_line(seg: &Segment, grabbed: Coord, delta: Delta) -> Result<Shape, Rejection> {
    let resized = if grabbed == seg.end {
        create_line_segment(seg.start, seg.end + delta)
    } else if grabbed == seg.start {
        create_line_segment(seg.end, seg.start + delta).reversed()
    } else {
        return Err(Rejection::NoHandle);
    };
    if resized.is_zero_length() {
        return Err(Rejection::Degenerate);
    }
    Ok(Shape::Line(resized))
}

fn resize_multi_segment(line: &MultiSegment, grabbed: Coord, delta: Delta) -> Result<Shape, Rejection> {
    let vertices = line.vertices();
    let last = vertices.len().checked_sub(1).ok_or(Rejection::Degenerate)?;
    let idx = vertices
        .iter()
        .position(|vertex| *vertex == grabbed)
        .ok_or(Rejection::NoHandle)?;

    let segments = if idx == last {
        let mut segments = line.segments.clone();
        let anchor = segments.pop().map(|seg| seg.start).ok_or(Rejection::Degenerate)?;
        let leg = get_canonical_path(&ThreePointLine::straight(anchor, grabbed + delta));
        segments.extend(path_to_segments(&leg));
        segments
    } else if idx == 0 {
        let mut rest = line.segments.clone();
        let anchor = rest.remove(0).end;
        let mut segments = path_to_segments(&get_canonical_path(&ThreePointLine::straight(
            grabbed + delta,
            anchor,
        )));
        segments.extend(rest);
        segments
    } else {
        segments_from_vertices(&slide_vertex(line, &vertices, idx, delta))?
    };

    let normalized = MultiSegment::new(segments).normalized()?;
    Ok(Shape::MultiSegment(normalized))
}

/// Move interior vertex `idx` and drag its neighbours along so both legs
/// meeting there stay axis-aligned
fn slide_vertex(line: &MultiSegment, vertices: &[Coord], idx: usize, delta: Delta) -> Vec<Coord> {
    let mut points = vertices.to_vec();
    let moved = points[idx] + delta;
    points[idx] = moved;

    let snap = |point: &mut Coord, axis: Axis| match axis {
        Axis::Horizontal => point.r = moved.r,
        Axis::Vertical => point.c = moved.c,
    };
    snap(&mut points[idx - 1], line.segments[idx - 1].axis);
    snap(&mut points[idx + 1], line.segments[idx].axis);
    points
}

/// Check that `shape` may be added to or kept in a document.
///
/// Returns the shape in its committed form: multi-segment lines come back
/// normalized.
pub fn check_committable(shape: &Shape, canvas: CanvasSize) -> Result<Shape, Rejection> {
    let committed = match shape {
        Shape::Rectangle(rect) if rect.is_degenerate() => return Err(Rejection::Degenerate),
        Shape::Line(seg) if seg.is_zero_length() => return Err(Rejection::Degenerate),
        Shape::Text(text) if !text.has_content() => return Err(Rejection::Degenerate),
        Shape::MultiSegment(line) => Shape::MultiSegment(line.normalized()?),
        other => other.clone(),
    };
    in_bounds(committed, canvas)
}

pub fn get_bounding_box(shape: &Shape) -> BoundingBox {
    let points = match shape {
        Shape::Text(text) => vec![text.start, text.last_cell()],
        other => other.anchor_points(),
    };
    let (tl, br) = calculate_bounds(points).unwrap_or_default();
    BoundingBox { tl, br }
}

/// Union of the bounds of `shapes`
pub fn get_bounding_box_of_all<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> EditorResult<BoundingBox> {
    shapes
        .into_iter()
        .map(get_bounding_box)
        .reduce(BoundingBox::union)
        .ok_or(EditorError::EmptyShapeList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Direction, factory};

    const CANVAS: CanvasSize = CanvasSize::new(10, 10);

    fn pt(r: i32, c: i32) -> Coord {
        Coord::new(r, c)
    }

    #[test]
    fn translate_off_canvas_is_refused() {
        let rect = factory::rectangle(pt(0, 0), pt(4, 4));
        assert_eq!(translate(&rect, Delta::new(-1, 0), CANVAS), Err(Rejection::OutOfBounds));
        assert_eq!(translate(&rect, Delta::ZERO, CANVAS), Ok(rect.clone()));
        assert_eq!(
            translate(&rect, Delta::new(2, 3), CANVAS),
            Ok(factory::rectangle(pt(2, 3), pt(6, 7)))
        );
    }

    #[test]
    fn translate_all_clamps_each_shape() {
        let near_edge = factory::rectangle(pt(0, 0), pt(2, 2));
        let inside = factory::line(pt(5, 2), pt(5, 6));
        let moved = translate_all(&[near_edge.clone(), inside], Delta::new(-1, 0), CANVAS);
        assert_eq!(moved[0], near_edge);
        assert_eq!(moved[1], factory::line(pt(4, 2), pt(4, 6)));
    }

    #[test]
    fn rectangle_resize_flips_past_opposite_corner() {
        let rect = factory::rectangle(pt(1, 1), pt(5, 5));
        let resized = resize(&rect, pt(5, 5), Delta::new(-5, -5), CANVAS).unwrap();
        assert_eq!(resized, factory::rectangle(pt(0, 0), pt(1, 1)));
    }

    #[test]
    fn rectangle_resize_needs_a_corner() {
        let rect = factory::rectangle(pt(1, 1), pt(5, 5));
        assert_eq!(resize(&rect, pt(3, 1), Delta::new(1, 1), CANVAS), Err(Rejection::NoHandle));
        assert_eq!(resize(&rect, pt(5, 5), Delta::new(-4, 0), CANVAS), Err(Rejection::Degenerate));
        assert_eq!(resize(&rect, pt(5, 5), Delta::new(5, 0), CANVAS), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn line_resize_resnaps_axis() {
        let line = factory::line(pt(2, 2), pt(2, 6));
        let Shape::Line(seg) = resize(&line, pt(2, 6), Delta::new(5, -3), CANVAS).unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(seg.axis, Axis::Vertical);
        assert_eq!(seg.end, pt(7, 2));

        let Shape::Line(seg) = resize(&line, pt(2, 2), Delta::new(0, -2), CANVAS).unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(seg.start, pt(2, 0));
        assert_eq!(seg.end, pt(2, 6));
        assert_eq!(seg.direction, Direction::LeftToRight);
    }

    #[test]
    fn multi_segment_end_is_rerouted() {
        let line = factory::multi_segment(&[pt(1, 1), pt(1, 5), pt(4, 5)]).unwrap();
        let resized = resize(&line, pt(4, 5), Delta::new(0, 3), CANVAS).unwrap();
        let Shape::MultiSegment(resized) = resized else {
            panic!("expected a multi-segment line");
        };
        assert_eq!(resized.vertices(), vec![pt(1, 1), pt(1, 5), pt(4, 5), pt(4, 8)]);
    }

    #[test]
    fn multi_segment_interior_vertex_slides_neighbours() {
        let line = factory::multi_segment(&[pt(1, 1), pt(1, 5), pt(4, 5), pt(4, 8)]).unwrap();
        let Shape::MultiSegment(resized) = resize(&line, pt(1, 5), Delta::new(0, 1), CANVAS).unwrap() else {
            panic!("expected a multi-segment line");
        };
        assert_eq!(resized.vertices(), vec![pt(1, 1), pt(1, 6), pt(4, 6), pt(4, 8)]);
    }

    #[test]
    fn multi_segment_collapse_into_u_turn_is_refused() {
        let line = factory::multi_segment(&[pt(1, 1), pt(1, 5), pt(4, 5), pt(4, 2)]).unwrap();
        assert_eq!(resize(&line, pt(1, 5), Delta::new(3, 0), CANVAS), Err(Rejection::UTurn));
    }

    #[test]
    fn text_has_no_handles() {
        let text = factory::text(pt(0, 0), &["hi"]);
        assert!(resize_handles(&text).is_empty());
        assert_eq!(resize(&text, pt(0, 0), Delta::new(1, 1), CANVAS), Err(Rejection::NotResizable));
    }

    #[test]
    fn bounding_boxes() {
        let shapes = [
            factory::rectangle(pt(2, 2), pt(4, 5)),
            factory::text(pt(6, 1), &["abc", "de"]),
            factory::line(pt(0, 8), pt(3, 8)),
        ];
        assert_eq!(get_bounding_box(&shapes[1]), BoundingBox { tl: pt(6, 1), br: pt(7, 3) });
        assert_eq!(
            get_bounding_box_of_all(&shapes),
            Ok(BoundingBox { tl: pt(0, 1), br: pt(7, 8) })
        );
        assert_eq!(get_bounding_box_of_all(std::iter::empty()), Err(EditorError::EmptyShapeList));
    }

    #[test]
    fn commit_rules() {
        assert_eq!(
            check_committable(&factory::rectangle(pt(0, 0), pt(0, 0)), CANVAS),
            Err(Rejection::Degenerate)
        );
        assert_eq!(
            check_committable(&factory::line(pt(3, 3), pt(3, 3)), CANVAS),
            Err(Rejection::Degenerate)
        );
        assert_eq!(
            check_committable(&factory::text(pt(0, 0), &[""]), CANVAS),
            Err(Rejection::Degenerate)
        );
        let rect = factory::rectangle(pt(0, 0), pt(9, 9));
        assert_eq!(check_committable(&rect, CANVAS), Ok(rect));
    }
}
