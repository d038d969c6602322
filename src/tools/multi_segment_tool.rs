use log::debug;

use super::{Tool, ToolContext, Transition, commit};
use crate::element::{MultiSegment, Shape, create_line_segment, create_zero_width_segment};
use crate::geometry::{CanvasSize, Coord};
use crate::state::EditorMode;
use crate::transform::check_committable;

/// Click-by-click polyline.
///
/// Every click pins the current leg and opens a new one at its end, a
/// double-click finishes the line. Hovering only moves the open leg.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSegmentTool;

impl MultiSegmentTool {
    /// `shape` with its open (last) leg pulled towards `cell`
    fn stretch_last(shape: &Shape, cell: Coord) -> Option<MultiSegment> {
        let Shape::MultiSegment(line) = shape else {
            return None;
        };
        let mut segments = line.segments.clone();
        let open = segments.pop()?;
        segments.push(create_line_segment(open.start, cell));
        Some(MultiSegment::new(segments))
    }

    fn pin(line: &MultiSegment, canvas: CanvasSize) -> Option<Shape> {
        check_committable(&Shape::MultiSegment(line.clone()), canvas)
            .inspect_err(|reason| debug!("multi-segment click ignored: {reason}"))
            .ok()
    }
}

impl Tool for MultiSegmentTool {
    fn name(&self) -> &'static str {
        "MULTI_SEGMENT_LINE"
    }

    fn on_hover(&self, mode: &EditorMode, cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { start, curr, checkpoint, shape } = mode else {
            return None;
        };
        if *curr == cell {
            return None;
        }
        let stretched = Self::stretch_last(shape, cell)?;
        Some(Transition::to(EditorMode::Create {
            start: *start,
            curr: cell,
            checkpoint: checkpoint.clone(),
            shape: Shape::MultiSegment(stretched),
        }))
    }

    fn on_click(&self, mode: &EditorMode, cell: Coord, _ctrl: bool, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::BeforeCreating => Some(Transition::to(EditorMode::create(
                cell,
                Shape::MultiSegment(MultiSegment::new(vec![create_zero_width_segment(cell)])),
            ))),
            EditorMode::Create { start, shape, .. } => {
                let stretched = Self::stretch_last(shape, cell)?;
                let Shape::MultiSegment(pinned) = Self::pin(&stretched, ctx.canvas)? else {
                    return None;
                };
                let mut segments = pinned.segments.clone();
                let end = pinned.last_point()?;
                segments.push(create_zero_width_segment(end));
                Some(Transition::to(EditorMode::Create {
                    start: *start,
                    curr: cell,
                    checkpoint: Some(Shape::MultiSegment(pinned)),
                    shape: Shape::MultiSegment(MultiSegment::new(segments)),
                }))
            }
            _ => None,
        }
    }

    fn on_double_click(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { checkpoint, shape, .. } = mode else {
            return None;
        };
        let done = Transition::to(EditorMode::BeforeCreating);
        let finished = Self::stretch_last(shape, cell).and_then(|line| Self::pin(&line, ctx.canvas));
        let add = match (finished, checkpoint) {
            (Some(line), _) => commit(&line, ctx.canvas),
            (None, Some(last_legal)) => commit(last_legal, ctx.canvas),
            (None, None) => None,
        };
        Some(match add {
            Some(add) => done.then(add),
            None => done,
        })
    }
}
