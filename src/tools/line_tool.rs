use super::{Tool, ToolContext, Transition, commit};
use crate::element::{Shape, create_line_segment, create_zero_width_segment};
use crate::geometry::Coord;
use crate::state::EditorMode;

/// Straight line snapped to the dominant drag axis
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTool;

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "LINE"
    }

    fn on_mouse_down(&self, mode: &EditorMode, cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::BeforeCreating => Some(Transition::to(EditorMode::create(
                cell,
                Shape::Line(create_zero_width_segment(cell)),
            ))),
            _ => None,
        }
    }

    fn on_hover(&self, mode: &EditorMode, cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Create { start, curr, .. } if *curr != cell => Some(Transition::to(EditorMode::Create {
                start: *start,
                curr: cell,
                checkpoint: None,
                shape: Shape::Line(create_line_segment(*start, cell)),
            })),
            _ => None,
        }
    }

    fn on_mouse_up(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { start, .. } = mode else {
            return None;
        };
        let shape = Shape::Line(create_line_segment(*start, cell));
        let done = Transition::to(EditorMode::BeforeCreating);
        Some(match commit(&shape, ctx.canvas) {
            Some(add) => done.then(add),
            None => done,
        })
    }
}
