use super::{Tool, ToolContext, Transition, commit};
use crate::element::factory;
use crate::geometry::Coord;
use crate::state::EditorMode;

/// Press, drag and release to draw a box between the two cells
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl RectangleTool {
    fn drag_to(start: Coord, cell: Coord) -> EditorMode {
        EditorMode::Create {
            start,
            curr: cell,
            checkpoint: None,
            shape: factory::rectangle(start, cell),
        }
    }
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "RECTANGLE"
    }

    fn on_mouse_down(&self, mode: &EditorMode, cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::BeforeCreating => Some(Transition::to(EditorMode::create(
                cell,
                factory::rectangle(cell, cell),
            ))),
            _ => None,
        }
    }

    fn on_hover(&self, mode: &EditorMode, cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Create { start, curr, .. } if *curr != cell => {
                Some(Transition::to(Self::drag_to(*start, cell)))
            }
            _ => None,
        }
    }

    fn on_mouse_up(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { start, .. } = mode else {
            return None;
        };
        let shape = factory::rectangle(*start, cell);
        let done = Transition::to(EditorMode::BeforeCreating);
        Some(match commit(&shape, ctx.canvas) {
            Some(add) => done.then(add),
            None => done,
        })
    }
}
