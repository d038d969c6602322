use super::{Tool, ToolContext, Transition, commit};
use crate::element::{Shape, Text};
use crate::geometry::Coord;
use crate::state::EditorMode;

/// Click to place a text block, type, click again to start the next one
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTool;

fn start_at(cell: Coord) -> EditorMode {
    EditorMode::create(cell, Shape::Text(Text::empty(cell)))
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "TEXT"
    }

    fn on_click(&self, mode: &EditorMode, cell: Coord, _ctrl: bool, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::BeforeCreating => Some(Transition::to(start_at(cell))),
            EditorMode::Create { shape, .. } => {
                let next = Transition::to(start_at(cell));
                Some(match commit(shape, ctx.canvas) {
                    Some(add) => next.then(add),
                    None => next,
                })
            }
            _ => None,
        }
    }

    fn on_text(&self, mode: &EditorMode, input: &str, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { start, curr, checkpoint, shape: Shape::Text(text) } = mode else {
            return None;
        };
        Some(Transition::to(EditorMode::Create {
            start: *start,
            curr: *curr,
            checkpoint: checkpoint.clone(),
            shape: Shape::Text(text.with_content(input, ctx.canvas)),
        }))
    }

    fn on_ctrl_enter(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Create { shape, .. } = mode else {
            return None;
        };
        let done = Transition::to(EditorMode::BeforeCreating);
        Some(match commit(shape, ctx.canvas) {
            Some(add) => done.then(add),
            None => done,
        })
    }
}
