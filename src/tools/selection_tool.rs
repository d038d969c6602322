use log::debug;

use super::{Tool, ToolContext, Transition};
use crate::command::Command;
use crate::element::{Shape, ShapeId};
use crate::geometry::Coord;
use crate::geometry::hit_testing::{handle_at, selected_shape_at, shape_at, shape_contains};
use crate::state::EditorMode;
use crate::transform::{check_committable, resize, translate_all};

/// Select, move, resize, edit text and delete
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionTool;

impl SelectionTool {
    /// Selection after clicking `cell`; ctrl adds to `current` instead of replacing it
    fn clicked_selection(current: &[ShapeId], cell: Coord, ctrl: bool, ctx: &ToolContext<'_>) -> Vec<ShapeId> {
        match shape_at(ctx.document, cell) {
            Some(id) if ctrl => {
                let mut ids = current.to_vec();
                if !ids.contains(&id) {
                    ids.push(id);
                }
                ids
            }
            Some(id) => vec![id],
            None => Vec::new(),
        }
    }

    /// Start dragging `ids`, remembering where each shape began
    fn begin_move(ids: &[ShapeId], cell: Coord, ctx: &ToolContext<'_>) -> EditorMode {
        let (shape_ids, start_shapes) = ids
            .iter()
            .filter_map(|id| ctx.document.get(*id).map(|obj| (obj.id, obj.shape.clone())))
            .unzip();
        EditorMode::Move {
            start: cell,
            shape_ids,
            start_shapes,
        }
    }

    /// Patches that bring the document in line with `shapes`, skipping unchanged ones
    fn updates(ids: &[ShapeId], shapes: Vec<Shape>, ctx: &ToolContext<'_>) -> Vec<Command> {
        ids.iter()
            .zip(shapes)
            .filter(|(id, shape)| ctx.document.get(**id).is_some_and(|obj| obj.shape != *shape))
            .map(|(id, shape)| Command::UpdateShape { id: *id, shape })
            .collect()
    }

    /// Patches for the pointer sitting on `cell` during a move or resize
    fn drag_commands(mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Vec<Command> {
        match mode {
            EditorMode::Move { start, shape_ids, start_shapes } => {
                let moved = translate_all(start_shapes, cell - *start, ctx.canvas);
                Self::updates(shape_ids, moved, ctx)
            }
            EditorMode::Resize { resize_point, shape_id, start_shape } => {
                let resized = resize(start_shape, *resize_point, cell - *resize_point, ctx.canvas)
                    .and_then(|shape| check_committable(&shape, ctx.canvas));
                match resized {
                    Ok(shape) => Self::updates(&[*shape_id], vec![shape], ctx),
                    Err(reason) => {
                        debug!("resize of {shape_id} to {cell} refused: {reason}");
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    /// Leave text editing; a block left without content is deleted
    fn finish_text_edit(shape_id: ShapeId, ctx: &ToolContext<'_>) -> Transition {
        let emptied = ctx
            .document
            .get(shape_id)
            .is_some_and(|obj| matches!(&obj.shape, Shape::Text(text) if !text.has_content()));
        if emptied {
            debug!("removing emptied text {shape_id}");
            Transition::with(
                EditorMode::select_none(),
                vec![Command::RemoveShapes { ids: vec![shape_id] }],
            )
        } else {
            Transition::to(EditorMode::select(vec![shape_id]))
        }
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "SELECT"
    }

    fn initial_mode(&self) -> EditorMode {
        EditorMode::select_none()
    }

    fn on_click(&self, mode: &EditorMode, cell: Coord, ctrl: bool, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Select { shape_ids } => Some(Transition::to(EditorMode::select(
                Self::clicked_selection(shape_ids, cell, ctrl, ctx),
            ))),
            EditorMode::TextEdit { shape_id, .. } => {
                let on_edited = ctx
                    .document
                    .get(*shape_id)
                    .is_some_and(|obj| shape_contains(&obj.shape, cell));
                if on_edited {
                    return None;
                }
                let left = Self::finish_text_edit(*shape_id, ctx);
                let selection = Self::clicked_selection(&[], cell, ctrl, ctx);
                Some(Transition::with(EditorMode::select(selection), left.commands))
            }
            _ => None,
        }
    }

    fn on_mouse_down(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Select { shape_ids } = mode else {
            return None;
        };

        if let [only] = shape_ids.as_slice() {
            if let Some(obj) = ctx.document.get(*only) {
                if let Some(handle) = handle_at(&obj.shape, cell) {
                    return Some(Transition::to(EditorMode::Resize {
                        resize_point: handle,
                        shape_id: obj.id,
                        start_shape: obj.shape.clone(),
                    }));
                }
            }
        }

        if selected_shape_at(ctx.document, shape_ids, cell).is_some() {
            return Some(Transition::to(Self::begin_move(shape_ids, cell, ctx)));
        }
        let id = shape_at(ctx.document, cell)?;
        Some(Transition::to(Self::begin_move(&[id], cell, ctx)))
    }

    fn on_hover(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Move { .. } | EditorMode::Resize { .. } => {
                let commands = Self::drag_commands(mode, cell, ctx);
                (!commands.is_empty()).then(|| Transition::with(mode.clone(), commands))
            }
            _ => None,
        }
    }

    fn on_mouse_up(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let commands = Self::drag_commands(mode, cell, ctx);
        match mode {
            EditorMode::Move { shape_ids, .. } => {
                Some(Transition::with(EditorMode::select(shape_ids.clone()), commands))
            }
            EditorMode::Resize { shape_id, .. } => {
                Some(Transition::with(EditorMode::select(vec![*shape_id]), commands))
            }
            _ => None,
        }
    }

    fn on_double_click(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::Select { .. } = mode else {
            return None;
        };
        let id = shape_at(ctx.document, cell)?;
        let obj = ctx.document.get(id)?;
        obj.shape.is_text().then(|| {
            Transition::to(EditorMode::TextEdit {
                shape_id: id,
                start_shape: obj.shape.clone(),
            })
        })
    }

    fn on_text(&self, mode: &EditorMode, input: &str, ctx: &ToolContext<'_>) -> Option<Transition> {
        let EditorMode::TextEdit { shape_id, .. } = mode else {
            return None;
        };
        let Shape::Text(text) = &ctx.document.get(*shape_id)?.shape else {
            return None;
        };
        Some(Transition::with(
            mode.clone(),
            vec![Command::UpdateShape {
                id: *shape_id,
                shape: Shape::Text(text.with_content(input, ctx.canvas)),
            }],
        ))
    }

    fn on_ctrl_enter(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::TextEdit { shape_id, .. } => Some(Self::finish_text_edit(*shape_id, ctx)),
            _ => None,
        }
    }

    fn on_delete(&self, mode: &EditorMode, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Select { shape_ids } if !shape_ids.is_empty() => Some(Transition::with(
                EditorMode::select_none(),
                vec![Command::RemoveShapes { ids: shape_ids.clone() }],
            )),
            _ => None,
        }
    }

    fn on_cancel(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Select { shape_ids } if !shape_ids.is_empty() => {
                Some(Transition::to(EditorMode::select_none()))
            }
            EditorMode::Move { shape_ids, start_shapes, .. } => Some(Transition::with(
                EditorMode::select(shape_ids.clone()),
                Self::updates(shape_ids, start_shapes.clone(), ctx),
            )),
            EditorMode::Resize { shape_id, start_shape, .. } | EditorMode::TextEdit { shape_id, start_shape } => {
                Some(Transition::with(
                    EditorMode::select(vec![*shape_id]),
                    Self::updates(&[*shape_id], vec![start_shape.clone()], ctx),
                ))
            }
            _ => None,
        }
    }
}
