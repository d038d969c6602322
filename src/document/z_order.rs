//! Paint-order changes that keep text above everything else.
//!
//! A list is split into two layers: non-text shapes first, then text. Moving
//! a shape to the front or back only ever reorders it within its own layer.

use log::debug;

use crate::element::{ShapeId, ShapeObject};
use crate::error::{EditorError, EditorResult};

pub(crate) fn first_text_index(shapes: &[ShapeObject]) -> Option<usize> {
    shapes.iter().position(|obj| obj.shape.is_text())
}

fn take(shapes: &mut Vec<ShapeObject>, id: ShapeId) -> EditorResult<ShapeObject> {
    let idx = shapes
        .iter()
        .position(|obj| obj.id == id)
        .ok_or(EditorError::ShapeNotFound(id))?;
    Ok(shapes.remove(idx))
}

/// Raise `id` to the top of its layer
pub fn move_shape_to_front(shapes: &mut Vec<ShapeObject>, id: ShapeId) -> EditorResult<()> {
    let obj = take(shapes, id)?;
    let at = if obj.shape.is_text() {
        shapes.len()
    } else {
        first_text_index(shapes).unwrap_or(shapes.len())
    };
    debug!("moving {} to front at index {at}", obj.id);
    shapes.insert(at, obj);
    Ok(())
}

/// Lower `id` to the bottom of its layer
pub fn move_shape_to_back(shapes: &mut Vec<ShapeObject>, id: ShapeId) -> EditorResult<()> {
    let obj = take(shapes, id)?;
    let at = if obj.shape.is_text() {
        first_text_index(shapes).unwrap_or(shapes.len())
    } else {
        0
    };
    debug!("moving {} to back at index {at}", obj.id);
    shapes.insert(at, obj);
    Ok(())
}
