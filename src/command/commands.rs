use super::CommandResult;
use crate::document::Document;
use crate::element::{Shape, ShapeId, ShapeObject};
use crate::event::EditorEvent;
use crate::style::PartialStyle;

/// Document patches produced by tool transitions.
///
/// Tools never touch the document themselves: they describe the change and
/// the editor context applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a committed shape at the top of its layer
    AddShape(ShapeObject),

    /// Replace the geometry of an existing shape
    UpdateShape { id: ShapeId, shape: Shape },

    /// Delete shapes; unknown ids are ignored
    RemoveShapes { ids: Vec<ShapeId> },

    /// Merge a style override into each listed shape
    SetShapeStyle { ids: Vec<ShapeId>, style: PartialStyle },

    MoveToFront { id: ShapeId },

    MoveToBack { id: ShapeId },
}

impl Command {
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddShape(obj) => {
                document.add_shape(obj.clone());
                Ok(())
            }
            Command::UpdateShape { id, shape } => document.replace_shape(*id, shape.clone()),
            Command::RemoveShapes { ids } => {
                document.remove_shapes(ids);
                Ok(())
            }
            Command::SetShapeStyle { ids, style } => document.set_style(ids, style),
            Command::MoveToFront { id } => document.move_to_front(*id),
            Command::MoveToBack { id } => document.move_to_back(*id),
        }
    }

    /// The event announcing this command once it has been applied
    pub fn event(&self) -> EditorEvent {
        match self {
            Command::AddShape(obj) => EditorEvent::ShapeAdded { id: obj.id },
            Command::UpdateShape { id, .. } => EditorEvent::ShapeUpdated { id: *id },
            Command::RemoveShapes { ids } => EditorEvent::ShapesRemoved { ids: ids.clone() },
            Command::SetShapeStyle { ids, .. } => EditorEvent::StyleChanged { ids: ids.clone() },
            Command::MoveToFront { .. } | Command::MoveToBack { .. } => EditorEvent::ShapesReordered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::error::EditorError;
    use crate::geometry::Coord;

    #[test]
    fn update_then_remove() {
        let mut doc = Document::new();
        let obj = ShapeObject::new(factory::rectangle(Coord::new(0, 0), Coord::new(2, 2)));
        let id = obj.id;
        Command::AddShape(obj).execute(&mut doc).unwrap();

        let moved = factory::rectangle(Coord::new(1, 1), Coord::new(3, 3));
        Command::UpdateShape { id, shape: moved.clone() }.execute(&mut doc).unwrap();
        assert_eq!(doc.get(id).map(|obj| &obj.shape), Some(&moved));

        let remove = Command::RemoveShapes { ids: vec![id] };
        remove.execute(&mut doc).unwrap();
        assert!(doc.is_empty());
        assert_eq!(remove.event(), EditorEvent::ShapesRemoved { ids: vec![id] });
    }

    #[test]
    fn update_of_missing_shape_fails() {
        let mut doc = Document::new();
        let id = ShapeId::new();
        let result = Command::UpdateShape {
            id,
            shape: factory::line(Coord::new(0, 0), Coord::new(0, 2)),
        }
        .execute(&mut doc);
        assert_eq!(result, Err(EditorError::ShapeNotFound(id)));
    }
}
