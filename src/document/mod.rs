use serde::{Deserialize, Serialize};

use crate::element::{Shape, ShapeId, ShapeObject};
use crate::error::{EditorError, EditorResult};
use crate::style::PartialStyle;

pub mod z_order;

pub use z_order::{move_shape_to_back, move_shape_to_front};

/// The committed shapes of a diagram in paint order; later entries draw on top.
///
/// Text always sits above every other shape. New shapes are inserted so
/// that this keeps holding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    shapes: Vec<ShapeObject>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt `shapes` in their given order, except that text is moved above
    /// everything else. Relative order within each layer is kept.
    pub fn from_shapes(shapes: Vec<ShapeObject>) -> Self {
        let (text, mut shapes): (Vec<_>, Vec<_>) = shapes.into_iter().partition(|obj| obj.shape.is_text());
        shapes.extend(text);
        Self { shapes }
    }

    pub fn shapes(&self) -> &[ShapeObject] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ShapeObject> + '_ {
        self.shapes.iter()
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(|obj| obj.id).collect()
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|obj| obj.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeObject> {
        self.shapes.iter().find(|obj| obj.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeObject> {
        self.shapes.iter_mut().find(|obj| obj.id == id)
    }

    /// Look up a shape that must exist
    pub fn require(&self, id: ShapeId) -> EditorResult<&ShapeObject> {
        self.get(id).ok_or(EditorError::ShapeNotFound(id))
    }

    /// Insert a shape at the top of its layer and return its id.
    ///
    /// Text goes to the very end, anything else right below the first text.
    pub fn add_shape(&mut self, obj: ShapeObject) -> ShapeId {
        let id = obj.id;
        let at = if obj.shape.is_text() {
            self.shapes.len()
        } else {
            self.first_text_index().unwrap_or(self.shapes.len())
        };
        self.shapes.insert(at, obj);
        id
    }

    pub fn replace_shape(&mut self, id: ShapeId, shape: Shape) -> EditorResult<()> {
        let obj = self.get_mut(id).ok_or(EditorError::ShapeNotFound(id))?;
        obj.shape = shape;
        Ok(())
    }

    /// Remove every listed shape; ids that are not present are skipped
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> Vec<ShapeObject> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|obj| ids.contains(&obj.id));
        self.shapes = kept;
        removed
    }

    /// Merge `style` into the override of every listed shape.
    ///
    /// All ids are checked before anything changes.
    pub fn set_style(&mut self, ids: &[ShapeId], style: &PartialStyle) -> EditorResult<()> {
        if let Some(missing) = ids.iter().find(|id| !self.contains(**id)) {
            return Err(EditorError::ShapeNotFound(*missing));
        }
        for obj in self.shapes.iter_mut().filter(|obj| ids.contains(&obj.id)) {
            let merged = obj.style.unwrap_or_default().merged(style);
            obj.style = if merged.is_empty() { None } else { Some(merged) };
        }
        Ok(())
    }

    pub fn move_to_front(&mut self, id: ShapeId) -> EditorResult<()> {
        move_shape_to_front(&mut self.shapes, id)
    }

    pub fn move_to_back(&mut self, id: ShapeId) -> EditorResult<()> {
        move_shape_to_back(&mut self.shapes, id)
    }

    pub(crate) fn first_text_index(&self) -> Option<usize> {
        z_order::first_text_index(&self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::geometry::Coord;
    use crate::style::LineStyle;

    fn rect() -> ShapeObject {
        ShapeObject::new(factory::rectangle(Coord::new(0, 0), Coord::new(2, 2)))
    }

    fn text() -> ShapeObject {
        ShapeObject::new(factory::text(Coord::new(1, 1), &["hi"]))
    }

    #[test]
    fn new_shapes_stay_below_text() {
        let mut doc = Document::new();
        let label = doc.add_shape(text());
        let a = doc.add_shape(rect());
        let b = doc.add_shape(rect());
        assert_eq!(doc.ids(), vec![a, b, label]);
    }

    #[test]
    fn remove_skips_unknown_ids() {
        let mut doc = Document::new();
        let a = doc.add_shape(rect());
        let b = doc.add_shape(rect());
        let removed = doc.remove_shapes(&[a, ShapeId::new()]);
        assert_eq!(removed.len(), 1);
        assert_eq!(doc.ids(), vec![b]);
    }

    #[test]
    fn set_style_checks_every_id_first() {
        let mut doc = Document::new();
        let a = doc.add_shape(rect());
        let heavy = PartialStyle {
            line_style: Some(LineStyle::Heavy),
            ..Default::default()
        };
        let ghost = ShapeId::new();
        assert_eq!(doc.set_style(&[a, ghost], &heavy), Err(EditorError::ShapeNotFound(ghost)));
        assert!(doc.get(a).is_some_and(|obj| obj.style.is_none()));

        doc.set_style(&[a], &heavy).unwrap();
        assert_eq!(doc.get(a).and_then(|obj| obj.style), Some(heavy));
    }

    #[test]
    fn replace_unknown_shape_fails() {
        let mut doc = Document::new();
        let id = ShapeId::new();
        let err = doc.replace_shape(id, factory::line(Coord::new(0, 0), Coord::new(0, 3)));
        assert_eq!(err, Err(EditorError::ShapeNotFound(id)));
    }
}
