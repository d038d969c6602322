use crate::document::Document;
use crate::element::{Shape, ShapeId};
use crate::geometry::Coord;
use crate::routing::shape_path;
use crate::state::EditorMode;
use crate::transform::resize_handles;

/// Pointer shape a front end should show over the hovered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorAffordance {
    Select,
    Move,
    Resize,
    Create,
    None,
}

/// Whether `cell` is part of `shape` for clicking purposes.
///
/// Rectangles are hit anywhere inside their border, text anywhere in its
/// block and lines on the cells they are drawn on.
pub fn shape_contains(shape: &Shape, cell: Coord) -> bool {
    match shape {
        Shape::Rectangle(rect) => rect.contains(cell),
        Shape::Text(text) => text.contains(cell),
        Shape::Line(_) | Shape::MultiSegment(_) => shape_path(shape)
            .unwrap_or_default()
            .iter()
            .any(|leg| leg.to_segment().cells().contains(&cell)),
    }
}

/// Topmost shape under `cell`
pub fn shape_at(document: &Document, cell: Coord) -> Option<ShapeId> {
    document
        .iter()
        .rev()
        .find(|obj| shape_contains(&obj.shape, cell))
        .map(|obj| obj.id)
}

/// The resize handle of `shape` sitting on `cell`
pub fn handle_at(shape: &Shape, cell: Coord) -> Option<Coord> {
    resize_handles(shape).into_iter().find(|handle| *handle == cell)
}

/// Topmost shape out of `ids` whose body covers `cell`
pub fn selected_shape_at(document: &Document, ids: &[ShapeId], cell: Coord) -> Option<ShapeId> {
    document
        .iter()
        .rev()
        .filter(|obj| ids.contains(&obj.id))
        .find(|obj| shape_contains(&obj.shape, cell))
        .map(|obj| obj.id)
}

pub fn cursor_affordance(mode: &EditorMode, document: &Document, hovered: Option<Coord>) -> CursorAffordance {
    match mode {
        EditorMode::BeforeCreating | EditorMode::Create { .. } => CursorAffordance::Create,
        EditorMode::Move { .. } => CursorAffordance::Move,
        EditorMode::Resize { .. } => CursorAffordance::Resize,
        EditorMode::TextEdit { .. } => CursorAffordance::None,
        EditorMode::Select { shape_ids } => {
            let Some(cell) = hovered else {
                return CursorAffordance::None;
            };
            if let [only] = shape_ids.as_slice() {
                let on_handle = document
                    .get(*only)
                    .and_then(|obj| handle_at(&obj.shape, cell))
                    .is_some();
                if on_handle {
                    return CursorAffordance::Resize;
                }
            }
            if selected_shape_at(document, shape_ids, cell).is_some() {
                CursorAffordance::Move
            } else if shape_at(document, cell).is_some() {
                CursorAffordance::Select
            } else {
                CursorAffordance::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeObject, factory};

    fn pt(r: i32, c: i32) -> Coord {
        Coord::new(r, c)
    }

    #[test]
    fn topmost_shape_wins() {
        let mut doc = Document::new();
        let below = doc.add_shape(ShapeObject::new(factory::rectangle(pt(0, 0), pt(5, 5))));
        let above = doc.add_shape(ShapeObject::new(factory::rectangle(pt(2, 2), pt(4, 4))));
        assert_eq!(shape_at(&doc, pt(3, 3)), Some(above));
        assert_eq!(shape_at(&doc, pt(1, 1)), Some(below));
        assert_eq!(shape_at(&doc, pt(8, 8)), None);
    }

    #[test]
    fn lines_are_hit_on_their_cells() {
        let elbow = factory::multi_segment(&[pt(0, 0), pt(0, 4), pt(3, 4)]).unwrap();
        assert!(shape_contains(&elbow, pt(0, 2)));
        assert!(shape_contains(&elbow, pt(2, 4)));
        assert!(!shape_contains(&elbow, pt(1, 1)));
    }

    #[test]
    fn affordance_over_single_selection() {
        let mut doc = Document::new();
        let id = doc.add_shape(ShapeObject::new(factory::rectangle(pt(1, 1), pt(4, 6))));
        let mode = EditorMode::select(vec![id]);
        assert_eq!(cursor_affordance(&mode, &doc, Some(pt(4, 6))), CursorAffordance::Resize);
        assert_eq!(cursor_affordance(&mode, &doc, Some(pt(2, 2))), CursorAffordance::Move);
        assert_eq!(cursor_affordance(&mode, &doc, Some(pt(9, 9))), CursorAffordance::None);
        assert_eq!(
            cursor_affordance(&EditorMode::select_none(), &doc, Some(pt(2, 2))),
            CursorAffordance::Select
        );
        assert_eq!(cursor_affordance(&EditorMode::BeforeCreating, &doc, None), CursorAffordance::Create);
    }
}
