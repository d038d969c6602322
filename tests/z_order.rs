use gridsketch::element::factory;
use gridsketch::{Coord, Document, ShapeId, ShapeObject};
use proptest::prelude::*;

fn rect_at(n: i32) -> ShapeObject {
    ShapeObject::new(factory::rectangle(Coord::new(n, n), Coord::new(n + 2, n + 2)))
}

fn text_at(n: i32) -> ShapeObject {
    ShapeObject::new(factory::text(Coord::new(n, 0), &["t"]))
}

fn text_above_everything(doc: &Document) -> bool {
    let last_non_text = doc.shapes().iter().rposition(|obj| !obj.shape.is_text());
    let first_text = doc.shapes().iter().position(|obj| obj.shape.is_text());
    match (last_non_text, first_text) {
        (Some(non_text), Some(text)) => non_text < text,
        _ => true,
    }
}

#[test]
fn test_new_rectangle_goes_below_existing_text() {
    let mut doc = Document::new();
    let text = doc.add_shape(text_at(0));
    let rect = doc.add_shape(rect_at(1));

    assert_eq!(doc.ids(), vec![rect, text]);
}

#[test]
fn test_layers_reorder_independently() {
    let mut doc = Document::new();
    let r1 = doc.add_shape(rect_at(0));
    let r2 = doc.add_shape(rect_at(1));
    let t1 = doc.add_shape(text_at(0));
    let t2 = doc.add_shape(text_at(1));

    doc.move_to_front(r1).unwrap();
    assert_eq!(doc.ids(), vec![r2, r1, t1, t2]);

    doc.move_to_back(t2).unwrap();
    assert_eq!(doc.ids(), vec![r2, r1, t2, t1]);

    // Already at the extremes of their layers.
    doc.move_to_back(r2).unwrap();
    doc.move_to_front(t1).unwrap();
    assert_eq!(doc.ids(), vec![r2, r1, t2, t1]);
}

#[derive(Debug, Clone, Copy)]
enum Reorder {
    Front(usize),
    Back(usize),
}

fn reorder() -> impl Strategy<Value = Reorder> {
    prop_oneof![
        (0usize..16).prop_map(Reorder::Front),
        (0usize..16).prop_map(Reorder::Back),
    ]
}

proptest! {
    #[test]
    fn prop_text_stays_above_non_text(
        kinds in prop::collection::vec(any::<bool>(), 1..12),
        ops in prop::collection::vec(reorder(), 0..24),
    ) {
        let mut doc = Document::new();
        // At least one text shape, whatever the generated kinds are.
        doc.add_shape(text_at(0));
        for (n, is_text) in kinds.iter().enumerate() {
            let n = n as i32;
            doc.add_shape(if *is_text { text_at(n) } else { rect_at(n) });
        }
        let ids: Vec<ShapeId> = doc.ids();

        for op in ops {
            match op {
                Reorder::Front(i) => doc.move_to_front(ids[i % ids.len()]).unwrap(),
                Reorder::Back(i) => doc.move_to_back(ids[i % ids.len()]).unwrap(),
            }
            prop_assert!(text_above_everything(&doc));
            prop_assert_eq!(doc.len(), ids.len());
        }
    }
}
