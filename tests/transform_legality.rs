use gridsketch::element::{Rectangle, factory};
use gridsketch::transform::{
    BoundingBox, check_committable, get_bounding_box, get_bounding_box_of_all, resize, translate, translate_all,
};
use gridsketch::{CanvasSize, Coord, Delta, EditorError, Rejection, Shape};

const CANVAS: CanvasSize = CanvasSize::new(10, 10);

fn rect(tl: (i32, i32), br: (i32, i32)) -> Shape {
    factory::rectangle(Coord::new(tl.0, tl.1), Coord::new(br.0, br.1))
}

#[test]
fn test_translate_clamps_to_no_op_at_edge() {
    let shape = rect((0, 0), (4, 4));

    assert_eq!(translate(&shape, Delta::new(-1, 0), CANVAS), Err(Rejection::OutOfBounds));
    // A zero delta is not a rejection.
    assert_eq!(translate(&shape, Delta::new(0, 0), CANVAS), Ok(shape.clone()));
    assert_eq!(translate(&shape, Delta::new(5, 5), CANVAS), Ok(rect((5, 5), (9, 9))));
}

#[test]
fn test_translate_all_moves_each_shape_independently() {
    let shapes = vec![rect((0, 0), (2, 2)), rect((5, 5), (9, 9))];

    let moved = translate_all(&shapes, Delta::new(0, 1), CANVAS);
    assert_eq!(moved, vec![rect((0, 1), (2, 3)), rect((5, 5), (9, 9))]);
}

#[test]
fn test_resize_past_opposite_corner_flips_rectangle() {
    let shape = rect((1, 1), (5, 5));

    let resized = resize(&shape, Coord::new(5, 5), Delta::new(-5, -5), CANVAS).unwrap();
    let Shape::Rectangle(Rectangle { tl, br }) = resized else {
        panic!("resize changed the shape kind");
    };
    assert!(tl.r <= br.r && tl.c <= br.c);
    assert_eq!((tl, br), (Coord::new(0, 0), Coord::new(1, 1)));
}

#[test]
fn test_resize_rejections() {
    let shape = rect((1, 1), (5, 5));

    assert_eq!(resize(&shape, Coord::new(3, 3), Delta::new(1, 1), CANVAS), Err(Rejection::NoHandle));
    assert_eq!(resize(&shape, Coord::new(5, 5), Delta::new(0, -4), CANVAS), Err(Rejection::Degenerate));
    assert_eq!(resize(&shape, Coord::new(5, 5), Delta::new(5, 0), CANVAS), Err(Rejection::OutOfBounds));
    assert_eq!(
        resize(&factory::text(Coord::new(0, 0), &["hi"]), Coord::new(0, 0), Delta::new(1, 1), CANVAS),
        Err(Rejection::NotResizable)
    );
}

#[test]
fn test_resize_line_resnaps_axis() {
    let line = factory::line(Coord::new(2, 2), Coord::new(2, 6));

    let resized = resize(&line, Coord::new(2, 6), Delta::new(6, -3), CANVAS).unwrap();
    assert_eq!(resized, factory::line(Coord::new(2, 2), Coord::new(8, 2)));
}

#[test]
fn test_commit_legality() {
    assert_eq!(check_committable(&rect((3, 3), (3, 8)), CANVAS), Err(Rejection::Degenerate));
    assert_eq!(
        check_committable(&factory::line(Coord::new(4, 4), Coord::new(4, 4)), CANVAS),
        Err(Rejection::Degenerate)
    );
    assert_eq!(
        check_committable(&factory::text(Coord::new(0, 0), &[""]), CANVAS),
        Err(Rejection::Degenerate)
    );
    assert_eq!(check_committable(&rect((0, 0), (9, 9)), CANVAS), Ok(rect((0, 0), (9, 9))));
}

#[test]
fn test_bounding_boxes() {
    let shapes = [
        rect((2, 3), (4, 6)),
        factory::line(Coord::new(7, 1), Coord::new(7, 2)),
        factory::text(Coord::new(0, 5), &["abc", "de"]),
    ];

    assert_eq!(
        get_bounding_box(&shapes[2]),
        BoundingBox { tl: Coord::new(0, 5), br: Coord::new(1, 7) }
    );
    assert_eq!(
        get_bounding_box_of_all(&shapes),
        Ok(BoundingBox { tl: Coord::new(0, 1), br: Coord::new(7, 7) })
    );
    assert_eq!(get_bounding_box_of_all(std::iter::empty()), Err(EditorError::EmptyShapeList));
}
