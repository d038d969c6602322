//! Stage one of drawing: shapes to symbolic tokens per cell.

use super::token::{GridRepr, Heading, Token};
use crate::element::{Axis, Rectangle, Shape, ShapeObject, Text};
use crate::geometry::Coord;
use crate::routing::{PathSegment, shape_path};

/// Token map of a single shape
pub fn get_abstract_shape_representation(shape: &Shape) -> GridRepr {
    match shape {
        Shape::Rectangle(rect) => rectangle_representation(rect),
        Shape::Text(text) => text_representation(text),
        Shape::Line(_) | Shape::MultiSegment(_) => {
            path_representation(&shape_path(shape).unwrap_or_default())
        }
    }
}

/// Token map of several shapes; later shapes overwrite earlier ones
pub fn get_canvas_representation<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> GridRepr {
    shapes.into_iter().fold(GridRepr::new(), |mut acc, shape| {
        acc.merge(get_abstract_shape_representation(shape));
        acc
    })
}

/// Token map of a document, in paint order
pub fn get_document_representation(objects: &[ShapeObject]) -> GridRepr {
    get_canvas_representation(objects.iter().map(|obj| &obj.shape))
}

fn rectangle_representation(rect: &Rectangle) -> GridRepr {
    let Rectangle { tl, br } = *rect;
    let mut repr = GridRepr::new();

    for c in tl.c + 1..br.c {
        repr.set(Coord::new(tl.r, c), Token::LineHorizontal);
        repr.set(Coord::new(br.r, c), Token::LineHorizontal);
    }
    for r in tl.r + 1..br.r {
        repr.set(Coord::new(r, tl.c), Token::LineVertical);
        repr.set(Coord::new(r, br.c), Token::LineVertical);
    }

    // Written in this order so a single row or column keeps its top/left corners.
    repr.set(br, Token::CornerBr);
    repr.set(Coord::new(br.r, tl.c), Token::CornerBl);
    repr.set(Coord::new(tl.r, br.c), Token::CornerTr);
    repr.set(tl, Token::CornerTl);
    repr
}

fn text_representation(text: &Text) -> GridRepr {
    let mut repr = GridRepr::new();
    for (row, line) in text.lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            repr.set(
                Coord::new(text.start.r + row as i32, text.start.c + col as i32),
                Token::Glyph(ch),
            );
        }
    }
    repr
}

fn line_token(axis: Axis) -> Token {
    match axis {
        Axis::Horizontal => Token::LineHorizontal,
        Axis::Vertical => Token::LineVertical,
    }
}

/// Corner joining a cell reached by `incoming` and left by `outgoing`
fn joint_token(incoming: &PathSegment, outgoing: &PathSegment) -> Token {
    if incoming.axis() == outgoing.axis() {
        return line_token(incoming.axis());
    }
    let back = Heading::from(incoming.direction().reversed());
    let forward = Heading::from(outgoing.direction());
    let (horizontal, vertical) = if back.is_vertical() { (forward, back) } else { (back, forward) };
    match (horizontal, vertical) {
        (Heading::Right, Heading::Down) => Token::CornerTl,
        (Heading::Left, Heading::Down) => Token::CornerTr,
        (Heading::Right, Heading::Up) => Token::CornerBl,
        _ => Token::CornerBr,
    }
}

fn path_representation(path: &[PathSegment]) -> GridRepr {
    let mut repr = GridRepr::new();
    let legs: Vec<&PathSegment> = path.iter().filter(|leg| !leg.is_zero_length()).collect();

    let (Some(first), Some(last)) = (legs.first(), legs.last()) else {
        // A line still sitting on its first cell.
        if let Some(leg) = path.first() {
            repr.set(leg.start(), Token::LineheadEnd(leg.direction().into()));
        }
        return repr;
    };

    for (idx, leg) in legs.iter().enumerate() {
        for cell in leg.to_segment().cells() {
            repr.set(cell, line_token(leg.axis()));
        }
        if idx > 0 {
            repr.set(leg.start(), joint_token(legs[idx - 1], leg));
        }
    }

    repr.set(first.start(), Token::LineheadStart(first.direction().reversed().into()));
    repr.set(last.end(), Token::LineheadEnd(last.direction().into()));
    repr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;

    #[test]
    fn single_cell_rectangle_is_one_corner() {
        let repr = get_abstract_shape_representation(&factory::rectangle(Coord::new(0, 0), Coord::new(0, 0)));
        assert_eq!(repr.len(), 1);
        assert_eq!(repr.get(Coord::new(0, 0)), Some(Token::CornerTl));
    }

    #[test]
    fn single_row_rectangle() {
        let repr = get_abstract_shape_representation(&factory::rectangle(Coord::new(1, 0), Coord::new(1, 3)));
        assert_eq!(repr.len(), 4);
        assert_eq!(repr.get(Coord::new(1, 0)), Some(Token::CornerTl));
        assert_eq!(repr.get(Coord::new(1, 1)), Some(Token::LineHorizontal));
        assert_eq!(repr.get(Coord::new(1, 3)), Some(Token::CornerTr));
    }

    #[test]
    fn box_border() {
        let repr = get_abstract_shape_representation(&factory::rectangle(Coord::new(0, 0), Coord::new(2, 3)));
        assert_eq!(repr.len(), 10);
        assert_eq!(repr.get(Coord::new(2, 0)), Some(Token::CornerBl));
        assert_eq!(repr.get(Coord::new(2, 3)), Some(Token::CornerBr));
        assert_eq!(repr.get(Coord::new(1, 3)), Some(Token::LineVertical));
        assert_eq!(repr.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn elbow_line_heads_and_corner() {
        let shape = factory::multi_segment(&[Coord::new(0, 0), Coord::new(0, 3), Coord::new(2, 3)]).unwrap();
        let repr = get_abstract_shape_representation(&shape);
        assert_eq!(repr.get(Coord::new(0, 0)), Some(Token::LineheadStart(Heading::Left)));
        assert_eq!(repr.get(Coord::new(0, 1)), Some(Token::LineHorizontal));
        assert_eq!(repr.get(Coord::new(0, 3)), Some(Token::CornerTr));
        assert_eq!(repr.get(Coord::new(1, 3)), Some(Token::LineVertical));
        assert_eq!(repr.get(Coord::new(2, 3)), Some(Token::LineheadEnd(Heading::Down)));
    }

    #[test]
    fn upward_then_right_corner() {
        let shape = factory::multi_segment(&[Coord::new(4, 0), Coord::new(2, 0), Coord::new(2, 2)]).unwrap();
        let repr = get_abstract_shape_representation(&shape);
        assert_eq!(repr.get(Coord::new(2, 0)), Some(Token::CornerTl));
        assert_eq!(repr.get(Coord::new(4, 0)), Some(Token::LineheadStart(Heading::Down)));
    }

    #[test]
    fn text_glyphs_are_literal() {
        let repr = get_abstract_shape_representation(&factory::text(Coord::new(3, 2), &["hi", "x"]));
        assert_eq!(repr.get(Coord::new(3, 3)), Some(Token::Glyph('i')));
        assert_eq!(repr.get(Coord::new(4, 2)), Some(Token::Glyph('x')));
        assert_eq!(repr.len(), 3);
    }
}
