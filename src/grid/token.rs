use std::collections::BTreeMap;

use crate::element::Direction;
use crate::geometry::Coord;

/// Where an arrowhead points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftToRight => Heading::Right,
            Direction::RightToLeft => Heading::Left,
            Direction::Up => Heading::Up,
            Direction::Down => Heading::Down,
        }
    }
}

impl Heading {
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }
}

/// Style-independent content of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    CornerTl,
    CornerTr,
    CornerBl,
    CornerBr,
    LineHorizontal,
    LineVertical,
    /// First cell of a line, pointing away from the line
    LineheadStart(Heading),
    /// Last cell of a line, pointing the way the line travels
    LineheadEnd(Heading),
    /// Literal character, drawn as-is
    Glyph(char),
}

impl Token {
    pub fn name(&self) -> String {
        let heading = |h: &Heading| match h {
            Heading::Up => "UP",
            Heading::Down => "DOWN",
            Heading::Left => "LEFT",
            Heading::Right => "RIGHT",
        };
        match self {
            Token::CornerTl => "CORNER_TL".to_string(),
            Token::CornerTr => "CORNER_TR".to_string(),
            Token::CornerBl => "CORNER_BL".to_string(),
            Token::CornerBr => "CORNER_BR".to_string(),
            Token::LineHorizontal => "LINE_HORIZONTAL".to_string(),
            Token::LineVertical => "LINE_VERTICAL".to_string(),
            Token::LineheadStart(h) => format!("LINEHEAD_START_{}", heading(h)),
            Token::LineheadEnd(h) => format!("LINEHEAD_END_{}", heading(h)),
            Token::Glyph(ch) => ch.to_string(),
        }
    }
}

/// Sparse map from cell to token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRepr {
    cells: BTreeMap<Coord, Token>,
}

impl GridRepr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, cell: Coord, token: Token) {
        self.cells.insert(cell, token);
    }

    pub fn get(&self, cell: Coord) -> Option<Token> {
        self.cells.get(&cell).copied()
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Token)> + '_ {
        self.cells.iter().map(|(cell, token)| (*cell, *token))
    }

    /// Paint `other` over this map; its tokens win on shared cells
    pub fn merge(&mut self, other: GridRepr) {
        self.cells.extend(other.cells);
    }

    /// Row -> column -> token view
    pub fn to_nested(&self) -> BTreeMap<i32, BTreeMap<i32, Token>> {
        let mut rows: BTreeMap<i32, BTreeMap<i32, Token>> = BTreeMap::new();
        for (cell, token) in self.iter() {
            rows.entry(cell.r).or_default().insert(cell.c, token);
        }
        rows
    }
}
