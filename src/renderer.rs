use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::element::{Shape, ShapeObject};
use crate::geometry::{CanvasSize, Coord};
use crate::grid::{BLANK_GLYPH, GlyphContext, get_abstract_shape_representation, get_char_repr};
use crate::style::{PartialStyle, Style, StyleMode};

/// Marker put in front of every exported line, so a diagram can be pasted
/// into source code comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStyle {
    #[default]
    None,
    DoubleSlash,
    Hash,
    DoubleDash,
    Semicolon,
}

impl CommentStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            CommentStyle::None => "",
            CommentStyle::DoubleSlash => "// ",
            CommentStyle::Hash => "# ",
            CommentStyle::DoubleDash => "-- ",
            CommentStyle::Semicolon => "; ",
        }
    }
}

impl FromStr for CommentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(CommentStyle::None),
            "slash" | "//" => Ok(CommentStyle::DoubleSlash),
            "hash" | "#" => Ok(CommentStyle::Hash),
            "dash" | "--" => Ok(CommentStyle::DoubleDash),
            "semicolon" | ";" => Ok(CommentStyle::Semicolon),
            other => Err(format!("unknown comment style '{other}'")),
        }
    }
}

/// The final rows x cols character matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledGrid {
    rows: Vec<Vec<char>>,
}

impl StyledGrid {
    pub fn blank(size: CanvasSize) -> Self {
        let rows = size.rows.max(0) as usize;
        let cols = size.cols.max(0) as usize;
        Self {
            rows: vec![vec![BLANK_GLYPH; cols]; rows],
        }
    }

    pub fn get(&self, cell: Coord) -> Option<char> {
        let r = usize::try_from(cell.r).ok()?;
        let c = usize::try_from(cell.c).ok()?;
        self.rows.get(r)?.get(c).copied()
    }

    /// Write a glyph, ignoring cells outside the grid
    fn set(&mut self, cell: Coord, ch: char) {
        let (Ok(r), Ok(c)) = (usize::try_from(cell.r), usize::try_from(cell.c)) else {
            return;
        };
        if let Some(slot) = self.rows.get_mut(r).and_then(|row| row.get_mut(c)) {
            *slot = ch;
        }
    }

    /// Paint one shape over whatever is already drawn
    pub fn draw(&mut self, shape: &Shape, shape_style: Option<&PartialStyle>, style_mode: StyleMode, global_style: &Style) {
        let ctx = GlyphContext {
            style_mode,
            global_style,
            shape_style,
        };
        for (cell, token) in get_abstract_shape_representation(shape).iter() {
            self.set(cell, get_char_repr(token, &ctx));
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_string(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(|chars| chars.iter().collect())
    }
}

impl fmt::Display for StyledGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", s)
    }
}

/// Draw `shapes` in order onto a blank canvas, each with its own effective style
pub fn get_styled_canvas_grid<'a>(
    size: CanvasSize,
    shapes: impl IntoIterator<Item = &'a ShapeObject>,
    style_mode: StyleMode,
    global_style: &Style,
) -> StyledGrid {
    let mut grid = StyledGrid::blank(size);
    for obj in shapes {
        grid.draw(&obj.shape, obj.style.as_ref(), style_mode, global_style);
    }
    grid
}

/// Plain-text export of a grid.
///
/// Trailing blanks are trimmed from every row and trailing empty rows are
/// dropped before each remaining row gets the comment prefix.
pub fn get_text_export(grid: &StyledGrid, comment_style: CommentStyle) -> String {
    let mut lines: Vec<String> = grid
        .rows()
        .iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let prefix = comment_style.prefix();
    lines
        .iter()
        .map(|line| format!("{prefix}{line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::style::LineStyle;

    #[test]
    fn draws_box_with_light_lines() {
        let objects = vec![ShapeObject::new(factory::rectangle(Coord::new(0, 0), Coord::new(2, 3)))];
        let grid = get_styled_canvas_grid(CanvasSize::new(3, 5), &objects, StyleMode::Unicode, &Style::default());
        assert_eq!(grid.to_string(), "┌──┐ \n│  │ \n└──┘ ");
    }

    #[test]
    fn export_trims_and_prefixes() {
        let objects = vec![
            ShapeObject::new(factory::line(Coord::new(0, 0), Coord::new(0, 3))),
            ShapeObject::new(factory::text(Coord::new(1, 1), &["ok"])),
        ];
        let grid = get_styled_canvas_grid(CanvasSize::new(5, 8), &objects, StyleMode::Ascii, &Style::default());
        assert_eq!(get_text_export(&grid, CommentStyle::Hash), "# --->\n#  ok");
        assert_eq!(get_text_export(&grid, CommentStyle::None), "--->\n ok");
    }

    #[test]
    fn shapes_off_canvas_are_clipped() {
        let objects = vec![ShapeObject::new(factory::rectangle(Coord::new(1, 1), Coord::new(4, 4)))
            .with_style(PartialStyle {
                line_style: Some(LineStyle::Heavy),
                ..Default::default()
            })];
        let grid = get_styled_canvas_grid(CanvasSize::new(3, 3), &objects, StyleMode::Unicode, &Style::default());
        assert_eq!(grid.get(Coord::new(1, 1)), Some('┏'));
        assert_eq!(grid.get(Coord::new(2, 2)), Some(BLANK_GLYPH));
        assert_eq!(grid.get(Coord::new(3, 3)), None);
    }
}
