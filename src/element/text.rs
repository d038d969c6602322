use serde::{Deserialize, Serialize};

use crate::geometry::{CanvasSize, Coord, Delta};

/// A block of text anchored at its top-left cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    pub start: Coord,
    pub lines: Vec<String>,
}

impl Text {
    pub fn empty(start: Coord) -> Self {
        Self {
            start,
            lines: Vec::new(),
        }
    }

    /// Rows and columns occupied: line count by longest line, in chars
    pub fn extent(&self) -> (i32, i32) {
        let rows = self.lines.len() as i32;
        let cols = self
            .lines
            .iter()
            .map(|line| line.chars().count() as i32)
            .max()
            .unwrap_or(0);
        (rows, cols)
    }

    /// Bottom-right cell of the block; the start cell for an empty text
    pub fn last_cell(&self) -> Coord {
        let (rows, cols) = self.extent();
        Coord::new(self.start.r + (rows - 1).max(0), self.start.c + (cols - 1).max(0))
    }

    pub fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.is_empty())
    }

    /// Whether `point` lies in the block of `rows x longest line` cells,
    /// including the blank tail of shorter lines
    pub fn contains(&self, point: Coord) -> bool {
        let (rows, cols) = self.extent();
        let offset = point - self.start;
        (0..rows).contains(&offset.r) && (0..cols).contains(&offset.c)
    }

    pub fn translated(&self, delta: Delta) -> Self {
        Self {
            start: self.start + delta,
            lines: self.lines.clone(),
        }
    }

    /// Replace the content with `input`, split on newlines and truncated to
    /// what fits between `start` and the canvas edge. Lines never wrap.
    pub fn with_content(&self, input: &str, canvas: CanvasSize) -> Self {
        Self {
            start: self.start,
            lines: cap_lines(input, self.start, canvas),
        }
    }
}

/// Split `input` into lines and cut them to the room left on the canvas
pub fn cap_lines(input: &str, start: Coord, canvas: CanvasSize) -> Vec<String> {
    let max_rows = (canvas.rows - start.r).max(0) as usize;
    let max_cols = (canvas.cols - start.c).max(0) as usize;
    input
        .split('\n')
        .take(max_rows)
        .map(|line| line.trim_end_matches('\r').chars().take(max_cols).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_to_remaining_columns() {
        let text = Text::empty(Coord::new(5, 5)).with_content("1234567", CanvasSize::new(10, 10));
        assert_eq!(text.lines, vec!["12345".to_string()]);
    }

    #[test]
    fn caps_to_remaining_rows() {
        let text = Text::empty(Coord::new(8, 0)).with_content("a\nb\nc\nd", CanvasSize::new(10, 10));
        assert_eq!(text.lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn extent_uses_longest_line() {
        let text = Text {
            start: Coord::new(1, 1),
            lines: vec!["ab".into(), "abcd".into(), String::new()],
        };
        assert_eq!(text.extent(), (3, 4));
        assert_eq!(text.last_cell(), Coord::new(3, 4));
        assert!(text.contains(Coord::new(2, 4)));
        assert!(text.contains(Coord::new(1, 4)));
        assert!(text.contains(Coord::new(3, 1)));
        assert!(!text.contains(Coord::new(1, 5)));
        assert!(!text.contains(Coord::new(4, 1)));
        assert!(!Text::empty(Coord::new(1, 1)).contains(Coord::new(1, 1)));
    }
}
