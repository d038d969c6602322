use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::geometry::CanvasSize;
use crate::renderer::CommentStyle;
use crate::state::{PersistenceError, PersistenceResult};
use crate::style::{Style, StyleMode};

/// Editor defaults. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas of a fresh diagram
    pub canvas_size: CanvasSize,
    /// Rows and columns added by each canvas expansion
    pub expand_step: CanvasSize,
    /// Smallest canvas a shrink may produce
    pub min_canvas_size: CanvasSize,
    pub global_style: Style,
    pub style_mode: StyleMode,
    pub comment_style: CommentStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: CanvasSize::new(40, 100),
            expand_step: CanvasSize::new(10, 20),
            min_canvas_size: CanvasSize::new(5, 10),
            global_style: Style::default(),
            style_mode: StyleMode::Unicode,
            comment_style: CommentStyle::None,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PersistenceError::ReadError(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    fn validate(&self) -> PersistenceResult<()> {
        if !self.canvas_size.is_valid() || !self.min_canvas_size.is_valid() {
            return Err(PersistenceError::InvalidState(format!(
                "canvas sizes must be positive, got {} and minimum {}",
                self.canvas_size, self.min_canvas_size
            )));
        }
        if self.expand_step.rows < 0 || self.expand_step.cols < 0 {
            return Err(PersistenceError::InvalidState(format!(
                "expand step {} must not be negative",
                self.expand_step
            )));
        }
        Ok(())
    }
}
