use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::element::ShapeObject;
use crate::geometry::CanvasSize;
use crate::style::{Style, StyleMode};

/// Errors that can occur while saving or loading diagrams
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize diagram: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write diagram: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read diagram file: {0}")]
    ReadError(String),

    #[error("Invalid diagram data: {0}")]
    InvalidState(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Everything needed to rebuild an editor: the unit exchanged with storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSnapshot {
    pub canvas_size: CanvasSize,
    pub shapes: Vec<ShapeObject>,
    #[serde(default)]
    pub style_mode: StyleMode,
    #[serde(default)]
    pub global_style: Style,
}

impl DiagramSnapshot {
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        let snapshot: DiagramSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Canvas must be non-empty, shape ids unique and every shape
    /// structurally sound (see [`crate::element::Shape::check_structure`]).
    pub fn validate(&self) -> PersistenceResult<()> {
        if !self.canvas_size.is_valid() {
            return Err(PersistenceError::InvalidState(format!(
                "canvas size {} is empty",
                self.canvas_size
            )));
        }
        let mut seen = HashSet::with_capacity(self.shapes.len());
        if let Some(dup) = self.shapes.iter().find(|obj| !seen.insert(obj.id)) {
            return Err(PersistenceError::InvalidState(format!("duplicate shape id {}", dup.id)));
        }
        for obj in &self.shapes {
            obj.shape
                .check_structure()
                .map_err(|reason| PersistenceError::InvalidState(format!("shape {}: {reason}", obj.id)))?;
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_json()?)?;
        log::info!("saved diagram with {} shapes to {}", self.shapes.len(), path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PersistenceError::ReadError(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}
