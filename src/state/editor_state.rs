//! The interaction state machine of the editor.
//!
//! Exactly one mode is active at a time and it describes what the next
//! gesture means. Each mode carries only the data that gesture needs, so a
//! resize point cannot exist outside a resize.
//!
//! # Transitions
//!
//! ```text
//!  drawing tools                    select tool
//!
//!  ┌────────────────┐              ┌──────────┐ mouse-down ┌──────────┐
//!  │ BeforeCreating │              │          ├────────────►   Move   │
//!  └──┬──────────▲──┘              │          ◄────────────┤          │
//!     │ down /   │ commit /        │          │  mouse-up  └──────────┘
//!     │ click    │ cancel          │  Select  │ mouse-down ┌──────────┐
//!  ┌──▼──────────┴──┐              │          ├────────────►  Resize  │
//!  │     Create     │              │          ◄────────────┤          │
//!  └────────────────┘              │          │  mouse-up  └──────────┘
//!                                  │          │ dbl-click  ┌──────────┐
//!                                  │          ├────────────► TextEdit │
//!                                  │          ◄────────────┤          │
//!                                  └──────────┘ ctrl+enter └──────────┘
//! ```
use std::fmt;

use crate::element::{Shape, ShapeId};
use crate::geometry::Coord;

/// The possible modes of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// A drawing tool is active and nothing is in progress
    BeforeCreating,
    /// A shape is being drawn; it is not in the document yet
    Create {
        start: Coord,
        curr: Coord,
        /// Last legal state of a multi-segment line, used when finishing
        checkpoint: Option<Shape>,
        shape: Shape,
    },
    Select {
        shape_ids: Vec<ShapeId>,
    },
    /// Dragging the selection; `start_shapes` line up with `shape_ids`
    Move {
        start: Coord,
        shape_ids: Vec<ShapeId>,
        start_shapes: Vec<Shape>,
    },
    Resize {
        resize_point: Coord,
        shape_id: ShapeId,
        start_shape: Shape,
    },
    TextEdit {
        shape_id: ShapeId,
        start_shape: Shape,
    },
}

/// Payload-free tag of an [`EditorMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    BeforeCreating,
    Create,
    Select,
    Move,
    Resize,
    TextEdit,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModeKind::BeforeCreating => "BEFORE_CREATING",
            ModeKind::Create => "CREATE",
            ModeKind::Select => "SELECT",
            ModeKind::Move => "MOVE",
            ModeKind::Resize => "RESIZE",
            ModeKind::TextEdit => "TEXT_EDIT",
        };
        f.write_str(name)
    }
}

impl Default for EditorMode {
    fn default() -> Self {
        EditorMode::select_none()
    }
}

impl EditorMode {
    pub fn select(shape_ids: Vec<ShapeId>) -> Self {
        EditorMode::Select { shape_ids }
    }

    pub fn select_none() -> Self {
        EditorMode::Select { shape_ids: Vec::new() }
    }

    /// Start drawing `shape` at `start`
    pub fn create(start: Coord, shape: Shape) -> Self {
        EditorMode::Create {
            start,
            curr: start,
            checkpoint: None,
            shape,
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            EditorMode::BeforeCreating => ModeKind::BeforeCreating,
            EditorMode::Create { .. } => ModeKind::Create,
            EditorMode::Select { .. } => ModeKind::Select,
            EditorMode::Move { .. } => ModeKind::Move,
            EditorMode::Resize { .. } => ModeKind::Resize,
            EditorMode::TextEdit { .. } => ModeKind::TextEdit,
        }
    }

    /// The shape being drawn, if any
    pub fn in_progress_shape(&self) -> Option<&Shape> {
        match self {
            EditorMode::Create { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// Shapes the mode is acting on
    pub fn active_shape_ids(&self) -> Vec<ShapeId> {
        match self {
            EditorMode::Select { shape_ids } | EditorMode::Move { shape_ids, .. } => shape_ids.clone(),
            EditorMode::Resize { shape_id, .. } | EditorMode::TextEdit { shape_id, .. } => vec![*shape_id],
            EditorMode::BeforeCreating | EditorMode::Create { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;

    #[test]
    fn default_is_empty_selection() {
        let mode = EditorMode::default();
        assert_eq!(mode.kind(), ModeKind::Select);
        assert!(mode.active_shape_ids().is_empty());
    }

    #[test]
    fn only_create_has_an_in_progress_shape() {
        let shape = factory::rectangle(Coord::new(1, 1), Coord::new(1, 1));
        let mode = EditorMode::create(Coord::new(1, 1), shape.clone());
        assert_eq!(mode.in_progress_shape(), Some(&shape));
        assert_eq!(mode.kind().to_string(), "CREATE");
        assert_eq!(EditorMode::BeforeCreating.in_progress_shape(), None);
    }
}
