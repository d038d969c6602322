use crate::element::ShapeId;
use crate::geometry::{CanvasSize, Coord};
use crate::state::ModeKind;
use crate::tools::ToolType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    ToolChanged {
        old: ToolType,
        new: ToolType,
    },
    ModeChanged {
        old: ModeKind,
        new: ModeKind,
    },
    ShapeAdded {
        id: ShapeId,
    },
    ShapeUpdated {
        id: ShapeId,
    },
    ShapesRemoved {
        ids: Vec<ShapeId>,
    },
    ShapesReordered,
    HoverChanged {
        cell: Option<Coord>,
    },
    /// Per-shape overrides changed; an empty list means the global style
    StyleChanged {
        ids: Vec<ShapeId>,
    },
    CanvasResized {
        old: CanvasSize,
        new: CanvasSize,
    },
}
