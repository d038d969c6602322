use thiserror::Error;

use crate::element::ShapeId;

/// Why an edit to a shape was refused.
///
/// Rejections are not failures of the editor: the interaction layer reacts to
/// them by leaving the document untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Some coordinate of the shape would leave the canvas
    #[error("shape would leave the canvas")]
    OutOfBounds,
    /// Zero-area rectangle, zero-length line or text without content
    #[error("shape is degenerate")]
    Degenerate,
    /// Two consecutive segments of a multi-segment line reverse on the same axis
    #[error("segments would double back on themselves")]
    UTurn,
    /// The grabbed cell is not a resize handle of the shape
    #[error("no resize handle at the grabbed cell")]
    NoHandle,
    /// The shape kind has no resize handles at all
    #[error("shape cannot be resized")]
    NotResizable,
}

/// Errors raised by document and editor operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no shape with id {0}")]
    ShapeNotFound(ShapeId),

    #[error("bounding box requested for an empty shape list")]
    EmptyShapeList,

    #[error("edit rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("invalid canvas size {rows}x{cols}")]
    InvalidCanvas { rows: i32, cols: i32 },

    #[error("shape {id} is malformed: {reason}")]
    MalformedShape { id: ShapeId, reason: String },
}

pub type EditorResult<T> = Result<T, EditorError>;
