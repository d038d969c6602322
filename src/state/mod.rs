mod context;
mod editor_state;
mod persistence;

pub use context::EditorContext;
pub use editor_state::{EditorMode, ModeKind};
pub use persistence::{DiagramSnapshot, PersistenceError, PersistenceResult};
