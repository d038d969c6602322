mod commands;

use crate::error::EditorError;

pub use commands::Command;

/// Result type for command operations
pub type CommandResult = Result<(), EditorError>;
