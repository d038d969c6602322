use serde::{Deserialize, Serialize};
use std::fmt;

use crate::command::Command;
use crate::document::Document;
use crate::geometry::{CanvasSize, Coord};
use crate::state::EditorMode;

/// Read-only view of the editor handed to every tool callback
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub document: &'a Document,
    pub canvas: CanvasSize,
}

/// Outcome of an event: the next mode plus the document patches to apply.
///
/// Handlers return `None` when the event means nothing in the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub mode: EditorMode,
    pub commands: Vec<Command>,
}

impl Transition {
    pub fn to(mode: EditorMode) -> Self {
        Self {
            mode,
            commands: Vec::new(),
        }
    }

    pub fn with(mode: EditorMode, commands: Vec<Command>) -> Self {
        Self { mode, commands }
    }

    pub fn then(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

/// Tool trait defines how a tool reacts to each cell-level gesture.
///
/// Tools hold no state of their own: everything in flight lives in the
/// [`EditorMode`], so every callback is a pure function of its inputs.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Mode entered when the tool is picked
    fn initial_mode(&self) -> EditorMode {
        EditorMode::BeforeCreating
    }

    fn on_hover(&self, _mode: &EditorMode, _cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_mouse_down(&self, _mode: &EditorMode, _cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_mouse_up(&self, _mode: &EditorMode, _cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_click(&self, _mode: &EditorMode, _cell: Coord, _ctrl: bool, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_double_click(&self, _mode: &EditorMode, _cell: Coord, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_ctrl_enter(&self, _mode: &EditorMode, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    fn on_delete(&self, _mode: &EditorMode, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    /// New raw text for the shape being typed into
    fn on_text(&self, _mode: &EditorMode, _text: &str, _ctx: &ToolContext<'_>) -> Option<Transition> {
        None
    }

    /// Escape: drop whatever is in progress
    fn on_cancel(&self, mode: &EditorMode, _ctx: &ToolContext<'_>) -> Option<Transition> {
        match mode {
            EditorMode::Create { .. } => Some(Transition::to(EditorMode::BeforeCreating)),
            _ => None,
        }
    }
}

mod line_tool;
mod multi_segment_tool;
mod rectangle_tool;
mod selection_tool;
mod text_tool;

pub use line_tool::LineTool;
pub use multi_segment_tool::MultiSegmentTool;
pub use rectangle_tool::RectangleTool;
pub use selection_tool::SelectionTool;
pub use text_tool::TextTool;

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and keeps tools `Copy`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolType {
    #[default]
    Select,
    Rectangle,
    Line,
    MultiSegmentLine,
    Text,
}

impl ToolType {
    pub const ALL: [ToolType; 5] = [
        ToolType::Select,
        ToolType::Rectangle,
        ToolType::Line,
        ToolType::MultiSegmentLine,
        ToolType::Text,
    ];

    fn handler(self) -> &'static dyn Tool {
        match self {
            ToolType::Select => &SelectionTool,
            ToolType::Rectangle => &RectangleTool,
            ToolType::Line => &LineTool,
            ToolType::MultiSegmentLine => &MultiSegmentTool,
            ToolType::Text => &TextTool,
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        self.handler().name()
    }

    fn initial_mode(&self) -> EditorMode {
        self.handler().initial_mode()
    }

    fn on_hover(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_hover(mode, cell, ctx)
    }

    fn on_mouse_down(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_mouse_down(mode, cell, ctx)
    }

    fn on_mouse_up(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_mouse_up(mode, cell, ctx)
    }

    fn on_click(&self, mode: &EditorMode, cell: Coord, ctrl: bool, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_click(mode, cell, ctrl, ctx)
    }

    fn on_double_click(&self, mode: &EditorMode, cell: Coord, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_double_click(mode, cell, ctx)
    }

    fn on_ctrl_enter(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_ctrl_enter(mode, ctx)
    }

    fn on_delete(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_delete(mode, ctx)
    }

    fn on_text(&self, mode: &EditorMode, text: &str, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_text(mode, text, ctx)
    }

    fn on_cancel(&self, mode: &EditorMode, ctx: &ToolContext<'_>) -> Option<Transition> {
        self.handler().on_cancel(mode, ctx)
    }
}

/// Commit `shape` if it passes the legality rules, logging refusals
pub(crate) fn commit(shape: &crate::element::Shape, canvas: CanvasSize) -> Option<Command> {
    match crate::transform::check_committable(shape, canvas) {
        Ok(committed) => {
            log::info!("committing {}", committed.element_type());
            Some(Command::AddShape(crate::element::ShapeObject::new(committed)))
        }
        Err(reason) => {
            log::debug!("discarding {}: {reason}", shape.element_type());
            None
        }
    }
}
