#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod renderer;
pub mod routing;
pub mod state;
pub mod style;
pub mod tools;
pub mod transform;

pub use command::{Command, CommandResult};
pub use config::EditorConfig;
pub use document::Document;
pub use element::{Shape, ShapeId, ShapeObject};
pub use error::{EditorError, EditorResult, Rejection};
pub use event::{EditorEvent, EventBus, EventHandler, SubscriptionId};
pub use geometry::hit_testing::CursorAffordance;
pub use geometry::{CanvasSize, Coord, Delta};
pub use renderer::{CommentStyle, StyledGrid};
pub use state::{DiagramSnapshot, EditorContext, EditorMode, ModeKind};
pub use style::{ArrowStyle, LineStyle, PartialStyle, Style, StyleMode};
pub use tools::{Tool, ToolType};
