use log::{debug, info, warn};

use super::{DiagramSnapshot, EditorMode, ModeKind};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::{Shape, ShapeId, ShapeObject};
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus, EventHandler, SubscriptionId};
use crate::geometry::hit_testing::{CursorAffordance, cursor_affordance};
use crate::geometry::{CanvasSize, Coord};
use crate::renderer::{CommentStyle, StyledGrid, get_styled_canvas_grid, get_text_export};
use crate::style::{PartialStyle, Style, StyleMode};
use crate::tools::{Tool, ToolContext, ToolType, Transition};
use crate::transform::get_bounding_box_of_all;

/// The main context of the diagram editor: owns the document and the active
/// mode, and turns UI events into state transitions.
///
/// Every event is routed to the selected tool, which answers with a
/// [`Transition`]: the next mode plus the document patches to apply. The
/// context applies the patches, installs the mode and announces each change
/// on its [`EventBus`].
///
/// # Example
///
/// ```rust
/// use gridsketch::{Coord, EditorConfig, EditorContext, ToolType};
///
/// let mut editor = EditorContext::new(EditorConfig::default());
/// editor.set_tool(ToolType::Rectangle);
/// editor.on_cell_mouse_down(Coord::new(0, 0));
/// editor.on_cell_hover(Coord::new(2, 4));
/// editor.on_cell_mouse_up(Coord::new(2, 4));
/// assert_eq!(editor.shapes().len(), 1);
/// ```
#[derive(Debug)]
pub struct EditorContext {
    document: Document,
    canvas: CanvasSize,
    tool: ToolType,
    mode: EditorMode,
    hovered: Option<Coord>,
    global_style: Style,
    style_mode: StyleMode,
    config: EditorConfig,
    /// The event bus for broadcasting editor events
    event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    /// Creates an empty diagram with the select tool active.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(),
            canvas: config.canvas_size,
            tool: ToolType::Select,
            mode: EditorMode::select_none(),
            hovered: None,
            global_style: config.global_style,
            style_mode: config.style_mode,
            config,
            event_bus: EventBus::new(),
        }
    }

    /// Rebuilds an editor from stored state.
    ///
    /// The select tool is active with nothing selected. Shapes keep their
    /// stored order, except that text is lifted above every other shape.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::InvalidCanvas` if the stored canvas is empty and
    /// `EditorError::MalformedShape` if a shape breaks its structural
    /// invariants.
    pub fn from_snapshot(snapshot: DiagramSnapshot, config: EditorConfig) -> EditorResult<Self> {
        let DiagramSnapshot {
            canvas_size,
            shapes,
            style_mode,
            global_style,
        } = snapshot;
        if !canvas_size.is_valid() {
            return Err(EditorError::InvalidCanvas {
                rows: canvas_size.rows,
                cols: canvas_size.cols,
            });
        }
        for obj in &shapes {
            obj.shape
                .check_structure()
                .map_err(|reason| EditorError::MalformedShape { id: obj.id, reason })?;
        }
        info!("restoring {} shapes on a {canvas_size} canvas", shapes.len());
        Ok(Self {
            document: Document::from_shapes(shapes),
            canvas: canvas_size,
            global_style,
            style_mode,
            ..Self::new(config)
        })
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot {
            canvas_size: self.canvas,
            shapes: self.document.shapes().to_vec(),
            style_mode: self.style_mode,
            global_style: self.global_style,
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        self.event_bus.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.event_bus.unsubscribe(id)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    // Queries

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn shapes(&self) -> &[ShapeObject] {
        self.document.shapes()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn in_progress_shape(&self) -> Option<&Shape> {
        self.mode.in_progress_shape()
    }

    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.mode.active_shape_ids()
    }

    pub fn hovered_cell(&self) -> Option<Coord> {
        self.hovered
    }

    pub fn global_style(&self) -> &Style {
        &self.global_style
    }

    pub fn style_mode(&self) -> StyleMode {
        self.style_mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn cursor_affordance(&self) -> CursorAffordance {
        cursor_affordance(&self.mode, &self.document, self.hovered)
    }

    /// The character grid as it should be displayed, shape in progress included
    pub fn render(&self) -> StyledGrid {
        let mut grid = get_styled_canvas_grid(self.canvas, self.document.iter(), self.style_mode, &self.global_style);
        if let Some(shape) = self.mode.in_progress_shape() {
            grid.draw(shape, None, self.style_mode, &self.global_style);
        }
        grid
    }

    /// Plain-text export of the committed document
    pub fn text_export(&self, comment_style: CommentStyle) -> String {
        let grid = get_styled_canvas_grid(self.canvas, self.document.iter(), self.style_mode, &self.global_style);
        get_text_export(&grid, comment_style)
    }

    // Commands

    /// Switch tools. Anything in progress is dropped, except that a text
    /// block being edited is closed the usual way.
    pub fn set_tool(&mut self, tool: ToolType) {
        if let EditorMode::TextEdit { .. } = self.mode {
            if let Some(finished) = self.tool.on_ctrl_enter(&self.mode, &self.tool_context()) {
                self.apply(finished);
            }
        }
        let old = self.tool;
        self.tool = tool;
        info!("tool changed: {old} -> {tool}");
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
        self.transition_to(tool.initial_mode());
    }

    pub fn on_cell_hover(&mut self, cell: Coord) {
        if self.hovered != Some(cell) {
            self.hovered = Some(cell);
            self.event_bus.emit(EditorEvent::HoverChanged { cell: Some(cell) });
        }
        if !self.on_canvas(cell) {
            return;
        }
        let transition = self.tool.on_hover(&self.mode, cell, &self.tool_context());
        self.apply_opt(transition);
    }

    /// The pointer left the canvas
    pub fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            self.event_bus.emit(EditorEvent::HoverChanged { cell: None });
        }
    }

    pub fn on_cell_mouse_down(&mut self, cell: Coord) {
        if !self.on_canvas(cell) {
            return;
        }
        let transition = self.tool.on_mouse_down(&self.mode, cell, &self.tool_context());
        self.apply_opt(transition);
    }

    pub fn on_cell_mouse_up(&mut self, cell: Coord) {
        let cell = self.clamp_to_canvas(cell);
        let transition = self.tool.on_mouse_up(&self.mode, cell, &self.tool_context());
        self.apply_opt(transition);
    }

    pub fn on_cell_click(&mut self, cell: Coord, ctrl: bool) {
        if !self.on_canvas(cell) {
            return;
        }
        let transition = self.tool.on_click(&self.mode, cell, ctrl, &self.tool_context());
        self.apply_opt(transition);
    }

    pub fn on_cell_double_click(&mut self, cell: Coord) {
        if !self.on_canvas(cell) {
            return;
        }
        let transition = self.tool.on_double_click(&self.mode, cell, &self.tool_context());
        self.apply_opt(transition);
    }

    pub fn on_ctrl_enter_press(&mut self) {
        let transition = self.tool.on_ctrl_enter(&self.mode, &self.tool_context());
        self.apply_opt(transition);
    }

    pub fn on_delete_press(&mut self) {
        let transition = self.tool.on_delete(&self.mode, &self.tool_context());
        self.apply_opt(transition);
    }

    /// Escape
    pub fn on_cancel(&mut self) {
        let transition = self.tool.on_cancel(&self.mode, &self.tool_context());
        self.apply_opt(transition);
    }

    /// Replace the content of the text being typed or edited
    pub fn update_text(&mut self, text: &str) {
        let transition = self.tool.on_text(&self.mode, text, &self.tool_context());
        self.apply_opt(transition);
    }

    /// Merge `style` into the overrides of `ids`, or into the global style
    /// when no ids are given.
    pub fn set_style(&mut self, style: PartialStyle, ids: Option<&[ShapeId]>) -> EditorResult<()> {
        match ids {
            Some(ids) if !ids.is_empty() => self.execute(Command::SetShapeStyle { ids: ids.to_vec(), style })?,
            _ => {
                self.global_style = self.global_style.merged(Some(&style));
                self.event_bus.emit(EditorEvent::StyleChanged { ids: Vec::new() });
            }
        }
        Ok(())
    }

    pub fn set_style_mode(&mut self, mode: StyleMode) {
        if self.style_mode != mode {
            self.style_mode = mode;
            self.event_bus.emit(EditorEvent::StyleChanged { ids: Vec::new() });
        }
    }

    /// Raise every selected shape to the top of its layer, keeping their
    /// relative order
    pub fn move_to_front(&mut self) -> EditorResult<()> {
        for id in self.selected_in_paint_order() {
            self.execute(Command::MoveToFront { id })?;
        }
        Ok(())
    }

    /// Lower every selected shape to the bottom of its layer, keeping their
    /// relative order
    pub fn move_to_back(&mut self) -> EditorResult<()> {
        for id in self.selected_in_paint_order().into_iter().rev() {
            self.execute(Command::MoveToBack { id })?;
        }
        Ok(())
    }

    pub fn expand_canvas(&mut self) {
        let step = self.config.expand_step;
        self.resize_canvas(CanvasSize::new(self.canvas.rows + step.rows, self.canvas.cols + step.cols));
    }

    /// Shrink the canvas to the smallest size holding every shape, never
    /// below the configured minimum
    pub fn shrink_canvas_to_fit(&mut self) {
        let min = self.config.min_canvas_size;
        let fitted = match get_bounding_box_of_all(self.document.iter().map(|obj| &obj.shape)) {
            Ok(bounds) => CanvasSize::new((bounds.br.r + 1).max(min.rows), (bounds.br.c + 1).max(min.cols)),
            Err(_) => min,
        };
        self.resize_canvas(fitted);
    }

    // Internals

    fn tool_context(&self) -> ToolContext<'_> {
        ToolContext {
            document: &self.document,
            canvas: self.canvas,
        }
    }

    fn on_canvas(&self, cell: Coord) -> bool {
        let inside = self.canvas.contains(cell);
        if !inside {
            debug!("ignoring event at {cell}, outside the {} canvas", self.canvas);
        }
        inside
    }

    fn clamp_to_canvas(&self, cell: Coord) -> Coord {
        Coord::new(
            cell.r.clamp(0, self.canvas.rows - 1),
            cell.c.clamp(0, self.canvas.cols - 1),
        )
    }

    fn selected_in_paint_order(&self) -> Vec<ShapeId> {
        let EditorMode::Select { shape_ids } = &self.mode else {
            return Vec::new();
        };
        self.document
            .iter()
            .map(|obj| obj.id)
            .filter(|id| shape_ids.contains(id))
            .collect()
    }

    fn resize_canvas(&mut self, new: CanvasSize) {
        let old = self.canvas;
        if old == new {
            return;
        }
        self.canvas = new;
        info!("canvas resized: {old} -> {new}");
        self.event_bus.emit(EditorEvent::CanvasResized { old, new });
    }

    fn apply_opt(&mut self, transition: Option<Transition>) {
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    /// Apply the patches of `transition`, then enter its mode
    fn apply(&mut self, transition: Transition) {
        let Transition { mode, commands } = transition;
        for command in commands {
            if let Err(e) = self.execute(command) {
                warn!("failed to apply patch: {e}");
            }
        }
        self.transition_to(mode);
    }

    fn execute(&mut self, command: Command) -> EditorResult<()> {
        command.execute(&mut self.document)?;
        self.event_bus.emit(command.event());
        Ok(())
    }

    /// Install `mode`, announcing it when the kind or the acted-on shapes change
    fn transition_to(&mut self, mode: EditorMode) {
        let old_kind = self.mode.kind();
        let changed = old_kind != mode.kind() || self.mode.active_shape_ids() != mode.active_shape_ids();
        self.mode = mode;
        if changed {
            debug!("mode changed: {old_kind} -> {}", self.mode.kind());
            self.event_bus.emit(EditorEvent::ModeChanged {
                old: old_kind,
                new: self.mode.kind(),
            });
        }
    }
}
