//! Editor state manager: the active tool, the in-progress gesture, the
//! selection, the transient view state, and the document itself.
//!
//! This module is split into submodules:
//! - `pointer`: pointer-gesture dispatch (press, move, release, cancel)
//! - `objects`: object operations (add, duplicate, rotate, delete)
//! - `walls`: wall operations (type toggle)
//! - `history`: undo/redo and commit wiring
//! - `io`: export/import and local-store save/load
//! - `view`: zoom and grid visibility

mod history;
mod io;
mod objects;
mod pointer;
mod view;
mod walls;

use plankit_core::constants::{PLAN_HEIGHT, PLAN_WIDTH};
use plankit_core::{Point, ProjectDocument};
use uuid::Uuid;

use crate::history::HistoryLog;

/// The editing tools. Tool selection is orthogonal to any gesture in
/// progress; switching tools discards partial gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    DrawWall,
    Move,
    Rotate,
    Measure,
}

/// Keyboard actions, bound by the shell however fits its environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    SelectTool,
    WallTool,
    MoveTool,
    RotateTool,
    MeasureTool,
    Cancel,
    Delete,
    Undo,
    Redo,
}

/// An armed wall-drawing gesture: the committed chain start plus the
/// live preview endpoint tracking the pointer. Never part of the
/// document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallDraft {
    pub start: Point,
    pub preview_end: Point,
}

/// The transient measurement overlay. Never persisted, never in
/// history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start: Point,
    pub end: Point,
}

impl Measurement {
    pub fn distance(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct DragState {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// The single source of truth for the editor: document, tool, gesture
/// state, selection, view state, and history, in one explicit struct so
/// the state machine is unit-testable without a UI harness.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: ProjectDocument,
    tool: Tool,
    selected_object: Option<Uuid>,
    selected_wall: Option<Uuid>,
    new_wall_is_bearing: bool,
    wall_draft: Option<WallDraft>,
    drag: Option<DragState>,
    measurement: Option<Measurement>,
    zoom: f64,
    show_grid: bool,
    history: HistoryLog,
}

impl EditorState {
    /// Creates an editor over an empty document at the default plan
    /// size.
    pub fn new() -> Self {
        Self::with_document(ProjectDocument::new(PLAN_WIDTH, PLAN_HEIGHT))
    }

    pub fn with_document(document: ProjectDocument) -> Self {
        Self {
            document,
            tool: Tool::Select,
            selected_object: None,
            selected_wall: None,
            new_wall_is_bearing: false,
            wall_draft: None,
            drag: None,
            measurement: None,
            zoom: 1.0,
            show_grid: true,
            history: HistoryLog::default(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches the active tool, discarding (not committing) any
    /// partial wall-drawing or measurement gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::DrawWall {
            self.wall_draft = None;
        }
        if tool != Tool::Measure {
            self.measurement = None;
        }
        self.tool = tool;
    }

    pub fn selected_object(&self) -> Option<Uuid> {
        self.selected_object
    }

    pub fn selected_wall(&self) -> Option<Uuid> {
        self.selected_wall
    }

    pub fn clear_selection(&mut self) {
        self.selected_object = None;
        self.selected_wall = None;
    }

    /// Type used for the next drawn wall.
    pub fn new_wall_is_bearing(&self) -> bool {
        self.new_wall_is_bearing
    }

    pub fn set_new_wall_bearing(&mut self, bearing: bool) {
        self.new_wall_is_bearing = bearing;
    }

    pub fn wall_draft(&self) -> Option<&WallDraft> {
        self.wall_draft.as_ref()
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Thin dispatch layer mapping keyboard actions onto editor
    /// operations.
    pub fn handle_key(&mut self, key: EditorKey) {
        match key {
            EditorKey::SelectTool => self.set_tool(Tool::Select),
            EditorKey::WallTool => self.set_tool(Tool::DrawWall),
            EditorKey::MoveTool => self.set_tool(Tool::Move),
            EditorKey::RotateTool => self.set_tool(Tool::Rotate),
            EditorKey::MeasureTool => self.set_tool(Tool::Measure),
            EditorKey::Cancel => self.cancel(),
            EditorKey::Delete => self.delete_selection(),
            EditorKey::Undo => {
                self.undo();
            }
            EditorKey::Redo => {
                self.redo();
            }
        }
    }

}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
