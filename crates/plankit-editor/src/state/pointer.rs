//! Pointer-gesture dispatch for the editor state machine.
//!
//! All coordinates arrive in plan space. Pointer-move may run many
//! times per gesture and only ever touches transient preview state or
//! the in-flight drag position; exactly one history entry is committed
//! per completed gesture.

use plankit_core::constants::{GRID_SIZE, WALL_HEIGHT, WALL_HIT_TOLERANCE};
use plankit_core::{Point, Wall};
use tracing::debug;

use super::{DragState, EditorState, Measurement, Tool, WallDraft};
use crate::spatial;

impl EditorState {
    /// Handles a pointer press at `p`.
    pub fn pointer_down(&mut self, p: Point) {
        match self.tool {
            Tool::DrawWall => self.wall_tool_down(p),
            Tool::Measure => self.measure_tool_down(p),
            Tool::Select => self.select_tool_down(p),
            Tool::Move => self.move_tool_down(p),
            Tool::Rotate => self.rotate_selected(),
        }
    }

    /// Handles pointer movement. Updates previews and the in-flight
    /// drag; never commits history.
    pub fn pointer_move(&mut self, p: Point) {
        let snapped = spatial::snap_point(&p, GRID_SIZE);

        if self.tool == Tool::DrawWall {
            if let Some(draft) = &mut self.wall_draft {
                draft.preview_end = snapped;
            }
        }

        if self.tool == Tool::Measure {
            if let Some(measurement) = &mut self.measurement {
                measurement.end = snapped;
            }
        }

        if let (Some(drag), Some(id)) = (self.drag, self.selected_object()) {
            if let Some(obj) = self.document.object_mut(id) {
                obj.x = spatial::snap_to_grid(p.x - drag.offset_x, GRID_SIZE);
                obj.y = spatial::snap_to_grid(p.y - drag.offset_y, GRID_SIZE);
            }
        }
    }

    /// Handles pointer release: a drag in progress commits one history
    /// entry for the whole gesture.
    pub fn pointer_up(&mut self) {
        if self.drag.take().is_some() {
            self.commit_history();
        }
    }

    /// Finishes a wall chain without creating another wall.
    pub fn double_click(&mut self) {
        if self.tool == Tool::DrawWall && self.wall_draft.take().is_some() {
            debug!("wall chain finished");
        }
    }

    /// Discards all transient gesture state across tools. Nothing is
    /// committed.
    pub fn cancel(&mut self) {
        self.wall_draft = None;
        self.measurement = None;
    }

    fn wall_tool_down(&mut self, p: Point) {
        let snapped = spatial::snap_point(&p, GRID_SIZE);

        match self.wall_draft {
            None => {
                self.wall_draft = Some(WallDraft {
                    start: snapped,
                    preview_end: snapped,
                });
            }
            Some(draft) => {
                if draft.start != snapped {
                    let wall = Wall::new(draft.start, snapped, WALL_HEIGHT, self.new_wall_is_bearing());
                    debug!(length = wall.length(), bearing = wall.is_bearing, "wall committed");
                    self.document.walls.push(wall);
                    self.commit_history();
                } else {
                    // Both clicks snapped to the same lattice point; a
                    // zero-length wall never reaches the document.
                    debug!("zero-length wall segment skipped");
                }
                // Re-arm at the endpoint for chained drawing.
                self.wall_draft = Some(WallDraft {
                    start: snapped,
                    preview_end: snapped,
                });
            }
        }
    }

    fn measure_tool_down(&mut self, p: Point) {
        self.measurement = match self.measurement {
            None => {
                let snapped = spatial::snap_point(&p, GRID_SIZE);
                Some(Measurement {
                    start: snapped,
                    end: snapped,
                })
            }
            // Second click clears the overlay.
            Some(_) => None,
        };
    }

    fn select_tool_down(&mut self, p: Point) {
        if let Some(obj) = spatial::find_object_at(&self.document.objects, &p) {
            self.selected_object = Some(obj.id);
            self.selected_wall = None;
            return;
        }

        if let Some(wall) = spatial::find_wall_at(&self.document.walls, &p, WALL_HIT_TOLERANCE) {
            self.selected_wall = Some(wall.id);
            self.selected_object = None;
            return;
        }

        self.clear_selection();
    }

    fn move_tool_down(&mut self, p: Point) {
        if let Some(obj) = spatial::find_object_at(&self.document.objects, &p) {
            let drag = DragState {
                offset_x: p.x - obj.x,
                offset_y: p.y - obj.y,
            };
            self.selected_object = Some(obj.id);
            self.selected_wall = None;
            self.drag = Some(drag);
        }
    }
}
