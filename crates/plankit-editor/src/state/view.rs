//! Transient view state: zoom and grid visibility. Not part of the
//! document and never enters history; persisted only by the local
//! store.

use plankit_core::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

use super::EditorState;

impl EditorState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub(crate) fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }
}
