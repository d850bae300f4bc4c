//! Undo/redo wiring between the editor state and the history log.

use tracing::debug;

use super::EditorState;

impl EditorState {
    /// Appends a snapshot of the current document to the history log.
    /// Called once per completed gesture or document operation.
    pub(crate) fn commit_history(&mut self) {
        self.history
            .commit(&self.document.walls, &self.document.objects);
    }

    /// Restores the previous snapshot and clears the selection. Returns
    /// `false` (a reported no-op) when already at the oldest state.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        debug!("undo");
        self.document.walls = snapshot.walls;
        self.document.objects = snapshot.objects;
        self.clear_selection();
        true
    }

    /// Restores the next snapshot and clears the selection. Returns
    /// `false` when already at the newest state.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        debug!("redo");
        self.document.walls = snapshot.walls;
        self.document.objects = snapshot.objects;
        self.clear_selection();
        true
    }
}
