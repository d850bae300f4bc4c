//! Wall operations on the current selection.

use tracing::debug;

use super::EditorState;

impl EditorState {
    /// Toggles the selected wall between bearing and partition. The
    /// thickness resets to the new type's canonical value. Commits one
    /// history entry; no selection means no-op.
    pub fn toggle_selected_wall_type(&mut self) {
        let Some(id) = self.selected_wall else {
            return;
        };
        if let Some(wall) = self.document.wall_mut(id) {
            wall.toggle_type();
            debug!(bearing = wall.is_bearing, thickness = wall.thickness, "wall type toggled");
            self.commit_history();
        }
    }
}
