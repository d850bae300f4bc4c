//! Object operations: add from catalog, duplicate, rotate, delete.
//!
//! Every completed operation commits exactly one history entry.
//! Operations with no applicable selection are no-ops, not errors.

use plankit_core::{CatalogItem, PlacedObject};
use tracing::{debug, info};
use uuid::Uuid;

use super::EditorState;

impl EditorState {
    /// Places a catalog template at the default position, selects it,
    /// and commits.
    pub fn add_object(&mut self, item: &CatalogItem) -> Uuid {
        let obj = PlacedObject::from_template(item);
        let id = obj.id;
        info!(name = item.name, "object added");

        self.document.objects.push(obj);
        self.selected_object = Some(id);
        self.selected_wall = None;
        self.commit_history();
        id
    }

    /// Duplicates the selected object with a position offset and fresh
    /// identity; the copy becomes the selection.
    pub fn duplicate_selected(&mut self) -> Option<Uuid> {
        let id = self.selected_object?;
        let copy = self.document.object(id)?.duplicate();
        let copy_id = copy.id;
        info!(name = %copy.name, "object duplicated");

        self.document.objects.push(copy);
        self.selected_object = Some(copy_id);
        self.commit_history();
        Some(copy_id)
    }

    /// Steps the selected object's rotation by one 15° increment
    /// (wrapping mod 360) and commits immediately.
    pub fn rotate_selected(&mut self) {
        let Some(id) = self.selected_object else {
            return;
        };
        if let Some(obj) = self.document.object_mut(id) {
            obj.rotate_step();
            debug!(rotation = obj.rotation, "object rotated");
            self.commit_history();
        }
    }

    /// Deletes the current selection and commits. An object selection
    /// takes priority over a wall selection.
    pub fn delete_selection(&mut self) {
        if let Some(id) = self.selected_object.take() {
            if let Some(obj) = self.document.remove_object(id) {
                info!(name = %obj.name, "object deleted");
                self.commit_history();
            }
            return;
        }

        if let Some(id) = self.selected_wall.take() {
            if self.document.remove_wall(id).is_some() {
                info!("wall deleted");
                self.commit_history();
            }
        }
    }
}
