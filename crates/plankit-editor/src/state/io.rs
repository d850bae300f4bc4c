//! Export/import and local-store save/load for the editor state.
//!
//! A malformed payload is rejected at this boundary and surfaced as a
//! recoverable error; the in-memory document is never touched by a
//! failed import.

use chrono::Utc;
use plankit_core::Result;
use tracing::info;

use super::EditorState;
use crate::project_file::ProjectFile;
use crate::store::{ProjectStore, StoredProject};

impl EditorState {
    /// Serializes the current document to the project JSON contract.
    pub fn export_project(&self) -> Result<String> {
        ProjectFile::from_document(&self.document).to_json()
    }

    /// Replaces the document with an imported payload, clears selection
    /// and transient gesture state, and commits one history entry.
    ///
    /// On error the editor is left exactly as it was.
    pub fn import_project(&mut self, json: &str) -> Result<()> {
        let file = ProjectFile::from_json(json)?;

        self.document = file.into_document();
        self.clear_selection();
        self.wall_draft = None;
        self.measurement = None;
        self.drag = None;
        self.commit_history();

        info!(
            walls = self.document.walls.len(),
            objects = self.document.objects.len(),
            "project imported"
        );
        Ok(())
    }

    /// Persists the document plus transient view state under the
    /// store's fixed project key.
    pub fn save_to(&self, store: &ProjectStore) -> anyhow::Result<()> {
        store.save(&StoredProject {
            walls: self.document.walls.clone(),
            objects: self.document.objects.clone(),
            zoom: self.zoom,
            show_grid: self.show_grid,
            saved_at: Some(Utc::now()),
        })
    }

    /// Restores a previously saved project, if one exists. Returns
    /// `Ok(false)` when the store has nothing under the project key.
    pub fn load_from(&mut self, store: &ProjectStore) -> anyhow::Result<bool> {
        let Some(stored) = store.load()? else {
            return Ok(false);
        };

        self.document.walls = stored.walls;
        self.document.objects = stored.objects;
        self.set_zoom(stored.zoom);
        self.set_show_grid(stored.show_grid);
        self.clear_selection();

        info!(
            walls = self.document.walls.len(),
            objects = self.document.objects.len(),
            "project restored from store"
        );
        Ok(true)
    }
}
