//! Local project persistence: the document shape plus transient view
//! state, stored as JSON in a directory under a fixed project key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use plankit_core::{PlacedObject, Wall};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The fixed key the current project is stored under.
pub const PROJECT_KEY: &str = "plankit-project";

/// The stored record: the document shape plus view state that is
/// outside the export contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProject {
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(rename = "showGrid", default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

fn default_zoom() -> f64 {
    1.0
}

fn default_show_grid() -> bool {
    true
}

/// Directory-backed store for the current project.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the stored project file.
    pub fn project_path(&self) -> PathBuf {
        self.root.join(format!("{PROJECT_KEY}.json"))
    }

    /// Saves the project under the fixed key, creating the store
    /// directory if needed.
    pub fn save(&self, project: &StoredProject) -> Result<()> {
        std::fs::create_dir_all(&self.root).context("Failed to create store directory")?;

        let json =
            serde_json::to_string_pretty(project).context("Failed to serialize project")?;
        let path = self.project_path();
        std::fs::write(&path, json).context("Failed to write project file")?;

        info!(path = %path.display(), "project saved");
        Ok(())
    }

    /// Loads the stored project, or `None` when nothing has been saved
    /// yet. A present-but-malformed file is an error.
    pub fn load(&self) -> Result<Option<StoredProject>> {
        let path = self.project_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).context("Failed to read project file")?;
        let project =
            serde_json::from_str(&content).context("Failed to parse stored project")?;
        Ok(Some(project))
    }
}
