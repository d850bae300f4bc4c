//! The project serialization contract used by export, import, and
//! save: `{ walls, objects, canvasWidth, canvasHeight }`, values in
//! plan-space centimeters and degrees.
//!
//! Import is tolerant of a missing `walls` or `objects` field (an empty
//! sequence is substituted) and of missing canvas dimensions (the
//! default plan size is substituted); anything structurally invalid is
//! rejected with a recoverable error.

use plankit_core::constants::{PLAN_HEIGHT, PLAN_WIDTH};
use plankit_core::{PlacedObject, PlanError, ProjectDocument, Result, Wall};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The on-disk / on-wire project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(rename = "canvasWidth", default = "default_plan_width")]
    pub canvas_width: f64,
    #[serde(rename = "canvasHeight", default = "default_plan_height")]
    pub canvas_height: f64,
}

fn default_plan_width() -> f64 {
    PLAN_WIDTH
}

fn default_plan_height() -> f64 {
    PLAN_HEIGHT
}

impl ProjectFile {
    pub fn from_document(doc: &ProjectDocument) -> Self {
        Self {
            walls: doc.walls.clone(),
            objects: doc.objects.clone(),
            canvas_width: doc.plan_width,
            canvas_height: doc.plan_height,
        }
    }

    pub fn into_document(self) -> ProjectDocument {
        ProjectDocument {
            walls: self.walls,
            objects: self.objects,
            plan_width: self.canvas_width,
            plan_height: self.canvas_height,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::MalformedProject { reason: e.to_string() })
    }

    /// Parses a project payload, rejecting structurally invalid input
    /// with a recoverable error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejecting malformed project payload");
            PlanError::MalformedProject { reason: e.to_string() }
        })
    }
}
