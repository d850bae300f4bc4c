use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PlacedObject, Wall};
use crate::constants::{PLAN_HEIGHT, PLAN_WIDTH};

/// The unit of persistence, history snapshots, export, and compliance
/// evaluation.
///
/// Insertion order of `walls` and `objects` is the rendering z-order
/// and the hit-test priority (most recently added wins on overlap); it
/// carries no other meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub walls: Vec<Wall>,
    pub objects: Vec<PlacedObject>,
    pub plan_width: f64,
    pub plan_height: f64,
}

impl ProjectDocument {
    pub fn new(plan_width: f64, plan_height: f64) -> Self {
        Self {
            walls: Vec::new(),
            objects: Vec::new(),
            plan_width,
            plan_height,
        }
    }

    pub fn wall(&self, id: Uuid) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: Uuid) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    pub fn object(&self, id: Uuid) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn remove_wall(&mut self, id: Uuid) -> Option<Wall> {
        let idx = self.walls.iter().position(|w| w.id == id)?;
        Some(self.walls.remove(idx))
    }

    pub fn remove_object(&mut self, id: Uuid) -> Option<PlacedObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(idx))
    }

    pub fn bearing_wall_count(&self) -> usize {
        self.walls.iter().filter(|w| w.is_bearing).count()
    }

    pub fn partition_count(&self) -> usize {
        self.walls.iter().filter(|w| !w.is_bearing).count()
    }
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self::new(PLAN_WIDTH, PLAN_HEIGHT)
    }
}
