use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Point;
use crate::constants::{BEARING_THICKNESS, PARTITION_THICKNESS};

/// A wall segment in the floor plan.
///
/// Thickness and height are positive; `start != end` for every wall
/// that reaches the document (degenerate segments exist only
/// transiently while a draw gesture is in progress).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: Uuid,
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub height: f64,
    pub is_bearing: bool,
}

impl Wall {
    /// Creates a wall with the canonical thickness for its type.
    pub fn new(start: Point, end: Point, height: f64, is_bearing: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            thickness: Self::canonical_thickness(is_bearing),
            height,
            is_bearing,
        }
    }

    /// The standard thickness for a bearing or partition wall.
    pub fn canonical_thickness(is_bearing: bool) -> f64 {
        if is_bearing {
            BEARING_THICKNESS
        } else {
            PARTITION_THICKNESS
        }
    }

    /// Wall length, derived from the endpoints and never stored.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Direction angle of the wall in radians.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// Flips bearing/partition type and resets thickness to the new
    /// type's canonical value.
    pub fn toggle_type(&mut self) {
        self.is_bearing = !self.is_bearing;
        self.thickness = Self::canonical_thickness(self.is_bearing);
    }
}
