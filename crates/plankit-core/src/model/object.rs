use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Point;
use crate::catalog::CatalogItem;
use crate::constants::{DEFAULT_OBJECT_X, DEFAULT_OBJECT_Y, DUPLICATE_OFFSET, ROTATION_STEP_DEG};

/// A furniture object placed on the plan.
///
/// `(x, y)` is the top-left corner of the unrotated footprint;
/// `rotation` (degrees, kept in [0, 360)) applies about the footprint
/// center. `width` and `height` span the footprint; `depth` is the
/// vertical extent used by the 3D projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub rotation: f64,
    pub name: String,
    pub color: String,
}

impl PlacedObject {
    /// Instantiates a catalog template at the default placement.
    pub fn from_template(item: &CatalogItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: DEFAULT_OBJECT_X,
            y: DEFAULT_OBJECT_Y,
            width: item.width,
            height: item.height,
            depth: item.depth,
            rotation: 0.0,
            name: item.name.to_string(),
            color: item.color.to_string(),
        }
    }

    /// Center of the footprint, the pivot for rotation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Rotation-aware containment test: the query point is rotated by
    /// the inverse of the object's rotation about the footprint center,
    /// then tested against the unrotated bounds.
    pub fn contains_point(&self, p: &Point) -> bool {
        let center = self.center();
        let dx = p.x - center.x;
        let dy = p.y - center.y;

        let angle = -self.rotation.to_radians();
        let local_x = dx * angle.cos() - dy * angle.sin();
        let local_y = dx * angle.sin() + dy * angle.cos();

        local_x.abs() <= self.width / 2.0 && local_y.abs() <= self.height / 2.0
    }

    /// Steps rotation by one discrete increment, wrapping mod 360.
    pub fn rotate_step(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP_DEG) % 360.0;
    }

    /// A copy with fresh identity, offset from the source.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: self.x + DUPLICATE_OFFSET,
            y: self.y + DUPLICATE_OFFSET,
            ..self.clone()
        }
    }
}
