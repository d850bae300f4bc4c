//! Geometry model: points, walls, placed objects, and the project
//! document. Plain value types with pure derived accessors.

use serde::{Deserialize, Serialize};

mod document;
mod object;
mod wall;

pub use document::ProjectDocument;
pub use object::PlacedObject;
pub use wall::Wall;

/// A point in plan space, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Distance from `p` to the segment `a`–`b` via clamped projection:
/// project `p` onto the infinite line through the segment, clamp the
/// parametric position to [0, 1], and measure to the closest point.
///
/// A zero-length segment degrades to plain point distance, so callers
/// may pass degenerate segments without special-casing.
pub fn point_to_segment_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return p.distance_to(a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance_to(&closest)
}
