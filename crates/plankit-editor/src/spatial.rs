//! Spatial queries consumed by the editing state machine: grid
//! snapping, object hit-testing, and wall hit-testing.
//!
//! # Hit-test ordering
//!
//! - Objects are tested topmost-first (reverse insertion order), so the
//!   most recently added of two overlapping objects wins.
//! - Walls are tested in insertion order and the first wall within
//!   tolerance wins; there is no distance minimization across walls.
//!   This is a deliberate simplification, not a nearest-wall search.

use plankit_core::{point_to_segment_distance, PlacedObject, Point, Wall};

/// Rounds `value` to the nearest multiple of `grid`.
///
/// Applied to every user-drawn coordinate (wall endpoints, drag
/// destinations, measurement endpoints) before it enters the model, so
/// all persisted geometry lies on the grid lattice. Idempotent.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    debug_assert!(grid > 0.0, "grid must be positive, got {grid}");
    (value / grid).round() * grid
}

/// Snaps both coordinates of a point.
pub fn snap_point(p: &Point, grid: f64) -> Point {
    Point::new(snap_to_grid(p.x, grid), snap_to_grid(p.y, grid))
}

/// Returns the topmost object whose (rotation-aware) footprint contains
/// `p`, or `None` if nothing is hit.
pub fn find_object_at<'a>(objects: &'a [PlacedObject], p: &Point) -> Option<&'a PlacedObject> {
    objects.iter().rev().find(|obj| obj.contains_point(p))
}

/// Returns the first wall whose centerline is within
/// `thickness / 2 + tolerance` of `p`, in insertion order.
///
/// Zero-length walls are skipped; they cannot be picked.
pub fn find_wall_at<'a>(walls: &'a [Wall], p: &Point, tolerance: f64) -> Option<&'a Wall> {
    walls.iter().find(|wall| {
        if wall.start == wall.end {
            return false;
        }
        point_to_segment_distance(p, &wall.start, &wall.end) <= wall.thickness / 2.0 + tolerance
    })
}
