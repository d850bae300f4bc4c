//! Plan-space constants shared across the workspace.
//!
//! All lengths are centimeters, matching the editor's working units.

/// Default plan width.
pub const PLAN_WIDTH: f64 = 1200.0;

/// Default plan height.
pub const PLAN_HEIGHT: f64 = 800.0;

/// Snap lattice pitch for all user-drawn coordinates.
pub const GRID_SIZE: f64 = 50.0;

/// Standard wall height for newly drawn walls.
pub const WALL_HEIGHT: f64 = 280.0;

/// Canonical thickness of a load-bearing wall.
pub const BEARING_THICKNESS: f64 = 25.0;

/// Canonical thickness of a partition wall.
pub const PARTITION_THICKNESS: f64 = 12.0;

/// Extra margin around a wall's half-thickness accepted by hit-testing.
pub const WALL_HIT_TOLERANCE: f64 = 5.0;

/// Discrete rotation step applied per rotate action, in degrees.
pub const ROTATION_STEP_DEG: f64 = 15.0;

/// Offset applied to both axes when duplicating an object.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Default placement for objects added from the catalog.
pub const DEFAULT_OBJECT_X: f64 = 100.0;
pub const DEFAULT_OBJECT_Y: f64 = 100.0;

/// Zoom limits and step for the transient view state.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;
