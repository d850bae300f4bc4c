//! # PlanKit Render
//!
//! Pure presentation adapters over the floor-plan document. Both
//! adapters are side-effect-free consumers: hand them the latest
//! document (plus transient view state for 2D) and they produce plain
//! data, safely re-runnable on every change.
//!
//! - [`scene2d`]: plan-space display list (grid, walls with length
//!   labels, objects, overlays) plus an SVG serializer.
//! - [`scene3d`]: projection of the same document into a scene of
//!   extruded boxes for any 3D backend.

pub mod scene2d;
pub mod scene3d;
mod svg;

pub use scene2d::{render_scene, Primitive, Scene2d, ViewState, WallPreview};
pub use scene3d::{project_scene, Scene3d, Solid, SolidKind, DEFAULT_SCALE};
pub use svg::scene_to_svg;
