//! # PlanKit Core
//!
//! Core types for the PlanKit floor-plan editor: the geometry model
//! (walls, placed furniture objects, the project document), the built-in
//! furniture catalog, plan-space constants, and shared error types.
//!
//! Everything here is plain data plus pure derived accessors. Editing
//! behavior lives in `plankit-editor`; rule evaluation in
//! `plankit-compliance`; presentation in `plankit-render`.
//!
//! Coordinates are plan-space centimeters throughout; rotations are
//! degrees.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod model;

pub use catalog::{builtin_catalog, find_item, CatalogCategory, CatalogItem};
pub use error::{PlanError, Result};
pub use model::{point_to_segment_distance, PlacedObject, Point, ProjectDocument, Wall};
