//! # PlanKit
//!
//! An interactive 2D floor-plan editor core: draw walls, place
//! furniture from a catalog, inspect the plan as a 3D projection, and
//! get advisory building-code compliance feedback.
//!
//! ## Architecture
//!
//! PlanKit is organized as a workspace with multiple crates:
//!
//! 1. **plankit-core** - geometry model, project document, catalog
//! 2. **plankit-editor** - tool state machine, spatial queries,
//!    undo/redo history, serialization, local store
//! 3. **plankit-compliance** - advisory rule evaluator
//! 4. **plankit-render** - 2D display-list/SVG and 3D box-scene
//!    adapters
//! 5. **plankit** - this crate: aggregation, logging, headless CLI

pub use plankit_compliance as compliance;
pub use plankit_editor as editor;
pub use plankit_render as render;

pub use plankit_compliance::{evaluate, ComplianceIssue, IssueReport, Severity};
pub use plankit_core::{
    builtin_catalog, find_item, CatalogItem, PlacedObject, PlanError, Point, ProjectDocument, Wall,
};
pub use plankit_editor::{
    CannedResponder, EditorKey, EditorState, HistoryLog, ProjectFile, ProjectStore, Tool,
};
pub use plankit_render::{project_scene, render_scene, scene_to_svg, Scene2d, Scene3d, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, RUST_LOG environment
/// variable support, and an INFO default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
