//! # PlanKit Editor
//!
//! The interactive core of the floor-plan editor: the tool/gesture
//! state machine, the spatial query engine it consults, the bounded
//! undo/redo history, the project serialization contract, and the
//! file-backed local store.
//!
//! ## Architecture
//!
//! ```text
//! EditorState (document owner, tool + gesture + selection state)
//!   ├── spatial   (snapping, hit-testing)
//!   ├── history   (snapshot undo/redo log)
//!   ├── project_file / store (export, import, local persistence)
//!   └── assistant (canned-response lookup, outside the data path)
//! ```
//!
//! Pointer and keyboard input is delivered to [`EditorState`] as plain
//! method calls in plan-space coordinates; presentation layers re-read
//! the document after every call. All mutations are synchronous, and
//! exactly one history entry is committed per completed gesture.

pub mod assistant;
pub mod history;
pub mod project_file;
pub mod spatial;
pub mod state;
pub mod store;

pub use assistant::CannedResponder;
pub use history::{HistoryLog, HistorySnapshot};
pub use project_file::ProjectFile;
pub use state::{EditorKey, EditorState, Measurement, Tool, WallDraft};
pub use store::{ProjectStore, StoredProject, PROJECT_KEY};
