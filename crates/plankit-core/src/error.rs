//! Error handling for PlanKit.
//!
//! The editor core itself has no failure modes: every editing operation
//! is total over valid numeric input. Errors only arise at the
//! serialization boundary (malformed project payloads) and at file I/O.
//! All error types use `thiserror`.

use thiserror::Error;

/// Main error type for PlanKit.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A project payload failed structural validation. The in-memory
    /// document is left untouched when this is returned.
    #[error("malformed project data: {reason}")]
    MalformedProject {
        /// Why the payload was rejected.
        reason: String,
    },

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl PlanError {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        PlanError::Other(msg.into())
    }

    /// Check if this error is recoverable by rejecting the input and
    /// keeping the current document.
    pub fn is_malformed_project(&self) -> bool {
        matches!(self, PlanError::MalformedProject { .. })
    }
}

/// Result type using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;
