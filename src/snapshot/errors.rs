//! Snapshot error types

use thiserror::Error;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors reading the collector's snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file absent: recoverable, the run is skipped and the
    /// previous output stays untouched
    #[error("snapshot not found: {0} (run the collector first)")]
    InputMissing(String),

    /// Snapshot file present but unreadable as CSV
    #[error("failed to read snapshot {path}: {message}")]
    Read { path: String, message: String },
}

impl SnapshotError {
    /// True for the recoverable missing-input condition
    pub fn is_input_missing(&self) -> bool {
        matches!(self, SnapshotError::InputMissing(_))
    }
}
