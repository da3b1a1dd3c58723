//! Query-statistics snapshot subsystem
//!
//! The external collector materializes one snapshot per cycle as a CSV
//! file with columns `query, calls, total_exec_time, mean_exec_time, rows`.
//! This module reads that file back into fixed-shape rows.
//!
//! # Coercion Rules
//!
//! - Missing or unreadable query text coerces to the empty string
//! - Missing or unparsable numeric fields coerce to 0 / 0.0
//! - A malformed row never aborts the read; it is coerced or skipped
//! - A missing snapshot file is the recoverable `InputMissing` condition

mod errors;
mod reader;

pub use errors::{SnapshotError, SnapshotResult};
pub use reader::read_snapshot;

/// One row of observed per-query statistics. Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshotRow {
    /// Normalized query text as reported by the statistics view
    pub query_text: String,
    /// Number of times the query was executed
    pub calls: u64,
    /// Total execution time across all calls, milliseconds
    pub total_exec_time_ms: f64,
    /// Mean execution time per call, milliseconds
    pub mean_exec_time_ms: f64,
    /// Total rows returned across all calls
    pub rows_returned: u64,
}
