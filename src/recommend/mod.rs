//! Rule evaluation, ranking, and report output
//!
//! Turns the aggregated workload into at most [`TOP_N`] recommendation
//! records and writes them atomically as the engine's persisted output.
//!
//! # Invariants
//!
//! - Every emitted record satisfies `calls >= MIN_CALLS_THRESHOLD` and
//!   `index_exists == false`; ineligible candidates are dropped entirely
//! - Output is sorted descending by `calls * avg_time_ms`, ties broken by
//!   first-seen candidate order
//! - The persisted list is fully replaced each run, never merged

mod errors;
mod evaluate;
mod report;

pub use errors::{RecommendError, RecommendResult};
pub use evaluate::evaluate;
pub use report::write_report;

use serde::{Deserialize, Serialize};

/// Minimum aggregated call count for a candidate to be recommended.
pub const MIN_CALLS_THRESHOLD: u64 = 50;

/// Maximum number of recommendations in the persisted output.
pub const TOP_N: usize = 3;

/// Final output record consumed by the index lifecycle manager and the
/// presentation layer. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Canonical table name
    pub table: String,
    /// Column name as captured from the workload
    pub column: String,
    /// Aggregated call count across the snapshot
    pub calls: u64,
    /// total_time_ms / max(calls, 1), rounded to 2 decimals
    pub avg_time_ms: f64,
    /// Always false on emitted records (covered candidates are dropped)
    pub index_exists: bool,
    /// Always true on emitted records
    pub recommend: bool,
    /// First query text that contributed to the candidate, if any
    pub sample_query: Option<String>,
}

impl Recommendation {
    /// Cost-impact score used for ranking.
    pub fn impact(&self) -> f64 {
        self.calls as f64 * self.avg_time_ms
    }
}
