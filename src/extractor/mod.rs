//! Candidate extraction subsystem
//!
//! Scans one SQL query text for (table, column) pairs referenced in WHERE
//! and JOIN-ON predicates, resolving table aliases along the way.
//!
//! # Design Principles
//!
//! - Heuristic structural scanner, not a parser: explicit regular-pattern
//!   rules per clause type, no clause-boundary tracking
//! - Deterministic: candidates deduplicated preserving first-seen order
//! - Isolated behind `CandidateExtractor` so a real SQL parser could be
//!   substituted without touching aggregation or ranking
//!
//! # Accepted Limits
//!
//! - Single FROM clause per query; subquery FROM clauses are not tracked
//! - No quoted identifiers, no schema-qualified names
//! - A WHERE inside a nested subquery matches the same top-level pattern

mod alias;
mod scan;

pub use alias::AliasMap;
pub use scan::PatternExtractor;

use serde::Serialize;

/// A (table, column) pair suspected of benefiting from an index.
///
/// Equality is case-sensitive on both fields as captured from the query
/// text; no case normalization is performed on extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    /// Canonical table name (alias-resolved)
    pub table: String,
    /// Column name as spelled in the query
    pub column: String,
}

impl Candidate {
    /// Create a candidate pair
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Extraction seam between the scanner and the aggregation pipeline.
pub trait CandidateExtractor {
    /// Returns the unique candidates referenced by one query text,
    /// in first-seen order. Never fails: unrecognized query shapes
    /// simply yield no candidates.
    fn extract(&self, query: &str) -> Vec<Candidate>;
}
