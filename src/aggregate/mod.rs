//! Workload aggregation
//!
//! Folds per-query statistics across one full snapshot, keyed by
//! (table, column) candidate. A single query row contributes its full
//! `calls` and `total_exec_time` to every distinct candidate it yields;
//! the attribution is intentionally unweighted ("this query stresses all
//! of these columns").
//!
//! # Invariants
//!
//! - Final totals per candidate are independent of row processing order
//! - `sample_queries` preserves contribution order
//! - Enumeration is first-seen candidate order, so downstream ranking has
//!   a deterministic tie-break

use std::collections::HashMap;

use crate::extractor::{Candidate, CandidateExtractor};
use crate::snapshot::QuerySnapshotRow;

/// Accumulated statistics for one candidate across the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStat {
    /// Sum of `calls` over every query referencing the candidate
    pub calls: u64,
    /// Sum of `total_exec_time` over the same queries, milliseconds
    pub total_time_ms: f64,
    /// Query texts that contributed, in contribution order
    pub sample_queries: Vec<String>,
}

/// Candidate-keyed aggregate over one snapshot, enumerable in
/// first-seen order.
#[derive(Debug, Default)]
pub struct WorkloadAggregate {
    order: Vec<Candidate>,
    stats: HashMap<Candidate, AggregateStat>,
}

impl WorkloadAggregate {
    /// Runs the extractor over every row and folds the statistics.
    /// Rows yielding no candidates contribute nothing.
    pub fn from_rows(rows: &[QuerySnapshotRow], extractor: &dyn CandidateExtractor) -> Self {
        let mut aggregate = WorkloadAggregate::default();
        for row in rows {
            for candidate in extractor.extract(&row.query_text) {
                aggregate.accumulate(candidate, row);
            }
        }
        aggregate
    }

    fn accumulate(&mut self, candidate: Candidate, row: &QuerySnapshotRow) {
        let stat = self.stats.entry(candidate.clone()).or_insert_with(|| {
            self.order.push(candidate);
            AggregateStat::default()
        });
        stat.calls += row.calls;
        stat.total_time_ms += row.total_exec_time_ms;
        stat.sample_queries.push(row.query_text.clone());
    }

    /// Enumerates (candidate, stat) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Candidate, &AggregateStat)> {
        self.order.iter().map(|candidate| {
            let stat = self
                .stats
                .get(candidate)
                .expect("every ordered candidate has a stat entry");
            (candidate, stat)
        })
    }

    /// Looks up the aggregate for one candidate.
    pub fn get(&self, candidate: &Candidate) -> Option<&AggregateStat> {
        self.stats.get(candidate)
    }

    /// Number of distinct candidates seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no candidate was extracted from any row.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
