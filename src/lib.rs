//! idxadvisor - workload-driven index recommendations for PostgreSQL
//!
//! Observes a snapshot of per-query execution statistics and proposes
//! missing secondary indexes, ranked by estimated cost impact.

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod extractor;
pub mod observability;
pub mod recommend;
pub mod snapshot;
