//! Recommendation engine orchestration
//!
//! One synchronous, batch-oriented run: read the collector snapshot,
//! aggregate candidates, evaluate against the index catalog, rank, write
//! the report. A run either completes and replaces the output or fails
//! before writing and leaves the previous output untouched.
//!
//! The engine performs no internal parallelism and does not defend
//! against concurrent invocation; callers serialize runs.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::aggregate::WorkloadAggregate;
use crate::catalog::{CatalogError, CatalogResult, IndexCatalog};
use crate::extractor::CandidateExtractor;
use crate::observability::Logger;
use crate::recommend::{evaluate, write_report, RecommendError};
use crate::snapshot::{read_snapshot, SnapshotError};

/// Result type for engine runs
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort one engine run. The recoverable missing-snapshot
/// condition is not an error; it surfaces as [`RunReport::Skipped`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// Snapshot present but unreadable
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Opening the catalog connection failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Evaluation or report output failed
    #[error(transparent)]
    Recommend(#[from] RecommendError),
}

/// Outcome of one engine run.
#[derive(Debug)]
pub enum RunReport {
    /// Snapshot read, evaluation complete, report replaced
    Completed {
        /// Snapshot rows read
        rows_read: usize,
        /// Distinct candidates aggregated
        candidates: usize,
        /// Recommendations written (0..=TOP_N)
        written: usize,
        /// Destination of the report
        output_path: PathBuf,
    },
    /// Snapshot missing: run skipped, previous report untouched
    Skipped {
        /// Snapshot location that was checked
        snapshot_path: PathBuf,
    },
}

/// Executes one full recommendation cycle.
///
/// The catalog connection is opened via `connect` only once there is a
/// snapshot to evaluate: a missing snapshot skips the run without ever
/// touching the database. The connection lives for exactly this run and
/// is released on every exit path.
pub fn run_cycle<C, F>(
    snapshot_path: &Path,
    output_path: &Path,
    extractor: &dyn CandidateExtractor,
    connect: F,
) -> EngineResult<RunReport>
where
    C: IndexCatalog,
    F: FnOnce() -> CatalogResult<C>,
{
    let rows = match read_snapshot(snapshot_path) {
        Ok(rows) => rows,
        Err(err) if err.is_input_missing() => {
            Logger::warn(
                "advisor_snapshot_missing",
                &[("path", &snapshot_path.display().to_string())],
            );
            return Ok(RunReport::Skipped {
                snapshot_path: snapshot_path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    Logger::info(
        "advisor_snapshot_loaded",
        &[
            ("path", snapshot_path.display().to_string().as_str()),
            ("rows", rows.len().to_string().as_str()),
        ],
    );

    let aggregate = WorkloadAggregate::from_rows(&rows, extractor);

    let mut catalog = connect()?;
    let recommendations = evaluate(&aggregate, &mut catalog)?;

    if recommendations.is_empty() {
        Logger::info(
            "advisor_no_eligible_candidates",
            &[("candidates_seen", aggregate.len().to_string().as_str())],
        );
    }

    write_report(output_path, &recommendations)?;

    Logger::info(
        "advisor_report_written",
        &[
            ("count", recommendations.len().to_string().as_str()),
            ("path", output_path.display().to_string().as_str()),
        ],
    );

    Ok(RunReport::Completed {
        rows_read: rows.len(),
        candidates: aggregate.len(),
        written: recommendations.len(),
        output_path: output_path.to_path_buf(),
    })
}
