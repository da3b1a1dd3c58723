//! CSV snapshot reader with lenient field coercion

use std::path::Path;

use csv::ReaderBuilder;

use super::errors::{SnapshotError, SnapshotResult};
use super::QuerySnapshotRow;

/// Reads one collector snapshot into memory.
///
/// The header row decides column positions; the column names are part of
/// the collector contract. Rows with missing or unparsable fields are
/// coerced per the module rules rather than failing the whole read.
pub fn read_snapshot(path: &Path) -> SnapshotResult<Vec<QuerySnapshotRow>> {
    if !path.exists() {
        return Err(SnapshotError::InputMissing(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| SnapshotError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| SnapshotError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let query_col = column("query");
    let calls_col = column("calls");
    let total_col = column("total_exec_time");
    let mean_col = column("mean_exec_time");
    let rows_col = column("rows");

    let mut rows = Vec::new();
    for record in reader.records() {
        // A record the CSV layer cannot even tokenize is skipped; field-level
        // problems are coerced below.
        let record = match record {
            Ok(r) => r,
            Err(_) => continue,
        };

        let field = |col: Option<usize>| col.and_then(|i| record.get(i));

        rows.push(QuerySnapshotRow {
            query_text: field(query_col).unwrap_or("").to_string(),
            calls: parse_u64(field(calls_col)),
            total_exec_time_ms: parse_f64(field(total_col)),
            mean_exec_time_ms: parse_f64(field(mean_col)),
            rows_returned: parse_u64(field(rows_col)),
        });
    }

    Ok(rows)
}

fn parse_u64(field: Option<&str>) -> u64 {
    field.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

fn parse_f64(field: Option<&str>) -> f64 {
    field.and_then(|s| s.trim().parse().ok()).unwrap_or(0.0)
}
