//! Atomic report output
//!
//! The persisted recommendation list is a point-in-time snapshot: the
//! file is fully replaced on success and left untouched when any earlier
//! stage of the run fails. The replace itself is write-then-rename within
//! the destination directory.

use std::fs;
use std::path::Path;

use super::errors::{RecommendError, RecommendResult};
use super::Recommendation;

/// Writes the ranked recommendation list to `path` as a JSON array,
/// replacing any previous report atomically.
pub fn write_report(path: &Path, recommendations: &[Recommendation]) -> RecommendResult<()> {
    let json = serde_json::to_string_pretty(recommendations)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RecommendError::Write {
                path: path.display().to_string(),
                message: format!("failed to create output directory: {}", e),
            })?;
        }
    }

    // Temp file in the same directory so the rename stays on one filesystem.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json.as_bytes()).map_err(|e| RecommendError::Write {
        path: tmp_path.display().to_string(),
        message: e.to_string(),
    })?;
    fs::rename(&tmp_path, path).map_err(|e| RecommendError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rec() -> Recommendation {
        Recommendation {
            table: "orders".to_string(),
            column: "user_id".to_string(),
            calls: 60,
            avg_time_ms: 20.0,
            index_exists: false,
            recommend: true,
            sample_query: Some("SELECT * FROM orders WHERE user_id = 1".to_string()),
        }
    }

    #[test]
    fn test_writes_json_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("recommendations.json");

        write_report(&out, &[sample_rec()]).expect("write");

        let content = fs::read_to_string(&out).expect("read back");
        let parsed: Vec<Recommendation> = serde_json::from_str(&content).expect("parse");
        assert_eq!(parsed, vec![sample_rec()]);
    }

    #[test]
    fn test_replaces_previous_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("recommendations.json");

        write_report(&out, &[sample_rec()]).expect("first write");
        write_report(&out, &[]).expect("second write");

        let parsed: Vec<Recommendation> =
            serde_json::from_str(&fs::read_to_string(&out).expect("read back")).expect("parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("data").join("recommendations.json");

        write_report(&out, &[sample_rec()]).expect("write");
        assert!(out.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("recommendations.json");

        write_report(&out, &[sample_rec()]).expect("write");

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|e| e.ok())
            .filter(|e| e.path() != out)
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_serialized_key_order_matches_contract() {
        let json = serde_json::to_string(&sample_rec()).expect("serialize");
        let keys: Vec<usize> = [
            "\"table\"",
            "\"column\"",
            "\"calls\"",
            "\"avg_time_ms\"",
            "\"index_exists\"",
            "\"recommend\"",
            "\"sample_query\"",
        ]
        .iter()
        .map(|k| json.find(k).expect("key present"))
        .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
