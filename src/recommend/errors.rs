//! Recommendation error types

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for evaluation and report output
pub type RecommendResult<T> = Result<T, RecommendError>;

/// Errors producing or persisting the recommendation list
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Existing-index check failed; the whole evaluation aborts with no
    /// output written
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Recommendation list could not be serialized
    #[error("failed to serialize recommendations: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Recommendation list could not be written to its destination
    #[error("failed to write recommendations to {path}: {message}")]
    Write { path: String, message: String },
}
