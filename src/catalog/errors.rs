//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from the index catalog boundary
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Could not open a connection to the database
    #[error("failed to connect to index catalog: {0}")]
    Connect(String),

    /// The per-table index query failed mid-run
    #[error("index catalog query failed for table {table}: {message}")]
    Query { table: String, message: String },
}
