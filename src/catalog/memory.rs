//! In-memory index catalog
//!
//! A dependency-injected stand-in for the live catalog, used by tests and
//! by callers that evaluate recommendations against a known index set.

use std::collections::HashMap;

use super::errors::{CatalogError, CatalogResult};
use super::{IndexCatalog, IndexEntry};

/// Memory-backed catalog keyed by table name.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    indexes: HashMap<String, Vec<IndexEntry>>,
    failure: Option<String>,
}

impl MemoryCatalog {
    /// Empty catalog: no table has any index.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every query fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            indexes: HashMap::new(),
            failure: Some(message.into()),
        }
    }

    /// Registers an index on a table (builder style).
    pub fn with_index(
        mut self,
        table: impl Into<String>,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        self.indexes
            .entry(table.into())
            .or_default()
            .push(IndexEntry::new(name, definition));
        self
    }
}

impl IndexCatalog for MemoryCatalog {
    fn indexes_for(&mut self, table: &str) -> CatalogResult<Vec<IndexEntry>> {
        if let Some(message) = &self.failure {
            return Err(CatalogError::Query {
                table: table.to_string(),
                message: message.clone(),
            });
        }
        Ok(self.indexes.get(table).cloned().unwrap_or_default())
    }
}
