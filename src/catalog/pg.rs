//! Live PostgreSQL index catalog
//!
//! One blocking connection per evaluator run, released on drop on every
//! exit path.

use postgres::{Client, NoTls};

use super::errors::{CatalogError, CatalogResult};
use super::{IndexCatalog, IndexEntry};

/// Catalog view backed by a live `pg_indexes` query.
pub struct PgCatalog {
    client: Client,
}

impl PgCatalog {
    /// Opens a connection for the duration of one evaluator run.
    pub fn connect(database_url: &str) -> CatalogResult<Self> {
        let client =
            Client::connect(database_url, NoTls).map_err(|e| CatalogError::Connect(e.to_string()))?;
        Ok(Self { client })
    }
}

impl IndexCatalog for PgCatalog {
    fn indexes_for(&mut self, table: &str) -> CatalogResult<Vec<IndexEntry>> {
        let rows = self
            .client
            .query(
                "SELECT indexname, indexdef FROM pg_indexes WHERE tablename = $1",
                &[&table],
            )
            .map_err(|e| CatalogError::Query {
                table: table.to_string(),
                message: e.to_string(),
            })?;

        Ok(rows
            .iter()
            .map(|row| IndexEntry {
                name: row.get(0),
                definition: row.get(1),
            })
            .collect())
    }
}
