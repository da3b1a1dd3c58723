//! Index catalog subsystem
//!
//! Answers one question for the rule evaluator: is a candidate column
//! already covered by an index on its table? The live implementation
//! queries `pg_indexes`; a memory-backed implementation serves as a
//! dependency-injected test double.
//!
//! # Existence Semantics
//!
//! Coverage is a coarse substring test: the column name contained in the
//! index name or in its serialized definition. This can false-positive
//! (an index named `idx_users_cityx` matches column `city`); the behavior
//! is deliberate and load-bearing for compatibility with downstream
//! consumers.
//!
//! # Failure Mode
//!
//! Any catalog-query failure propagates as a checked error. Callers must
//! abort the whole evaluation rather than guess at index state.

mod errors;
mod memory;
mod pg;

pub use errors::{CatalogError, CatalogResult};
pub use memory::MemoryCatalog;
pub use pg::PgCatalog;

/// One index as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Index name
    pub name: String,
    /// Serialized index definition (CREATE INDEX statement or equivalent)
    pub definition: String,
}

impl IndexEntry {
    /// Create a catalog entry
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }
}

/// Read-only view over the live database's index catalog.
pub trait IndexCatalog {
    /// Returns every index currently defined on the given table.
    fn indexes_for(&mut self, table: &str) -> CatalogResult<Vec<IndexEntry>>;
}

/// Returns true if any index on `table` mentions `column` in its name or
/// serialized definition (substring match, see module docs).
pub fn index_exists_on(
    catalog: &mut dyn IndexCatalog,
    table: &str,
    column: &str,
) -> CatalogResult<bool> {
    for entry in catalog.indexes_for(table)? {
        if entry.name.contains(column) || entry.definition.contains(column) {
            return Ok(true);
        }
    }
    Ok(false)
}
