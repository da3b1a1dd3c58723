//! Table alias resolution
//!
//! Builds a per-query mapping from lowercased alias (or bare table name)
//! to canonical table name by scanning FROM and JOIN clauses. The map is
//! scoped to one query text and never shared across queries.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// `FROM <table> [[AS] <alias>]`, first occurrence only.
const FROM_PATTERN: &str = r"(?i)FROM\s+([a-zA-Z0-9_]+)(?:\s+(?:AS\s+)?([a-zA-Z0-9_]+))?";

/// `[LEFT|RIGHT|INNER|FULL|CROSS]? JOIN <table> [[AS] <alias>]`, every occurrence.
const JOIN_PATTERN: &str =
    r"(?i)(?:LEFT|RIGHT|INNER|FULL|CROSS)?\s+JOIN\s+([a-zA-Z0-9_]+)(?:\s+(?:AS\s+)?([a-zA-Z0-9_]+))?";

fn from_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FROM_PATTERN).expect("FROM_PATTERN is a valid regex"))
}

fn join_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(JOIN_PATTERN).expect("JOIN_PATTERN is a valid regex"))
}

/// Mapping from lowercased identifier (alias or table name) to canonical
/// table name, plus the table named by the query's first FROM clause.
#[derive(Debug, Default)]
pub struct AliasMap {
    entries: HashMap<String, String>,
    from_table: Option<String>,
}

impl AliasMap {
    /// Scans one query text and registers every FROM/JOIN table with its
    /// alias. A table is always resolvable by its own name. Absence of a
    /// FROM clause yields an empty map, never an error.
    ///
    /// The alias group can capture a trailing keyword (`FROM t WHERE ...`
    /// registers `where -> t`); the stray entry is harmless.
    pub fn build(query: &str) -> Self {
        let mut map = AliasMap::default();

        if let Some(caps) = from_regex().captures(query) {
            let table = caps[1].to_string();
            let alias = caps.get(2).map_or(table.as_str(), |m| m.as_str());
            map.register(alias, &table);
            map.register(&table, &table);
            map.from_table = Some(table);
        }

        for caps in join_regex().captures_iter(query) {
            let table = &caps[1];
            let alias = caps.get(2).map_or(table, |m| m.as_str());
            map.register(alias, table);
            map.register(table, table);
        }

        map
    }

    // Duplicate alias registration: last write in scan order wins.
    fn register(&mut self, alias: &str, table: &str) {
        self.entries.insert(alias.to_lowercase(), table.to_string());
    }

    /// Resolves an alias or table name to its canonical table name.
    /// Unknown identifiers resolve to themselves, so resolution is
    /// idempotent on already-canonical names.
    pub fn resolve(&self, identifier: &str) -> String {
        self.entries
            .get(&identifier.to_lowercase())
            .cloned()
            .unwrap_or_else(|| identifier.to_string())
    }

    /// The table named by the first FROM clause, if any. Used as the
    /// fallback for WHERE columns without a table prefix.
    pub fn from_table(&self) -> Option<&str> {
        self.from_table.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_with_alias() {
        let map = AliasMap::build("SELECT * FROM orders o WHERE o.id = 1");
        assert_eq!(map.resolve("o"), "orders");
        assert_eq!(map.resolve("orders"), "orders");
        assert_eq!(map.from_table(), Some("orders"));
    }

    #[test]
    fn test_from_with_as_keyword() {
        let map = AliasMap::build("SELECT * FROM orders AS o");
        assert_eq!(map.resolve("o"), "orders");
    }

    #[test]
    fn test_join_registration() {
        let map = AliasMap::build("SELECT * FROM orders o LEFT JOIN users u ON o.user_id = u.id");
        assert_eq!(map.resolve("u"), "users");
        assert_eq!(map.resolve("users"), "users");
    }

    #[test]
    fn test_alias_lookup_case_insensitive() {
        let map = AliasMap::build("SELECT * FROM Orders O");
        assert_eq!(map.resolve("o"), "Orders");
        assert_eq!(map.resolve("O"), "Orders");
    }

    #[test]
    fn test_no_from_clause_empty() {
        let map = AliasMap::build("UPDATE x SET y = 1");
        assert!(map.from_table().is_none());
    }

    #[test]
    fn test_unknown_identifier_resolves_to_itself() {
        let map = AliasMap::build("SELECT * FROM orders");
        assert_eq!(map.resolve("mystery"), "mystery");
    }

    #[test]
    fn test_duplicate_alias_last_registration_wins() {
        let map = AliasMap::build("SELECT * FROM orders x JOIN users x ON x.id = x.user_id");
        assert_eq!(map.resolve("x"), "users");
        assert_eq!(map.resolve("orders"), "orders");
        assert_eq!(map.resolve("users"), "users");
    }
}
