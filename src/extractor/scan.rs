//! Pattern-based predicate scanner
//!
//! Recognizes two clause shapes per query text:
//! - `WHERE <ident>[.<ident>] <op>` for every WHERE occurrence
//! - `ON <ident>[.<ident>] = <ident>[.<ident>]` for every ON occurrence
//!
//! Dotted identifiers are alias-resolved; undotted WHERE columns fall back
//! to the first FROM table, undotted ON sides are dropped as ambiguous.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::alias::AliasMap;
use super::{Candidate, CandidateExtractor};

/// `WHERE [alias.]column <op>` with the recognized operator set.
const WHERE_PATTERN: &str = r"(?i)WHERE\s+([a-zA-Z0-9_\.]+)\s*(=|>|<|>=|<=|LIKE|ILIKE|IN)\s*";

/// `ON [alias1.]col1 = [alias2.]col2`
const ON_PATTERN: &str = r"(?i)ON\s+([a-zA-Z0-9_\.]+)\s*=\s*([a-zA-Z0-9_\.]+)";

fn where_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WHERE_PATTERN).expect("WHERE_PATTERN is a valid regex"))
}

fn on_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ON_PATTERN).expect("ON_PATTERN is a valid regex"))
}

/// The production scanner: tagged-pattern rules over raw query text.
#[derive(Debug, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create a pattern extractor
    pub fn new() -> Self {
        Self
    }
}

impl CandidateExtractor for PatternExtractor {
    fn extract(&self, query: &str) -> Vec<Candidate> {
        let aliases = AliasMap::build(query);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        // WHERE clause columns
        for caps in where_regex().captures_iter(query) {
            let col_expr = caps[1].trim();
            if let Some((head, column)) = col_expr.split_once('.') {
                let table = aliases.resolve(head.trim());
                push_unique(
                    &mut seen,
                    &mut candidates,
                    Candidate::new(table, column.trim()),
                );
            } else if let Some(table) = aliases.from_table() {
                // Column without table prefix: attribute to the FROM table.
                // With no FROM clause there is nothing to attribute to.
                push_unique(&mut seen, &mut candidates, Candidate::new(table, col_expr));
            }
        }

        // JOIN ON equality columns, each side independently
        for caps in on_regex().captures_iter(query) {
            for side in [caps[1].trim(), caps[2].trim()] {
                if let Some((head, column)) = side.split_once('.') {
                    let table = aliases.resolve(head.trim());
                    push_unique(
                        &mut seen,
                        &mut candidates,
                        Candidate::new(table, column.trim()),
                    );
                }
                // Undotted ON sides are ambiguous and never guessed.
            }
        }

        candidates
    }
}

// Dedupe while preserving first-seen order.
fn push_unique(seen: &mut HashSet<Candidate>, out: &mut Vec<Candidate>, candidate: Candidate) {
    if seen.insert(candidate.clone()) {
        out.push(candidate);
    }
}
