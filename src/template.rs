use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dialect::Dialect;
use crate::errors::StoreError;

/// Matches ordinal placeholders (`$1`, `$2`, ...) in canonical SQL.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+)").expect("placeholder pattern is valid"));

/// A canonical parameterized SQL statement plus its declared parameter arity.
///
/// Templates are written once, with ordinal `$n` placeholders, and rendered
/// per dialect at registry construction. Parameter values are always bound
/// by the executor, never interpolated into the text.
#[derive(Debug, Clone, Copy)]
pub struct QueryTemplate {
    sql: &'static str,
    arity: usize,
}

impl QueryTemplate {
    pub const fn new(sql: &'static str, arity: usize) -> Self {
        Self { sql, arity }
    }

    /// The canonical (ordinal-placeholder) SQL text.
    pub fn canonical(&self) -> &'static str {
        self.sql
    }

    /// Number of bound parameters the statement expects, in order.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Render dialect-correct SQL text for this template.
    ///
    /// Fails when the placeholders in the canonical text are not exactly
    /// `$1..$arity`; `key` names the statement in the error. Callers render
    /// every template once at startup, so a mismatch surfaces immediately
    /// rather than on first use.
    pub fn render(&self, key: &str, dialect: Dialect) -> Result<Query, StoreError> {
        let ordinals: BTreeSet<usize> = PLACEHOLDER
            .captures_iter(self.sql)
            .filter_map(|cap| cap[1].parse().ok())
            .collect();

        let highest = ordinals.iter().next_back().copied().unwrap_or(0);
        if highest != self.arity || ordinals.len() != self.arity || ordinals.contains(&0) {
            let found = if highest == self.arity {
                ordinals.len()
            } else {
                highest
            };
            return Err(StoreError::PlaceholderMismatch {
                key: key.to_string(),
                expected: self.arity,
                found,
            });
        }

        let sql = match dialect {
            Dialect::Postgres => self.sql.to_string(),
            Dialect::Sqlite => PLACEHOLDER.replace_all(self.sql, "?").into_owned(),
        };

        Ok(Query {
            sql,
            arity: self.arity,
        })
    }
}

/// A dialect-rendered statement, ready to hand to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    sql: String,
    arity: usize,
}

impl Query {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}
