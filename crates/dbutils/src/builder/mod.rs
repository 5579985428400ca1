//! Statement builders.
//!
//! Pure functions turning value sets and predicate sets into SQL text plus an
//! ordered argument list. Nothing here touches a database or shared state.
//!
//! ## Design
//!
//! - One placeholder per argument; argument order equals placeholder order.
//! - INSERT and UPDATE require at least one field.
//! - DELETE with an empty predicate set removes every row. That is the
//!   caller's decision, not an error.
//!
//! ```ignore
//! use dbutils::{FieldValues, Predicate, PredicateSet, build_update};
//!
//! let stmt = build_update(
//!     "t",
//!     &FieldValues::new().with("name", "x"),
//!     &PredicateSet::new().with("id", Predicate::eq(5)),
//! )?;
//! assert_eq!(stmt.sql, "UPDATE t SET name=? WHERE id = ?");
//! ```

mod delete;
mod insert;
mod select;
mod update;

use crate::clause::PredicateSet;
use crate::error::DbResult;
use crate::fields::{FieldValues, FieldValuesMap};
use crate::limit::Limit;
use crate::options::BuildOptions;
use crate::value::Value;

/// Built SQL text with its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// SQL text with placeholders.
    pub sql: String,
    /// Arguments in placeholder order.
    pub args: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// Statement builder bound to a set of [`BuildOptions`].
///
/// The free functions ([`build_insert`], [`build_select`], ...) use the
/// default options.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    options: BuildOptions,
}

impl StatementBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Render `count` placeholders numbered after `start` arguments, comma separated.
    fn placeholders(&self, start: usize, count: usize) -> String {
        (start..start + count)
            .map(|pos| self.options.placeholder(pos))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Build `INSERT INTO table (c1,...) VALUES (?,...)`.
pub fn build_insert(table: &str, fields: &FieldValues) -> DbResult<Statement> {
    StatementBuilder::default().insert(table, fields)
}

/// Build `INSERT INTO table (c1,...) VALUES (?,...),(?,...)` from column sequences.
pub fn build_insert_many(table: &str, columns: FieldValuesMap) -> DbResult<Statement> {
    StatementBuilder::default().insert_many(table, columns)
}

/// Build `UPDATE table SET c1=?,... [WHERE ...]`.
pub fn build_update(
    table: &str,
    fields: &FieldValues,
    filter: &PredicateSet,
) -> DbResult<Statement> {
    StatementBuilder::default().update(table, fields, filter)
}

/// Build `DELETE FROM table [WHERE ...]`.
pub fn build_delete(table: &str, filter: &PredicateSet) -> Statement {
    StatementBuilder::default().delete(table, filter)
}

/// Build `SELECT f1,... FROM table [WHERE ...] [LIMIT offset,count]`.
pub fn build_select(
    table: &str,
    filter: &PredicateSet,
    field_names: &[&str],
    limit: Limit,
) -> Statement {
    StatementBuilder::default().select(table, filter, field_names, limit)
}
