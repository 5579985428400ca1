use super::registry::Event;
use crate::error::DbError;
use crate::table::ExecResult;
use crate::value::Value;
use std::fmt;

/// The kind of statement that produced a [`SqlEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Insert,
    InsertMany,
    Update,
    Delete,
    Select,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Insert => "insert",
            StatementKind::InsertMany => "insert_many",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Select => "select",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published once for every statement a [`crate::Table`] executes.
///
/// `error` holds the driver error exactly as the executor returned it.
#[derive(Debug)]
pub struct SqlEvent {
    /// Statement kind.
    pub kind: StatementKind,
    /// Target table.
    pub table: String,
    /// Executed SQL text.
    pub sql: String,
    /// Bound arguments, in placeholder order.
    pub args: Vec<Value>,
    /// Execution result for mutations that succeeded.
    pub result: Option<ExecResult>,
    /// Execution error, if any.
    pub error: Option<DbError>,
}

impl SqlEvent {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Event for SqlEvent {
    type Output = ();
}
