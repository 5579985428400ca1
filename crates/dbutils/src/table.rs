//! Thin per-table facade over the statement builders.
//!
//! Every executed statement is published as a [`SqlEvent`] on the table's
//! [`EventRegistry`], whether it succeeded or not.

use crate::builder::{Statement, StatementBuilder};
use crate::clause::PredicateSet;
use crate::error::DbResult;
use crate::event::{EventRegistry, SqlEvent, StatementKind};
use crate::fields::{FieldValues, FieldValuesMap};
use crate::limit::Limit;
use crate::options::BuildOptions;
use crate::record::Record;
use crate::value::Value;
use tracing::debug;

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows inserted, updated or deleted.
    pub rows_affected: u64,
    /// Last generated id, when the driver reports one.
    pub last_insert_id: Option<i64>,
}

/// A database handle (connection or transaction) that runs built statements.
///
/// Implementations convert [`Value`] arguments into the driver's parameter
/// types and return driver failures wrapped in
/// [`DbError::Driver`](crate::DbError::Driver).
pub trait Executor: Send + Sync {
    /// Execute a mutating statement.
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl std::future::Future<Output = DbResult<ExecResult>> + Send;

    /// Execute a query and return all rows.
    fn query(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl std::future::Future<Output = DbResult<Vec<Record>>> + Send;
}

/// CRUD helper for one table.
///
/// # Example
/// ```ignore
/// let registry = EventRegistry::new();
/// SqlLogger::new().install(&registry);
///
/// let users = Table::new(&client, "users", &registry)
///     .with_options(BuildOptions::new().with_dialect(Dialect::Postgres));
/// users.insert(&FieldValues::new().with("name", "alice")).await?;
/// let adults = users
///     .query(&["id", "name"], &PredicateSet::new().with("age", Predicate::gte(18)))
///     .await?;
/// ```
pub struct Table<'a, E: Executor> {
    executor: &'a E,
    name: String,
    registry: &'a EventRegistry,
    builder: StatementBuilder,
}

impl<'a, E: Executor> Table<'a, E> {
    pub fn new(executor: &'a E, name: impl Into<String>, registry: &'a EventRegistry) -> Self {
        Self {
            executor,
            name: name.into(),
            registry,
            builder: StatementBuilder::default(),
        }
    }

    /// Use custom build options (dialect, empty list policy).
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.builder = StatementBuilder::new(options);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert one row and return the generated id, if any.
    pub async fn insert(&self, fields: &FieldValues) -> DbResult<Option<i64>> {
        let stmt = self.builder.insert(&self.name, fields)?;
        let result = self.exec(StatementKind::Insert, stmt).await?;
        Ok(result.last_insert_id)
    }

    /// Insert several rows from column sequences and return the last generated id, if any.
    pub async fn insert_many(&self, columns: FieldValuesMap) -> DbResult<Option<i64>> {
        let stmt = self.builder.insert_many(&self.name, columns)?;
        let result = self.exec(StatementKind::InsertMany, stmt).await?;
        Ok(result.last_insert_id)
    }

    /// Update rows matching `filter` and return the affected count.
    pub async fn update(&self, fields: &FieldValues, filter: &PredicateSet) -> DbResult<u64> {
        let stmt = self.builder.update(&self.name, fields, filter)?;
        let result = self.exec(StatementKind::Update, stmt).await?;
        Ok(result.rows_affected)
    }

    /// Delete rows matching `filter` and return the affected count.
    ///
    /// An empty filter deletes every row.
    pub async fn delete(&self, filter: &PredicateSet) -> DbResult<u64> {
        let stmt = self.builder.delete(&self.name, filter);
        let result = self.exec(StatementKind::Delete, stmt).await?;
        Ok(result.rows_affected)
    }

    /// Fetch the first row matching `filter`. Empty `field_names` selects `*`.
    pub async fn get(
        &self,
        field_names: &[&str],
        filter: &PredicateSet,
    ) -> DbResult<Option<Record>> {
        let stmt = self
            .builder
            .select(&self.name, filter, field_names, Limit::range(0, 1));
        let records = self.fetch(stmt).await?;
        Ok(records.into_iter().next())
    }

    /// Fetch every row matching `filter`. Empty `field_names` selects `*`.
    pub async fn query(
        &self,
        field_names: &[&str],
        filter: &PredicateSet,
    ) -> DbResult<Vec<Record>> {
        let stmt = self
            .builder
            .select(&self.name, filter, field_names, Limit::none());
        self.fetch(stmt).await
    }

    async fn exec(&self, kind: StatementKind, stmt: Statement) -> DbResult<ExecResult> {
        let (result, error) = match self.executor.execute(&stmt.sql, &stmt.args).await {
            Ok(result) => (Some(result), None),
            Err(err) => {
                debug!(table = %self.name, %kind, error = %err, "statement failed");
                (None, Some(err))
            }
        };
        let event = self.publish(kind, stmt, result, error);
        match event.error {
            Some(err) => Err(err),
            None => Ok(event.result.unwrap_or_default()),
        }
    }

    async fn fetch(&self, stmt: Statement) -> DbResult<Vec<Record>> {
        let (records, error) = match self.executor.query(&stmt.sql, &stmt.args).await {
            Ok(records) => (records, None),
            Err(err) => {
                debug!(
                    table = %self.name,
                    kind = %StatementKind::Select,
                    error = %err,
                    "query failed"
                );
                (Vec::new(), Some(err))
            }
        };
        let event = self.publish(StatementKind::Select, stmt, None, error);
        match event.error {
            Some(err) => Err(err),
            None => Ok(records),
        }
    }

    /// Notify subscribers and hand the event back so the caller can reclaim the error.
    fn publish(
        &self,
        kind: StatementKind,
        stmt: Statement,
        result: Option<ExecResult>,
        error: Option<crate::DbError>,
    ) -> SqlEvent {
        let (sql, args) = stmt.into_parts();
        let event = SqlEvent {
            kind,
            table: self.name.clone(),
            sql,
            args,
            result,
            error,
        };
        self.registry.notify_all(&event);
        event
    }
}
