use super::{Statement, StatementBuilder};
use crate::error::{DbError, DbResult};
use crate::fields::{FieldValues, FieldValuesMap};
use crate::matrix::RowMatrix;
use tracing::trace;

impl StatementBuilder {
    /// Build a single-row INSERT.
    ///
    /// Arguments follow column emission order. Fails with
    /// [`DbError::NoInsertFields`] when `fields` is empty.
    pub fn insert(&self, table: &str, fields: &FieldValues) -> DbResult<Statement> {
        if fields.is_empty() {
            return Err(DbError::NoInsertFields);
        }
        let mut columns = Vec::with_capacity(fields.len());
        let mut args = Vec::with_capacity(fields.len());
        for (column, value) in fields.iter() {
            columns.push(column);
            args.push(value.clone());
        }
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(","),
            self.placeholders(0, args.len())
        );
        Ok(Statement::new(sql, args))
    }

    /// Build a multi-row INSERT from column-oriented input.
    ///
    /// Each column's sequence becomes one matrix row; the transposed matrix
    /// yields one tuple per inserted row, and arguments are emitted
    /// row-major.
    ///
    /// Errors:
    /// - [`DbError::NoInsertFields`] when there are no columns
    /// - [`DbError::RowLengthMismatch`] when sequences differ in length
    /// - [`DbError::NoInsertRows`] when every sequence is empty
    pub fn insert_many(&self, table: &str, columns: FieldValuesMap) -> DbResult<Statement> {
        if columns.is_empty() {
            return Err(DbError::NoInsertFields);
        }
        let mut names = Vec::with_capacity(columns.len());
        let mut by_column = RowMatrix::new();
        for (name, values) in columns {
            by_column.add_row(values)?;
            names.push(name);
        }
        if by_column.num_cols() == 0 {
            return Err(DbError::NoInsertRows);
        }

        let rows = by_column.into_transposed();
        let width = rows.num_cols();
        let tuples: Vec<String> = (0..rows.num_rows())
            .map(|i| format!("({})", self.placeholders(i * width, width)))
            .collect();
        trace!(table, rows = tuples.len(), columns = width, "built multi-row insert");

        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            names.join(","),
            tuples.join(",")
        );
        Ok(Statement::new(sql, rows.into_values()))
    }
}
