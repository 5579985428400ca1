//! Rectangular value grid used to turn column-oriented input into rows.

use crate::error::{DbError, DbResult};
use crate::value::Value;

/// A rectangular matrix of [`Value`]s.
///
/// Every row has the same length. The check happens when a row is added, so
/// [`RowMatrix::transpose`] never has to deal with ragged input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMatrix {
    rows: Vec<Vec<Value>>,
    num_cols: usize,
}

impl RowMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from rows, rejecting ragged input.
    pub fn from_rows<I>(rows: I) -> DbResult<Self>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        let mut matrix = Self::new();
        for row in rows {
            matrix.add_row(row)?;
        }
        Ok(matrix)
    }

    /// Append a row.
    ///
    /// The first row of an empty matrix fixes the column count; later rows
    /// must match it.
    pub fn add_row(&mut self, row: Vec<Value>) -> DbResult<()> {
        if !self.rows.is_empty() && row.len() != self.num_cols {
            return Err(DbError::RowLengthMismatch {
                expected: self.num_cols,
                got: row.len(),
            });
        }
        self.num_cols = row.len();
        self.rows.push(row);
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Total number of elements (rows * columns).
    pub fn num_elems(&self) -> usize {
        self.rows.len() * self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Build a new matrix with rows and columns exchanged.
    pub fn transpose(&self) -> RowMatrix {
        let rows = (0..self.num_cols)
            .map(|col| self.rows.iter().map(|row| row[col].clone()).collect())
            .collect();
        RowMatrix {
            rows,
            num_cols: self.rows.len(),
        }
    }

    /// Consuming variant of [`RowMatrix::transpose`] that moves every value.
    pub fn into_transposed(self) -> RowMatrix {
        let num_rows = self.rows.len();
        let mut out: Vec<Vec<Value>> = (0..self.num_cols)
            .map(|_| Vec::with_capacity(num_rows))
            .collect();
        for row in self.rows {
            for (col, value) in row.into_iter().enumerate() {
                out[col].push(value);
            }
        }
        RowMatrix {
            rows: out,
            num_cols: num_rows,
        }
    }

    /// Flatten the matrix into a row-major value list.
    pub fn into_values(self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.num_elems());
        for row in self.rows {
            values.extend(row);
        }
        values
    }
}
