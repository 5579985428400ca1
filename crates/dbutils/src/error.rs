//! Error types for dbutils

use thiserror::Error;

/// Result type alias for dbutils operations
pub type DbResult<T> = Result<T, DbError>;

/// Error types for statement building and execution
#[derive(Debug, Error)]
pub enum DbError {
    /// INSERT requested with an empty field set
    #[error("no insert fields")]
    NoInsertFields,

    /// Multi-row INSERT requested with columns but no rows
    #[error("no insert rows")]
    NoInsertRows,

    /// UPDATE requested with an empty field set
    #[error("no update fields")]
    NoUpdateFields,

    /// A row whose length differs from the matrix column count
    #[error("row length mismatch: expected {expected} values, got {got}")]
    RowLengthMismatch { expected: usize, got: usize },

    /// Column missing from a result record
    #[error("no field {0}")]
    UnknownField(String),

    /// Column present but not convertible to the requested type
    #[error("field '{field}' is not a valid {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// Error raised by the underlying database driver, passed through unchanged
    #[error("Driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DbError {
    /// Create an invalid type error for a specific field
    pub fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }

    /// Wrap a driver error
    pub fn driver<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Driver(err.into())
    }

    /// Check if this is a missing INSERT fields error
    pub fn is_no_insert_fields(&self) -> bool {
        matches!(self, Self::NoInsertFields)
    }

    /// Check if this is a missing UPDATE fields error
    pub fn is_no_update_fields(&self) -> bool {
        matches!(self, Self::NoUpdateFields)
    }

    /// Check if this is a row length mismatch error
    pub fn is_row_length_mismatch(&self) -> bool {
        matches!(self, Self::RowLengthMismatch { .. })
    }

    /// Check if this is an unknown field error
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField(_))
    }

    /// Check if this error came from the database driver
    pub fn is_driver(&self) -> bool {
        matches!(self, Self::Driver(_))
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for DbError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Driver(Box::new(err))
    }
}
