//! Convenient imports for typical `dbutils` usage.
//!
//! ```ignore
//! use dbutils::prelude::*;
//! ```

pub use crate::{
    BuildOptions, DbError, DbResult, Dialect, EventRegistry, FieldValues, FieldValuesMap, Limit,
    Predicate, PredicateSet, Record, SqlEvent, SqlLogger, Statement, Table, Value,
};
pub use crate::{build_delete, build_insert, build_insert_many, build_select, build_update};
