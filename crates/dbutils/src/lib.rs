//! # dbutils
//!
//! Parameterized SQL statement building plus a synchronous event registry
//! for observing executed statements.
//!
//! ## Features
//!
//! - **Predicates**: `=`, `!=`, `>`, `>=`, `<`, `<=`, `IN`, `NOT IN`,
//!   `IS [NOT] NULL`, `[NOT] BETWEEN`, `[NOT] LIKE` bound to typed [`Value`]s
//! - **Statement builders**: INSERT, multi-row INSERT, UPDATE, DELETE and
//!   SELECT as `(sql, args)` pairs with `?` placeholders (or `$n` with
//!   [`Dialect::Postgres`])
//! - **Event registry**: typed subscribers, synchronous in-order fan-out,
//!   safe to share across threads
//! - **Table facade**: thin CRUD helpers that publish a [`SqlEvent`] for
//!   every statement they run
//!
//! ## Statement builders
//!
//! ```ignore
//! use dbutils::{FieldValuesMap, Limit, Predicate, PredicateSet, build_insert_many, build_select};
//!
//! let stmt = build_insert_many(
//!     "t",
//!     FieldValuesMap::new().with("a", [1, 2]).with("b", ["x", "y"]),
//! )?;
//! assert_eq!(stmt.sql, "INSERT INTO t (a,b) VALUES (?,?),(?,?)");
//!
//! let stmt = build_select(
//!     "users",
//!     &PredicateSet::new().with("age", Predicate::gte(18)),
//!     &["id", "name"],
//!     Limit::range(20, 10),
//! );
//! assert_eq!(stmt.sql, "SELECT id,name FROM users WHERE age >= ? LIMIT 20,10");
//! ```

pub mod builder;
pub mod clause;
pub mod error;
pub mod event;
pub mod fields;
pub mod limit;
pub mod matrix;
pub mod options;
pub mod predicate;
pub mod record;
pub mod table;
pub mod value;

#[cfg(feature = "postgres")]
pub mod pg;

pub mod prelude;

pub use builder::{
    Statement, StatementBuilder, build_delete, build_insert, build_insert_many, build_select,
    build_update,
};
pub use clause::PredicateSet;
pub use error::{DbError, DbResult};
pub use event::{
    Event, EventRegistry, SqlEvent, SqlLogger, SqlStats, SqlStatsSnapshot, StatementKind,
};
pub use fields::{FieldValues, FieldValuesMap};
pub use limit::Limit;
pub use matrix::RowMatrix;
pub use options::{BuildOptions, Dialect, EmptyListPolicy};
pub use predicate::Predicate;
pub use record::Record;
pub use table::{ExecResult, Executor, Table};
pub use value::Value;
