//! Synchronous event notification.
//!
//! This module provides:
//! - [`EventRegistry`]: per-event-type subscriber lists with synchronous fan-out
//! - [`SqlEvent`]: published by [`crate::Table`] after every executed statement
//! - [`SqlLogger`] and [`SqlStats`]: ready-made `SqlEvent` subscribers
//!
//! # Example
//!
//! ```rust,ignore
//! use dbutils::event::{EventRegistry, SqlEvent, SqlLogger};
//!
//! let registry = EventRegistry::new();
//! SqlLogger::new().install(&registry);
//! registry.subscribe(|event: &SqlEvent| {
//!     if let Some(err) = &event.error {
//!         eprintln!("{} failed: {err}", event.sql);
//!     }
//! });
//! ```

mod logger;
mod registry;
mod sql;
mod stats;


pub use logger::SqlLogger;
pub use registry::{Event, EventRegistry};
pub use sql::{SqlEvent, StatementKind};
pub use stats::{SqlStats, SqlStatsSnapshot};
