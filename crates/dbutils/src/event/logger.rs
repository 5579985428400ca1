use super::registry::EventRegistry;
use super::sql::SqlEvent;
use std::borrow::Cow;
use tracing::Level;

/// Writes every [`SqlEvent`] to `tracing` under the `dbutils.sql` target.
///
/// Successful statements go out at the configured level (`DEBUG` by
/// default); failures always go out at `WARN`.
///
/// ```ignore
/// SqlLogger::new()
///     .with_level(Level::INFO)
///     .with_max_sql_bytes(None)
///     .install(&registry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlLogger {
    level: Level,
    max_sql_bytes: Option<usize>,
}

impl Default for SqlLogger {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_bytes: Some(200),
        }
    }
}

impl SqlLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level used for successful statements.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Cap the logged SQL at `max` bytes. `None` logs it in full.
    pub fn with_max_sql_bytes(mut self, max: Option<usize>) -> Self {
        self.max_sql_bytes = max;
        self
    }

    /// Subscribe this logger to `registry`.
    pub fn install(self, registry: &EventRegistry) {
        registry.subscribe(move |event: &SqlEvent| self.log(event));
    }

    /// SQL as it appears in the log: cut at a char boundary at or below
    /// the byte cap, with `...` appended when anything was dropped.
    pub(crate) fn display_sql<'s>(&self, sql: &'s str) -> Cow<'s, str> {
        let Some(max) = self.max_sql_bytes.filter(|&max| sql.len() > max) else {
            return Cow::Borrowed(sql);
        };
        let end = (0..=max)
            .rev()
            .find(|&i| sql.is_char_boundary(i))
            .unwrap_or(0);
        Cow::Owned(format!("{}...", &sql[..end]))
    }

    pub fn log(&self, event: &SqlEvent) {
        let sql = self.display_sql(&event.sql);
        let arg_count = event.args.len();

        if let Some(err) = &event.error {
            tracing::warn!(
                target: "dbutils.sql",
                kind = %event.kind,
                table = %event.table,
                arg_count,
                sql = %sql,
                error = %err,
                "statement failed"
            );
            return;
        }

        let rows_affected = event.result.map(|r| r.rows_affected);
        // `event!` needs a constant level, so each arm gets its own callsite.
        macro_rules! executed {
            ($level:expr) => {
                tracing::event!(
                    target: "dbutils.sql",
                    $level,
                    kind = %event.kind,
                    table = %event.table,
                    arg_count,
                    sql = %sql,
                    rows_affected = ?rows_affected,
                    "statement executed"
                )
            };
        }
        match self.level {
            Level::ERROR => executed!(Level::ERROR),
            Level::WARN => executed!(Level::WARN),
            Level::INFO => executed!(Level::INFO),
            Level::DEBUG => executed!(Level::DEBUG),
            _ => executed!(Level::TRACE),
        }
    }
}
