use super::registry::EventRegistry;
use super::sql::{SqlEvent, StatementKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A [`SqlEvent`] subscriber that counts statements.
#[derive(Debug, Default)]
pub struct SqlStats {
    total: AtomicU64,
    failed: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    selects: AtomicU64,
    rows_affected: AtomicU64,
}

/// Point-in-time copy of [`SqlStats`] counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlStatsSnapshot {
    /// Total number of statements observed.
    pub total: u64,
    /// Statements whose execution failed.
    pub failed: u64,
    /// INSERT statements (single and multi-row).
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,
    pub selects: u64,
    /// Sum of rows affected by successful mutations (saturating).
    pub rows_affected: u64,
}

impl SqlStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe these counters to `registry`.
    pub fn install(self: Arc<Self>, registry: &EventRegistry) {
        registry.subscribe(move |event: &SqlEvent| self.record(event));
    }

    /// Record one statement.
    pub fn record(&self, event: &SqlEvent) {
        self.total.fetch_add(1, Ordering::Relaxed);
        let counter = match event.kind {
            StatementKind::Insert | StatementKind::InsertMany => &self.inserts,
            StatementKind::Update => &self.updates,
            StatementKind::Delete => &self.deletes,
            StatementKind::Select => &self.selects,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        if event.is_error() {
            self.failed.fetch_add(1, Ordering::Relaxed);
        } else if let Some(result) = event.result {
            // The closure never returns None, so the update always succeeds.
            let _ = self
                .rows_affected
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                    Some(n.saturating_add(result.rows_affected))
                });
        }
    }

    /// Get a snapshot of current counters.
    pub fn snapshot(&self) -> SqlStatsSnapshot {
        SqlStatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            selects: self.selects.load(Ordering::Relaxed),
            rows_affected: self.rows_affected.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        for counter in [
            &self.total,
            &self.failed,
            &self.inserts,
            &self.updates,
            &self.deletes,
            &self.selects,
            &self.rows_affected,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
