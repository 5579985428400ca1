use crate::options::Dialect;

/// Optional pagination for SELECT statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Limit {
    /// No LIMIT clause.
    #[default]
    Unbounded,
    /// At most `count` rows from the start.
    Count(u64),
    /// At most `count` rows after skipping `offset`.
    Range { offset: u64, count: u64 },
}

impl Limit {
    /// No limit.
    pub fn none() -> Self {
        Limit::Unbounded
    }

    /// Limit to `count` rows, starting at offset 0.
    pub fn count(count: u64) -> Self {
        Limit::Count(count)
    }

    /// Limit to `count` rows, starting at `offset`.
    pub fn range(offset: u64, count: u64) -> Self {
        Limit::Range { offset, count }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Limit::Unbounded)
    }

    /// First row offset, `None` when unbounded.
    pub fn begin(&self) -> Option<u64> {
        match *self {
            Limit::Unbounded => None,
            Limit::Count(_) => Some(0),
            Limit::Range { offset, .. } => Some(offset),
        }
    }

    /// Maximum number of rows, `None` when unbounded.
    pub fn max_num(&self) -> Option<u64> {
        match *self {
            Limit::Unbounded => None,
            Limit::Count(count) | Limit::Range { count, .. } => Some(count),
        }
    }

    pub(crate) fn to_clause(self, dialect: Dialect) -> Option<String> {
        let (offset, count) = (self.begin()?, self.max_num()?);
        Some(match dialect {
            Dialect::MySql => format!("LIMIT {offset},{count}"),
            Dialect::Postgres => format!("LIMIT {count} OFFSET {offset}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(Limit::default().is_empty());
        assert_eq!(Limit::none().begin(), None);
        assert_eq!(Limit::none().max_num(), None);

        let l = Limit::count(5);
        assert!(!l.is_empty());
        assert_eq!(l.begin(), Some(0));
        assert_eq!(l.max_num(), Some(5));

        let l = Limit::range(2, 5);
        assert_eq!(l.begin(), Some(2));
        assert_eq!(l.max_num(), Some(5));
    }

    #[test]
    fn test_clause() {
        assert_eq!(Limit::none().to_clause(Dialect::MySql), None);
        assert_eq!(
            Limit::count(5).to_clause(Dialect::MySql).as_deref(),
            Some("LIMIT 0,5")
        );
        assert_eq!(
            Limit::range(2, 5).to_clause(Dialect::Postgres).as_deref(),
            Some("LIMIT 5 OFFSET 2")
        );
    }
}
