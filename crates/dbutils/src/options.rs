/// SQL dialect used when rendering placeholders and LIMIT clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// `?` placeholders, `LIMIT offset,count`.
    #[default]
    MySql,
    /// `$1, $2, ...` placeholders, `LIMIT count OFFSET offset`.
    Postgres,
}

/// What to emit for `IN` / `NOT IN` over an empty value list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// `field IN ()` / `field NOT IN ()`. Some dialects reject this.
    #[default]
    EmptyGroup,
    /// `1=0` for `IN`, `1=1` for `NOT IN`.
    Constant,
}

/// Configuration for statement building.
///
/// The default renders MySQL-style SQL and keeps empty `IN` groups as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Placeholder and LIMIT syntax.
    pub dialect: Dialect,
    /// Rendering of empty `IN` / `NOT IN` lists.
    pub empty_list: EmptyListPolicy,
}

impl BuildOptions {
    /// Create options with defaults (MySQL dialect, empty groups).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the empty `IN` list policy.
    pub fn with_empty_list(mut self, policy: EmptyListPolicy) -> Self {
        self.empty_list = policy;
        self
    }

    /// Render the placeholder for the next argument.
    ///
    /// `position` is the number of arguments already collected.
    pub(crate) fn placeholder(&self, position: usize) -> String {
        match self.dialect {
            Dialect::MySql => "?".to_string(),
            Dialect::Postgres => format!("${}", position + 1),
        }
    }
}
