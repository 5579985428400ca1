use super::{Statement, StatementBuilder};
use crate::clause::PredicateSet;
use crate::limit::Limit;

impl StatementBuilder {
    /// Build a SELECT.
    ///
    /// An empty `field_names` selects `*`; an unbounded `limit` omits the
    /// LIMIT clause.
    pub fn select(
        &self,
        table: &str,
        filter: &PredicateSet,
        field_names: &[&str],
        limit: Limit,
    ) -> Statement {
        let fields = if field_names.is_empty() {
            "*".to_string()
        } else {
            field_names.join(",")
        };

        let mut args = Vec::new();
        let mut sql = format!("SELECT {fields} FROM {table}");
        if let Some(block) = filter.build_where_block_with(&mut args, &self.options) {
            sql.push(' ');
            sql.push_str(&block);
        }
        if let Some(clause) = limit.to_clause(self.options.dialect) {
            sql.push(' ');
            sql.push_str(&clause);
        }
        Statement::new(sql, args)
    }
}
