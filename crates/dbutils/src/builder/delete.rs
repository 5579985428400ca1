use super::{Statement, StatementBuilder};
use crate::clause::PredicateSet;

impl StatementBuilder {
    /// Build a DELETE. An empty `filter` deletes every row.
    pub fn delete(&self, table: &str, filter: &PredicateSet) -> Statement {
        let mut args = Vec::new();
        let mut sql = format!("DELETE FROM {table}");
        if let Some(block) = filter.build_where_block_with(&mut args, &self.options) {
            sql.push(' ');
            sql.push_str(&block);
        }
        Statement::new(sql, args)
    }
}
