use super::{Statement, StatementBuilder};
use crate::clause::PredicateSet;
use crate::error::{DbError, DbResult};
use crate::fields::FieldValues;

impl StatementBuilder {
    /// Build an UPDATE.
    ///
    /// Arguments are the field values (column order) followed by the
    /// predicate arguments. Fails with [`DbError::NoUpdateFields`] when
    /// `fields` is empty.
    pub fn update(
        &self,
        table: &str,
        fields: &FieldValues,
        filter: &PredicateSet,
    ) -> DbResult<Statement> {
        if fields.is_empty() {
            return Err(DbError::NoUpdateFields);
        }
        let mut args = Vec::with_capacity(fields.len());
        let mut assignments = Vec::with_capacity(fields.len());
        for (column, value) in fields.iter() {
            assignments.push(format!("{}={}", column, self.options.placeholder(args.len())));
            args.push(value.clone());
        }

        let mut sql = format!("UPDATE {} SET {}", table, assignments.join(","));
        if let Some(block) = filter.build_where_block_with(&mut args, &self.options) {
            sql.push(' ');
            sql.push_str(&block);
        }
        Ok(Statement::new(sql, args))
    }
}
