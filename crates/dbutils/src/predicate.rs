//! Predicate expressions for WHERE clauses.
//!
//! A [`Predicate`] is an operator bound to its operand values. Evaluating it
//! against a field name yields a SQL fragment and appends exactly
//! [`Predicate::arity`] values to the argument list, in placeholder order.
//!
//! # Example
//! ```ignore
//! use dbutils::Predicate;
//!
//! let mut args = Vec::new();
//! let sql = Predicate::between(18, 30).evaluate("age", &mut args);
//! assert_eq!(sql, "age BETWEEN ? AND ?");
//! assert_eq!(args.len(), 2);
//! ```

use crate::options::{BuildOptions, EmptyListPolicy};
use crate::value::Value;

/// Comparison, membership, range or pattern operator with its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// field = value
    Equal(Value),
    /// field != value
    NotEqual(Value),
    /// field > value
    GreaterThan(Value),
    /// field >= value
    GreaterOrEqual(Value),
    /// field < value
    LessThan(Value),
    /// field <= value
    LessOrEqual(Value),
    /// field IN (values...)
    In(Vec<Value>),
    /// field NOT IN (values...)
    NotIn(Vec<Value>),
    /// field IS NULL
    IsNull,
    /// field IS NOT NULL
    NotNull,
    /// field BETWEEN begin AND end
    Between(Value, Value),
    /// field NOT BETWEEN begin AND end
    NotBetween(Value, Value),
    /// field LIKE `%value%`
    ///
    /// Holds the raw value; the `%` wildcards are added when evaluated.
    Like(String),
    /// field NOT LIKE `%value%`
    NotLike(String),
}

impl Predicate {
    // ==================== Constructors ====================

    /// Create an equality predicate.
    pub fn eq(value: impl Into<Value>) -> Self {
        Predicate::Equal(value.into())
    }

    /// Create a not-equal predicate.
    pub fn ne(value: impl Into<Value>) -> Self {
        Predicate::NotEqual(value.into())
    }

    /// Create a greater-than predicate.
    pub fn gt(value: impl Into<Value>) -> Self {
        Predicate::GreaterThan(value.into())
    }

    /// Create a greater-than-or-equal predicate.
    pub fn gte(value: impl Into<Value>) -> Self {
        Predicate::GreaterOrEqual(value.into())
    }

    /// Create a less-than predicate.
    pub fn lt(value: impl Into<Value>) -> Self {
        Predicate::LessThan(value.into())
    }

    /// Create a less-than-or-equal predicate.
    pub fn lte(value: impl Into<Value>) -> Self {
        Predicate::LessOrEqual(value.into())
    }

    /// Create an IN (list) predicate. Placeholders follow input order.
    pub fn in_list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::In(values.into_iter().map(Into::into).collect())
    }

    /// Create a NOT IN (list) predicate. Placeholders follow input order.
    pub fn not_in<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::NotIn(values.into_iter().map(Into::into).collect())
    }

    /// Create an IS NULL predicate.
    pub fn is_null() -> Self {
        Predicate::IsNull
    }

    /// Create an IS NOT NULL predicate.
    pub fn not_null() -> Self {
        Predicate::NotNull
    }

    /// Create a BETWEEN predicate.
    pub fn between(begin: impl Into<Value>, end: impl Into<Value>) -> Self {
        Predicate::Between(begin.into(), end.into())
    }

    /// Create a NOT BETWEEN predicate.
    pub fn not_between(begin: impl Into<Value>, end: impl Into<Value>) -> Self {
        Predicate::NotBetween(begin.into(), end.into())
    }

    /// Create a LIKE predicate matching `value` anywhere: `%value%`.
    pub fn like(value: impl AsRef<str>) -> Self {
        Predicate::Like(value.as_ref().to_string())
    }

    /// Create a NOT LIKE predicate excluding `value` anywhere: `%value%`.
    pub fn not_like(value: impl AsRef<str>) -> Self {
        Predicate::NotLike(value.as_ref().to_string())
    }

    // ==================== Inspection ====================

    /// SQL operator keyword(s).
    pub fn operator(&self) -> &'static str {
        match self {
            Predicate::Equal(_) => "=",
            Predicate::NotEqual(_) => "!=",
            Predicate::GreaterThan(_) => ">",
            Predicate::GreaterOrEqual(_) => ">=",
            Predicate::LessThan(_) => "<",
            Predicate::LessOrEqual(_) => "<=",
            Predicate::In(_) => "IN",
            Predicate::NotIn(_) => "NOT IN",
            Predicate::IsNull => "IS NULL",
            Predicate::NotNull => "IS NOT NULL",
            Predicate::Between(..) => "BETWEEN",
            Predicate::NotBetween(..) => "NOT BETWEEN",
            Predicate::Like(_) => "LIKE",
            Predicate::NotLike(_) => "NOT LIKE",
        }
    }

    /// Number of placeholders (and arguments) this predicate contributes.
    pub fn arity(&self) -> usize {
        match self {
            Predicate::In(values) | Predicate::NotIn(values) => values.len(),
            Predicate::IsNull | Predicate::NotNull => 0,
            Predicate::Between(..) | Predicate::NotBetween(..) => 2,
            _ => 1,
        }
    }

    // ==================== Evaluation ====================

    /// Render the fragment for `field` with default options, appending the
    /// operand values to `args`.
    pub fn evaluate(&self, field: &str, args: &mut Vec<Value>) -> String {
        self.evaluate_with(field, args, &BuildOptions::default())
    }

    /// Render the fragment for `field`, appending the operand values to `args`.
    pub fn evaluate_with(&self, field: &str, args: &mut Vec<Value>, opts: &BuildOptions) -> String {
        let op = self.operator();
        match self {
            Predicate::Equal(v)
            | Predicate::NotEqual(v)
            | Predicate::GreaterThan(v)
            | Predicate::GreaterOrEqual(v)
            | Predicate::LessThan(v)
            | Predicate::LessOrEqual(v) => {
                let p = push_arg(args, v.clone(), opts);
                format!("{field} {op} {p}")
            }
            Predicate::Like(value) | Predicate::NotLike(value) => {
                let p = push_arg(args, Value::Text(contains_pattern(value)), opts);
                format!("{field} {op} {p}")
            }
            Predicate::In(values) | Predicate::NotIn(values) => {
                if values.is_empty() && opts.empty_list == EmptyListPolicy::Constant {
                    // Always false / always true
                    let constant = if matches!(self, Predicate::In(_)) { "1=0" } else { "1=1" };
                    return constant.to_string();
                }
                let placeholders: Vec<String> = values
                    .iter()
                    .map(|v| push_arg(args, v.clone(), opts))
                    .collect();
                format!("{field} {op} ({})", placeholders.join(","))
            }
            Predicate::IsNull | Predicate::NotNull => format!("{field} {op}"),
            Predicate::Between(begin, end) | Predicate::NotBetween(begin, end) => {
                let p1 = push_arg(args, begin.clone(), opts);
                let p2 = push_arg(args, end.clone(), opts);
                format!("{field} {op} {p1} AND {p2}")
            }
        }
    }
}

fn push_arg(args: &mut Vec<Value>, value: Value, opts: &BuildOptions) -> String {
    let placeholder = opts.placeholder(args.len());
    args.push(value);
    placeholder
}

fn contains_pattern(value: &str) -> String {
    format!("%{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Dialect;

    fn eval(p: &Predicate) -> (String, Vec<Value>) {
        let mut args = Vec::new();
        let sql = p.evaluate("f", &mut args);
        (sql, args)
    }

    #[test]
    fn test_comparisons() {
        let cases = [
            (Predicate::eq(1), "f = ?"),
            (Predicate::ne(1), "f != ?"),
            (Predicate::gt(1), "f > ?"),
            (Predicate::gte(1), "f >= ?"),
            (Predicate::lt(1), "f < ?"),
            (Predicate::lte(1), "f <= ?"),
        ];
        for (p, expected) in cases {
            let (sql, args) = eval(&p);
            assert_eq!(sql, expected);
            assert_eq!(args, vec![Value::Int(1)]);
        }
    }

    #[test]
    fn test_in_keeps_input_order() {
        let (sql, args) = eval(&Predicate::in_list([3, 1, 2]));
        assert_eq!(sql, "f IN (?,?,?)");
        assert_eq!(args, vec![Value::Int(3), Value::Int(1), Value::Int(2)]);

        let (sql, args) = eval(&Predicate::not_in(["a", "b"]));
        assert_eq!(sql, "f NOT IN (?,?)");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_empty_in_group() {
        let (sql, args) = eval(&Predicate::in_list(Vec::<i64>::new()));
        assert_eq!(sql, "f IN ()");
        assert!(args.is_empty());

        let (sql, args) = eval(&Predicate::not_in(Vec::<i64>::new()));
        assert_eq!(sql, "f NOT IN ()");
        assert!(args.is_empty());
    }

    #[test]
    fn test_empty_in_constant_policy() {
        let opts = BuildOptions::new().with_empty_list(EmptyListPolicy::Constant);
        let mut args = Vec::new();
        assert_eq!(
            Predicate::in_list(Vec::<i64>::new()).evaluate_with("f", &mut args, &opts),
            "1=0"
        );
        assert_eq!(
            Predicate::not_in(Vec::<i64>::new()).evaluate_with("f", &mut args, &opts),
            "1=1"
        );
        assert!(args.is_empty());
        // Non-empty lists are unaffected.
        assert_eq!(
            Predicate::in_list([1]).evaluate_with("f", &mut args, &opts),
            "f IN (?)"
        );
    }

    #[test]
    fn test_null_checks() {
        assert_eq!(eval(&Predicate::is_null()), ("f IS NULL".to_string(), vec![]));
        assert_eq!(eval(&Predicate::not_null()), ("f IS NOT NULL".to_string(), vec![]));
    }

    #[test]
    fn test_between_order() {
        let (sql, args) = eval(&Predicate::between(10, 20));
        assert_eq!(sql, "f BETWEEN ? AND ?");
        assert_eq!(args, vec![Value::Int(10), Value::Int(20)]);

        let (sql, _) = eval(&Predicate::not_between(10, 20));
        assert_eq!(sql, "f NOT BETWEEN ? AND ?");
    }

    #[test]
    fn test_like_wraps_pattern() {
        let (sql, args) = eval(&Predicate::like("py"));
        assert_eq!(sql, "f LIKE ?");
        assert_eq!(args, vec![Value::from("%py%")]);

        let (sql, args) = eval(&Predicate::not_like("py"));
        assert_eq!(sql, "f NOT LIKE ?");
        assert_eq!(args, vec![Value::from("%py%")]);
    }

    #[test]
    fn test_like_variant_matches_constructor() {
        assert_eq!(Predicate::like("py"), Predicate::Like("py".to_string()));
        let (_, args) = eval(&Predicate::NotLike("py".to_string()));
        assert_eq!(args, vec![Value::from("%py%")]);
    }

    #[test]
    fn test_arity_matches_appended_args() {
        let predicates = [
            Predicate::eq(1),
            Predicate::in_list([1, 2, 3, 4]),
            Predicate::not_in(Vec::<i64>::new()),
            Predicate::is_null(),
            Predicate::between(1, 2),
            Predicate::like("x"),
        ];
        for p in predicates {
            let mut args = vec![Value::Null];
            let sql = p.evaluate("f", &mut args);
            assert_eq!(args.len() - 1, p.arity(), "{sql}");
            assert_eq!(sql.matches('?').count(), p.arity(), "{sql}");
        }
    }

    #[test]
    fn test_postgres_placeholders_continue_numbering() {
        let opts = BuildOptions::new().with_dialect(Dialect::Postgres);
        let mut args = vec![Value::from("x")];
        let sql = Predicate::between(1, 9).evaluate_with("f", &mut args, &opts);
        assert_eq!(sql, "f BETWEEN $2 AND $3");
        let sql = Predicate::in_list([1, 2]).evaluate_with("g", &mut args, &opts);
        assert_eq!(sql, "g IN ($4,$5)");
    }
}
