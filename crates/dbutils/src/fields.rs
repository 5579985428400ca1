//! Column → value containers for INSERT and UPDATE.

use crate::value::Value;
use indexmap::IndexMap;

/// Column → value mapping for a single row.
///
/// Columns are emitted in insertion order; setting an existing column
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: IndexMap<String, Value>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, builder-style.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column value, returning the previous one.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(column.into(), value.into())
    }

    /// Set an optional column value (None => skip).
    pub fn set_opt<T: Into<Value>>(&mut self, column: impl Into<String>, value: Option<T>) {
        if let Some(v) = value {
            self.set(column, v);
        }
    }

    /// Merge other sets into this one; later sets win on key collision.
    pub fn merge<I>(&mut self, others: I)
    where
        I: IntoIterator<Item = FieldValues>,
    {
        for other in others {
            self.values.extend(other.values);
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = FieldValues::new();
        for (column, value) in iter {
            fields.set(column, value);
        }
        fields
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Column → value sequence mapping for multi-row INSERT.
///
/// Sequence *i* of every column belongs to row *i*, so all sequences are
/// expected to share one length. The length check happens when the
/// statement is built.
///
/// ```text
/// { "a": [1, 2], "b": ["x", "y"] }  =>  (a, b) VALUES (1, "x"), (2, "y")
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValuesMap {
    columns: IndexMap<String, Vec<Value>>,
}

impl FieldValuesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's value sequence, builder-style.
    pub fn with<I, V>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set(column, values);
        self
    }

    /// Set a column's value sequence, returning the previous one.
    pub fn set<I, V>(&mut self, column: impl Into<String>, values: I) -> Option<Vec<Value>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.columns
            .insert(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Merge other maps into this one; later maps win on key collision.
    pub fn merge<I>(&mut self, others: I)
    where
        I: IntoIterator<Item = FieldValuesMap>,
    {
        for other in others {
            self.columns.extend(other.columns);
        }
    }

    pub fn get(&self, column: &str) -> Option<&[Value]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column (0 when there are no columns).
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl IntoIterator for FieldValuesMap {
    type Item = (String, Vec<Value>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_values_order_and_merge() {
        let mut fields = FieldValues::new().with("name", "bob").with("age", 30);
        fields.merge([FieldValues::new().with("name", "alice").with("city", "Oslo")]);
        let columns: Vec<&str> = fields.iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["name", "age", "city"]);
        assert_eq!(fields.get("name"), Some(&Value::from("alice")));
    }

    #[test]
    fn test_set_opt_skips_none() {
        let mut fields = FieldValues::new();
        fields.set_opt("a", None::<i64>);
        fields.set_opt("b", Some(1));
        assert_eq!(fields.len(), 1);
        assert!(fields.get("a").is_none());
    }

    #[test]
    fn test_row_count() {
        assert_eq!(FieldValuesMap::new().row_count(), 0);
        let map = FieldValuesMap::new()
            .with("a", [1, 2, 3])
            .with("b", ["x", "y", "z"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.row_count(), 3);
    }
}
