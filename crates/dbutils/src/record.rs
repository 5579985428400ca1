//! Result rows as column → value maps.

use crate::error::{DbError, DbResult};
use crate::value::Value;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// One result row, keyed by column name in result order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append (or replace) a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Raw column value.
    pub fn get(&self, column: &str) -> DbResult<&Value> {
        self.columns
            .get(column)
            .ok_or_else(|| DbError::unknown_field(column))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Boolean column. Integer `0` and `1` are accepted as well.
    pub fn get_bool(&self, column: &str) -> DbResult<bool> {
        match self.get(column)? {
            Value::Bool(v) => Ok(*v),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            _ => Err(DbError::invalid_type(column, "bool")),
        }
    }

    pub fn get_i64(&self, column: &str) -> DbResult<i64> {
        match self.get(column)? {
            Value::Int(v) => Ok(*v),
            _ => Err(DbError::invalid_type(column, "int")),
        }
    }

    /// Integer column narrowed to `i32`; out-of-range values are rejected.
    pub fn get_i32(&self, column: &str) -> DbResult<i32> {
        let v = self.get_i64(column)?;
        i32::try_from(v).map_err(|_| DbError::invalid_type(column, "i32"))
    }

    /// Float column. Integers are widened.
    pub fn get_f64(&self, column: &str) -> DbResult<f64> {
        match self.get(column)? {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            _ => Err(DbError::invalid_type(column, "float")),
        }
    }

    /// Text column. Byte columns are accepted when they hold valid UTF-8.
    pub fn get_string(&self, column: &str) -> DbResult<String> {
        match self.get(column)? {
            Value::Text(v) => Ok(v.clone()),
            Value::Bytes(v) => {
                String::from_utf8(v.clone()).map_err(|_| DbError::invalid_type(column, "text"))
            }
            _ => Err(DbError::invalid_type(column, "text")),
        }
    }

    /// Byte column. Text columns are returned as their UTF-8 bytes.
    pub fn get_bytes(&self, column: &str) -> DbResult<Vec<u8>> {
        match self.get(column)? {
            Value::Bytes(v) => Ok(v.clone()),
            Value::Text(v) => Ok(v.clone().into_bytes()),
            _ => Err(DbError::invalid_type(column, "bytes")),
        }
    }

    pub fn get_timestamp(&self, column: &str) -> DbResult<DateTime<Utc>> {
        match self.get(column)? {
            Value::Timestamp(v) => Ok(*v),
            _ => Err(DbError::invalid_type(column, "timestamp")),
        }
    }

    /// `None` for NULL, otherwise the accessor's result.
    pub fn get_opt<T>(
        &self,
        column: &str,
        get: impl FnOnce(&Self, &str) -> DbResult<T>,
    ) -> DbResult<Option<T>> {
        if self.get(column)?.is_null() {
            return Ok(None);
        }
        get(self, column).map(Some)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        [
            ("active", Value::Int(1)),
            ("deleted", Value::Bool(false)),
            ("age", Value::Int(42)),
            ("big", Value::Int(i64::MAX)),
            ("name", Value::Bytes(b"python".to_vec())),
            ("title", Value::from("golang")),
            ("score", Value::Float(2.5)),
            ("missing", Value::Null),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_unknown_field() {
        let err = record().get_i64("nope").unwrap_err();
        assert!(err.is_unknown_field());
        assert_eq!(err.to_string(), "no field nope");
    }

    #[test]
    fn test_bool_from_int() {
        let r = record();
        assert!(r.get_bool("active").unwrap());
        assert!(!r.get_bool("deleted").unwrap());
        assert!(r.get_bool("age").is_err());
    }

    #[test]
    fn test_integers() {
        let r = record();
        assert_eq!(r.get_i64("age").unwrap(), 42);
        assert_eq!(r.get_i32("age").unwrap(), 42);
        assert!(matches!(
            r.get_i32("big"),
            Err(DbError::InvalidType { expected: "i32", .. })
        ));
        assert!(r.get_i64("title").is_err());
    }

    #[test]
    fn test_text_and_bytes() {
        let r = record();
        assert_eq!(r.get_string("name").unwrap(), "python");
        assert_eq!(r.get_string("title").unwrap(), "golang");
        assert_eq!(r.get_bytes("title").unwrap(), b"golang".to_vec());
        assert!(r.get_string("age").is_err());
    }

    #[test]
    fn test_float_and_null() {
        let r = record();
        assert_eq!(r.get_f64("score").unwrap(), 2.5);
        assert_eq!(r.get_f64("age").unwrap(), 42.0);
        assert_eq!(r.get_opt("missing", Record::get_i64).unwrap(), None);
        assert_eq!(r.get_opt("age", Record::get_i64).unwrap(), Some(42));
    }
}
