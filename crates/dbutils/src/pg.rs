//! tokio-postgres integration.
//!
//! - [`Value`] implements [`ToSql`], narrowing numbers to the column type.
//! - [`Executor`] is implemented for `tokio_postgres::Client` and
//!   `tokio_postgres::Transaction`; build statements with
//!   [`Dialect::Postgres`](crate::Dialect::Postgres) for `$n` placeholders.

use crate::error::{DbError, DbResult};
use crate::record::Record;
use crate::table::{ExecResult, Executor};
use crate::value::Value;
use bytes::BytesMut;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::error::Error;
use tokio_postgres::Row;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

/// Every (variant, column type) pair not listed here is rejected.
///
/// - `Int`: INT2/INT4/INT8 (range-checked), FLOAT4/FLOAT8 (must be exact)
/// - `Float`: FLOAT4 (must survive the narrowing), FLOAT8
/// - `Text`: TEXT/VARCHAR/BPCHAR/NAME
/// - `Bytes`: BYTEA, `Bool`: BOOL
/// - `Timestamp`: TIMESTAMP (as UTC wall time), TIMESTAMPTZ
/// - `Null`: any accepted type
impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match (self, ty) {
            (Value::Null, _) => Ok(IsNull::Yes),
            (Value::Bool(v), &Type::BOOL) => v.to_sql(ty, out),
            (Value::Int(v), &Type::INT2) => i16::try_from(*v)?.to_sql(ty, out),
            (Value::Int(v), &Type::INT4) => i32::try_from(*v)?.to_sql(ty, out),
            (Value::Int(v), &Type::INT8) => v.to_sql(ty, out),
            (Value::Int(v), &Type::FLOAT4) => {
                let f = *v as f32;
                if f as i128 != i128::from(*v) {
                    return Err(lossy(self, ty));
                }
                f.to_sql(ty, out)
            }
            (Value::Int(v), &Type::FLOAT8) => {
                let f = *v as f64;
                if f as i128 != i128::from(*v) {
                    return Err(lossy(self, ty));
                }
                f.to_sql(ty, out)
            }
            (Value::Float(v), &Type::FLOAT4) => {
                let f = *v as f32;
                if !v.is_nan() && f64::from(f) != *v {
                    return Err(lossy(self, ty));
                }
                f.to_sql(ty, out)
            }
            (Value::Float(v), &Type::FLOAT8) => v.to_sql(ty, out),
            (Value::Text(v), &Type::TEXT | &Type::VARCHAR | &Type::BPCHAR | &Type::NAME) => {
                v.to_sql(ty, out)
            }
            (Value::Bytes(v), &Type::BYTEA) => v.to_sql(ty, out),
            (Value::Timestamp(v), &Type::TIMESTAMP) => v.naive_utc().to_sql(ty, out),
            (Value::Timestamp(v), &Type::TIMESTAMPTZ) => v.to_sql(ty, out),
            _ => Err(format!(
                "cannot bind {} value to a {} parameter",
                self.type_name(),
                ty
            )
            .into()),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(
            *ty,
            Type::BOOL
                | Type::INT2
                | Type::INT4
                | Type::INT8
                | Type::FLOAT4
                | Type::FLOAT8
                | Type::TEXT
                | Type::VARCHAR
                | Type::BPCHAR
                | Type::NAME
                | Type::BYTEA
                | Type::TIMESTAMP
                | Type::TIMESTAMPTZ
        )
    }

    to_sql_checked!();
}

fn lossy(value: &Value, ty: &Type) -> Box<dyn Error + Sync + Send> {
    format!("{value} cannot be represented exactly as {ty}").into()
}

fn params(args: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
}

/// Decode one column into a [`Value`], mapping SQL NULL to [`Value::Null`].
fn column_value(row: &Row, idx: usize) -> DbResult<Value> {
    let ty = row.columns()[idx].type_();
    let value: Value = match *ty {
        Type::BOOL => row.try_get::<_, Option<bool>>(idx)?.into(),
        Type::INT2 => row.try_get::<_, Option<i16>>(idx)?.into(),
        Type::INT4 => row.try_get::<_, Option<i32>>(idx)?.into(),
        Type::INT8 => row.try_get::<_, Option<i64>>(idx)?.into(),
        Type::FLOAT4 => row.try_get::<_, Option<f32>>(idx)?.into(),
        Type::FLOAT8 => row.try_get::<_, Option<f64>>(idx)?.into(),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            row.try_get::<_, Option<String>>(idx)?.into()
        }
        Type::BYTEA => row.try_get::<_, Option<Vec<u8>>>(idx)?.into(),
        Type::TIMESTAMP => row.try_get::<_, Option<NaiveDateTime>>(idx)?.into(),
        Type::TIMESTAMPTZ => row.try_get::<_, Option<DateTime<Utc>>>(idx)?.into(),
        _ => {
            return Err(DbError::driver(format!(
                "unsupported column type {} for '{}'",
                ty,
                row.columns()[idx].name()
            )));
        }
    };
    Ok(value)
}

fn row_to_record(row: &Row) -> DbResult<Record> {
    let mut record = Record::new();
    for (idx, column) in row.columns().iter().enumerate() {
        record.insert(column.name(), column_value(row, idx)?);
    }
    Ok(record)
}

macro_rules! impl_pg_executor {
    ($($ty:ty),*) => {
        $(
            impl Executor for $ty {
                async fn execute(&self, sql: &str, args: &[Value]) -> DbResult<ExecResult> {
                    let rows_affected = <$ty>::execute(self, sql, &params(args)).await?;
                    Ok(ExecResult {
                        rows_affected,
                        last_insert_id: None,
                    })
                }

                async fn query(&self, sql: &str, args: &[Value]) -> DbResult<Vec<Record>> {
                    let rows = <$ty>::query(self, sql, &params(args)).await?;
                    rows.iter().map(row_to_record).collect()
                }
            }
        )*
    };
}

impl_pg_executor!(tokio_postgres::Client, tokio_postgres::Transaction<'_>);

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value, ty: &Type) -> Result<Vec<u8>, Box<dyn Error + Sync + Send>> {
        let mut out = BytesMut::new();
        match value.to_sql_checked(ty, &mut out)? {
            IsNull::Yes => Ok(Vec::new()),
            IsNull::No => Ok(out.to_vec()),
        }
    }

    #[test]
    fn test_int_narrows_to_column_width() {
        assert_eq!(encode(&Value::Int(7), &Type::INT2).unwrap(), vec![0, 7]);
        assert_eq!(encode(&Value::Int(7), &Type::INT4).unwrap(), vec![0, 0, 0, 7]);
        assert_eq!(encode(&Value::Int(7), &Type::INT8).unwrap().len(), 8);
        assert!(encode(&Value::Int(i64::from(i16::MAX) + 1), &Type::INT2).is_err());
    }

    #[test]
    fn test_float_width() {
        assert_eq!(encode(&Value::Float(1.5), &Type::FLOAT4).unwrap().len(), 4);
        assert_eq!(encode(&Value::Float(1.5), &Type::FLOAT8).unwrap().len(), 8);
    }

    #[test]
    fn test_null_and_text() {
        assert!(encode(&Value::Null, &Type::INT4).unwrap().is_empty());
        assert_eq!(encode(&Value::from("ab"), &Type::TEXT).unwrap(), b"ab".to_vec());
    }

    #[test]
    fn test_rejects_mismatched_kinds() {
        assert!(encode(&Value::from("1234"), &Type::INT4).is_err());
        assert!(encode(&Value::Float(1.5), &Type::INT8).is_err());
        assert!(encode(&Value::Bool(true), &Type::INT4).is_err());
        assert!(encode(&Value::Int(1), &Type::TEXT).is_err());
        assert!(encode(&Value::Int(1), &Type::BOOL).is_err());
        assert!(encode(&Value::from(&b"ab"[..]), &Type::TEXT).is_err());
        assert!(encode(&Value::from("ab"), &Type::BYTEA).is_err());
        assert!(encode(&Value::from("2024-01-01"), &Type::TIMESTAMPTZ).is_err());
    }

    #[test]
    fn test_null_binds_to_any_accepted_type() {
        for ty in [Type::BOOL, Type::INT8, Type::TEXT, Type::BYTEA, Type::TIMESTAMPTZ] {
            assert!(encode(&Value::Null, &ty).unwrap().is_empty());
        }
    }

    #[test]
    fn test_float_narrowing_must_be_exact() {
        assert_eq!(encode(&Value::Int(7), &Type::FLOAT4).unwrap(), 7.0_f32.to_be_bytes());
        assert_eq!(encode(&Value::Int(7), &Type::FLOAT8).unwrap(), 7.0_f64.to_be_bytes());
        assert!(encode(&Value::Int((1 << 24) + 1), &Type::FLOAT4).is_err());
        assert!(encode(&Value::Int((1 << 53) + 1), &Type::FLOAT8).is_err());
        assert!(encode(&Value::Int(i64::MAX), &Type::FLOAT8).is_err());
        assert!(encode(&Value::Float(0.1), &Type::FLOAT4).is_err());
        assert!(encode(&Value::Float(f64::NAN), &Type::FLOAT4).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_type() {
        assert!(!<Value as ToSql>::accepts(&Type::JSONB));
        assert!(encode(&Value::from("{}"), &Type::JSONB).is_err());
    }
}
