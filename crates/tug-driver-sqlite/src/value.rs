use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use tug_core::{
    value::{DATE_ENCODING, DATE_TIME_ENCODING, TIME_ENCODING},
    Result, Value,
};

/// Borrowed parameter wrapper bridging [`Value`] to rusqlite's `ToSql`.
#[derive(Debug)]
pub(crate) struct Param<'a>(pub(crate) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Bool(true) => ToSqlOutput::Owned(SqlValue::Integer(1)),
            Value::Bool(false) => ToSqlOutput::Owned(SqlValue::Integer(0)),
            Value::I8(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I16(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I32(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::F32(v) => ToSqlOutput::Owned(SqlValue::Real(*v as f64)),
            Value::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Value::Bytes(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
            // SQLite has no date/time storage class; store the canonical text
            // encodings the core conversions parse back.
            Value::ChronoDateTimeUtc(v) => ToSqlOutput::Owned(SqlValue::Text(v.to_rfc3339())),
            Value::ChronoNaiveDateTime(v) => {
                ToSqlOutput::Owned(SqlValue::Text(v.format(DATE_TIME_ENCODING).to_string()))
            }
            Value::ChronoNaiveDate(v) => {
                ToSqlOutput::Owned(SqlValue::Text(v.format(DATE_ENCODING).to_string()))
            }
            Value::ChronoNaiveTime(v) => {
                ToSqlOutput::Owned(SqlValue::Text(v.format(TIME_ENCODING).to_string()))
            }
        })
    }
}

/// Converts one SQLite cell to a [`Value`].
///
/// Raw queries carry no declared result types, so the conversion follows the
/// cell's storage class: integers arrive as `I64`, reals as `F64`, text as
/// `String`.
pub(crate) fn from_sql(row: &rusqlite::Row<'_>, index: usize) -> Result<Value> {
    let cell = row
        .get_ref(index)
        .map_err(tug_core::Error::driver_operation_failed)?;

    Ok(match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::I64(value),
        ValueRef::Real(value) => Value::F64(value),
        ValueRef::Text(value) => Value::String(
            String::from_utf8(value.to_vec()).map_err(tug_core::Error::driver_operation_failed)?,
        ),
        ValueRef::Blob(value) => Value::Bytes(value.to_vec()),
    })
}
