use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tokio_postgres::{
    types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type},
    Column, Row,
};
use tug_core::{Result, Value};

/// Borrowed parameter wrapper bridging [`Value`] to postgres' `ToSql`.
///
/// Integer parameters adapt to the placeholder's declared width; narrowing
/// is range-checked.
#[derive(Debug)]
pub(crate) struct Param<'a>(pub(crate) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match self.0 {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(value) => value.to_sql(ty, out),
            Value::I8(value) => match *ty {
                Type::INT2 => (*value as i16).to_sql(ty, out),
                Type::INT4 => (*value as i32).to_sql(ty, out),
                _ => (*value as i64).to_sql(ty, out),
            },
            Value::I16(value) => match *ty {
                Type::INT2 => value.to_sql(ty, out),
                Type::INT4 => (*value as i32).to_sql(ty, out),
                _ => (*value as i64).to_sql(ty, out),
            },
            Value::I32(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => value.to_sql(ty, out),
                _ => (*value as i64).to_sql(ty, out),
            },
            Value::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            Value::F32(value) => match *ty {
                Type::FLOAT4 => value.to_sql(ty, out),
                _ => (*value as f64).to_sql(ty, out),
            },
            Value::F64(value) => value.to_sql(ty, out),
            Value::String(value) => value.to_sql(ty, out),
            Value::Bytes(value) => value.to_sql(ty, out),
            Value::ChronoDateTimeUtc(value) => value.to_sql(ty, out),
            Value::ChronoNaiveDateTime(value) => value.to_sql(ty, out),
            Value::ChronoNaiveDate(value) => value.to_sql(ty, out),
            Value::ChronoNaiveTime(value) => value.to_sql(ty, out),
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        FLOAT4,
        FLOAT8,
        TEXT,
        VARCHAR,
        BYTEA,
        TIMESTAMP,
        TIMESTAMPTZ,
        DATE,
        TIME
    );

    to_sql_checked!();
}

/// Converts one PostgreSQL cell to a [`Value`], directed by the column's
/// declared type.
pub(crate) fn from_column(row: &Row, index: usize, column: &Column) -> Result<Value> {
    macro_rules! get {
        ($ty:ty, $variant:ident) => {
            row.try_get::<_, Option<$ty>>(index)
                .map(|cell| cell.map(Value::$variant).unwrap_or(Value::Null))
                .map_err(tug_core::Error::driver_operation_failed)
        };
    }

    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so each type is compared manually like so.
    let ty = column.type_();
    if ty == &Type::BOOL {
        get!(bool, Bool)
    } else if ty == &Type::INT2 {
        get!(i16, I16)
    } else if ty == &Type::INT4 {
        get!(i32, I32)
    } else if ty == &Type::INT8 {
        get!(i64, I64)
    } else if ty == &Type::FLOAT4 {
        get!(f32, F32)
    } else if ty == &Type::FLOAT8 {
        get!(f64, F64)
    } else if ty == &Type::TEXT || ty == &Type::VARCHAR || ty == &Type::BPCHAR {
        get!(String, String)
    } else if ty == &Type::BYTEA {
        get!(Vec<u8>, Bytes)
    } else if ty == &Type::TIMESTAMPTZ {
        get!(DateTime<Utc>, ChronoDateTimeUtc)
    } else if ty == &Type::TIMESTAMP {
        get!(NaiveDateTime, ChronoNaiveDateTime)
    } else if ty == &Type::DATE {
        get!(NaiveDate, ChronoNaiveDate)
    } else if ty == &Type::TIME {
        get!(NaiveTime, ChronoNaiveTime)
    } else {
        Err(tug_core::err!(
            "unsupported postgresql column type `{ty}` for column `{}`",
            column.name()
        ))
    }
}
