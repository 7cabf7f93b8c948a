mod chrono;
mod num;

pub use self::chrono::{DATE_ENCODING, DATE_TIME_ENCODING, TIME_ENCODING};

use crate::{Result, Type};

use ::chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// One scalar cell of a result row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// Byte sequence
    Bytes(Vec<u8>),

    /// Timezone-aware point in time
    ChronoDateTimeUtc(DateTime<Utc>),

    /// Calendar date and wall-clock time
    ChronoNaiveDateTime(NaiveDateTime),

    /// Calendar date
    ChronoNaiveDate(NaiveDate),

    /// Wall-clock time
    ChronoNaiveTime(NaiveTime),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The [`Type`] this value carries. `Null` infers `Type::Null`.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::ChronoDateTimeUtc(_) => Type::DateTimeUtc,
            Self::ChronoNaiveDateTime(_) => Type::DateTime,
            Self::ChronoNaiveDate(_) => Type::Date,
            Self::ChronoNaiveTime(_) => Type::Time,
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Backends without a boolean storage class hand booleans back as
            // integers; nonzero means true.
            Value::I8(v) => Ok(v != 0),
            Value::I16(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            _ => Err(crate::Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, "Vec<u8>")),
        }
    }
}
