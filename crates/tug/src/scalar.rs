use crate::Type;

use tug_core::{Result, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// A scalar type a column value can be coerced into.
pub trait Scalar: Sized {
    const TYPE: Type;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_scalar {
    (
        $(
            $ty:ty => $variant:ident
        ),* $(,)?
    ) => {
        $(
            impl Scalar for $ty {
                const TYPE: Type = Type::$variant;

                /// Null loads as the type's default value.
                fn load(value: Value) -> Result<Self> {
                    if value.is_null() {
                        return Ok(Self::default());
                    }
                    value.try_into()
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
}

// Date/time types have no default value; nullable columns must load through
// `Option`.
macro_rules! impl_chrono_scalar {
    (
        $(
            $ty:ty => $variant:ident
        ),* $(,)?
    ) => {
        $(
            impl Scalar for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_chrono_scalar! {
    DateTime<Utc> => DateTimeUtc,
    NaiveDateTime => DateTime,
    NaiveDate => Date,
    NaiveTime => Time,
}

impl<T: Scalar> Scalar for Option<T> {
    const TYPE: Type = T::TYPE;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
