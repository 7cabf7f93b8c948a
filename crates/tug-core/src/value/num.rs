use super::Value;
use crate::Result;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    F32(f32)
    F64(f64)
}

// Cross-variant integer conversions: widening is infallible, narrowing is
// range-checked through std's try_into(). A String cell never converts to a
// numeric target.

macro_rules! try_convert_range {
    ($value:expr, $val:expr, $target_ty:ty) => {
        match $val.try_into() {
            Ok(v) => Ok(v),
            Err(_) => Err(crate::Error::type_conversion(
                $value,
                stringify!($target_ty),
            )),
        }
    };
}

impl TryFrom<Value> for i8 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I8(val) => Ok(val),
            Value::I16(val) => try_convert_range!(Value::I16(val), val, i8),
            Value::I32(val) => try_convert_range!(Value::I32(val), val, i8),
            Value::I64(val) => try_convert_range!(Value::I64(val), val, i8),
            _ => Err(crate::Error::type_conversion(value, "i8")),
        }
    }
}

impl TryFrom<Value> for i16 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I16(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::I32(val) => try_convert_range!(Value::I32(val), val, i16),
            Value::I64(val) => try_convert_range!(Value::I64(val), val, i16),
            _ => Err(crate::Error::type_conversion(value, "i16")),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I32(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I64(val) => try_convert_range!(Value::I64(val), val, i32),
            _ => Err(crate::Error::type_conversion(value, "i32")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            _ => Err(crate::Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F32(val) => Ok(val),
            // Backends that only store 8-byte reals hand narrower fields
            // back as F64.
            Value::F64(val) => Ok(val as f32),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val as f32),
            Value::I64(val) => Ok(val as f32),
            _ => Err(crate::Error::type_conversion(value, "f32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            Value::I64(val) => Ok(val as f64),
            _ => Err(crate::Error::type_conversion(value, "f64")),
        }
    }
}
