/// The type of a scalar column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Byte sequence
    Bytes,

    /// Timezone-aware point in time (`chrono::DateTime<Utc>`)
    DateTimeUtc,

    /// Calendar date and wall-clock time (`chrono::NaiveDateTime`)
    DateTime,

    /// Calendar date (`chrono::NaiveDate`)
    Date,

    /// Wall-clock time (`chrono::NaiveTime`)
    Time,

    /// The null type can be coerced to any type.
    Null,
}

impl Type {
    /// The Rust-facing name of this type, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "String",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bytes => "Vec<u8>",
            Self::DateTimeUtc => "DateTime<Utc>",
            Self::DateTime => "NaiveDateTime",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::Null => "Null",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
