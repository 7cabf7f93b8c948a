use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::Value;

// SQLite has no date/time storage class; drivers materialize such columns as
// text in the canonical encodings below, so the conversions accept both the
// chrono variant and its text form.

pub const DATE_TIME_ENCODING: &str = "%Y-%m-%d %H:%M:%S%.f";
pub const DATE_ENCODING: &str = "%Y-%m-%d";
pub const TIME_ENCODING: &str = "%H:%M:%S%.f";

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident, $lit:literal, $parse:expr) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    Value::String(ref text) => {
                        let parse: fn(&str) -> Option<$chrono> = $parse;
                        parse(text).ok_or_else(|| crate::Error::type_conversion(value, $lit))
                    }
                    _ => Err(crate::Error::type_conversion(value, $lit)),
                }
            }
        }
    };
}

impl_chrono_conversions!(
    DateTime<Utc>,
    ChronoDateTimeUtc,
    "DateTime<Utc>",
    |text| DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
);
impl_chrono_conversions!(NaiveDateTime, ChronoNaiveDateTime, "NaiveDateTime", |text| {
    NaiveDateTime::parse_from_str(text, DATE_TIME_ENCODING).ok()
});
impl_chrono_conversions!(NaiveDate, ChronoNaiveDate, "NaiveDate", |text| {
    NaiveDate::parse_from_str(text, DATE_ENCODING).ok()
});
impl_chrono_conversions!(NaiveTime, ChronoNaiveTime, "NaiveTime", |text| {
    NaiveTime::parse_from_str(text, TIME_ENCODING).ok()
});
