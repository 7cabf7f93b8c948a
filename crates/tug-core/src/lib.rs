pub mod driver;
pub use driver::Connection;

mod error;
pub use error::Error;

mod row;
pub use row::{Row, RowSet};

mod ty;
pub use ty::Type;

pub mod value;
pub use value::Value;

/// A Result type alias that uses Tug's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
