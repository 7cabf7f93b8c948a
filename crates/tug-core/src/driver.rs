mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Value};

use std::{borrow::Cow, fmt::Debug};

/// A database backend that can produce connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was created from.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// An upper bound on concurrently open connections, when the backend
    /// imposes one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// An open connection able to run raw parameterized SQL.
///
/// Statements are executed as-is; parameter placeholders use the backend's
/// native syntax (`?` for SQLite, `$n` for PostgreSQL).
#[async_trait]
pub trait Connection: Debug + Send {
    /// Runs a statement expected to yield rows.
    async fn query(&mut self, sql: &str, params: &[Value]) -> crate::Result<Response>;

    /// Runs a statement expected to yield an affected-row count.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> crate::Result<Response>;

    /// Runs one statement once per parameter set, returning per-set
    /// affected-row counts in input order.
    async fn execute_batch(
        &mut self,
        sql: &str,
        param_sets: &[Vec<Value>],
    ) -> crate::Result<Vec<u64>>;

    /// Runs an insert statement and returns the generated key of the new row.
    async fn insert(&mut self, sql: &str, params: &[Value]) -> crate::Result<i64>;
}
