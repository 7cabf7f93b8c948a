mod builder;
mod connect;
mod pool;

pub use builder::Builder;
pub use connect::Connect;
pub use pool::{Pool, PoolConfig, Timeouts};

use crate::{mapper, registry::StatementRegistry, BindingCache, Entity, Scalar};

use tug_core::{Connection, Result, RowSet, Value};

use std::sync::Arc;

/// A database handle: the connection pool, the field-binding cache, and the
/// statement registry behind one explicitly constructed object.
///
/// Cloning is cheap and shares all three. Create with [`Db::connect`] or
/// [`Db::builder`]; shut down with [`Db::close`].
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

/// Shared state between all `Db` clones.
struct Shared {
    pool: Pool,
    bindings: BindingCache,
    statements: StatementRegistry,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with default configuration. The URL scheme picks the driver.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    pub(crate) fn new(pool: Pool, statements: StatementRegistry) -> Db {
        Db {
            shared: Arc::new(Shared {
                pool,
                bindings: BindingCache::new(),
                statements,
            }),
        }
    }

    /// Runs a query and maps every result row into `T`, preserving order.
    pub async fn fetch_all<T: Entity>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        let rows = self.query(sql, params).await?;
        mapper::map_rows(rows, &self.shared.bindings)
    }

    /// Runs a query and maps the first result row into `T`.
    ///
    /// An empty result is `Ok(None)`, not an error.
    pub async fn fetch_one<T: Entity>(&self, sql: &str, params: &[Value]) -> Result<Option<T>> {
        let rows = self.query(sql, params).await?;
        mapper::map_first(&rows, &self.shared.bindings)
    }

    /// Runs a query and coerces the first column of the first row.
    ///
    /// An empty result is `Ok(None)`, not an error.
    pub async fn fetch_scalar<S: Scalar>(&self, sql: &str, params: &[Value]) -> Result<Option<S>> {
        let rows = self.query(sql, params).await?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        mapper::single_scalar(row).map(Some)
    }

    /// Runs a query and coerces the named column of every row, preserving
    /// order.
    pub async fn fetch_column<S: Scalar>(
        &self,
        sql: &str,
        column: &str,
        params: &[Value],
    ) -> Result<Vec<S>> {
        let rows = self.query(sql, params).await?;
        mapper::scalar_column(&rows, column)
    }

    /// Runs an insert/update/delete statement, returning the affected-row
    /// count.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut connection = self.shared.pool.get().await?;
        let response = connection.execute(sql, params).await?;
        let count = response.rows.into_count()?;
        tracing::debug!(sql, count, "executed statement");
        Ok(count)
    }

    /// Runs one statement once per parameter set, returning per-set
    /// affected-row counts in input order.
    pub async fn execute_batch(&self, sql: &str, param_sets: &[Vec<Value>]) -> Result<Vec<u64>> {
        let mut connection = self.shared.pool.get().await?;
        let counts = connection.execute_batch(sql, param_sets).await?;
        tracing::debug!(sql, sets = counts.len(), "executed batch");
        Ok(counts)
    }

    /// Runs an insert statement and returns the generated key of the new
    /// row.
    ///
    /// SQLite reports the last inserted rowid; PostgreSQL statements must
    /// carry a `RETURNING` clause whose first column is the key.
    pub async fn insert(&self, sql: &str, params: &[Value]) -> Result<i64> {
        let mut connection = self.shared.pool.get().await?;
        let key = connection.insert(sql, params).await?;
        tracing::debug!(sql, key, "executed insert");
        Ok(key)
    }

    /// The SQL registered under `key` in the statement registry.
    pub fn statement(&self, key: &str) -> Result<&str> {
        self.shared.statements.get(key)
    }

    /// The statement registry itself.
    pub fn statements(&self) -> &StatementRegistry {
        &self.shared.statements
    }

    /// Closes the pool. In-flight connections finish; new checkouts fail.
    pub fn close(&self) {
        self.shared.pool.close();
    }

    async fn query(&self, sql: &str, params: &[Value]) -> Result<RowSet> {
        let mut connection = self.shared.pool.get().await?;
        let response = connection.query(sql, params).await?;
        let rows = response.rows.into_values()?;
        tracing::debug!(sql, rows = rows.len(), "executed query");
        Ok(rows)
    }
}
