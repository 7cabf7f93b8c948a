use super::{Connect, Db, Pool, PoolConfig, Timeouts};
use crate::registry::StatementRegistry;

use tug_core::{driver::Driver, Result};

use std::path::PathBuf;

/// Configures and builds a [`Db`].
#[derive(Default)]
pub struct Builder {
    pool: PoolConfig,
    statements: StatementRegistry,
    statement_files: Vec<PathBuf>,
}

impl Builder {
    /// Caps the number of pooled connections.
    pub fn max_connections(&mut self, max_size: usize) -> &mut Self {
        self.pool.max_size = max_size;
        self
    }

    /// Sets the pool's create/wait/recycle timeouts.
    pub fn timeouts(&mut self, timeouts: Timeouts) -> &mut Self {
        self.pool.timeouts = timeouts;
        self
    }

    /// Registers one SQL statement under `key`.
    pub fn statement(&mut self, key: impl Into<String>, sql: impl Into<String>) -> &mut Self {
        self.statements.insert(key, sql);
        self
    }

    /// Queues a TOML statement file, loaded when the `Db` is built. Files
    /// load in the order given, after inline statements, and later keys
    /// override earlier ones.
    pub fn statements_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.statement_files.push(path.into());
        self
    }

    /// Builds a `Db` from a connection URL; the scheme picks the driver.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = Connect::new(url)?;
        self.build(driver).await
    }

    /// Builds a `Db` on top of an explicit driver.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let mut statements = std::mem::take(&mut self.statements);
        for path in self.statement_files.drain(..) {
            statements.load_path(&path)?;
        }

        let url = driver.url().into_owned();
        let pool = Pool::new(driver, self.pool.clone()).await?;
        tracing::debug!(url, statements = statements.len(), "database handle ready");

        Ok(Db::new(pool, statements))
    }
}
