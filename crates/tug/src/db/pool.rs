//! Connection pooling for database connections.

use std::ops::{Deref, DerefMut};

pub use deadpool::managed::Timeouts;
use tug_core::{driver::Driver, Connection};

/// Get the default maximum size of a pool, which is `cpu_core_count * 2`
/// including logical cores (Hyper-Threading).
fn get_default_pool_max_size() -> usize {
    deadpool::managed::PoolConfig::default().max_size
}

/// Configuration for connection pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_size: usize,
    pub timeouts: Timeouts,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: get_default_pool_max_size(),
            timeouts: Default::default(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A connection pool that manages database connections.
#[derive(Debug)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    ///
    /// Checks one connection out eagerly so a bad URL or unreachable
    /// database fails here rather than on first use.
    pub async fn new(driver: impl Driver, config: PoolConfig) -> crate::Result<Self> {
        let max_size = driver
            .max_connections()
            .map_or(config.max_size, |limit| limit.min(config.max_size));

        let inner = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1)
        .max_size(max_size)
        .timeouts(config.timeouts)
        .build()
        .map_err(tug_core::Error::connection_pool)?;

        let connection = inner
            .get()
            .await
            .map_err(tug_core::Error::connection_pool)?;
        drop(connection);

        Ok(Self { inner })
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self
            .inner
            .get()
            .await
            .map_err(tug_core::Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    /// Closes the pool; pending and future checkouts fail.
    pub fn close(&self) {
        self.inner.close();
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = crate::Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
