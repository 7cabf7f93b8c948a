mod value;
use value::Param;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tug_core::{
    async_trait,
    driver::{Driver, Response},
    Result, RowSet, Value,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(tug_core::Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(tug_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn tug_core::Connection>> {
        tracing::debug!(url = %self.url(), "opening sqlite connection");
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    /// Each `connect()` to `:memory:` opens a distinct database, so the pool
    /// must not grow past one connection.
    fn max_connections(&self) -> Option<usize> {
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory()
            .map_err(tug_core::Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(tug_core::Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    // rusqlite is synchronous; statements run inline on the calling task.
    fn run_query(&mut self, sql: &str, params: &[Value]) -> Result<RowSet> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(tug_core::Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|column| column.to_string())
            .collect();
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(Param)))
            .map_err(tug_core::Error::driver_operation_failed)?;

        let mut set = RowSet::new(columns);
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut values = Vec::with_capacity(width);
                    for index in 0..width {
                        values.push(value::from_sql(row, index)?);
                    }
                    set.push(values);
                }
                Ok(None) => break,
                Err(err) => return Err(tug_core::Error::driver_operation_failed(err)),
            }
        }

        Ok(set)
    }

    fn run_execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(tug_core::Error::driver_operation_failed)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter().map(Param)))
            .map_err(tug_core::Error::driver_operation_failed)?;

        Ok(count as u64)
    }
}

#[async_trait]
impl tug_core::driver::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        Ok(Response::row_set(self.run_query(sql, params)?))
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        Ok(Response::count(self.run_execute(sql, params)?))
    }

    async fn execute_batch(&mut self, sql: &str, param_sets: &[Vec<Value>]) -> Result<Vec<u64>> {
        let mut counts = Vec::with_capacity(param_sets.len());
        for params in param_sets {
            counts.push(self.run_execute(sql, params)?);
        }
        Ok(counts)
    }

    async fn insert(&mut self, sql: &str, params: &[Value]) -> Result<i64> {
        self.run_execute(sql, params)?;
        Ok(self.connection.last_insert_rowid())
    }
}
