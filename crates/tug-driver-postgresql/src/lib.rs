mod value;
use value::Param;

use std::borrow::Cow;
use tokio_postgres::{types::ToSql, Client, Config, NoTls, Statement};
use tug_core::{
    async_trait,
    driver::{Driver, Response},
    Result, RowSet, Value,
};
use url::Url;

#[derive(Debug)]
pub struct Postgres {
    url: String,
    config: Config,
}

impl Postgres {
    /// Create a new PostgreSQL driver from a connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(tug_core::Error::driver_operation_failed)?;

        if url.scheme() != "postgresql" {
            return Err(tug_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url_str}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            tug_core::Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url_str}"
            ))
        })?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(tug_core::Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self {
            url: url_str,
            config,
        })
    }
}

#[async_trait]
impl Driver for Postgres {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn connect(&self) -> Result<Box<dyn tug_core::Connection>> {
        tracing::debug!(url = self.url.as_str(), "opening postgresql connection");

        let (client, connection) = self
            .config
            .connect(NoTls)
            .await
            .map_err(tug_core::Error::driver_operation_failed)?;

        // The connection task drives the socket; it finishes when the client
        // is dropped.
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(%err, "postgresql connection error");
            }
        });

        Ok(Box::new(Connection { client }))
    }
}

pub struct Connection {
    client: Client,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

impl Connection {
    async fn prepare(&self, sql: &str) -> Result<Statement> {
        self.client
            .prepare(sql)
            .await
            .map_err(tug_core::Error::driver_operation_failed)
    }

    async fn run_query(&self, sql: &str, params: &[Value]) -> Result<RowSet> {
        let statement = self.prepare(sql).await?;
        let args: Vec<Param<'_>> = params.iter().map(Param).collect();
        let args: Vec<&(dyn ToSql + Sync)> =
            args.iter().map(|param| param as &(dyn ToSql + Sync)).collect();

        let rows = self
            .client
            .query(&statement, &args)
            .await
            .map_err(tug_core::Error::driver_operation_failed)?;

        // Column names come from the prepared statement, so an empty result
        // still carries them.
        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let mut set = RowSet::new(columns);
        for row in rows {
            let mut values = Vec::with_capacity(row.len());
            for (index, column) in row.columns().iter().enumerate() {
                values.push(value::from_column(&row, index, column)?);
            }
            set.push(values);
        }

        Ok(set)
    }

    async fn run_execute(&self, statement: &Statement, params: &[Value]) -> Result<u64> {
        let args: Vec<Param<'_>> = params.iter().map(Param).collect();
        let args: Vec<&(dyn ToSql + Sync)> =
            args.iter().map(|param| param as &(dyn ToSql + Sync)).collect();

        self.client
            .execute(statement, &args)
            .await
            .map_err(tug_core::Error::driver_operation_failed)
    }
}

#[async_trait]
impl tug_core::driver::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        Ok(Response::row_set(self.run_query(sql, params).await?))
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        let statement = self.prepare(sql).await?;
        Ok(Response::count(self.run_execute(&statement, params).await?))
    }

    async fn execute_batch(&mut self, sql: &str, param_sets: &[Vec<Value>]) -> Result<Vec<u64>> {
        let statement = self.prepare(sql).await?;
        let mut counts = Vec::with_capacity(param_sets.len());
        for params in param_sets {
            counts.push(self.run_execute(&statement, params).await?);
        }
        Ok(counts)
    }

    /// PostgreSQL has no `last_insert_rowid` equivalent; the statement must
    /// carry a `RETURNING` clause whose first column is the generated key.
    async fn insert(&mut self, sql: &str, params: &[Value]) -> Result<i64> {
        let rows = self.run_query(sql, params).await?;

        let Some(row) = rows.first() else {
            return Err(tug_core::Error::invalid_result(
                "insert statement returned no rows; add a RETURNING clause to read the generated key",
            ));
        };
        let Some(key) = row.value(0) else {
            return Err(tug_core::Error::invalid_result(
                "insert statement returned a row with no columns",
            ));
        };

        key.clone().try_into()
    }
}
