use tug_core::{
    async_trait,
    driver::{Connection, Driver},
    Error, Result,
};

use std::borrow::Cow;
use url::Url;

/// A driver picked from a connection URL's scheme.
///
/// Driver crates are feature-gated; connecting with a scheme whose feature
/// is disabled fails with an adhoc error naming the feature.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|parse_err| Error::invalid_connection_url(format!("{parse_err}; url={url}")))?;

        let driver = match parsed.scheme() {
            "sqlite" => connect_sqlite(url)?,
            "postgresql" => connect_postgresql(url)?,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

#[async_trait]
impl Driver for Connect {
    fn url(&self) -> Cow<'_, str> {
        self.driver.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    fn max_connections(&self) -> Option<usize> {
        self.driver.max_connections()
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(tug_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    tug_core::bail!("`sqlite` feature not enabled")
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(tug_driver_postgresql::Postgres::new(url)?))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str) -> Result<Box<dyn Driver>> {
    tug_core::bail!("`postgresql` feature not enabled")
}
