use tug_core::{err, Error, Result};

use indexmap::IndexMap;
use std::path::Path;

/// A key-to-SQL statement table.
///
/// Statements are registered programmatically or loaded from TOML files of
/// string pairs; nested tables flatten to dot-separated keys, so
///
/// ```toml
/// [books]
/// select_all = "SELECT * FROM BOOKS"
/// ```
///
/// registers the key `books.select_all`. Later registrations override
/// earlier ones; insertion order is preserved.
#[derive(Debug, Default)]
pub struct StatementRegistry {
    statements: IndexMap<String, String>,
}

impl StatementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one statement, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, sql: impl Into<String>) {
        self.statements.insert(key.into(), sql.into());
    }

    /// Loads statements from TOML source text. Returns the number of
    /// statements registered.
    pub fn load_str(&mut self, source: &str) -> Result<usize> {
        let table: toml::Table = source
            .parse()
            .map_err(|parse_err| err!("failed to parse statement file: {parse_err}"))?;
        let mut added = 0;
        self.merge_table(None, &table, &mut added)?;
        Ok(added)
    }

    /// Loads statements from a TOML file at `path`.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|io_err| {
            Error::from(io_err).context(err!("failed to read statement file `{}`", path.display()))
        })?;
        self.load_str(&source)
    }

    fn merge_table(
        &mut self,
        prefix: Option<&str>,
        table: &toml::Table,
        added: &mut usize,
    ) -> Result<()> {
        for (name, value) in table {
            let key = match prefix {
                Some(prefix) => format!("{prefix}.{name}"),
                None => name.clone(),
            };
            match value {
                toml::Value::String(sql) => {
                    self.insert(key, sql);
                    *added += 1;
                }
                toml::Value::Table(nested) => self.merge_table(Some(&key), nested, added)?,
                other => {
                    return Err(err!(
                        "statement `{key}` must be a string, got {}",
                        other.type_str()
                    ))
                }
            }
        }
        Ok(())
    }

    /// The statement registered under `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.statements
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::statement_not_found(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.statements.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Registered keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}
