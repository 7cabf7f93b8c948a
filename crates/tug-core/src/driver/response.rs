use crate::{Result, RowSet};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as materialized rows
    Values(RowSet),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn row_set(rows: impl Into<RowSet>) -> Self {
        Self {
            rows: Rows::Values(rows.into()),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            Self::Values(_) => Err(crate::Error::invalid_result(
                "expected affected-row count, got rows",
            )),
        }
    }

    pub fn into_values(self) -> Result<RowSet> {
        match self {
            Self::Values(values) => Ok(values),
            Self::Count(_) => Err(crate::Error::invalid_result(
                "expected rows, got affected-row count",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_response() {
        let response = Response::count(3);
        assert!(response.rows.is_count());
        assert_eq!(response.rows.into_count().unwrap(), 3);
    }

    #[test]
    fn shape_mismatch() {
        let err = Response::count(3).rows.into_values().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid result: expected rows, got affected-row count"
        );
    }
}
