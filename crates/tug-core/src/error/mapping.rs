use super::Error;
use crate::Type;

/// Error when a column value cannot be coerced into an entity field.
#[derive(Debug)]
pub(super) struct MappingError {
    pub(super) entity: &'static str,
    pub(super) field: &'static str,
    pub(super) column: String,
    pub(super) from: Type,
    pub(super) to: &'static str,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot map column `{}` to field `{}.{}`: column value is {:?}, field expects {}",
            self.column, self.entity, self.field, self.from, self.to
        )
    }
}

impl Error {
    /// Creates an error for a column/field pair whose types do not admit a
    /// coercion. Aborts the query it occurs in.
    pub fn mapping(
        entity: &'static str,
        field: &'static str,
        column: impl Into<String>,
        from: Type,
        to: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            entity,
            field,
            column: column.into(),
            from,
            to,
        }))
    }
}
