use crate::{mapper::Binding, Type};

use tug_core::{Result, Row};

/// A type that result rows can be mapped into.
///
/// Implemented by `#[derive(Entity)]`; the `Default` bound is the
/// construction contract — each row starts from `Self::default()` and bound
/// fields are overwritten. Hand-written implementations that cannot produce
/// an instance should fail with [`Error::construction`].
///
/// [`Error::construction`]: tug_core::Error::construction
pub trait Entity: Default + 'static {
    /// The field table of this type, computed at compile time.
    fn descriptor() -> &'static EntityDescriptor;

    /// Populates one instance from `row` using a resolved `binding`.
    fn load(row: &Row, binding: &Binding) -> Result<Self>;
}

/// Describes a mappable type: its name and settable fields.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Describes one settable field of an entity.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field name as declared in the struct
    pub name: &'static str,

    /// Explicit column-name override from `#[column("...")]`
    pub column: Option<&'static str>,

    /// Declared value type
    pub ty: Type,
}
