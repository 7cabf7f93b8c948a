pub mod db;
pub use db::Db;

mod entity;
pub use entity::{Entity, EntityDescriptor, FieldDescriptor};

mod macros;

pub mod mapper;
pub use mapper::{Binding, BindingCache};

mod registry;
pub use registry::StatementRegistry;

mod scalar;
pub use scalar::Scalar;

pub use tug_macros::Entity;

pub use tug_core::{bail, driver, err, Error, Result, Row, RowSet, Type, Value};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        entity::{Entity, EntityDescriptor, FieldDescriptor},
        mapper::{load_field, Binding},
        scalar::Scalar,
    };
    pub use std::{default::Default, option::Option, result::Result::Ok};
    pub use tug_core::{Result, Row};
}
