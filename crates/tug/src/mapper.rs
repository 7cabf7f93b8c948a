//! The row-to-object mapping engine.
//!
//! Column-to-field resolution runs once per (entity type, column set) and is
//! cached in a [`BindingCache`]; every row of the same result reuses the
//! resolved [`Binding`].

use crate::{Entity, EntityDescriptor, Scalar};

use tug_core::{Error, Result, Row, RowSet, Value};

use heck::ToShoutySnakeCase;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// The resolved pairing of entity fields to result columns.
///
/// One slot per descriptor field, holding the claimed column index or `None`
/// for unbound fields.
#[derive(Debug, PartialEq)]
pub struct Binding {
    fields: Box<[Option<usize>]>,
}

impl Binding {
    /// Resolves `descriptor` against a result's column names.
    ///
    /// Per field, in order: the explicit `#[column]` override, the declared
    /// name converted to upper snake case, the declared name verbatim — all
    /// matched case-insensitively. A column claimed by an earlier field is
    /// withheld from later fields, so at most one field binds to any column.
    /// Fields that match nothing stay unbound.
    pub fn resolve(descriptor: &EntityDescriptor, columns: &[String]) -> Self {
        let mut claimed = vec![false; columns.len()];
        let fields = descriptor
            .fields
            .iter()
            .map(|field| {
                let index = match field.column {
                    Some(column) => find_column(columns, &claimed, column),
                    None => {
                        let derived = field.name.to_shouty_snake_case();
                        find_column(columns, &claimed, &derived)
                            .or_else(|| find_column(columns, &claimed, field.name))
                    }
                };
                if let Some(index) = index {
                    claimed[index] = true;
                }
                index
            })
            .collect();
        Self { fields }
    }

    /// The column index bound to descriptor field `field`, if any.
    pub fn field(&self, field: usize) -> Option<usize> {
        self.fields.get(field).copied().flatten()
    }

    /// Number of fields with a bound column.
    pub fn bound(&self) -> usize {
        self.fields.iter().filter(|index| index.is_some()).count()
    }
}

fn find_column(columns: &[String], claimed: &[bool], name: &str) -> Option<usize> {
    columns
        .iter()
        .zip(claimed)
        .position(|(column, claimed)| !claimed && column.eq_ignore_ascii_case(name))
}

#[derive(Hash, PartialEq, Eq)]
struct BindingKey {
    entity: TypeId,
    columns: Arc<[String]>,
}

/// Process-wide cache of resolved bindings, keyed by entity type and column
/// set.
///
/// Safe under concurrent reads and occasional first-time writes. Racing
/// executions may resolve the same binding twice; the result is
/// deterministic, so the duplicate insert is harmless and resolution is not
/// serialized.
#[derive(Default)]
pub struct BindingCache {
    inner: RwLock<HashMap<BindingKey, Arc<Binding>>>,
}

impl BindingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The binding for entity `T` against `columns`, resolving and caching
    /// it on first use.
    pub fn resolve<T: Entity>(&self, columns: &Arc<[String]>) -> Arc<Binding> {
        let key = BindingKey {
            entity: TypeId::of::<T>(),
            columns: columns.clone(),
        };

        if let Some(binding) = self.inner.read().unwrap().get(&key) {
            return binding.clone();
        }

        let descriptor = T::descriptor();
        let binding = Arc::new(Binding::resolve(descriptor, columns));
        tracing::debug!(
            entity = descriptor.name,
            bound = binding.bound(),
            columns = columns.len(),
            "resolved field binding"
        );

        self.inner
            .write()
            .unwrap()
            .entry(key)
            .or_insert(binding)
            .clone()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }
}

/// Maps one row into an instance of `T`.
pub fn map_row<T: Entity>(row: &Row, binding: &Binding) -> Result<T> {
    T::load(row, binding)
}

/// Maps every row into an instance of `T`, preserving row order.
///
/// The first coercion failure aborts the whole result.
pub fn map_rows<T: Entity>(rows: RowSet, cache: &BindingCache) -> Result<Vec<T>> {
    let binding = cache.resolve::<T>(rows.columns());
    rows.into_iter()
        .map(|row| T::load(&row, &binding))
        .collect()
}

/// Maps the first row into an instance of `T`, or `None` for an empty
/// result.
pub fn map_first<T: Entity>(rows: &RowSet, cache: &BindingCache) -> Result<Option<T>> {
    let Some(row) = rows.first() else {
        return Ok(None);
    };
    let binding = cache.resolve::<T>(rows.columns());
    T::load(row, &binding).map(Some)
}

/// Reads the first column of `row` by position and coerces it.
pub fn single_scalar<S: Scalar>(row: &Row) -> Result<S> {
    let Some(value) = row.value(0) else {
        return Err(Error::invalid_result("result row has no columns"));
    };
    S::load(value.clone())
}

/// Reads the column named `column` from every row and coerces each value,
/// preserving row order.
pub fn scalar_column<S: Scalar>(rows: &RowSet, column: &str) -> Result<Vec<S>> {
    let Some(index) = rows.position(column) else {
        return Err(Error::invalid_result(format!(
            "column `{column}` not present in result"
        )));
    };
    rows.rows()
        .iter()
        .map(|row| {
            let value = row.value(index).cloned().unwrap_or(Value::Null);
            S::load(value)
        })
        .collect()
}

/// Populates one entity field from its bound column, if any.
///
/// Called by derived [`Entity::load`] implementations. Unbound fields and
/// null cells leave the slot at the value it got from `Default`.
pub fn load_field<S: Scalar>(
    row: &Row,
    binding: &Binding,
    field: usize,
    entity: &'static str,
    name: &'static str,
    slot: &mut S,
) -> Result<()> {
    let Some(column) = binding.field(field) else {
        return Ok(());
    };
    let Some(value) = row.value(column) else {
        return Ok(());
    };
    if value.is_null() {
        return Ok(());
    }

    *slot = S::load(value.clone()).map_err(|err| {
        err.context(Error::mapping(
            entity,
            name,
            row.columns()[column].as_str(),
            value.infer_ty(),
            S::TYPE.name(),
        ))
    })?;
    Ok(())
}
