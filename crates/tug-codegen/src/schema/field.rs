use super::Column;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the containing entity
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Optional column-name override
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "entity fields must be named",
            ));
        };

        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                }
                column = Some(Column::from_ast(attr)?);
            }
        }

        Ok(Self {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }
}
