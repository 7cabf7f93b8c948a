use super::Field;

#[derive(Debug)]
pub(crate) struct Entity {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Entity fields
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                ast,
                "Entity can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut errs = None;
        let mut fields = Vec::with_capacity(node.named.len());

        for (id, field) in node.named.iter().enumerate() {
            match Field::from_ast(field, id) {
                Ok(field) => fields.push(field),
                Err(err) => merge(&mut errs, err),
            }
        }

        // Two fields claiming the same column would race for one value slot,
        // so clashing overrides are rejected here rather than silently
        // resolved at runtime.
        for (index, field) in fields.iter().enumerate() {
            let Some(column) = &field.column else {
                continue;
            };
            let clash = fields[..index].iter().any(|earlier| {
                earlier.column.as_ref().is_some_and(|earlier| {
                    earlier.name.value().eq_ignore_ascii_case(&column.name.value())
                })
            });
            if clash {
                merge(
                    &mut errs,
                    syn::Error::new(
                        column.name.span(),
                        format!("duplicate #[column(\"{}\")] override", column.name.value()),
                    ),
                );
            }
        }

        if let Some(err) = errs {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}

fn merge(acc: &mut Option<syn::Error>, err: syn::Error) {
    match acc {
        Some(acc) => acc.combine(err),
        None => *acc = Some(err),
    }
}
