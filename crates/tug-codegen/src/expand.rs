use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for tug types
    tug: TokenStream,
}

pub(crate) fn entity(entity: &Entity) -> TokenStream {
    let expand = Expand {
        entity,
        tug: quote!(_tug::codegen_support),
    };

    let entity_impl = expand.expand_entity_impl();

    quote! {
        const _: () = {
            use tug as _tug;
            #entity_impl
        };
    }
}

impl Expand<'_> {
    fn expand_entity_impl(&self) -> TokenStream {
        let tug = &self.tug;
        let ident = &self.entity.ident;
        let name = ident.to_string();
        let field_descriptors = self.expand_field_descriptors();
        let load_fields = self.expand_load_fields();

        quote! {
            impl #tug::Entity for #ident {
                fn descriptor() -> &'static #tug::EntityDescriptor {
                    static DESCRIPTOR: #tug::EntityDescriptor = #tug::EntityDescriptor {
                        name: #name,
                        fields: &[#(#field_descriptors),*],
                    };
                    &DESCRIPTOR
                }

                fn load(row: &#tug::Row, binding: &#tug::Binding) -> #tug::Result<Self> {
                    let mut entity = <Self as #tug::Default>::default();
                    #(#load_fields)*
                    #tug::Ok(entity)
                }
            }
        }
    }

    fn expand_field_descriptors(&self) -> Vec<TokenStream> {
        let tug = &self.tug;

        self.entity
            .fields
            .iter()
            .map(|field| {
                let name = field.ident.to_string();
                let ty = &field.ty;
                let column = match &field.column {
                    Some(column) => {
                        let name = &column.name;
                        quote!(#tug::Option::Some(#name))
                    }
                    None => quote!(#tug::Option::None),
                };

                quote! {
                    #tug::FieldDescriptor {
                        name: #name,
                        column: #column,
                        ty: <#ty as #tug::Scalar>::TYPE,
                    }
                }
            })
            .collect()
    }

    fn expand_load_fields(&self) -> Vec<TokenStream> {
        let tug = &self.tug;
        let entity_name = self.entity.ident.to_string();

        self.entity
            .fields
            .iter()
            .map(|field| {
                let id = field.id;
                let ident = &field.ident;
                let name = ident.to_string();

                quote! {
                    #tug::load_field(row, binding, #id, #entity_name, #name, &mut entity.#ident)?;
                }
            })
            .collect()
    }
}
