mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let input: syn::DeriveInput = syn::parse2(input)?;
    let entity = schema::Entity::from_ast(&input)?;
    Ok(expand::entity(&entity))
}
