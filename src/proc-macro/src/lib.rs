use proc_macro::TokenStream;

use proc_macro2::Span;
use syn::{Error, Lit, LitInt, Meta, NestedMeta, Result};
use syn::{parse_macro_input, DeriveInput};

/// Implements `actor_bag::Component` for the annotated type.
///
/// The identifier is given by the `component` attribute:
///
/// ```ignore
/// #[derive(Default, Component)]
/// #[component(id = 1)]
/// struct Health(u32);
/// ```
#[proc_macro_derive(Component, attributes(component))]
pub fn component_macro_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match expand(&ast) {
        Ok(gen) => TokenStream::from(gen),
        Err(error) => TokenStream::from(error.to_compile_error()),
    }
}

fn expand(ast: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let name = &ast.ident;
    let id = component_id(ast)?;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let gen = quote::quote! {
        impl #impl_generics ::actor_bag::Component for #name #ty_generics #where_clause {
            const ID: ::actor_bag::ComponentId = #id;
        }
    };
    Ok(gen)
}

fn component_id(ast: &DeriveInput) -> Result<u32> {
    let mut ids: Vec<(u32, LitInt)> = Vec::new();
    for attr in ast.attrs.iter().filter(|attr| attr.path.is_ident("component")) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            meta => return Err(Error::new_spanned(meta, "expected `#[component(id = ...)]`")),
        };
        for nested in list.nested.iter() {
            match nested {
                NestedMeta::Meta(Meta::NameValue(pair)) if pair.path.is_ident("id") => {
                    match &pair.lit {
                        Lit::Int(lit) => ids.push((lit.base10_parse()?, lit.clone())),
                        lit => {
                            return Err(Error::new_spanned(lit, "component id must be an integer"))
                        }
                    }
                }
                nested => return Err(Error::new_spanned(nested, "expected `id = ...`")),
            }
        }
    }
    match ids.as_slice() {
        [] => Err(Error::new(
            Span::call_site(),
            "type must be annotated with `#[component(id = ...)]`",
        )),
        [(id, _)] => Ok(*id),
        [_, (_, lit), ..] => Err(Error::new_spanned(lit, "there must be unique component id")),
    }
}
