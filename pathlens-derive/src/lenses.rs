//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, &input.generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods = named_fields.named.iter().filter_map(generate_field_lens);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn generate_field_lens(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let documentation = format!(" Returns a lens focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::pathlens::optics::Lens<Self, #field_type, Args = ()> + ::std::clone::Clone
        where
            #field_type: ::std::clone::Clone,
        {
            ::pathlens::optics::FunctionLens::new(
                |source: &Self| ::std::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand_source(source: &str) -> String {
        let input: DeriveInput = syn::parse_str(source).unwrap();
        expand(&input).to_string()
    }

    #[rstest]
    fn test_named_fields_generate_one_method_each() {
        let expanded = expand_source("struct Point { x: i32, y: i32 }");
        assert!(expanded.contains("x_lens"));
        assert!(expanded.contains("y_lens"));
        assert!(expanded.contains("FunctionLens"));
    }

    #[rstest]
    fn test_generics_are_carried_to_impl() {
        let expanded = expand_source("struct Container<T> { value: T }");
        assert!(expanded.contains("impl < T > Container < T >"));
        assert!(expanded.contains("value_lens"));
    }

    #[rstest]
    #[case("enum Shape { Circle, Square }", "not enums")]
    #[case("struct Pair(i32, i32);", "not tuple structs")]
    #[case("struct Marker;", "unit structs")]
    #[case("union Bits { integer: u32, float: f32 }", "unions")]
    fn test_unsupported_inputs_are_rejected(#[case] source: &str, #[case] message: &str) {
        let expanded = expand_source(source);
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains(message));
    }
}
