//! Renders a parsed `#[derive(ZmemLayout)]` input into its generated `Layout`/`FixedEncode`/
//! `FixedDecode`/`Encode`/`Decode`/`Reflect` impls and accompanying `{Ident}View`.

mod enum_codegen;
pub mod offsets;
mod struct_fixed;
mod struct_variable;
mod view_codegen;

use proc_macro2::TokenStream;
use syn::DeriveInput;

use crate::parse::{
    parsed_enum::ParsedEnum,
    parsed_struct::{ParsedStruct, StructShape},
    parsing_error::ParsingError,
};

/// Dispatches on the parsed shape of `input`: a fixed or variable struct, or a fieldless/tagged
/// union enum, each handled by its own renderer.
pub fn render(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        syn::Data::Struct(_) => {
            let parsed = ParsedStruct::from_derive_input(input)?;
            Ok(match parsed.shape {
                StructShape::Fixed => struct_fixed::render(&parsed),
                StructShape::Variable => struct_variable::render(&parsed),
            })
        }
        syn::Data::Enum(_) => {
            let parsed = ParsedEnum::from_derive_input(input)?;
            Ok(enum_codegen::render(&parsed))
        }
        syn::Data::Union(_) => Err(ParsingError::NotAStructOrEnum.new_err(&input.ident)),
    }
}
