//! The proc-macro entrypoint for `#[derive(ZmemLayout)]`. Parsing and codegen live in
//! `zmem-derive-impl`, kept separate so that crate is plain, unit-testable Rust rather than a
//! `proc-macro = true` crate.

use syn::{parse_macro_input, DeriveInput};

/// Derives [`zmem::Layout`], [`zmem::FixedEncode`]/[`zmem::FixedDecode`] or
/// [`zmem::Encode`]/[`zmem::Decode`] (depending on whether the type is fixed- or
/// variable-layout), [`zmem::Reflect`], and a `{Ident}View` lazy accessor type.
///
/// Accepts an optional `#[zmem(variable)]` attribute on struct fields whose type isn't
/// recognized as a primitive or container alias, marking it as a nested variable-layout
/// aggregate rather than a nested fixed one.
#[proc_macro_derive(ZmemLayout, attributes(zmem))]
pub fn zmem_layout(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match zmem_derive_impl::derive_zmem_layout(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
