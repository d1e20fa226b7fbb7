//! Parsing and code-generation internals for `#[derive(ZmemLayout)]`, split out from the
//! thin `zmem-derive` proc-macro entrypoint crate so its types and logic stay unit-testable
//! without a `proc-macro = true` crate's restrictions.

pub mod parse;
pub mod render;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses and renders one `#[derive(ZmemLayout)]` invocation.
pub fn derive_zmem_layout(input: DeriveInput) -> syn::Result<TokenStream> {
    render::render(&input)
}
