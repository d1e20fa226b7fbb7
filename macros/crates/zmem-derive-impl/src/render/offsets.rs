//! Shared const-expression builders for per-field placement, used by the fixed-struct
//! renderer, the variable-struct renderer's `View`, and the tagged-union renderer alike, so a
//! field's offset is computed identically no matter which aggregate kind encloses it.
//!
//! Every expression here is built from `<FieldTy as ::zmem::Layout>::{FIXED_SIZE, FIXED_ALIGN}`
//! plus `::zmem::placement::{align_up, max2}` calls, the same cumulative-sum-of-token-streams
//! idiom used for packed-struct offsets, extended with alignment padding.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

pub fn field_align(ty: &Type) -> TokenStream {
    quote! { (<#ty as ::zmem::Layout>::FIXED_ALIGN as u64) }
}

pub fn field_size(ty: &Type) -> TokenStream {
    quote! { (<#ty as ::zmem::Layout>::FIXED_SIZE as u64) }
}

/// One offset expression per field (in declaration order), plus the end-of-content cursor
/// expression after the last field, before any aggregate-level rounding.
pub struct Offsets {
    pub per_field: Vec<TokenStream>,
    pub end_cursor: TokenStream,
}

/// Runs the placement walk at the token-stream level: each field's offset is the
/// previous cursor padded up to this field's alignment, and the cursor then advances by this
/// field's size.
pub fn compute(field_types: &[Type]) -> Offsets {
    let mut per_field = Vec::with_capacity(field_types.len());
    let mut cursor: TokenStream = quote! { 0u64 };
    for ty in field_types {
        let align = field_align(ty);
        let size = field_size(ty);
        let offset = quote! { ::zmem::placement::align_up(#cursor, #align) };
        per_field.push(offset.clone());
        cursor = quote! { (#offset + #size) };
    }
    Offsets {
        per_field,
        end_cursor: cursor,
    }
}

/// The aggregate alignment: the maximum of every field's alignment.
pub fn max_align(field_types: &[Type]) -> TokenStream {
    field_types.iter().fold(quote! { 1u64 }, |acc, ty| {
        let align = field_align(ty);
        quote! { ::zmem::placement::max2(#acc, #align) }
    })
}
