//! Generates `#[derive(ZmemLayout)]`'s per-type `{Ident}View<'a>`: a thin typed
//! wrapper over [`zmem::view::View`] whose accessors call the untyped primitives at each field's
//! placement, computed once by [`crate::render::offsets::compute`].
//!
//! Map fields get no accessor: fixed/variable scalars, vectors, and strings can all be read
//! lazily, but a map's value still requires walking its sorted entries to locate, which isn't a
//! meaningfully "lazy" operation the way a vector's `element(i)` is, so a map field is accessed
//! by decoding the owning aggregate instead.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type};

use crate::{
    parse::{
        field_kind::{generic_args, last_segment_name, FieldKind},
        parsed_struct::ParsedStruct,
    },
    render::offsets::Offsets,
};

fn view_type_ident(ty: &Type) -> Ident {
    let name = last_segment_name(ty).unwrap_or_else(|| "Unknown".into());
    format_ident!("{}View", name)
}

pub fn render(parsed: &ParsedStruct, placement: &Offsets, is_variable: bool) -> TokenStream {
    let ident = &parsed.ident;
    let view_ident = format_ident!("{}View", ident);

    let mut accessors = Vec::with_capacity(parsed.fields.len());
    for (field, offset) in parsed.fields.iter().zip(placement.per_field.iter()) {
        let name = &field.ident;
        let ty = &field.ty;
        let accessor = match &field.kind {
            FieldKind::Leaf => quote! {
                pub fn #name(&self) -> ::zmem::Result<#ty> {
                    self.0.field_fixed(#offset)
                }
            },
            FieldKind::NestedFixed => {
                let nested_view = view_type_ident(ty);
                quote! {
                    pub fn #name(&self) -> #nested_view<'a> {
                        #nested_view::new(self.0.field_nested_fixed(#offset))
                    }
                }
            }
            FieldKind::NestedVariable | FieldKind::MapVariable => {
                let nested_view = view_type_ident(ty);
                quote! {
                    pub fn #name(&self) -> ::zmem::Result<#nested_view<'a>> {
                        Ok(#nested_view::new(self.0.field_nested_variable(#offset)?))
                    }
                }
            }
            FieldKind::VectorFixed => {
                let elem = generic_args(ty)
                    .into_iter()
                    .next()
                    .expect("FixedVec<T> field must name its element type");
                quote! {
                    pub fn #name(&self) -> ::zmem::Result<::zmem::view::FixedSpan<'a, #elem>> {
                        self.0.field_vector_fixed(#offset)
                    }
                }
            }
            FieldKind::VectorVariable => {
                let elem = generic_args(ty)
                    .into_iter()
                    .next()
                    .expect("VarVec<T> field must name its element type");
                quote! {
                    pub fn #name(&self) -> ::zmem::Result<::zmem::view::VariableSpan<'a, #elem>> {
                        self.0.field_vector_variable(#offset)
                    }
                }
            }
            FieldKind::VariableString => quote! {
                pub fn #name(&self) -> ::zmem::Result<&'a [u8]> {
                    self.0.field_string(#offset)
                }
            },
            FieldKind::MapFixed => continue,
        };
        accessors.push(accessor);
    }

    let constructor = if is_variable {
        quote! {
            pub fn from_bytes(bytes: &'a [u8]) -> ::zmem::Result<Self> {
                Ok(Self(::zmem::view(bytes)?))
            }
        }
    } else {
        quote! {
            pub fn from_bytes(bytes: &'a [u8]) -> Self {
                Self(::zmem::view::View::at(bytes, 0))
            }
        }
    };

    quote! {
        #[derive(Clone, Copy)]
        pub struct #view_ident<'a>(::zmem::view::View<'a>);

        impl<'a> #view_ident<'a> {
            pub fn new(view: ::zmem::view::View<'a>) -> Self {
                Self(view)
            }

            #constructor

            #(#accessors)*
        }
    }
}
