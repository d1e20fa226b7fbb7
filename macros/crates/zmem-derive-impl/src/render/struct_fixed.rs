//! Codegen for a struct whose fields are all [`crate::parse::field_kind::FieldKind::Leaf`] or
//! [`crate::parse::field_kind::FieldKind::NestedFixed`] ("Fixed iff every field is
//! fixed").
//!
//! Every field is written and read through its own [`zmem_traits::FixedEncode`]/
//! [`zmem_traits::FixedDecode`] impl rather than a whole-struct `memcpy`: Rust's own in-memory
//! layout for the struct isn't guaranteed to match the wire layout (uninitialized padding bytes,
//! `Optional<T>`'s present-flag byte), so only the field-level trait impls are trusted to produce
//! canonical, deterministic bytes.

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    parse::parsed_struct::ParsedStruct,
    render::{offsets, view_codegen},
};

pub fn render(parsed: &ParsedStruct) -> TokenStream {
    let ident = &parsed.ident;
    let field_idents: Vec<_> = parsed.fields.iter().map(|f| f.ident.clone()).collect();
    let field_types: Vec<_> = parsed.fields.iter().map(|f| f.ty.clone()).collect();

    let placement = offsets::compute(&field_types);
    let field_offsets = &placement.per_field;
    let end_cursor = &placement.end_cursor;
    let max_align = offsets::max_align(&field_types);

    let write_stmts = field_idents.iter().zip(field_types.iter()).zip(field_offsets.iter()).map(
        |((name, ty), offset)| {
            quote! {
                unsafe {
                    <#ty as ::zmem::FixedEncode>::write_bytes(
                        &self.#name,
                        dst.add((#offset) as usize),
                    )
                };
            }
        },
    );

    let read_stmts = field_idents.iter().zip(field_types.iter()).zip(field_offsets.iter()).map(
        |((name, ty), offset)| {
            quote! {
                #name: unsafe {
                    <#ty as ::zmem::FixedDecode>::read_bytes(
                        src.add((#offset) as usize),
                        offset + (#offset),
                    )?
                },
            }
        },
    );

    let reflect_fields = field_idents.iter().zip(field_types.iter()).map(|(name, ty)| {
        quote! {
            ::zmem::Field { name: stringify!(#name), kind: <#ty as ::zmem::Layout>::KIND },
        }
    });

    let view = view_codegen::render(parsed, &placement, false);

    quote! {
        unsafe impl ::zmem::Layout for #ident {
            const KIND: ::zmem::Kind = ::zmem::Kind::FixedAggregate;
            const FIXED_SIZE: usize = ::zmem::placement::align_up(#end_cursor, #max_align) as usize;
            const FIXED_ALIGN: usize = (#max_align) as usize;
        }

        unsafe impl ::zmem::FixedEncode for #ident {
            unsafe fn write_bytes(&self, dst: *mut u8) {
                ::core::ptr::write_bytes(dst, 0u8, Self::FIXED_SIZE);
                #(#write_stmts)*
            }
        }

        unsafe impl ::zmem::FixedDecode for #ident {
            unsafe fn read_bytes(src: *const u8, offset: u64) -> ::zmem::Result<Self> {
                Ok(Self {
                    #(#read_stmts)*
                })
            }
        }

        impl ::zmem::Reflect for #ident {
            const FIELDS: &'static [::zmem::Field] = &[
                #(#reflect_fields)*
            ];
        }

        #view
    }
}
