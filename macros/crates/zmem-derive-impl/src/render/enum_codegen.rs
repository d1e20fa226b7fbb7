//! Codegen for `#[derive(ZmemLayout)]` on an enum: a fieldless `#[repr(uN)]` enum
//! stored as its bare underlying integer, or a tagged union of single-field variants stored as
//! `tag (byte) + pad + max_variant_payload`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::parse::parsed_enum::ParsedEnum;

pub fn render(parsed: &ParsedEnum) -> TokenStream {
    match parsed {
        ParsedEnum::Fieldless { ident, repr, variants } => render_fieldless(ident, repr, variants),
        ParsedEnum::TaggedUnion { ident, variants } => render_tagged_union(ident, variants),
    }
}

fn render_fieldless(
    ident: &syn::Ident,
    repr: &syn::Ident,
    variants: &[crate::parse::parsed_enum::FieldlessVariant],
) -> TokenStream {
    let view_ident = format_ident!("{}View", ident);

    quote! {
        unsafe impl ::zmem::Layout for #ident {
            const KIND: ::zmem::Kind = ::zmem::Kind::Primitive;
            const FIXED_SIZE: usize = ::core::mem::size_of::<#repr>();
            const FIXED_ALIGN: usize = ::core::mem::size_of::<#repr>();
        }

        unsafe impl ::zmem::FixedEncode for #ident {
            unsafe fn write_bytes(&self, dst: *mut u8) {
                let raw = *self as #repr;
                ::core::ptr::copy_nonoverlapping(
                    raw.to_le_bytes().as_ptr(),
                    dst,
                    Self::FIXED_SIZE,
                );
            }
        }

        unsafe impl ::zmem::FixedDecode for #ident {
            unsafe fn read_bytes(src: *const u8, _offset: u64) -> ::zmem::Result<Self> {
                let mut buf = [0u8; ::core::mem::size_of::<#repr>()];
                ::core::ptr::copy_nonoverlapping(src, buf.as_mut_ptr(), buf.len());
                let raw = #repr::from_le_bytes(buf);
                // No wire validation of variant membership: a discriminant outside
                // the declared set is reinterpreted as-is rather than rejected, matching every
                // other FixedDecode impl's trust in the producer.
                Ok(unsafe { ::core::mem::transmute::<#repr, Self>(raw) })
            }
        }

        impl ::zmem::Reflect for #ident {
            const FIELDS: &'static [::zmem::Field] = &[];
        }

        #[derive(Clone, Copy)]
        pub struct #view_ident<'a>(::zmem::view::View<'a>);

        impl<'a> #view_ident<'a> {
            pub fn new(view: ::zmem::view::View<'a>) -> Self {
                Self(view)
            }

            pub fn from_bytes(bytes: &'a [u8]) -> Self {
                Self(::zmem::view::View::at(bytes, 0))
            }

            pub fn get(&self) -> ::zmem::Result<#ident> {
                self.0.field_fixed(0)
            }
        }
    }
}

fn render_tagged_union(
    ident: &syn::Ident,
    variants: &[crate::parse::parsed_enum::UnionVariant],
) -> TokenStream {
    let view_ident = format_ident!("{}View", ident);

    let align_terms = variants.iter().map(|v| {
        let ty = &v.ty;
        quote! { (<#ty as ::zmem::Layout>::FIXED_ALIGN as u64) }
    });
    let max_align = align_terms.fold(quote! { 1u64 }, |acc, term| {
        quote! { ::zmem::placement::max2(#acc, #term) }
    });

    let size_terms = variants.iter().map(|v| {
        let ty = &v.ty;
        quote! { (<#ty as ::zmem::Layout>::FIXED_SIZE as u64) }
    });
    let max_payload = size_terms.fold(quote! { 0u64 }, |acc, term| {
        quote! { ::zmem::placement::max2(#acc, #term) }
    });

    let payload_offset = quote! { (1u64 + ::zmem::placement::pad_for(1u64, #max_align)) };

    let write_arms = variants.iter().map(|v| {
        let var_ident = &v.ident;
        let ty = &v.ty;
        let tag = v.tag;
        quote! {
            Self::#var_ident(payload) => {
                dst.write(#tag);
                let at = dst.add((#payload_offset) as usize);
                unsafe { <#ty as ::zmem::FixedEncode>::write_bytes(payload, at) };
            }
        }
    });

    let read_arms = variants.iter().map(|v| {
        let var_ident = &v.ident;
        let ty = &v.ty;
        let tag = v.tag;
        quote! {
            #tag => {
                let at = src.add((#payload_offset) as usize);
                Self::#var_ident(unsafe { <#ty as ::zmem::FixedDecode>::read_bytes(at, offset + (#payload_offset))? })
            }
        }
    });

    quote! {
        unsafe impl ::zmem::Layout for #ident {
            const KIND: ::zmem::Kind = ::zmem::Kind::FixedUnion;
            const FIXED_SIZE: usize = ((#payload_offset) + #max_payload) as usize;
            const FIXED_ALIGN: usize = (#max_align) as usize;
        }

        unsafe impl ::zmem::FixedEncode for #ident {
            unsafe fn write_bytes(&self, dst: *mut u8) {
                ::core::ptr::write_bytes(dst, 0u8, Self::FIXED_SIZE);
                match self {
                    #(#write_arms)*
                }
            }
        }

        unsafe impl ::zmem::FixedDecode for #ident {
            unsafe fn read_bytes(src: *const u8, offset: u64) -> ::zmem::Result<Self> {
                let tag = src.read();
                Ok(match tag {
                    #(#read_arms)*
                    _ => return Err(::zmem::Error::new(::zmem::ErrorKind::UnknownUnionTag, offset)),
                })
            }
        }

        impl ::zmem::Reflect for #ident {
            const FIELDS: &'static [::zmem::Field] = &[];
        }

        #[derive(Clone, Copy)]
        pub struct #view_ident<'a>(::zmem::view::View<'a>);

        impl<'a> #view_ident<'a> {
            pub fn new(view: ::zmem::view::View<'a>) -> Self {
                Self(view)
            }

            pub fn from_bytes(bytes: &'a [u8]) -> Self {
                Self(::zmem::view::View::at(bytes, 0))
            }

            pub fn get(&self) -> ::zmem::Result<#ident> {
                self.0.field_fixed(0)
            }
        }
    }
}
