//! Codegen for a struct with at least one vector, map, string, or `#[zmem(variable)]` nested
//! field: own 8-byte total-size header, inline section, variable section.
//!
//! Mirrors `zmem::map`'s `BTreeMap<K, V>` `Encode`/`Decode` impl, generalized from one
//! homogeneous field (a map's values) to an arbitrary heterogeneous field list: the inline
//! section is walked once reserving a 16-byte slot per variable-kind field, then the variable
//! section is appended and every reserved slot patched with its resolved offset and length.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{
    parse::{
        field_kind::{generic_args, FieldKind},
        parsed_struct::ParsedStruct,
    },
    render::{offsets, view_codegen},
};

pub fn render(parsed: &ParsedStruct) -> TokenStream {
    let ident = &parsed.ident;
    let field_types: Vec<_> = parsed.fields.iter().map(|f| f.ty.clone()).collect();
    let max_align = offsets::max_align(&field_types);
    // A variable aggregate's alignment is floored at 8: every inline reference is
    // itself 8-byte aligned, so the content region can never be narrower than that.
    let floor_align = quote! { ::zmem::placement::max2(#max_align, 8u64) };

    let mut size_cursor_stmts = Vec::new();
    let mut size_variable_stmts = Vec::new();
    let mut inline_write_stmts = Vec::new();
    let mut variable_write_stmts = Vec::new();
    let mut inline_read_stmts = Vec::new();
    let mut variable_read_stmts = Vec::new();
    let mut field_inits = Vec::new();

    for field in &parsed.fields {
        let name = &field.ident;
        let ty = &field.ty;
        let align = offsets::field_align(ty);
        let size = offsets::field_size(ty);
        let slot = format_ident!("__slot_{}", name);
        let voff = format_ident!("__voff_{}", name);
        let vref = format_ident!("__ref_{}", name);

        field_inits.push(quote! { #name });

        match &field.kind {
            FieldKind::Leaf | FieldKind::NestedFixed => {
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, #align) + #size;
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to((#align) as usize)?;
                    {
                        let mut __buf = [0u8; <#ty as ::zmem::Layout>::FIXED_SIZE];
                        unsafe { <#ty as ::zmem::FixedEncode>::write_bytes(&self.#name, __buf.as_mut_ptr()) };
                        sink.write_bytes(&__buf)?;
                    }
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, #align);
                    if __content.len() < (__cursor + #size) as usize {
                        return Err(::zmem::Error::new(::zmem::ErrorKind::UnexpectedEnd, __cursor));
                    }
                    let #name = unsafe {
                        <#ty as ::zmem::FixedDecode>::read_bytes(
                            __content.as_ptr().add(__cursor as usize),
                            __cursor,
                        )?
                    };
                    __cursor += #size;
                });
            }
            FieldKind::NestedVariable | FieldKind::MapVariable => {
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8u64) + 16u64;
                });
                size_variable_stmts.push(quote! {
                    __variable = ::zmem::placement::align_up(__variable, 8u64)
                        + ::zmem::Encode::predicted_size(&self.#name);
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #slot = sink.position();
                    sink.write_zeros(16)?;
                });
                variable_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #voff = sink.position() - __content_start;
                    ::zmem::Encode::encode(&self.#name, sink)?;
                    let __len = sink.position() - (__content_start + #voff);
                    let mut __patch = [0u8; 16];
                    __patch[0..8].copy_from_slice(&#voff.to_le_bytes());
                    __patch[8..16].copy_from_slice(&__len.to_le_bytes());
                    sink.patch(#slot, &__patch)?;
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8);
                    let #vref = ::zmem::read::read_inline_ref(__content, 0, __cursor)?;
                    __cursor += 16;
                });
                variable_read_stmts.push(quote! {
                    let __start = #vref.offset as usize;
                    let __end = __start + #vref.count_or_len as usize;
                    if __end > __content.len() {
                        return Err(::zmem::Error::new(::zmem::ErrorKind::OffsetOutOfRange, __start as u64));
                    }
                    let #name = <#ty as ::zmem::Decode>::decode(&__content[__start..__end], mode)?;
                });
            }
            FieldKind::VectorFixed => {
                let elem = generic_args(ty)
                    .into_iter()
                    .next()
                    .expect("FixedVec<T> field must name its element type");
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8u64) + 16u64;
                });
                size_variable_stmts.push(quote! {
                    __variable = ::zmem::placement::align_up(__variable, 8u64)
                        + ::zmem::payload::predict_vector_fixed::<#elem>(self.#name.len());
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #slot = sink.position();
                    sink.write_zeros(16)?;
                });
                variable_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #voff = sink.position() - __content_start;
                    ::zmem::payload::write_vector_fixed(sink, &self.#name)?;
                    let mut __patch = [0u8; 16];
                    __patch[0..8].copy_from_slice(&#voff.to_le_bytes());
                    __patch[8..16].copy_from_slice(&(self.#name.len() as u64).to_le_bytes());
                    sink.patch(#slot, &__patch)?;
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8);
                    let #vref = ::zmem::read::read_inline_ref(__content, 0, __cursor)?;
                    __cursor += 16;
                });
                variable_read_stmts.push(quote! {
                    let #name = ::zmem::read::read_vector_fixed::<#elem>(
                        __content,
                        #vref.offset,
                        #vref.count_or_len,
                    )?;
                });
            }
            FieldKind::VectorVariable => {
                let elem = generic_args(ty)
                    .into_iter()
                    .next()
                    .expect("VarVec<T> field must name its element type");
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8u64) + 16u64;
                });
                size_variable_stmts.push(quote! {
                    __variable = ::zmem::placement::align_up(__variable, 8u64)
                        + ::zmem::payload::predict_vector_variable(&self.#name);
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #slot = sink.position();
                    sink.write_zeros(16)?;
                });
                variable_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #voff = sink.position() - __content_start;
                    ::zmem::payload::write_vector_variable(sink, &self.#name)?;
                    let mut __patch = [0u8; 16];
                    __patch[0..8].copy_from_slice(&#voff.to_le_bytes());
                    __patch[8..16].copy_from_slice(&(self.#name.len() as u64).to_le_bytes());
                    sink.patch(#slot, &__patch)?;
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8);
                    let #vref = ::zmem::read::read_inline_ref(__content, 0, __cursor)?;
                    __cursor += 16;
                });
                variable_read_stmts.push(quote! {
                    let #name = ::zmem::read::read_vector_variable::<#elem>(
                        __content,
                        #vref.offset,
                        #vref.count_or_len,
                        mode,
                    )?;
                });
            }
            FieldKind::MapFixed => {
                let mut args = generic_args(ty).into_iter();
                let key = args.next().expect("FixedMap<K, V> field must name its key type");
                let val = args.next().expect("FixedMap<K, V> field must name its value type");
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8u64) + 16u64;
                });
                size_variable_stmts.push(quote! {
                    __variable = ::zmem::placement::align_up(__variable, 8u64)
                        + ::zmem::payload::predict_map_fixed::<#key, #val>(self.#name.len());
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #slot = sink.position();
                    sink.write_zeros(16)?;
                });
                variable_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #voff = sink.position() - __content_start;
                    ::zmem::payload::write_map_fixed(sink, &self.#name)?;
                    let mut __patch = [0u8; 16];
                    __patch[0..8].copy_from_slice(&#voff.to_le_bytes());
                    __patch[8..16].copy_from_slice(&(self.#name.len() as u64).to_le_bytes());
                    sink.patch(#slot, &__patch)?;
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8);
                    let #vref = ::zmem::read::read_inline_ref(__content, 0, __cursor)?;
                    __cursor += 16;
                });
                variable_read_stmts.push(quote! {
                    let #name = ::zmem::read::read_map_fixed::<#key, #val>(
                        __content,
                        #vref.offset,
                        mode,
                    )?;
                });
            }
            FieldKind::VariableString => {
                size_cursor_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8u64) + 16u64;
                });
                size_variable_stmts.push(quote! {
                    __variable = ::zmem::placement::align_up(__variable, 8u64)
                        + (self.#name.len() as u64);
                });
                inline_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #slot = sink.position();
                    sink.write_zeros(16)?;
                });
                variable_write_stmts.push(quote! {
                    sink.pad_to(8)?;
                    let #voff = sink.position() - __content_start;
                    ::zmem::payload::write_variable_string(sink, self.#name.as_bytes())?;
                    let mut __patch = [0u8; 16];
                    __patch[0..8].copy_from_slice(&#voff.to_le_bytes());
                    __patch[8..16].copy_from_slice(&(self.#name.len() as u64).to_le_bytes());
                    sink.patch(#slot, &__patch)?;
                });
                inline_read_stmts.push(quote! {
                    __cursor = ::zmem::placement::align_up(__cursor, 8);
                    let #vref = ::zmem::read::read_inline_ref(__content, 0, __cursor)?;
                    __cursor += 16;
                });
                variable_read_stmts.push(quote! {
                    let #name = ::zmem::read::read_variable_string(
                        __content,
                        #vref.offset,
                        #vref.count_or_len,
                    )?;
                });
            }
        }
    }

    let reflect_fields = parsed.fields.iter().map(|f| {
        let name = &f.ident;
        let ty = &f.ty;
        quote! {
            ::zmem::Field { name: stringify!(#name), kind: <#ty as ::zmem::Layout>::KIND },
        }
    });

    let placement = offsets::compute(&field_types);
    let view = view_codegen::render(parsed, &placement, true);

    quote! {
        unsafe impl ::zmem::Layout for #ident {
            const KIND: ::zmem::Kind = ::zmem::Kind::VariableAggregate;
            const FIXED_SIZE: usize = 16;
            const FIXED_ALIGN: usize = 8;
        }

        impl ::zmem::Encode for #ident {
            fn predicted_size(&self) -> u64 {
                let mut __cursor: u64 = 0u64;
                let mut __variable: u64 = 0u64;
                #(#size_cursor_stmts)*
                #(#size_variable_stmts)*
                let __inline = ::zmem::placement::align_up(__cursor, #floor_align);
                8 + ::zmem::placement::align_up(__inline + __variable, #floor_align)
            }

            fn encode(&self, sink: &mut dyn ::zmem::Sink) -> ::zmem::Result<()> {
                let __total = ::zmem::Encode::predicted_size(self) - 8;
                let __header_at = sink.position();
                sink.write_bytes(&0u64.to_le_bytes())?;
                let __content_start = sink.position();

                #(#inline_write_stmts)*
                sink.pad_to((#floor_align) as usize)?;

                let __variable_start = sink.position();
                #(#variable_write_stmts)*
                sink.pad_to((#floor_align) as usize)?;

                let __content_len = sink.position() - __content_start;
                debug_assert_eq!(
                    __content_len, __total,
                    "predicted size disagreed with writer output",
                );
                sink.patch(__header_at, &__content_len.to_le_bytes())?;
                Ok(())
            }
        }

        impl ::zmem::Decode for #ident {
            fn decode_at(bytes: &[u8], offset: u64, mode: ::zmem::ReadMode) -> ::zmem::Result<Self> {
                let __at = offset as usize;
                if bytes.len() < __at + 8 {
                    return Err(::zmem::Error::new(::zmem::ErrorKind::UnexpectedEnd, offset));
                }
                let __content_len = u64::from_le_bytes(bytes[__at..__at + 8].try_into().unwrap());
                let __content_start = __at + 8;
                if (bytes.len() - __content_start) < __content_len as usize {
                    return Err(::zmem::Error::new(::zmem::ErrorKind::SizeHeaderMismatch, offset));
                }
                let __content = &bytes[__content_start..__content_start + __content_len as usize];

                let mut __cursor: u64 = 0u64;
                #(#inline_read_stmts)*
                #(#variable_read_stmts)*

                Ok(Self {
                    #(#field_inits),*
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
