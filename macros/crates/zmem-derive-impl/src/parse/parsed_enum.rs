use syn::{Data, DataEnum, DeriveInput, Fields, Ident, Type};

use crate::parse::{parsing_error::ParsingError, require_repr::repr_ident};

/// A fieldless enum variant and its discriminant expression ("Fieldless enum (repr
/// uN): Stored as the underlying integer; no variant validation").
pub struct FieldlessVariant {
    pub ident: Ident,
    pub discriminant: syn::Expr,
}

/// A tagged-union variant: a name, its single payload type, and its wire tag byte.
pub struct UnionVariant {
    pub ident: Ident,
    pub ty: Type,
    pub tag: u8,
}

/// Either shape `#[derive(ZmemLayout)]` recognizes on an enum.
pub enum ParsedEnum {
    /// Every variant is fieldless; stored as a bare `#[repr(uN)]` integer.
    Fieldless {
        ident: Ident,
        repr: Ident,
        variants: Vec<FieldlessVariant>,
    },
    /// Every variant wraps exactly one fixed-layout field; stored as `Tag (byte) +
    /// max_variant_payload`. A variant with a variable-layout payload is rejected —
    /// `VariableUnion` has no single compile-time width, so it falls outside what this derive
    /// can generate.
    TaggedUnion {
        ident: Ident,
        variants: Vec<UnionVariant>,
    },
}

impl ParsedEnum {
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Enum(DataEnum { variants, .. }) = &input.data else {
            return Err(ParsingError::NotAStructOrEnum.new_err(&input.ident));
        };
        if variants.is_empty() {
            return Err(ParsingError::EmptyEnum.new_err(&input.ident));
        }

        let all_fieldless = variants.iter().all(|variant| matches!(variant.fields, Fields::Unit));
        if all_fieldless {
            let repr = repr_ident(&input.attrs).map_err(|err| err.new_err(&input.ident))?;
            let mut next: u64 = 0;
            let mut parsed = Vec::with_capacity(variants.len());
            for variant in variants {
                let discriminant = match &variant.discriminant {
                    Some((_, expr)) => {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: syn::Lit::Int(int),
                            ..
                        }) = expr
                        {
                            next = int.base10_parse::<u64>().unwrap_or(next);
                        }
                        expr.clone()
                    }
                    None => {
                        let literal = proc_macro2::Literal::u64_unsuffixed(next);
                        syn::parse_quote!(#literal)
                    }
                };
                parsed.push(FieldlessVariant {
                    ident: variant.ident.clone(),
                    discriminant,
                });
                next += 1;
            }
            return Ok(ParsedEnum::Fieldless {
                ident: input.ident.clone(),
                repr,
                variants: parsed,
            });
        }

        let mut parsed = Vec::with_capacity(variants.len());
        for (index, variant) in variants.iter().enumerate() {
            let Fields::Unnamed(unnamed) = &variant.fields else {
                return Err(ParsingError::TaggedUnionVariantNeedsExactlyOneField.new_err(variant));
            };
            if unnamed.unnamed.len() != 1 {
                return Err(ParsingError::TaggedUnionVariantNeedsExactlyOneField.new_err(variant));
            }
            let ty = unnamed.unnamed[0].ty.clone();
            let tag: u8 = index
                .try_into()
                .map_err(|_| ParsingError::TooManyVariants.new_err(variant))?;
            parsed.push(UnionVariant {
                ident: variant.ident.clone(),
                ty,
                tag,
            });
        }

        Ok(ParsedEnum::TaggedUnion {
            ident: input.ident.clone(),
            variants: parsed,
        })
    }
}
