use syn::{Attribute, Data, DataStruct, DeriveInput, Fields, Ident, Type, Visibility};

use crate::parse::{
    field_kind::{classify, FieldKind},
    parsing_error::ParsingError,
};

/// One field's name, written type, and recognized wire-layout kind.
pub struct ParsedField {
    pub ident: Ident,
    pub ty: Type,
    pub kind: FieldKind,
}

/// Whether a struct's inline section embeds every field directly (`Fixed`), or contains at
/// least one 16-byte reference into a variable section (`Variable`): fixed iff every field is
/// fixed, variable iff any field is a vector, map, string, or variable nested aggregate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StructShape {
    Fixed,
    Variable,
}

/// The validated, parsed struct: its identifier, visibility, and classified field list.
pub struct ParsedStruct {
    pub ident: Ident,
    pub vis: Visibility,
    pub fields: Vec<ParsedField>,
    pub shape: StructShape,
}

fn has_variable_attr(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("zmem") {
            return false;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("variable") {
                found = true;
            }
            Ok(())
        });
        found
    })
}

impl ParsedStruct {
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) = &input.data
        else {
            return Err(ParsingError::NamedFieldsOnly.new_err(&input.ident));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| ParsingError::NamedFieldsOnly.new_err(field))?;
            let kind = classify(&field.ty, has_variable_attr(&field.attrs))
                .map_err(|err| err.new_err(field))?;
            fields.push(ParsedField {
                ident,
                ty: field.ty.clone(),
                kind,
            });
        }

        let shape = if fields.iter().all(|field| field.kind.is_fixed_in_parent()) {
            StructShape::Fixed
        } else {
            StructShape::Variable
        };

        Ok(Self {
            ident: input.ident.clone(),
            vis: input.vis.clone(),
            fields,
            shape,
        })
    }
}
