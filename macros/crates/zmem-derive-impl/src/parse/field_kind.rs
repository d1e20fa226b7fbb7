//! Recognizes a struct field's wire-layout kind from its written type.
//!
//! `FixedVec<T>`/`VarVec<T>`/`FixedMap<K, V>`/`VarMap<K, V>`/`VarString` are aliases to the same
//! concrete containers (see `zmem::containers`), so there is no trait-level distinction between a
//! `FixedVec<u32>` and a `VarVec<u32>` field for Rust to dispatch on. The derive macro instead
//! reads the kind off the type path's last segment name at expansion time, recognizing a
//! field's type from its written path rather than a trait bound.

use syn::{Type, TypePath};

use crate::parse::parsing_error::ParsingError;

#[derive(Debug, Clone)]
pub enum FieldKind {
    /// A primitive, `FixedStr<N>`, `[T; N]`, or `Optional<T>` — embedded directly, no inline
    /// reference.
    Leaf,
    /// An unrecognized named type with no `#[zmem(variable)]` attribute: assumed fixed-layout,
    /// embedded directly like a `Leaf`, but its own derive gives it a nested `View`.
    NestedFixed,
    /// An unrecognized named type carrying `#[zmem(variable)]`: encoded through
    /// [`zmem_traits::Encode`]/[`zmem_traits::Decode`] behind a 16-byte inline reference.
    NestedVariable,
    /// `FixedVec<T>`.
    VectorFixed,
    /// `VarVec<T>`.
    VectorVariable,
    /// `FixedMap<K, V>`.
    MapFixed,
    /// `VarMap<K, V>`: itself a complete variable aggregate (`BTreeMap`'s own `Encode`/`Decode`
    /// impl), so it is written/read exactly like [`FieldKind::NestedVariable`].
    MapVariable,
    /// `VarString`.
    VariableString,
}

/// Names whose field accessor on a derived `View` returns the value itself rather than a nested
/// `{Ty}View` wrapper: primitives, `bool`, and the two fixed-layout wrapper types. Any other named
/// type is assumed to be a user-defined aggregate with its own derived `{Ty}View`.
const LEAF_TYPE_NAMES: &[&str] = &[
    "bool", "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128", "f32", "f64",
    "FixedStr", "Optional",
];

const CONTAINER_ALIASES: &[(&str, fn() -> FieldKind)] = &[
    ("FixedVec", || FieldKind::VectorFixed),
    ("VarVec", || FieldKind::VectorVariable),
    ("FixedMap", || FieldKind::MapFixed),
    ("VarMap", || FieldKind::MapVariable),
    ("VarString", || FieldKind::VariableString),
];

/// The last path segment's identifier, e.g. `Option` for `std::option::Option<T>`.
pub fn last_segment_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            path.segments.last().map(|segment| segment.ident.to_string())
        }
        _ => None,
    }
}

/// The angle-bracketed generic type arguments of a type's last path segment, e.g. `[T]` for
/// `FixedVec<T>` or `[K, V]` for `FixedMap<K, V>`.
pub fn generic_args(ty: &Type) -> Vec<Type> {
    let Type::Path(TypePath { path, .. }) = ty else {
        return Vec::new();
    };
    let Some(segment) = path.segments.last() else {
        return Vec::new();
    };
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Vec::new();
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            syn::GenericArgument::Type(ty) => Some(ty.clone()),
            _ => None,
        })
        .collect()
}

pub fn classify(ty: &Type, has_variable_attr: bool) -> Result<FieldKind, ParsingError> {
    match ty {
        Type::Array(_) => Ok(FieldKind::Leaf),
        Type::Path(_) => {
            let name = last_segment_name(ty).ok_or(ParsingError::UnrecognizedFieldType)?;
            if let Some((_, ctor)) = CONTAINER_ALIASES.iter().find(|(n, _)| *n == name) {
                return Ok(ctor());
            }
            if LEAF_TYPE_NAMES.contains(&name.as_str()) {
                return Ok(FieldKind::Leaf);
            }
            if has_variable_attr {
                Ok(FieldKind::NestedVariable)
            } else {
                Ok(FieldKind::NestedFixed)
            }
        }
        _ => Err(ParsingError::UnrecognizedFieldType),
    }
}

impl FieldKind {
    /// Whether this field embeds directly in the inline section (no 16-byte reference).
    pub fn is_fixed_in_parent(&self) -> bool {
        matches!(self, FieldKind::Leaf | FieldKind::NestedFixed)
    }
}
