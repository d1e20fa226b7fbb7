use crate::kind::Kind;

/// Compile-time classification of a type into the ZMEM layout algebra.
///
/// # Safety
///
/// Implementors guarantee:
/// - `KIND` accurately describes the wire shape this type produces.
/// - When `KIND.is_fixed()`, `FIXED_SIZE` is the exact number of bytes a value of this type
///   occupies inline (before any aggregate-level trailing padding) and `FIXED_ALIGN` is its
///   required alignment; both are exact compile-time constants, never a runtime estimate.
/// - When `!KIND.is_fixed()`, `FIXED_SIZE` is the size of the type's *inline* contribution to an
///   enclosing aggregate (16 for a vector/map/string inline reference), and `FIXED_ALIGN` is that
///   contribution's alignment (always 8 — both fields of an inline reference are 8-byte aligned).
pub unsafe trait Layout {
    const KIND: Kind;
    const FIXED_SIZE: usize;
    const FIXED_ALIGN: usize;
}

/// The 16-byte inline reference placed for every variable field.
///
/// `count_or_len` holds a vector/map's element count for [`Kind::VectorFixed`] /
/// [`Kind::VectorVariable`] / [`Kind::MapFixed`] / [`Kind::MapVariable`] fields, or a string's
/// byte length for [`Kind::VariableString`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct InlineRef {
    pub offset: u64,
    pub count_or_len: u64,
}

unsafe impl Layout for InlineRef {
    const KIND: Kind = Kind::FixedAggregate;
    const FIXED_SIZE: usize = 16;
    const FIXED_ALIGN: usize = 8;
}
