//! Named container aliases so `#[derive(ZmemLayout)]` can recognize a field's kind from its
//! written type path alone, the same way an argument-type parser recognizes a field's wire
//! shape from its syntactic type rather than a trait bound.
//!
//! Every alias below resolves to an ordinary standard container; the distinct names exist purely
//! for the derive macro's benefit; application code can use them interchangeably with the
//! underlying type.

/// A `VectorFixed` field: a vector whose element type is itself fixed-layout.
pub type FixedVec<T> = alloc::vec::Vec<T>;

/// A `VectorVariable` field: a vector whose element type is itself a variable-layout
/// [`zmem_traits::Encode`]/[`zmem_traits::Decode`] type (a derived struct or a [`VarMap`]).
pub type VarVec<T> = alloc::vec::Vec<T>;

/// A `MapFixed` field: sorted keys mapping to fixed-layout values.
pub type FixedMap<K, V> = alloc::collections::BTreeMap<K, V>;

/// A `MapVariable` field: sorted keys mapping to variable-layout values, carrying its own
/// 8-byte total-size header.
pub type VarMap<K, V> = alloc::collections::BTreeMap<K, V>;

/// A `VariableString` field: length-prefixed raw UTF-8 bytes.
pub type VarString = alloc::string::String;

use zmem_traits::{Kind, Layout};

/// `Vec<T>`'s inline contribution is always a 16-byte reference ("Both fields 8-byte
/// aligned"), whether `T` is fixed (`FixedVec`) or variable (`VarVec`) — the two aliases are the
/// same concrete type, so there is exactly one impl here, and `KIND` is selected by `T::KIND` at
/// compile time rather than by which alias the field happened to be written with.
unsafe impl<T: Layout> Layout for alloc::vec::Vec<T> {
    const KIND: Kind = if T::KIND.is_fixed() {
        Kind::VectorFixed
    } else {
        Kind::VectorVariable
    };
    const FIXED_SIZE: usize = 16;
    const FIXED_ALIGN: usize = 8;
}

/// A `VariableString` field's inline contribution: `offset:u64, length:u64`.
unsafe impl Layout for alloc::string::String {
    const KIND: Kind = Kind::VariableString;
    const FIXED_SIZE: usize = 16;
    const FIXED_ALIGN: usize = 8;
}
