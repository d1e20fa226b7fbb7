//! ZMEM: a binary serialization codec whose wire layout mirrors in-memory representation for
//! fixed aggregates, and adds a disciplined offset-table layout for variable payloads.
//!
//! `#![no_std]`, `alloc`-backed: owning containers (`Vec`, `String`, `BTreeMap`) live in the
//! variable-layout path; the fixed-layout path never allocates. Enable the `std` feature for
//! `Display`/`std::error::Error` on [`Error`]; enable `derive` (on by default) for
//! `#[derive(ZmemLayout)]`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod api;
pub mod array;
pub mod containers;
pub mod fixed_str;
pub mod map;
pub mod optional;
pub mod payload;
pub mod placement;
pub mod predict;
pub mod read;
pub mod view;
pub mod write;

pub use zmem_traits::{
    Decode, Encode, Error, ErrorKind, Field, FixedDecode, FixedEncode, InlineRef, Kind, Layout,
    ReadMode, Reflect, Result, Sink,
};

pub use api::{
    read_fixed_value as read_fixed, read_variable_value as read_variable, read_variable_with_mode,
    size_fixed, size_variable, view, write_fixed, write_fixed_preallocated, write_variable,
    write_variable_preallocated,
};
pub use containers::{FixedMap, FixedVec, VarMap, VarString, VarVec};
pub use fixed_str::FixedStr;
pub use optional::Optional;
pub use write::{GrowingSink, Preallocated};

#[cfg(feature = "derive")]
pub use zmem_derive::ZmemLayout;

// The 16-byte inline-reference shape is load-bearing for every offset computation in
// this crate; a padding or field-order regression in `InlineRef` would silently corrupt every
// variable aggregate written afterward. Pin it down with a const assertion rather than trust it.
static_assertions::const_assert_eq!(core::mem::size_of::<InlineRef>(), 16);
static_assertions::const_assert_eq!(core::mem::align_of::<InlineRef>(), 8);
