//! A round-trip benchmark composite: fixed arrays of `int32`/`float`/`double`, five
//! fixed-name strings, an escaped-text string, a nested vector of `Vec3`, and a string array.
//!
//! A bare `VarVec<String>` isn't expressible through the derive: `VectorVariable`'s element type
//! must implement [`zmem::Encode`]/[`zmem::Decode`] as a self-contained sub-aggregate (its own
//! 8-byte size header), and a raw [`zmem::VarString`] field only ever carries a 16-byte inline
//! reference into its *parent's* variable section, not a header of its own. [`Label`] closes that
//! gap: one-field wrapper structs are exactly how the derive already models "a variable thing
//! nested inside a vector", so the "string array" field here is `VarVec<Label>`.

use zmem::{FixedStr, FixedVec, VarString, VarVec, ZmemLayout};

use crate::geometry::Vec3;

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Label {
    pub text: VarString,
}

#[derive(Clone, Debug, PartialEq, ZmemLayout)]
pub struct Composite {
    pub ints: [i32; 4],
    pub floats: [f32; 4],
    pub doubles: [f64; 4],
    pub names: [FixedStr<16>; 5],
    pub description: VarString,
    pub positions: FixedVec<Vec3>,
    pub tags: VarVec<Label>,
}
