/// The closed set of wire-layout kinds a ZMEM field can have.
///
/// Every writer, reader, and view code path dispatches on this enum rather than on a trait-object
/// hierarchy: the layout algebra is small and fixed, so a tagged variant is cheaper and more
/// legible than virtual dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Primitive,
    FixedString,
    FixedArray,
    FixedAggregate,
    OptionalFixed,
    VectorFixed,
    VectorVariable,
    VariableString,
    MapFixed,
    MapVariable,
    VariableAggregate,
    FixedUnion,
    VariableUnion,
}

impl Kind {
    /// Whether values of this kind have a size known entirely at compile time.
    #[inline(always)]
    pub const fn is_fixed(self) -> bool {
        !matches!(
            self,
            Kind::VectorFixed
                | Kind::VectorVariable
                | Kind::VariableString
                | Kind::MapFixed
                | Kind::MapVariable
                | Kind::VariableAggregate
                | Kind::VariableUnion
        )
    }
}
