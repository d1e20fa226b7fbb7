//! See [`ParsingError`].

/// Error types for reporting malformed `#[derive(ZmemLayout)]` inputs.
///
/// Can be converted to a clear, user-facing string message.
pub enum ParsingError {
    NotAStructOrEnum,
    NamedFieldsOnly,
    UnrecognizedFieldType,
    ExpectedReprInteger,
    TaggedUnionVariantNeedsExactlyOneField,
    TooManyVariants,
    EmptyEnum,
}

impl From<ParsingError> for String {
    #[inline]
    fn from(value: ParsingError) -> Self {
        match value {
            ParsingError::NotAStructOrEnum => {
                "#[derive(ZmemLayout)] only works on structs and enums".into()
            }
            ParsingError::NamedFieldsOnly => {
                "#[derive(ZmemLayout)] structs must have named fields".into()
            }
            ParsingError::UnrecognizedFieldType => (
                "could not recognize this field's type; only named types, arrays, and the \
                 container aliases in zmem::containers (FixedVec, VarVec, FixedMap, VarMap, \
                 VarString) are supported"
            )
                .into(),
            ParsingError::ExpectedReprInteger => (
                "enum needs #[repr(u8)], #[repr(u16)], #[repr(u32)], or #[repr(u64)] to have a \
                 defined wire tag width"
            )
                .into(),
            ParsingError::TaggedUnionVariantNeedsExactlyOneField => (
                "a tagged-union variant (one carrying data) must wrap exactly one fixed-layout \
                 field; a union with a variable-layout variant isn't supported by the derive, \
                 write Encode/Decode for it by hand"
            )
                .into(),
            ParsingError::TooManyVariants => "enum has more than 256 variants".into(),
            ParsingError::EmptyEnum => "enum has no variants".into(),
        }
    }
}

impl ParsingError {
    #[inline]
    pub fn new_err(self, span: impl syn::spanned::Spanned) -> syn::Error {
        syn::Error::new::<String>(span.span(), self.into())
    }
}
