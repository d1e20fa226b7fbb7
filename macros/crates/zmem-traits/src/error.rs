/// The flat error taxonomy for the ZMEM codec.
///
/// Kept as a `#[repr(u8)]` enum with a byte-offset companion: errors are returned, not thrown,
/// and every one of them carries enough context (the offending byte offset) to diagnose a
/// malformed buffer without re-walking it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ErrorKind {
    /// The buffer ended before a required field, header, or payload could be read.
    UnexpectedEnd,
    /// The decoded total-size header doesn't match the number of bytes actually available.
    SizeHeaderMismatch,
    /// An inline reference or offset-table entry points outside the declared content region.
    OffsetOutOfRange,
    /// A vector or map count exceeds what the remaining buffer could possibly hold.
    VectorCountOverflow,
    /// A map's entries are not in ascending key order (strict-mode decode of untrusted input).
    MapUnsorted,
    /// A map contains two entries with an equal key.
    MapDuplicateKey,
    /// An `Optional<T>` present-flag byte was neither 0 nor 1 (strict mode only).
    OptionalInvalidFlag,
    /// A `bool` byte was neither 0 nor 1 (strict mode only).
    NonCanonicalBoolean,
    /// The growing-mode sink has an explicit capacity ceiling and would have to exceed it.
    BufferTooSmall,
    /// A tagged union's leading byte didn't match any declared variant's tag.
    UnknownUnionTag,
}

/// An [`ErrorKind`] paired with the byte offset at which it was detected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub offset: u64,
}

impl Error {
    #[inline(always)]
    pub const fn new(kind: ErrorKind, offset: u64) -> Self {
        Self { kind, offset }
    }
}

impl From<Error> for &'static str {
    fn from(value: Error) -> Self {
        match value.kind {
            ErrorKind::UnexpectedEnd => "buffer ended before a required field could be read",
            ErrorKind::SizeHeaderMismatch => "decoded size header does not match available bytes",
            ErrorKind::OffsetOutOfRange => "an offset points outside the declared content region",
            ErrorKind::VectorCountOverflow => "a count exceeds what the buffer could hold",
            ErrorKind::MapUnsorted => "map entries are not in ascending key order",
            ErrorKind::MapDuplicateKey => "map contains a duplicate key",
            ErrorKind::OptionalInvalidFlag => "optional present-flag byte is neither 0 nor 1",
            ErrorKind::NonCanonicalBoolean => "boolean byte is neither 0 nor 1",
            ErrorKind::BufferTooSmall => "growing sink exceeded its capacity ceiling",
            ErrorKind::UnknownUnionTag => "tagged union byte does not match any declared variant",
        }
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{msg} (at byte offset {})", self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T, E = Error> = core::result::Result<T, E>;
