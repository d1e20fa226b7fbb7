use crate::{
    error::{Error, Result},
    layout::Layout,
    mode::ReadMode,
    sink::Sink,
};

/// Encoding for a variable-layout type: one that writes itself as a complete, self-contained
/// variable aggregate — its own 8-byte total-size header followed by inline section and
/// variable section.
///
/// Every variable field nested inside an enclosing aggregate, and every element of a
/// `VectorVariable`, is encoded through this trait: "recursively emit the element as a full
/// variable aggregate" is exactly `Encode::encode`.
pub trait Encode: Layout {
    /// The exact number of bytes [`encode`](Encode::encode) will append, including the 8-byte
    /// size header. Must match the writer's actual output length ("the predictor
    /// MUST produce the exact byte count the writer will produce").
    fn predicted_size(&self) -> u64;

    /// Appends this value's complete wire representation — header, inline section, variable
    /// section, trailing padding — to `sink` at its current position.
    fn encode(&self, sink: &mut dyn Sink) -> Result<()>;
}

/// Decoding for a variable-layout type, the inverse of [`Encode`].
pub trait Decode: Layout + Sized {
    /// Decodes a complete self-contained variable aggregate from the start of `bytes`,
    /// returning the value and the number of bytes consumed (its declared total size).
    ///
    /// `bytes` may extend past the end of this value (e.g. a buffer holding several
    /// back-to-back values); trailing bytes are not an error.
    fn decode(bytes: &[u8], mode: ReadMode) -> Result<Self>
    where
        Self: Sized,
    {
        Self::decode_at(bytes, 0, mode)
    }

    /// Decodes starting at `bytes[offset..]`. `offset` is carried through solely so errors can
    /// report an absolute byte position; implementations still read relative to
    /// `bytes[offset..]`.
    fn decode_at(bytes: &[u8], offset: u64, mode: ReadMode) -> Result<Self>;
}

#[inline]
pub fn require_len(bytes: &[u8], offset: u64, needed: u64, kind: crate::error::ErrorKind) -> Result<()> {
    let available = bytes.len() as u64;
    if available.saturating_sub(offset) < needed {
        return Err(Error::new(kind, offset));
    }
    Ok(())
}
