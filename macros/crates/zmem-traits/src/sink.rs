use crate::error::Result;

/// An append-only, position-tracking byte destination ("sink provides
/// append-with-bounds-check ... or a preallocated region").
///
/// `zmem::write::GrowingSink` and `zmem::write::Preallocated` are the two concrete
/// implementations; this trait is the seam [`crate::Encode`] writes against so the same
/// generated code drives either mode.
pub trait Sink {
    /// Appends `bytes` at the current position, advancing it by `bytes.len()`.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// The number of bytes written so far.
    fn position(&self) -> u64;

    /// Overwrites `bytes.len()` bytes starting at the already-written position `at`.
    ///
    /// Used to back-patch an inline reference or a total-size header after the value it
    /// describes has been written.
    fn patch(&mut self, at: u64, bytes: &[u8]) -> Result<()>;

    /// Appends `count` zero bytes. A sink may override this for a faster fill than
    /// `write_bytes` called on a zeroed stack buffer.
    fn write_zeros(&mut self, count: usize) -> Result<()> {
        const ZEROS: [u8; 64] = [0u8; 64];
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(ZEROS.len());
            self.write_bytes(&ZEROS[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }

    /// Appends zero bytes until `position()` is a multiple of `align`.
    fn pad_to(&mut self, align: usize) -> Result<()> {
        let misalignment = (self.position() as usize) % align;
        if misalignment != 0 {
            self.write_zeros(align - misalignment)?;
        }
        Ok(())
    }
}
