//! The writer: two [`zmem_traits::Sink`] implementations sharing one contract, so
//! generated `Encode` impls don't need to know which mode they're driving.

use alloc::vec::Vec;

use zmem_traits::{Error, ErrorKind, Result, Sink};

/// A sink that appends to a growing `Vec<u8>`, optionally capped at a maximum capacity.
///
/// The bounds-checked default ("growing ... append with bounds checks"). Without a
/// cap it never fails; with one, exceeding it returns [`ErrorKind::BufferTooSmall`] rather than
/// reallocating past the caller's declared ceiling.
pub struct GrowingSink {
    buf: Vec<u8>,
    cap: Option<usize>,
}

impl GrowingSink {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            cap: None,
        }
    }

    /// A sink that refuses to grow past `max_len` bytes.
    pub fn bounded(max_len: usize) -> Self {
        Self {
            buf: Vec::new(),
            cap: Some(max_len),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for GrowingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for GrowingSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(cap) = self.cap {
            if self.buf.len() + bytes.len() > cap {
                return Err(Error::new(ErrorKind::BufferTooSmall, self.buf.len() as u64));
            }
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn position(&self) -> u64 {
        self.buf.len() as u64
    }

    fn patch(&mut self, at: u64, bytes: &[u8]) -> Result<()> {
        let at = at as usize;
        self.buf[at..at + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}


#[cfg(test)]
mod preallocated_tests {
    use super::*;

    #[test]
    fn writes_land_at_the_correct_cursor() {
        let mut buf = [0u8; 8];
        let mut sink = Preallocated::new(&mut buf);
        sink.write_bytes(&[1, 2, 3]).unwrap();
        sink.write_bytes(&[4, 5]).unwrap();
        assert_eq!(sink.position(), 5);
        assert_eq!(sink.finish(), 5);
        assert_eq!(buf, [1, 2, 3, 4, 5, 0, 0, 0]);
    }

    #[test]
    fn patch_overwrites_without_moving_the_cursor() {
        let mut buf = [0u8; 4];
        let mut sink = Preallocated::new(&mut buf);
        sink.write_bytes(&[0, 0, 0, 0]).unwrap();
        sink.patch(1, &[7, 7]).unwrap();
        assert_eq!(sink.position(), 4);
        drop(sink);
        assert_eq!(buf, [0, 7, 7, 0]);
    }
}

/// A sink that writes into a caller-owned buffer sized exactly to
/// [`zmem_traits::Encode::predicted_size`], eliding the growing sink's capacity checks: the
/// invariants established by the predictor make them unnecessary.
///
/// `write_bytes` still asserts in debug builds that the write fits — a predictor/writer
/// disagreement is a programmer error ("a bug in size prediction ... is a fatal
/// assertion"), not a recoverable one.
pub struct Preallocated<'a> {
    buf: &'a mut [u8],
    cursor: usize,
}

impl<'a> Preallocated<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, cursor: 0 }
    }

    pub fn finish(self) -> usize {
        self.cursor
    }
}

impl Sink for Preallocated<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        debug_assert!(
            self.cursor + bytes.len() <= self.buf.len(),
            "preallocated sink overrun: predictor underestimated the written size"
        );
        self.buf[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
        Ok(())
    }

    fn position(&self) -> u64 {
        self.cursor as u64
    }

    fn patch(&mut self, at: u64, bytes: &[u8]) -> Result<()> {
        let at = at as usize;
        self.buf[at..at + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}
