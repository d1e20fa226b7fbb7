//! `FixedStr<N>` ("Fixed string of length N ... Null-terminated; bytes past first null
//! must be zero").

use zmem_traits::{Error, ErrorKind, FixedDecode, FixedEncode, Kind, Layout, Result};

/// A null-terminated, zero-padded ASCII/UTF-8 byte string of exactly `N` bytes.
///
/// The last of the `N` bytes is always available for the terminator; a source string longer than
/// `N - 1` bytes is truncated by [`FixedStr::new`].
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    /// Builds a `FixedStr` from `s`, truncating to `N - 1` bytes and null-terminating. Bytes
    /// after the terminator are zero.
    pub fn new(s: &str) -> Self {
        let mut bytes = [0u8; N];
        let copy_len = s.len().min(N.saturating_sub(1));
        bytes[..copy_len].copy_from_slice(&s.as_bytes()[..copy_len]);
        Self { bytes }
    }

    /// The string up to (not including) the first null byte, lossily decoded as UTF-8.
    pub fn as_str(&self) -> alloc::borrow::Cow<'_, str> {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        alloc::string::String::from_utf8_lossy(&self.bytes[..end])
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> core::fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FixedStr({:?})", self.as_str())
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self { bytes: [0u8; N] }
    }
}

unsafe impl<const N: usize> Layout for FixedStr<N> {
    const KIND: Kind = Kind::FixedString;
    const FIXED_SIZE: usize = N;
    const FIXED_ALIGN: usize = 1;
}

unsafe impl<const N: usize> FixedEncode for FixedStr<N> {
    unsafe fn write_bytes(&self, dst: *mut u8) {
        core::ptr::copy_nonoverlapping(self.bytes.as_ptr(), dst, N);
    }
}

unsafe impl<const N: usize> FixedDecode for FixedStr<N> {
    unsafe fn read_bytes(src: *const u8, offset: u64) -> Result<Self> {
        let mut bytes = [0u8; N];
        core::ptr::copy_nonoverlapping(src, bytes.as_mut_ptr(), N);
        if bytes.iter().position(|&b| b == 0).is_none() {
            return Err(Error::new(ErrorKind::UnexpectedEnd, offset));
        }
        Ok(Self { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_and_null_terminates() {
        let s = FixedStr::<4>::new("hello");
        assert_eq!(s.as_bytes(), &[b'h', b'e', b'l', 0]);
        assert_eq!(s.as_str(), "hel");
    }

    #[test]
    fn short_string_zero_pads_the_tail() {
        let s = FixedStr::<8>::new("hi");
        assert_eq!(s.as_bytes(), &[b'h', b'i', 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn round_trips_through_read_bytes() {
        let s = FixedStr::<8>::new("abcdefg");
        let mut buf = [0u8; 8];
        unsafe { s.write_bytes(buf.as_mut_ptr()) };
        let back = unsafe { FixedStr::<8>::read_bytes(buf.as_ptr(), 0).unwrap() };
        assert_eq!(back, s);
    }

    #[test]
    fn missing_terminator_is_rejected() {
        let buf = [b'a'; 4];
        let err = unsafe { FixedStr::<4>::read_bytes(buf.as_ptr(), 7) }.unwrap_err();
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(FixedStr::<4>::default().as_bytes(), &[0, 0, 0, 0]);
    }
}
