//! Zero-overhead encode/decode for fixed-layout values: one unsafe `write_bytes`/`read_bytes`
//! per primitive width, an inline pointer contract instead of a `Read`/`Write` abstraction, and
//! a fallible read only where a type has bit patterns that aren't all valid (`bool`).

use crate::{
    error::Error,
    layout::Layout,
};

/// A trait for packing fixed-layout values into little-endian bytes with zero overhead.
///
/// # Safety
///
/// Implementors must write exactly `Self::FIXED_SIZE` little-endian contiguous bytes to `dst`.
///
/// Callers of [`write_bytes`](FixedEncode::write_bytes) must ensure `dst` points to at least
/// `Self::FIXED_SIZE` bytes of writable memory.
pub unsafe trait FixedEncode: Layout {
    /// Writes `self` as bytes at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must point to at least `Self::FIXED_SIZE` bytes of writable memory.
    unsafe fn write_bytes(&self, dst: *mut u8);
}

/// A trait for reading fixed-layout values from little-endian bytes with zero overhead.
///
/// [`read_bytes`](FixedDecode::read_bytes) is fallible because some types (`bool`) have byte
/// patterns that aren't valid values; for everything else it always returns `Ok`.
///
/// # Safety
///
/// Implementors must read at most `Self::FIXED_SIZE` bytes from `src`, as an unaligned pointer.
///
/// Callers must ensure `src` points to at least `Self::FIXED_SIZE` bytes of readable memory.
pub unsafe trait FixedDecode: Layout + Sized {
    /// Reads `Self::FIXED_SIZE` bytes from `src` and constructs `Self`.
    ///
    /// # Safety
    ///
    /// `src` must point to at least `Self::FIXED_SIZE` bytes of readable memory.
    unsafe fn read_bytes(src: *const u8, offset: u64) -> Result<Self, Error>;
}

macro_rules! impl_fixed_uint {
    ($ty:ty) => {
        unsafe impl Layout for $ty {
            const KIND: crate::kind::Kind = crate::kind::Kind::Primitive;
            const FIXED_SIZE: usize = core::mem::size_of::<$ty>();
            const FIXED_ALIGN: usize = core::mem::size_of::<$ty>();
        }

        unsafe impl FixedEncode for $ty {
            #[inline(always)]
            unsafe fn write_bytes(&self, dst: *mut u8) {
                core::ptr::copy_nonoverlapping(
                    self.to_le_bytes().as_ptr(),
                    dst,
                    Self::FIXED_SIZE,
                );
            }
        }

        unsafe impl FixedDecode for $ty {
            #[inline(always)]
            unsafe fn read_bytes(src: *const u8, _offset: u64) -> Result<Self, Error> {
                let mut buf = [0u8; core::mem::size_of::<$ty>()];
                core::ptr::copy_nonoverlapping(src, buf.as_mut_ptr(), buf.len());
                Ok(Self::from_le_bytes(buf))
            }
        }
    };
}

impl_fixed_uint!(u8);
impl_fixed_uint!(u16);
impl_fixed_uint!(u32);
impl_fixed_uint!(u64);
impl_fixed_uint!(u128);
impl_fixed_uint!(i8);
impl_fixed_uint!(i16);
impl_fixed_uint!(i32);
impl_fixed_uint!(i64);
impl_fixed_uint!(i128);
impl_fixed_uint!(f32);
impl_fixed_uint!(f64);

/// # Safety
///
/// Writes/reads a canonical `0`/`1` byte at `dst`/`src`; any nonzero byte decodes as `true`
/// ("read any nonzero as true").
unsafe impl Layout for bool {
    const KIND: crate::kind::Kind = crate::kind::Kind::Primitive;
    const FIXED_SIZE: usize = 1;
    const FIXED_ALIGN: usize = 1;
}

unsafe impl FixedEncode for bool {
    #[inline(always)]
    unsafe fn write_bytes(&self, dst: *mut u8) {
        dst.write(*self as u8);
    }
}

unsafe impl FixedDecode for bool {
    // Always permissive: any nonzero byte decodes as `true`. Strict-mode rejection of
    // non-canonical booleans happens one layer up in `zmem::read`, which carries `ReadMode` (this
    // no_std traits crate doesn't define it, so it can't branch on it here).
    #[inline(always)]
    unsafe fn read_bytes(src: *const u8, _offset: u64) -> Result<Self, Error> {
        Ok(src.read() != 0)
    }
}
