//! `[T; N]` ("Fixed array T[N] ... Contiguous; no padding between elements").
//!
//! A fixed array of fixed-layout `T` is itself fixed-layout: size = `N * size(T)`, alignment =
//! `align(T)`. Writing and reading walks elements in order rather than relying on a
//! whole-array memcpy, since `T` may itself have a wire layout that differs from its Rust-native
//! bit pattern (e.g. `Optional<U>` nested inside the array).

use zmem_traits::{FixedDecode, FixedEncode, Kind, Layout, Result};

unsafe impl<T: Layout, const N: usize> Layout for [T; N] {
    const KIND: Kind = Kind::FixedArray;
    const FIXED_SIZE: usize = T::FIXED_SIZE * N;
    const FIXED_ALIGN: usize = T::FIXED_ALIGN;
}

unsafe impl<T: FixedEncode, const N: usize> FixedEncode for [T; N] {
    unsafe fn write_bytes(&self, dst: *mut u8) {
        for (i, element) in self.iter().enumerate() {
            element.write_bytes(dst.add(i * T::FIXED_SIZE));
        }
    }
}

unsafe impl<T: FixedDecode, const N: usize> FixedDecode for [T; N] {
    unsafe fn read_bytes(src: *const u8, offset: u64) -> Result<Self> {
        let mut out: core::mem::MaybeUninit<[T; N]> = core::mem::MaybeUninit::uninit();
        let base = out.as_mut_ptr() as *mut T;
        for i in 0..N {
            match T::read_bytes(src.add(i * T::FIXED_SIZE), offset + (i * T::FIXED_SIZE) as u64) {
                Ok(element) => base.add(i).write(element),
                Err(e) => {
                    for j in 0..i {
                        core::ptr::drop_in_place(base.add(j));
                    }
                    return Err(e);
                }
            }
        }
        Ok(out.assume_init())
    }
}
