//! The external operations callers reach for: `size`, `write`, `write_preallocated`, `read`, `view`.
//!
//! Each exists in a fixed-layout and a variable-layout form rather than as one generic function:
//! this crate prefers tagged-variant dispatch over virtual hierarchies, and a type's
//! fixed/variable classification is a property of the type itself, known at the call site, so the
//! split costs nothing and keeps each function's contract exact (fixed values round up to 8,
//! variable values carry their own header).

use alloc::vec::Vec;

use zmem_traits::{Decode, Encode, FixedEncode, Layout, ReadMode, Result, Sink};

use crate::{
    predict::{predict_fixed, predict_variable},
    read::{read_fixed, read_variable},
    view::View,
    write::{GrowingSink, Preallocated},
};

/// `size(value)` for a fixed-layout value.
pub fn size_fixed<T: FixedEncode>(value: &T) -> u64 {
    predict_fixed(value)
}

/// `size(value)` for a variable-layout value.
pub fn size_variable<T: Encode>(value: &T) -> u64 {
    predict_variable(value)
}

/// `write(value, sink)` for a fixed-layout value: growing-mode, returns the written bytes.
///
/// Goes through [`FixedEncode::write_bytes`] into a scratch buffer rather than reinterpreting
/// `value`'s own Rust memory: a type's wire layout need not match its native representation
/// (uninitialized padding, `Optional<T>`'s present-flag byte), so only the trait's own byte
/// writer is trusted to produce canonical output.
pub fn write_fixed<T: FixedEncode>(value: &T) -> Result<Vec<u8>> {
    let mut buf = alloc::vec![0u8; T::FIXED_SIZE];
    unsafe { value.write_bytes(buf.as_mut_ptr()) };
    let mut sink = GrowingSink::with_capacity(size_fixed(value) as usize);
    sink.write_bytes(&buf)?;
    sink.pad_to(8)?;
    Ok(sink.into_vec())
}

/// `write(value, sink)` for a variable-layout value: growing-mode, returns the written bytes.
pub fn write_variable<T: Encode>(value: &T) -> Result<Vec<u8>> {
    let mut sink = GrowingSink::with_capacity(size_variable(value) as usize);
    value.encode(&mut sink)?;
    Ok(sink.into_vec())
}

/// `write_preallocated(value, sink)` for a fixed-layout value: `buf` must be exactly
/// `size_fixed(value)` bytes.
pub fn write_fixed_preallocated<T: FixedEncode>(value: &T, buf: &mut [u8]) -> Result<()> {
    let mut scratch = alloc::vec![0u8; T::FIXED_SIZE];
    unsafe { value.write_bytes(scratch.as_mut_ptr()) };
    let mut sink = Preallocated::new(buf);
    sink.write_bytes(&scratch)?;
    sink.pad_to(8)
}

/// `write_preallocated(value, sink)` for a variable-layout value: `buf` must be exactly
/// `size_variable(value)` bytes.
pub fn write_variable_preallocated<T: Encode>(value: &T, buf: &mut [u8]) -> Result<()> {
    let mut sink = Preallocated::new(buf);
    value.encode(&mut sink)
}

pub use read_fixed as read_fixed_value;
pub use read_variable as read_variable_value;

/// `read(bytes, out)` for a variable-layout value, explicit about [`ReadMode`].
pub fn read_variable_with_mode<T: Decode>(bytes: &[u8], mode: ReadMode) -> Result<T> {
    read_variable(bytes, mode)
}

/// `view<T>(bytes)`. Callers typically immediately wrap the result in the
/// derive-generated per-type view (e.g. `EntityView::new(zmem::view(bytes)?)`).
pub fn view(bytes: &[u8]) -> Result<View<'_>> {
    View::root(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_round_trip_pads_to_8_bytes() {
        let bytes = write_fixed(&7u16).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes[0..2], 7u16.to_le_bytes());
        assert_eq!(&bytes[2..], &[0u8; 6]);
        let back: u16 = read_fixed(&bytes).unwrap();
        assert_eq!(back, 7);
    }

    #[test]
    fn growing_and_preallocated_fixed_writes_agree() {
        let value = 0xDEADBEEFu32;
        let grown = write_fixed(&value).unwrap();
        let mut prealloc = alloc::vec![0u8; size_fixed(&value) as usize];
        write_fixed_preallocated(&value, &mut prealloc).unwrap();
        assert_eq!(grown, prealloc);
    }

    #[test]
    fn view_rejects_a_buffer_shorter_than_its_own_header_claims() {
        let mut bytes = 64u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0u8; 4]);
        assert!(view(&bytes).is_err());
    }
}
