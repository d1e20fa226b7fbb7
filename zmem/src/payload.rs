//! Write-side counterparts to [`crate::read`]'s payload helpers: the per-kind encoding routines
//! the derive macro calls for `VectorFixed`, `VectorVariable`, `VariableString`, and `MapFixed`
//! fields.

use alloc::collections::BTreeMap;

use zmem_traits::{Encode, FixedEncode, Layout, Result, Sink};

use crate::placement::align_up;

/// Writes a `VectorFixed` payload: `count` elements of `T`, contiguous, no inter-element padding
/// ("payload = count × size(T), contiguous").
pub fn write_vector_fixed<T: FixedEncode>(sink: &mut dyn Sink, elements: &[T]) -> Result<()> {
    let mut buf = alloc::vec::Vec::with_capacity(elements.len() * T::FIXED_SIZE);
    for element in elements {
        let start = buf.len();
        buf.resize(start + T::FIXED_SIZE, 0);
        unsafe { element.write_bytes(buf.as_mut_ptr().add(start)) };
    }
    sink.write_bytes(&buf)
}

/// The exact byte length [`write_vector_fixed`] will append.
pub fn predict_vector_fixed<T: FixedEncode>(count: usize) -> u64 {
    (count * T::FIXED_SIZE) as u64
}

/// Writes a `VectorVariable` payload: an offset table of `count + 1` u64s, then each element
/// recursively encoded as a complete variable aggregate.
pub fn write_vector_variable<T: Encode>(sink: &mut dyn Sink, elements: &[T]) -> Result<()> {
    let mut running = 0u64;
    let mut offsets = alloc::vec::Vec::with_capacity(elements.len() + 1);
    for element in elements {
        offsets.push(running);
        running += element.predicted_size();
    }
    offsets.push(running);
    for offset in &offsets {
        sink.write_bytes(&offset.to_le_bytes())?;
    }
    for element in elements {
        element.encode(sink)?;
    }
    Ok(())
}

/// The exact byte length [`write_vector_variable`] will append.
pub fn predict_vector_variable<T: Encode>(elements: &[T]) -> u64 {
    let table_len = (elements.len() as u64 + 1) * 8;
    let data: u64 = elements.iter().map(Encode::predicted_size).sum();
    table_len + data
}

/// Writes a `VariableString` payload: raw UTF-8 bytes, not null-terminated.
pub fn write_variable_string(sink: &mut dyn Sink, bytes: &[u8]) -> Result<()> {
    sink.write_bytes(bytes)
}

/// Writes a `MapFixed` payload: `u64` count, then entries sorted ascending by key, each a
/// `(K, V)` pair written contiguously ("u64 count, then sorted entries").
///
/// `BTreeMap` already iterates in ascending key order, satisfying the ordering invariant by
/// construction.
pub fn write_map_fixed<K: FixedEncode, V: FixedEncode>(
    sink: &mut dyn Sink,
    map: &BTreeMap<K, V>,
) -> Result<()> {
    sink.write_bytes(&(map.len() as u64).to_le_bytes())?;
    for (key, value) in map {
        let mut entry = alloc::vec::Vec::with_capacity(K::FIXED_SIZE + V::FIXED_SIZE);
        entry.resize(K::FIXED_SIZE, 0);
        unsafe { key.write_bytes(entry.as_mut_ptr()) };
        let value_start = entry.len();
        entry.resize(value_start + V::FIXED_SIZE, 0);
        unsafe { value.write_bytes(entry.as_mut_ptr().add(value_start)) };
        sink.write_bytes(&entry)?;
    }
    Ok(())
}

pub fn predict_map_fixed<K: FixedEncode, V: FixedEncode>(len: usize) -> u64 {
    8 + (len * (K::FIXED_SIZE + V::FIXED_SIZE)) as u64
}

/// Rounds a content-region cursor up to the next multiple of 8, for use between payload
/// sections ("Align cursor to 8").
#[inline(always)]
pub fn align_payload_cursor(cursor: u64) -> u64 {
    align_up(cursor, 8)
}
