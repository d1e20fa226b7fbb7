//! The reader: mirrors the writer's placement walk, this time resolving inline
//! references back into owning containers.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use zmem_traits::{
    layout::InlineRef, Decode, Error, ErrorKind, FixedDecode, Layout, ReadMode, Result,
};

use crate::placement::align_up;

/// Reads a fixed-layout `T` from the start of `bytes`.
///
/// `bytes` must hold at least `round_up_to_8(T::FIXED_SIZE)` bytes, mirroring the writer's
/// trailing pad on a top-level fixed value.
pub fn read_fixed<T: FixedDecode>(bytes: &[u8]) -> Result<T> {
    let padded = align_up(T::FIXED_SIZE as u64, 8) as usize;
    if bytes.len() < padded {
        return Err(Error::new(ErrorKind::UnexpectedEnd, 0));
    }
    unsafe { T::read_bytes(bytes.as_ptr(), 0) }
}

/// Reads a complete self-contained variable aggregate `T` from the start of `bytes`.
pub fn read_variable<T: Decode>(bytes: &[u8], mode: ReadMode) -> Result<T> {
    T::decode(bytes, mode)
}

/// Reads the 8-byte total-size header at `bytes[0..8]` and checks it against `bytes.len()`.
pub fn read_size_header(bytes: &[u8]) -> Result<u64> {
    if bytes.len() < 8 {
        return Err(Error::new(ErrorKind::UnexpectedEnd, 0));
    }
    let size = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
    if (bytes.len() as u64) < 8 + size {
        return Err(Error::new(ErrorKind::SizeHeaderMismatch, 0));
    }
    Ok(size)
}

/// Reads the 16-byte [`InlineRef`] at `inline_base + field_offset` (relative offset as recorded
/// by the placement walk: the start of the enclosing aggregate's inline section).
pub fn read_inline_ref(bytes: &[u8], inline_base: u64, field_offset: u64) -> Result<InlineRef> {
    let at = (inline_base + field_offset) as usize;
    if bytes.len() < at + 16 {
        return Err(Error::new(ErrorKind::UnexpectedEnd, at as u64));
    }
    let offset = u64::from_le_bytes(bytes[at..at + 8].try_into().unwrap());
    let count_or_len = u64::from_le_bytes(bytes[at + 8..at + 16].try_into().unwrap());
    Ok(InlineRef {
        offset,
        count_or_len,
    })
}

/// Materializes a vector of fixed-layout `T` from the payload at `content[payload_at..]`,
/// `count` elements of `T::FIXED_SIZE` bytes each ("vector of fixed T: materialize by
/// bulk copy").
pub fn read_vector_fixed<T: FixedDecode>(
    content: &[u8],
    payload_at: u64,
    count: u64,
) -> Result<Vec<T>> {
    let stride = T::FIXED_SIZE;
    let span = (stride as u64)
        .checked_mul(count)
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    let end = payload_at
        .checked_add(span)
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    if (content.len() as u64) < end {
        return Err(Error::new(ErrorKind::OffsetOutOfRange, payload_at));
    }
    let base = payload_at as usize;
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        let at = base + i * stride;
        out.push(unsafe { T::read_bytes(content.as_ptr().add(at), at as u64)? });
    }
    Ok(out)
}

/// Materializes a vector of variable-layout `T` from an offset table at `content[payload_at..]`
/// ("read offset table, recursively decode each element as a complete variable
/// aggregate").
pub fn read_vector_variable<T: Decode>(
    content: &[u8],
    payload_at: u64,
    count: u64,
    mode: ReadMode,
) -> Result<Vec<T>> {
    let table_len = count
        .checked_add(1)
        .and_then(|n| n.checked_mul(8))
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    let data_offset = payload_at
        .checked_add(table_len)
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    if (content.len() as u64) < data_offset {
        return Err(Error::new(ErrorKind::OffsetOutOfRange, payload_at));
    }
    let base = payload_at as usize;
    let table_len = table_len as usize;
    let offsets: Vec<u64> = (0..=count as usize)
        .map(|i| {
            let at = base + i * 8;
            u64::from_le_bytes(content[at..at + 8].try_into().unwrap())
        })
        .collect();
    let data_start = base + table_len;
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        let start = data_start + offsets[i] as usize;
        let end = data_start + offsets[i + 1] as usize;
        if end > content.len() || start > end {
            return Err(Error::new(ErrorKind::OffsetOutOfRange, start as u64));
        }
        out.push(T::decode(&content[start..end], mode)?);
    }
    Ok(out)
}

/// Reads a length-prefixed, non-null-terminated variable string payload.
pub fn read_variable_string(content: &[u8], payload_at: u64, len: u64) -> Result<String> {
    let start = payload_at as usize;
    let end = start + len as usize;
    if content.len() < end {
        return Err(Error::new(ErrorKind::OffsetOutOfRange, payload_at));
    }
    Ok(String::from_utf8_lossy(&content[start..end]).into_owned())
}

/// Reads a `MapFixed` payload: `u64` count followed by `count` contiguous `(K, V)` entries.
/// In [`ReadMode::Strict`], rejects unsorted or duplicate keys.
pub fn read_map_fixed<K: FixedDecode + Ord + Clone, V: FixedDecode>(
    content: &[u8],
    payload_at: u64,
    mode: ReadMode,
) -> Result<BTreeMap<K, V>> {
    let base = payload_at as usize;
    if content.len() < base + 8 {
        return Err(Error::new(ErrorKind::UnexpectedEnd, payload_at));
    }
    let count = u64::from_le_bytes(content[base..base + 8].try_into().unwrap());
    let stride = K::FIXED_SIZE + V::FIXED_SIZE;
    let entries_start = payload_at + 8;
    let span = (stride as u64)
        .checked_mul(count)
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    let end = entries_start
        .checked_add(span)
        .ok_or_else(|| Error::new(ErrorKind::VectorCountOverflow, payload_at))?;
    if (content.len() as u64) < end {
        return Err(Error::new(ErrorKind::OffsetOutOfRange, payload_at));
    }
    let count = count as usize;
    let entries_start = entries_start as usize;
    let mut map = BTreeMap::new();
    let mut previous: Option<K> = None;
    for i in 0..count {
        let at = entries_start + i * stride;
        let key = unsafe { K::read_bytes(content.as_ptr().add(at), at as u64)? };
        let value = unsafe {
            V::read_bytes(
                content.as_ptr().add(at + K::FIXED_SIZE),
                (at + K::FIXED_SIZE) as u64,
            )?
        };
        if mode.is_strict() {
            if let Some(prev) = &previous {
                match key.cmp(prev) {
                    core::cmp::Ordering::Less => {
                        return Err(Error::new(ErrorKind::MapUnsorted, at as u64))
                    }
                    core::cmp::Ordering::Equal => {
                        return Err(Error::new(ErrorKind::MapDuplicateKey, at as u64))
                    }
                    core::cmp::Ordering::Greater => {}
                }
            }
        }
        previous = Some(key.clone());
        map.insert(key, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_size_header_rejects_truncated_buffer() {
        let mut buf = 100u64.to_le_bytes().to_vec();
        buf.extend(core::iter::repeat(0u8).take(10));
        let err = read_size_header(&buf).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SizeHeaderMismatch);
    }

    #[test]
    fn read_size_header_accepts_exact_buffer() {
        let mut buf = 8u64.to_le_bytes().to_vec();
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(read_size_header(&buf).unwrap(), 8);
    }

    #[test]
    fn read_inline_ref_round_trips_fields() {
        let mut bytes = alloc::vec::Vec::new();
        bytes.extend_from_slice(&[0u8; 8]); // header, unused by this helper
        bytes.extend_from_slice(&40u64.to_le_bytes());
        bytes.extend_from_slice(&3u64.to_le_bytes());
        let inline_ref = read_inline_ref(&bytes, 8, 0).unwrap();
        assert_eq!(inline_ref.offset, 40);
        assert_eq!(inline_ref.count_or_len, 3);
    }

    #[test]
    fn read_vector_fixed_materializes_elements() {
        let mut content = alloc::vec::Vec::new();
        content.extend_from_slice(&1.0f32.to_le_bytes());
        content.extend_from_slice(&2.0f32.to_le_bytes());
        content.extend_from_slice(&3.0f32.to_le_bytes());
        let values: Vec<f32> = read_vector_fixed(&content, 0, 3).unwrap();
        assert_eq!(values, alloc::vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn read_vector_fixed_rejects_short_buffer() {
        let content = [0u8; 4];
        let err = read_vector_fixed::<f32>(&content, 0, 3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::OffsetOutOfRange);
    }

    #[test]
    fn read_variable_string_extracts_exact_range() {
        let content = b"hello world".to_vec();
        let s = read_variable_string(&content, 6, 5).unwrap();
        assert_eq!(s, "world");
    }

    #[test]
    fn read_map_fixed_detects_unsorted_keys_in_strict_mode() {
        let mut content = alloc::vec::Vec::new();
        content.extend_from_slice(&2u64.to_le_bytes());
        content.push(b'b');
        content.extend_from_slice(&10u32.to_le_bytes());
        content.push(b'a');
        content.extend_from_slice(&5u32.to_le_bytes());

        let permissive: BTreeMap<u8, u32> = read_map_fixed(&content, 0, ReadMode::Permissive).unwrap();
        assert_eq!(permissive.get(&b'a'), Some(&5));

        let err = read_map_fixed::<u8, u32>(&content, 0, ReadMode::Strict).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MapUnsorted);
    }
}
