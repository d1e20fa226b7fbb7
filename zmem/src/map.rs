//! `Map<K, V>` for variable-layout `V`: an 8-byte total-size header, a `u64` count, then entries
//! with inline refs into a trailing variable section. Entry offsets are relative to the start of
//! that variable section, not to each value's own byte 8 — a deliberate choice, kept distinct from
//! how aggregate fields address their own variable payloads.
//!
//! `Map<K, V>` for fixed-layout `V` has no self-header (just a `u64` count then sorted entries)
//! and is handled directly by [`crate::payload::write_map_fixed`]/[`crate::read::read_map_fixed`]
//! rather than through [`Encode`]/[`Decode`] — only the two kinds that carry their own
//! total-size header (`VariableAggregate`, `MapVariable`) implement that trait.

use alloc::collections::BTreeMap;

use zmem_traits::{
    layout::InlineRef, Decode, Encode, Error, ErrorKind, FixedDecode, FixedEncode, Kind, Layout,
    ReadMode, Result, Sink,
};

use crate::placement::align_up;

fn entry_stride<K: Layout>() -> u64 {
    align_up(K::FIXED_SIZE as u64 + 16, 8)
}

impl<K, V> Encode for BTreeMap<K, V>
where
    K: FixedEncode + FixedDecode + Ord + Clone,
    V: Encode,
{
    fn predicted_size(&self) -> u64 {
        let stride = entry_stride::<K>();
        let entries_region = align_up(8 + stride * self.len() as u64, 8);
        let mut variable_region = 0u64;
        for value in self.values() {
            variable_region = align_up(variable_region, 8) + value.predicted_size();
        }
        8 + align_up(entries_region + variable_region, 8)
    }

    fn encode(&self, sink: &mut dyn Sink) -> Result<()> {
        let total = self.predicted_size() - 8;
        let header_at = sink.position();
        sink.write_bytes(&0u64.to_le_bytes())?;
        let content_start = sink.position();

        sink.write_bytes(&(self.len() as u64).to_le_bytes())?;

        let stride = entry_stride::<K>();
        let entries_start = sink.position();
        for (key, _) in self {
            let mut buf = alloc::vec![0u8; stride as usize];
            unsafe { key.write_bytes(buf.as_mut_ptr()) };
            sink.write_bytes(&buf)?;
        }
        sink.pad_to(8)?;

        let variable_section_start = sink.position();
        let patch_slots: alloc::vec::Vec<u64> = (0..self.len())
            .map(|i| entries_start + i as u64 * stride + K::FIXED_SIZE as u64)
            .collect();
        for (slot, (_, value)) in patch_slots.into_iter().zip(self.values()) {
            sink.pad_to(8)?;
            let value_offset = sink.position() - variable_section_start;
            let before = sink.position();
            value.encode(sink)?;
            let value_len = sink.position() - before;
            let inline_ref = InlineRef {
                offset: value_offset,
                count_or_len: value_len,
            };
            let mut patch = [0u8; 16];
            patch[0..8].copy_from_slice(&inline_ref.offset.to_le_bytes());
            patch[8..16].copy_from_slice(&inline_ref.count_or_len.to_le_bytes());
            sink.patch(slot, &patch)?;
        }
        sink.pad_to(8)?;

        let content_len = sink.position() - content_start;
        debug_assert_eq!(content_len, total, "map predicted size disagreed with writer output");
        sink.patch(header_at, &content_len.to_le_bytes())?;
        Ok(())
    }
}

/// Mirrors `Vec<T>`'s treatment in [`crate::containers`]: one impl, `KIND` selected by `V::KIND`
/// so `FixedMap`/`VarMap` (the same concrete type) both resolve correctly.
unsafe impl<K, V: Layout> Layout for BTreeMap<K, V> {
    const KIND: Kind = if V::KIND.is_fixed() {
        Kind::MapFixed
    } else {
        Kind::MapVariable
    };
    const FIXED_SIZE: usize = 16;
    const FIXED_ALIGN: usize = 8;
}

impl<K, V> Decode for BTreeMap<K, V>
where
    K: FixedDecode + Ord + Clone,
    V: Decode,
{
    fn decode_at(bytes: &[u8], offset: u64, mode: ReadMode) -> Result<Self> {
        let at = offset as usize;
        if bytes.len() < at + 8 {
            return Err(Error::new(ErrorKind::UnexpectedEnd, offset));
        }
        let content_len = u64::from_le_bytes(bytes[at..at + 8].try_into().unwrap());
        let content_start = at + 8;
        if (bytes.len() - content_start) < content_len as usize {
            return Err(Error::new(ErrorKind::SizeHeaderMismatch, offset));
        }
        let content = &bytes[content_start..content_start + content_len as usize];

        if content.len() < 8 {
            return Err(Error::new(ErrorKind::UnexpectedEnd, offset));
        }
        let count = u64::from_le_bytes(content[0..8].try_into().unwrap());
        let stride = entry_stride::<K>();
        let entries_start = 8u64;
        let entries_span = stride
            .checked_mul(count)
            .ok_or(Error::new(ErrorKind::VectorCountOverflow, offset))?;
        let entries_end = entries_start
            .checked_add(entries_span)
            .ok_or(Error::new(ErrorKind::VectorCountOverflow, offset))?;
        if (content.len() as u64) < entries_end {
            return Err(Error::new(ErrorKind::OffsetOutOfRange, offset));
        }
        let count = count as usize;
        let stride = stride as usize;
        let entries_start = entries_start as usize;
        let variable_section_start = align_up(entries_end, 8) as usize;

        let mut map = BTreeMap::new();
        let mut previous: Option<K> = None;
        for i in 0..count {
            let entry_at = entries_start + i * stride;
            let key = unsafe { K::read_bytes(content.as_ptr().add(entry_at), entry_at as u64)? };
            let inline_at = entry_at + K::FIXED_SIZE;
            let value_offset =
                u64::from_le_bytes(content[inline_at..inline_at + 8].try_into().unwrap());
            let value_len =
                u64::from_le_bytes(content[inline_at + 8..inline_at + 16].try_into().unwrap());
            let value_start = variable_section_start + value_offset as usize;
            let value_end = value_start + value_len as usize;
            if value_end > content.len() {
                return Err(Error::new(ErrorKind::OffsetOutOfRange, value_start as u64));
            }
            if mode.is_strict() {
                if let Some(prev) = &previous {
                    match key.cmp(prev) {
                        core::cmp::Ordering::Less => {
                            return Err(Error::new(ErrorKind::MapUnsorted, entry_at as u64))
                        }
                        core::cmp::Ordering::Equal => {
                            return Err(Error::new(ErrorKind::MapDuplicateKey, entry_at as u64))
                        }
                        core::cmp::Ordering::Greater => {}
                    }
                }
            }
            let value = V::decode(&content[value_start..value_end], mode)?;
            previous = Some(key.clone());
            map.insert(key, value);
        }
        Ok(map)
    }
}
