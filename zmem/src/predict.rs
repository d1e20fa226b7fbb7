//! The size predictor: the entry point the preallocated writer path calls before
//! sizing its buffer.

use zmem_traits::{Encode, FixedEncode, Layout};

use crate::placement::align_up;

/// The exact byte count [`crate::write`] will produce for `value`.
///
/// Top-level fixed values are written without a size header, rounded up to a multiple of 8 "for
/// safe mmap alignment"; this is [`predict_fixed`]. Variable values carry
/// their own 8-byte header and are measured by [`Encode::predicted_size`]; this is
/// [`predict_variable`].
pub fn predict_fixed<T: FixedEncode>(_value: &T) -> u64 {
    align_up(T::FIXED_SIZE as u64, 8)
}

pub fn predict_variable<T: Encode>(value: &T) -> u64 {
    value.predicted_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_fixed_rounds_up_to_8() {
        assert_eq!(predict_fixed(&1u8), 8);
        assert_eq!(predict_fixed(&1u32), 8);
        assert_eq!(predict_fixed(&1u64), 8);
        assert_eq!(predict_fixed(&[1u64, 2u64]), 16);
    }
}
