//! Byte-Order Reversal
//!
//! These reorder bytes unconditionally. They do not detect the host order:
//! on a little-endian host the result is the big-endian encoding, on a
//! big-endian host they still swap.

/// Reverse the two bytes of `value`
#[inline]
#[must_use]
pub fn to_big_endian_16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverse the four bytes of `value`
///
/// `(b0 << 24) | (b1 << 16) | (b2 << 8) | b3` where `b0` is the least
/// significant input byte.
#[inline]
#[must_use]
pub fn to_big_endian_32(value: u32) -> u32 {
    value.swap_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_32_literal() {
        assert_eq!(to_big_endian_32(32), 536_870_912);
        assert_eq!(to_big_endian_32(0x1234_5678), 0x7856_3412);
    }

    #[test]
    fn test_swap_16_is_real_reversal() {
        // 0x0020 -> 0x2000, not the identity
        assert_eq!(to_big_endian_16(32), 8192);
        assert_eq!(to_big_endian_16(0xABCD), 0xCDAB);
    }

    #[test]
    fn test_swap_fixed_points() {
        assert_eq!(to_big_endian_16(0), 0);
        assert_eq!(to_big_endian_16(0xFFFF), 0xFFFF);
        assert_eq!(to_big_endian_16(0x7777), 0x7777);
        assert_eq!(to_big_endian_32(0), 0);
        assert_eq!(to_big_endian_32(u32::MAX), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_swap_32_is_involution(x in any::<u32>()) {
            prop_assert_eq!(to_big_endian_32(to_big_endian_32(x)), x);
        }

        #[test]
        fn prop_swap_16_is_involution(x in any::<u16>()) {
            prop_assert_eq!(to_big_endian_16(to_big_endian_16(x)), x);
        }

        #[test]
        fn prop_swap_32_matches_shift_formula(x in any::<u32>()) {
            let [b0, b1, b2, b3] = x.to_le_bytes();
            let expected = (u32::from(b0) << 24)
                | (u32::from(b1) << 16)
                | (u32::from(b2) << 8)
                | u32::from(b3);
            prop_assert_eq!(to_big_endian_32(x), expected);
        }
    }
}
