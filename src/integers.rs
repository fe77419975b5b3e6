// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use ::uint::construct_uint;

// these have scuffed doc comments because the macro codegens the beginning of them
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    /// Used as the magnitude of [`crate::I256`].
    pub struct U256(4);
}

/// Width of the magnitude in bits.
pub const MAGNITUDE_BITS: usize = 256;

impl U256 {
    #[inline]
    pub fn wrapping_add(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_add(other);

        result
    }

    #[inline]
    pub fn wrapping_sub(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_sub(other);

        result
    }

    #[inline]
    pub fn wrapping_mul(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_mul(other);

        result
    }

    /// `self << n`, truncated to 256 bits, plus whether any set bit was lost.
    #[inline]
    pub fn overflowing_shl_bits(&self, n: usize) -> (U256, bool) {
        if self.is_zero() {
            return (U256::zero(), false);
        }
        if n >= MAGNITUDE_BITS {
            return (U256::zero(), true);
        }

        (*self << n, self.bits() + n > MAGNITUDE_BITS)
    }

    /// `|a - b|` together with whether `a < b`.
    #[inline]
    pub fn ordered_diff(&self, other: U256) -> (U256, bool) {
        if *self >= other {
            (self.wrapping_sub(other), false)
        } else {
            (other.wrapping_sub(*self), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_ops_wrap_at_256_bits() {
        assert_eq!(U256::MAX.wrapping_add(U256::one()), U256::zero());
        assert_eq!(U256::zero().wrapping_sub(U256::one()), U256::MAX);
        assert_eq!(U256::MAX.wrapping_mul(U256::from(2u64)), U256::MAX - U256::one());
    }

    #[test]
    fn shl_reports_lost_bits() {
        assert_eq!(U256::one().overflowing_shl_bits(255), (U256::one() << 255usize, false));
        assert_eq!(U256::from(2u64).overflowing_shl_bits(255), (U256::zero(), true));
        assert_eq!(U256::from(3u64).overflowing_shl_bits(255).1, true);
        assert_eq!(U256::one().overflowing_shl_bits(256), (U256::zero(), true));
        assert_eq!(U256::zero().overflowing_shl_bits(1000), (U256::zero(), false));
    }

    #[test]
    fn ordered_diff_reports_order() {
        assert_eq!(U256::from(10u64).ordered_diff(U256::from(7u64)), (U256::from(3u64), false));
        assert_eq!(U256::from(7u64).ordered_diff(U256::from(10u64)), (U256::from(3u64), true));
        assert_eq!(U256::from(7u64).ordered_diff(U256::from(7u64)), (U256::zero(), false));
    }
}
