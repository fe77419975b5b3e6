// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Bridge to arbitrary precision integers.
//!
//! Used for values wider than 256 bits and for the operations whose signed
//! semantics the fixed-width magnitude cannot express on its own: modular and
//! negative exponentiation, and right shifts of negative values.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::{error::Int256Error, integers::{U256, MAGNITUDE_BITS}, I256};

pub(crate) fn u256_to_biguint(value: &U256) -> BigUint {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

pub(crate) fn biguint_to_u256(value: &BigUint) -> Result<U256, Int256Error> {
    if value.bits() > MAGNITUDE_BITS as u64 {
        return Err(Int256Error::Overflow);
    }
    Ok(U256::from_big_endian(&value.to_bytes_be()))
}

/// `base ^ exponent`, reduced modulo `|modulus|` when a non-zero modulus is
/// given. Mirrors `math/big` conventions: without a modulus, a non-positive
/// exponent yields 1.
pub(crate) fn exp(base: &BigInt, exponent: &BigInt, modulus: Option<&BigInt>) -> Result<BigInt, Int256Error> {
    match modulus.map(|m| m.abs()).filter(|m| !m.is_zero()) {
        None => {
            if !exponent.is_positive() {
                return Ok(BigInt::one());
            }
            // 0, 1 and -1 never grow
            if base.magnitude().bits() <= 1 {
                return Ok(if exponent.is_even() { base.abs() } else { base.clone() });
            }
            // |base| >= 2, so any exponent from 256 on leaves the range
            let e = u32::try_from(exponent)
                .ok()
                .filter(|e| (*e as usize) < MAGNITUDE_BITS)
                .ok_or(Int256Error::Overflow)?;
            Ok(base.pow(e))
        }
        Some(m) => {
            if exponent.is_negative() {
                let inverse = base.modinv(&m).ok_or_else(|| {
                    debug!(%base, modulus = %m, "base has no modular inverse");
                    Int256Error::NotInvertible
                })?;
                Ok(inverse.modpow(&-exponent, &m))
            } else {
                Ok(base.modpow(exponent, &m))
            }
        }
    }
}

/// `floor(value / 2^n)`.
#[inline]
pub(crate) fn floor_shr(value: &BigInt, n: usize) -> BigInt {
    value >> n
}

impl I256 {
    /// Exact arbitrary precision value.
    pub fn to_big(&self) -> BigInt {
        let sign = if self.is_negative() { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, u256_to_biguint(&self.magnitude()))
    }

    /// Fails with [`Int256Error::Overflow`] when `|value| > 2^256 - 1`.
    pub fn from_big(value: &BigInt) -> Result<Self, Int256Error> {
        let abs = biguint_to_u256(value.magnitude()).map_err(|err| {
            debug!(bits = value.bits(), "bignum does not fit in 256 bits");
            err
        })?;
        Ok(Self::from_parts(abs, value.sign() == Sign::Minus))
    }

    /// Like [`I256::from_big`], panicking on overflow.
    #[track_caller]
    pub fn must_from_big(value: &BigInt) -> Self {
        Self::from_big(value).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl TryFrom<&BigInt> for I256 {
    type Error = Int256Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        Self::from_big(value)
    }
}

impl TryFrom<BigInt> for I256 {
    type Error = Int256Error;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        Self::from_big(&value)
    }
}

impl From<I256> for BigInt {
    fn from(value: I256) -> Self {
        value.to_big()
    }
}

impl From<&I256> for BigInt {
    fn from(value: &I256) -> Self {
        value.to_big()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn max_big() -> BigInt {
        (BigInt::one() << 256usize) - 1
    }

    #[test]
    fn to_big_carries_sign() {
        assert_eq!(I256::from(-10).to_big(), big(-10));
        assert_eq!(I256::from(10).to_big(), big(10));
        assert_eq!(I256::ZERO.to_big(), BigInt::zero());
        assert_eq!(I256::MAX.to_big(), max_big());
        assert_eq!(I256::MIN.to_big(), -max_big());
    }

    #[test]
    fn from_big_at_the_boundary() {
        assert_eq!(I256::from_big(&max_big()), Ok(I256::MAX));
        assert_eq!(I256::from_big(&-max_big()), Ok(I256::MIN));
        assert_eq!(I256::from_big(&(max_big() + 1)), Err(Int256Error::Overflow));
        assert_eq!(I256::from_big(&(-max_big() - 1)), Err(Int256Error::Overflow));
    }

    #[test]
    fn from_big_zero_is_positive() {
        let z = I256::from_big(&-BigInt::zero()).unwrap();
        assert!(!z.is_negative());
    }

    #[test]
    #[should_panic(expected = "value does not fit in 256 bits")]
    fn must_from_big_panics_on_overflow() {
        let _ = I256::must_from_big(&(max_big() * 2));
    }

    #[test]
    fn try_from_round_trip() {
        let v = I256::from(-123_456_789i64);
        let b: BigInt = v.into();
        assert_eq!(I256::try_from(&b), Ok(v));
        assert_eq!(I256::try_from(b), Ok(v));
    }

    #[test]
    fn exp_matches_big_conventions() {
        assert_eq!(exp(&big(10), &big(3), Some(&big(3))), Ok(big(1)));
        assert_eq!(exp(&big(10), &big(3), Some(&big(0))), Ok(big(1000)));
        assert_eq!(exp(&big(-3), &big(3), None), Ok(big(-27)));
        assert_eq!(exp(&big(-3), &big(-3), None), Ok(big(1)));
        assert_eq!(exp(&big(0), &big(5), None), Ok(big(0)));
        assert_eq!(exp(&big(2), &big(1000), None), Err(Int256Error::Overflow));
    }

    #[test]
    fn floor_shr_rounds_down() {
        assert_eq!(floor_shr(&big(-10), 4), big(-1));
        assert_eq!(floor_shr(&big(-32), 4), big(-2));
        assert_eq!(floor_shr(&big(10), 4), big(0));
    }
}
