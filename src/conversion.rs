// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::{
    error::Int256Error,
    integers::U256,
    utils::{has_hex_prefix, split_sign},
    I256,
};

/// Longest hex digit string that fits in 256 bits.
const MAX_HEX_DIGITS: usize = 64;

impl I256 {
    /// Parse a base 10 string with an optional single `+` or `-`.
    ///
    /// Leading zeros are accepted, underscores and whitespace are not.
    /// Values above `2^256 - 1` in magnitude fail with
    /// [`Int256Error::Overflow`].
    pub fn from_dec_str(src: &str) -> Result<Self, Int256Error> {
        let (neg, digits) = split_sign(src, true)?;
        if digits.is_empty() {
            return Err(Int256Error::EmptyNumber);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Int256Error::InvalidDigit(bad));
        }

        let abs = U256::from_dec_str(digits).map_err(|_| Int256Error::Overflow)?;
        Ok(Self::from_parts(abs, neg))
    }

    /// Parse `0x`/`0X` prefixed hex, optionally preceded by `-`.
    ///
    /// Zero padded digits (`0x01`) are rejected; `-0x0` is zero.
    pub fn from_hex_str(src: &str) -> Result<Self, Int256Error> {
        let (neg, rest) = split_sign(src, false)?;
        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .ok_or(Int256Error::MissingPrefix)?;

        if digits.is_empty() {
            return Err(Int256Error::EmptyNumber);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Int256Error::InvalidDigit(bad));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(Int256Error::LeadingZero);
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(Int256Error::Overflow);
        }

        let abs = U256::from_str_radix(digits, 16).map_err(|_| Int256Error::Overflow)?;
        Ok(Self::from_parts(abs, neg))
    }

    /// Like [`I256::from_dec_str`], panicking on error.
    #[track_caller]
    pub fn must_from_dec_str(src: &str) -> Self {
        Self::from_dec_str(src).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`I256::from_hex_str`], panicking on error.
    #[track_caller]
    pub fn must_from_hex_str(src: &str) -> Self {
        Self::from_hex_str(src).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Canonical decimal form: `-` for negatives, no leading zeros.
    pub fn to_dec_string(&self) -> String {
        self.to_string()
    }

    /// Canonical hex form: `0x` or `-0x`, lowercase digits, zero is `0x0`.
    pub fn to_hex_string(&self) -> String {
        format!("{self:#x}")
    }
}

/// Text form accepted anywhere a number is unmarshalled: hex when prefixed
/// with `0x`, `0X`, `-0x` or `-0X`, decimal otherwise.
impl FromStr for I256 {
    type Err = Int256Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if has_hex_prefix(src) {
            Self::from_hex_str(src)
        } else {
            Self::from_dec_str(src)
        }
    }
}

impl TryFrom<&str> for I256 {
    type Error = Int256Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        f.pad_integral(!self.is_negative(), "", &self.magnitude().to_string())
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for I256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = if self.is_zero() { "0".to_owned() } else { format!("{:x}", self.magnitude()) };
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::UpperHex for I256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = if self.is_zero() { "0".to_owned() } else { format!("{:x}", self.magnitude()).to_ascii_uppercase() };
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

// --- primitive conversions ---

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for I256 {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from(value.unsigned_abs()).with_sign(value < 0)
    }
}

impl From<u128> for I256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_parts(U256([value as u64, (value >> 64) as u64, 0, 0]), false)
    }
}

impl From<U256> for I256 {
    #[inline]
    fn from(value: U256) -> Self {
        Self::from_parts(value, false)
    }
}

impl I256 {
    #[inline]
    fn with_sign(self, negative: bool) -> Self {
        Self::from_parts(self.magnitude(), negative)
    }

    /// Magnitude as `u128` when it fits in the low two words.
    #[inline]
    fn low_u128(&self) -> Option<u128> {
        let U256(ref a) = self.magnitude();
        if a[2] != 0 || a[3] != 0 {
            return None;
        }
        Some(((a[1] as u128) << 64) | (a[0] as u128))
    }
}

impl TryFrom<I256> for u128 {
    type Error = Int256Error;

    fn try_from(v: I256) -> Result<Self, Self::Error> {
        if v.is_negative() { return Err(Int256Error::Overflow); }
        v.low_u128().ok_or(Int256Error::Overflow)
    }
}

impl TryFrom<I256> for i128 {
    type Error = Int256Error;

    fn try_from(v: I256) -> Result<Self, Self::Error> {
        let abs = v.low_u128().ok_or(Int256Error::Overflow)?;

        if !v.is_negative() {
            return i128::try_from(abs).map_err(|_| Int256Error::Overflow);
        }
        // negative range reaches one further: -2^127
        if abs > i128::MIN.unsigned_abs() {
            return Err(Int256Error::Overflow);
        }
        Ok((abs as i128).wrapping_neg())
    }
}

impl TryFrom<I256> for U256 {
    type Error = Int256Error;

    fn try_from(v: I256) -> Result<Self, Self::Error> {
        if v.is_negative() { return Err(Int256Error::Overflow); }
        Ok(v.magnitude())
    }
}

impl_try_into_narrow!(
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, isize => i128,
    u8 => u128, u16 => u128, u32 => u128, u64 => u128, usize => u128,
);
