// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use core::cmp::Ordering;
use core::ops::{Neg, Shl, ShlAssign, Shr, ShrAssign};

use tracing::{debug, trace};

use crate::{bignum, error::Int256Error, integers::{U256, MAGNITUDE_BITS}};

/// Signed 256-bit integer in sign-magnitude form.
///
/// The magnitude covers the full `[0, 2^256 - 1]` range, so the type is
/// symmetric: `MIN == -MAX`. Zero is never stored with the sign flag set;
/// every constructor and operator goes through [`I256::from_parts`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct I256 {
    abs: U256,
    neg: bool,
}

impl I256 {
    pub const ZERO: Self = Self { abs: U256::zero(), neg: false };
    pub const ONE: Self = Self { abs: U256::one(), neg: false };
    pub const MINUS_ONE: Self = Self { abs: U256::one(), neg: true };
    /// `2^256 - 1`
    pub const MAX: Self = Self { abs: U256::MAX, neg: false };
    /// `-(2^256 - 1)`
    pub const MIN: Self = Self { abs: U256::MAX, neg: true };

    /// Build from a magnitude and a sign flag. A zero magnitude always
    /// yields the non-negative zero.
    #[inline]
    pub const fn from_parts(magnitude: U256, negative: bool) -> Self {
        let neg = negative && !magnitude.is_zero();
        Self { abs: magnitude, neg }
    }

    #[inline]
    pub const fn magnitude(&self) -> U256 {
        self.abs
    }

    #[inline]
    pub const fn unsigned_abs(self) -> U256 {
        self.abs
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self { abs: self.abs, neg: false }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.neg
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        !self.neg && !self.abs.is_zero()
    }

    /// -1 if negative, 0 if zero, +1 if positive.
    #[inline]
    pub const fn signum(&self) -> i32 {
        if self.abs.is_zero() {
            0
        } else if self.neg {
            -1
        } else {
            1
        }
    }

    // --- addition / subtraction ---

    /// Sum and whether the magnitude wrapped past `2^256 - 1`.
    #[inline]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        if self.neg == rhs.neg {
            // x + y, (-x) + (-y) == -(x + y)
            let (abs, overflow) = self.abs.overflowing_add(rhs.abs);
            (Self::from_parts(abs, self.neg), overflow)
        } else {
            // x + (-y) == x - y, (-x) + y == -(x - y); sign of the larger magnitude
            let (abs, swapped) = self.abs.ordered_diff(rhs.abs);
            (Self::from_parts(abs, self.neg != swapped), false)
        }
    }

    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        if self.neg != rhs.neg {
            // x - (-y) == x + y, (-x) - y == -(x + y)
            let (abs, overflow) = self.abs.overflowing_add(rhs.abs);
            (Self::from_parts(abs, self.neg), overflow)
        } else {
            // x - y, (-x) - (-y) == -(x - y)
            let (abs, swapped) = self.abs.ordered_diff(rhs.abs);
            (Self::from_parts(abs, self.neg != swapped), false)
        }
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_add(rhs);
        if overflow { None } else { Some(result) }
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_sub(rhs);
        if overflow { None } else { Some(result) }
    }

    /// Sum with the magnitude truncated to 256 bits.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    // --- multiplication ---

    #[inline]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (abs, overflow) = self.abs.overflowing_mul(rhs.abs);
        (Self::from_parts(abs, self.neg != rhs.neg), overflow)
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_mul(rhs);
        if overflow { None } else { Some(result) }
    }

    /// Product with the magnitude truncated to 256 bits.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// `self * self`; never negative.
    #[inline]
    pub fn overflowing_square(self) -> (Self, bool) {
        let (abs, overflow) = self.abs.overflowing_mul(self.abs);
        (Self::from_parts(abs, false), overflow)
    }

    #[track_caller]
    #[inline]
    pub fn square(self) -> Self {
        let (result, overflow) = self.overflowing_square();
        if overflow { panic!("arithmetic overflow"); }
        result
    }

    /// `floor(sqrt(self))`.
    ///
    /// Panics on a negative value.
    #[track_caller]
    pub fn sqrt(self) -> Self {
        if self.neg {
            panic!("square root of negative number");
        }
        Self::from_parts(self.abs.integer_sqrt(), false)
    }

    // --- division ---

    /// Truncated quotient and remainder. The quotient is negative when the
    /// signs differ, the remainder takes the dividend's sign.
    ///
    /// Panics when `rhs` is zero.
    #[track_caller]
    #[inline]
    pub fn quo_rem(self, rhs: Self) -> (Self, Self) {
        if rhs.is_zero() { panic!("division by zero"); }

        let (q, r) = self.abs.div_mod(rhs.abs);
        (Self::from_parts(q, self.neg != rhs.neg), Self::from_parts(r, self.neg))
    }

    /// Truncated division. Panics when `rhs` is zero.
    #[track_caller]
    #[inline]
    pub fn quo(self, rhs: Self) -> Self {
        if rhs.is_zero() { panic!("division by zero"); }

        Self::from_parts(self.abs / rhs.abs, self.neg != rhs.neg)
    }

    /// Truncated remainder. Panics when `rhs` is zero.
    #[track_caller]
    #[inline]
    pub fn rem(self, rhs: Self) -> Self {
        if rhs.is_zero() { panic!("division by zero"); }

        Self::from_parts(self.abs % rhs.abs, self.neg)
    }

    #[inline]
    pub fn checked_quo(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(self.quo(rhs)) }
    }

    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(self.rem(rhs)) }
    }

    // --- exponentiation ---

    /// `self ^ exponent`, optionally reduced modulo `|modulus|`.
    ///
    /// Non-negative base and exponent without a modulus stay on the 256-bit
    /// path. Anything else (negative base, negative exponent, modulus) is
    /// evaluated by the bignum bridge: without a modulus a non-positive
    /// exponent gives 1; with a non-zero modulus the result lies in
    /// `[0, |modulus|)` and a negative exponent uses the modular inverse.
    pub fn exp(self, exponent: Self, modulus: Option<Self>) -> Result<Self, Int256Error> {
        if modulus.is_none() && !self.neg && !exponent.neg {
            let (abs, overflow) = self.abs.overflowing_pow(exponent.abs);
            if overflow {
                debug!(base = %self, exponent = %exponent, "exponentiation overflows 256 bits");
                return Err(Int256Error::Overflow);
            }
            return Ok(Self::from_parts(abs, false));
        }

        trace!(base = %self, exponent = %exponent, ?modulus, "exponentiation via bignum");
        let modulus = modulus.map(|m| m.to_big());
        let result = bignum::exp(&self.to_big(), &exponent.to_big(), modulus.as_ref())?;

        Self::from_big(&result)
    }

    // --- shifts ---

    /// `self << n` on the magnitude; the sign is kept.
    #[inline]
    pub fn overflowing_shl(self, n: usize) -> (Self, bool) {
        let (abs, overflow) = self.abs.overflowing_shl_bits(n);
        (Self::from_parts(abs, self.neg), overflow)
    }

    #[inline]
    pub fn checked_shl(self, n: usize) -> Option<Self> {
        let (result, overflow) = self.overflowing_shl(n);
        if overflow { None } else { Some(result) }
    }

    #[inline]
    pub fn wrapping_shl(self, n: usize) -> Self {
        self.overflowing_shl(n).0
    }

    /// Arithmetic right shift: `floor(self / 2^n)`, the result a two's
    /// complement shift of the same integer would give.
    pub fn arithmetic_shr(self, n: usize) -> Self {
        if !self.neg {
            if n >= MAGNITUDE_BITS {
                return Self::ZERO;
            }
            return Self::from_parts(self.abs >> n, false);
        }

        trace!(value = %self, n, "negative right shift via bignum");
        let shifted = bignum::floor_shr(&self.to_big(), n);
        // |floor(x / 2^n)| <= |x| for negative x
        Self::from_big(&shifted).unwrap_or_else(|_| panic!("right shift grew the magnitude"))
    }

    // --- bitwise, two's complement semantics ---

    /// Two's complement AND. The only unrepresentable result is
    /// `-a & -b == -2^256`, reported as overflow.
    pub fn overflowing_and(self, rhs: Self) -> (Self, bool) {
        let one = U256::one();

        match (self.neg, rhs.neg) {
            (false, false) => (Self::from_parts(self.abs & rhs.abs, false), false),
            (true, true) => {
                // (-x) & (-y) == ^(x-1) & ^(y-1) == ^((x-1) | (y-1)) == -(((x-1) | (y-1)) + 1)
                let x1 = self.abs.wrapping_sub(one);
                let y1 = rhs.abs.wrapping_sub(one);
                let (abs, overflow) = (x1 | y1).overflowing_add(one);
                (Self::from_parts(abs, true), overflow)
            }
            _ => {
                let (x, y) = if self.neg { (rhs, self) } else { (self, rhs) };
                // x & (-y) == x & ^(y-1) == x &^ (y-1)
                let y1 = y.abs.wrapping_sub(one);
                (Self::from_parts(x.abs & !y1, false), false)
            }
        }
    }

    #[inline]
    pub fn checked_and(self, rhs: Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_and(rhs);
        if overflow { None } else { Some(result) }
    }

    /// Two's complement OR; the magnitude never exceeds either operand's.
    pub fn or(self, rhs: Self) -> Self {
        let one = U256::one();

        match (self.neg, rhs.neg) {
            (false, false) => Self::from_parts(self.abs | rhs.abs, false),
            (true, true) => {
                // (-x) | (-y) == ^(x-1) | ^(y-1) == ^((x-1) & (y-1)) == -(((x-1) & (y-1)) + 1)
                let x1 = self.abs.wrapping_sub(one);
                let y1 = rhs.abs.wrapping_sub(one);
                Self::from_parts((x1 & y1).wrapping_add(one), true)
            }
            _ => {
                let (x, y) = if self.neg { (rhs, self) } else { (self, rhs) };
                // x | (-y) == x | ^(y-1) == ^((y-1) &^ x) == -(((y-1) &^ x) + 1)
                let y1 = y.abs.wrapping_sub(one);
                Self::from_parts((y1 & !x.abs).wrapping_add(one), true)
            }
        }
    }
}

impl Default for I256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        if core::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        if self.abs.is_zero() && other.abs.is_zero() {
            return Ordering::Equal;
        }

        match (self.neg, other.neg) {
            (false, false) => self.abs.cmp(&other.abs),
            (true, true) => other.abs.cmp(&self.abs),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for I256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for I256 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(self.abs, !self.neg)
    }
}

impl Neg for &I256 {
    type Output = I256;

    #[inline]
    fn neg(self) -> I256 {
        -*self
    }
}

impl_binop!(Add, add, AddAssign, add_assign, |a, b| {
    let (result, overflow) = a.overflowing_add(b);
    if overflow { panic!("arithmetic overflow"); }
    result
});

impl_binop!(Sub, sub, SubAssign, sub_assign, |a, b| {
    let (result, overflow) = a.overflowing_sub(b);
    if overflow { panic!("arithmetic overflow"); }
    result
});

impl_binop!(Mul, mul, MulAssign, mul_assign, |a, b| {
    let (result, overflow) = a.overflowing_mul(b);
    if overflow { panic!("arithmetic overflow"); }
    result
});

impl_binop!(Div, div, DivAssign, div_assign, |a, b| a.quo(b));

impl_binop!(Rem, rem, RemAssign, rem_assign, |a, b| I256::rem(a, b));

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| {
    let (result, overflow) = a.overflowing_and(b);
    if overflow { panic!("arithmetic overflow"); }
    result
});

impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a.or(b));

impl Shl<usize> for I256 {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn shl(self, rhs: usize) -> Self {
        let (result, overflow) = self.overflowing_shl(rhs);
        if overflow { panic!("arithmetic overflow"); }
        result
    }
}

impl ShlAssign<usize> for I256 {
    #[track_caller]
    #[inline]
    fn shl_assign(&mut self, rhs: usize) { *self = *self << rhs; }
}

impl Shr<usize> for I256 {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: usize) -> Self { self.arithmetic_shr(rhs) }
}

impl ShrAssign<usize> for I256 {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) { *self = self.arithmetic_shr(rhs); }
}

impl core::iter::Sum for I256 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> core::iter::Sum<&'a I256> for I256 {
    fn sum<I: Iterator<Item = &'a I256>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl core::iter::Product for I256 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
