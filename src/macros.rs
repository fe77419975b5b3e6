/// Implements a binary operator for `I256` by value and by reference, plus
/// its `*Assign` counterpart, from a single expression over `$a` and `$b`.
macro_rules! impl_binop {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl core::ops::$tr for $crate::I256 {
            type Output = $crate::I256;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: $crate::I256) -> $crate::I256 {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<'a> core::ops::$tr<&'a $crate::I256> for $crate::I256 {
            type Output = $crate::I256;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'a $crate::I256) -> $crate::I256 {
                core::ops::$tr::$method(self, *rhs)
            }
        }

        impl<'a> core::ops::$tr<$crate::I256> for &'a $crate::I256 {
            type Output = $crate::I256;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: $crate::I256) -> $crate::I256 {
                core::ops::$tr::$method(*self, rhs)
            }
        }

        impl<'a, 'b> core::ops::$tr<&'a $crate::I256> for &'b $crate::I256 {
            type Output = $crate::I256;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'a $crate::I256) -> $crate::I256 {
                core::ops::$tr::$method(*self, *rhs)
            }
        }

        impl core::ops::$assign_tr for $crate::I256 {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: $crate::I256) {
                *self = core::ops::$tr::$method(*self, rhs);
            }
        }

        impl<'a> core::ops::$assign_tr<&'a $crate::I256> for $crate::I256 {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: &'a $crate::I256) {
                *self = core::ops::$tr::$method(*self, *rhs);
            }
        }
    };
}

/// `From<signed primitive>`: split into magnitude and sign.
macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for $crate::I256 {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_parts($crate::integers::U256::from(value.unsigned_abs() as u64), value < 0)
                }
            }
        )*
    };
}

/// `From<unsigned primitive>`: always non-negative.
macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for $crate::I256 {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_parts($crate::integers::U256::from(value as u64), false)
                }
            }
        )*
    };
}

/// `TryFrom<I256>` for primitives narrower than 128 bits, routed through the
/// 128-bit conversions and the primitive's own range check.
macro_rules! impl_try_into_narrow {
    ($($t:ty => $via:ty),* $(,)?) => {
        $(
            impl TryFrom<$crate::I256> for $t {
                type Error = $crate::error::Int256Error;

                #[inline]
                fn try_from(value: $crate::I256) -> Result<Self, Self::Error> {
                    let wide = <$via>::try_from(value)?;
                    <$t>::try_from(wide).map_err(|_| $crate::error::Int256Error::Overflow)
                }
            }
        )*
    };
}
