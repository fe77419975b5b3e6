// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors surfaced by fallible constructors and conversions.
///
/// Format errors and [`Int256Error::Overflow`] are kept apart so callers can
/// tell malformed input from a value that is simply too large. Domain errors
/// (negative square root, zero divisor) are panics, not variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Int256Error {
    #[error("multiple sign at the beginning")]
    MultipleSign,
    #[error("hex string without 0x prefix")]
    MissingPrefix,
    #[error("hex number with leading zero digits")]
    LeadingZero,
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    #[error("empty number")]
    EmptyNumber,
    #[error("value does not fit in 256 bits")]
    Overflow,
    #[error("base is not invertible modulo the modulus")]
    NotInvertible,
}

impl Int256Error {
    /// Malformed decimal or hexadecimal text.
    pub const fn is_format(&self) -> bool {
        matches!(
            self,
            Self::MultipleSign
                | Self::MissingPrefix
                | Self::LeadingZero
                | Self::InvalidDigit(_)
                | Self::EmptyNumber
        )
    }

    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow)
    }
}
