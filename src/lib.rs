//! Signed 256-bit integers in sign-magnitude form.
//!
//! [`I256`] pairs a 256-bit unsigned magnitude ([`U256`]) with a sign flag,
//! so its range is `[-(2^256 - 1), 2^256 - 1]`. Arithmetic runs on the
//! fixed-width magnitude; the few operations whose signed semantics that
//! cannot express (modular exponentiation, floor shifts of negatives) go
//! through `num-bigint`.

#[macro_use]
mod macros;

pub mod error;
pub mod integers;
pub mod sint;
pub mod bignum;
pub mod conversion;
#[cfg(feature = "serde")]
pub mod encoding;
mod utils;

pub use error::Int256Error;
pub use sint::I256;
pub use integers::U256;
