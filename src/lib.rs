//! Arbitrary-precision signed integer arithmetic.
//!
//! `BigInt` stores a sign and a magnitude as a little-endian vector of
//! `u32` limbs in radix `2^31`. It supports the usual arithmetic,
//! comparison, and text-conversion operators, schoolbook and Karatsuba
//! multiplication, short and binary-search division, and text parsing
//! in any radix from 2 to 36.

mod add;
mod bigint;
mod cmp;
mod div;
mod error;
mod fmt;
mod math;
mod mul;
mod ops_macro;
mod parse;
mod shift;


pub use bigint::BigInt;
pub use error::BigIntError;
pub use math::{abs, pow, sgn, Numeric};
