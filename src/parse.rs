//! Constructors from primitive integers and from text.

use std::str::FromStr;

use crate::bigint::{BigInt, RADIX};
use crate::error::BigIntError;

/// Converts a byte of a text literal to its digit value under `radix`,
/// following `'0'..'9' -> 0..9`, `'a'..'z' -> 10..35`, `'A'..'Z' -> 10..35`.
fn digit_value(c: char, radix: u32) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => return None,
    };
    if value < radix { Some(value) } else { None }
}

impl BigInt {
    /// Builds a `BigInt` from the magnitude of a primitive integer,
    /// widened to `u128` so every primitive width (up to `i128`/`u128`)
    /// shares one peeling loop.
    pub(crate) fn from_u128_magnitude(mut magnitude: u128, negative: bool) -> Self {
        let mut limbs = Vec::new();
        loop {
            limbs.push((magnitude % RADIX as u128) as u32);
            magnitude /= RADIX as u128;
            if magnitude == 0 {
                break;
            }
        }
        BigInt::from_limbs(limbs, negative)
    }

    /// Parses `s` in the given `radix` (`2..=36`), ignoring any `b<radix>_`
    /// prefix embedded in `s` — use this when the radix is already known
    /// and the string is expected to carry bare digits.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, BigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(BigIntError::parse(format!(
                "radix {radix} out of range [2, 36]"
            )));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(BigIntError::parse("empty digit sequence"));
        }

        let mut value = BigInt::zero();
        let radix_big = BigInt::from(radix);
        for c in digits.chars() {
            let digit = digit_value(c, radix).ok_or_else(|| {
                BigIntError::parse(format!("'{c}' is not a valid digit in base {radix}"))
            })?;
            value *= &radix_big;
            value += &BigInt::from(digit);
        }
        value.negative = negative && !value.is_zero();

        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses the grammar `prefix? '-'? digit+` where
    /// `prefix := 'b' radix '_'`, `radix` a decimal number in `[2, 36]`,
    /// defaulting to base 10 when no prefix is present.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('b') {
            let underscore = rest
                .find('_')
                .ok_or_else(|| BigIntError::parse("missing '_' after radix prefix"))?;
            let (radix_digits, body) = rest.split_at(underscore);
            let body = &body[1..]; // drop the '_'
            let radix: u32 = radix_digits
                .parse()
                .map_err(|_| BigIntError::parse(format!("invalid radix '{radix_digits}'")))?;
            return BigInt::from_str_radix(body, radix);
        }
        BigInt::from_str_radix(s, 10)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let negative = value < 0;
                    let magnitude = (value as i128).unsigned_abs();
                    BigInt::from_u128_magnitude(magnitude, negative)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    BigInt::from_u128_magnitude(value as u128, false)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_primitive_zero() {
        assert!(BigInt::from(0i64).is_zero());
        assert!(BigInt::from(0u64).is_zero());
    }

    #[test]
    fn from_primitive_negative() {
        let v = BigInt::from(-123456789i64);
        assert!(v.negative);
        assert_eq!(v.to_string(), "-123456789");
    }

    #[test]
    fn from_primitive_crosses_radix_boundary() {
        // 2^31 doesn't fit in one limb (limbs are < 2^31), so this needs two.
        let v = BigInt::from(2147483648u64);
        assert_eq!(v.limbs, vec![0, 1]);
    }

    #[test]
    fn parse_base_10_roundtrip() {
        let v: BigInt = "123456789123456789123456789".parse().unwrap();
        assert_eq!(v.to_string(), "123456789123456789123456789");
    }

    #[test]
    fn parse_negative_zero_normalizes() {
        let v: BigInt = "-0".parse().unwrap();
        assert!(!v.negative);
        assert!(v.is_zero());
    }

    #[test]
    fn parse_rejects_empty_digits() {
        assert!("".parse::<BigInt>().is_err());
        assert!("-".parse::<BigInt>().is_err());
    }

    #[test]
    fn parse_rejects_bad_radix_prefix() {
        assert!("b_123".parse::<BigInt>().is_err());
        assert!("b37_10".parse::<BigInt>().is_err());
        assert!("b1_10".parse::<BigInt>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_alphabet_digit() {
        assert!("b2_102".parse::<BigInt>().is_err());
        assert!("12a4".parse::<BigInt>().is_err());
    }

    #[test]
    fn parse_explicit_base_10_prefix() {
        let a: BigInt = "123456789012345678909876543211234567890".parse().unwrap();
        let b: BigInt = "b10_123456789012345678909876543211234567890"
            .parse()
            .unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn parse_hex_round_trip_matches_spec_scenario() {
        let a: BigInt = "123456789012345678909876543211234567890".parse().unwrap();
        let b: BigInt = "b16_5CE0E9A56015FEC622CE19ED22BEA6D2".parse().unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }
}
