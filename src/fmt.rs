//! Text rendering: base-10 `Display`, `Debug`, and the general-radix
//! emitter used to round-trip through [`BigInt::from_str_radix`].

use std::fmt;

use crate::bigint::BigInt;

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl BigInt {
    /// Renders the value in `radix` (`2..=36`), the inverse of
    /// [`BigInt::from_str_radix`]. Repeatedly short-divides a
    /// sign-cleared copy of the magnitude by `radix`, collecting
    /// remainders least-significant digit first, then reverses.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix out of range [2, 36]");

        if self.is_zero() {
            return "0".to_string();
        }

        let mut magnitude = BigInt::from_limbs(self.limbs.clone(), false);
        let divisor = BigInt::from(radix);
        let mut digits = Vec::new();
        while !magnitude.is_zero() {
            let remainder = &magnitude % &divisor;
            digits.push(DIGITS[remainder.limbs[0] as usize]);
            magnitude /= &divisor;
        }
        if self.negative {
            digits.push(b'-');
        }
        digits.reverse();
        String::from_utf8(digits).expect("digit alphabet is ASCII")
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}

impl fmt::Debug for BigInt {
    /// Delegates to `Display`: there's no fixed-size internal layout
    /// worth exposing beyond the decimal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero() {
        assert_eq!(BigInt::zero().to_string(), "0");
    }

    #[test]
    fn display_negative() {
        let a: BigInt = "-42".parse().unwrap();
        assert_eq!(a.to_string(), "-42");
    }

    #[test]
    fn to_str_radix_hex_matches_scenario() {
        // S6, emitter direction.
        let a: BigInt = "123456789012345678909876543211234567890".parse().unwrap();
        assert_eq!(a.to_str_radix(16), "5ce0e9a56015fec622ce19ed22bea6d2");
    }

    #[test]
    fn to_str_radix_round_trips_through_from_str_radix() {
        // P7
        let a: BigInt = "-987654321987654321098765432123456789".parse().unwrap();
        for radix in [2u32, 8, 16, 36] {
            let rendered = a.to_str_radix(radix);
            let parsed = BigInt::from_str_radix(&rendered, radix).unwrap();
            assert_eq!(parsed.to_string(), a.to_string());
        }
    }

    #[test]
    fn debug_delegates_to_display() {
        let a: BigInt = "123456789".parse().unwrap();
        assert_eq!(format!("{a:?}"), format!("{a}"));
    }
}
