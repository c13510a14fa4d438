//! Division kernel: short division by a single-limb divisor, and
//! general division implemented as a binary search on the quotient.

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::bigint::{BigInt, RADIX};
use crate::error::BigIntError;
use crate::ops_macro::{forward_ref_binop, forward_ref_op_assign};

impl BigInt {
    /// Divides the magnitude by the single-limb value `d` (`1 <= d < RADIX`),
    /// returning `(quotient_limbs, remainder)` with a rolling 64-bit
    /// remainder scanned from the most-significant limb down.
    fn divmod_mag_by_limb(limbs: &[u32], d: u32) -> (Vec<u32>, u32) {
        let d = d as u64;
        let mut quotient = vec![0u32; limbs.len()];
        let mut remainder = 0u64;
        for i in (0..limbs.len()).rev() {
            let cur = remainder * RADIX + limbs[i] as u64;
            quotient[i] = (cur / d) as u32;
            remainder = cur % d;
        }
        let mut trimmed = quotient;
        while trimmed.len() > 1 && *trimmed.last().unwrap() == 0 {
            trimmed.pop();
        }
        (trimmed, remainder as u32)
    }

    /// Short division: divisor fits in one limb. Returns
    /// `(quotient, remainder)`; remainder takes the dividend's sign
    /// (truncated division), quotient sign is the XOR of input signs.
    fn divide_short(&self, divisor_limb: u32, divisor_negative: bool) -> (BigInt, BigInt) {
        let (q_limbs, r) = Self::divmod_mag_by_limb(&self.limbs, divisor_limb);
        let quotient = BigInt::from_limbs(q_limbs, self.negative ^ divisor_negative);
        let remainder = BigInt::from_limbs(vec![r], self.negative);
        (quotient, remainder)
    }

    /// General division: binary search for the largest magnitude `mid`
    /// such that `mid * |divisor| <= |dividend|`.
    fn divide_binary_search(&self, divisor: &BigInt) -> BigInt {
        let dividend_mag = BigInt::from_limbs(self.limbs.clone(), false);
        let divisor_mag = BigInt::from_limbs(divisor.limbs.clone(), false);

        let mut lo = BigInt::zero();
        let mut hi = dividend_mag.clone();
        let mut quotient = BigInt::zero();

        while lo <= hi {
            let span = &hi - &lo;
            let (half, _) = span.divide_short(2, false);
            let mid = &lo + &half;

            let product = &mid * &divisor_mag;
            if BigInt::cmp_mag(&product.limbs, &dividend_mag.limbs) == Ordering::Greater {
                hi = &mid - &BigInt::one();
            } else {
                quotient = mid.clone();
                lo = &mid + &BigInt::one();
            }
        }

        quotient.negative = (self.negative ^ divisor.negative) && !quotient.is_zero();
        quotient
    }

    /// Fallible division. `Err(BigIntError::DivideByZero)` when `rhs`
    /// is zero; `self` is left untouched either way, since this never
    /// mutates in place.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        if rhs.limbs.len() == 1 {
            Ok(self.divide_short(rhs.limbs[0], rhs.negative).0)
        } else {
            Ok(self.divide_binary_search(rhs))
        }
    }

    /// Fallible modulus. `a % b == a - b * (a / b)` for a multi-limb
    /// divisor; for a single-limb divisor the short-division remainder
    /// is returned directly.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        if rhs.limbs.len() == 1 {
            Ok(self.divide_short(rhs.limbs[0], rhs.negative).1)
        } else {
            let quotient = self.divide_binary_search(rhs);
            Ok(self - &(rhs * &quotient))
        }
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `rhs` is zero, matching the panicking behavior of the
    /// primitive integer `/` operator. Use [`BigInt::checked_div`] for
    /// a non-panicking path.
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("division by zero")
    }
}
forward_ref_binop!(impl Div, div for BigInt);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`BigInt::checked_rem`] for a
    /// non-panicking path.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("division by zero")
    }
}
forward_ref_binop!(impl Rem, rem for BigInt);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}
forward_ref_op_assign!(impl DivAssign, div_assign for BigInt);

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}
forward_ref_op_assign!(impl RemAssign, rem_assign for BigInt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_with_multi_limb_divisor() {
        // S5
        let a: BigInt = "9999999999999999999999".parse().unwrap();
        let b: BigInt = "9999999999".parse().unwrap();
        assert_eq!((&a / &b).to_string(), "1000000000100");
        assert_eq!((&a % &b).to_string(), "99");
    }

    #[test]
    fn quotient_zero_when_divisor_exceeds_dividend() {
        let a = BigInt::from(5i64);
        let b = BigInt::from(100i64);
        assert!((&a / &b).is_zero());
        assert_eq!((&a % &b).to_string(), "5");
    }

    #[test]
    fn division_identity_holds() {
        // P6
        let a: BigInt = "123456789123456789123456789".parse().unwrap();
        let b: BigInt = "98765431".parse().unwrap();
        let q = &a / &b;
        let r = &a % &b;
        assert_eq!(&(&q * &b) + &r, a);
        assert!(r.is_zero() || r.negative == a.negative);
    }

    #[test]
    fn division_by_zero_is_err_and_leaves_input_unchanged() {
        // S8
        let a: BigInt = "42".parse().unwrap();
        let zero = BigInt::zero();
        assert_eq!(
            a.checked_div(&zero).unwrap_err(),
            BigIntError::DivideByZero
        );
        assert_eq!(
            a.checked_rem(&zero).unwrap_err(),
            BigIntError::DivideByZero
        );
        assert_eq!(a.to_string(), "42");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_operator_panics_on_zero_divisor() {
        let a = BigInt::from(1i64);
        let _ = &a / &BigInt::zero();
    }

    #[test]
    fn remainder_sign_matches_dividend() {
        let a = BigInt::from(-7i64);
        let b = BigInt::from(3i64);
        assert_eq!((&a % &b).to_string(), "-1");
        assert_eq!((&a / &b).to_string(), "-2");
    }
}
