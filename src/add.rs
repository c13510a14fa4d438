//! Additive kernel: magnitude-only add/subtract, and the signed `+`/`-`
//! dispatch built on top of them.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::bigint::{BigInt, RADIX};
use crate::ops_macro::{forward_ref_binop, forward_ref_op_assign};

impl BigInt {
    /// `self += |rhs|`, ignoring sign. May grow `self` by one limb.
    fn add_mag(&mut self, rhs: &[u32]) {
        if rhs.len() > self.limbs.len() {
            self.limbs.resize(rhs.len(), 0);
        }

        let mut carry = 0u64;
        for i in 0..rhs.len() {
            let sum = self.limbs[i] as u64 + rhs[i] as u64 + carry;
            let overflow = sum >= RADIX;
            self.limbs[i] = (sum - RADIX * overflow as u64) as u32;
            carry = overflow as u64;
        }

        let mut i = rhs.len();
        while carry != 0 {
            if i == self.limbs.len() {
                self.limbs.push(0);
            }
            let sum = self.limbs[i] as u64 + carry;
            let overflow = sum >= RADIX;
            self.limbs[i] = (sum - RADIX * overflow as u64) as u32;
            carry = overflow as u64;
            i += 1;
        }
    }

    /// `self -= |rhs|`, ignoring sign. Precondition: `|self| >= |rhs|`.
    fn sub_mag(&mut self, rhs: &[u32]) {
        debug_assert!(BigInt::cmp_mag(&self.limbs, rhs) != Ordering::Less);

        let mut borrow = 0i64;
        for i in 0..rhs.len() {
            let mut diff = self.limbs[i] as i64 - rhs[i] as i64 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += RADIX as i64;
                borrow = 1;
            }
            self.limbs[i] = diff as u32;
        }

        let mut i = rhs.len();
        while borrow != 0 {
            let mut diff = self.limbs[i] as i64 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += RADIX as i64;
                borrow = 1;
            }
            self.limbs[i] = diff as u32;
            i += 1;
        }

        self.strip_leading_zeros();
    }

    /// `self = |rhs| - |self|`, written back into `self`. Precondition:
    /// `|rhs| >= |self|`.
    fn rsub_mag(&mut self, rhs: &[u32]) {
        debug_assert!(BigInt::cmp_mag(rhs, &self.limbs) != Ordering::Less);

        if rhs.len() > self.limbs.len() {
            self.limbs.resize(rhs.len(), 0);
        }

        let mut borrow = 0i64;
        for i in 0..rhs.len() {
            let mut diff = rhs[i] as i64 - self.limbs[i] as i64 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += RADIX as i64;
                borrow = 1;
            }
            self.limbs[i] = diff as u32;
        }
        debug_assert_eq!(borrow, 0, "rsub_mag: rhs smaller than self");

        self.strip_leading_zeros();
    }

    /// In-place `self += rhs`, honoring signs.
    fn add_assign_signed(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.negative == rhs.negative {
            self.add_mag(&rhs.limbs);
        } else if BigInt::cmp_mag(&self.limbs, &rhs.limbs) == Ordering::Greater {
            self.sub_mag(&rhs.limbs);
        } else {
            self.rsub_mag(&rhs.limbs);
            self.negative = !self.negative;
        }
        self.strip_leading_zeros();
    }

    /// In-place `self -= rhs`, honoring signs.
    fn sub_assign_signed(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.negative != rhs.negative {
            self.add_mag(&rhs.limbs);
        } else if BigInt::cmp_mag(&self.limbs, &rhs.limbs) == Ordering::Greater {
            self.sub_mag(&rhs.limbs);
        } else {
            self.rsub_mag(&rhs.limbs);
            self.negative = !self.negative;
        }
        self.strip_leading_zeros();
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out.add_assign_signed(rhs);
        out
    }
}
forward_ref_binop!(impl Add, add for BigInt);

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out.sub_assign_signed(rhs);
        out
    }
}
forward_ref_binop!(impl Sub, sub for BigInt);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_assign_signed(rhs);
    }
}
forward_ref_op_assign!(impl AddAssign, add_assign for BigInt);

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.sub_assign_signed(rhs);
    }
}
forward_ref_op_assign!(impl SubAssign, sub_assign for BigInt);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut out = self.clone();
        out.negate();
        out
    }
}
