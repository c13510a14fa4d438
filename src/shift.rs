//! Whole-limb shifts: multiplying or dividing by a power of `RADIX`.
//! These operate on entire limbs rather than individual bits, since the
//! kernels above only ever need to reposition a magnitude by whole
//! limbs (Karatsuba's recombination, binary-search division's probing).

use crate::bigint::BigInt;

impl BigInt {
    /// `self * RADIX^k`. A no-op on zero; otherwise prepends `k` zero
    /// limbs at the low end.
    pub fn left_shift(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut limbs = vec![0u32; k];
        limbs.extend_from_slice(&self.limbs);
        Self::from_limbs(limbs, self.negative)
    }

    /// `self / RADIX^k`, truncating. Drops the `k` least-significant
    /// limbs; the result is zero once `k` reaches the limb count.
    pub fn right_shift(&self, k: usize) -> Self {
        if k >= self.limbs.len() {
            return Self::zero();
        }
        let limbs = self.limbs[k..].to_vec();
        Self::from_limbs(limbs, self.negative)
    }
}
