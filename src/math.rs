//! Sign, magnitude, and exponentiation, generalized over any numeric
//! type via the `Numeric` trait so `sgn`/`abs` read the same whether
//! called on a `BigInt` or a primitive integer.

use crate::bigint::BigInt;

/// A type with a sign, a magnitude, and exponentiation. Implemented for
/// `BigInt` and for every primitive integer width so callers can write
/// `sgn(&x)`/`abs(&x)`/`pow(&x, n)` generically instead of reaching for
/// a type-specific method.
pub trait Numeric {
    /// `-1`, `0`, or `1` according to the value's sign.
    fn sgn(&self) -> i8;
    /// The non-negative magnitude.
    fn abs(&self) -> Self;
    /// `self` raised to the `exponent`-th power. `x.pow(0) == 1` for
    /// every `x`, including `0.pow(0)`.
    fn pow(&self, exponent: u64) -> Self;
}

impl Numeric for BigInt {
    fn sgn(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    fn abs(&self) -> Self {
        BigInt::from_limbs(self.limbs.clone(), false)
    }

    fn pow(&self, exponent: u64) -> Self {
        let mut base = self.clone();
        let mut exponent = exponent;
        let mut result = BigInt::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exponent >>= 1;
        }
        result
    }
}

macro_rules! impl_numeric_signed {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn sgn(&self) -> i8 {
                    match self.cmp(&0) {
                        std::cmp::Ordering::Less => -1,
                        std::cmp::Ordering::Equal => 0,
                        std::cmp::Ordering::Greater => 1,
                    }
                }
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }
                fn pow(&self, exponent: u64) -> Self {
                    <$t>::pow(*self, exponent as u32)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn sgn(&self) -> i8 {
                    if *self == 0 { 0 } else { 1 }
                }
                fn abs(&self) -> Self {
                    *self
                }
                fn pow(&self, exponent: u64) -> Self {
                    <$t>::pow(*self, exponent as u32)
                }
            }
        )*
    };
}

impl_numeric_signed!(i8, i16, i32, i64, i128, isize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);

/// Free-function form of [`Numeric::sgn`], for parity with the
/// method-call form.
pub fn sgn<T: Numeric>(value: &T) -> i8 {
    value.sgn()
}

/// Free-function form of [`Numeric::abs`].
pub fn abs<T: Numeric>(value: &T) -> T {
    value.abs()
}

/// Free-function form of [`Numeric::pow`].
pub fn pow<T: Numeric>(value: &T, exponent: u64) -> T {
    value.pow(exponent)
}

impl BigInt {
    /// Sign: `-1`, `0`, or `1`.
    pub fn sgn(&self) -> i8 {
        Numeric::sgn(self)
    }

    /// Non-negative magnitude, as a fresh value.
    pub fn abs(&self) -> BigInt {
        Numeric::abs(self)
    }

    /// `self` raised to the `exponent`-th power, by repeated squaring.
    /// `0^0` is `1`, matching the convention of the primitive integer
    /// `pow` methods in `std`.
    pub fn pow(&self, exponent: u64) -> BigInt {
        Numeric::pow(self, exponent)
    }
}
