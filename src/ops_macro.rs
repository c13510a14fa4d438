//! Forwards the three value/reference combinations of a binary operator
//! to a single `&BigInt op &BigInt -> BigInt` implementation, so each
//! kernel module only has to write the reference form once.

macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl $imp<$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $imp::$method(self, &rhs)
            }
        }
        impl $imp<&$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                $imp::$method(&self, rhs)
            }
        }
        impl $imp<$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $imp::$method(&self, &rhs)
            }
        }
    };
}

/// Forwards an `*Assign` trait's owned-rhs form to its `&rhs` form.
macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl $imp<$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: $t) {
                $imp::$method(self, &rhs)
            }
        }
    };
}

pub(crate) use forward_ref_binop;
pub(crate) use forward_ref_op_assign;
