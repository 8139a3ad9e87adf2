//! Operator boilerplate for the concrete field types.
//!
//! Each type implements the `&a op &b` forms by hand; these macros derive the
//! owned and assigning variants from them.

macro_rules! impl_binops_additive {
    ($t:ident) => {
        impl<'b> core::ops::Add<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                &self + rhs
            }
        }

        impl<'a> core::ops::Add<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                self + &rhs
            }
        }

        impl core::ops::Add<$t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                &self + &rhs
            }
        }

        impl<'b> core::ops::Sub<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                &self - rhs
            }
        }

        impl<'a> core::ops::Sub<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                self - &rhs
            }
        }

        impl core::ops::Sub<$t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                &self - &rhs
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                -&self
            }
        }

        impl core::ops::AddAssign<$t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = &*self + &rhs;
            }
        }

        impl<'b> core::ops::AddAssign<&'b $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $t) {
                *self = &*self + rhs;
            }
        }

        impl core::ops::SubAssign<$t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = &*self - &rhs;
            }
        }

        impl<'b> core::ops::SubAssign<&'b $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $t) {
                *self = &*self - rhs;
            }
        }
    };
}

macro_rules! impl_binops_multiplicative {
    ($t:ident) => {
        impl<'b> core::ops::Mul<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                &self * rhs
            }
        }

        impl<'a> core::ops::Mul<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                self * &rhs
            }
        }

        impl core::ops::Mul<$t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                &self * &rhs
            }
        }

        impl core::ops::MulAssign<$t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * &rhs;
            }
        }

        impl<'b> core::ops::MulAssign<&'b $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $t) {
                *self = &*self * rhs;
            }
        }
    };
}

pub(crate) use impl_binops_additive;
pub(crate) use impl_binops_multiplicative;
