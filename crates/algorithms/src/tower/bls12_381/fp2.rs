//! Quadratic extension `Fp2 = Fp[u]/(u² + 1)`.
//!
//! The tower generator one level up is ξ = 1 + u, a non-square in Fp2.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use octic_params::tower::bls12_381::{BLS12_381_BIG_ENDIAN_SIGN, BLS12_381_FP2_SIZE};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use crate::error::{validate, Result};
use crate::tower::macros::{impl_binops_additive, impl_binops_multiplicative};
use crate::tower::traits::QuadraticExtension;

/// Element `c0 + c1·u` of Fp2
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl Fp2 {
    /// Encoded length in bytes
    pub const ENCODED_LEN: usize = BLS12_381_FP2_SIZE;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Negate the `u` coefficient
    #[inline(always)]
    pub const fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: (&self.c1).neg(),
        }
    }

    /// Raise to the p-th power, which on Fp2 is conjugation
    #[inline(always)]
    pub const fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiply by ξ = 1 + u
    #[inline(always)]
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(1 + u) = (a - b) + (a + b)u
        Fp2 {
            c0: (&self.c0).sub(&self.c1),
            c1: (&self.c0).add(&self.c1),
        }
    }

    /// Divide by ξ = 1 + u
    #[inline]
    pub const fn div_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(1 - u)/2 = (a + b)/2 + (b - a)/2·u
        Fp2 {
            c0: (&self.c0).add(&self.c1).halve(),
            c1: (&self.c1).sub(&self.c0).halve(),
        }
    }

    /// Add two elements
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Negate an element
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Halve both coefficients
    #[inline]
    pub const fn halve(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).halve(),
            c1: (&self.c1).halve(),
        }
    }

    /// Multiply two elements
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        // With u² = -1:
        //   c0 = a0·b0 - a1·b1
        //   c1 = a0·b1 + a1·b0
        Fp2 {
            c0: Fp::sum_of_products([self.c0, -self.c1], [rhs.c0, rhs.c1]),
            c1: Fp::sum_of_products([self.c0, self.c1], [rhs.c1, rhs.c0]),
        }
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp2 {
        // c0 = (a0 + a1)(a0 - a1), c1 = 2·a0·a1
        let a = (&self.c0).add(&self.c1);
        let b = (&self.c0).sub(&self.c1);
        let c = (&self.c0).add(&self.c0);

        Fp2 {
            c0: (&a).mul(&b),
            c1: (&c).mul(&self.c1),
        }
    }

    /// Scale both coefficients by a base field element
    #[inline]
    pub const fn mul_by_base(&self, s: &Fp) -> Fp2 {
        Fp2 {
            c0: (&self.c0).mul(s),
            c1: (&self.c1).mul(s),
        }
    }

    /// Scale both coefficients by a small signed integer
    pub fn mul_by_int(&self, c: i64) -> Fp2 {
        Fp2 {
            c0: self.c0.mul_by_int(c),
            c1: self.c1.mul_by_int(c),
        }
    }

    /// Norm `c0² + c1²` down to Fp
    #[inline]
    pub fn norm(&self) -> Fp {
        self.c0.square() + self.c1.square()
    }

    /// Quadratic residuosity of the element, with the hint of its norm
    pub fn quadratic_residue(&self) -> (Choice, Fp) {
        self.norm().quadratic_residue()
    }

    /// Inverse through the norm; zero maps to zero
    pub fn invert(&self, hint: Option<&Fp>) -> Fp2 {
        let n = self.norm().invert_with_hint(hint);
        Fp2 {
            c0: self.c0 * n,
            c1: -(self.c1 * n),
        }
    }

    /// Square root with sign 0.
    ///
    /// `hint` is the progenitor of the norm. For a non-residue the result is
    /// unspecified but the call still terminates.
    pub fn sqrt(&self, hint: Option<&Fp>) -> Fp2 {
        if bool::from(self.is_zero()) {
            return Fp2::zero();
        }

        let w = self.norm().sqrt_with_hint(hint);
        let t = (self.c0 + w).halve();
        let t = Fp::conditional_select(&t, &(self.c0 - w).halve(), t.is_zero());
        let hc1 = self.c1.halve();

        let (qr, h) = t.quadratic_residue();
        // -t is a residue whenever t is not; its progenitor differs only in sign
        let t = Fp::conditional_select(&-t, &t, qr);

        let r = t.sqrt_with_hint(Some(&h));
        let s = t.invert_with_hint(Some(&h)) * r * hc1;

        let root = Fp2 {
            c0: Fp::conditional_select(&s, &r, qr),
            c1: Fp::conditional_select(&r, &s, qr),
        };
        Fp2::conditional_select(&root, &-root, root.sign())
    }

    /// Sign bit of the element
    pub fn sign(&self) -> Choice {
        let p1 = self.c0.sign();
        let p2 = self.c1.sign();
        if BLS12_381_BIG_ENDIAN_SIGN {
            p2 ^ ((p1 ^ p2) & self.c1.is_zero())
        } else {
            p1 ^ ((p1 ^ p2) & self.c0.is_zero())
        }
    }

    /// Order of `x` against `-x`, `u` coefficient first
    pub fn cmp_negation(&self) -> Ordering {
        self.c1
            .cmp_negation()
            .then_with(|| self.c0.cmp_negation())
    }

    /// Write the encoding (`c1` then `c0`) into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly [`Fp2::ENCODED_LEN`] bytes long.
    pub fn write_bytes(&self, out: &mut [u8]) {
        let (hi, lo) = out.split_at_mut(Fp::ENCODED_LEN);
        hi.copy_from_slice(&self.c1.to_bytes());
        lo.copy_from_slice(&self.c0.to_bytes());
    }

    /// Encode to big-endian bytes, `c1` first
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        self.write_bytes(&mut res);
        res
    }

    /// Decode a 96-byte encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Fp2> {
        validate::length("Fp2", bytes.len(), Self::ENCODED_LEN)?;
        let (hi, lo) = bytes.split_at(Fp::ENCODED_LEN);
        Ok(Fp2 {
            c0: Fp::from_slice(lo)?,
            c1: Fp::from_slice(hi)?,
        })
    }

    /// Random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Fp2 {
        Fp2 {
            c0: Fp::random(rng),
            c1: Fp::random(rng),
        }
    }

    /// Variable-time exponentiation by a little-endian exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

impl QuadraticExtension for Fp2 {
    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn mul_by_nonresidue(&self) -> Self {
        Fp2::mul_by_nonresidue(self)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl fmt::Display for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp2);
impl_binops_multiplicative!(Fp2);
