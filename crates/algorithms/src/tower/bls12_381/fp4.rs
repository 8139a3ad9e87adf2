//! Quartic extension `Fp4 = Fp2[v]/(v² - ξ)` with ξ = 1 + u.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use octic_params::tower::bls12_381::{BLS12_381_BIG_ENDIAN_SIGN, BLS12_381_FP4_SIZE};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use super::fp2::Fp2;
use super::TWIST_HINT;
use crate::error::{validate, Result};
use crate::tower::macros::{impl_binops_additive, impl_binops_multiplicative};
use crate::tower::traits::QuarticExtension;

/// Element `c0 + c1·v` of Fp4
#[derive(Copy, Clone)]
pub struct Fp4 {
    /// Real part
    pub c0: Fp2,
    /// Coefficient of `v`
    pub c1: Fp2,
}

impl Fp4 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp4 {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp4 {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Add two elements
    #[inline]
    pub const fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Negate an element
    #[inline]
    pub const fn neg(&self) -> Fp4 {
        Fp4 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Negate the `v` coefficient
    #[inline]
    pub const fn conjugate(&self) -> Fp4 {
        Fp4 {
            c0: self.c0,
            c1: (&self.c1).neg(),
        }
    }

    /// Multiply by v
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp4 {
        // (a + bv)v = bξ + av
        Fp4 {
            c0: (&self.c1).mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Divide by v
    #[inline]
    pub const fn div_by_nonresidue(&self) -> Fp4 {
        // (a + bv)/v = b + (a/ξ)v
        Fp4 {
            c0: self.c1,
            c1: (&self.c0).div_by_nonresidue(),
        }
    }

    /// Halve both coefficients
    #[inline]
    pub const fn halve(&self) -> Fp4 {
        Fp4 {
            c0: (&self.c0).halve(),
            c1: (&self.c1).halve(),
        }
    }

    /// Multiply two elements
    pub fn mul(&self, rhs: &Fp4) -> Fp4 {
        // Karatsuba: three Fp2 products
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp4 {
            c0: t0 + t1.mul_by_nonresidue(),
            c1: t2 - t0 - t1,
        }
    }

    /// Square this element
    pub fn square(&self) -> Fp4 {
        // c0 = (a + b)(a + ξb) - ξab - ab, c1 = 2ab
        let t1 = self.c0 + self.c1;
        let t2 = self.c1.mul_by_nonresidue() + self.c0;
        let t3 = self.c0 * self.c1;

        Fp4 {
            c0: t1 * t2 - (t3.mul_by_nonresidue() + t3),
            c1: t3 + t3,
        }
    }

    /// Scale both coefficients by an Fp2 element
    #[inline]
    pub fn mul_by_fp2(&self, s: &Fp2) -> Fp4 {
        Fp4 {
            c0: self.c0 * s,
            c1: self.c1 * s,
        }
    }

    /// Scale both coefficients by a base field element
    #[inline]
    pub const fn mul_by_fp(&self, s: &Fp) -> Fp4 {
        Fp4 {
            c0: (&self.c0).mul_by_base(s),
            c1: (&self.c1).mul_by_base(s),
        }
    }

    /// Scale both coefficients by a small signed integer
    pub fn mul_by_int(&self, c: i64) -> Fp4 {
        Fp4 {
            c0: self.c0.mul_by_int(c),
            c1: self.c1.mul_by_int(c),
        }
    }

    /// Norm `c0² - ξ·c1²` down to Fp2
    pub fn norm(&self) -> Fp2 {
        self.c0.square() - self.c1.square().mul_by_nonresidue()
    }

    /// Quadratic residuosity of the element, with the hint of its norm
    pub fn quadratic_residue(&self) -> (Choice, Fp) {
        self.norm().quadratic_residue()
    }

    /// Inverse through the norm; zero maps to zero
    pub fn invert(&self, hint: Option<&Fp>) -> Fp4 {
        let n = self.norm().invert(hint);
        Fp4 {
            c0: self.c0 * n,
            c1: -(self.c1 * n),
        }
    }

    /// Frobenius map: conjugate both parts, then scale `c1` by `ff`
    pub fn frobenius(&self, ff: &Fp2) -> Fp4 {
        Fp4 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate() * ff,
        }
    }

    /// Square root with sign 0; see [`Fp2::sqrt`] for the hint
    pub fn sqrt(&self, hint: Option<&Fp>) -> Fp4 {
        if bool::from(self.is_zero()) {
            return Fp4::zero();
        }

        let w = self.norm().sqrt(hint);
        let t = (self.c0 + w).halve();
        let t = Fp2::conditional_select(&t, &(self.c0 - w).halve(), t.is_zero());
        let hc1 = self.c1.halve();

        let (qr, h) = t.quadratic_residue();
        // A non-residue candidate becomes a residue once divided by ξ
        let t = Fp2::conditional_select(&t.div_by_nonresidue(), &t, qr);
        let h = Fp::conditional_select(&(h * TWIST_HINT), &h, qr);

        let r = t.sqrt(Some(&h));
        let s = t.invert(Some(&h)) * r * hc1;

        let root = Fp4 {
            c0: Fp2::conditional_select(&s, &r, qr),
            c1: Fp2::conditional_select(&r, &s, qr),
        };
        Fp4::conditional_select(&root, &-root, root.sign())
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

    /// Order of `x` against `-x`, `v` coefficient first
    pub fn cmp_negation(&self) -> Ordering {
        self.c1
            .cmp_negation()
            .then_with(|| self.c0.cmp_negation())
    }

    /// Write the encoding (`c1` then `c0`) into `out`
    pub fn write_bytes(&self, out: &mut [u8]) {
        let (hi, lo) = out.split_at_mut(Fp2::ENCODED_LEN);
        self.c1.write_bytes(hi);
        self.c0.write_bytes(lo);
    }

    /// Decode a 192-byte encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Fp4> {
        validate::length("Fp4", bytes.len(), BLS12_381_FP4_SIZE)?;
        let (hi, lo) = bytes.split_at(Fp2::ENCODED_LEN);
        Ok(Fp4 {
            c0: Fp2::from_bytes(lo)?,
            c1: Fp2::from_bytes(hi)?,
        })
    }

    /// Random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Fp4 {
        Fp4 {
            c0: Fp2::random(rng),
            c1: Fp2::random(rng),
        }
    }
}

impl QuarticExtension for Fp4 {
    type Base = Fp;
    type Quadratic = Fp2;

    const ENCODED_LEN: usize = BLS12_381_FP4_SIZE;

    fn zero() -> Self {
        Fp4::zero()
    }

    fn one() -> Self {
        Fp4::one()
    }

    fn is_zero(&self) -> Choice {
        Fp4::is_zero(self)
    }

    // Coefficients are always fully reduced
    fn reduce(&self) -> Self {
        *self
    }

    fn normalize(&self) -> Self {
        *self
    }

    fn square(&self) -> Self {
        Fp4::square(self)
    }

    fn conjugate(&self) -> Self {
        Fp4::conjugate(self)
    }

    fn mul_by_nonresidue(&self) -> Self {
        Fp4::mul_by_nonresidue(self)
    }

    fn div_by_nonresidue(&self) -> Self {
        Fp4::div_by_nonresidue(self)
    }

    fn halve(&self) -> Self {
        Fp4::halve(self)
    }

    fn mul_by_quadratic(&self, s: &Fp2) -> Self {
        self.mul_by_fp2(s)
    }

    fn mul_by_base(&self, s: &Fp) -> Self {
        self.mul_by_fp(s)
    }

    fn mul_by_int(&self, c: i64) -> Self {
        Fp4::mul_by_int(self, c)
    }

    fn invert(&self, hint: Option<&Fp>) -> Self {
        Fp4::invert(self, hint)
    }

    fn frobenius(&self, f: &Fp2) -> Self {
        Fp4::frobenius(self, f)
    }

    fn quadratic_residue(&self) -> (Choice, Fp) {
        Fp4::quadratic_residue(self)
    }

    fn sqrt(&self, hint: Option<&Fp>) -> Self {
        Fp4::sqrt(self, hint)
    }

    fn sign(&self) -> Choice {
        Fp4::sign(self)
    }

    fn cmp_negation(&self) -> Ordering {
        Fp4::cmp_negation(self)
    }

    fn write_bytes(&self, out: &mut [u8]) {
        Fp4::write_bytes(self, out)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Fp4::from_bytes(bytes)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fp4::random(rng)
    }
}

impl From<Fp2> for Fp4 {
    fn from(f: Fp2) -> Fp4 {
        Fp4 {
            c0: f,
            c1: Fp2::zero(),
        }
    }
}

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v", self.c0, self.c1)
    }
}

impl fmt::Display for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.c0, self.c1)
    }
}

impl Default for Fp4 {
    fn default() -> Self {
        Fp4::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp4 {}

impl ConstantTimeEq for Fp4 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp4 {}
impl PartialEq for Fp4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp4 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp4 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn neg(self) -> Fp4 {
        self.neg()
    }
}

impl<'a, 'b> Sub<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn sub(self, rhs: &'b Fp4) -> Fp4 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn add(self, rhs: &'b Fp4) -> Fp4 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn mul(self, rhs: &'b Fp4) -> Fp4 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp4);
impl_binops_multiplicative!(Fp4);
