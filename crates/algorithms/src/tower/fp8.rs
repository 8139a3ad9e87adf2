//! Octic extension `Fp8 = Fp4[w]/(w² - v)` over a configurable sub-tower.
//!
//! An element is a pair `(c0, c1)` of Fp4 values standing for `c0 + c1·w`,
//! where `v` is the generator of the quartic field below. All arithmetic is
//! delegated to the [`QuarticExtension`] implementation selected by the
//! [`OcticTower`] configuration `C`.
//!
//! # Reduction discipline
//!
//! Additive operations may leave coefficients in a lazily reduced form if
//! the sub-tower allows it. Multiplicative operations, negation and
//! conjugation normalize their output. Comparisons, [`Fp8::sign`] and byte
//! export expect normalized operands.
//!
//! # Partial operations
//!
//! [`Fp8::invert`] maps zero to zero and [`Fp8::sqrt`] returns an
//! unspecified value for a non-residue. Neither signals an error: callers
//! needing a meaningful result check [`Fp8::is_zero`] or
//! [`Fp8::quadratic_residue`] first, or use [`Fp8::checked_sqrt`].

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use octic_api::ResultExt;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::traits::{OcticTower, QuadraticExtension, QuarticExtension};
use crate::error::{validate, Result};
use crate::trace::trace_op;

type Base<C> = <<C as OcticTower>::Fp4 as QuarticExtension>::Base;
type Quadratic<C> = <<C as OcticTower>::Fp4 as QuarticExtension>::Quadratic;

/// Element `c0 + c1·w` of Fp8
pub struct Fp8<C: OcticTower> {
    /// Real part
    pub c0: C::Fp4,
    /// Imaginary part, the coefficient of `w`
    pub c1: C::Fp4,
}

// ============================================================================
// Construction and Canonicalization
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Encoded length in bytes: twice the Fp4 encoding
    pub const ENCODED_LEN: usize = 2 * <C::Fp4 as QuarticExtension>::ENCODED_LEN;

    /// Evaluated per configuration: the modulus size must agree with the Fp4 encoding
    pub(crate) const PARAMETERS_AGREE: () = assert!(
        Self::ENCODED_LEN == 8 * C::MODULUS_BYTES,
        "Fp8 encoding must span eight base-field elements"
    );

    /// Build `c0 + c1·w`
    #[inline]
    pub fn new(c0: C::Fp4, c1: C::Fp4) -> Self {
        Fp8 { c0, c1 }
    }

    /// Embed an Fp4 element with zero imaginary part
    #[inline]
    pub fn from_real(c0: C::Fp4) -> Self {
        Fp8 {
            c0,
            c1: C::Fp4::zero(),
        }
    }

    /// Additive identity
    #[inline]
    pub fn zero() -> Self {
        Fp8 {
            c0: C::Fp4::zero(),
            c1: C::Fp4::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub fn one() -> Self {
        Fp8 {
            c0: C::Fp4::one(),
            c1: C::Fp4::zero(),
        }
    }

    /// Real part
    #[inline]
    pub fn real(&self) -> C::Fp4 {
        self.c0
    }

    /// Imaginary part
    #[inline]
    pub fn imaginary(&self) -> C::Fp4 {
        self.c1
    }

    /// Reduce both parts to their tightest representation
    pub fn reduce(&self) -> Self {
        Fp8 {
            c0: self.c0.reduce(),
            c1: self.c1.reduce(),
        }
    }

    /// Bring both parts to their canonical representative
    pub fn normalize(&self) -> Self {
        Fp8 {
            c0: self.c0.normalize(),
            c1: self.c1.normalize(),
        }
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    #[inline]
    pub fn is_one(&self) -> Choice {
        self.c0.ct_eq(&C::Fp4::one()) & self.c1.is_zero()
    }

    /// Check if element lies in the embedded Fp4
    #[inline]
    pub fn is_real(&self) -> Choice {
        self.c1.is_zero()
    }

    /// Order of the element against its own negation.
    ///
    /// Zero is `Equal`; otherwise the imaginary parts decide and the real
    /// parts break a tie.
    pub fn cmp_negation(&self) -> Ordering {
        self.c1
            .cmp_negation()
            .then_with(|| self.c0.cmp_negation())
    }

    /// Sign bit under the tower's sign convention.
    ///
    /// Exactly one of `x` and `-x` has sign 0 for nonzero `x`.
    pub fn sign(&self) -> Choice {
        let p1 = self.c0.sign();
        let p2 = self.c1.sign();
        if C::BIG_ENDIAN_SIGN {
            p2 ^ ((p1 ^ p2) & self.c1.is_zero())
        } else {
            p1 ^ ((p1 ^ p2) & self.c0.is_zero())
        }
    }
}

// ============================================================================
// Linear Operations
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Negate the imaginary part
    pub fn conjugate(&self) -> Self {
        Fp8 {
            c0: self.c0,
            c1: (-self.c1).normalize(),
        }
    }

    /// Negate the real part
    pub fn neg_conjugate(&self) -> Self {
        Fp8 {
            c0: (-self.c0).normalize(),
            c1: self.c1,
        }
    }

    /// Scale both parts by an Fp4 element
    pub fn mul_by_fp4(&self, s: &C::Fp4) -> Self {
        Fp8 {
            c0: (self.c0 * *s).normalize(),
            c1: (self.c1 * *s).normalize(),
        }
    }

    /// Scale both parts by an element of the quadratic field two levels down
    pub fn mul_by_quadratic(&self, s: &Quadratic<C>) -> Self {
        Fp8 {
            c0: self.c0.mul_by_quadratic(s),
            c1: self.c1.mul_by_quadratic(s),
        }
    }

    /// Scale both parts by a prime field element
    pub fn mul_by_base(&self, s: &Base<C>) -> Self {
        Fp8 {
            c0: self.c0.mul_by_base(s),
            c1: self.c1.mul_by_base(s),
        }
    }

    /// Scale both parts by a small signed integer
    pub fn mul_by_int(&self, c: i64) -> Self {
        Fp8 {
            c0: self.c0.mul_by_int(c),
            c1: self.c1.mul_by_int(c),
        }
    }

    /// Divide by two
    pub fn halve(&self) -> Self {
        Fp8 {
            c0: self.c0.halve(),
            c1: self.c1.halve(),
        }
    }
}

// ============================================================================
// Multiplication and the Tower Generator
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Multiply two elements with three Fp4 products
    pub fn mul(&self, rhs: &Self) -> Self {
        trace_op!("mul", "Fp8");

        // p = a·c, q = b·d, r = (a + b)(c + d)
        let p = self.c0 * rhs.c0;
        let q = self.c1 * rhs.c1;
        let r = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp8 {
            c0: (p + q.mul_by_nonresidue()).normalize(),
            c1: (r - p - q).normalize(),
        }
    }

    /// Square this element
    pub fn square(&self) -> Self {
        trace_op!("square", "Fp8");

        // (a + b)(a + vb) - (v + 1)ab = a² + vb²
        let t1 = self.c0 + self.c1;
        let t2 = self.c1.mul_by_nonresidue() + self.c0;
        let t3 = self.c0 * self.c1;

        Fp8 {
            c0: (t1 * t2 - (t3.mul_by_nonresidue() + t3)).normalize(),
            c1: (t3 + t3).normalize(),
        }
    }

    /// Multiply by the generator `w`
    pub fn mul_by_nonresidue(&self) -> Self {
        let r = Fp8 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        };
        if C::POSITIVE_TOWER {
            -r
        } else {
            r
        }
    }

    /// Multiply by `w² = v`, part by part
    pub fn mul_by_nonresidue_squared(&self) -> Self {
        Fp8 {
            c0: self.c0.mul_by_nonresidue(),
            c1: self.c1.mul_by_nonresidue(),
        }
    }

    /// Divide by the generator `w`; inverse of [`Fp8::mul_by_nonresidue`]
    pub fn div_by_nonresidue(&self) -> Self {
        let r = Fp8 {
            c0: self.c1,
            c1: self.c0.div_by_nonresidue(),
        };
        if C::POSITIVE_TOWER {
            -r
        } else {
            r
        }
    }

    /// Norm `c0² - v·c1²` down to Fp4, equal to `conjugate(x)·x`
    pub fn norm(&self) -> C::Fp4 {
        self.c0.square() - self.c1.square().mul_by_nonresidue()
    }

    /// Variable-time exponentiation by a little-endian exponent.
    ///
    /// Only use with public exponents.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
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

// ============================================================================
// Inversion and Frobenius
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Multiplicative inverse through the norm.
    ///
    /// `hint` is the progenitor of the norm down to the prime field, as
    /// returned by [`Fp8::quadratic_residue`]. Zero maps to zero.
    pub fn invert(&self, hint: Option<&Base<C>>) -> Self {
        trace_op!("invert", "Fp8");

        let n = self.norm().invert(hint);
        Fp8 {
            c0: (self.c0 * n).normalize(),
            c1: (-(self.c1 * n)).normalize(),
        }
    }

    /// Frobenius map with constant `f` taken from the quadratic field below.
    ///
    /// With `f = ξ^((p-3)/4)` this is `x ↦ x^p`.
    pub fn frobenius(&self, f: &Quadratic<C>) -> Self {
        let ff = f.square().mul_by_nonresidue();
        Fp8 {
            c0: self.c0.frobenius(&ff),
            c1: self
                .c1
                .frobenius(&ff)
                .mul_by_quadratic(f)
                .mul_by_nonresidue(),
        }
    }

    /// Apply the configured Frobenius map `power` times
    pub fn frobenius_map(&self, power: usize) -> Self {
        (0..power % 8).fold(*self, |acc, _| acc.frobenius(&C::FROBENIUS_COEFF))
    }
}

// ============================================================================
// Quadratic Residues and Square Roots
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Quadratic residuosity, returning the hint as a by-product.
    ///
    /// Zero is reported as a non-residue.
    pub fn quadratic_residue(&self) -> (Choice, Base<C>) {
        self.norm().quadratic_residue()
    }

    /// Square root with sign 0.
    ///
    /// `hint` is the value returned by [`Fp8::quadratic_residue`] for this
    /// element, or `None` to compute it. For a non-residue the result is
    /// unspecified. The branch taken for a given input is not observable
    /// through timing beyond the zero check.
    pub fn sqrt(&self, hint: Option<&Base<C>>) -> Self {
        trace_op!("sqrt", "Fp8");

        if bool::from(self.is_zero()) {
            return Self::zero();
        }

        let w = self.norm().sqrt(hint);
        let t = (self.c0 + w).halve();
        // (a + s)/2 vanishes only for real inputs; (a - s)/2 is then usable
        let t = C::Fp4::conditional_select(&t, &(self.c0 - w).halve(), t.is_zero());
        let hc1 = self.c1.halve();

        let (qr, h) = t.quadratic_residue();
        let t = C::Fp4::conditional_select(&t.div_by_nonresidue(), &t, qr);
        let h = <Base<C> as ConditionallySelectable>::conditional_select(&(h * C::TWIST_HINT), &h, qr);

        let r = t.sqrt(Some(&h));
        let s = t.invert(Some(&h)) * r * hc1;

        let root = Fp8 {
            c0: C::Fp4::conditional_select(&s, &r, qr).normalize(),
            c1: C::Fp4::conditional_select(&r, &s, qr).normalize(),
        };
        Self::conditional_select(&root, &-root, root.sign())
    }

    /// Square root, present only for residues and zero
    pub fn checked_sqrt(&self) -> CtOption<Self> {
        let (qr, hint) = self.quadratic_residue();
        CtOption::new(self.sqrt(Some(&hint)), qr | self.is_zero())
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl<C: OcticTower> Fp8<C> {
    /// Write the encoding into `out`: imaginary part first, then real part.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly [`Fp8::ENCODED_LEN`] bytes long.
    pub fn write_bytes(&self, out: &mut [u8]) {
        let () = Self::PARAMETERS_AGREE;
        let (hi, lo) = out.split_at_mut(<C::Fp4 as QuarticExtension>::ENCODED_LEN);
        self.c1.write_bytes(hi);
        self.c0.write_bytes(lo);
    }

    /// Encode to a fresh buffer of [`Fp8::ENCODED_LEN`] bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::ENCODED_LEN];
        self.write_bytes(&mut out);
        out
    }

    /// Decode an encoding produced by [`Fp8::to_bytes`].
    ///
    /// The buffer must have exactly [`Fp8::ENCODED_LEN`] bytes and every
    /// coefficient must be canonical.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let () = Self::PARAMETERS_AGREE;
        validate::length("Fp8", bytes.len(), Self::ENCODED_LEN)?;
        let (hi, lo) = bytes.split_at(<C::Fp4 as QuarticExtension>::ENCODED_LEN);
        Ok(Fp8 {
            c0: C::Fp4::from_bytes(lo)?,
            c1: C::Fp4::from_bytes(hi)?,
        })
    }

    /// Random element from two independent Fp4 draws
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let c0 = C::Fp4::random(rng);
        let c1 = C::Fp4::random(rng);
        Fp8 { c0, c1 }
    }
}

impl<C: OcticTower> octic_api::Serialize for Fp8<C> {
    fn from_bytes(bytes: &[u8]) -> octic_api::Result<Self> {
        Fp8::<C>::from_bytes(bytes).with_context("Fp8")
    }

    fn to_bytes(&self) -> Vec<u8> {
        Fp8::<C>::to_bytes(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::vec::Vec;
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Fp8;
    use crate::tower::traits::OcticTower;

    impl<C: OcticTower> Serialize for Fp8<C> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }

    struct Fp8Visitor<C>(PhantomData<C>);

    impl<'de, C: OcticTower> Visitor<'de> for Fp8Visitor<C> {
        type Value = Fp8<C>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{} bytes encoding an Fp8 element", Fp8::<C>::ENCODED_LEN)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Fp8<C>, E> {
            Fp8::from_bytes(v).map_err(E::custom)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Fp8<C>, A::Error> {
            let mut bytes = Vec::with_capacity(Fp8::<C>::ENCODED_LEN);
            while let Some(b) = seq.next_element::<u8>()? {
                if bytes.len() == Fp8::<C>::ENCODED_LEN {
                    return Err(de::Error::invalid_length(bytes.len() + 1, &self));
                }
                bytes.push(b);
            }
            Fp8::from_bytes(&bytes).map_err(de::Error::custom)
        }
    }

    impl<'de, C: OcticTower> Deserialize<'de> for Fp8<C> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(Fp8Visitor(PhantomData))
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<C: OcticTower> Clone for Fp8<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: OcticTower> Copy for Fp8<C> {}

impl<C: OcticTower> Default for Fp8<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: OcticTower> zeroize::DefaultIsZeroes for Fp8<C> {}

impl<C: OcticTower> fmt::Debug for Fp8<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl<C: OcticTower> fmt::Display for Fp8<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.c0, self.c1)
    }
}

impl<C: OcticTower> ConstantTimeEq for Fp8<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<C: OcticTower> Eq for Fp8<C> {}
impl<C: OcticTower> PartialEq for Fp8<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: OcticTower> ConditionallySelectable for Fp8<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp8 {
            c0: C::Fp4::conditional_select(&a.c0, &b.c0, choice),
            c1: C::Fp4::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a, C: OcticTower> Neg for &'a Fp8<C> {
    type Output = Fp8<C>;
    #[inline]
    fn neg(self) -> Fp8<C> {
        Fp8 {
            c0: (-self.c0).normalize(),
            c1: (-self.c1).normalize(),
        }
    }
}

impl<C: OcticTower> Neg for Fp8<C> {
    type Output = Fp8<C>;
    #[inline]
    fn neg(self) -> Fp8<C> {
        -&self
    }
}

impl<'a, 'b, C: OcticTower> Add<&'b Fp8<C>> for &'a Fp8<C> {
    type Output = Fp8<C>;
    #[inline]
    fn add(self, rhs: &'b Fp8<C>) -> Fp8<C> {
        Fp8 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<'a, 'b, C: OcticTower> Sub<&'b Fp8<C>> for &'a Fp8<C> {
    type Output = Fp8<C>;
    #[inline]
    fn sub(self, rhs: &'b Fp8<C>) -> Fp8<C> {
        Fp8 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl<'a, 'b, C: OcticTower> Mul<&'b Fp8<C>> for &'a Fp8<C> {
    type Output = Fp8<C>;
    #[inline]
    fn mul(self, rhs: &'b Fp8<C>) -> Fp8<C> {
        Fp8::mul(self, rhs)
    }
}

macro_rules! impl_fp8_binop {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign_method:ident, $op:tt) => {
        impl<'b, C: OcticTower> $tr<&'b Fp8<C>> for Fp8<C> {
            type Output = Fp8<C>;
            #[inline]
            fn $method(self, rhs: &'b Fp8<C>) -> Fp8<C> {
                &self $op rhs
            }
        }

        impl<'a, C: OcticTower> $tr<Fp8<C>> for &'a Fp8<C> {
            type Output = Fp8<C>;
            #[inline]
            fn $method(self, rhs: Fp8<C>) -> Fp8<C> {
                self $op &rhs
            }
        }

        impl<C: OcticTower> $tr<Fp8<C>> for Fp8<C> {
            type Output = Fp8<C>;
            #[inline]
            fn $method(self, rhs: Fp8<C>) -> Fp8<C> {
                &self $op &rhs
            }
        }

        impl<C: OcticTower> $assign_tr<Fp8<C>> for Fp8<C> {
            #[inline]
            fn $assign_method(&mut self, rhs: Fp8<C>) {
                *self = &*self $op &rhs;
            }
        }

        impl<'b, C: OcticTower> $assign_tr<&'b Fp8<C>> for Fp8<C> {
            #[inline]
            fn $assign_method(&mut self, rhs: &'b Fp8<C>) {
                *self = &*self $op rhs;
            }
        }
    };
}

impl_fp8_binop!(Add, add, AddAssign, add_assign, +);
impl_fp8_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_fp8_binop!(Mul, mul, MulAssign, mul_assign, *);
