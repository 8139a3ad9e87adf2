//! Contracts between the levels of an octic tower.
//!
//! [`Fp8`](super::Fp8) is written against these traits only, so any curve
//! family can plug in its own sub-tower and constants through an
//! [`OcticTower`] configuration.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::Result;

/// The quadratic field two levels below Fp8.
///
/// Only what the Frobenius map needs from it is required here.
pub trait QuadraticExtension:
    Copy + fmt::Debug + ConditionallySelectable + ConstantTimeEq + Mul<Output = Self>
{
    /// Square this element
    fn square(&self) -> Self;

    /// Multiply by the generator of the next tower level
    fn mul_by_nonresidue(&self) -> Self;
}

/// The quartic sub-field Fp4 that Fp8 is built on.
///
/// # Hints
///
/// A hint is the base-field progenitor `n^((p-3)/4)` of an element's norm
/// `n` taken all the way down to the prime field. It is returned by
/// [`quadratic_residue`](Self::quadratic_residue) and accepted by
/// [`invert`](Self::invert) and [`sqrt`](Self::sqrt); `None` makes the
/// callee compute it. A hint is only meaningful up to sign.
pub trait QuarticExtension:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + Eq
    + ConditionallySelectable
    + ConstantTimeEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + zeroize::DefaultIsZeroes
{
    /// Prime field, also the type of hints
    type Base: Copy + fmt::Debug + ConditionallySelectable + Mul<Output = Self::Base>;

    /// The quadratic field one level down
    type Quadratic: QuadraticExtension;

    /// Length of the fixed-size byte encoding
    const ENCODED_LEN: usize;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Zero test, independent of the internal representation
    fn is_zero(&self) -> Choice;

    /// Reduce every coefficient to its tightest representation
    fn reduce(&self) -> Self;

    /// Bring every coefficient to its canonical representative
    fn normalize(&self) -> Self;

    /// Square this element
    fn square(&self) -> Self;

    /// Negate the imaginary part
    fn conjugate(&self) -> Self;

    /// Multiply by the generator `v` of this level
    fn mul_by_nonresidue(&self) -> Self;

    /// Divide by the generator `v` of this level
    fn div_by_nonresidue(&self) -> Self;

    /// Divide by two
    fn halve(&self) -> Self;

    /// Scale by an element of the quadratic field below
    fn mul_by_quadratic(&self, s: &Self::Quadratic) -> Self;

    /// Scale by a prime field element
    fn mul_by_base(&self, s: &Self::Base) -> Self;

    /// Scale by a small signed integer
    fn mul_by_int(&self, c: i64) -> Self;

    /// Inverse; zero maps to zero
    fn invert(&self, hint: Option<&Self::Base>) -> Self;

    /// Frobenius map with the level-adjusted constant `f`
    fn frobenius(&self, f: &Self::Quadratic) -> Self;

    /// Quadratic residuosity together with the hint of the element.
    ///
    /// Zero is reported as a non-residue.
    fn quadratic_residue(&self) -> (Choice, Self::Base);

    /// Square root with sign 0; unspecified (but total) for non-residues
    fn sqrt(&self, hint: Option<&Self::Base>) -> Self;

    /// Sign bit under the configured convention
    fn sign(&self) -> Choice;

    /// Order of the element against its own negation
    fn cmp_negation(&self) -> Ordering;

    /// Write the encoding into `out`, which must be `ENCODED_LEN` bytes
    fn write_bytes(&self, out: &mut [u8]);

    /// Decode an `ENCODED_LEN`-byte encoding
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Random element
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// Curve-family constants selecting a concrete octic tower.
///
/// `Fp8 = Fp4[w]/(w² - v)` where `v` is the generator of [`Self::Fp4`].
pub trait OcticTower: 'static {
    /// The quartic sub-field
    type Fp4: QuarticExtension;

    /// Multiplication by `w` picks up a sign flip
    const POSITIVE_TOWER: bool;

    /// The imaginary part's sign decides unless it is zero
    const BIG_ENDIAN_SIGN: bool;

    /// Byte length of the prime modulus
    const MODULUS_BYTES: usize;

    /// `(1/N(v))^((p-3)/4)`: hint correction for a candidate divided by `v`
    const TWIST_HINT: <Self::Fp4 as QuarticExtension>::Base;

    /// Frobenius constant `f` for the map `x ↦ x^p`
    const FROBENIUS_COEFF: <Self::Fp4 as QuarticExtension>::Quadratic;
}
