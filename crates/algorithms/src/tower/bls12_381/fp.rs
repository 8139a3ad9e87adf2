//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
//!
//! Besides the usual Montgomery arithmetic this layer carries the
//! progenitor-hint primitives the tower above builds on. Since
//! p ≡ 3 (mod 4), the progenitor `h = x^((p-3)/4)` of `x` yields
//!
//! - the Legendre test `h² · x == 1`,
//! - the square root `x · h` (when `x` is a residue),
//! - the inverse `x · h⁴`,
//!
//! so one exponentiation serves all three.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use octic_params::tower::bls12_381::{BLS12_381_BIG_ENDIAN_SIGN, BLS12_381_FP_SIZE};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{validate, Result};
use crate::tower::macros::{impl_binops_additive, impl_binops_multiplicative};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Read the big-endian 64-bit word at word index `i`
#[inline(always)]
fn be_word(bytes: &[u8], i: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
    u64::from_be_bytes(word)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Progenitor exponent (p - 3) / 4
pub(crate) const PROGENITOR_EXP: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Montgomery R = 2^384 mod p
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// Montgomery R^3 = 2^1152 mod p
const R3: Fp = Fp([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
///
/// Every operation returns a fully reduced value, so there is exactly one
/// representation per field element.
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl Fp {
    /// Encoded length in bytes
    pub const ENCODED_LEN: usize = BLS12_381_FP_SIZE;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Build from Montgomery limbs (little-endian) without checking them
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Subtract p once if the value is not below it
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let mut r = [0u64; 6];
        let mut borrow = 0;
        let mut i = 0;
        while i < 6 {
            let (d, b) = sbb(self.0[i], MODULUS[i], borrow);
            r[i] = d;
            borrow = b;
            i += 1;
        }

        // borrow is all-ones when self < p
        let mut i = 0;
        while i < 6 {
            r[i] = (self.0[i] & borrow) | (r[i] & !borrow);
            i += 1;
        }
        Fp(r)
    }

    /// Canonical (non-Montgomery) limbs
    #[inline]
    const fn to_canonical(&self) -> [u64; 6] {
        Self::montgomery_mul(&self.0, &[1, 0, 0, 0, 0, 0]).0
    }

    /// Check if value is greater than (p-1)/2
    fn is_lexicographically_largest(&self) -> bool {
        let tmp = self.to_canonical();

        // Subtract (p-1)/2 + 1; no borrow means tmp > (p-1)/2
        let (_, borrow) = sbb(tmp[0], 0xdcff_7fff_ffff_d556, 0);
        let (_, borrow) = sbb(tmp[1], 0x0f55_ffff_58a9_ffff, borrow);
        let (_, borrow) = sbb(tmp[2], 0xb398_6950_7b58_7b12, borrow);
        let (_, borrow) = sbb(tmp[3], 0xb23b_a5c2_79c2_895f, borrow);
        let (_, borrow) = sbb(tmp[4], 0x258d_d3db_21a5_d66b, borrow);
        let (_, borrow) = sbb(tmp[5], 0x0d00_88f5_1cbf_f34d, borrow);

        borrow == 0
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let mut d = [0u64; 6];
        let mut carry = 0;
        let mut i = 0;
        while i < 6 {
            let (v, c) = adc(self.0[i], rhs.0[i], carry);
            d[i] = v;
            carry = c;
            i += 1;
        }
        (&Fp(d)).subtract_p()
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let mut d = [0u64; 6];
        let mut borrow = 0;
        let mut nonzero = 0;
        let mut i = 0;
        while i < 6 {
            let (v, b) = sbb(MODULUS[i], self.0[i], borrow);
            d[i] = v;
            borrow = b;
            nonzero |= self.0[i];
            i += 1;
        }

        // -0 must stay 0 rather than p
        let mask = ((nonzero == 0) as u64).wrapping_sub(1);
        let mut i = 0;
        while i < 6 {
            d[i] &= mask;
            i += 1;
        }
        Fp(d)
    }

    /// Divide by two: `x/2` is `x >> 1` for even `x` and `(x + p) >> 1` otherwise
    #[inline]
    pub const fn halve(&self) -> Fp {
        let mask = (self.0[0] & 1).wrapping_neg();

        let mut d = [0u64; 6];
        let mut carry = 0;
        let mut i = 0;
        while i < 6 {
            let (v, c) = adc(self.0[i], MODULUS[i] & mask, carry);
            d[i] = v;
            carry = c;
            i += 1;
        }

        let mut i = 0;
        while i < 5 {
            d[i] = (d[i] >> 1) | (d[i + 1] << 63);
            i += 1;
        }
        d[5] = (d[5] >> 1) | (carry << 63);
        Fp(d)
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Self::montgomery_mul(&self.0, &rhs.0)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp {
        Self::montgomery_mul(&self.0, &self.0)
    }

    /// Montgomery product `a·b·R⁻¹ mod p`.
    ///
    /// Operand scanning with one reduction step per limb of `a`. The running
    /// value stays below `2p`, so a single conditional subtraction at the
    /// end yields the reduced result.
    const fn montgomery_mul(a: &[u64; 6], b: &[u64; 6]) -> Fp {
        let mut t = [0u64; 6];
        let mut i = 0;
        while i < 6 {
            // t += a[i]·b, with the seventh word kept in `hi`
            let mut carry = 0;
            let mut j = 0;
            while j < 6 {
                let (v, c) = mac(t[j], a[i], b[j], carry);
                t[j] = v;
                carry = c;
                j += 1;
            }
            let hi = carry;

            // t = (t + k·p) / 2^64
            let k = t[0].wrapping_mul(INV);
            let (_, mut carry) = mac(t[0], k, MODULUS[0], 0);
            let mut j = 1;
            while j < 6 {
                let (v, c) = mac(t[j], k, MODULUS[j], carry);
                t[j - 1] = v;
                carry = c;
                j += 1;
            }
            let (top, _) = adc(hi, 0, carry);
            t[5] = top;
            i += 1;
        }
        (&Fp(t)).subtract_p()
    }

    /// `Σ a[i]·b[i]` with a single final reduction.
    ///
    /// Products are accumulated digit by digit of the left operands and
    /// reduced once per digit, which is cheaper than `T` separate
    /// multiplications for the short sums Fp2 needs.
    #[inline]
    pub(crate) fn sum_of_products<const T: usize>(a: [Fp; T], b: [Fp; T]) -> Fp {
        let mut u = [0u64; 6];
        for j in 0..6 {
            let mut t = [u[0], u[1], u[2], u[3], u[4], u[5], 0];
            for (x, y) in a.iter().zip(b.iter()) {
                let mut carry = 0;
                for k in 0..6 {
                    (t[k], carry) = mac(t[k], x.0[j], y.0[k], carry);
                }
                t[6] = adc(t[6], 0, carry).0;
            }

            let k = t[0].wrapping_mul(INV);
            let (_, mut carry) = mac(t[0], k, MODULUS[0], 0);
            for m in 1..6 {
                (u[m - 1], carry) = mac(t[m], k, MODULUS[m], carry);
            }
            u[5] = adc(t[6], 0, carry).0;
        }
        (&Fp(u)).subtract_p()
    }

    /// Multiply by a small signed integer
    pub fn mul_by_int(&self, c: i64) -> Fp {
        let r = self * Fp::from(c.unsigned_abs());
        Fp::conditional_select(&r, &-r, Choice::from((c < 0) as u8))
    }
}

// ============================================================================
// Hints, Square Roots and Inversion
// ============================================================================

impl Fp {
    /// Variable-time exponentiation by a little-endian exponent
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Self {
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

    /// The progenitor `x^((p-3)/4)`, the hint every tower level passes down
    pub fn progenitor(&self) -> Fp {
        self.pow_vartime(&PROGENITOR_EXP)
    }

    /// Legendre test returning the progenitor as a by-product.
    ///
    /// Zero is reported as a non-residue.
    pub fn quadratic_residue(&self) -> (Choice, Fp) {
        let hint = self.progenitor();
        let qr = (hint.square() * self).ct_eq(&Fp::one());
        (qr, hint)
    }

    /// Square root with sign 0, reusing `hint` when one is supplied.
    ///
    /// For a non-residue the result is a root of `-x`.
    pub fn sqrt_with_hint(&self, hint: Option<&Fp>) -> Fp {
        let hint = match hint {
            Some(h) => *h,
            None => self.progenitor(),
        };
        let root = self * hint;
        Fp::conditional_select(&root, &-root, root.sign())
    }

    /// Inverse via `x · h⁴`; zero maps to zero
    pub fn invert_with_hint(&self, hint: Option<&Fp>) -> Fp {
        let hint = match hint {
            Some(h) => *h,
            None => self.progenitor(),
        };
        self * hint.square().square()
    }

    /// Square root, if it exists
    pub fn sqrt(&self) -> CtOption<Fp> {
        let (qr, hint) = self.quadratic_residue();
        CtOption::new(self.sqrt_with_hint(Some(&hint)), qr | self.is_zero())
    }

    /// Multiplicative inverse, if it exists
    pub fn invert(&self) -> CtOption<Fp> {
        CtOption::new(self.invert_with_hint(None), !self.is_zero())
    }

    /// Check if element > (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        Choice::from(self.is_lexicographically_largest() as u8)
    }

    /// Sign bit: "lexicographically largest" for big-endian sign, parity otherwise
    pub fn sign(&self) -> Choice {
        if BLS12_381_BIG_ENDIAN_SIGN {
            self.lexicographically_largest()
        } else {
            Choice::from((self.to_canonical()[0] & 1) as u8)
        }
    }

    /// Order of `x` against `-x` as integers in `[0, p)`
    pub fn cmp_negation(&self) -> Ordering {
        if bool::from(self.is_zero()) {
            Ordering::Equal
        } else if self.is_lexicographically_largest() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes; values not below p are rejected
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fp> {
        let mut tmp = Fp([
            be_word(bytes, 5),
            be_word(bytes, 4),
            be_word(bytes, 3),
            be_word(bytes, 2),
            be_word(bytes, 1),
            be_word(bytes, 0),
        ]);

        // Check if < modulus
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);
        let (_, borrow) = sbb(tmp.0[4], MODULUS[4], borrow);
        let (_, borrow) = sbb(tmp.0[5], MODULUS[5], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        tmp *= &R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Decode from a slice that must hold exactly 48 canonical bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Fp> {
        validate::length("Fp", bytes.len(), Self::ENCODED_LEN)?;
        let mut buf = [0u8; 48];
        buf.copy_from_slice(bytes);
        let decoded = Fp::from_bytes(&buf);
        validate::canonical(bool::from(decoded.is_some()), "Fp")?;
        Ok(decoded.unwrap_or(Fp::zero()))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 48] {
        let tmp = self.to_canonical();

        let mut res = [0; 48];
        for (chunk, limb) in res.chunks_exact_mut(8).zip(tmp.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        res
    }

    /// Uniformly random element, reduced from 768 random bits
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Fp {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);

        let mut limbs = [0u64; 12];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = be_word(&bytes, i);
        }
        Fp::from_u768(limbs)
    }

    /// Reduce a big-endian 768-bit number modulo p
    fn from_u768(limbs: [u64; 12]) -> Fp {
        let d1 = Fp([limbs[11], limbs[10], limbs[9], limbs[8], limbs[7], limbs[6]]);
        let d0 = Fp([limbs[5], limbs[4], limbs[3], limbs[2], limbs[1], limbs[0]]);
        d0 * R2 + d1 * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<u64> for Fp {
    fn from(val: u64) -> Fp {
        Fp([val, 0, 0, 0, 0, 0]) * R2
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
            u64::conditional_select(&a.0[5], &b.0[5], choice),
        ])
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        self.neg()
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp);
impl_binops_multiplicative!(Fp);
