//! Octic tower over the BLS12-381 base field.
//!
//! ```text
//! Fp2 = Fp[u]/(u² + 1)
//! Fp4 = Fp2[v]/(v² - ξ),  ξ = 1 + u
//! Fp8 = Fp4[w]/(w² - v)
//! ```

mod fp;
mod fp2;
mod fp4;

pub use fp::Fp;
pub use fp2::Fp2;
pub use fp4::Fp4;

use octic_params::tower::bls12_381::{
    BLS12_381_BIG_ENDIAN_SIGN, BLS12_381_MODULUS_BYTES, BLS12_381_POSITIVE_TOWER,
};

use super::traits::OcticTower;

/// (1/2)^((p-3)/4) in Montgomery form. Both ξ and v have norm 2 down to Fp,
/// so this one constant corrects hints at the Fp4 and Fp8 levels.
pub(crate) const TWIST_HINT: Fp = Fp::from_raw_unchecked([
    0x3da0_4f44_b546_7509,
    0x9983_bd83_a3d0_fcf9,
    0xf6e0_490f_dfec_87bf,
    0x3f1c_f58a_c164_968e,
    0x1029_0b16_ea51_cb64,
    0x0255_ebf1_3e7b_290a,
]);

/// ξ^((p-3)/4), which turns out to be a pure `u` multiple
pub(crate) const FROBENIUS_COEFF: Fp2 = Fp2 {
    c0: Fp::zero(),
    c1: Fp::from_raw_unchecked([
        0xa8ab_dfc5_9c53_26f5,
        0x780d_3122_41d5_d10e,
        0xa4e9_3e32_ff22_600a,
        0xd946_7408_ada3_f7e8,
        0xdd4a_b165_cc96_6c7a,
        0x135a_626a_dc30_8682,
    ]),
};

/// Tower configuration for BLS12-381
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bls12381Tower;

impl OcticTower for Bls12381Tower {
    type Fp4 = Fp4;

    const POSITIVE_TOWER: bool = BLS12_381_POSITIVE_TOWER;
    const BIG_ENDIAN_SIGN: bool = BLS12_381_BIG_ENDIAN_SIGN;
    const MODULUS_BYTES: usize = BLS12_381_MODULUS_BYTES;
    const TWIST_HINT: Fp = TWIST_HINT;
    const FROBENIUS_COEFF: Fp2 = FROBENIUS_COEFF;
}

/// Fp8 over the BLS12-381 base field
pub type Fp8 = super::Fp8<Bls12381Tower>;

impl From<Fp4> for Fp8 {
    fn from(f: Fp4) -> Fp8 {
        Fp8::from_real(f)
    }
}

#[cfg(test)]
mod tests;
