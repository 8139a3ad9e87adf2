//! Property-based tests for Fp8 arithmetic over the BLS12-381 prime

use octic_algorithms::{Bls12381Fp8 as Fp8, Fp4};
use octic_api::Serialize;
use octic_params::tower::bls12_381::BLS12_381_FP8_SIZE;
use octic_tests::strategies::{fp8, nonzero_fp8, real_fp8, wrong_length_bytes};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn additive_group(x in fp8(), y in fp8(), z in fp8()) {
        prop_assert_eq!(x + (-x), Fp8::zero());
        prop_assert_eq!((x + y) + z, x + (y + z));
        prop_assert_eq!(x + Fp8::zero(), x);
        prop_assert_eq!((x - y) + y, x);
    }

    #[test]
    fn multiplicative_identity_and_distributivity(x in fp8(), y in fp8(), z in fp8()) {
        prop_assert_eq!(x * Fp8::one(), x);
        prop_assert_eq!(x * (y + z), x * y + x * z);
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn square_matches_multiplication(x in fp8()) {
        prop_assert_eq!(x.square(), x * x);
    }

    #[test]
    fn inverse_is_multiplicative_inverse(x in nonzero_fp8()) {
        prop_assert_eq!(x.invert(None) * x, Fp8::one());

        let (_, hint) = x.quadratic_residue();
        prop_assert_eq!(x.invert(Some(&hint)), x.invert(None));
    }

    #[test]
    fn conjugate_norm_is_real(x in fp8()) {
        let n = x.conjugate() * x;
        prop_assert!(bool::from(n.is_real()));
        prop_assert_eq!(n.imaginary(), Fp4::zero());
        prop_assert_eq!(n, x * x.conjugate());
    }

    #[test]
    fn frobenius_has_order_eight(x in fp8(), y in fp8()) {
        prop_assert_eq!(x.frobenius_map(8), x);
        prop_assert_eq!((x * y).frobenius_map(1), x.frobenius_map(1) * y.frobenius_map(1));
        prop_assert_eq!((x + y).frobenius_map(1), x.frobenius_map(1) + y.frobenius_map(1));
    }

    #[test]
    fn serialization_round_trip(x in fp8()) {
        let bytes = x.to_bytes();
        prop_assert_eq!(bytes.len(), BLS12_381_FP8_SIZE);
        prop_assert_eq!(Fp8::from_bytes(&bytes).unwrap(), x);

        let via_api = <Fp8 as Serialize>::from_bytes(&Serialize::to_bytes(&x)).unwrap();
        prop_assert_eq!(via_api, x);
    }

    #[test]
    fn decoding_rejects_wrong_length(bytes in wrong_length_bytes()) {
        prop_assert!(Fp8::from_bytes(&bytes).is_err());
    }

    #[test]
    fn sqrt_of_square(x in fp8()) {
        let sq = x.square();
        let (qr, _) = sq.quadratic_residue();
        prop_assert!(bool::from(qr) || bool::from(x.is_zero()));

        let root = sq.sqrt(None);
        prop_assert_eq!(root.square(), sq);
        prop_assert_eq!(sq.sqrt(None).to_bytes(), root.to_bytes());
        prop_assert!(!bool::from(root.sign()));
    }

    #[test]
    fn sqrt_whenever_residue(x in fp8()) {
        let (qr, hint) = x.quadratic_residue();
        if bool::from(qr) {
            prop_assert_eq!(x.sqrt(Some(&hint)).square(), x);
            prop_assert!(bool::from(x.checked_sqrt().is_some()));
        } else {
            prop_assert!(bool::from(x.checked_sqrt().is_none()));
        }
    }

    #[test]
    fn real_elements_are_squares(x in real_fp8()) {
        let root = x.sqrt(None);
        prop_assert_eq!(root.square(), x);
        prop_assert!(!bool::from(root.sign()));
    }

    #[test]
    fn sign_canonicalization(x in nonzero_fp8()) {
        prop_assert_ne!(bool::from(x.sign()), bool::from((-x).sign()));
        prop_assert_eq!(x.cmp_negation(), (-x).cmp_negation().reverse());
    }

    #[test]
    fn generator_round_trip(x in fp8()) {
        prop_assert_eq!(x.mul_by_nonresidue().div_by_nonresidue(), x);
        prop_assert_eq!(x.mul_by_nonresidue().mul_by_nonresidue(), x.mul_by_nonresidue_squared());
    }
}

#[test]
fn one_and_zero_scenarios() {
    let one = Fp8::one();
    let zero = Fp8::zero();

    assert_eq!(one.square(), one);
    assert_eq!(one.invert(None), one);
    assert_eq!(zero.sqrt(None), zero);

    let (qr, _) = zero.quadratic_residue();
    assert!(!bool::from(qr));
}

#[test]
fn conjugate_scenario() {
    let x = octic_tests::fp8_from_seed(7);
    let c = x.conjugate();

    assert!(bool::from((x * c).is_real()));
    assert_eq!(x * c, c * x);

    let y = octic_tests::fp8_from_seed(8);
    assert_eq!(x * y, y * x);
}
