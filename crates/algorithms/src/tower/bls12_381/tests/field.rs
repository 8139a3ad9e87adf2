//! Base field and sub-tower tests for the BLS12-381 octic tower

use core::cmp::Ordering;

use super::super::fp::{Fp, MODULUS, PROGENITOR_EXP};
use super::super::fp2::Fp2;
use super::super::fp4::Fp4;
use super::super::{FROBENIUS_COEFF, TWIST_HINT};
use super::test_rng;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Montgomery form of 2
const TWO: Fp = Fp([
    0x3213_0000_0006_554f,
    0xb93c_0018_d6c4_0005,
    0x5760_5e0d_b0dd_bb51,
    0x8b25_6521_ed1f_9bcb,
    0x6cf2_8d79_0162_2c03,
    0x11eb_ab9d_bb81_e28c,
]);

// ============================================================================
// Fp Field Tests
// ============================================================================

#[test]
fn test_fp_conditional_selection() {
    let a = Fp([1, 2, 3, 4, 5, 6]);
    let b = Fp([7, 8, 9, 10, 11, 12]);

    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn test_fp_equality() {
    fn is_equal(a: &Fp, b: &Fp) -> bool {
        let eq = a == b;
        let ct_eq = a.ct_eq(b);
        assert_eq!(eq, bool::from(ct_eq));
        eq
    }

    assert!(is_equal(&Fp([1, 2, 3, 4, 5, 6]), &Fp([1, 2, 3, 4, 5, 6])));
    assert!(!is_equal(&Fp([7, 2, 3, 4, 5, 6]), &Fp([1, 2, 3, 4, 5, 6])));
    assert!(!is_equal(&Fp([1, 2, 3, 4, 5, 7]), &Fp([1, 2, 3, 4, 5, 6])));
}

#[test]
fn test_fp_squaring() {
    let a = Fp([
        0xd215_d276_8e83_191b,
        0x5085_d80f_8fb2_8261,
        0xce9a_032d_df39_3a56,
        0x3e9c_4fff_2ca0_c4bb,
        0x6436_b6f7_f4d9_5dfb,
        0x1060_6628_ad4a_4d90,
    ]);
    let b = Fp([
        0x33d9_c42a_3cb3_e235,
        0xdad1_1a09_4c4c_d455,
        0xa2f1_44bd_729a_aeba,
        0xd415_0932_be9f_feac,
        0xe27b_c7c4_7d44_ee50,
        0x14b6_a78d_3ec7_a560,
    ]);

    assert_eq!(a.square(), b);
}

#[test]
fn test_fp_multiplication() {
    let a = Fp([
        0x0397_a383_2017_0cd4,
        0x734c_1b2c_9e76_1d30,
        0x5ed2_55ad_9a48_beb5,
        0x095a_3c6b_22a7_fcfc,
        0x2294_ce75_d4e2_6a27,
        0x1333_8bd8_7001_1ebb,
    ]);
    let b = Fp([
        0xb9c3_c7c5_b119_6af7,
        0x2580_e208_6ce3_35c1,
        0xf49a_ed3d_8a57_ef42,
        0x41f2_81e4_9846_e878,
        0xe076_2346_c384_52ce,
        0x0652_e893_26e5_7dc0,
    ]);
    let c = Fp([
        0xf96e_f3d7_11ab_5355,
        0xe8d4_59ea_00f1_48dd,
        0x53f7_354a_5f00_fa78,
        0x9e34_a4f3_125c_5f83,
        0x3fbe_0c47_ca74_c19e,
        0x01b0_6a8b_bd4a_dfe4,
    ]);

    assert_eq!(a * b, c);
    assert_eq!(Fp::sum_of_products([a], [b]), c);
}

#[test]
fn test_fp_addition_and_negation() {
    let a = Fp([
        0x5360_bb59_7867_8032,
        0x7dd2_75ae_799e_128e,
        0x5c5b_5071_ce4f_4dcf,
        0xcdb2_1f93_078d_bb3e,
        0xc323_65c5_e73f_474a,
        0x115a_2a54_89ba_be5b,
    ]);
    let b = Fp([
        0x9fd2_8773_3d23_dda0,
        0xb16b_f2af_738b_3554,
        0x3e57_a75b_d3cc_6d1d,
        0x900b_c0bd_627f_d6d6,
        0xd319_a080_efb2_45fe,
        0x15fd_caa4_e4bb_2091,
    ]);
    let sum = Fp([
        0x3934_42cc_b58b_b327,
        0x1092_685f_3bd5_47e3,
        0x3382_252c_ab6a_c4c9,
        0xf946_94cb_7688_7f55,
        0x4b21_5e90_93a5_e071,
        0x0d56_e30f_34f5_f853,
    ]);
    let neg_a = Fp([
        0x669e_44a6_8798_2a79,
        0xa0d9_8a50_37b5_ed71,
        0x0ad5_822f_2861_a854,
        0x96c5_2bf1_ebf7_5781,
        0x87f8_41f0_5c0c_658c,
        0x08a6_e795_afc5_283e,
    ]);

    assert_eq!(a + b, sum);
    assert_eq!(sum - b, a);
    assert_eq!(-a, neg_a);
    assert_eq!(-Fp::zero(), Fp::zero());
}

#[test]
fn test_fp_halve() {
    let mut rng = test_rng(1);
    assert_eq!(TWO.halve(), Fp::one());
    assert_eq!(Fp::one().halve() + Fp::one().halve(), Fp::one());
    for _ in 0..20 {
        let a = Fp::random(&mut rng);
        assert_eq!(a.halve() + a.halve(), a);
    }
}

#[test]
fn test_fp_small_integers() {
    assert_eq!(Fp::from(2), TWO);
    assert_eq!(Fp::from(1), Fp::one());
    assert_eq!(Fp::one().mul_by_int(2), TWO);
    assert_eq!(Fp::one().mul_by_int(-2), -TWO);
    assert_eq!(TWO.mul_by_int(0), Fp::zero());
}

#[test]
fn test_fp_sqrt() {
    // a = 4
    let a = Fp::from_raw_unchecked([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]);

    // sqrt(4) = 2, the root with sign 0
    assert_eq!(a.sqrt().unwrap(), TWO);
    assert_eq!(a.sqrt_with_hint(None), TWO);

    // 2 is not a square modulo p
    let (qr, _) = TWO.quadratic_residue();
    assert!(!bool::from(qr));
    assert!(bool::from(TWO.sqrt().is_none()));

    // For a non-residue the hinted root squares to its negation
    let r = TWO.sqrt_with_hint(None);
    assert_eq!(r.square(), -TWO);
}

#[test]
fn test_fp_quadratic_residue_hint() {
    let mut rng = test_rng(2);
    for _ in 0..10 {
        let a = Fp::random(&mut rng).square();
        let (qr, hint) = a.quadratic_residue();
        assert!(bool::from(qr));
        assert_eq!(hint, a.progenitor());
        assert_eq!(a.sqrt_with_hint(Some(&hint)).square(), a);
        assert_eq!(a.invert_with_hint(Some(&hint)) * a, Fp::one());
        // The hint only matters up to sign
        assert_eq!(a.invert_with_hint(Some(&-hint)) * a, Fp::one());
    }

    let (qr, _) = Fp::zero().quadratic_residue();
    assert!(!bool::from(qr));
    assert_eq!(Fp::zero().sqrt_with_hint(None), Fp::zero());
    assert!(bool::from(Fp::zero().sqrt().is_some()));
}

#[test]
fn test_fp_inversion() {
    let a = Fp([
        0x43b4_3a50_78ac_2076,
        0x1ce0_7630_46f8_962b,
        0x724a_5276_486d_735c,
        0x6f05_c2a6_282d_48fd,
        0x2095_bd5b_b4ca_9331,
        0x03b3_5b38_94b0_f7da,
    ]);
    let b = Fp([
        0x69ec_d704_0952_148f,
        0x985c_cc20_2219_0f55,
        0xe19b_ba36_a9ad_2f41,
        0x19bb_16c9_5219_dbd8,
        0x14dc_acfd_fb47_8693,
        0x115f_f58a_fff9_a8e1,
    ]);

    assert_eq!(a.invert().unwrap(), b);
    assert_eq!(a.invert_with_hint(None), b);
    assert!(bool::from(Fp::zero().invert().is_none()));
    assert_eq!(Fp::zero().invert_with_hint(None), Fp::zero());
}

#[test]
fn test_fp_lexicographic_largest() {
    assert!(!bool::from(Fp::zero().lexicographically_largest()));
    assert!(!bool::from(Fp::one().lexicographically_largest()));
    assert!(!bool::from(
        Fp::from_raw_unchecked([
            0xa1fa_ffff_fffe_5557,
            0x995b_fff9_76a3_fffe,
            0x03f4_1d24_d174_ceb4,
            0xf654_7998_c199_5dbd,
            0x778a_468f_507a_6034,
            0x0205_5993_1f7f_8103
        ])
        .lexicographically_largest()
    ));
    assert!(bool::from(
        Fp::from_raw_unchecked([
            0x1804_0000_0001_5554,
            0x8550_0005_3ab0_0001,
            0x633c_b57c_253c_276f,
            0x6e22_d1ec_31eb_b502,
            0xd391_6126_f2d1_4ca2,
            0x17fb_b857_1a00_6596,
        ])
        .lexicographically_largest()
    ));
}

#[test]
fn test_fp_sign_and_ordering() {
    assert!(!bool::from(Fp::one().sign()));
    assert!(bool::from((-Fp::one()).sign()));
    assert_eq!(Fp::zero().cmp_negation(), Ordering::Equal);
    assert_eq!(Fp::one().cmp_negation(), Ordering::Less);
    assert_eq!((-Fp::one()).cmp_negation(), Ordering::Greater);
}

// ============================================================================
// Tower Constant Tests
// ============================================================================

#[test]
fn test_twist_hint_constant() {
    let half = TWO.invert().unwrap();
    assert_eq!(half.progenitor(), TWIST_HINT);
}

#[test]
fn test_frobenius_coefficient_constant() {
    let xi = Fp2 {
        c0: Fp::one(),
        c1: Fp::one(),
    };
    assert_eq!(xi, Fp2::one().mul_by_nonresidue());
    assert_eq!(xi.pow_vartime(&PROGENITOR_EXP), FROBENIUS_COEFF);
}

// ============================================================================
// Fp2 Field Tests
// ============================================================================

#[test]
fn test_fp2_conditional_selection() {
    let a = Fp2 {
        c0: Fp::from_raw_unchecked([1, 2, 3, 4, 5, 6]),
        c1: Fp::from_raw_unchecked([7, 8, 9, 10, 11, 12]),
    };
    let b = Fp2 {
        c0: Fp::from_raw_unchecked([13, 14, 15, 16, 17, 18]),
        c1: Fp::from_raw_unchecked([19, 20, 21, 22, 23, 24]),
    };

    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn test_fp2_arithmetic() {
    let mut rng = test_rng(3);
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        let b = Fp2::random(&mut rng);

        assert_eq!(a.square(), a * a);
        assert_eq!(a * b, b * a);
        assert_eq!(a.mul_by_nonresidue().div_by_nonresidue(), a);
        assert_eq!(a.halve() + a.halve(), a);
        assert_eq!(a.mul_by_int(-3), -(a + a + a));
        assert_eq!(a.mul_by_base(&TWO), a + a);
        assert_eq!(a.conjugate() * a, Fp2::from(a.norm()));
    }

    // u² = -1
    let u = Fp2 {
        c0: Fp::zero(),
        c1: Fp::one(),
    };
    assert_eq!(u.square(), -Fp2::one());
}

#[test]
fn test_fp2_inversion() {
    let mut rng = test_rng(4);
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        let (_, hint) = a.quadratic_residue();
        assert_eq!(a * a.invert(None), Fp2::one());
        assert_eq!(a * a.invert(Some(&hint)), Fp2::one());
    }
    assert_eq!(Fp2::zero().invert(None), Fp2::zero());
}

#[test]
fn test_fp2_sqrt() {
    let mut rng = test_rng(5);
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        let sq = a.square();
        let (qr, hint) = sq.quadratic_residue();
        assert!(bool::from(qr));

        let root = sq.sqrt(Some(&hint));
        assert_eq!(root.square(), sq);
        assert!(!bool::from(root.sign()));
        assert!(root == a || root == -a);
    }

    // Real inputs, both residues and non-residues in Fp
    for n in 1..8u64 {
        let a = Fp2::from(Fp::from(n));
        assert_eq!(a.sqrt(None).square(), a);
    }

    let (qr, _) = Fp2::zero().quadratic_residue();
    assert!(!bool::from(qr));
    assert_eq!(Fp2::zero().sqrt(None), Fp2::zero());
}

#[test]
fn test_fp2_xi_is_not_a_square() {
    let (qr, _) = Fp2::one().mul_by_nonresidue().quadratic_residue();
    assert!(!bool::from(qr));
}

#[test]
fn test_fp2_frobenius() {
    let mut rng = test_rng(6);
    let a = Fp2::random(&mut rng);
    assert_eq!(a.frobenius_map(), a.pow_vartime(&MODULUS));
    assert_eq!(a.frobenius_map().frobenius_map(), a);
}

#[test]
fn test_fp2_sign() {
    let mut rng = test_rng(7);
    for _ in 0..10 {
        let a = Fp2::random(&mut rng);
        assert_ne!(bool::from(a.sign()), bool::from((-a).sign()));
        assert_eq!(a.cmp_negation(), (-a).cmp_negation().reverse());
    }

    // A zero u-coefficient hands the sign to the real part
    let real = Fp2::from(-Fp::one());
    assert!(bool::from(real.sign()));
    assert_eq!(Fp2::zero().cmp_negation(), Ordering::Equal);
}

// ============================================================================
// Fp4 Field Tests
// ============================================================================

#[test]
fn test_fp4_arithmetic() {
    let mut rng = test_rng(8);
    for _ in 0..10 {
        let a = Fp4::random(&mut rng);
        let b = Fp4::random(&mut rng);
        let c = Fp4::random(&mut rng);

        assert_eq!(a.square(), a * a);
        assert_eq!(a * b, b * a);
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a.mul_by_nonresidue().div_by_nonresidue(), a);
        assert_eq!(a.halve() + a.halve(), a);
        assert_eq!(a.conjugate() * a, Fp4::from(a.norm()));
    }

    // v² = ξ
    let v = Fp4 {
        c0: Fp2::zero(),
        c1: Fp2::one(),
    };
    assert_eq!(v.square(), Fp4::from(Fp2::one().mul_by_nonresidue()));
    assert_eq!(Fp4::one().mul_by_nonresidue(), v);
}

#[test]
fn test_fp4_inversion() {
    let mut rng = test_rng(9);
    for _ in 0..10 {
        let a = Fp4::random(&mut rng);
        let (_, hint) = a.quadratic_residue();
        assert_eq!(a * a.invert(None), Fp4::one());
        assert_eq!(a * a.invert(Some(&hint)), Fp4::one());
    }
}

#[test]
fn test_fp4_sqrt() {
    let mut rng = test_rng(10);
    for _ in 0..10 {
        let a = Fp4::random(&mut rng);
        let sq = a.square();
        let (qr, hint) = sq.quadratic_residue();
        assert!(bool::from(qr));

        let root = sq.sqrt(Some(&hint));
        assert_eq!(root.square(), sq);
        assert!(!bool::from(root.sign()));
        assert!(root == a || root == -a);
        assert_eq!(sq.sqrt(None), root);
    }

    // Inputs lying in Fp2
    for _ in 0..10 {
        let a = Fp4::from(Fp2::random(&mut rng));
        assert_eq!(a.sqrt(None).square(), a);
    }
}

#[test]
fn test_fp4_v_is_not_a_square() {
    let v = Fp4::one().mul_by_nonresidue();
    let (qr, _) = v.quadratic_residue();
    assert!(!bool::from(qr));
}

#[test]
fn test_fp4_frobenius() {
    let mut rng = test_rng(11);
    // Level constant for x ↦ x^p on Fp4: ξ^((p-1)/2) = f²·ξ
    let ff = FROBENIUS_COEFF.square().mul_by_nonresidue();
    let a = Fp4::random(&mut rng);
    let b = Fp4::random(&mut rng);

    assert_eq!((a * b).frobenius(&ff), a.frobenius(&ff) * b.frobenius(&ff));
    let mut x = a;
    for _ in 0..4 {
        x = x.frobenius(&ff);
    }
    assert_eq!(x, a);
}

#[test]
fn test_field_zeroize() {
    use zeroize::Zeroize;

    let mut a = Fp::one();
    a.zeroize();
    assert!(bool::from(a.is_zero()));

    let mut b = Fp4::one();
    b.zeroize();
    assert!(bool::from(b.is_zero()));
}
