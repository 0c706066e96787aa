//! NIST P-256 (secp256r1): `y^2 = x^3 - 3x + b` over `Fp`, `a = -3` by
//! NIST's choice of Weierstrass representative — the curve behind
//! ECDSA/ECDH suite B and the WebAuthn/FIDO2 default. `a = -3` lets every
//! point operation use [`EquationAIsMinusThree`], saving one field
//! multiplication per add/double over the generic formulas.
//!
//! Unlike the teacher's own `p256` crate (which derives its Montgomery
//! constants at compile time from `crypto-bigint`'s const-generic modulus
//! machinery), the constants below are precomputed literals in the same
//! style as `k256::field_montgomery` — see DESIGN.md for why this build
//! standardizes on literal constants across the registry rather than
//! adopting a second derivation strategy for one curve.

use algebra_ct::SecretWord64;
use algebra_ec::{CurveParams, EquationAIsMinusThree, ScalarLimbs};
use algebra_field::{Fp, FieldParams, SqrtAlgorithm};
use algebra_limbs::Limbs;

const fn w(v: u64) -> SecretWord64 {
    SecretWord64::new(v)
}

/// P256's base field `Fp`, `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct P256Fp;

impl FieldParams<4> for P256Fp {
    const MODULUS: Limbs<4> = Limbs([
        w(0xffff_ffff_ffff_ffff),
        w(0x0000_0000_ffff_ffff),
        w(0x0000_0000_0000_0000),
        w(0xffff_ffff_0000_0001),
    ]);
    // P256's prime ends in 2^64 - 1, so -p^-1 mod 2^64 reduces to 1 — a
    // well known curiosity of this particular modulus, not a general
    // property of Montgomery reduction.
    const M0INV: u64 = 0x0000_0000_0000_0001;
    const R_MOD_P: Limbs<4> = Limbs([
        w(0x0000_0000_0000_0001),
        w(0xffff_ffff_0000_0000),
        w(0xffff_ffff_ffff_ffff),
        w(0x0000_0000_ffff_fffe),
    ]);
    const R2_MOD_P: Limbs<4> = Limbs([
        w(0x0000_0000_0000_0003),
        w(0xffff_fffb_ffff_ffff),
        w(0xffff_ffff_ffff_fffe),
        w(0x0000_0004_ffff_fffd),
    ]);
    const SPARE_BITS: u32 = 0;
    const P_MINUS_2: Limbs<4> = Limbs([
        w(0xffff_ffff_ffff_fffd),
        w(0x0000_0000_ffff_ffff),
        w(0x0000_0000_0000_0000),
        w(0xffff_ffff_0000_0001),
    ]);
    const P_MINUS_1_OVER_2: Limbs<4> = Limbs([
        w(0xffff_ffff_ffff_ffff),
        w(0x0000_0000_7fff_ffff),
        w(0x8000_0000_0000_0000),
        w(0x7fff_ffff_8000_0000),
    ]);
    const SQRT_ALGORITHM: SqrtAlgorithm = SqrtAlgorithm::Shanks;
    const SQRT_EXP_SHANKS: Limbs<4> = Limbs([
        w(0x0000_0000_0000_0000),
        w(0x0000_0000_4000_0000),
        w(0x4000_0000_0000_0000),
        w(0x3fff_ffff_c000_0000),
    ]);
}

/// P256's prime-field element type.
pub type FpElement = Fp<P256Fp, 4>;

const GENERATOR_X: Limbs<4> = Limbs([
    w(0x79e7_30d4_18a9_143c),
    w(0x75ba_95fc_5fed_b601),
    w(0x79fb_732b_7762_2510),
    w(0x1890_5f76_a537_55c6),
]);
const GENERATOR_Y: Limbs<4> = Limbs([
    w(0xddf2_5357_ce95_560a),
    w(0x8b4a_b8e4_ba19_e45c),
    w(0xd2e8_8688_dd21_f325),
    w(0x8571_ff18_2588_5d85),
]);
const EQUATION_A_MONT: Limbs<4> = Limbs([
    w(0xffff_ffff_ffff_fffc),
    w(0x0000_0003_ffff_ffff),
    w(0x0000_0000_0000_0000),
    w(0xffff_fffc_0000_0004),
]);
const EQUATION_B_MONT: Limbs<4> = Limbs([
    w(0xd89c_df62_29c4_bddf),
    w(0xacf0_05cd_7884_3090),
    w(0xe5a2_20ab_f721_2ed6),
    w(0xdc30_061d_0487_4834),
]);

/// P256's order `n`, zero-extended to the crate-wide 512-bit [`ScalarLimbs`]
/// width.
const ORDER: ScalarLimbs = Limbs([
    w(0xf3b9_cac2_fc63_2551),
    w(0xbce6_faad_a717_9e84),
    w(0xffff_ffff_ffff_ffff),
    w(0xffff_ffff_0000_0000),
    w(0),
    w(0),
    w(0),
    w(0),
]);

/// The NIST P-256 curve group, `y^2 = x^3 - 3x + b`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct P256;

impl CurveParams for P256 {
    type Field = FpElement;
    type PointArithmetic = EquationAIsMinusThree;

    const EQUATION_A: Self::Field = Fp::from_montgomery_unchecked(EQUATION_A_MONT);
    const EQUATION_B: Self::Field = Fp::from_montgomery_unchecked(EQUATION_B_MONT);
    const GENERATOR: (Self::Field, Self::Field) = (
        Fp::from_montgomery_unchecked(GENERATOR_X),
        Fp::from_montgomery_unchecked(GENERATOR_Y),
    );
    const ORDER: ScalarLimbs = ORDER;
    const COFACTOR: ScalarLimbs =
        Limbs([w(1), w(0), w(0), w(0), w(0), w(0), w(0), w(0)]);
}

/// A point on the P256 curve in projective coordinates.
pub type ProjectivePoint = algebra_ec::ProjectivePoint<P256>;
/// A point on the P256 curve in affine coordinates.
pub type AffinePoint = algebra_ec::AffinePoint<P256>;

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_field::Field;

    #[test]
    fn generator_is_on_curve() {
        let g = AffinePoint::generator();
        assert!(bool::from(g.is_on_curve()));
    }

    #[test]
    fn generator_has_prime_order() {
        let g = ProjectivePoint::GENERATOR;
        let n_g = algebra_ec::scalar_mul(&g, &P256::ORDER);
        assert!(bool::from(n_g.is_identity()));
    }

    #[test]
    fn cofactor_is_one_and_subgroup_check_is_trivially_true() {
        // P-256 has cofactor 1, so `is_in_subgroup` takes the fast path in
        // `algebra_ec::subgroup` rather than the generic `[r] * p` test.
        assert_eq!(P256::COFACTOR, Limbs([w(1), w(0), w(0), w(0), w(0), w(0), w(0), w(0)]));
        let g = ProjectivePoint::GENERATOR;
        assert!(bool::from(algebra_ec::is_in_subgroup(&g)));
        assert_eq!(algebra_ec::clear_cofactor(&g), g);
    }

    #[test]
    fn doubling_matches_addition() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g.double(), g.add(&g));
    }

    #[test]
    fn a_equals_p_minus_3() {
        let a = P256::EQUATION_A;
        let minus_three = FpElement::from_u64(3).negate();
        assert_eq!(a, minus_three);
    }

    #[test]
    fn field_inverse_roundtrips() {
        let x = FpElement::from_u64(424242);
        let inv = x.invert().unwrap();
        assert_eq!(x.mul(inv), FpElement::ONE);
    }

    #[test]
    fn uncompressed_roundtrips() {
        let g = AffinePoint::generator();
        let mut bytes = [0u8; 64];
        g.to_uncompressed(&mut bytes);
        let back = AffinePoint::from_uncompressed(&bytes).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn compressed_roundtrips() {
        let g = AffinePoint::generator();
        let mut bytes = [0u8; 33];
        g.to_compressed(&mut bytes);
        let back = AffinePoint::from_compressed(&bytes).unwrap();
        assert_eq!(back, g);
    }
}
