//! secp256k1: `y^2 = x^3 + 7` over `Fp`, `a = 0`, as used by Bitcoin and
//! Ethereum. Montgomery constants below are transcribed from the teacher's
//! own `k256::arithmetic::field_montgomery` table (see DESIGN.md) — the one
//! curve in this registry whose field constants come directly from the
//! teacher rather than independently derived from the public modulus.

use algebra_ct::SecretWord64;
use algebra_ec::{CurveParams, EquationAIsGeneric, ScalarLimbs};
use algebra_field::{Fp, FieldParams, SqrtAlgorithm};
use algebra_limbs::Limbs;

const fn w(v: u64) -> SecretWord64 {
    SecretWord64::new(v)
}

/// secp256k1's base field `Fp`, `p = 2^256 - 2^32 - 977`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Secp256k1Fp;

impl FieldParams<4> for Secp256k1Fp {
    const MODULUS: Limbs<4> = Limbs([
        w(0xffff_fffe_ffff_fc2f),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
    ]);
    const M0INV: u64 = 0xd838_091d_d225_3531;
    const R_MOD_P: Limbs<4> = Limbs([w(0x0000_0001_0000_03d1), w(0), w(0), w(0)]);
    const R2_MOD_P: Limbs<4> = Limbs([w(0x0000_07a2_000e_90a1), w(0x1), w(0), w(0)]);
    const SPARE_BITS: u32 = 0;
    const P_MINUS_2: Limbs<4> = Limbs([
        w(0xffff_fffe_ffff_fc2d),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
    ]);
    const P_MINUS_1_OVER_2: Limbs<4> = Limbs([
        w(0xffff_ffff_7fff_fe17),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
        w(0x7fff_ffff_ffff_ffff),
    ]);
    const SQRT_ALGORITHM: SqrtAlgorithm = SqrtAlgorithm::Shanks;
    const SQRT_EXP_SHANKS: Limbs<4> = Limbs([
        w(0xffff_ffff_bfff_ff0c),
        w(0xffff_ffff_ffff_ffff),
        w(0xffff_ffff_ffff_ffff),
        w(0x3fff_ffff_ffff_ffff),
    ]);
}

/// secp256k1's prime-field element type.
pub type FpElement = Fp<Secp256k1Fp, 4>;

const GENERATOR_X: Limbs<4> = Limbs([
    w(0xd736_2e5a_487e_2097),
    w(0x231e_2953_29bc_66db),
    w(0x979f_48c0_33fd_129c),
    w(0x9981_e643_e908_9f48),
]);
const GENERATOR_Y: Limbs<4> = Limbs([
    w(0xb15e_a6d2_d3db_abe2),
    w(0x8dfc_5d5d_1f1d_c64d),
    w(0x70b6_b59a_ac19_c136),
    w(0xcf3f_851f_d4a5_82d6),
]);
const EQUATION_B_MONT: Limbs<4> = Limbs([w(0x0000_0007_0000_1ab7), w(0), w(0), w(0)]);

/// secp256k1's order `n`, the prime order of the single subgroup the curve
/// consists of (cofactor 1), zero-extended to the crate-wide 512-bit
/// [`ScalarLimbs`] width.
const ORDER: ScalarLimbs = Limbs([
    w(0xbfd2_5e8c_d036_4141),
    w(0xbaae_dce6_af48_a03b),
    w(0xffff_ffff_ffff_fffe),
    w(0xffff_ffff_ffff_ffff),
    w(0),
    w(0),
    w(0),
    w(0),
]);

/// The secp256k1 curve group, `y^2 = x^3 + 7`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Secp256k1;

impl CurveParams for Secp256k1 {
    type Field = FpElement;
    type PointArithmetic = EquationAIsGeneric;

    const EQUATION_A: Self::Field = Fp::ZERO;
    const EQUATION_B: Self::Field = Fp::from_montgomery_unchecked(EQUATION_B_MONT);
    const GENERATOR: (Self::Field, Self::Field) = (
        Fp::from_montgomery_unchecked(GENERATOR_X),
        Fp::from_montgomery_unchecked(GENERATOR_Y),
    );
    const ORDER: ScalarLimbs = ORDER;
    const COFACTOR: ScalarLimbs =
        Limbs([w(1), w(0), w(0), w(0), w(0), w(0), w(0), w(0)]);
}

/// A point on the secp256k1 curve in projective coordinates.
pub type ProjectivePoint = algebra_ec::ProjectivePoint<Secp256k1>;
/// A point on the secp256k1 curve in affine coordinates.
pub type AffinePoint = algebra_ec::AffinePoint<Secp256k1>;

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
        let n_g = algebra_ec::scalar_mul(&g, &Secp256k1::ORDER);
        assert!(bool::from(n_g.is_identity()));
    }

    #[test]
    fn cofactor_is_one_and_subgroup_check_is_trivially_true() {
        // secp256k1 has cofactor 1, so `is_in_subgroup` takes the fast path
        // in `algebra_ec::subgroup` rather than the generic `[r] * p` test.
        assert_eq!(
            Secp256k1::COFACTOR,
            Limbs([w(1), w(0), w(0), w(0), w(0), w(0), w(0), w(0)])
        );
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
    fn field_one_roundtrips() {
        let one = FpElement::ONE;
        assert_eq!(one.to_canonical().0[0].to_raw(), 1);
    }

    #[test]
    fn field_inverse_roundtrips() {
        let seven = FpElement::from_u64(7);
        let inv = seven.invert().unwrap();
        assert_eq!(seven.mul(inv), FpElement::ONE);
    }

    #[test]
    fn field_sqrt_of_square_roundtrips() {
        let x = FpElement::from_u64(1234567);
        let sq = x.square();
        let root = sq.sqrt().unwrap();
        assert!(root == x || root == x.negate());
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
    fn uncompressed_identity_is_all_zero() {
        let id = AffinePoint::identity();
        let mut bytes = [0xffu8; 64];
        id.to_uncompressed(&mut bytes);
        assert_eq!(bytes, [0u8; 64]);
        let back = AffinePoint::from_uncompressed(&bytes).unwrap();
        assert!(bool::from(back.is_identity()));
    }

    #[test]
    fn compressed_roundtrips() {
        let g = AffinePoint::generator();
        let mut bytes = [0u8; 33];
        g.to_compressed(&mut bytes);
        assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
        let back = AffinePoint::from_compressed(&bytes).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn compressed_sign_selects_matching_root() {
        let g = AffinePoint::generator();
        let mut bytes = [0u8; 33];
        g.to_compressed(&mut bytes);
        let tag = bytes[0];
        let flipped_tag = if tag == 0x02 { 0x03 } else { 0x02 };
        let mut flipped = bytes;
        flipped[0] = flipped_tag;
        let negated = AffinePoint::from_compressed(&flipped).unwrap();
        assert_eq!(negated, g.neg());
    }
}
