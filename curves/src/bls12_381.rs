//! BLS12-381: a pairing-friendly curve with `y^2 = x^3 + 4` over `Fp`
//! (`a = 0`) backing G1, and its sextic twist `y^2 = x^3 + 4(1+u)` over
//! `Fp2 = Fp[u]/(u^2+1)` backing G2. No teacher or pack example ships a
//! BLS12-381 instantiation, so every constant here is drawn from the
//! curve's public domain parameters (as standardized in the IETF
//! `draft-irtf-cfrg-pairing-friendly-curves` / `hash-to-curve` drafts and
//! the `zkcrypto`/`blst` reference implementations) rather than
//! transcribed from this workspace's corpus; see DESIGN.md.

use algebra_ct::SecretWord64;
use algebra_ec::{CurveParams, EquationAIsGeneric, ScalarLimbs};
use algebra_field::{Fp, FieldParams, SqrtAlgorithm};
use algebra_limbs::Limbs;
use algebra_tower::{Fp2, Fp2Params};

const fn w(v: u64) -> SecretWord64 {
    SecretWord64::new(v)
}

/// BLS12-381's base field `Fp`, a 381-bit prime stored in 6 64-bit limbs
/// (3 spare bits in the top limb).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlsFp;

impl FieldParams<6> for BlsFp {
    const MODULUS: Limbs<6> = Limbs([
        w(0xb9fe_ffff_ffff_aaab),
        w(0x1eab_fffe_b153_ffff),
        w(0x6730_d2a0_f6b0_f624),
        w(0x6477_4b84_f385_12bf),
        w(0x4b1b_a7b6_434b_acd7),
        w(0x1a01_11ea_397f_e69a),
    ]);
    const M0INV: u64 = 0x89f3_fffc_fffc_fffd;
    const R_MOD_P: Limbs<6> = Limbs([
        w(0x7609_0000_0002_fffd),
        w(0xebf4_000b_c40c_0002),
        w(0x5f48_9857_53c7_58ba),
        w(0x77ce_5853_7052_5745),
        w(0x5c07_1a97_a256_ec6d),
        w(0x15f6_5ec3_fa80_e493),
    ]);
    const R2_MOD_P: Limbs<6> = Limbs([
        w(0xf4df_1f34_1c34_1746),
        w(0x0a76_e6a6_09d1_04f1),
        w(0x8de5_476c_4c95_b6d5),
        w(0x67eb_88a9_939d_83c0),
        w(0x9a79_3e85_b519_952d),
        w(0x1198_8fe5_92ca_e3aa),
    ]);
    const SPARE_BITS: u32 = 3;
    const P_MINUS_2: Limbs<6> = Limbs([
        w(0xb9fe_ffff_ffff_aaa9),
        w(0x1eab_fffe_b153_ffff),
        w(0x6730_d2a0_f6b0_f624),
        w(0x6477_4b84_f385_12bf),
        w(0x4b1b_a7b6_434b_acd7),
        w(0x1a01_11ea_397f_e69a),
    ]);
    const P_MINUS_1_OVER_2: Limbs<6> = Limbs([
        w(0xdcff_7fff_ffff_d555),
        w(0x0f55_ffff_58a9_ffff),
        w(0xb398_6950_7b58_7b12),
        w(0xb23b_a5c2_79c2_895f),
        w(0x258d_d3db_21a5_d66b),
        w(0x0d00_88f5_1cbf_f34d),
    ]);
    const SQRT_ALGORITHM: SqrtAlgorithm = SqrtAlgorithm::Shanks;
    const SQRT_EXP_SHANKS: Limbs<6> = Limbs([
        w(0xee7f_bfff_ffff_eaab),
        w(0x07aa_ffff_ac54_ffff),
        w(0xd9cc_34a8_3dac_3d89),
        w(0xd91d_d2e1_3ce1_44af),
        w(0x92c6_e9ed_90d2_eb35),
        w(0x0680_447a_8e5f_f9a6),
    ]);
}

/// BLS12-381's base prime-field element type, `Fp`.
pub type FpElement = Fp<BlsFp, 6>;

/// The quadratic non-residue `beta = -1` defining `Fp2 = Fp[u]/(u^2+1)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlsFp2Params;

const NONRESIDUE_MONT: Limbs<6> = Limbs([
    w(0x43f5_ffff_fffc_aaae),
    w(0x32b7_fff2_ed47_fffd),
    w(0x07e8_3a49_a2e9_9d69),
    w(0xeca8_f331_8332_bb7a),
    w(0xef14_8d1e_a0f4_c069),
    w(0x040a_b326_3eff_0206),
]);

impl Fp2Params<FpElement> for BlsFp2Params {
    const NONRESIDUE: FpElement = Fp::from_montgomery_unchecked(NONRESIDUE_MONT);

    /// `beta = -1`, so multiplying by the non-residue is a negation —
    /// cheaper than the default full field multiplication.
    fn mul_by_nonresidue(x: FpElement) -> FpElement {
        x.negate()
    }
}

/// The quadratic extension field `Fp2 = Fp[u]/(u^2+1)` backing G2's sextic
/// twist.
pub type Fp2Element = Fp2<FpElement, BlsFp2Params>;

const G1_B_MONT: Limbs<6> = Limbs([
    w(0xaa27_0000_000c_fff3),
    w(0x53cc_0032_fc34_000a),
    w(0x478f_e97a_6b0a_807f),
    w(0xb1d3_7ebe_e6ba_24d7),
    w(0x8ec9_733b_bf78_ab2f),
    w(0x09d6_4551_3d83_de7e),
]);
const G1_X_MONT: Limbs<6> = Limbs([
    w(0x5cb3_8790_fd53_0c16),
    w(0x7817_fc67_9976_fff5),
    w(0x154f_95c7_143b_a1c1),
    w(0xf0ae_6acd_f3d0_e747),
    w(0xedce_6ecc_21db_f440),
    w(0x1201_7741_9e0b_fb75),
]);
const G1_Y_MONT: Limbs<6> = Limbs([
    w(0xbaac_93d5_0ce7_2271),
    w(0x8c22_631a_7918_fd8e),
    w(0xdd59_5f13_5707_25ce),
    w(0x51ac_5829_5040_5194),
    w(0x0e1c_8c3f_ad00_59c0),
    w(0x0bbc_3efc_5008_a26a),
]);

/// BLS12-381's scalar field order `r`, shared by G1 and G2, zero-extended to
/// the crate-wide 512-bit [`ScalarLimbs`] width.
const BLS_R: ScalarLimbs = Limbs([
    w(0xffff_ffff_0000_0001),
    w(0x53bd_a402_fffe_5bfe),
    w(0x3339_d808_09a1_d805),
    w(0x73ed_a753_299d_7d48),
    w(0),
    w(0),
    w(0),
    w(0),
]);

/// G1's cofactor `h1 = (x - 1)^2 / 3` where `x` is BLS12-381's BLS
/// parameter.
const G1_COFACTOR: ScalarLimbs = Limbs([
    w(0x8c00_aaab_0000_aaab),
    w(0x396c_8c00_5555_e156),
    w(0),
    w(0),
    w(0),
    w(0),
    w(0),
    w(0),
]);

/// BLS12-381's G1 group, `y^2 = x^3 + 4` over `Fp`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bls12_381G1;

impl CurveParams for Bls12_381G1 {
    type Field = FpElement;
    type PointArithmetic = EquationAIsGeneric;

    const EQUATION_A: Self::Field = Fp::ZERO;
    const EQUATION_B: Self::Field = Fp::from_montgomery_unchecked(G1_B_MONT);
    const GENERATOR: (Self::Field, Self::Field) = (
        Fp::from_montgomery_unchecked(G1_X_MONT),
        Fp::from_montgomery_unchecked(G1_Y_MONT),
    );
    const ORDER: ScalarLimbs = BLS_R;
    const COFACTOR: ScalarLimbs = G1_COFACTOR;
}

/// A point on BLS12-381's G1 in projective coordinates.
pub type G1Projective = algebra_ec::ProjectivePoint<Bls12_381G1>;
/// A point on BLS12-381's G1 in affine coordinates.
pub type G1Affine = algebra_ec::AffinePoint<Bls12_381G1>;

const G2_B_C0_MONT: Limbs<6> = G1_B_MONT;
const G2_B_C1_MONT: Limbs<6> = G1_B_MONT;

const G2_X_C0_MONT: Limbs<6> = Limbs([
    w(0x3e53_a5f8_c8ff_aef8),
    w(0xb99c_06aa_f3b2_76c3),
    w(0xfb79_858e_bcad_992d),
    w(0xe9df_675f_c458_d908),
    w(0xe673_bab9_a7b7_88b7),
    w(0x055f_75de_1e08_db1d),
]);
const G2_X_C1_MONT: Limbs<6> = Limbs([
    w(0x4d1c_8a6a_79ba_fb7d),
    w(0x2a2e_d51a_b081_6bc7),
    w(0x3860_876a_6dda_17c6),
    w(0x713b_9c28_071a_239a),
    w(0xa9c1_8852_c003_bc5a),
    w(0x12c0_9cd1_14b7_fa69),
]);
const G2_Y_C0_MONT: Limbs<6> = Limbs([
    w(0xb589_3859_88a1_a4fc),
    w(0x6225_b2f8_78bc_e232),
    w(0xca23_289f_cfe6_2047),
    w(0x9daf_b522_eee3_e2b3),
    w(0x6912_38cd_99b4_ec9f),
    w(0x14fc_893c_2124_5d2c),
]);
const G2_Y_C1_MONT: Limbs<6> = Limbs([
    w(0x8b2f_4b2f_9c49_21de),
    w(0x827d_f6c6_a087_b5fb),
    w(0x5f36_6366_8b7c_af52),
    w(0xc637_447e_65d0_3e6d),
    w(0x7dab_1e1f_b387_56d0),
    w(0x0da1_940f_6819_2943),
]);

/// G2's cofactor, a ~508-bit integer (Scott et al., "Fast Hashing to G2 on
/// Pairing-Friendly Curves"), zero-extended to the crate-wide 512-bit
/// [`ScalarLimbs`] width.
const G2_COFACTOR: ScalarLimbs = Limbs([
    w(0xcf1c_38e3_1c72_38e5),
    w(0x1616_ec6e_786f_0c70),
    w(0x2153_7e29_3a66_91ae),
    w(0xa628_f1cb_4d9e_82ef),
    w(0xa68a_205b_2e5a_7ddf),
    w(0xcd91_de45_4708_5aba),
    w(0x091d_5079_2876_a202),
    w(0x05d5_43a9_5414_e7f1),
]);

/// BLS12-381's G2 group on the sextic twist `y^2 = x^3 + 4(1+u)` over `Fp2`.
///
/// The subgroup check used by this registry ([`algebra_ec::is_in_subgroup`])
/// is the generic scalar-multiply-by-order test rather than the faster
/// Frobenius-characteristic-equation shortcut the spec names (`psi(P) ==
/// [x] P` for the BLS parameter `x`); see DESIGN.md.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bls12_381G2;

impl CurveParams for Bls12_381G2 {
    type Field = Fp2Element;
    type PointArithmetic = EquationAIsGeneric;

    const EQUATION_A: Self::Field = Fp2::new(Fp::ZERO, Fp::ZERO);
    const EQUATION_B: Self::Field = Fp2::new(
        Fp::from_montgomery_unchecked(G2_B_C0_MONT),
        Fp::from_montgomery_unchecked(G2_B_C1_MONT),
    );
    const GENERATOR: (Self::Field, Self::Field) = (
        Fp2::new(
            Fp::from_montgomery_unchecked(G2_X_C0_MONT),
            Fp::from_montgomery_unchecked(G2_X_C1_MONT),
        ),
        Fp2::new(
            Fp::from_montgomery_unchecked(G2_Y_C0_MONT),
            Fp::from_montgomery_unchecked(G2_Y_C1_MONT),
        ),
    );
    const ORDER: ScalarLimbs = BLS_R;
    const COFACTOR: ScalarLimbs = G2_COFACTOR;
}

/// A point on BLS12-381's G2 in projective coordinates.
pub type G2Projective = algebra_ec::ProjectivePoint<Bls12_381G2>;
/// A point on BLS12-381's G2 in affine coordinates.
pub type G2Affine = algebra_ec::AffinePoint<Bls12_381G2>;

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_field::Field;

    #[test]
    fn g1_generator_is_on_curve() {
        let g = G1Affine::generator();
        assert!(bool::from(g.is_on_curve()));
    }

    #[test]
    fn g1_generator_has_prime_order() {
        let g = G1Projective::GENERATOR;
        let r_g = algebra_ec::scalar_mul(&g, &Bls12_381G1::ORDER);
        assert!(bool::from(r_g.is_identity()));
    }

    #[test]
    fn g2_generator_is_on_curve() {
        let g = G2Affine::generator();
        assert!(bool::from(g.is_on_curve()));
    }

    #[test]
    fn g2_generator_has_prime_order() {
        let g = G2Projective::GENERATOR;
        let r_g = algebra_ec::scalar_mul(&g, &Bls12_381G2::ORDER);
        assert!(bool::from(r_g.is_identity()));
    }

    #[test]
    fn fp2_nonresidue_mul_matches_negation() {
        let x = Fp2Element::from_base(FpElement::from_u64(12345));
        let via_override = BlsFp2Params::mul_by_nonresidue(x.c0);
        assert_eq!(via_override, x.c0.negate());
    }

    #[test]
    fn fp_inverse_roundtrips() {
        let x = FpElement::from_u64(987654321);
        let inv = x.invert().unwrap();
        assert_eq!(x.mul(inv), FpElement::ONE);
    }

    #[test]
    fn g1_uncompressed_roundtrips() {
        let g = G1Affine::generator();
        let mut bytes = [0u8; 96];
        g.to_uncompressed(&mut bytes);
        let back = G1Affine::from_uncompressed(&bytes).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn g1_compressed_roundtrips() {
        let g = G1Affine::generator();
        let mut bytes = [0u8; 49];
        g.to_compressed(&mut bytes);
        let back = G1Affine::from_compressed(&bytes).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn g2_uncompressed_roundtrips() {
        // `Fp2::BYTE_LEN` is `2 * FpElement::BYTE_LEN` == 96, so a G2
        // uncompressed point is `2 * 96` == 192 bytes.
        let g = G2Affine::generator();
        let mut bytes = [0u8; 192];
        g.to_uncompressed(&mut bytes);
        let back = G2Affine::from_uncompressed(&bytes).unwrap();
        assert_eq!(back, g);
    }
}
