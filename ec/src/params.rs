use algebra_field::Field;
use algebra_limbs::Limbs;

use crate::point_arithmetic::PointArithmetic;

/// Width, in 64-bit limbs, used to represent every scalar (secret exponents,
/// group orders, and cofactors alike) in this crate: 512 bits, comfortably
/// covering the largest value any curve in the registry needs (BLS12-381's
/// ~507-bit G2 cofactor) with room to spare. A curve whose order or cofactor
/// is narrower than this (e.g. secp256k1's 256-bit order) simply stores it
/// zero-padded in the high limbs; the one shared scalar-multiplication ladder
/// in [`crate::scalar_mul`] then runs the same number of steps for every
/// curve, trading a few wasted leading-zero doublings on the narrower curves
/// for a single generic implementation.
pub const SCALAR_LIMBS: usize = 8;

/// A 512-bit scalar: a secret exponent, a group order, or a cofactor.
pub type ScalarLimbs = Limbs<SCALAR_LIMBS>;

/// Compile-time parameters of a short-Weierstrass curve `y^2 = x^3 + a*x + b`.
///
/// A zero-sized marker type, one per curve group (`Secp256k1`, `P256`,
/// `Bls12_381::G1`, `Bls12_381::G2`, ...), following the same
/// `const`-table convention as [`algebra_field::FieldParams`] and
/// [`algebra_tower::Fp2Params`] — every value below is author-supplied, never
/// derived at runtime.
pub trait CurveParams: Copy + Eq + core::fmt::Debug + Sized {
    /// The coefficient field: `Fp` for a G1 group, `Fp2` for a G2 group on a
    /// sextic twist.
    type Field: Field;

    /// [Point arithmetic](crate::point_arithmetic) implementation selected
    /// for this curve's `a` coefficient.
    type PointArithmetic: PointArithmetic<Self>;

    /// Coefficient `a`.
    const EQUATION_A: Self::Field;
    /// Coefficient `b`.
    const EQUATION_B: Self::Field;
    /// The generator's affine coordinates `(x, y)`.
    const GENERATOR: (Self::Field, Self::Field);
    /// The prime order `r` of the subgroup this type's generator generates.
    const ORDER: ScalarLimbs;
    /// The cofactor `h` such that `h * r` is the full curve order.
    const COFACTOR: ScalarLimbs;
}

/// One signed component of a GLV lattice basis vector. The magnitude is a
/// public curve constant (never a secret value), so the sign is an
/// ordinary `bool` rather than a [`algebra_ct::SecretBool`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignedScalar {
    /// `true` if this component is negative.
    pub negative: bool,
    /// The absolute value.
    pub magnitude: ScalarLimbs,
}

impl SignedScalar {
    /// A non-negative signed scalar.
    pub const fn positive(magnitude: ScalarLimbs) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// A negative signed scalar.
    pub const fn negative(magnitude: ScalarLimbs) -> Self {
        Self {
            negative: true,
            magnitude,
        }
    }
}

/// The two short basis vectors `(a1, b1)`, `(a2, b2)` of the rank-2 lattice
/// `{(x, y) : x + y*lambda == 0 mod r}`, found by lattice reduction
/// (Gallant-Lambert-Vanstone 2001, section 4) and supplied as a curve
/// constant rather than computed at runtime. The basis determinant
/// `a1*b2 - a2*b1` must equal `+/- r` exactly — a precondition on the
/// constants an implementer is responsible for checking once, offline,
/// when choosing the basis (see [`crate::glv::decompose`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlvBasis {
    /// `a1`.
    pub a1: SignedScalar,
    /// `b1`.
    pub b1: SignedScalar,
    /// `a2`.
    pub a2: SignedScalar,
    /// `b2`.
    pub b2: SignedScalar,
}

/// GLV/GLS endomorphism acceleration parameters for a curve whose point
/// group carries an efficiently computable endomorphism `psi` with
/// `psi(P) = [lambda] P` for a scalar `lambda` of order `r`.
///
/// Implemented only by curves in scope for the endomorphism-accelerated
/// scalar-multiplication path (`m = 2`, two-dimensional decomposition); see
/// DESIGN.md for which curves in the registry opt in.
pub trait GlvParams: CurveParams {
    /// `psi`: the efficiently computable endomorphism (e.g. `(x, y) -> (beta
    /// * x, y)` for a curve with `a = 0`, where `beta` is a cube root of
    /// unity in the base field).
    fn endomorphism(p: &crate::ProjectivePoint<Self>) -> crate::ProjectivePoint<Self>;

    /// Babai-rounding lattice basis used to decompose a scalar `k` into
    /// `(k1, k2)` with `k = k1 + k2*lambda mod r` and `k1, k2` each about
    /// half the bit length of `r`, per Gallant-Lambert-Vanstone (2001)
    /// section 4.
    const GLV_BASIS: GlvBasis;
}
