//! Short-Weierstrass elliptic curve group arithmetic.
//!
//! A curve `y^2 = x^3 + a*x + b` over a coefficient field `C::Field` (either
//! `Fp` directly for a G1 group, or the `algebra-tower` quadratic extension
//! `Fp2` for a G2 group on a sextic twist — the point types here never care
//! which, since both implement `algebra_field::Field`). Three coordinate
//! systems are provided as distinct parametric types rather than a runtime
//! tag, per the workspace's "variant point coordinates" design note:
//! [`AffinePoint`], [`ProjectivePoint`] (homogeneous), [`JacobianPoint`].
//!
//! Scalars (secret exponents, the group order, and cofactors alike) are
//! represented uniformly as 512-bit [`ScalarLimbs`] regardless of a given
//! curve's actual bit length, so every curve in the registry shares one
//! scalar-multiplication code path; see [`scalar_mul`] for the tradeoff this
//! buys (one generic ladder) against what it costs (a few wasted leading-zero
//! doublings for sub-512-bit orders).

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod affine;
mod glv;
mod jacobian;
mod params;
mod point_arithmetic;
mod projective;
mod scalar_mul;
mod subgroup;

pub use affine::AffinePoint;
pub use glv::{decompose, scalar_mul_glv};
pub use jacobian::JacobianPoint;
pub use params::{CurveParams, GlvBasis, GlvParams, ScalarLimbs, SignedScalar, SCALAR_LIMBS};
pub use point_arithmetic::{EquationAIsGeneric, EquationAIsMinusThree, PointArithmetic};
pub use projective::ProjectivePoint;
pub use scalar_mul::scalar_mul;
pub use subgroup::{clear_cofactor, is_in_subgroup};
