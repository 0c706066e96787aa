//! Addition/doubling formulas specialized to the curve equation's `a`
//! coefficient, adapted from Renes, Costello & Batina, "Complete addition
//! formulas for prime order elliptic curves" (<https://eprint.iacr.org/2015/1060>).
//!
//! Both variants are *complete*: they return the correct result for every
//! input pair — including `P + P`, `P + (-P)`, and either operand equal to
//! the point at infinity — without a single secret-dependent branch.

use algebra_field::Field;
use subtle::ConditionallySelectable;

use crate::affine::AffinePoint;
use crate::params::CurveParams;
use crate::projective::ProjectivePoint;

/// Point arithmetic for a given curve's `a` coefficient.
pub trait PointArithmetic<C: CurveParams> {
    /// `lhs + rhs`.
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C>;
    /// `lhs + rhs`, `rhs` in affine coordinates.
    fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C>;
    /// `2 * point`.
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C>;
}

fn proj<C: CurveParams>(x: C::Field, y: C::Field, z: C::Field) -> ProjectivePoint<C> {
    ProjectivePoint::from_raw(x, y, z)
}

/// No special structure assumed for `a`: Renes-Costello-Batina Algorithms 1-3.
/// Valid for every short-Weierstrass curve, including `a = 0` curves
/// (secp256k1, BLS12-381) — the general formula covers that case, so this
/// build does not derive a separate `a = 0`-specialized formula set.
pub struct EquationAIsGeneric;

impl<C: CurveParams> PointArithmetic<C> for EquationAIsGeneric {
    /// Algorithm 1.
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let (x1, y1, z1) = lhs.coords();
        let (x2, y2, z2) = rhs.coords();
        let b3 = C::Field::from_u64(3).mul(C::EQUATION_B);

        let t0 = x1.mul(x2);
        let t1 = y1.mul(y2);
        let t2 = z1.mul(z2);
        let t3 = x1.add(y1);
        let t4 = x2.add(y2);
        let t3 = t3.mul(t4);
        let t4 = t0.add(t1);
        let t3 = t3.sub(t4);
        let t4 = x1.add(z1);
        let t5 = x2.add(z2);
        let t4 = t4.mul(t5);
        let t5 = t0.add(t2);
        let t4 = t4.sub(t5);
        let t5 = y1.add(z1);
        let x3 = y2.add(z2);
        let t5 = t5.mul(x3);
        let x3 = t1.add(t2);
        let t5 = t5.sub(x3);
        let z3 = C::EQUATION_A.mul(t4);
        let x3 = b3.mul(t2);
        let z3 = x3.add(z3);
        let x3 = t1.sub(z3);
        let z3 = t1.add(z3);
        let y3 = x3.mul(z3);
        let t1 = t0.add(t0);
        let t1 = t1.add(t0);
        let t2 = C::EQUATION_A.mul(t2);
        let t4 = b3.mul(t4);
        let t1 = t1.add(t2);
        let t2 = t0.sub(t2);
        let t2 = C::EQUATION_A.mul(t2);
        let t4 = t4.add(t2);
        let t0 = t1.mul(t4);
        let y3 = y3.add(t0);
        let t0 = t5.mul(t4);
        let x3 = t3.mul(x3);
        let x3 = x3.sub(t0);
        let t0 = t3.mul(t1);
        let z3 = t5.mul(z3);
        let z3 = z3.add(t0);

        proj(x3, y3, z3)
    }

    /// Algorithm 2.
    fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        let (x1, y1, z1) = lhs.coords();
        let (x2, y2) = rhs.coords();
        let b3 = C::EQUATION_B.mul(C::Field::from_u64(3));

        let t0 = x1.mul(x2);
        let t1 = y1.mul(y2);
        let t3 = x2.add(y2);
        let t4 = x1.add(y1);
        let t3 = t3.mul(t4);
        let t4 = t0.add(t1);
        let t3 = t3.sub(t4);
        let t4 = x2.mul(z1);
        let t4 = t4.add(x1);
        let t5 = y2.mul(z1);
        let t5 = t5.add(y1);
        let z3 = C::EQUATION_A.mul(t4);
        let x3 = b3.mul(z1);
        let z3 = x3.add(z3);
        let x3 = t1.sub(z3);
        let z3 = t1.add(z3);
        let y3 = x3.mul(z3);
        let t1 = t0.add(t0);
        let t1 = t1.add(t0);
        let t2 = C::EQUATION_A.mul(z1);
        let t4 = b3.mul(t4);
        let t1 = t1.add(t2);
        let t2 = t0.sub(t2);
        let t2 = C::EQUATION_A.mul(t2);
        let t4 = t4.add(t2);
        let t0 = t1.mul(t4);
        let y3 = y3.add(t0);
        let t0 = t5.mul(t4);
        let x3 = t3.mul(x3);
        let x3 = x3.sub(t0);
        let t0 = t3.mul(t1);
        let z3 = t5.mul(z3);
        let z3 = z3.add(t0);

        let mut ret = proj(x3, y3, z3);
        ret.conditional_assign(lhs, rhs.is_identity());
        ret
    }

    /// Algorithm 3.
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let (x, y, z) = point.coords();
        let b3 = C::EQUATION_B.mul(C::Field::from_u64(3));

        let t0 = x.mul(x);
        let t1 = y.mul(y);
        let t2 = z.mul(z);
        let t3 = x.mul(y);
        let t3 = t3.add(t3);
        let z3 = x.mul(z);
        let z3 = z3.add(z3);
        let x3 = C::EQUATION_A.mul(z3);
        let y3 = b3.mul(t2);
        let y3 = x3.add(y3);
        let x3 = t1.sub(y3);
        let y3 = t1.add(y3);
        let y3 = x3.mul(y3);
        let x3 = t3.mul(x3);
        let z3 = b3.mul(z3);
        let t2 = C::EQUATION_A.mul(t2);
        let t3 = t0.sub(t2);
        let t3 = C::EQUATION_A.mul(t3);
        let t3 = t3.add(z3);
        let z3 = t0.add(t0);
        let t0 = z3.add(t0);
        let t0 = t0.add(t2);
        let t0 = t0.mul(t3);
        let y3 = y3.add(t0);
        let t2 = y.mul(z);
        let t2 = t2.add(t2);
        let t0 = t2.mul(t3);
        let x3 = x3.sub(t0);
        let z3 = t2.mul(t1);
        let z3 = z3.add(z3);
        let z3 = z3.add(z3);

        proj(x3, y3, z3)
    }
}

/// Specialized to `a = -3`: Renes-Costello-Batina Algorithms 4-6. Saves one
/// field multiplication per operation over [`EquationAIsGeneric`]; used for
/// P256, whose `a` is `-3` by NIST's choice of Weierstrass representative.
pub struct EquationAIsMinusThree;

impl<C: CurveParams> PointArithmetic<C> for EquationAIsMinusThree {
    /// Algorithm 4.
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let (x1, y1, z1) = lhs.coords();
        let (x2, y2, z2) = rhs.coords();

        let xx = x1.mul(x2);
        let yy = y1.mul(y2);
        let zz = z1.mul(z2);
        let xy_pairs = (x1.add(y1)).mul(x2.add(y2)).sub(xx.add(yy));
        let yz_pairs = (y1.add(z1)).mul(y2.add(z2)).sub(yy.add(zz));
        let xz_pairs = (x1.add(z1)).mul(x2.add(z2)).sub(xx.add(zz));

        let bzz_part = xz_pairs.sub(C::EQUATION_B.mul(zz));
        let bzz3_part = bzz_part.double().add(bzz_part);
        let yy_m_bzz3 = yy.sub(bzz3_part);
        let yy_p_bzz3 = yy.add(bzz3_part);

        let zz3 = zz.double().add(zz);
        let bxz_part = C::EQUATION_B.mul(xz_pairs).sub(zz3.add(xx));
        let bxz3_part = bxz_part.double().add(bxz_part);
        let xx3_m_zz3 = xx.double().add(xx).sub(zz3);

        proj(
            yy_p_bzz3.mul(xy_pairs).sub(yz_pairs.mul(bxz3_part)),
            yy_p_bzz3.mul(yy_m_bzz3).add(xx3_m_zz3.mul(bxz3_part)),
            yy_m_bzz3.mul(yz_pairs).add(xy_pairs.mul(xx3_m_zz3)),
        )
    }

    /// Algorithm 5.
    fn add_mixed(lhs: &ProjectivePoint<C>, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        let (x1, y1, z1) = lhs.coords();
        let (x2, y2) = rhs.coords();

        let xx = x1.mul(x2);
        let yy = y1.mul(y2);
        let xy_pairs = (x1.add(y1)).mul(x2.add(y2)).sub(xx.add(yy));
        let yz_pairs = y2.mul(z1).add(y1);
        let xz_pairs = x2.mul(z1).add(x1);

        let bz_part = xz_pairs.sub(C::EQUATION_B.mul(z1));
        let bz3_part = bz_part.double().add(bz_part);
        let yy_m_bzz3 = yy.sub(bz3_part);
        let yy_p_bzz3 = yy.add(bz3_part);

        let z3 = z1.double().add(z1);
        let bxz_part = C::EQUATION_B.mul(xz_pairs).sub(z3.add(xx));
        let bxz3_part = bxz_part.double().add(bxz_part);
        let xx3_m_zz3 = xx.double().add(xx).sub(z3);

        let mut ret = proj(
            yy_p_bzz3.mul(xy_pairs).sub(yz_pairs.mul(bxz3_part)),
            yy_p_bzz3.mul(yy_m_bzz3).add(xx3_m_zz3.mul(bxz3_part)),
            yy_m_bzz3.mul(yz_pairs).add(xy_pairs.mul(xx3_m_zz3)),
        );
        ret.conditional_assign(lhs, rhs.is_identity());
        ret
    }

    /// Algorithm 6.
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let (x, y, z) = point.coords();

        let xx = x.square();
        let yy = y.square();
        let zz = z.square();
        let xy2 = x.mul(y).double();
        let xz2 = x.mul(z).double();

        let bzz_part = C::EQUATION_B.mul(zz).sub(xz2);
        let bzz3_part = bzz_part.double().add(bzz_part);
        let yy_m_bzz3 = yy.sub(bzz3_part);
        let yy_p_bzz3 = yy.add(bzz3_part);
        let y_frag = yy_p_bzz3.mul(yy_m_bzz3);
        let x_frag = yy_m_bzz3.mul(xy2);

        let zz3 = zz.double().add(zz);
        let bxz2_part = C::EQUATION_B.mul(xz2).sub(zz3.add(xx));
        let bxz6_part = bxz2_part.double().add(bxz2_part);
        let xx3_m_zz3 = xx.double().add(xx).sub(zz3);

        let yr = y_frag.add(xx3_m_zz3.mul(bxz6_part));
        let yz2 = y.mul(z).double();
        let xr = x_frag.sub(bxz6_part.mul(yz2));
        let zr = yz2.mul(yy).double().double();

        proj(xr, yr, zr)
    }
}
