//! Points in Jacobian coordinates `(x, y, z)`, representing the affine
//! point `(x/z^2, y/z^3)` when `z != 0`, and the point at infinity when
//! `z == 0` (conventionally represented here as `(1, 1, 0)`).
//!
//! Unlike [`crate::ProjectivePoint`]'s Renes-Costello-Batina formulas,
//! Jacobian doubling is already exception-free on its own (the standard
//! "dbl-2007-bl"-family formula below returns the identity for both an
//! identity input and a 2-torsion point without any masking). Jacobian
//! *addition* has no such unified formula: the textbook add formula divides
//! `0/0` whenever the two inputs share an x-coordinate (`P == Q`, needing
//! the doubling formula instead, or `P == -Q`, needing the identity). This
//! build handles that the way the spec's "variant point coordinates" design
//! note licenses — masked dispatch between the precomputed generic-add,
//! double, and identity branches — rather than deriving a novel unified
//! Jacobian formula.

use algebra_field::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::affine::AffinePoint;
use crate::params::CurveParams;
use crate::projective::ProjectivePoint;

/// A point on `C` in Jacobian coordinates.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<C: CurveParams> {
    x: C::Field,
    y: C::Field,
    z: C::Field,
}

impl<C: CurveParams> JacobianPoint<C> {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: <C::Field as Field>::ONE,
        y: <C::Field as Field>::ONE,
        z: <C::Field as Field>::ZERO,
    };

    /// The curve's distinguished generator, lifted to Jacobian form.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: <C::Field as Field>::ONE,
    };

    /// `self == O`.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Overwrites `self` with `other` iff `choice` is true, in constant time.
    pub fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.x = C::Field::conditional_select(&self.x, &other.x, choice);
        self.y = C::Field::conditional_select(&self.y, &other.y, choice);
        self.z = C::Field::conditional_select(&self.z, &other.z, choice);
    }

    /// `2 * self`. Exception-free on its own: both an identity input and a
    /// 2-torsion point (`y == 0`) make `z` of the result collapse to `0`
    /// without any masking.
    pub fn double(&self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let xx = x1.square();
        let yy = y1.square();
        let yyyy = yy.square();
        let zz = z1.square();
        let s = (x1.add(yy)).square().sub(xx).sub(yyyy).double();
        let m = xx.double().add(xx).add(C::EQUATION_A.mul(zz.square()));
        let t = m.square().sub(s.double());
        let x3 = t;
        let y3 = m.mul(s.sub(t)).sub(yyyy.double().double().double());
        let z3 = (y1.add(z1)).square().sub(yy).sub(zz);
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// `self + other`, via masked dispatch among the generic add formula,
    /// the doubling formula, and the identity — see the module docs.
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);

        let z1z1 = z1.square();
        let z2z2 = z2.square();
        let u1 = x1.mul(z2z2);
        let u2 = x2.mul(z1z1);
        let s1 = y1.mul(z2).mul(z2z2);
        let s2 = y2.mul(z1).mul(z1z1);

        let h = u2.sub(u1);
        let i = h.double().square();
        let j = h.mul(i);
        let r = s2.sub(s1).double();
        let v = u1.mul(i);
        let x3 = r.square().sub(j).sub(v.double());
        let y3 = r.mul(v.sub(x3)).sub(s1.mul(j).double());
        let z3 = (z1.add(z2)).square().sub(z1z1).sub(z2z2).mul(h);
        let generic = Self {
            x: x3,
            y: y3,
            z: z3,
        };

        let same_x = u1.ct_eq(&u2);
        let same_y = s1.ct_eq(&s2);
        let doubled = self.double();

        let mut result = Self::conditional_select(
            &generic,
            &Self::IDENTITY,
            same_x & !same_y,
        );
        result = Self::conditional_select(&result, &doubled, same_x & same_y);
        result = Self::conditional_select(&result, self, other.is_identity());
        result = Self::conditional_select(&result, other, self.is_identity());
        result
    }

    /// `self + other`, `other` in affine coordinates (`z2 = 1`
    /// specialization of [`Self::add`], same masked dispatch).
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let other_jac = Self::conditional_select(
            &Self {
                x: other.coords().0,
                y: other.coords().1,
                z: C::Field::ONE,
            },
            &Self::IDENTITY,
            other.is_identity(),
        );
        self.add(&other_jac)
    }

    /// `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Converts to affine coordinates, returning the affine identity if
    /// `self` is the point at infinity.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| {
                let zinv2 = zinv.square();
                let zinv3 = zinv2.mul(zinv);
                AffinePoint::new_unchecked(self.x.mul(zinv2), self.y.mul(zinv3))
            })
            .unwrap_or_else(AffinePoint::identity)
    }

    /// Lifts a projective (homogeneous) point into Jacobian coordinates:
    /// `(X, Y, Z) -> (X*Z, Y*Z^2, Z)`.
    pub fn from_projective(p: &ProjectivePoint<C>) -> Self {
        let (x, y, z) = p.coords();
        Self {
            x: x.mul(z),
            y: y.mul(z.square()),
            z,
        }
    }
}

impl<C: CurveParams> Default for JacobianPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParams> ConditionallySelectable for JacobianPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Field::conditional_select(&a.x, &b.x, choice),
            y: C::Field::conditional_select(&a.y, &b.y, choice),
            z: C::Field::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: CurveParams> ConstantTimeEq for JacobianPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(z2z2);
        let u2 = other.x.mul(z1z1);
        let s1 = self.y.mul(other.z).mul(z2z2);
        let s2 = other.y.mul(self.z).mul(z1z1);
        (u1.ct_eq(&u2) & s1.ct_eq(&s2)) | (self.is_identity() & other.is_identity())
    }
}

impl<C: CurveParams> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: CurveParams> Eq for JacobianPoint<C> {}

impl<C: CurveParams> From<ProjectivePoint<C>> for JacobianPoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        Self::from_projective(&p)
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for JacobianPoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        let lifted = Self {
            x: p.coords().0,
            y: p.coords().1,
            z: C::Field::ONE,
        };
        Self::conditional_select(&lifted, &Self::IDENTITY, p.is_identity())
    }
}

#[cfg(feature = "zeroize")]
impl<C: CurveParams> zeroize::DefaultIsZeroes for JacobianPoint<C> {}
