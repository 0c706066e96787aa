//! Points in homogeneous projective coordinates `(x, y, z)`, representing
//! the affine point `(x/z, y/z)` when `z != 0`, and the point at infinity
//! when `z == 0`.

use algebra_field::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::affine::AffinePoint;
use crate::params::CurveParams;
use crate::point_arithmetic::PointArithmetic;

/// A point on `C` in homogeneous projective coordinates.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::Field,
    pub(crate) y: C::Field,
    pub(crate) z: C::Field,
}

impl<C: CurveParams> ProjectivePoint<C> {
    /// The point at infinity: `(0, 1, 0)`.
    pub const IDENTITY: Self = Self {
        x: <C::Field as Field>::ZERO,
        y: <C::Field as Field>::ONE,
        z: <C::Field as Field>::ZERO,
    };

    /// The curve's distinguished generator, lifted to projective form.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: <C::Field as Field>::ONE,
    };

    /// Builds a projective point directly from its three coordinates,
    /// without any on-curve check. Used by [`crate::point_arithmetic`] to
    /// assemble the result of a formula.
    pub(crate) fn from_raw(x: C::Field, y: C::Field, z: C::Field) -> Self {
        Self { x, y, z }
    }

    /// The raw `(x, y, z)` coordinates.
    pub(crate) fn coords(&self) -> (C::Field, C::Field, C::Field) {
        (self.x, self.y, self.z)
    }

    /// `self == O`.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        C::PointArithmetic::add(self, other)
    }

    /// `self + other`, `other` given in affine coordinates — saves the
    /// multiplications the homogeneous `z`-coordinate of an affine point
    /// (always 1) would otherwise cost.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        C::PointArithmetic::add_mixed(self, other)
    }

    /// `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `2 * self`.
    pub fn double(&self) -> Self {
        C::PointArithmetic::double(self)
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

    /// Converts to affine coordinates, returning the affine identity if
    /// `self` is the point at infinity.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x.mul(zinv),
                y: self.y.mul(zinv),
                infinity: Choice::from(0),
            })
            .unwrap_or_else(AffinePoint::identity)
    }

    /// Verifies the curve equation `y^2 * z = x^3 + a*x*z^2 + b*z^3` (the
    /// homogeneous form, so this also accepts the point at infinity: both
    /// sides reduce to `0` when `z = 0`).
    pub fn is_on_curve(&self) -> Choice {
        let x2 = self.x.square();
        let x3 = x2.mul(self.x);
        let z2 = self.z.square();
        let z3 = z2.mul(self.z);
        let lhs = self.y.square().mul(self.z);
        let rhs = x3
            .add(C::EQUATION_A.mul(self.x).mul(z2))
            .add(C::EQUATION_B.mul(z3));
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// Converts a batch of projective points to affine coordinates using one
    /// shared field inversion (Montgomery's simultaneous-inversion trick)
    /// plus `~3 * points.len()` multiplications, instead of one inversion
    /// per point.
    pub fn batch_normalize(points: &[Self], out: &mut [AffinePoint<C>]) {
        assert_eq!(points.len(), out.len());
        if points.is_empty() {
            return;
        }

        // Running prefix products of the z-coordinates, substituting `1`
        // for any zero (identity) z so the shared inversion below never
        // sees a zero input; those slots are patched back to the affine
        // identity afterwards.
        let mut zs: [C::Field; 1024] = [C::Field::ONE; 1024];
        assert!(points.len() <= zs.len(), "batch_normalize: batch too large");
        for (i, p) in points.iter().enumerate() {
            zs[i] = C::Field::conditional_select(&p.z, &C::Field::ONE, p.z.is_zero());
        }

        let mut prefix: [C::Field; 1024] = [C::Field::ONE; 1024];
        let mut acc = C::Field::ONE;
        for i in 0..points.len() {
            prefix[i] = acc;
            acc = acc.mul(zs[i]);
        }
        let mut inv = acc.invert().unwrap_or(C::Field::ONE);
        for i in (0..points.len()).rev() {
            let zinv = inv.mul(prefix[i]);
            inv = inv.mul(zs[i]);
            let affine = AffinePoint {
                x: points[i].x.mul(zinv),
                y: points[i].y.mul(zinv),
                infinity: Choice::from(0),
            };
            out[i] = AffinePoint::conditional_select(&affine, &AffinePoint::identity(), points[i].is_identity());
        }
    }
}

impl<C: CurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: CurveParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Field::conditional_select(&a.x, &b.x, choice),
            y: C::Field::conditional_select(&a.y, &b.y, choice),
            z: C::Field::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: CurveParams> ConstantTimeEq for ProjectivePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (x1*z2 == x2*z1) and (y1*z2 == y2*z1), the cross-multiplied
        // affine-equality test that works for z = 0 (the identity) too.
        let x1z2 = self.x.mul(other.z);
        let x2z1 = other.x.mul(self.z);
        let y1z2 = self.y.mul(other.z);
        let y2z1 = other.y.mul(self.z);
        (x1z2.ct_eq(&x2z1) & y1z2.ct_eq(&y2z1)) | (self.is_identity() & other.is_identity())
    }
}

impl<C: CurveParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: CurveParams> Eq for ProjectivePoint<C> {}

impl<C: CurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        let lifted = Self {
            x: p.x,
            y: p.y,
            z: C::Field::ONE,
        };
        Self::conditional_select(&lifted, &Self::IDENTITY, p.infinity)
    }
}

#[cfg(feature = "zeroize")]
impl<C: CurveParams> zeroize::DefaultIsZeroes for ProjectivePoint<C> {}
