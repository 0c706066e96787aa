//! Points in affine coordinates `(x, y)`.

use algebra_field::{Field, FieldSqrt};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::params::CurveParams;
use crate::projective::ProjectivePoint;

/// A point on `C` in affine coordinates.
///
/// `infinity` is a proxy for "this is the point at infinity"; unlike
/// [`ProjectivePoint`], affine coordinates have no representation-level
/// encoding of the identity (division by the zero `z` that would produce
/// it is undefined), so it is carried as an explicit flag instead, exactly
/// as `primeorder::AffinePoint` does.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParams> {
    /// x-coordinate.
    pub(crate) x: C::Field,
    /// y-coordinate.
    pub(crate) y: C::Field,
    /// Whether this is the point at infinity.
    pub(crate) infinity: Choice,
}

impl<C: CurveParams> AffinePoint<C> {
    /// The point at infinity.
    pub fn identity() -> Self {
        Self {
            x: C::Field::ZERO,
            y: C::Field::ZERO,
            infinity: Choice::from(1),
        }
    }

    /// Builds a non-identity affine point from its coordinates, without
    /// checking that it lies on the curve. Use [`Self::new`] for untrusted
    /// input.
    pub fn new_unchecked(x: C::Field, y: C::Field) -> Self {
        Self {
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    /// Builds an affine point, rejecting coordinates that do not satisfy the
    /// curve equation (the `NotOnCurve` error condition).
    pub fn new(x: C::Field, y: C::Field) -> subtle::CtOption<Self> {
        let candidate = Self::new_unchecked(x, y);
        subtle::CtOption::new(candidate, candidate.is_on_curve())
    }

    /// The curve's distinguished generator.
    pub fn generator() -> Self {
        Self::new_unchecked(C::GENERATOR.0, C::GENERATOR.1)
    }

    /// `self == O`.
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// The raw `(x, y)` coordinates.
    pub(crate) fn coords(&self) -> (C::Field, C::Field) {
        (self.x, self.y)
    }

    /// `y^2 == x^3 + a*x + b`, true unconditionally for the identity.
    pub fn is_on_curve(&self) -> Choice {
        let rhs = self
            .x
            .square()
            .mul(self.x)
            .add(C::EQUATION_A.mul(self.x))
            .add(C::EQUATION_B);
        (self.y.square().ct_eq(&rhs)) | self.infinity
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.neg(),
            infinity: self.infinity,
        }
    }

    /// Lifts `self` into projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from(*self)
    }

    /// Uncompressed byte encoding: big-endian `x || y`, each
    /// `C::Field::BYTE_LEN` bytes wide (`6.`, "EC point serialization").
    /// The point at infinity encodes as an all-zero buffer — this workspace's
    /// curve-coordinate-agnostic stand-in for the single-flag-byte
    /// conventions individual standards use (SEC1's leading `0x00`, IETF
    /// BLS's infinity bit), since a generic `Field` has no spare high bit to
    /// borrow one from. `out.len()` MUST equal `2 * C::Field::BYTE_LEN`.
    pub fn to_uncompressed(&self, out: &mut [u8]) {
        let flen = C::Field::BYTE_LEN;
        debug_assert_eq!(out.len(), 2 * flen);
        self.x.to_bytes_be(&mut out[..flen]);
        self.y.to_bytes_be(&mut out[flen..]);
        for byte in out.iter_mut() {
            *byte = u8::conditional_select(byte, &0, self.infinity);
        }
    }

    /// Decodes an uncompressed encoding, rejecting coordinates that fail
    /// the curve equation (`NotOnCurve`) or are individually out of range
    /// for the field (`OutOfRange`, surfaced by [`Field::from_bytes_be`]).
    /// An all-zero buffer decodes to the point at infinity.
    /// `bytes.len()` MUST equal `2 * C::Field::BYTE_LEN`.
    pub fn from_uncompressed(bytes: &[u8]) -> CtOption<Self> {
        let flen = C::Field::BYTE_LEN;
        debug_assert_eq!(bytes.len(), 2 * flen);
        C::Field::from_bytes_be(&bytes[..flen]).and_then(|x| {
            C::Field::from_bytes_be(&bytes[flen..]).and_then(|y| {
                let is_identity_encoding = x.is_zero() & y.is_zero();
                let candidate = Self::new_unchecked(x, y);
                let result =
                    Self::conditional_select(&Self::identity(), &candidate, !is_identity_encoding);
                let valid = candidate.is_on_curve() | is_identity_encoding;
                CtOption::new(result, valid)
            })
        })
    }

    /// Compressed byte encoding: a one-byte tag followed by `x`, big-endian,
    /// `C::Field::BYTE_LEN` bytes wide. The tag is `0x00` for the point at
    /// infinity, otherwise `0x02` or `0x03` with the low bit carrying
    /// [`Field::sign`] of `y` — the generic form of the SEC1/IETF-BLS
    /// "x plus a sign bit" convention the spec calls for.
    /// `out.len()` MUST equal `1 + C::Field::BYTE_LEN`.
    pub fn to_compressed(&self, out: &mut [u8]) {
        let flen = C::Field::BYTE_LEN;
        debug_assert_eq!(out.len(), 1 + flen);
        self.x.to_bytes_be(&mut out[1..]);
        let tag = u8::conditional_select(&0x02u8, &0x03u8, self.y.sign());
        out[0] = u8::conditional_select(&tag, &0x00u8, self.infinity);
        for byte in out[1..].iter_mut() {
            *byte = u8::conditional_select(byte, &0, self.infinity);
        }
    }
}

impl<C: CurveParams> AffinePoint<C>
where
    C::Field: FieldSqrt,
{
    /// Decodes a compressed encoding, recomputing `y` from the curve
    /// equation via [`FieldSqrt::sqrt`] and selecting whichever root's
    /// [`Field::sign`] matches the tag byte (`NotASquare` if `x` is not on
    /// the curve at all; only available for a coefficient field that
    /// implements [`FieldSqrt`] — see that trait's docs for which fields
    /// qualify). `bytes.len()` MUST equal `1 + C::Field::BYTE_LEN`.
    pub fn from_compressed(bytes: &[u8]) -> CtOption<Self> {
        let flen = C::Field::BYTE_LEN;
        debug_assert_eq!(bytes.len(), 1 + flen);
        let tag = bytes[0];
        let is_infinity = Choice::from((tag == 0x00) as u8);
        let wants_odd = Choice::from((tag & 1) as u8);

        let finite = C::Field::from_bytes_be(&bytes[1..]).and_then(|x| {
            let rhs = x.square().mul(x).add(C::EQUATION_A.mul(x)).add(C::EQUATION_B);
            rhs.sqrt().map(|root| {
                let neg_root = root.neg();
                let wrong_sign = root.sign() ^ wants_odd;
                let y = C::Field::conditional_select(&root, &neg_root, wrong_sign);
                Self::new_unchecked(x, y)
            })
        });

        let finite_valid = finite.is_some();
        let finite_point = finite.unwrap_or_else(Self::identity);
        let result = Self::conditional_select(&Self::identity(), &finite_point, !is_infinity);
        CtOption::new(result, is_infinity | finite_valid)
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Field::conditional_select(&a.x, &b.x, choice),
            y: C::Field::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: CurveParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & !(self.infinity ^ other.infinity))
            | (self.infinity & other.infinity)
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

#[cfg(feature = "zeroize")]
impl<C: CurveParams> zeroize::DefaultIsZeroes for AffinePoint<C> {}
