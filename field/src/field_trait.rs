//! The `Field` capability trait: the minimal operation set the elliptic
//! curve layer needs from whatever coefficient field it is instantiated
//! over — `Fp` directly for G1, or a tower extension (`Fp2`) for G2 on a
//! sextic twist. EC/tower code is written once against this trait rather
//! than once per concrete field, per the "polymorphism over fields" design
//! note.

use algebra_ct::ByteOrder;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// A field usable as the coefficient field of an elliptic curve point.
///
/// Implemented directly by [`crate::Fp`] and, recursively, by tower
/// extensions built on top of it (`Fp2`, in the `algebra-tower` crate).
pub trait Field:
    Copy + Default + Eq + ConstantTimeEq + ConditionallySelectable + core::ops::Neg<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// `self + other`.
    fn add(self, other: Self) -> Self;
    /// `self - other`.
    fn sub(self, other: Self) -> Self;
    /// `-self`.
    fn neg(self) -> Self;
    /// `self * other`.
    fn mul(self, other: Self) -> Self;
    /// `self * self`, via a dedicated squaring routine where one exists.
    fn square(self) -> Self;
    /// `self + self`.
    fn double(self) -> Self {
        self.add(self)
    }
    /// Multiplicative inverse, or an empty `CtOption` if `self == 0`.
    fn invert(self) -> CtOption<Self>;
    /// `self == 0`.
    fn is_zero(&self) -> subtle::Choice;
    /// Builds a field element from a small public integer (used for curve
    /// coefficients and formula constants such as `3 * b`).
    fn from_u64(v: u64) -> Self;

    /// Canonical big-endian encoding length in bytes, used by the point
    /// serialization routines in `algebra-ec` (`⌈pBits/8⌉` for `Fp`, summed
    /// over coefficients for a tower extension).
    const BYTE_LEN: usize;

    /// Encodes the canonical representative as big-endian bytes.
    /// `out.len()` MUST equal [`Self::BYTE_LEN`].
    fn to_bytes_be(&self, out: &mut [u8]);

    /// Decodes a big-endian encoding, rejecting any coefficient `>= p`
    /// (the `OutOfRange` error condition). `bytes.len()` MUST equal
    /// [`Self::BYTE_LEN`].
    fn from_bytes_be(bytes: &[u8]) -> CtOption<Self>;

    /// The canonical sign bit used by compressed point encodings.
    ///
    /// For `Fp` this is simply "is the canonical representative odd".
    /// For a tower extension this is the `sgn0` rule of RFC 9380 section
    /// 4.1 generalized to an arbitrary coefficient count: the sign of the
    /// first nonzero coefficient, coefficients tested from least to most
    /// significant (`c0` before `c1` for `Fp2`).
    fn sign(&self) -> Choice;
}

impl<P: crate::FieldParams<N>, const N: usize> Field for crate::Fp<P, N> {
    const ZERO: Self = <crate::Fp<P, N>>::ZERO;
    const ONE: Self = <crate::Fp<P, N>>::ONE;

    fn add(self, other: Self) -> Self {
        crate::Fp::add(self, other)
    }
    fn sub(self, other: Self) -> Self {
        crate::Fp::sub(self, other)
    }
    fn neg(self) -> Self {
        self.negate()
    }
    fn mul(self, other: Self) -> Self {
        crate::Fp::mul(self, other)
    }
    fn square(self) -> Self {
        crate::Fp::square(self)
    }
    fn invert(self) -> CtOption<Self> {
        crate::Fp::invert(self)
    }
    fn is_zero(&self) -> subtle::Choice {
        crate::Fp::is_zero(self)
    }
    fn from_u64(v: u64) -> Self {
        crate::Fp::from_u64(v)
    }
    const BYTE_LEN: usize = N * 8;
    fn to_bytes_be(&self, out: &mut [u8]) {
        crate::Fp::to_bytes(*self, ByteOrder::BigEndian, out)
    }
    fn from_bytes_be(bytes: &[u8]) -> CtOption<Self> {
        crate::Fp::from_bytes(bytes, ByteOrder::BigEndian)
    }
    fn sign(&self) -> Choice {
        crate::Fp::is_odd(self)
    }
}

/// A [`Field`] that additionally supports modular square roots.
///
/// Split out of [`Field`] rather than folded into it because it is only
/// implemented by [`crate::Fp`] in this workspace: the tower extensions in
/// `algebra-tower` (`Fp2`/`Fp6`/`Fp12`) have no square-root algorithm wired
/// up (see that crate's module docs), so compressed point decoding — the
/// one consumer of this trait, in `algebra-ec` — is only available for
/// curves whose coefficient field is `Fp` directly (G1 groups), not for
/// curves on a tower-field twist (G2 groups).
pub trait FieldSqrt: Field {
    /// Square root, or an empty `CtOption` if `self` is not a quadratic
    /// residue (the `NotASquare` error condition).
    fn sqrt(self) -> CtOption<Self>;
}

impl<P: crate::FieldParams<N>, const N: usize> FieldSqrt for crate::Fp<P, N> {
    fn sqrt(self) -> CtOption<Self> {
        crate::Fp::sqrt(self)
    }
}
