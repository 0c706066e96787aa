use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use algebra_field::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Per-curve constants needed to instantiate `Fp6 = F2[v] / (v^3 - xi)`.
///
/// `F2` is the quadratic extension one level down the tower (`Fp2` for every
/// curve family this workspace cares about). Mirrors
/// [`crate::fp2::Fp2Params`]'s const-table convention one level up.
pub trait Fp6Params<F2: Field>: Copy + Eq + core::fmt::Debug {
    /// The cubic non-residue `xi` such that `v^3 = xi` is irreducible over `F2`.
    const NONRESIDUE: F2;

    /// Multiplies `x` by [`Self::NONRESIDUE`]. Default: a full multiplication;
    /// curves whose `xi` has a cheap shape (e.g. `xi = 1 + u` on BLS12-381)
    /// should override this with the addition-only version.
    fn mul_by_nonresidue(x: F2) -> F2 {
        x.mul(Self::NONRESIDUE)
    }

    /// Frobenius coefficients for the `v` term: `v^(p^k) = FROBENIUS_COEFF_C1[k % 6]`.
    const FROBENIUS_COEFF_C1: [F2; 6];
    /// Frobenius coefficients for the `v^2` term: `v^(2*p^k) = FROBENIUS_COEFF_C2[k % 6]`.
    const FROBENIUS_COEFF_C2: [F2; 6];
}

/// `Fp6 = F2[v] / (v^3 - xi)`, represented as `c0 + c1*v + c2*v^2`.
#[derive(Clone, Copy, Debug)]
pub struct Fp6<F2, P> {
    /// The constant term.
    pub c0: F2,
    /// The `v` coefficient.
    pub c1: F2,
    /// The `v^2` coefficient.
    pub c2: F2,
    _marker: PhantomData<P>,
}

impl<F2: Field, P: Fp6Params<F2>> Fp6<F2, P> {
    /// Builds an `Fp6` element from its three coefficients.
    pub const fn new(c0: F2, c1: F2, c2: F2) -> Self {
        Self {
            c0,
            c1,
            c2,
            _marker: PhantomData,
        }
    }

    /// Embeds a base-field element as `(a, 0, 0)`.
    pub fn from_base(a: F2) -> Self {
        Self::new(a, F2::ZERO, F2::ZERO)
    }

    /// Scales every coefficient by an `F2` scalar (used by
    /// [`crate::fp12::Fp12::frobenius_map`] to apply a Frobenius twist
    /// that itself lives in `F2` rather than `Fp6`).
    pub fn scale(self, x: F2) -> Self {
        Self::new(self.c0.mul(x), self.c1.mul(x), self.c2.mul(x))
    }

    /// Multiplication by `v`: `(c0, c1, c2) * v = (xi*c2, c0, c1)`. This is
    /// `Fp6`'s own "non-residue multiplication" one level up, used by
    /// [`crate::fp12::Fp12`]'s quadratic-extension arithmetic over `Fp6`.
    pub fn mul_by_v(self) -> Self {
        Self::new(P::mul_by_nonresidue(self.c2), self.c0, self.c1)
    }

    /// Karatsuba-style multiplication for a cubic extension (Devegili et
    /// al., "Multiplication and Squaring on Pairing-Friendly Fields",
    /// section 4): 6 base-field (`F2`) multiplications instead of 9.
    pub fn mul(self, other: Self) -> Self {
        let t0 = self.c0.mul(other.c0);
        let t1 = self.c1.mul(other.c1);
        let t2 = self.c2.mul(other.c2);

        let c0 = P::mul_by_nonresidue(
            (self.c1.add(self.c2)).mul(other.c1.add(other.c2)).sub(t1).sub(t2),
        )
        .add(t0);
        let c1 = (self.c0.add(self.c1))
            .mul(other.c0.add(other.c1))
            .sub(t0)
            .sub(t1)
            .add(P::mul_by_nonresidue(t2));
        let c2 = (self.c0.add(self.c2))
            .mul(other.c0.add(other.c2))
            .sub(t0)
            .sub(t2)
            .add(t1);

        Self::new(c0, c1, c2)
    }

    /// Sparse multiplication by `(c0, c1, 0)` — 5 `F2` multiplications
    /// instead of the general 6, used by Miller-loop line evaluations whose
    /// line value has a zero `v^2` coefficient.
    pub fn mul_by_x0(self, c0: F2, c1: F2) -> Self {
        let t0 = self.c0.mul(c0);
        let t1 = self.c1.mul(c1);

        let out_c0 = P::mul_by_nonresidue((self.c1.add(self.c2)).mul(c1).sub(t1)).add(t0);
        let out_c1 = (self.c0.add(self.c1)).mul(c0.add(c1)).sub(t0).sub(t1);
        let out_c2 = (self.c0.add(self.c2)).mul(c0).sub(t0).add(t1);

        Self::new(out_c0, out_c1, out_c2)
    }

    /// Sparse multiplication by `(0, c1, c2)` — 4 `F2` multiplications
    /// instead of the general 6, used by Miller-loop line evaluations whose
    /// line value has a zero constant term.
    pub fn mul_by_0y(self, c1: F2, c2: F2) -> Self {
        let t1 = self.c1.mul(c1);
        let t2 = self.c2.mul(c2);

        let out_c0 = P::mul_by_nonresidue((self.c1.add(self.c2)).mul(c1.add(c2)).sub(t1).sub(t2));
        let out_c1 = (self.c0.add(self.c1)).mul(c1).sub(t1).add(P::mul_by_nonresidue(t2));
        let out_c2 = (self.c0.add(self.c2)).mul(c2).sub(t2).add(t1);

        Self::new(out_c0, out_c1, out_c2)
    }

    /// Chung-Hasan SQR2 squaring for a cubic extension: 5 `F2`
    /// multiplications instead of 6.
    pub fn square(self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0.mul(self.c1);
        let s1 = ab.double();
        let s2 = (self.c0.sub(self.c1).add(self.c2)).square();
        let bc = self.c1.mul(self.c2);
        let s3 = bc.double();
        let s4 = self.c2.square();

        let c0 = s0.add(P::mul_by_nonresidue(s3));
        let c1 = s1.add(P::mul_by_nonresidue(s4));
        let c2 = s1.add(s2).add(s3).sub(s0).sub(s4);

        Self::new(c0, c1, c2)
    }

    /// `a^-1` via the standard cubic-extension norm identity: the norm
    /// `N(a) = a0*t0 + xi*(a2*t1 + a1*t2)` (with `t0, t1, t2` the 2x2
    /// cofactors below) collapses inversion to one base-field inverse.
    pub fn invert(self) -> CtOption<Self> {
        let t0 = self.c0.square().sub(P::mul_by_nonresidue(self.c1.mul(self.c2)));
        let t1 = P::mul_by_nonresidue(self.c2.square()).sub(self.c0.mul(self.c1));
        let t2 = self.c1.square().sub(self.c0.mul(self.c2));

        let norm = self
            .c0
            .mul(t0)
            .add(P::mul_by_nonresidue(self.c2.mul(t1).add(self.c1.mul(t2))));

        norm.invert().map(|norm_inv| Self::new(t0.mul(norm_inv), t1.mul(norm_inv), t2.mul(norm_inv)))
    }

    /// `a^(p^k)`: each coefficient raised via `F2`'s own (order-2)
    /// Frobenius, then re-scaled by the precomputed `v^(p^k)`/`v^(2p^k)`
    /// coefficient tables. `k` is always a public, protocol-fixed exponent.
    pub fn frobenius_map(self, k: usize) -> Self
    where
        F2: Fp2Like,
    {
        let idx = k % 6;
        Self::new(
            self.c0.frobenius_map(k),
            self.c1.frobenius_map(k).mul(P::FROBENIUS_COEFF_C1[idx]),
            self.c2.frobenius_map(k).mul(P::FROBENIUS_COEFF_C2[idx]),
        )
    }

    /// `self == 0`.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }
}

/// Capability a base field must offer for [`Fp6::frobenius_map`] to be
/// expressible generically: an order-2 Frobenius (`a -> a^(p^k)`, depending
/// on `k` only through parity/conjugation), as implemented by
/// [`crate::fp2::Fp2`].
pub trait Fp2Like: Field {
    /// `self^(p^k)`.
    fn frobenius_map(self, k: usize) -> Self;
}

impl<F: Field, P: crate::fp2::Fp2Params<F>> Fp2Like for crate::fp2::Fp2<F, P> {
    fn frobenius_map(self, k: usize) -> Self {
        crate::fp2::Fp2::frobenius_map(self, k)
    }
}

impl<F2: Field, P: Fp6Params<F2>> Default for Fp6<F2, P> {
    fn default() -> Self {
        Self::new(F2::ZERO, F2::ZERO, F2::ZERO)
    }
}

impl<F2: Field, P: Fp6Params<F2>> PartialEq for Fp6<F2, P> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<F2: Field, P: Fp6Params<F2>> Eq for Fp6<F2, P> {}

impl<F2: Field, P: Fp6Params<F2>> ConstantTimeEq for Fp6<F2, P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<F2: Field, P: Fp6Params<F2>> ConditionallySelectable for Fp6<F2, P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            F2::conditional_select(&a.c0, &b.c0, choice),
            F2::conditional_select(&a.c1, &b.c1, choice),
            F2::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl<F2: Field, P: Fp6Params<F2>> Add for Fp6<F2, P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0.add(rhs.c0), self.c1.add(rhs.c1), self.c2.add(rhs.c2))
    }
}
impl<F2: Field, P: Fp6Params<F2>> Sub for Fp6<F2, P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0.sub(rhs.c0), self.c1.sub(rhs.c1), self.c2.sub(rhs.c2))
    }
}
impl<F2: Field, P: Fp6Params<F2>> Mul for Fp6<F2, P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Fp6::mul(self, rhs)
    }
}
impl<F2: Field, P: Fp6Params<F2>> Neg for Fp6<F2, P> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }
}

impl<F2: Field, P: Fp6Params<F2>> Field for Fp6<F2, P> {
    const ZERO: Self = Self {
        c0: F2::ZERO,
        c1: F2::ZERO,
        c2: F2::ZERO,
        _marker: PhantomData,
    };
    const ONE: Self = Self {
        c0: F2::ONE,
        c1: F2::ZERO,
        c2: F2::ZERO,
        _marker: PhantomData,
    };

    fn add(self, other: Self) -> Self {
        <Self as Add>::add(self, other)
    }
    fn sub(self, other: Self) -> Self {
        <Self as Sub>::sub(self, other)
    }
    fn neg(self) -> Self {
        <Self as Neg>::neg(self)
    }
    fn mul(self, other: Self) -> Self {
        Fp6::mul(self, other)
    }
    fn square(self) -> Self {
        Fp6::square(self)
    }
    fn invert(self) -> CtOption<Self> {
        Fp6::invert(self)
    }
    fn is_zero(&self) -> Choice {
        Fp6::is_zero(self)
    }
    fn from_u64(v: u64) -> Self {
        Self::from_base(F2::from_u64(v))
    }

    const BYTE_LEN: usize = 3 * F2::BYTE_LEN;

    /// Big-endian, most-significant coefficient first: `c2 || c1 || c0`.
    fn to_bytes_be(&self, out: &mut [u8]) {
        let flen = F2::BYTE_LEN;
        self.c2.to_bytes_be(&mut out[..flen]);
        self.c1.to_bytes_be(&mut out[flen..2 * flen]);
        self.c0.to_bytes_be(&mut out[2 * flen..]);
    }

    fn from_bytes_be(bytes: &[u8]) -> CtOption<Self> {
        let flen = F2::BYTE_LEN;
        let c2 = F2::from_bytes_be(&bytes[..flen]);
        let c1 = F2::from_bytes_be(&bytes[flen..2 * flen]);
        let c0 = F2::from_bytes_be(&bytes[2 * flen..]);
        c0.and_then(|c0| c1.and_then(|c1| c2.map(|c2| Self::new(c0, c1, c2))))
    }

    /// `sgn0` extended to three coefficients, tested least-to-most
    /// significant: `c0`, then `c1`, then `c2`.
    fn sign(&self) -> Choice {
        let zero01 = self.c0.is_zero() & self.c1.is_zero();
        self.c0.sign() | (self.c0.is_zero() & self.c1.sign()) | (zero01 & self.c2.sign())
    }
}

#[cfg(feature = "zeroize")]
impl<F2: zeroize::Zeroize, P> zeroize::Zeroize for Fp6<F2, P> {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
        self.c2.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{ToyFp, ToyFp2, ToyFp6};
    use algebra_field::Field;

    fn elem(a: u64, b: u64, c: u64) -> ToyFp6 {
        ToyFp6::new(
            ToyFp2::new(ToyFp::from_u64(a), ToyFp::ZERO),
            ToyFp2::new(ToyFp::from_u64(b), ToyFp::ZERO),
            ToyFp2::new(ToyFp::from_u64(c), ToyFp::ZERO),
        )
    }

    #[test]
    fn square_matches_mul() {
        let a = elem(2, 5, 9);
        assert_eq!(a.square(), a.mul(a));
    }

    #[test]
    fn mul_by_x0_matches_general_mul() {
        let a = elem(3, 7, 11);
        let c0 = ToyFp2::new(ToyFp::from_u64(4), ToyFp::ZERO);
        let c1 = ToyFp2::new(ToyFp::from_u64(6), ToyFp::ZERO);
        let sparse = ToyFp6::new(c0, c1, ToyFp2::ZERO);
        assert_eq!(a.mul_by_x0(c0, c1), a.mul(sparse));
    }

    #[test]
    fn mul_by_0y_matches_general_mul() {
        let a = elem(3, 7, 11);
        let c1 = ToyFp2::new(ToyFp::from_u64(6), ToyFp::ZERO);
        let c2 = ToyFp2::new(ToyFp::from_u64(8), ToyFp::ZERO);
        let sparse = ToyFp6::new(ToyFp2::ZERO, c1, c2);
        assert_eq!(a.mul_by_0y(c1, c2), a.mul(sparse));
    }

    #[test]
    fn frobenius_identity_at_k_zero() {
        let a = elem(1, 2, 3);
        assert_eq!(a.frobenius_map(0), a);
    }

    #[test]
    fn additive_identity_and_inverse() {
        let a = elem(4, 8, 1);
        assert_eq!(a.add(ToyFp6::ZERO), a);
        assert_eq!(a.add(a.neg()), ToyFp6::ZERO);
    }
}
