use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use algebra_field::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Per-curve constants needed to instantiate `Fp2` over a base field `F`.
///
/// A zero-sized marker type, following the same compile-time-constant
/// convention as [`algebra_field::FieldParams`]: the quadratic non-residue
/// `beta` (`u^2 = beta`) is an author-supplied `const`, never derived at
/// runtime.
pub trait Fp2Params<F: Field>: Copy + Eq + core::fmt::Debug {
    /// The quadratic non-residue `beta` such that `u^2 = beta` is
    /// irreducible over `F`.
    const NONRESIDUE: F;

    /// Multiplies `x` by [`Self::NONRESIDUE`].
    ///
    /// Default: a full field multiplication. Curves whose non-residue has a
    /// cheap shape (e.g. `beta = -1`, as used for BLS12-381's Fp2) should
    /// override this with the addition/subtraction-only version the spec
    /// calls for; the default keeps every modulus correct without demanding
    /// a per-curve override.
    fn mul_by_nonresidue(x: F) -> F {
        x.mul(Self::NONRESIDUE)
    }
}

/// `Fp2 = F[u] / (u^2 - beta)`, represented as `c0 + c1*u`.
///
/// Every coefficient is stored in the base field's own (Montgomery, for
/// `Fp`) representation; this type never itself touches Montgomery form.
#[derive(Clone, Copy, Debug)]
pub struct Fp2<F, P> {
    /// The constant term.
    pub c0: F,
    /// The `u` coefficient.
    pub c1: F,
    _marker: PhantomData<P>,
}

impl<F: Field, P: Fp2Params<F>> Fp2<F, P> {
    /// Builds an `Fp2` element from its two coefficients.
    pub const fn new(c0: F, c1: F) -> Self {
        Self {
            c0,
            c1,
            _marker: PhantomData,
        }
    }

    /// Embeds a base-field element as `(a, 0)`.
    pub fn from_base(a: F) -> Self {
        Self::new(a, F::ZERO)
    }

    /// The Fp2 conjugate: `(c0, -c1)`.
    pub fn conj(self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// The norm `c0^2 - beta*c1^2`, an element of the base field.
    fn norm(self) -> F {
        self.c0.square().sub(P::mul_by_nonresidue(self.c1.square()))
    }

    /// Karatsuba multiplication: 3 base-field multiplications instead of 4.
    pub fn mul(self, other: Self) -> Self {
        let v0 = self.c0.mul(other.c0);
        let v1 = self.c1.mul(other.c1);
        let c0 = v0.add(P::mul_by_nonresidue(v1));
        let c1 = (self.c0.add(self.c1))
            .mul(other.c0.add(other.c1))
            .sub(v0)
            .sub(v1);
        Self::new(c0, c1)
    }

    /// Dedicated complex squaring: 2 base-field multiplications instead of 3.
    pub fn square(self) -> Self {
        let v0 = self.c0.mul(self.c1);
        let beta_c1 = P::mul_by_nonresidue(self.c1);
        let t = (self.c0.add(self.c1)).mul(self.c0.add(beta_c1));
        let beta_v0 = P::mul_by_nonresidue(v0);
        let c0 = t.sub(v0).sub(beta_v0);
        let c1 = v0.double();
        Self::new(c0, c1)
    }

    /// `a^-1 = conj(a) / norm(a)`.
    pub fn invert(self) -> CtOption<Self> {
        self.norm().invert().map(|norm_inv| {
            Self::new(self.c0.mul(norm_inv), self.c1.neg().mul(norm_inv))
        })
    }

    /// `a^(p^k)`. Frobenius has order 2 on `Fp2`, so every even `k` is the
    /// identity and every odd `k` is the conjugate. `k` is always a public
    /// protocol-fixed exponent (never secret), so branching on it directly
    /// does not violate the constant-time discipline.
    pub fn frobenius_map(self, k: usize) -> Self {
        if k % 2 == 0 {
            self
        } else {
            self.conj()
        }
    }

    /// `self == 0`.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }
}

impl<F: Field, P: Fp2Params<F>> Default for Fp2<F, P> {
    fn default() -> Self {
        Self::new(F::ZERO, F::ZERO)
    }
}

impl<F: Field, P: Fp2Params<F>> PartialEq for Fp2<F, P> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<F: Field, P: Fp2Params<F>> Eq for Fp2<F, P> {}

impl<F: Field, P: Fp2Params<F>> ConstantTimeEq for Fp2<F, P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<F: Field, P: Fp2Params<F>> ConditionallySelectable for Fp2<F, P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            F::conditional_select(&a.c0, &b.c0, choice),
            F::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl<F: Field, P: Fp2Params<F>> Add for Fp2<F, P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0.add(rhs.c0), self.c1.add(rhs.c1))
    }
}

impl<F: Field, P: Fp2Params<F>> Sub for Fp2<F, P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0.sub(rhs.c0), self.c1.sub(rhs.c1))
    }
}

impl<F: Field, P: Fp2Params<F>> Mul for Fp2<F, P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Fp2::mul(self, rhs)
    }
}

impl<F: Field, P: Fp2Params<F>> Neg for Fp2<F, P> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg())
    }
}

impl<F: Field, P: Fp2Params<F>> Field for Fp2<F, P> {
    const ZERO: Self = Self {
        c0: F::ZERO,
        c1: F::ZERO,
        _marker: PhantomData,
    };
    const ONE: Self = Self {
        c0: F::ONE,
        c1: F::ZERO,
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
        Fp2::mul(self, other)
    }
    fn square(self) -> Self {
        Fp2::square(self)
    }
    fn invert(self) -> CtOption<Self> {
        Fp2::invert(self)
    }
    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }
    fn from_u64(v: u64) -> Self {
        Self::from_base(F::from_u64(v))
    }

    const BYTE_LEN: usize = 2 * F::BYTE_LEN;

    /// Big-endian encoding, most-significant coefficient first: `c1 || c0`
    /// (the IETF pairing-friendly-curves convention for `Fp2` elements).
    fn to_bytes_be(&self, out: &mut [u8]) {
        let flen = F::BYTE_LEN;
        self.c1.to_bytes_be(&mut out[..flen]);
        self.c0.to_bytes_be(&mut out[flen..]);
    }

    fn from_bytes_be(bytes: &[u8]) -> CtOption<Self> {
        let flen = F::BYTE_LEN;
        let c1 = F::from_bytes_be(&bytes[..flen]);
        let c0 = F::from_bytes_be(&bytes[flen..]);
        c0.and_then(|c0| c1.map(|c1| Self::new(c0, c1)))
    }

    /// RFC 9380 section 4.1 `sgn0` rule generalized to two coefficients:
    /// the sign of `c0` if `c0 != 0`, else the sign of `c1`.
    fn sign(&self) -> Choice {
        self.c0.sign() | (self.c0.is_zero() & self.c1.sign())
    }
}

#[cfg(feature = "zeroize")]
impl<F: zeroize::Zeroize, P> zeroize::Zeroize for Fp2<F, P> {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A toy base field: integers mod 7 (7 ≡ 3 mod 4, so -1 is a
    // non-residue and `u^2 = -1` is irreducible), used only to exercise the
    // `Fp2` arithmetic in this file without dragging in a real curve
    // modulus's Montgomery constants.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct ToyFp(u64);

    impl ToyFp {
        const MODULUS: u64 = 7;
        fn new(v: u64) -> Self {
            Self(v % Self::MODULUS)
        }
    }

    impl ConstantTimeEq for ToyFp {
        fn ct_eq(&self, other: &Self) -> Choice {
            Choice::from((self.0 == other.0) as u8)
        }
    }
    impl ConditionallySelectable for ToyFp {
        fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
            if bool::from(choice) { *a } else { *b }
        }
    }
    impl Neg for ToyFp {
        type Output = Self;
        fn neg(self) -> Self {
            Self::new(Self::MODULUS - self.0)
        }
    }
    impl Field for ToyFp {
        const ZERO: Self = Self(0);
        const ONE: Self = Self(1);
        fn add(self, other: Self) -> Self {
            Self::new(self.0 + other.0)
        }
        fn sub(self, other: Self) -> Self {
            Self::new(self.0 + Self::MODULUS - other.0)
        }
        fn neg(self) -> Self {
            <Self as Neg>::neg(self)
        }
        fn mul(self, other: Self) -> Self {
            Self::new(self.0 * other.0)
        }
        fn square(self) -> Self {
            self.mul(self)
        }
        fn invert(self) -> CtOption<Self> {
            let mut inv = Self::ZERO;
            for candidate in 1..Self::MODULUS {
                if (candidate * self.0) % Self::MODULUS == 1 {
                    inv = Self::new(candidate);
                }
            }
            CtOption::new(inv, !self.is_zero())
        }
        fn is_zero(&self) -> Choice {
            Choice::from((self.0 == 0) as u8)
        }
        fn from_u64(v: u64) -> Self {
            Self::new(v)
        }
        const BYTE_LEN: usize = 1;
        fn to_bytes_be(&self, out: &mut [u8]) {
            out[0] = self.0 as u8;
        }
        fn from_bytes_be(bytes: &[u8]) -> CtOption<Self> {
            let v = Self::new(bytes[0] as u64);
            CtOption::new(v, Choice::from(1u8))
        }
        fn sign(&self) -> Choice {
            Choice::from((self.0 & 1) as u8)
        }
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct ToyFp2Params;
    impl Fp2Params<ToyFp> for ToyFp2Params {
        const NONRESIDUE: ToyFp = ToyFp(6); // -1 mod 7
        fn mul_by_nonresidue(x: ToyFp) -> ToyFp {
            x.neg()
        }
    }

    type ToyFp2 = Fp2<ToyFp, ToyFp2Params>;

    #[test]
    fn conjugate_is_involution() {
        let a = ToyFp2::new(ToyFp::from_u64(3), ToyFp::from_u64(5));
        assert_eq!(a.conj().conj(), a);
    }

    #[test]
    fn mul_matches_schoolbook() {
        let a = ToyFp2::new(ToyFp::from_u64(2), ToyFp::from_u64(3));
        let b = ToyFp2::new(ToyFp::from_u64(4), ToyFp::from_u64(5));
        // (2+3u)(4+5u) = 8 + 10u + 12u + 15u^2 = (8 - 15) + 22u  [u^2 = -1]
        let c = a.mul(b);
        assert_eq!(c.c0, ToyFp::from_u64(8).sub(ToyFp::from_u64(15)));
        assert_eq!(c.c1, ToyFp::from_u64(22));
    }

    #[test]
    fn square_matches_mul() {
        let a = ToyFp2::new(ToyFp::from_u64(7), ToyFp::from_u64(11));
        assert_eq!(a.square(), a.mul(a));
    }

    #[test]
    fn frobenius_is_conjugate_on_odd_power() {
        let a = ToyFp2::new(ToyFp::from_u64(9), ToyFp::from_u64(13));
        assert_eq!(a.frobenius_map(1), a.conj());
        assert_eq!(a.frobenius_map(2), a);
    }

    #[test]
    fn invert_roundtrips() {
        let a = ToyFp2::new(ToyFp::from_u64(6), ToyFp::from_u64(2));
        let inv = a.invert().unwrap();
        assert_eq!(a.mul(inv), ToyFp2::ONE);
    }
}
