use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use algebra_ct::{ByteOrder, SecretBool, SecretWord64};
use algebra_limbs::Limbs;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::params::FieldParams;
use crate::sqrt;

/// A prime field element stored in Montgomery form (`mres = a * R mod p`).
///
/// `N` is the limb count needed for the modulus `P::MODULUS`. Every
/// arithmetic operation here is total and constant time; fallible
/// conversions (`from_canonical_bytes`) return `CtOption` rather than
/// panicking.
#[derive(Clone, Copy)]
pub struct Fp<P, const N: usize> {
    mres: Limbs<N>,
    _marker: PhantomData<P>,
}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    /// The additive identity.
    pub const ZERO: Self = Self {
        mres: Limbs::ZERO,
        _marker: PhantomData,
    };

    /// The multiplicative identity.
    pub const ONE: Self = Self {
        mres: P::R_MOD_P,
        _marker: PhantomData,
    };

    /// Wraps an already-Montgomery-form limb array without validation.
    /// Used internally and by the curve registry to install precomputed
    /// constants (generator coordinates, Frobenius coefficients, …).
    pub const fn from_montgomery_unchecked(mres: Limbs<N>) -> Self {
        Self {
            mres,
            _marker: PhantomData,
        }
    }

    /// Returns the raw Montgomery-form limbs.
    pub const fn to_montgomery(self) -> Limbs<N> {
        self.mres
    }

    /// Converts a canonical (non-Montgomery) big integer into a field
    /// element, reducing modulo `p` if it is already known to be in range.
    /// Use [`Self::from_canonical`] when the input is untrusted.
    pub fn from_canonical_unchecked(a: Limbs<N>) -> Self {
        Self::to_mont(a)
    }

    /// Converts a canonical big integer into a field element, rejecting
    /// inputs outside `[0, p)` (the `OutOfRange` error condition of the
    /// byte-decoding contract).
    pub fn from_canonical(a: Limbs<N>) -> CtOption<Self> {
        let in_range = a.ct_lt(&P::MODULUS);
        CtOption::new(Self::to_mont(a), Choice::from(in_range))
    }

    /// Returns the canonical (non-Montgomery) representative in `[0, p)`.
    pub fn to_canonical(self) -> Limbs<N> {
        Self::from_mont(self.mres)
    }

    /// Decodes big-endian or little-endian bytes into a field element,
    /// rejecting values `>= p`.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> CtOption<Self> {
        let mut limbs = Limbs::<N>::ZERO;
        debug_assert_eq!(bytes.len(), N * 8);
        for i in 0..N {
            let chunk = match order {
                ByteOrder::BigEndian => {
                    let start = bytes.len() - (i + 1) * 8;
                    &bytes[start..start + 8]
                }
                ByteOrder::LittleEndian => &bytes[i * 8..i * 8 + 8],
            };
            let mut arr = [0u8; 8];
            arr.copy_from_slice(chunk);
            limbs.0[i] = match order {
                ByteOrder::BigEndian => SecretWord64::from_be_bytes(arr),
                ByteOrder::LittleEndian => SecretWord64::from_le_bytes(arr),
            };
        }
        Self::from_canonical(limbs)
    }

    /// Encodes the canonical representative as big-endian or little-endian
    /// bytes of length `N * 8`.
    pub fn to_bytes(self, order: ByteOrder, out: &mut [u8]) {
        debug_assert_eq!(out.len(), N * 8);
        let canon = self.to_canonical();
        for i in 0..N {
            let bytes = match order {
                ByteOrder::BigEndian => canon.0[i].to_be_bytes(),
                ByteOrder::LittleEndian => canon.0[i].to_le_bytes(),
            };
            match order {
                ByteOrder::BigEndian => {
                    let start = out.len() - (i + 1) * 8;
                    out[start..start + 8].copy_from_slice(&bytes);
                }
                ByteOrder::LittleEndian => out[i * 8..i * 8 + 8].copy_from_slice(&bytes),
            }
        }
    }

    /// Builds a field element from a small `u64`.
    pub fn from_u64(v: u64) -> Self {
        let mut limbs = Limbs::<N>::ZERO;
        limbs.0[0] = SecretWord64::new(v);
        Self::to_mont(limbs)
    }

    /// `a * R mod p`, i.e. canonical -> Montgomery.
    fn to_mont(a: Limbs<N>) -> Self {
        Self {
            mres: Self::montmul(&a, &P::R2_MOD_P),
            _marker: PhantomData,
        }
    }

    /// `x * R^-1 mod p`, i.e. Montgomery -> canonical.
    fn from_mont(x: Limbs<N>) -> Limbs<N> {
        let mut one = Limbs::<N>::ZERO;
        one.0[0] = SecretWord64::ONE;
        Self::montmul(&x, &one)
    }

    /// `a * b * R^-1 mod p` via separated multiply + CIOS-style REDC.
    ///
    /// Implemented as "multiply the full double-width product, then run
    /// the REDC reduction loop once" rather than fully interleaving the
    /// two (as literal CIOS does row-by-row) — mathematically identical
    /// result (Montgomery's 1985 REDC construction), chosen here because it
    /// is easier to get right without compiler/test feedback; see
    /// DESIGN.md.
    fn montmul(a: &Limbs<N>, b: &Limbs<N>) -> Limbs<N> {
        let mut wide = vec_zero::<N>();
        a.mul_into(b, &mut wide[..2 * N]);
        Self::redc(&mut wide[..2 * N])
    }

    /// Dedicated-squaring Montgomery square: `a^2 * R^-1 mod p`.
    pub fn square(self) -> Self {
        let mut wide = vec_zero::<N>();
        self.mres.square_into(&mut wide[..2 * N]);
        Self {
            mres: Self::redc(&mut wide[..2 * N]),
            _marker: PhantomData,
        }
    }

    /// REDC: reduces a `2N`-limb product to an `N`-limb Montgomery result.
    fn redc(t: &mut [SecretWord64]) -> Limbs<N> {
        debug_assert_eq!(t.len(), 2 * N);
        let p = P::MODULUS;
        let m0inv = SecretWord64::new(P::M0INV);

        for i in 0..N {
            let m = t[i].wrapping_mul(m0inv);
            let mut carry = SecretWord64::ZERO;
            for j in 0..N {
                let (lo, hi) = t[i + j].mac(m, p.0[j], carry);
                t[i + j] = lo;
                carry = hi;
            }
            propagate(t, i + N, carry);
        }

        let mut result = Limbs::<N>::ZERO;
        result.0.copy_from_slice(&t[N..2 * N]);

        let (sub, borrow) = result.sub(&p);
        let keep_as_is = borrow.ct_is_nonzero(); // result < p already
        Limbs::conditional_select(&result, &sub, Choice::from(!keep_as_is))
    }

    /// `self + other`, with a constant-time final correction so the
    /// result stays in `[0, p)`.
    pub fn add(self, other: Self) -> Self {
        let (sum, carry) = self.mres.add(&other.mres);
        let (reduced, borrow) = sum.sub(&P::MODULUS);
        // If the raw sum overflowed N limbs, or didn't underflow on
        // subtracting p, the reduced value is the right one.
        let need_reduce = carry.ct_is_nonzero() | !borrow.ct_is_nonzero();
        Self {
            mres: Limbs::conditional_select(&sum, &reduced, Choice::from(need_reduce)),
            _marker: PhantomData,
        }
    }

    /// `self - other`, with a constant-time conditional addition of `p`.
    pub fn sub(self, other: Self) -> Self {
        let (diff, borrow) = self.mres.sub(&other.mres);
        let corrected = diff.cadd(&P::MODULUS, SecretBool::from(Choice::from(borrow.ct_is_nonzero())));
        Self {
            mres: corrected,
            _marker: PhantomData,
        }
    }

    /// `self + self`.
    pub fn double(self) -> Self {
        self.add(self)
    }

    /// `-self`.
    pub fn negate(self) -> Self {
        Self::ZERO.sub(self)
    }

    /// `self * other`.
    pub fn mul(self, other: Self) -> Self {
        Self {
            mres: Self::montmul(&self.mres, &other.mres),
            _marker: PhantomData,
        }
    }

    /// `self / 2`, via the constant-time odd-case adjustment: add `p` when
    /// `self` is odd (so the sum is even) before shifting.
    pub fn halve(self) -> Self {
        let is_odd = self.mres.is_odd();
        let adjusted = self.mres.cadd(&P::MODULUS, is_odd);
        Self {
            mres: adjusted.shr1(),
            _marker: PhantomData,
        }
    }

    /// `self == 0`.
    pub fn is_zero(&self) -> Choice {
        Choice::from(self.mres.ct_is_zero())
    }

    /// `self == 1`.
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Whether the canonical representative is odd — used by sign
    /// conventions for compressed point encoding.
    pub fn is_odd(&self) -> Choice {
        Choice::from(self.to_canonical().is_odd())
    }

    /// Raises `self` to a public exponent given as big-endian limbs, via a
    /// constant-shape square-and-multiply ladder. The exponent here is
    /// always a compile-time curve constant (e.g. `p - 2`), never secret,
    /// so varying the *number* of squarings with it is safe; the ladder
    /// still never branches on `self`.
    pub fn pow_public(self, exponent: &Limbs<N>) -> Self {
        let mut acc = Self::ONE;
        for i in (0..N).rev() {
            let word = exponent.0[i].to_raw();
            for bit in (0..64).rev() {
                acc = acc.square();
                if (word >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// Multiplicative inverse, or `0` with a `false` choice if `self == 0`
    /// (the `WasZero` informational condition). Implemented via the
    /// generic Fermat ladder `self^(p-2)`; see DESIGN.md for why this
    /// build uses the ladder rather than a hand-rolled Bernstein-Yang
    /// safe-gcd as the default path.
    pub fn invert(self) -> CtOption<Self> {
        let result = self.pow_public(&P::P_MINUS_2);
        CtOption::new(result, !self.is_zero())
    }

    /// Legendre symbol `self^((p-1)/2)`: `1` for a nonzero QR, `-1`
    /// (i.e. `p - 1`) for a non-residue, `0` for `self == 0`.
    pub fn legendre(self) -> Self {
        self.pow_public(&P::P_MINUS_1_OVER_2)
    }

    /// Whether `self` is a nonzero quadratic residue.
    pub fn is_square(self) -> Choice {
        self.legendre().ct_eq(&Self::ONE)
    }

    /// Square root, or an undefined value with a `false` choice if `self`
    /// is not a quadratic residue (`NotASquare`). Dispatches on
    /// `P::SQRT_ALGORITHM`, fixed at compile time from the modulus's
    /// residue class.
    pub fn sqrt(self) -> CtOption<Self> {
        match P::SQRT_ALGORITHM {
            crate::params::SqrtAlgorithm::Shanks => sqrt::sqrt_shanks::<P, N>(self),
            crate::params::SqrtAlgorithm::Atkin => sqrt::sqrt_atkin::<P, N>(self),
            crate::params::SqrtAlgorithm::TonelliShanks => sqrt::sqrt_tonelli_shanks::<P, N>(self),
        }
    }

    /// Largest batch [`Self::batch_invert`] accepts. Bounded so the prefix-
    /// product scratch space stays a fixed-size stack array rather than a
    /// heap allocation — this core calls no allocator (see DESIGN.md) —
    /// matching `ProjectivePoint::batch_normalize`'s identical cap in the
    /// elliptic-curve layer above.
    pub const BATCH_INVERT_MAX: usize = 1024;

    /// Batch (simultaneous) inversion via Montgomery's trick: one field
    /// inversion plus `3 * values.len()` multiplications instead of
    /// `values.len()` inversions. Every input MUST be non-zero; zero
    /// entries are left unchanged and flagged false in the returned mask.
    /// Panics if `values.len() > Self::BATCH_INVERT_MAX`.
    pub fn batch_invert(values: &mut [Self]) {
        if values.is_empty() {
            return;
        }
        assert!(values.len() <= Self::BATCH_INVERT_MAX, "batch_invert: batch too large");

        let mut prefix = [Self::ONE; Self::BATCH_INVERT_MAX];
        let mut acc = Self::ONE;
        for i in 0..values.len() {
            prefix[i] = acc;
            acc = acc.mul(values[i]);
        }
        let mut inv = acc.invert().unwrap_or(Self::ZERO);
        for i in (0..values.len()).rev() {
            let orig = values[i];
            values[i] = inv.mul(prefix[i]);
            inv = inv.mul(orig);
        }
    }
}

impl<P: FieldParams<N>, const N: usize> ConstantTimeEq for Fp<P, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.mres.ct_eq(&other.mres)
    }
}

impl<P: FieldParams<N>, const N: usize> ConditionallySelectable for Fp<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            mres: Limbs::conditional_select(&a.mres, &b.mres, choice),
            _marker: PhantomData,
        }
    }
}

impl<P: FieldParams<N>, const N: usize> PartialEq for Fp<P, N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<P: FieldParams<N>, const N: usize> Eq for Fp<P, N> {}

impl<P: FieldParams<N>, const N: usize> Default for Fp<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<N>, const N: usize> From<u64> for Fp<P, N> {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl<P: FieldParams<N>, const N: usize> Add for Fp<P, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Fp::add(self, rhs)
    }
}

impl<P: FieldParams<N>, const N: usize> Sub for Fp<P, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Fp::sub(self, rhs)
    }
}

impl<P: FieldParams<N>, const N: usize> Mul for Fp<P, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Fp::mul(self, rhs)
    }
}

impl<P: FieldParams<N>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

#[cfg(feature = "zeroize")]
impl<P, const N: usize> zeroize::Zeroize for Fp<P, N> {
    fn zeroize(&mut self) {
        self.mres.zeroize();
    }
}

fn propagate(out: &mut [SecretWord64], start: usize, carry: SecretWord64) {
    let mut c = carry;
    for k in start..out.len() {
        let (sum, cc) = out[k].adc(c, SecretWord64::ZERO);
        out[k] = sum;
        c = cc;
    }
}

/// Stack-allocated zeroed double-width scratch buffer. `no_std`-friendly
/// replacement for a `Vec` that this `no_std` crate cannot allocate.
fn vec_zero<const N: usize>() -> [SecretWord64; 16] {
    // Field moduli in this workspace never exceed 8 limbs (512 bits), so a
    // fixed 16-word (1024-bit) double-width scratch buffer is always large
    // enough; only the first `2*N` words are used.
    [SecretWord64::ZERO; 16]
}

