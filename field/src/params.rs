use algebra_limbs::Limbs;

/// Which square-root recipe applies to a modulus, selected once from its
/// residue class (`p mod 4`, `p mod 8`) — never from the radicand — exactly
/// as the residue class is fixed at compile time for a given curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SqrtAlgorithm {
    /// `p ≡ 3 (mod 4)`: `sqrt(a) = a^((p+1)/4)`.
    Shanks,
    /// `p ≡ 5 (mod 8)`: the Atkin recipe (eprint 2012/685, Algorithm 3).
    Atkin,
    /// Any odd prime: generic Tonelli-Shanks.
    TonelliShanks,
}

/// The compile-time parameters of a prime field of `N` 64-bit limbs.
///
/// Implementors are zero-sized marker types (one per curve's `Fp`/`Fr`),
/// following the `primeorder::PrimeCurveParams` / `primefield::MontyFieldParams`
/// convention: every value below is an author-supplied `const`, never
/// computed at runtime.
pub trait FieldParams<const N: usize>: Copy + Eq + core::fmt::Debug {
    /// The modulus `p`, little-endian limbs.
    const MODULUS: Limbs<N>;

    /// `-p^-1 mod 2^64`, the Montgomery reduction factor.
    const M0INV: u64;

    /// `R mod p` where `R = 2^(64*N)` — the Montgomery representation of `1`.
    const R_MOD_P: Limbs<N>;

    /// `R^2 mod p` — used to convert a canonical value into Montgomery form.
    const R2_MOD_P: Limbs<N>;

    /// Number of unused high bits in the top limb of `p` (0 if `p` uses
    /// every bit of its top limb).
    const SPARE_BITS: u32;

    /// Exponent `p - 2`, used by the generic Fermat-ladder inverse.
    const P_MINUS_2: Limbs<N>;

    /// Exponent `(p - 1) / 2`, used by the Legendre symbol.
    const P_MINUS_1_OVER_2: Limbs<N>;

    /// Which sqrt recipe this modulus's residue class selects.
    const SQRT_ALGORITHM: SqrtAlgorithm;

    /// Exponent `(p + 1) / 4`, valid when `SQRT_ALGORITHM == Shanks`.
    const SQRT_EXP_SHANKS: Limbs<N> = Self::MODULUS;

    /// Exponent `(p - 5) / 8`, valid when `SQRT_ALGORITHM == Atkin`.
    const SQRT_EXP_ATKIN: Limbs<N> = Self::MODULUS;

    /// `S` such that `p - 1 = T * 2^S` with `T` odd, valid when
    /// `SQRT_ALGORITHM == TonelliShanks`.
    const TONELLI_S: u32 = 0;
    /// `(T - 1) / 2`, valid when `SQRT_ALGORITHM == TonelliShanks`. Supplied
    /// directly (rather than derived from `T` at runtime) per the "no
    /// runtime derivation of curve constants" design note.
    const TONELLI_T_MINUS_1_OVER_2: Limbs<N> = Self::MODULUS;
    /// A fixed quadratic non-residue, in Montgomery form, raised to `T`
    /// (`c5` in the spec's Tonelli-Shanks notation), valid when
    /// `SQRT_ALGORITHM == TonelliShanks`.
    const TONELLI_ROOT_OF_UNITY: Limbs<N> = Self::MODULUS;
}
