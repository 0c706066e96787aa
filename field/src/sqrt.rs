//! Modular square-root algorithms, adapted from <https://eprint.iacr.org/2012/685.pdf>.
//!
//! Which of the three recipes applies to a given modulus is a property of
//! its residue class mod 4/mod 8 and is therefore fixed once, at compile
//! time, by [`crate::params::FieldParams::SQRT_ALGORITHM`] — never
//! re-derived from the radicand being rooted.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::fp::Fp;
use crate::params::FieldParams;

/// Shanks' algorithm for `p ≡ 3 (mod 4)`.
///
/// `sqrt(a) = a^((p + 1) / 4)`; squaring the candidate back and comparing
/// against `a` doubles as the "is this a square at all" check (eprint
/// 2012/685, Algorithm 2).
pub(crate) fn sqrt_shanks<P: FieldParams<N>, const N: usize>(a: Fp<P, N>) -> CtOption<Fp<P, N>> {
    let candidate = a.pow_public(&P::SQRT_EXP_SHANKS);
    CtOption::new(candidate, (candidate * candidate).ct_eq(&a))
}

/// Atkin's algorithm for `p ≡ 5 (mod 8)` (eprint 2012/685, page 10, Algorithm 3).
pub(crate) fn sqrt_atkin<P: FieldParams<N>, const N: usize>(a: Fp<P, N>) -> CtOption<Fp<P, N>> {
    let exp = P::SQRT_EXP_ATKIN; // (p - 5) / 8
    let two = Fp::<P, N>::from_u64(2);

    let t = two.pow_public(&exp);
    let a1 = a.pow_public(&exp);
    let a0 = (a1.square() * a).square();
    let b = t * a1;
    let ab = a * b;
    let i = two * ab * b;
    let x = ab * (i - Fp::<P, N>::ONE);

    // a0 == -1 iff a is a non-residue; everything else is a valid root.
    CtOption::new(x, !a0.ct_eq(&-Fp::<P, N>::ONE))
}

/// Generic Tonelli-Shanks, valid for every odd prime modulus.
///
/// Constant-time variant (eprint 2012/685, Algorithm 5): every inner-loop
/// branch is a masked [`Fp::conditional_select`] rather than a data-dependent
/// jump, and the outer/inner loop bounds are the compile-time constants `S`
/// and `max_v`, not anything derived from `a`.
pub(crate) fn sqrt_tonelli_shanks<P: FieldParams<N>, const N: usize>(
    a: Fp<P, N>,
) -> CtOption<Fp<P, N>> {
    let w = a.pow_public(&P::TONELLI_T_MINUS_1_OVER_2);
    let mut v = P::TONELLI_S;
    let mut x = a * w;
    let mut b = x * w;
    let mut z = Fp::<P, N>::from_montgomery_unchecked(P::TONELLI_ROOT_OF_UNITY);

    for max_v in (1..=P::TONELLI_S).rev() {
        let mut k = 1u32;
        let mut tmp = b.square();
        let mut j_less_than_v = Choice::from(1u8);

        for j in 2..max_v {
            let tmp_is_one = tmp.ct_eq(&Fp::<P, N>::ONE);
            let squared = Fp::<P, N>::conditional_select(&tmp, &z, tmp_is_one).square();
            tmp = Fp::<P, N>::conditional_select(&squared, &tmp, tmp_is_one);
            let new_z = Fp::<P, N>::conditional_select(&z, &squared, tmp_is_one);
            j_less_than_v &= !j.ct_eq(&v);
            k = u32::conditional_select(&j, &k, tmp_is_one);
            z = Fp::<P, N>::conditional_select(&z, &new_z, j_less_than_v);
        }

        let result = x * z;
        x = Fp::<P, N>::conditional_select(&result, &x, b.ct_eq(&Fp::<P, N>::ONE));
        z = z.square();
        b = b * z;
        v = k;
    }

    CtOption::new(x, x.square().ct_eq(&a))
}
