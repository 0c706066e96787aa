//! Constant-time scalar multiplication.
//!
//! [`scalar_mul`] is the generic double-and-add fallback: a 4-bit windowed
//! ladder over a 16-entry precomputed table, read in full at every step (so
//! the table index never leaks through memory access patterns) — the same
//! shape as `primeorder::ProjectivePoint::mul`, generalized from a
//! curve-specific scalar width to the crate-wide 512-bit [`ScalarLimbs`].
//! [`crate::glv::scalar_mul_glv`] is the endomorphism-accelerated path for
//! curves implementing [`crate::GlvParams`].

use algebra_field::Field;
use subtle::{Choice, ConditionallySelectable};

use crate::params::{CurveParams, ScalarLimbs, SCALAR_LIMBS};
use crate::projective::ProjectivePoint;

/// `[k] * p`, via generic constant-time double-and-add. Total: `k = 0`
/// yields the identity, and `p = O` yields the identity for any `k`.
pub fn scalar_mul<C: CurveParams>(p: &ProjectivePoint<C>, k: &ScalarLimbs) -> ProjectivePoint<C> {
    let mut pc = [ProjectivePoint::<C>::IDENTITY; 16];
    pc[1] = *p;
    for i in 2..16 {
        pc[i] = if i % 2 == 0 {
            pc[i / 2].double()
        } else {
            pc[i - 1].add(p)
        };
    }

    let mut q = ProjectivePoint::<C>::IDENTITY;
    let total_bits = SCALAR_LIMBS * 64;
    let mut pos = total_bits - 4;

    loop {
        let slot = nibble(k, pos);

        let mut t = ProjectivePoint::<C>::IDENTITY;
        for (i, candidate) in pc.iter().enumerate().skip(1) {
            let hit = Choice::from(((slot as usize ^ i).wrapping_sub(1) >> 63) as u8 & 1);
            t.conditional_assign(candidate, hit);
        }

        q = q.add(&t);

        if pos == 0 {
            break;
        }
        q = q.double().double().double().double();
        pos -= 4;
    }

    q
}

/// Extracts the 4-bit nibble of `k` starting at bit position `bit` (a
/// public loop counter, never a secret value).
fn nibble(k: &ScalarLimbs, bit: usize) -> u8 {
    let word = k.0[bit / 64].to_raw();
    ((word >> (bit % 64)) & 0xf) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_ct::SecretWord64;

    // Re-tested against a toy curve in `crate::tests` via the public
    // `ProjectivePoint::mul` wrapper; this module only checks the nibble
    // extraction helper in isolation.
    #[test]
    fn nibble_extraction() {
        let mut limbs = ScalarLimbs::ZERO;
        limbs.0[0] = SecretWord64::new(0x00000000_000000ab);
        assert_eq!(nibble(&limbs, 0), 0xb);
        assert_eq!(nibble(&limbs, 4), 0xa);
        assert_eq!(nibble(&limbs, 8), 0x0);
    }
}
