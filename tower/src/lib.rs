//! Tower extension fields: `Fp2`, `Fp6`, `Fp12`.
//!
//! `Fp2 = Fp[u] / (u^2 - beta)` for a curve-chosen quadratic non-residue
//! `beta`; `Fp6 = Fp2[v] / (v^3 - xi)` for a cubic non-residue `xi`;
//! `Fp12 = Fp6[w] / (w^2 - v)`. Every level implements
//! [`algebra_field::Field`] recursively, so the `ec` crate's point types are
//! generic over `Fp` (G1) or `Fp2` (G2 on a sextic twist) without any
//! duplicated curve-arithmetic code, and `Fp6`/`Fp12` are available to a
//! future pairing implementation (Miller loop / final exponentiation) built
//! on top of this core, which is itself out of scope here.
//!
//! This build's curve registry only instantiates `Fp2` (for `Bls12_381::G2`);
//! `Fp6`/`Fp12` exist as generic, independently tested capabilities with no
//! concrete curve wired up to them yet — see DESIGN.md.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod fp12;
mod fp2;
mod fp6;

pub use fp12::{Fp12, Fp12Params};
pub use fp2::{Fp2, Fp2Params};
pub use fp6::{Fp2Like, Fp6, Fp6Params};

/// A toy `Fp -> Fp2` tower (`Fp = Z/13`) shared by this crate's own
/// `#[cfg(test)]` modules so `Fp6`/`Fp12` tests exercise real tower
/// arithmetic without depending on any curve's Montgomery-form constants.
#[cfg(test)]
pub(crate) mod test_support {
    use algebra_field::Field;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ToyFp(pub u64);

    impl ToyFp {
        pub const MODULUS: u64 = 13;
        pub fn new(v: u64) -> Self {
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
            if bool::from(choice) {
                *a
            } else {
                *b
            }
        }
    }
    impl core::ops::Neg for ToyFp {
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
            <Self as core::ops::Neg>::neg(self)
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
            CtOption::new(Self::new(bytes[0] as u64), Choice::from(1u8))
        }
        fn sign(&self) -> Choice {
            Choice::from((self.0 & 1) as u8)
        }
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ToyFp2Params;
    impl crate::fp2::Fp2Params<ToyFp> for ToyFp2Params {
        // -1 mod 13 = 12; 13 = 1 mod 4, so this is not a "real" QNR choice
        // for a 3-mod-4 prime, but Fp2 arithmetic doesn't require that — it
        // only requires `beta` to be a non-residue, which a toy modulus this
        // small is easiest to just pick by trial: 2 is a non-residue mod 13.
        const NONRESIDUE: ToyFp = ToyFp(2);
    }
    pub type ToyFp2 = crate::fp2::Fp2<ToyFp, ToyFp2Params>;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ToyFp6Params;
    impl crate::fp6::Fp6Params<ToyFp2> for ToyFp6Params {
        const NONRESIDUE: ToyFp2 = ToyFp2::new(ToyFp(1), ToyFp(1));
        const FROBENIUS_COEFF_C1: [ToyFp2; 6] = [ToyFp2::new(ToyFp(1), ToyFp(0)); 6];
        const FROBENIUS_COEFF_C2: [ToyFp2; 6] = [ToyFp2::new(ToyFp(1), ToyFp(0)); 6];
    }
    pub type ToyFp6 = crate::fp6::Fp6<ToyFp2, ToyFp6Params>;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ToyFp12Params;
    impl crate::fp12::Fp12Params<ToyFp2, ToyFp6Params> for ToyFp12Params {
        const FROBENIUS_COEFF_C1: [ToyFp2; 12] = [ToyFp2::new(ToyFp(1), ToyFp(0)); 12];
    }
    pub type ToyFp12 = crate::fp12::Fp12<ToyFp2, ToyFp6Params, ToyFp12Params>;
}
