//! Compile-time registry of concrete curve and field instantiations.
//!
//! Each curve below is a zero-sized marker type implementing
//! [`algebra_ec::CurveParams`] (and, for BLS12-381's G2, also
//! [`algebra_tower::Fp2Params`]) over a concrete [`algebra_field::FieldParams`]
//! modulus. Every constant is an author-supplied literal derived once,
//! offline, from the curve's public domain parameters — never computed at
//! runtime — per the "compile-time metaprogramming of curve constants"
//! design note this workspace follows throughout.
//!
//! Curves are selected at compile time via Cargo features (`secp256k1`,
//! `p256`, `bls12_381`), mirroring how `k256`'s `Cargo.toml` gates its own
//! optional functionality; there is no runtime curve-parameter loading path.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod error;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;
#[cfg(feature = "p256")]
pub mod p256;
#[cfg(feature = "secp256k1")]
pub mod secp256k1;

pub use error::CoreError;

/// The names of the curves compiled into this build, for diagnostics and
/// test reporting. Not a dynamic curve-parameter mechanism: every name here
/// corresponds to a fixed, compile-time module selected by a Cargo feature.
pub fn compiled_curves() -> &'static [&'static str] {
    &[
        #[cfg(feature = "secp256k1")]
        "secp256k1",
        #[cfg(feature = "p256")]
        "p256",
        #[cfg(feature = "bls12_381")]
        "bls12_381",
    ]
}

/// Looks up a compiled-in curve by name, for tooling that wants to report on
/// a curve chosen at its own runtime (e.g. a CLI flag) without this crate
/// itself deriving parameters dynamically. Returns [`CoreError::UnknownCurve`]
/// for any name not compiled into this build.
pub fn describe(name: &str) -> Result<&'static str, CoreError> {
    compiled_curves()
        .iter()
        .find(|&&n| n == name)
        .copied()
        .ok_or(CoreError::UnknownCurve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_rejects_unknown_names() {
        assert_eq!(describe("not-a-curve"), Err(CoreError::UnknownCurve));
    }

    #[test]
    fn describe_accepts_compiled_curves() {
        for &name in compiled_curves() {
            assert_eq!(describe(name), Ok(name));
        }
    }
}
