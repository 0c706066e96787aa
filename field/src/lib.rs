//! Prime field arithmetic in Montgomery form.
//!
//! [`Fp`] is generic over a [`FieldParams`] marker type supplying the
//! modulus and its derived Montgomery constants as `const`s — the
//! "compile-time metaprogramming of curve constants" pattern: every
//! constant a curve needs is authored once, per curve, as a `const`, never
//! derived at runtime.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod field_trait;
mod fp;
mod params;
mod sqrt;

pub use field_trait::{Field, FieldSqrt};
pub use fp::Fp;
pub use params::{FieldParams, SqrtAlgorithm};
