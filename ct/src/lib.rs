//! Constant-time secret word/bool primitives.
//!
//! This crate provides the lowest layer of the stack: masked boolean and
//! word types whose every operation is a function of argument *types*, not
//! argument *values*. Everything above (limb arithmetic, field arithmetic,
//! curve arithmetic) is built out of [`ct_select`]-shaped primitives so that
//! no higher layer ever needs to branch or index on secret data.
//!
//! The bit-trick formulas below (`ct_eq`, `ct_lt`, `ct_select`) are the
//! actual deliverable; the crate also implements the `subtle` traits on top
//! of them so downstream code can speak the ecosystem-standard vocabulary
//! (`Choice`, `CtOption`, `ConditionallySelectable`) without re-deriving it.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod byteorder;
mod word;

pub use byteorder::ByteOrder;
pub use word::{SecretBool, SecretWord, SecretWord32, SecretWord64};

#[cfg(feature = "zeroize")]
pub use zeroize::Zeroize;
