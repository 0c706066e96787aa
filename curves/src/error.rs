//! The one place this workspace uses `Result` rather than `subtle::CtOption`:
//! failure modes that are never reached on a secret-dependent path, per the
//! workspace's error-handling convention (compare `elliptic_curve::Error` in
//! the teacher crate this registry is layered on top of).

use core::fmt;

/// Non-secret-dependent failure modes surfaced by the curve registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// A curve name passed to a runtime lookup helper did not match any
    /// curve compiled into this build (either unrecognized, or compiled out
    /// via Cargo features).
    UnknownCurve,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownCurve => f.write_str("unknown or not-compiled-in curve name"),
        }
    }
}

impl core::error::Error for CoreError {}
