//! Cross-cutting error types for WagerVS intel.
//!
//! The visibility gate itself is infallible. These errors come from the
//! boundaries around it: parsing levels from untrusted input and validating
//! data handed over by an insight source. Domain-specific errors (config,
//! schema, service) live in their own crates and converge in `wv-cli`.

use thiserror::Error;

/// Errors that can be raised by any WagerVS crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A level outside the recognized 1..=4 range was supplied where a
    /// strict level is required.
    #[error("Invalid level: {0} (expected 1-4)")]
    InvalidLevel(i64),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
