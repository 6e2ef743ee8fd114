//! Cross-cutting error types for symcheck.
//!
//! Domain-specific errors (`DatabaseError`, `LoadError`, `ConfigError`) are
//! defined in their respective crates. Binaries converge on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any symcheck crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tag column held a value outside its allowed set.
    #[error("Invalid {kind} '{value}' (expected one of: {allowed})")]
    InvalidTag {
        kind: &'static str,
        value: String,
        allowed: String,
    },

    /// Data failed validation (ranges, formats, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
