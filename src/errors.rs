//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FieldlinesError {
    /// Raised when a zero-length vector is normalized.
    #[error("cannot normalize a vector of zero length")]
    ZeroNorm,
    /// Raised when a magnetic scene holds a charge that is not a unit monopole.
    #[error("magnetic fields require unit charges, found |q| = {magnitude} at index {index}")]
    MagneticChargeMagnitude {
        /// Position of the offending charge in the scene's charge list.
        index: usize,
        /// Magnitude of the offending charge.
        magnitude: f64,
    },
}
