//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{SVector, Vector2, Vector3};

use crate::constants::EPS;
use crate::errors::FieldlinesError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors.
pub type R2 = Vector2<Scalar>;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Returns the unit vector pointing along `v`.
///
/// Unlike `normalize`, a (numerically) zero-length input fails with
/// [`FieldlinesError::ZeroNorm`] instead of yielding NaN components.
pub fn unit<const D: usize>(v: &SVector<Scalar, D>) -> Result<SVector<Scalar, D>, FieldlinesError> {
    v.try_normalize(EPS).ok_or(FieldlinesError::ZeroNorm)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance<const D: usize>(a: &SVector<Scalar, D>, b: &SVector<Scalar, D>) -> Scalar {
    (b - a).norm()
}
