//! Error types for spline evaluation.

use thiserror::Error;

/// A specialized Result type for spline evaluation.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors reported by spline evaluation.
///
/// Mutation failures (duplicate x, missing removal target) are reported as
/// `false` return values, not through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Query point lies below the lowest knot, where no segment is defined.
    #[error("x {requested:.4} is below curve domain starting at {min:.4}")]
    OutOfDomain {
        /// The requested x coordinate.
        requested: f64,
        /// Lowest knot x of the curve.
        min: f64,
    },
}
