//! Error types for the math crate.

use thiserror::Error;

/// Errors from closed-form state computations.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MathError {
    /// Visibility parameter outside the unit interval.
    #[error("visibility {0} outside [0, 1]")]
    InvalidVisibility(f64),

    /// State vector is not normalized.
    #[error("state vector has norm {norm}, expected 1")]
    NotNormalized {
        /// The actual Euclidean norm.
        norm: f64,
    },

    /// Temperature must be positive and finite.
    #[error("temperature {0} must be positive and finite")]
    InvalidTemperature(f64),

    /// Basis state index exceeds the space dimension.
    #[error("basis index {index} out of range for dimension {dim}")]
    InvalidBasisIndex {
        /// Requested basis index.
        index: usize,
        /// Dimension of the space.
        dim: usize,
    },

    /// Dimension or grid must be non-empty.
    #[error("dimension must be at least 1")]
    ZeroDimension,
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;
