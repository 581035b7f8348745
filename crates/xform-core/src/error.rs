//! Error types for xform operations.
//!
//! The transform kernel is a low-level numeric primitive: almost every
//! operation propagates IEEE-754 semantics (NaN, infinities) without
//! validation. The single explicit failure is inverting a matrix whose
//! determinant is exactly zero.
//!
//! # Usage
//!
//! ```rust
//! use xform_core::{Error, Result};
//!
//! fn reciprocal_det(det: f32) -> Result<f32> {
//!     if det == 0.0 {
//!         return Err(Error::singular_matrix(det));
//!     }
//!     Ok(1.0 / det)
//! }
//!
//! assert!(reciprocal_det(0.0).is_err());
//! ```
//!
//! # Used By
//!
//! - `xform-math` - 4x4 inversion and normal matrices
//! - `xform-scene` - wrapped in `SceneError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the transform kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The matrix cannot be inverted because its determinant is exactly zero.
    ///
    /// Near-singular matrices are *not* reported; they invert to large or
    /// non-finite values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_core::Error;
    ///
    /// let err = Error::singular_matrix(0.0);
    /// assert!(err.is_singular());
    /// assert!(err.to_string().contains("determinant"));
    /// ```
    #[error("can't invert matrix, determinant is {determinant}")]
    SingularMatrix {
        /// Determinant computed from the cofactor expansion
        determinant: f32,
    },

    /// An argument had the wrong shape for the operation.
    ///
    /// Only produced by convenience constructors taking runtime-length
    /// input, never by the per-frame numeric paths.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}
