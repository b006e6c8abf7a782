//! Error types for the quaternions library
//!
//! This module provides the main error and result types used throughout the library.
//! All errors use the `thiserror` crate for automatic trait implementations.

use thiserror::Error;

/// Main result type used throughout the quaternions library
pub type QuaternionResult<T> = Result<T, QuaternionError>;

/// Main error type for the quaternions library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuaternionError {
    /// Construction parameters matched neither the component form nor the axis-angle form
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inverse requested for a quaternion whose squared norm is exactly zero
    #[error("Division by zero is undefined")]
    DivisionByZero,

    /// Axis-angle construction with a zero-length rotation axis
    #[error("Rotation axis has zero norm and cannot be normalized")]
    ZeroAxis,

    /// Axis extraction where sin(angle / 2) vanishes
    #[error("Rotation axis is undefined for angle {angle}")]
    SingularAxis { angle: f64 },
}
