//! Immutable quaternion algebra and 3D rotation of vectors and frames.
//!
//! 3-vectors are `nalgebra::Vector3<f64>`.

pub mod builder;
pub mod error;
pub mod logger;
pub mod quaternion;
pub mod rotation;

pub use builder::{QuaternionBuilder, QuaternionParams};
pub use error::{QuaternionError, QuaternionResult};
pub use logger::{init_logger, init_logger_with_level};
pub use quaternion::Quaternion;
