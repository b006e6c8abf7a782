//! Named-parameter construction of quaternions.
//!
//! [`QuaternionBuilder`] accepts either the four components `a, b, c, d` or a
//! rotation `angle` with an `axis`. Which form is built depends on which
//! parameters were supplied; any other combination is rejected.
//!
//! ```
//! use nalgebra::Vector3;
//! use quaternions::{Quaternion, QuaternionBuilder};
//!
//! let q = QuaternionBuilder::new()
//!     .with_a(1.0)
//!     .with_b(2.0)
//!     .with_c(3.0)
//!     .with_d(4.0)
//!     .build()?;
//! assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
//!
//! let r = QuaternionBuilder::new()
//!     .with_angle(std::f64::consts::PI)
//!     .with_axis(Vector3::new(0.0, 0.0, 1.0))
//!     .build()?;
//! assert!((r.angle() - std::f64::consts::PI).abs() < 1e-12);
//! # Ok::<(), quaternions::QuaternionError>(())
//! ```

use crate::error::{QuaternionError, QuaternionResult};
use crate::quaternion::Quaternion;
use nalgebra::Vector3;
use tracing::debug;

/// The two accepted parameter sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuaternionParams {
    /// All four coefficients a + bi + cj + dk
    Components { a: f64, b: f64, c: f64, d: f64 },
    /// Rotation by `angle` radians about `axis` (normalized on construction)
    AxisAngle { angle: f64, axis: Vector3<f64> },
}

impl QuaternionParams {
    /// Build the quaternion described by these parameters.
    pub fn build(&self) -> QuaternionResult<Quaternion> {
        match *self {
            QuaternionParams::Components { a, b, c, d } => Ok(Quaternion::new(a, b, c, d)),
            QuaternionParams::AxisAngle { angle, axis } => {
                Quaternion::from_axis_angle(&axis, angle)
            }
        }
    }
}

/// Collects optional named parameters and resolves them to a [`QuaternionParams`].
#[derive(Debug, Clone, Default)]
pub struct QuaternionBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    d: Option<f64>,
    angle: Option<f64>,
    axis: Option<Vector3<f64>>,
}

impl QuaternionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    pub fn with_b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }

    pub fn with_c(mut self, c: f64) -> Self {
        self.c = Some(c);
        self
    }

    pub fn with_d(mut self, d: f64) -> Self {
        self.d = Some(d);
        self
    }

    /// Rotation angle in radians.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Rotation axis; need not be unit length.
    pub fn with_axis(mut self, axis: Vector3<f64>) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Number of parameters that have been set.
    pub fn supplied(&self) -> usize {
        [self.a, self.b, self.c, self.d, self.angle]
            .iter()
            .filter(|p| p.is_some())
            .count()
            + usize::from(self.axis.is_some())
    }

    /// Resolve the supplied parameters to one of the two accepted forms.
    ///
    /// # Errors
    /// Returns [`QuaternionError::InvalidArgument`] unless exactly `a, b, c, d`
    /// or exactly `angle, axis` were supplied.
    pub fn params(&self) -> QuaternionResult<QuaternionParams> {
        match (self.a, self.b, self.c, self.d, self.angle, self.axis) {
            (Some(a), Some(b), Some(c), Some(d), None, None) => {
                Ok(QuaternionParams::Components { a, b, c, d })
            }
            (None, None, None, None, Some(angle), Some(axis)) => {
                Ok(QuaternionParams::AxisAngle { angle, axis })
            }
            _ => {
                let supplied = self.supplied();
                debug!("Rejecting quaternion construction with {} parameters", supplied);
                Err(QuaternionError::InvalidArgument(format!(
                    "expected either 4 component parameters (a, b, c, d) or 2 axis-angle \
                     parameters (angle, axis) but got {supplied}"
                )))
            }
        }
    }

    /// Build the quaternion.
    ///
    /// # Errors
    /// Returns [`QuaternionError::InvalidArgument`] for an unsupported parameter
    /// combination and [`QuaternionError::ZeroAxis`] for a zero-length axis.
    pub fn build(&self) -> QuaternionResult<Quaternion> {
        self.params()?.build()
    }
}

impl From<QuaternionParams> for QuaternionBuilder {
    fn from(params: QuaternionParams) -> Self {
        match params {
            QuaternionParams::Components { a, b, c, d } => Self::new()
                .with_a(a)
                .with_b(b)
                .with_c(c)
                .with_d(d),
            QuaternionParams::AxisAngle { angle, axis } => {
                Self::new().with_angle(angle).with_axis(axis)
            }
        }
    }
}
