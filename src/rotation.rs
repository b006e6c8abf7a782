//! Rotating vectors and coordinate frames with unit quaternions.
//!
//! A unit quaternion q = cos(θ/2) + sin(θ/2)·u encodes a rotation by θ about
//! the unit axis u. Two conventions are provided:
//!
//! - [`Quaternion::rotate_vector`] turns a point inside a fixed frame:
//!   v' = q v q*
//! - [`Quaternion::rotate_frame`] expresses the same point in a frame that has
//!   itself been turned by θ about u: v' = q* v q
//!
//! For the same q the two are inverse transforms of one another.
//!
//! Neither function normalizes `self`. Passing a non-unit quaternion scales
//! the result by |q|².

use crate::quaternion::Quaternion;
use nalgebra::Vector3;

impl Quaternion {
    /// Rotate `v` by this quaternion within the fixed (world) frame.
    ///
    /// Computes q * (0, v) * conj(q) and returns its imaginary part.
    pub fn rotate_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let u = Quaternion::pure(v);
        let w = *self * u * self.conj();
        w.imaginary()
    }

    /// Express `v` in a coordinate frame rotated by this quaternion.
    ///
    /// Computes conj(q) * (0, v) * q and returns its imaginary part.
    pub fn rotate_frame(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let u = Quaternion::pure(v);
        let w = self.conj() * u * *self;
        w.imaginary()
    }
}
