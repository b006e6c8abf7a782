//! Quaternion value type.
//!
//! A quaternion a + bi + cj + dk is stored as its four real coefficients. The
//! scalar (real) part is `a` and the vector (imaginary) part is `(b, c, d)`.
//!
//! Values are immutable: every operation returns a new quaternion and nothing
//! is cached, so angle, axis and norm are recomputed on each call.
//!
//! # Examples
//!
//! ```
//! use quaternions::Quaternion;
//!
//! let p = Quaternion::new(3.0, 1.0, -2.0, 1.0);
//! let q = Quaternion::new(2.0, -1.0, 2.0, 3.0);
//!
//! // Hamilton product is not commutative
//! assert_eq!(p * q, Quaternion::new(8.0, -9.0, -2.0, 11.0));
//! assert_ne!(p * q, q * p);
//! ```

use crate::error::{QuaternionError, QuaternionResult};
use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::debug;

/// A quaternion a + bi + cj + dk over `f64`.
///
/// Equality is exact and component-wise. Use [`Quaternion::is_approx`] when a
/// tolerance is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.a, self.b, self.c, self.d)
    }
}

impl Quaternion {
    /// Create a quaternion from its components.
    ///
    /// # Arguments
    /// * `a` - Real (scalar) part
    /// * `b` - i component
    /// * `c` - j component
    /// * `d` - k component
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The multiplicative identity 1 + 0i + 0j + 0k.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Embed a 3-vector as the pure quaternion (0, v).
    #[inline]
    pub fn pure(v: &Vector3<f64>) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Create a rotation quaternion from an axis and angle.
    ///
    /// # Arguments
    /// * `axis` - Rotation axis (normalized here, need not be unit length)
    /// * `angle` - Rotation angle in radians
    ///
    /// # Formula
    /// q = cos(θ/2) + sin(θ/2) * (ux*i + uy*j + uz*k)
    /// where (ux, uy, uz) is the normalized axis
    ///
    /// # Errors
    /// Returns [`QuaternionError::ZeroAxis`] when `axis` has zero norm.
    pub fn from_axis_angle(axis: &Vector3<f64>, angle: f64) -> QuaternionResult<Self> {
        let axis_norm = axis.norm();
        if axis_norm == 0.0 {
            debug!("Rejecting zero-length rotation axis for angle {}", angle);
            return Err(QuaternionError::ZeroAxis);
        }

        let unit = axis / axis_norm;
        let half_angle = angle / 2.0;
        let v = unit * half_angle.sin();

        Ok(Self::new(half_angle.cos(), v.x, v.y, v.z))
    }

    /// Get the scalar (real) component.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Get the i component.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Get the j component.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Get the k component.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The real part, same as [`Quaternion::a`].
    #[inline]
    pub fn real(&self) -> f64 {
        self.a
    }

    /// The imaginary part (b, c, d).
    #[inline]
    pub fn imaginary(&self) -> Vector3<f64> {
        Vector3::new(self.b, self.c, self.d)
    }

    /// All coefficients as an array [a, b, c, d].
    #[inline]
    pub fn coef(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Conjugate a - bi - cj - dk.
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Norm of the quaternion.
    ///
    /// Square root of the coefficient sum a + b + c + d of conj(q) * q. All four
    /// coefficients are summed, not only the scalar term.
    pub fn norm(&self) -> f64 {
        let p = self.conj() * *self;
        (p.a + p.b + p.c + p.d).sqrt()
    }

    /// Multiplicative inverse conj(q) / |q|².
    ///
    /// # Errors
    /// Returns [`QuaternionError::DivisionByZero`] when |q|² is exactly zero.
    pub fn inv(&self) -> QuaternionResult<Self> {
        let norm_sq = self.norm().powi(2);
        if norm_sq == 0.0 {
            debug!("Cannot invert zero-norm quaternion {}", self);
            return Err(QuaternionError::DivisionByZero);
        }

        Ok(Self::new(
            self.a / norm_sq,
            -self.b / norm_sq,
            -self.c / norm_sq,
            -self.d / norm_sq,
        ))
    }

    /// Right division self * other⁻¹.
    pub fn divide(&self, other: &Self) -> QuaternionResult<Self> {
        Ok(*self * other.inv()?)
    }

    /// Rotation angle 2·acos(a) in radians.
    ///
    /// Only meaningful for unit quaternions. If `a` lies outside [-1, 1] the
    /// result is NaN; the value is not clamped.
    pub fn angle(&self) -> f64 {
        2.0 * self.a.acos()
    }

    /// Rotation axis (b, c, d) / sin(angle / 2).
    ///
    /// Unguarded: when sin(angle / 2) is zero (angle 0 or 2π) the components are
    /// infinite or NaN. Use [`Quaternion::try_axis`] to get an error instead.
    pub fn axis(&self) -> Vector3<f64> {
        let t = self.angle();
        self.imaginary() / (t / 2.0).sin()
    }

    /// Rotation axis, failing where [`Quaternion::axis`] would be non-finite.
    ///
    /// # Errors
    /// Returns [`QuaternionError::SingularAxis`] when sin(angle / 2) is zero or
    /// the resulting axis is not finite.
    pub fn try_axis(&self) -> QuaternionResult<Vector3<f64>> {
        let angle = self.angle();
        let sin_half = (angle / 2.0).sin();
        if sin_half == 0.0 {
            return Err(QuaternionError::SingularAxis { angle });
        }

        let axis = self.imaginary() / sin_half;
        if axis.iter().all(|x| x.is_finite()) {
            Ok(axis)
        } else {
            Err(QuaternionError::SingularAxis { angle })
        }
    }

    /// Check if this is approximately equal to another quaternion.
    ///
    /// Every component must differ by less than `tolerance`.
    pub fn is_approx(&self, other: &Self, tolerance: f64) -> bool {
        self.coef()
            .iter()
            .zip(other.coef().iter())
            .all(|(x, y)| (x - y).abs() < tolerance)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(coef: [f64; 4]) -> Self {
        Self::new(coef[0], coef[1], coef[2], coef[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.coef()
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product.
    ///
    /// For p = (p0, **p**) and q = (q0, **q**):
    /// p * q = (p0·q0 - **p**·**q**, p0·**q** + q0·**p** + **p** × **q**)
    fn mul(self, other: Self) -> Self::Output {
        let p0 = self.a;
        let q0 = other.a;
        let p = self.imaginary();
        let q = other.imaginary();

        let a = p0 * q0 - p.dot(&q);
        let v = q * p0 + p * q0 + p.cross(&q);

        Self::new(a, v.x, v.y, v.z)
    }
}

// ============================================================================
// Tests
// ============================================================================
