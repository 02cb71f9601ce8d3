//! Free 3D vectors: displacements, velocities, accelerations and forces
//!
//! A [`Vector`] is an immutable wrapper around an nalgebra [`Vector3`]. Its
//! magnitude is computed once when the vector is built and every operation
//! hands back a fresh value, so the cached norm can never drift from the
//! components.
//!
//! # Usage
//! ```
//! use freefall_core::core_types::Vector;
//!
//! let a = Vector::new(1.0, 0.0, 0.0);
//! let b = Vector::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(&b), Vector::new(0.0, 0.0, 1.0));
//! assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
//! ```

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::error::GeometryError;
use super::matrix::{self, TransformMatrix};

/// Coordinate rounded to 3 decimal places for display
///
/// Rounding works on the exact decimal expansion of the value, trailing zeros
/// are dropped and `-0` is folded into `0`. Huge values print every integer
/// digit instead of overflowing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rounded(pub(crate) f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.3}", self.0);
        // NaN and infinities come back without a decimal point
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        if text == "-0" {
            f.write_str("0")
        } else {
            f.write_str(text)
        }
    }
}

/// Euclidean norm that neither underflows nor overflows on squaring
fn stable_norm(v: &Vector3<f64>) -> f64 {
    let scale = v.amax();
    if scale == 0.0 || !scale.is_finite() {
        return v.norm();
    }
    scale * (v / scale).norm()
}

/// 3-component vector with a cached Euclidean magnitude
///
/// The magnitude is `sqrt(i² + j² + k²)`, taken after rescaling by the largest
/// component so that very small or very large components stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector {
    inner: Vector3<f64>,
    magnitude: f64,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Vector = Vector {
        inner: Vector3::new(0.0, 0.0, 0.0),
        magnitude: 0.0,
    };

    /// Create a vector from its three components
    #[inline]
    #[must_use]
    pub fn new(i: f64, j: f64, k: f64) -> Self {
        Vector3::new(i, j, k).into()
    }

    /// Component along x
    #[inline]
    pub fn i(&self) -> f64 {
        self.inner.x
    }

    /// Component along y
    #[inline]
    pub fn j(&self) -> f64 {
        self.inner.y
    }

    /// Component along z
    #[inline]
    pub fn k(&self) -> f64 {
        self.inner.z
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Components as an `(i, j, k)` tuple
    #[inline]
    pub fn ijk(&self) -> (f64, f64, f64) {
        (self.inner.x, self.inner.y, self.inner.z)
    }

    /// Component-wise sum
    #[must_use]
    pub fn add_vector(&self, other: &Vector) -> Vector {
        (self.inner + other.inner).into()
    }

    /// Component-wise difference `self - other`
    #[must_use]
    pub fn subtract_vector(&self, other: &Vector) -> Vector {
        (self.inner - other.inner).into()
    }

    /// Multiply every component by the same scalar
    #[must_use]
    pub fn scale_uniform(&self, factor: f64) -> Vector {
        (self.inner * factor).into()
    }

    /// Element-wise (Hadamard) product, `(i·i′, j·j′, k·k′)`
    ///
    /// This is not a dot product; the result is a vector.
    #[must_use]
    pub fn scale_elementwise(&self, factors: &Vector) -> Vector {
        self.inner.component_mul(&factors.inner).into()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector) -> f64 {
        self.inner.dot(&other.inner)
    }

    /// Right-handed cross product `self × other`
    #[must_use]
    pub fn cross(&self, other: &Vector) -> Vector {
        self.inner.cross(&other.inner).into()
    }

    /// Apply a row-major 3×3 matrix, treating `self` as a column vector
    #[must_use]
    pub fn transform(&self, matrix: &TransformMatrix) -> Vector {
        (matrix::to_matrix3(matrix) * self.inner).into()
    }

    /// Apply a matrix given as dynamically sized rows
    ///
    /// # Errors
    /// Returns [`GeometryError::DimensionMismatch`] if `rows` is not 3×3.
    pub fn linear_transform<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vector, GeometryError> {
        let matrix = matrix::from_rows(rows)?;
        Ok(self.transform(&matrix))
    }

    /// Signed length of `self` along the direction of `onto`
    ///
    /// # Errors
    /// Returns [`GeometryError::DivisionByZero`] if `onto` has zero magnitude.
    pub fn scalar_projection_on(&self, onto: &Vector) -> Result<f64, GeometryError> {
        if onto.magnitude == 0.0 {
            return Err(GeometryError::DivisionByZero {
                operation: "scalar projection",
            });
        }
        Ok(self.dot(onto) / onto.magnitude)
    }

    /// Component of `self` lying along the line through `onto`
    ///
    /// Computed as `onto` uniformly scaled by `dot(self, onto) / |onto|²`.
    /// `|onto|` is divided out twice instead of squared; squaring underflows for
    /// very short reference vectors.
    ///
    /// # Errors
    /// Returns [`GeometryError::DivisionByZero`] if `onto` has zero magnitude.
    pub fn vector_projection_on(&self, onto: &Vector) -> Result<Vector, GeometryError> {
        if onto.magnitude == 0.0 {
            return Err(GeometryError::DivisionByZero {
                operation: "vector projection",
            });
        }
        let factor = self.dot(onto) / onto.magnitude / onto.magnitude;
        Ok(onto.scale_uniform(factor))
    }

    /// Rotate about the x, y and z axes (radians)
    ///
    /// The three axis rotations are composed as `Rz · Ry · Rx`, so the x rotation
    /// is applied first. See [`matrix::rotation`] for the sign convention.
    #[must_use]
    pub fn rotate(&self, theta_x: f64, theta_y: f64, theta_z: f64) -> Vector {
        (matrix::rotation(theta_x, theta_y, theta_z) * self.inner).into()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::ZERO
    }
}

impl From<[f64; 3]> for Vector {
    fn from(components: [f64; 3]) -> Self {
        Vector3::from(components).into()
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> [f64; 3] {
        v.inner.into()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(inner: Vector3<f64>) -> Self {
        Vector {
            magnitude: stable_norm(&inner),
            inner,
        }
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Vector3<f64> {
        v.inner
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        self.add_vector(&rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        self.subtract_vector(&rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        (-self.inner).into()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale_uniform(rhs)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Rounded(self.inner.x),
            Rounded(self.inner.y),
            Rounded(self.inner.z)
        )
    }
}
