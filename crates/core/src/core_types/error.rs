//! Error type for the vector/point algebra
//!
//! Every fallible geometric operation returns [`GeometryError`]. Nothing in the
//! algebra recovers from these internally; they propagate straight to the caller
//! instead of surfacing later as NaN or infinity.

use std::fmt;

/// Failure of a geometric operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A projection was requested onto a vector with zero magnitude
    DivisionByZero {
        /// Name of the operation that would have divided by zero
        operation: &'static str,
    },
    /// A transform matrix was not exactly 3 rows of 3 columns
    DimensionMismatch {
        /// Number of rows supplied
        rows: usize,
        /// Length of the first row that was not 3 wide (or 3 if all rows were)
        columns: usize,
    },
    /// A collision-zone extent was negative or not finite
    InvalidExtent {
        /// Which extent was rejected (`"width"`, `"height"` or `"depth"`)
        dimension: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}: reference vector has zero magnitude")
            }
            GeometryError::DimensionMismatch { rows, columns } => {
                write!(f, "Transform matrix must be 3x3, got {rows}x{columns}")
            }
            GeometryError::InvalidExtent { dimension, value } => {
                write!(
                    f,
                    "Collision zone {dimension} must be finite and non-negative, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}
