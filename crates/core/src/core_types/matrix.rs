//! 3×3 transform operands
//!
//! The algebra deliberately has no matrix type of its own. A transform is a bare
//! row-major `[[f64; 3]; 3]`. Products are handed to nalgebra, and
//! [`Vector::rotate`](crate::core_types::Vector::rotate) applies a [`Rotation3`]
//! directly.

use nalgebra::{Matrix3, Rotation3};

use super::error::GeometryError;

/// Row-major 3×3 matrix applied to a column vector
pub type TransformMatrix = [[f64; 3]; 3];

/// The identity transform
pub const IDENTITY: TransformMatrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Build a transform from dynamically sized rows
///
/// # Errors
/// Returns [`GeometryError::DimensionMismatch`] unless `rows` holds exactly
/// three rows of exactly three values each.
pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<TransformMatrix, GeometryError> {
    let bad_row = rows.iter().map(AsRef::<[f64]>::as_ref).find(|row| row.len() != 3);
    if rows.len() != 3 || bad_row.is_some() {
        return Err(GeometryError::DimensionMismatch {
            rows: rows.len(),
            columns: bad_row.map_or(3, <[f64]>::len),
        });
    }

    let mut matrix = [[0.0; 3]; 3];
    for (target, row) in matrix.iter_mut().zip(rows) {
        target.copy_from_slice(row.as_ref());
    }
    Ok(matrix)
}

/// Composed right-handed rotation `Rz(θz) · Ry(θy) · Rx(θx)`
///
/// Applied to a column vector, the x rotation happens first and the z rotation
/// last. Angles are in radians, positive angles rotate counter-clockwise when
/// looking down the axis towards the origin, so a quarter turn about y takes
/// `+x` to `-z`.
pub fn rotation(theta_x: f64, theta_y: f64, theta_z: f64) -> Rotation3<f64> {
    Rotation3::from_euler_angles(theta_x, theta_y, theta_z)
}

/// Row-major form of [`rotation`]
pub fn rotation_matrix(theta_x: f64, theta_y: f64, theta_z: f64) -> TransformMatrix {
    // nalgebra converts column by column
    rotation(theta_x, theta_y, theta_z).matrix().transpose().into()
}

/// View a row-major transform as an nalgebra matrix
#[inline]
pub(crate) fn to_matrix3(matrix: &TransformMatrix) -> Matrix3<f64> {
    Matrix3::from_fn(|r, c| matrix[r][c])
}
