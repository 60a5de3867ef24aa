//! Perspective projection for cube-face cameras.

use crate::error::{HeadboxError, Result};
use crate::matrix::Matrix4;

/// Builds the clip-from-eye matrix for one cube face: a symmetric 90° field
/// of view frustum with `left = bottom = -near` and `right = top = near`,
/// in row-major OpenGL clip conventions.
///
/// Every face of every view group shares this matrix for a given clip pair.
///
/// # Errors
/// Returns [`HeadboxError::InvalidClipPlanes`] unless `0 < near < far`.
pub fn cube_face_projection(near: f64, far: f64) -> Result<Matrix4> {
    if near <= 0.0 || far <= near {
        return Err(HeadboxError::InvalidClipPlanes { near, far });
    }

    let (left, right) = (-near, near);
    let (bottom, top) = (-near, near);
    let a = 2.0 * near / (right - left);
    let b = 2.0 * near / (top - bottom);
    let c = (right + left) / (right - left);
    let d = (top + bottom) / (top - bottom);
    let e = (near + far) / (near - far);
    let f = 2.0 * near * far / (near - far);

    #[rustfmt::skip]
    let m = Matrix4::from_row_major([
        a, 0.0, c, 0.0,
        0.0, b, d, 0.0,
        0.0, 0.0, e, f,
        0.0, 0.0, -1.0, 0.0,
    ]);
    Ok(m)
}
