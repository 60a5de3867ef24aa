//! Row-major 4x4 matrices in the manifest wire layout.
//!
//! The bake tool consumes matrices as flat arrays of 16 numbers in row-major
//! order, so that layout is the canonical representation here. [`Matrix4`]
//! serializes transparently as such an array; [`Matrix4::to_dmat4`] and
//! [`Matrix4::from_dmat4`] bridge to glam's column-major [`DMat4`] for
//! callers that want to compose transforms.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A 4x4 transform stored as 16 values in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix4([f64; 16]);

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Creates a matrix from 16 values in row-major order.
    #[must_use]
    pub const fn from_row_major(values: [f64; 16]) -> Self {
        Self(values)
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub const fn to_row_major(self) -> [f64; 16] {
        self.0
    }

    /// Returns the entry at (row, col).
    #[must_use]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.0[4 * row + col]
    }

    /// Returns the translation column (entries 3, 7 and 11).
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        DVec3::new(self.0[3], self.0[7], self.0[11])
    }

    /// Returns a copy with the translation column replaced.
    #[must_use]
    pub fn with_translation(self, translation: DVec3) -> Self {
        let mut m = self.0;
        m[3] = translation.x;
        m[7] = translation.y;
        m[11] = translation.z;
        Self(m)
    }

    /// Transforms a 3D point, treating it as homogeneous with `w = 1` and
    /// dividing by the resulting `w` component.
    ///
    /// This is the row-major composition rule
    /// `result[row] = sum_col M[row][col] * v[col] + M[row][3]`.
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        let m = &self.0;
        let x = m[0] * point.x + m[1] * point.y + m[2] * point.z + m[3];
        let y = m[4] * point.x + m[5] * point.y + m[6] * point.z + m[7];
        let z = m[8] * point.x + m[9] * point.y + m[10] * point.z + m[11];
        let w = m[12] * point.x + m[13] * point.y + m[14] * point.z + m[15];
        DVec3::new(x / w, y / w, z / w)
    }

    /// Converts to a glam matrix (glam stores columns, so this transposes).
    #[must_use]
    pub fn to_dmat4(self) -> DMat4 {
        DMat4::from_cols_array(&self.0).transpose()
    }

    /// Creates a row-major matrix from a glam matrix.
    #[must_use]
    pub fn from_dmat4(m: DMat4) -> Self {
        Self(m.transpose().to_cols_array())
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
