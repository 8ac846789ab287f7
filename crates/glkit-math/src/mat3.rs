//! 3x3 matrix type.
//!
//! [`Mat3`] is the GLSL `mat3`: normal matrices, 2D affine transforms,
//! rotations.
//!
//! # Convention
//!
//! Matrices are stored **column-major** (as GL expects) and use
//! **column vectors**:
//!
//! ```text
//! | c0.x c1.x c2.x |   | x |
//! | c0.y c1.y c2.y | * | y |  =  c0 * x + c1 * y + c2 * z
//! | c0.z c1.z c2.z |   | z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use glkit_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ]);
//! assert_eq!(m.col(0), Vec3::new(1.0, 0.0, 5.0));
//! ```

use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// A 3x3 matrix of `f32`, stored column-major.
///
/// `cols[c][r]` is the element at row `r`, column `c`. The memory layout
/// (36 bytes) is column 0, column 1, column 2.
///
/// # Example
///
/// ```rust
/// use glkit_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Columns: [col0, col1, col2]
    pub cols: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { cols: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from row arrays (as written on paper).
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self {
            cols: [
                [rows[0][0], rows[1][0], rows[2][0]],
                [rows[0][1], rows[1][1], rows[2][1]],
                [rows[0][2], rows[1][2], rows[2][2]],
            ],
        }
    }

    /// Creates a matrix from [`Vec3`] columns.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_cols([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Creates a uniform scale matrix.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::diagonal(s, s, s)
    }

    /// Rotation about the Z axis by `angle` radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([
            [c, s, 0.0],
            [-s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Returns a column as [`Vec3`].
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.cols[i])
    }

    /// Returns a row as [`Vec3`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.cols[0][i], self.cols[1][i], self.cols[2][i])
    }

    /// Flattens to 9 floats in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 9] {
        bytemuck::cast(self.cols)
    }

    /// Builds from 9 floats in column-major order.
    #[inline]
    pub fn from_cols_array(a: &[f32; 9]) -> Self {
        Self { cols: bytemuck::cast(*a) }
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let c = &self.cols;
        Self::from_cols([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.col(0).dot(self.col(1).cross(self.col(2)))
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    ///
    /// # Example
    ///
    /// ```rust
    /// use glkit_math::Mat3;
    ///
    /// let m = Mat3::scale(2.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat3::scale(0.5));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));
        let inv_det = 1.0 / det;

        // Rows of the inverse are the cross products of column pairs
        let r0 = c1.cross(c2) * inv_det;
        let r1 = c2.cross(c0) * inv_det;
        let r2 = c0.cross(c1) * inv_det;
        Some(Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()]))
    }

    /// Transforms a [`Vec3`] by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_col_vecs(
            self.transform(other.col(0)),
            self.transform(other.col(1)),
            self.transform(other.col(2)),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_col_vecs(self.col(0) * rhs, self.col(1) * rhs, self.col(2) * rhs)
    }
}

// Indexes columns, matching GLSL `m[i]`
impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.cols[i]
    }
}

#[cfg(feature = "glam")]
impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

#[cfg(feature = "glam")]
impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&m.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_scale() {
        let m = Mat3::scale(2.0);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_mat3_rows_cols() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(m.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(1), Vec3::new(2.0, 5.0, 8.0));
        assert_eq!(m.to_cols_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);

        let t = m.transpose();
        assert_eq!(t.col(1), m.row(1));
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        assert!((m.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let inv = m.inverse().unwrap();
        let result = m * inv;

        for c in 0..3 {
            for r in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((result.cols[c][r] - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_rotation() {
        let m = Mat3::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let v = m * Vec3::X;
        assert!((v - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_mat3_mul_mat() {
        let c = Mat3::scale(2.0) * Mat3::scale(3.0);
        assert_eq!(c, Mat3::scale(6.0));
    }
}
