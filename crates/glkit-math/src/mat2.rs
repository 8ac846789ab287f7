//! 2x2 matrix type (GLSL `mat2`), column-major.

use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};

use crate::Vec2;

/// A 2x2 matrix of `f32`, stored column-major (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2 {
    /// Columns: [col0, col1]
    pub cols: [[f32; 2]; 2],
}

impl Mat2 {
    /// Zero matrix.
    pub const ZERO: Self = Self { cols: [[0.0; 2]; 2] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self { cols: [[1.0, 0.0], [0.0, 1.0]] };

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 2]; 2]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 2]; 2]) -> Self {
        Self { cols: [[rows[0][0], rows[1][0]], [rows[0][1], rows[1][1]]] }
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([[c, s], [-s, c]])
    }

    /// Returns a column.
    #[inline]
    pub fn col(&self, i: usize) -> Vec2 {
        Vec2::from_array(self.cols[i])
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> Vec2 {
        Vec2::new(self.cols[0][i], self.cols[1][i])
    }

    /// Flattens to 4 floats in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 4] {
        bytemuck::cast(self.cols)
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.cols)
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.cols[0][0] * self.cols[1][1] - self.cols[1][0] * self.cols[0][1]
    }

    /// Inverse, or `None` when singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }
        let inv_det = 1.0 / det;
        let c = &self.cols;
        Some(Self::from_cols([
            [c[1][1] * inv_det, -c[0][1] * inv_det],
            [-c[1][0] * inv_det, c[0][0] * inv_det],
        ]))
    }

    /// Transforms a [`Vec2`].
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        self.col(0) * v.x + self.col(1) * v.y
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

impl Mul for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let c0 = self.transform(rhs.col(0));
        let c1 = self.transform(rhs.col(1));
        Self::from_cols([c0.to_array(), c1.to_array()])
    }
}

impl Index<usize> for Mat2 {
    type Output = [f32; 2];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 2] {
        &self.cols[i]
    }
}

#[cfg(feature = "glam")]
impl From<glam::Mat2> for Mat2 {
    #[inline]
    fn from(m: glam::Mat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

#[cfg(feature = "glam")]
impl From<Mat2> for glam::Mat2 {
    #[inline]
    fn from(m: Mat2) -> glam::Mat2 {
        glam::Mat2::from_cols_array_2d(&m.cols)
    }
}
