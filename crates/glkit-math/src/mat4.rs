//! 4x4 matrix type.
//!
//! [`Mat4`] is the GLSL `mat4`: model, view and projection transforms.
//! Storage is column-major, so the translation lives in column 3.
//!
//! # Usage
//!
//! ```rust
//! use glkit_math::{Mat4, Vec3, Vec4};
//!
//! let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
//! let p = t * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
//! ```

use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};

use crate::{Mat3, Vec3, Vec4};

/// A 4x4 matrix of `f32`, stored column-major (64 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Columns: [col0, col1, col2, col3]
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { cols: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self {
            cols: [
                [rows[0][0], rows[1][0], rows[2][0], rows[3][0]],
                [rows[0][1], rows[1][1], rows[2][1], rows[3][1]],
                [rows[0][2], rows[1][2], rows[2][2], rows[3][2]],
                [rows[0][3], rows[1][3], rows[2][3], rows[3][3]],
            ],
        }
    }

    /// Creates a matrix from [`Vec4`] columns.
    #[inline]
    pub const fn from_col_vecs(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Translation matrix.
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Non-uniform scale matrix.
    #[inline]
    pub const fn from_scale(s: Vec3) -> Self {
        Self::from_cols([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Embeds a [`Mat3`] as the upper-left block.
    #[inline]
    pub fn from_mat3(m: Mat3) -> Self {
        let c = m.cols;
        Self::from_cols([
            [c[0][0], c[0][1], c[0][2], 0.0],
            [c[1][0], c[1][1], c[1][2], 0.0],
            [c[2][0], c[2][1], c[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns a column as [`Vec4`].
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.cols[i])
    }

    /// Returns a row as [`Vec4`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i])
    }

    /// Flattens to 16 floats in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    /// Builds from 16 floats in column-major order.
    #[inline]
    pub fn from_cols_array(a: &[f32; 16]) -> Self {
        Self { cols: bytemuck::cast(*a) }
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.cols)
    }

    /// Transforms a [`Vec4`].
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z + self.col(3) * v.w
    }

    /// Transforms a point (`w = 1`), dropping `w` without perspective divide.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        self.transform(Vec4::from_vec3(p, 1.0)).truncate()
    }

    /// Transforms a direction (`w = 0`).
    #[inline]
    pub fn transform_vector3(&self, v: Vec3) -> Vec3 {
        self.transform(Vec4::from_vec3(v, 0.0)).truncate()
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_col_vecs(
            self.transform(other.col(0)),
            self.transform(other.col(1)),
            self.transform(other.col(2)),
            self.transform(other.col(3)),
        )
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.cols[i]
    }
}

#[cfg(feature = "glam")]
impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

#[cfg(feature = "glam")]
impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&m.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat4_translation() {
        let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat4_compose() {
        let s = Mat4::from_scale(Vec3::splat(2.0));
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        // Scale first, then translate
        let p = (t * s).transform_point3(Vec3::ONE);
        assert_eq!(p, Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_mat4_layout() {
        let m = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
        let flat = m.to_cols_array();
        assert_eq!(&flat[12..], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!(Mat4::from_cols_array(&flat), m);
        assert_eq!(m.transpose().col(3), Vec4::W);
    }

    #[test]
    fn test_mat4_from_mat3() {
        let m = Mat4::from_mat3(Mat3::scale(3.0));
        assert_eq!(m.transform_point3(Vec3::ONE), Vec3::splat(3.0));
    }
}
