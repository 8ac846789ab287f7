//! SIMD batch forms of the fast reciprocal square root.
//!
//! Uses the `wide` crate for portable SIMD on stable Rust. The integer
//! estimate is formed per lane, then the Newton step runs 4 or 8 lanes
//! at a time. Results match [`fast_inv_sqrt`](crate::fast::fast_inv_sqrt)
//! lane for lane.
//!
//! # Example
//!
//! ```rust
//! use glkit_math::simd::batch_fast_inv_sqrt;
//!
//! let values = [1.0, 4.0, 16.0, 64.0, 100.0, 0.25, 2.0, 9.0, 10000.0];
//! let result = batch_fast_inv_sqrt(&values);
//! assert!((result[1] - 0.5).abs() < 0.001);
//! assert_eq!(result.len(), values.len());
//! ```

use wide::{f32x4, f32x8};

use crate::Vec3;
use crate::fast::{INV_SQRT_MAGIC, fast_inv_sqrt};

#[inline(always)]
fn estimate(x: f32) -> f32 {
    f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1))
}

/// Approximate `1 / sqrt(x)` for 4 values.
///
/// # Example
///
/// ```rust
/// use glkit_math::simd::fast_inv_sqrt_x4;
///
/// let r = fast_inv_sqrt_x4(&[1.0, 4.0, 16.0, 64.0]);
/// assert!((r[3] - 0.125).abs() < 0.125 * 0.002);
/// ```
#[inline]
pub fn fast_inv_sqrt_x4(values: &[f32; 4]) -> [f32; 4] {
    let x = f32x4::from(*values);
    let y = f32x4::from(values.map(estimate));
    let half = f32x4::splat(0.5);
    let three_halves = f32x4::splat(1.5);
    (y * (three_halves - half * x * y * y)).to_array()
}

/// Approximate `1 / sqrt(x)` for 8 values.
#[inline]
pub fn fast_inv_sqrt_x8(values: &[f32; 8]) -> [f32; 8] {
    let x = f32x8::from(*values);
    let y = f32x8::from(values.map(estimate));
    let half = f32x8::splat(0.5);
    let three_halves = f32x8::splat(1.5);
    (y * (three_halves - half * x * y * y)).to_array()
}

/// Batch reciprocal square root for arbitrary-length slices.
///
/// Processes 8 values at a time, with scalar fallback for the remainder.
pub fn batch_fast_inv_sqrt(values: &[f32]) -> Vec<f32> {
    let mut result = values.to_vec();
    batch_fast_inv_sqrt_inplace(&mut result);
    result
}

/// Batch reciprocal square root in-place.
pub fn batch_fast_inv_sqrt_inplace(values: &mut [f32]) {
    let mut chunks = values.chunks_exact_mut(8);
    for chunk in &mut chunks {
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(chunk);
        chunk.copy_from_slice(&fast_inv_sqrt_x8(&lanes));
    }

    for v in chunks.into_remainder() {
        *v = fast_inv_sqrt(*v);
    }
}

/// Batch square root as `1 / fast_inv_sqrt(x)`.
pub fn batch_fast_sqrt(values: &[f32]) -> Vec<f32> {
    let mut result = batch_fast_inv_sqrt(values);
    for v in &mut result {
        *v = 1.0 / *v;
    }
    result
}

/// Normalizes a slice of vectors in-place with the fast kernel.
///
/// Zero-length (and non-finite) vectors become [`Vec3::ZERO`].
pub fn batch_fast_normalize(vectors: &mut [Vec3]) {
    let mut len_sq: Vec<f32> = vectors.iter().map(|v| v.length_squared()).collect();
    batch_fast_inv_sqrt_inplace(&mut len_sq);

    for (v, inv_len) in vectors.iter_mut().zip(len_sq) {
        let l2 = v.length_squared();
        *v = if l2 > 0.0 && l2.is_finite() { *v * inv_len } else { Vec3::ZERO };
    }
}
