//! Fast approximate scalar math.
//!
//! Every function here trades accuracy for speed: a bit trick or a
//! truncated power series instead of a libm call. The error bounds and
//! domains below are the contract. Inputs outside the documented domain
//! are not checked and give meaningless (but never panicking) results.
//!
//! # Error Bounds
//!
//! | Function | Domain | Typical error |
//! |----------|--------|---------------|
//! | [`fast_inv_sqrt`] | `x > 0`, finite | < 0.2% relative |
//! | [`fast_sqrt`] | `x > 0`, finite | < 0.2% relative |
//! | [`fast_pow`] | any `x`, `n >= 0` | exact repeated product |
//! | [`fast_exp`] | `[-1, 1]` | < 2e-3 absolute at the ends |
//! | [`fast_ln`] | `[0.5, 2]` | < 2e-5 absolute, ~0.08 at 10 |
//! | [`fast_sin`], [`fast_cos`] | `[-π, π]` | < 2e-3 absolute, diverges near ±2π |
//! | [`fast_tan`] | `[-π/4, π/4]` | < 1e-3 absolute |
//! | [`fast_asin`], [`fast_acos`] | `[-0.7, 0.7]` | < 1e-3 absolute, 0.25 at ±1 |
//! | [`fast_atan`] | `[-0.5, 0.5]` | < 4e-5 absolute, 0.05 at ±1 |
//!
//! The trig series are plain Taylor expansions around 0, not minimax fits,
//! so error grows monotonically toward the edges of `[-2π, 2π]`.
//!
//! # Usage
//!
//! ```rust
//! use glkit_math::fast::{fast_inv_sqrt, fast_sin};
//!
//! let r = fast_inv_sqrt(4.0);
//! assert!((r - 0.5).abs() < 0.5 * 0.002);
//!
//! let s = fast_sin(std::f32::consts::FRAC_PI_6);
//! assert!((s - 0.5).abs() < 1e-4);
//! ```

use std::f32::consts::FRAC_PI_2;

/// Natural logarithm of 2, used by the base-2 forms.
pub const LN_2: f32 = 0.69314718055994530941723212145818_f64 as f32;

/// Magic constant for the reciprocal square root estimate.
///
/// Lomont's refinement of the Quake III value; gives a slightly better
/// starting point for the Newton step than `0x5f3759df`.
pub const INV_SQRT_MAGIC: u32 = 0x5f37_5a86;

/// Approximate `1 / sqrt(x)`.
///
/// Reinterprets the bits of `x` as an integer, forms the estimate
/// `MAGIC - (bits >> 1)` and refines it with one Newton-Raphson step
/// `y * (1.5 - 0.5 * x * y * y)`.
///
/// `x` must be positive and finite. Zero, negatives, NaN and infinities
/// are not rejected and produce garbage.
///
/// # Example
///
/// ```rust
/// use glkit_math::fast::fast_inv_sqrt;
///
/// let exact = 1.0 / 100.0f32.sqrt();
/// assert!(((fast_inv_sqrt(100.0) - exact) / exact).abs() < 0.002);
/// ```
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let y = f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    newton_inv_sqrt(x, y)
}

/// One Newton-Raphson step for `1 / sqrt(x)` from estimate `y`.
#[inline(always)]
pub(crate) fn newton_inv_sqrt(x: f32, y: f32) -> f32 {
    y * (1.5 - 0.5 * x * y * y)
}

/// Approximate `sqrt(x)` as `1 / fast_inv_sqrt(x)`.
///
/// Same domain and relative error as [`fast_inv_sqrt`] (< 0.002 against
/// `x.sqrt()`). Compared with `x * fast_inv_sqrt(x)` the gap is up to
/// 2 × 0.002: the ratio of the two estimates is `x * y²`, which doubles
/// the error of `y`.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    1.0 / fast_inv_sqrt(x)
}

/// `x` raised to a non-negative integer power by repeated multiplication.
///
/// Performs exactly `n` multiplications; `n = 0` returns `1`.
///
/// # Example
///
/// ```rust
/// use glkit_math::fast::fast_pow;
///
/// assert_eq!(fast_pow(2.0, 10), 1024.0);
/// assert_eq!(fast_pow(-3.0, 3), -27.0);
/// assert_eq!(fast_pow(7.5, 0), 1.0);
/// ```
#[inline]
pub fn fast_pow(x: f32, n: u32) -> f32 {
    let mut result = 1.0;
    for _ in 0..n {
        result *= x;
    }
    result
}

/// Approximate `e^x` by the degree-5 Taylor polynomial around 0.
///
/// `1 + x + x²/2 + x³/6 + x⁴/24 + x⁵/120`. Good on `[-1, 1]`; not clamped
/// and quickly wrong outside it (`fast_exp(2.0)` is off by ~0.12).
#[inline]
pub fn fast_exp(x: f32) -> f32 {
    1.0 + x * (1.0 + x * (1.0 / 2.0 + x * (1.0 / 6.0 + x * (1.0 / 24.0 + x * (1.0 / 120.0)))))
}

/// Approximate natural logarithm.
///
/// Uses `ln(x) = 2·atanh(y)` with `y = (x - 1) / (x + 1)` and the first
/// four odd terms `2·(y + y³/3 + y⁵/5 + y⁷/7)`. Accurate near 1, drifting
/// as `x` moves away (about -0.08 at `x = 10`). Undefined for `x <= 0`.
#[inline]
pub fn fast_ln(x: f32) -> f32 {
    let y = (x - 1.0) / (x + 1.0);
    let y2 = y * y;
    2.0 * y * (1.0 + y2 * (1.0 / 3.0 + y2 * (1.0 / 5.0 + y2 * (1.0 / 7.0))))
}

/// Approximate logarithm of `x` in an arbitrary `base`.
///
/// `fast_ln(x) / fast_ln(base)`; both arguments carry the [`fast_ln`] error.
#[inline]
pub fn fast_log(x: f32, base: f32) -> f32 {
    fast_ln(x) / fast_ln(base)
}

/// Approximate `2^x` as `fast_exp(LN_2 * x)`. Good for `|x| <= 1.4`.
#[inline]
pub fn fast_exp2(x: f32) -> f32 {
    fast_exp(LN_2 * x)
}

/// Approximate `log2(x)` as `fast_ln(x) / LN_2`.
#[inline]
pub fn fast_log2(x: f32) -> f32 {
    fast_ln(x) / LN_2
}

/// Approximate sine, Taylor series through `x¹¹`.
///
/// Error at `π` is about `-4.5e-4`; past `±π` it grows fast and the
/// series is useless near `±2π`.
#[inline]
pub fn fast_sin(x: f32) -> f32 {
    let x2 = x * x;
    x * (1.0
        - x2 / 6.0
            * (1.0 - x2 / 20.0 * (1.0 - x2 / 42.0 * (1.0 - x2 / 72.0 * (1.0 - x2 / 110.0)))))
}

/// Approximate cosine, Taylor series through `x¹⁰`.
///
/// Error at `π` is about `-1.8e-3`.
#[inline]
pub fn fast_cos(x: f32) -> f32 {
    let x2 = x * x;
    1.0 - x2 / 2.0
        * (1.0 - x2 / 12.0 * (1.0 - x2 / 30.0 * (1.0 - x2 / 56.0 * (1.0 - x2 / 90.0))))
}

/// Approximate tangent, Taylor series through `x⁹`.
///
/// `x + x³/3 + 2x⁵/15 + 17x⁷/315 + 62x⁹/2835`. Usable on `[-π/4, π/4]`;
/// the series does not model the poles at `±π/2`.
#[inline]
pub fn fast_tan(x: f32) -> f32 {
    let x2 = x * x;
    x * (1.0 + x2 * (1.0 / 3.0 + x2 * (2.0 / 15.0 + x2 * (17.0 / 315.0 + x2 * (62.0 / 2835.0)))))
}

/// Approximate arcsine, Taylor series through `x⁹`.
///
/// `x + x³/6 + 3x⁵/40 + 15x⁷/336 + 105x⁹/3456`. Converges slowly near
/// `±1` (`fast_asin(1.0)` is ~0.25 short of `π/2`).
#[inline]
pub fn fast_asin(x: f32) -> f32 {
    let x2 = x * x;
    x * (1.0 + x2 * (1.0 / 6.0 + x2 * (3.0 / 40.0 + x2 * (15.0 / 336.0 + x2 * (105.0 / 3456.0)))))
}

/// Approximate arccosine as `π/2 - fast_asin(x)`.
#[inline]
pub fn fast_acos(x: f32) -> f32 {
    FRAC_PI_2 - fast_asin(x)
}

/// Approximate arctangent, Taylor series through `x⁹`.
///
/// `x - x³/3 + x⁵/5 - x⁷/7 + x⁹/9`. Only meaningful for `|x| < 1`.
#[inline]
pub fn fast_atan(x: f32) -> f32 {
    let x2 = x * x;
    x * (1.0 - x2 * (1.0 / 3.0 - x2 * (1.0 / 5.0 - x2 * (1.0 / 7.0 - x2 * (1.0 / 9.0)))))
}

/// Simplified two-argument arctangent.
///
/// Computes `sign(y) · sign(x) · |fast_atan(y / x)|`, with `sign(v)` being
/// `-1` for negative `v` and `+1` otherwise.
///
/// This is **not** a four-quadrant `atan2`. The result always lies in
/// `(-π/2, π/2)`, so `(1, -1)` and `(-1, 1)` both map to `-π/4` where
/// `atan2` gives `3π/4` and `-π/4`. Use `f32::atan2` when the quadrant
/// matters.
///
/// The domain is that of [`fast_atan`], `|y / x| < 1`: past it the series
/// diverges (`(2, 1)` gives about 44) and `x == 0` yields infinity or NaN.
#[inline]
pub fn fast_atan2(y: f32, x: f32) -> f32 {
    sign(y) * sign(x) * fast_atan(y / x).abs()
}

#[inline(always)]
fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Method-call access to the fast kernel on `f32`.
///
/// # Example
///
/// ```rust
/// use glkit_math::FastMath;
///
/// let half = 4.0f32.fast_inv_sqrt();
/// assert!((half - 0.5).abs() < 1e-3);
/// assert_eq!(3.0f32.fast_pow(2), 9.0);
/// ```
pub trait FastMath: Copy {
    /// See [`fast_inv_sqrt`].
    fn fast_inv_sqrt(self) -> Self;
    /// See [`fast_sqrt`].
    fn fast_sqrt(self) -> Self;
    /// See [`fast_pow`].
    fn fast_pow(self, n: u32) -> Self;
    /// See [`fast_exp`].
    fn fast_exp(self) -> Self;
    /// See [`fast_exp2`].
    fn fast_exp2(self) -> Self;
    /// See [`fast_ln`].
    fn fast_ln(self) -> Self;
    /// See [`fast_log`].
    fn fast_log(self, base: Self) -> Self;
    /// See [`fast_log2`].
    fn fast_log2(self) -> Self;
    /// See [`fast_sin`].
    fn fast_sin(self) -> Self;
    /// See [`fast_cos`].
    fn fast_cos(self) -> Self;
    /// See [`fast_tan`].
    fn fast_tan(self) -> Self;
    /// See [`fast_asin`].
    fn fast_asin(self) -> Self;
    /// See [`fast_acos`].
    fn fast_acos(self) -> Self;
    /// See [`fast_atan`].
    fn fast_atan(self) -> Self;
    /// See [`fast_atan2`]; `self` is `y`.
    fn fast_atan2(self, x: Self) -> Self;
}

impl FastMath for f32 {
    #[inline]
    fn fast_inv_sqrt(self) -> f32 {
        fast_inv_sqrt(self)
    }
    #[inline]
    fn fast_sqrt(self) -> f32 {
        fast_sqrt(self)
    }
    #[inline]
    fn fast_pow(self, n: u32) -> f32 {
        fast_pow(self, n)
    }
    #[inline]
    fn fast_exp(self) -> f32 {
        fast_exp(self)
    }
    #[inline]
    fn fast_exp2(self) -> f32 {
        fast_exp2(self)
    }
    #[inline]
    fn fast_ln(self) -> f32 {
        fast_ln(self)
    }
    #[inline]
    fn fast_log(self, base: f32) -> f32 {
        fast_log(self, base)
    }
    #[inline]
    fn fast_log2(self) -> f32 {
        fast_log2(self)
    }
    #[inline]
    fn fast_sin(self) -> f32 {
        fast_sin(self)
    }
    #[inline]
    fn fast_cos(self) -> f32 {
        fast_cos(self)
    }
    #[inline]
    fn fast_tan(self) -> f32 {
        fast_tan(self)
    }
    #[inline]
    fn fast_asin(self) -> f32 {
        fast_asin(self)
    }
    #[inline]
    fn fast_acos(self) -> f32 {
        fast_acos(self)
    }
    #[inline]
    fn fast_atan(self) -> f32 {
        fast_atan(self)
    }
    #[inline]
    fn fast_atan2(self, x: f32) -> f32 {
        fast_atan2(self, x)
    }
}
