//! # glkit-math
//!
//! Value types and fast scalar math for 3D graphics.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - `f32` vectors (GLSL `vec2..4`)
//! - [`IVec2`], [`IVec3`], [`IVec4`] - `i32` vectors (GLSL `ivec2..4`)
//! - [`Mat2`], [`Mat3`], [`Mat4`] - column-major `f32` matrices
//! - [`fast`] - approximate `inv_sqrt`, `exp`, `ln`, trig by bit tricks and series
//! - [`simd`] - batch reciprocal square root on `wide` lanes
//! - [`GlType`] - GL type descriptor per value type
//!
//! # Design
//!
//! Every value type is `#[repr(C)]` and [`bytemuck::Pod`]: its memory is a
//! packed run of 32-bit components, columns first for matrices. That layout
//! is exactly what `glUniformMatrix4fv(.., GL_FALSE, ..)` and the `glkit-io`
//! record format expect.
//!
//! ```rust
//! use glkit_math::{Mat4, Vec3, FastMath};
//!
//! let model = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
//! let dir = Vec3::new(1.0, 1.0, 0.0).fast_normalize();
//! let moved = model.transform_point3(dir);
//! assert!((moved.y - (1.0 + 0.5f32.fast_sqrt())).abs() < 1e-2);
//! ```
//!
//! # Feature Flags
//!
//! - `glam` (default) - `From` conversions to and from [`glam`] types
//! - `serde` - `Serialize`/`Deserialize` on all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod gltype;
mod ivec;
mod mat2;
mod mat3;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub mod fast;
pub mod simd;

pub use fast::FastMath;
pub use gltype::GlType;
pub use ivec::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
