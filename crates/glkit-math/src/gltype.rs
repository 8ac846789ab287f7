//! Binds each value type to its GL type descriptor.
//!
//! ```rust
//! use glkit_math::{GlType, Mat3, Vec4};
//!
//! assert_eq!(Vec4::DESC.glsl_name, "vec4");
//! assert_eq!(Mat3::DESC.byte_size(), 36);
//! ```

use glkit_core::gl::{self, BaseType, GlTypeDesc};

use crate::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// A value type with a fixed GLSL counterpart.
pub trait GlType {
    /// Descriptor of the matching GLSL type.
    const DESC: GlTypeDesc;
}

macro_rules! impl_gl_type {
    ($($t:ty => $base:ident, $cols:literal, $rows:literal, $code:ident, $name:literal;)+) => {
        $(
            impl GlType for $t {
                const DESC: GlTypeDesc = GlTypeDesc::new(BaseType::$base, $cols, $rows, gl::$code, $name);
            }
        )+
    };
}

impl_gl_type! {
    f32 => Float, 1, 1, FLOAT, "float";
    i32 => Int, 1, 1, INT, "int";
    Vec2 => Float, 1, 2, FLOAT_VEC2, "vec2";
    Vec3 => Float, 1, 3, FLOAT_VEC3, "vec3";
    Vec4 => Float, 1, 4, FLOAT_VEC4, "vec4";
    IVec2 => Int, 1, 2, INT_VEC2, "ivec2";
    IVec3 => Int, 1, 3, INT_VEC3, "ivec3";
    IVec4 => Int, 1, 4, INT_VEC4, "ivec4";
    Mat2 => Float, 2, 2, FLOAT_MAT2, "mat2";
    Mat3 => Float, 3, 3, FLOAT_MAT3, "mat3";
    Mat4 => Float, 4, 4, FLOAT_MAT4, "mat4";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<T: GlType>() {
        let table = GlTypeDesc::lookup(T::DESC.gl_enum).expect("code missing from table");
        assert_eq!(*table, T::DESC);
        assert_eq!(T::DESC.byte_size(), std::mem::size_of::<T>());
    }

    #[test]
    fn test_descriptors_match_table_and_layout() {
        check::<f32>();
        check::<i32>();
        check::<Vec2>();
        check::<Vec3>();
        check::<Vec4>();
        check::<IVec2>();
        check::<IVec3>();
        check::<IVec4>();
        check::<Mat2>();
        check::<Mat3>();
        check::<Mat4>();
    }
}
