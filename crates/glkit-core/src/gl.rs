//! GL type metadata for shader attribute and uniform binding.
//!
//! This module is a static lookup table: the OpenGL enum codes for every
//! scalar, vector and matrix type a GLSL program can declare, plus a
//! descriptor tying each code to its base type and shape.
//!
//! # Types
//!
//! - [`BaseType`] - Scalar component type (bool, int, uint, float, double)
//! - [`GlTypeDesc`] - Shape, size and enum code of one GLSL type
//!
//! # Usage
//!
//! ```rust
//! use glkit_core::gl::{self, BaseType, GlTypeDesc};
//!
//! let mat4 = GlTypeDesc::lookup(gl::FLOAT_MAT4).unwrap();
//! assert_eq!(mat4.base, BaseType::Float);
//! assert_eq!(mat4.components(), 16);
//! assert_eq!(mat4.byte_size(), 64);
//! assert_eq!(mat4.glsl_name, "mat4");
//! ```

// Scalars
/// `GL_BOOL`
pub const BOOL: u32 = 0x8B56;
/// `GL_INT`
pub const INT: u32 = 0x1404;
/// `GL_UNSIGNED_INT`
pub const UNSIGNED_INT: u32 = 0x1405;
/// `GL_FLOAT`
pub const FLOAT: u32 = 0x1406;
/// `GL_DOUBLE`
pub const DOUBLE: u32 = 0x140A;

// Vectors
/// `GL_BOOL_VEC2`
pub const BOOL_VEC2: u32 = 0x8B57;
/// `GL_BOOL_VEC3`
pub const BOOL_VEC3: u32 = 0x8B58;
/// `GL_BOOL_VEC4`
pub const BOOL_VEC4: u32 = 0x8B59;
/// `GL_INT_VEC2`
pub const INT_VEC2: u32 = 0x8B53;
/// `GL_INT_VEC3`
pub const INT_VEC3: u32 = 0x8B54;
/// `GL_INT_VEC4`
pub const INT_VEC4: u32 = 0x8B55;
/// `GL_UNSIGNED_INT_VEC2`
pub const UNSIGNED_INT_VEC2: u32 = 0x8DC6;
/// `GL_UNSIGNED_INT_VEC3`
pub const UNSIGNED_INT_VEC3: u32 = 0x8DC7;
/// `GL_UNSIGNED_INT_VEC4`
pub const UNSIGNED_INT_VEC4: u32 = 0x8DC8;
/// `GL_FLOAT_VEC2`
pub const FLOAT_VEC2: u32 = 0x8B50;
/// `GL_FLOAT_VEC3`
pub const FLOAT_VEC3: u32 = 0x8B51;
/// `GL_FLOAT_VEC4`
pub const FLOAT_VEC4: u32 = 0x8B52;
/// `GL_DOUBLE_VEC2`
pub const DOUBLE_VEC2: u32 = 0x8FFC;
/// `GL_DOUBLE_VEC3`
pub const DOUBLE_VEC3: u32 = 0x8FFD;
/// `GL_DOUBLE_VEC4`
pub const DOUBLE_VEC4: u32 = 0x8FFE;

// Float matrices
/// `GL_FLOAT_MAT2`
pub const FLOAT_MAT2: u32 = 0x8B5A;
/// `GL_FLOAT_MAT3`
pub const FLOAT_MAT3: u32 = 0x8B5B;
/// `GL_FLOAT_MAT4`
pub const FLOAT_MAT4: u32 = 0x8B5C;
/// `GL_FLOAT_MAT2x3`
pub const FLOAT_MAT2X3: u32 = 0x8B65;
/// `GL_FLOAT_MAT2x4`
pub const FLOAT_MAT2X4: u32 = 0x8B66;
/// `GL_FLOAT_MAT3x2`
pub const FLOAT_MAT3X2: u32 = 0x8B67;
/// `GL_FLOAT_MAT3x4`
pub const FLOAT_MAT3X4: u32 = 0x8B68;
/// `GL_FLOAT_MAT4x2`
pub const FLOAT_MAT4X2: u32 = 0x8B69;
/// `GL_FLOAT_MAT4x3`
pub const FLOAT_MAT4X3: u32 = 0x8B6A;

// Double matrices
/// `GL_DOUBLE_MAT2`
pub const DOUBLE_MAT2: u32 = 0x8F46;
/// `GL_DOUBLE_MAT3`
pub const DOUBLE_MAT3: u32 = 0x8F47;
/// `GL_DOUBLE_MAT4`
pub const DOUBLE_MAT4: u32 = 0x8F48;
/// `GL_DOUBLE_MAT2x3`
pub const DOUBLE_MAT2X3: u32 = 0x8F49;
/// `GL_DOUBLE_MAT2x4`
pub const DOUBLE_MAT2X4: u32 = 0x8F4A;
/// `GL_DOUBLE_MAT3x2`
pub const DOUBLE_MAT3X2: u32 = 0x8F4B;
/// `GL_DOUBLE_MAT3x4`
pub const DOUBLE_MAT3X4: u32 = 0x8F4C;
/// `GL_DOUBLE_MAT4x2`
pub const DOUBLE_MAT4X2: u32 = 0x8F4D;
/// `GL_DOUBLE_MAT4x3`
pub const DOUBLE_MAT4X3: u32 = 0x8F4E;

/// Scalar component type of a GLSL value.
///
/// # Variants
///
/// - `Bool` - 32-bit boolean as GL stores it in uniforms
/// - `Int` / `UInt` - 32-bit signed / unsigned integer
/// - `Float` - 32-bit IEEE 754 (the default)
/// - `Double` - 64-bit IEEE 754
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseType {
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UInt,
    /// 32-bit float.
    #[default]
    Float,
    /// 64-bit float.
    Double,
}

impl BaseType {
    /// Bytes per component.
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        match self {
            Self::Bool | Self::Int | Self::UInt | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Whether this is a floating-point type.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Whether this is an integer type (bool counts as integer).
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// GL enum of the scalar type, as passed to `glVertexAttribPointer`.
    #[inline]
    pub const fn gl_enum(&self) -> u32 {
        match self {
            Self::Bool => BOOL,
            Self::Int => INT,
            Self::UInt => UNSIGNED_INT,
            Self::Float => FLOAT,
            Self::Double => DOUBLE,
        }
    }

    /// GLSL keyword of the scalar type.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Descriptor of one GLSL scalar, vector or matrix type.
///
/// Vectors are `columns = 1`, `rows = N`. Matrices follow GLSL naming:
/// `mat2x3` has 2 columns of 3 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlTypeDesc {
    /// Scalar component type.
    pub base: BaseType,
    /// Number of columns (1 for scalars and vectors).
    pub columns: u8,
    /// Number of rows (components per column).
    pub rows: u8,
    /// GL enum code reported by `glGetActiveUniform`.
    pub gl_enum: u32,
    /// GLSL type name.
    pub glsl_name: &'static str,
}

impl GlTypeDesc {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(base: BaseType, columns: u8, rows: u8, gl_enum: u32, glsl_name: &'static str) -> Self {
        Self { base, columns, rows, gl_enum, glsl_name }
    }

    /// Total number of scalar components.
    #[inline]
    pub const fn components(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Tightly packed size in bytes (no std140 padding).
    #[inline]
    pub const fn byte_size(&self) -> usize {
        self.components() * self.base.size_bytes()
    }

    /// Whether this describes a matrix.
    #[inline]
    pub const fn is_matrix(&self) -> bool {
        self.columns > 1
    }

    /// Whether this describes a single scalar.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        self.columns == 1 && self.rows == 1
    }

    /// Finds the descriptor for a GL enum code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glkit_core::gl::{self, GlTypeDesc};
    ///
    /// let v = GlTypeDesc::lookup(gl::INT_VEC3).unwrap();
    /// assert_eq!(v.glsl_name, "ivec3");
    /// assert!(GlTypeDesc::lookup(0xDEAD).is_none());
    /// ```
    pub fn lookup(gl_enum: u32) -> Option<&'static Self> {
        TYPE_TABLE.iter().find(|d| d.gl_enum == gl_enum)
    }

    /// Finds the descriptor for a GLSL type name (`"vec3"`, `"dmat4x2"`, ...).
    pub fn by_name(name: &str) -> Option<&'static Self> {
        TYPE_TABLE.iter().find(|d| d.glsl_name == name)
    }

    /// All known descriptors.
    pub fn all() -> &'static [Self] {
        TYPE_TABLE
    }
}

impl std::fmt::Display for GlTypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:04X})", self.glsl_name, self.gl_enum)
    }
}

use BaseType::{Bool as B, Double as D, Float as F, Int as I, UInt as U};

static TYPE_TABLE: &[GlTypeDesc] = &[
    GlTypeDesc::new(B, 1, 1, BOOL, "bool"),
    GlTypeDesc::new(B, 1, 2, BOOL_VEC2, "bvec2"),
    GlTypeDesc::new(B, 1, 3, BOOL_VEC3, "bvec3"),
    GlTypeDesc::new(B, 1, 4, BOOL_VEC4, "bvec4"),
    GlTypeDesc::new(I, 1, 1, INT, "int"),
    GlTypeDesc::new(I, 1, 2, INT_VEC2, "ivec2"),
    GlTypeDesc::new(I, 1, 3, INT_VEC3, "ivec3"),
    GlTypeDesc::new(I, 1, 4, INT_VEC4, "ivec4"),
    GlTypeDesc::new(U, 1, 1, UNSIGNED_INT, "uint"),
    GlTypeDesc::new(U, 1, 2, UNSIGNED_INT_VEC2, "uvec2"),
    GlTypeDesc::new(U, 1, 3, UNSIGNED_INT_VEC3, "uvec3"),
    GlTypeDesc::new(U, 1, 4, UNSIGNED_INT_VEC4, "uvec4"),
    GlTypeDesc::new(F, 1, 1, FLOAT, "float"),
    GlTypeDesc::new(F, 1, 2, FLOAT_VEC2, "vec2"),
    GlTypeDesc::new(F, 1, 3, FLOAT_VEC3, "vec3"),
    GlTypeDesc::new(F, 1, 4, FLOAT_VEC4, "vec4"),
    GlTypeDesc::new(D, 1, 1, DOUBLE, "double"),
    GlTypeDesc::new(D, 1, 2, DOUBLE_VEC2, "dvec2"),
    GlTypeDesc::new(D, 1, 3, DOUBLE_VEC3, "dvec3"),
    GlTypeDesc::new(D, 1, 4, DOUBLE_VEC4, "dvec4"),
    GlTypeDesc::new(F, 2, 2, FLOAT_MAT2, "mat2"),
    GlTypeDesc::new(F, 3, 3, FLOAT_MAT3, "mat3"),
    GlTypeDesc::new(F, 4, 4, FLOAT_MAT4, "mat4"),
    GlTypeDesc::new(F, 2, 3, FLOAT_MAT2X3, "mat2x3"),
    GlTypeDesc::new(F, 2, 4, FLOAT_MAT2X4, "mat2x4"),
    GlTypeDesc::new(F, 3, 2, FLOAT_MAT3X2, "mat3x2"),
    GlTypeDesc::new(F, 3, 4, FLOAT_MAT3X4, "mat3x4"),
    GlTypeDesc::new(F, 4, 2, FLOAT_MAT4X2, "mat4x2"),
    GlTypeDesc::new(F, 4, 3, FLOAT_MAT4X3, "mat4x3"),
    GlTypeDesc::new(D, 2, 2, DOUBLE_MAT2, "dmat2"),
    GlTypeDesc::new(D, 3, 3, DOUBLE_MAT3, "dmat3"),
    GlTypeDesc::new(D, 4, 4, DOUBLE_MAT4, "dmat4"),
    GlTypeDesc::new(D, 2, 3, DOUBLE_MAT2X3, "dmat2x3"),
    GlTypeDesc::new(D, 2, 4, DOUBLE_MAT2X4, "dmat2x4"),
    GlTypeDesc::new(D, 3, 2, DOUBLE_MAT3X2, "dmat3x2"),
    GlTypeDesc::new(D, 3, 4, DOUBLE_MAT3X4, "dmat3x4"),
    GlTypeDesc::new(D, 4, 2, DOUBLE_MAT4X2, "dmat4x2"),
    GlTypeDesc::new(D, 4, 3, DOUBLE_MAT4X3, "dmat4x3"),
];
