//! Integer vector types (GLSL `ivec2`, `ivec3`, `ivec4`).
//!
//! Used for texel coordinates, indices and integer vertex attributes.
//! Components are 32-bit signed integers in `x, y, z, w` order.

use std::ops::{Add, Index, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

/// A 2D vector of `i32` components (8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec2 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

/// A 3D vector of `i32` components (12 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec3 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

/// A 4D vector of `i32` components (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec4 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
    /// W component
    pub w: i32,
}

impl IVec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [i32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Dot product (wrapping on overflow in release builds).
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }
}

impl IVec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [i32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl IVec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

// Shared operator and conversion impls; all three types differ only in arity.
macro_rules! impl_ivec_common {
    ($t:ident, $n:literal, $glam:ident, $($f:ident => $i:literal),+) => {
        impl Index<usize> for $t {
            type Output = i32;

            #[inline]
            fn index(&self, i: usize) -> &i32 {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($t), i),
                }
            }
        }

        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl Mul<i32> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: i32) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl From<[i32; $n]> for $t {
            #[inline]
            fn from(a: [i32; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$t> for [i32; $n] {
            #[inline]
            fn from(v: $t) -> [i32; $n] {
                v.to_array()
            }
        }

        #[cfg(feature = "glam")]
        impl From<glam::$glam> for $t {
            #[inline]
            fn from(v: glam::$glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        #[cfg(feature = "glam")]
        impl From<$t> for glam::$glam {
            #[inline]
            fn from(v: $t) -> glam::$glam {
                glam::$glam::from_array(v.to_array())
            }
        }
    };
}

impl_ivec_common!(IVec2, 2, IVec2, x => 0, y => 1);
impl_ivec_common!(IVec3, 3, IVec3, x => 0, y => 1, z => 2);
impl_ivec_common!(IVec4, 4, IVec4, x => 0, y => 1, z => 2, w => 3);
