//! [`BinarySerialize`] for every glkit value type.
//!
//! | Type | Components | Bytes | Order |
//! |------|-----------|-------|-------|
//! | `f32`, `i32` | 1 | 4 | scalar |
//! | [`Vec2`] / [`IVec2`] | 2 | 8 | x, y |
//! | [`Vec3`] / [`IVec3`] | 3 | 12 | x, y, z |
//! | [`Vec4`] / [`IVec4`] | 4 | 16 | x, y, z, w |
//! | [`Mat2`] | 4 | 16 | col0, col1 |
//! | [`Mat3`] | 9 | 36 | col0, col1, col2 |
//! | [`Mat4`] | 16 | 64 | col0 .. col3 |
//!
//! Vectors and scalars go component by component through `byteorder`.
//! Matrices are moved as whole column-major blocks through `bytemuck`,
//! which gives the same bytes because their memory layout is the record.

use std::io::{Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use bytemuck::Pod;
use glkit_core::{Error, Result};
use glkit_math::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::contract::{BinarySerialize, checked_range, read_record};

impl BinarySerialize for f32 {
    const COMPONENTS: usize = 1;

    #[inline]
    fn write_one<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_f32::<NativeEndian>(*self)?;
        Ok(())
    }

    #[inline]
    fn read_one<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
        source
            .read_f32::<NativeEndian>()
            .map_err(|e| Error::from_read(e, Self::BYTE_SIZE))
    }
}

impl BinarySerialize for i32 {
    const COMPONENTS: usize = 1;

    #[inline]
    fn write_one<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_i32::<NativeEndian>(*self)?;
        Ok(())
    }

    #[inline]
    fn read_one<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
        source
            .read_i32::<NativeEndian>()
            .map_err(|e| Error::from_read(e, Self::BYTE_SIZE))
    }
}

// Vector records: one field per component, in declaration order.
macro_rules! impl_vector {
    ($t:ty, $n:literal, $write:ident, $read:ident, $($f:ident),+) => {
        impl BinarySerialize for $t {
            const COMPONENTS: usize = $n;

            #[inline]
            fn write_one<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
                $(sink.$write::<NativeEndian>(self.$f)?;)+
                Ok(())
            }

            #[inline]
            fn read_one<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
                let read = |source: &mut R| {
                    source
                        .$read::<NativeEndian>()
                        .map_err(|e| Error::from_read(e, Self::BYTE_SIZE))
                };
                Ok(Self { $($f: read(source)?),+ })
            }
        }
    };
}

impl_vector!(Vec2, 2, write_f32, read_f32, x, y);
impl_vector!(Vec3, 3, write_f32, read_f32, x, y, z);
impl_vector!(Vec4, 4, write_f32, read_f32, x, y, z, w);
impl_vector!(IVec2, 2, write_i32, read_i32, x, y);
impl_vector!(IVec3, 3, write_i32, read_i32, x, y, z);
impl_vector!(IVec4, 4, write_i32, read_i32, x, y, z, w);

/// Reads one `Pod` value as a single block.
///
/// The value is built in a zeroed temporary, so a short read never leaks
/// a half-filled result.
fn read_block<T: Pod, R: Read + ?Sized>(source: &mut R) -> Result<T> {
    let mut value = T::zeroed();
    read_record(source, bytemuck::bytes_of_mut(&mut value))?;
    Ok(value)
}

// Matrix records: the column-major storage is written as one block.
macro_rules! impl_matrix {
    ($t:ty, $n:literal) => {
        impl BinarySerialize for $t {
            const COMPONENTS: usize = $n;

            #[inline]
            fn write_one<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
                sink.write_all(bytemuck::bytes_of(self))?;
                Ok(())
            }

            #[inline]
            fn read_one<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
                read_block(source)
            }

            fn write_many<W: Write + ?Sized>(
                sink: &mut W,
                items: &[Self],
                start: usize,
                count: usize,
            ) -> Result<()> {
                let range = checked_range(items.len(), start, count)?;
                sink.write_all(bytemuck::cast_slice(&items[range]))?;
                Ok(())
            }

            fn read_many<R: Read + ?Sized>(
                source: &mut R,
                items: &mut [Self],
                start: usize,
                count: usize,
            ) -> Result<usize> {
                let range = checked_range(items.len(), start, count)?;
                for (done, slot) in items[range].iter_mut().enumerate() {
                    *slot = read_block(source).map_err(|e| e.with_completed(done))?;
                }
                Ok(count)
            }
        }
    };
}

impl_matrix!(Mat2, 4);
impl_matrix!(Mat3, 9);
impl_matrix!(Mat4, 16);
