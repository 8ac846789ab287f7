//! Generic front end over [`BinarySerialize`].
//!
//! The functions here pick the contract by type parameter and never look at
//! a value's fields. Bulk calls validate their range before touching the
//! stream, so a rejected call leaves the sink empty and the source where it
//! was.

use std::any::type_name;
use std::io::{Read, Write};

use glkit_core::{Error, Result};
use tracing::{debug, trace};

use crate::contract::{BinarySerialize, checked_range};

/// Writes a single value.
#[inline]
pub fn write_value<T: BinarySerialize, W: Write + ?Sized>(sink: &mut W, value: &T) -> Result<()> {
    value.write_one(sink)
}

/// Reads a single value.
///
/// ```rust
/// use std::io::Cursor;
/// use glkit_io::{read_value, write_value};
/// use glkit_math::Mat3;
///
/// let mut buf = Vec::new();
/// write_value(&mut buf, &Mat3::IDENTITY).unwrap();
///
/// let mut src = Cursor::new(buf);
/// let m: Mat3 = read_value(&mut src).unwrap();
/// assert_eq!(m, Mat3::IDENTITY);
/// assert_eq!(src.position(), 36);
/// ```
#[inline]
pub fn read_value<T: BinarySerialize, R: Read + ?Sized>(source: &mut R) -> Result<T> {
    T::read_one(source)
}

/// Writes `items[start..start + count]`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if the range does not fit `items`, before any
/// byte is written.
pub fn write_array<T: BinarySerialize, W: Write + ?Sized>(
    sink: &mut W,
    items: &[T],
    start: usize,
    count: usize,
) -> Result<()> {
    trace!(ty = type_name::<T>(), start, count, len = items.len(), "write_array");
    if let Err(e) = checked_range(items.len(), start, count) {
        debug!(ty = type_name::<T>(), start, count, len = items.len(), "write_array rejected");
        return Err(e);
    }
    T::write_many(sink, items, start, count)
}

/// Reads `count` values into `items[start..start + count]`.
///
/// Returns the number of values read. The slice is never resized.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if the range does not fit `items`, before any
///   byte is read
/// - [`Error::EndOfStream`] if the source ends inside an element
pub fn read_array<T: BinarySerialize, R: Read + ?Sized>(
    source: &mut R,
    items: &mut [T],
    start: usize,
    count: usize,
) -> Result<usize> {
    trace!(ty = type_name::<T>(), start, count, len = items.len(), "read_array");
    if let Err(e) = checked_range(items.len(), start, count) {
        debug!(ty = type_name::<T>(), start, count, len = items.len(), "read_array rejected");
        return Err(e);
    }
    T::read_many(source, items, start, count).inspect_err(|e| {
        if let Error::EndOfStream { completed, .. } = e {
            debug!(ty = type_name::<T>(), count, completed, "read_array hit end of stream");
        }
    })
}

/// [`write_array`] for a buffer that may be missing.
///
/// # Errors
///
/// [`Error::NullArray`] for `None`, before any byte is written.
pub fn write_array_opt<T: BinarySerialize, W: Write + ?Sized>(
    sink: &mut W,
    items: Option<&[T]>,
    start: usize,
    count: usize,
) -> Result<()> {
    let Some(items) = items else {
        debug!(ty = type_name::<T>(), "write_array_opt without array");
        return Err(Error::NullArray);
    };
    write_array(sink, items, start, count)
}

/// [`read_array`] for a buffer that may be missing.
///
/// # Errors
///
/// [`Error::NullArray`] for `None`, before any byte is read.
pub fn read_array_opt<T: BinarySerialize, R: Read + ?Sized>(
    source: &mut R,
    items: Option<&mut [T]>,
    start: usize,
    count: usize,
) -> Result<usize> {
    let Some(items) = items else {
        debug!(ty = type_name::<T>(), "read_array_opt without array");
        return Err(Error::NullArray);
    };
    read_array(source, items, start, count)
}

/// Reads `count` values into a new vector.
///
/// ```rust
/// use glkit_io::{read_vec, write_array};
/// use glkit_math::IVec2;
///
/// let pts = [IVec2::new(1, 2), IVec2::new(3, 4)];
/// let mut buf = Vec::new();
/// write_array(&mut buf, &pts, 0, 2).unwrap();
///
/// let back: Vec<IVec2> = read_vec(&mut buf.as_slice(), 2).unwrap();
/// assert_eq!(back, pts);
/// ```
pub fn read_vec<T: BinarySerialize, R: Read + ?Sized>(source: &mut R, count: usize) -> Result<Vec<T>> {
    let mut items = vec![T::zeroed(); count];
    read_array(source, &mut items, 0, count)?;
    Ok(items)
}

/// Exact record size of `count` values of `T`, or `None` on overflow.
#[inline]
pub fn byte_len<T: BinarySerialize>(count: usize) -> Option<usize> {
    count.checked_mul(T::BYTE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glkit_math::{Vec2, Vec4};
    use std::io::Cursor;

    #[test]
    fn test_write_array_rejects_before_io() {
        let items = [Vec2::X; 3];
        let mut sink = Vec::new();
        let err = write_array(&mut sink, &items, 2, 2).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { start: 2, count: 2, len: 3 }));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_read_array_rejects_before_io() {
        let mut src = Cursor::new(vec![0u8; 64]);
        let mut items = [Vec4::ZERO; 2];
        let err = read_array(&mut src, &mut items, 1, 2).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn test_opt_none() {
        let mut sink = Vec::new();
        let err = write_array_opt::<Vec2, _>(&mut sink, None, 0, 0).unwrap_err();
        assert!(matches!(err, Error::NullArray));

        let mut src = Cursor::new(vec![0u8; 8]);
        let err = read_array_opt::<Vec2, _>(&mut src, None, 0, 1).unwrap_err();
        assert!(matches!(err, Error::NullArray));
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut sink = Vec::new();
        write_array::<Vec2, _>(&mut sink, &[], 0, 0).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len::<Vec4>(3), Some(48));
        assert_eq!(byte_len::<Vec4>(usize::MAX), None);
    }
}
