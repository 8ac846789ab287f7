//! The per-type serialization contract.
//!
//! A type implementing [`BinarySerialize`] knows how to put itself on a
//! byte sink and take itself off a byte source. The record is the type's
//! components in declaration order, each a native-endian 32-bit field, with
//! no header and no padding. A reader therefore has to know the type to
//! know how many bytes to take.

use std::io::{Read, Write};
use std::ops::Range;

use bytemuck::Zeroable;
use glkit_core::{Error, Result};

/// Validates `start..start + count` against an array of length `len`.
///
/// Overflow in `start + count` is reported as out of range.
///
/// # Example
///
/// ```rust
/// use glkit_io::checked_range;
///
/// assert_eq!(checked_range(10, 2, 3).unwrap(), 2..5);
/// assert!(checked_range(4, 2, 3).is_err());
/// assert!(checked_range(4, usize::MAX, 1).is_err());
/// ```
pub fn checked_range(len: usize, start: usize, count: usize) -> Result<Range<usize>> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(Error::out_of_range(start, count, len)),
    }
}

/// Fixed-layout binary record for a math value type.
///
/// Implementors only supply [`write_one`](Self::write_one) and
/// [`read_one`](Self::read_one); the bulk forms loop over them unless a
/// type has a faster block path. Whatever path is taken, `write_many`
/// output must be byte-identical to `count` calls of `write_one`.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use glkit_io::BinarySerialize;
/// use glkit_math::Vec3;
///
/// let mut buf = Vec::new();
/// Vec3::new(1.0, 2.0, 3.0).write_one(&mut buf).unwrap();
/// assert_eq!(buf.len(), Vec3::BYTE_SIZE);
///
/// let back = Vec3::read_one(&mut Cursor::new(buf)).unwrap();
/// assert_eq!(back, Vec3::new(1.0, 2.0, 3.0));
/// ```
pub trait BinarySerialize: Copy + Zeroable {
    /// Number of 32-bit components in the record.
    const COMPONENTS: usize;

    /// Record size in bytes.
    const BYTE_SIZE: usize = Self::COMPONENTS * 4;

    /// Appends this value's components to `sink`.
    fn write_one<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()>;

    /// Reads exactly [`BYTE_SIZE`](Self::BYTE_SIZE) bytes from `source`.
    ///
    /// Fails with [`Error::EndOfStream`] if the source runs dry first.
    fn read_one<R: Read + ?Sized>(source: &mut R) -> Result<Self>;

    /// Writes `items[start..start + count]` in index order.
    fn write_many<W: Write + ?Sized>(
        sink: &mut W,
        items: &[Self],
        start: usize,
        count: usize,
    ) -> Result<()> {
        let range = checked_range(items.len(), start, count)?;
        for item in &items[range] {
            item.write_one(sink)?;
        }
        Ok(())
    }

    /// Reads `count` values into `items[start..start + count]`.
    ///
    /// Returns the number of values read. If the source ends inside an
    /// element, the call fails with [`Error::EndOfStream`] whose
    /// `completed` field counts the elements already stored; the failing
    /// slot keeps its previous value.
    fn read_many<R: Read + ?Sized>(
        source: &mut R,
        items: &mut [Self],
        start: usize,
        count: usize,
    ) -> Result<usize> {
        let range = checked_range(items.len(), start, count)?;
        for (done, slot) in items[range].iter_mut().enumerate() {
            *slot = Self::read_one(source).map_err(|e| e.with_completed(done))?;
        }
        Ok(count)
    }
}

/// Fills `buf` from `source`, mapping a short read to [`Error::EndOfStream`].
#[inline]
pub(crate) fn read_record<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> Result<()> {
    source
        .read_exact(buf)
        .map_err(|e| Error::from_read(e, buf.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_range() {
        assert_eq!(checked_range(5, 0, 5).unwrap(), 0..5);
        assert_eq!(checked_range(5, 5, 0).unwrap(), 5..5);
        assert!(checked_range(5, 6, 0).is_err());
        assert!(checked_range(5, 3, 3).unwrap_err().is_range_error());
        assert!(checked_range(0, usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_read_record_short() {
        let mut src: &[u8] = &[1, 2, 3];
        let mut buf = [0u8; 8];
        let err = read_record(&mut src, &mut buf).unwrap_err();
        assert!(matches!(err, Error::EndOfStream { needed: 8, completed: 0 }));
    }
}
