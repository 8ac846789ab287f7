//! Error types for glkit operations.
//!
//! One taxonomy covers every failure the workspace reports. The fast-math
//! kernel never produces errors: its domain is the caller's responsibility.
//!
//! # Overview
//!
//! The [`Error`] enum separates three failure modes of bulk binary I/O:
//! - Argument errors, detected before any byte is touched
//! - Stream exhaustion while a value was being read
//! - Any other sink/source failure
//!
//! # Usage
//!
//! ```rust
//! use glkit_core::{Error, Result};
//!
//! fn check_range(start: usize, count: usize, len: usize) -> Result<()> {
//!     match start.checked_add(count) {
//!         Some(end) if end <= len => Ok(()),
//!         _ => Err(Error::out_of_range(start, count, len)),
//!     }
//! }
//!
//! assert!(check_range(2, 3, 4).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `glkit-io` - Serialization front end and per-type contracts

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while moving glkit values through byte streams.
///
/// # Categories
///
/// - **Argument errors**: [`OutOfRange`](Error::OutOfRange), [`NullArray`](Error::NullArray)
/// - **Stream exhaustion**: [`EndOfStream`](Error::EndOfStream)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Requested element range does not fit the caller's array.
    ///
    /// Raised before any I/O, so the stream is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glkit_core::Error;
    ///
    /// let err = Error::out_of_range(8, 4, 10);
    /// assert!(err.to_string().contains("8..12"));
    /// ```
    #[error("range {start}..{} out of bounds for array of length {len}", range_end(.start, .count))]
    OutOfRange {
        /// First element index requested
        start: usize,
        /// Number of elements requested
        count: usize,
        /// Length of the caller's array
        len: usize,
    },

    /// No array was supplied to a bulk operation.
    #[error("array argument is missing")]
    NullArray,

    /// The source ran out of bytes while a value was being read.
    ///
    /// Bytes consumed before the failure are not pushed back.
    #[error("unexpected end of stream: value needs {needed} bytes ({completed} elements read before)")]
    EndOfStream {
        /// Byte size of the value that could not be completed
        needed: usize,
        /// Elements fully read by the failing call before the stream ended
        completed: usize,
    },

    /// Sink or source failure other than end of stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn range_end(start: &usize, count: &usize) -> usize {
    start.saturating_add(*count)
}

impl Error {
    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(start: usize, count: usize, len: usize) -> Self {
        Self::OutOfRange { start, count, len }
    }

    /// Creates an [`Error::EndOfStream`] error.
    ///
    /// # Arguments
    ///
    /// * `needed` - Byte size of the value being read
    /// * `completed` - Elements read successfully before it
    #[inline]
    pub fn end_of_stream(needed: usize, completed: usize) -> Self {
        Self::EndOfStream { needed, completed }
    }

    /// Maps a stream error for a value of `needed` bytes.
    ///
    /// `UnexpectedEof` becomes [`Error::EndOfStream`], everything else stays [`Error::Io`].
    pub fn from_read(err: std::io::Error, needed: usize) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::end_of_stream(needed, 0)
        } else {
            Self::Io(err)
        }
    }

    /// Returns the same error with `completed` set, if it is an [`Error::EndOfStream`].
    #[must_use]
    pub fn with_completed(self, completed: usize) -> Self {
        match self {
            Self::EndOfStream { needed, .. } => Self::EndOfStream { needed, completed },
            other => other,
        }
    }

    /// Returns `true` if this is an argument error detected before I/O.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NullArray)
    }

    /// Returns `true` if the stream ended before a value was complete.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfStream { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range() {
        let err = Error::out_of_range(3, 5, 6);
        let msg = err.to_string();
        assert!(msg.contains("3..8"));
        assert!(msg.contains('6'));
        assert!(err.is_range_error());
        assert!(!err.is_eof());
    }

    #[test]
    fn test_out_of_range_saturates() {
        let err = Error::out_of_range(usize::MAX, 2, 1);
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }

    #[test]
    fn test_eof_mapping() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short");
        let err = Error::from_read(io_err, 64);
        assert!(err.is_eof());
        assert!(matches!(err, Error::EndOfStream { needed: 64, completed: 0 }));
    }

    #[test]
    fn test_other_io_stays_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = Error::from_read(io_err, 4);
        assert!(err.is_io_error());
    }

    #[test]
    fn test_with_completed() {
        let err = Error::end_of_stream(12, 0).with_completed(3);
        assert!(matches!(err, Error::EndOfStream { needed: 12, completed: 3 }));

        let err = Error::NullArray.with_completed(3);
        assert!(matches!(err, Error::NullArray));
    }
}
