//! # glkit-io
//!
//! Binary serialization of glkit value types over byte streams.
//!
//! Each value type implements [`BinarySerialize`]: a fixed record of
//! native-endian 32-bit components, column-major for matrices, with no header
//! and no padding. The free functions in this crate form a generic front end
//! that selects the implementation from the type parameter.
//!
//! ```rust
//! use std::io::Cursor;
//! use glkit_io::{read_array, write_array};
//! use glkit_math::Vec3;
//!
//! let points = [Vec3::X, Vec3::Y, Vec3::Z];
//! let mut buf = Vec::new();
//! write_array(&mut buf, &points, 1, 2).unwrap();
//! assert_eq!(buf.len(), 24);
//!
//! let mut back = [Vec3::ZERO; 2];
//! read_array(&mut Cursor::new(buf), &mut back, 0, 2).unwrap();
//! assert_eq!(back, [Vec3::Y, Vec3::Z]);
//! ```
//!
//! # Streams
//!
//! Any [`std::io::Read`] or [`std::io::Write`] works. Access is sequential:
//! nothing seeks, nothing pushes bytes back after a short read.
//!
//! # Logging
//!
//! Bulk calls emit `tracing` events at `trace` level and report rejected
//! ranges and early end of stream at `debug` level.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod contract;
mod front;
mod impls;

pub use contract::{BinarySerialize, checked_range};
pub use front::{
    byte_len, read_array, read_array_opt, read_value, read_vec, write_array, write_array_opt,
    write_value,
};
pub use glkit_core::{Error, Result};
