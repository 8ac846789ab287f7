//! # glkit-core
//!
//! Core types shared by the glkit crates.
//!
//! - [`Error`], [`Result`] - Failure taxonomy for binary I/O of math values
//! - [`gl`] - Static GL type metadata ([`BaseType`], [`GlTypeDesc`], enum codes)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies:
//!
//! ```text
//! glkit-core (this crate)
//!    ^
//!    |
//!    +-- glkit-math (value types, fast math)
//!    +-- glkit-io (binary serialization)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod gl;

pub use error::*;
pub use gl::{BaseType, GlTypeDesc};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gl::{BaseType, GlTypeDesc};
}
