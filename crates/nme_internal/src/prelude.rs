//! Prelude module for `nme_internal`.
//!
//! This module provides a convenient way to import the commonly used
//! entry point and error types.
//!
//! # Examples
//!
//! ```rust
//! use nme_internal::prelude::*;
//!
//! // Now you can use the decoder's public surface directly
//! fn describe(err: &NmeError) -> ErrorKind {
//!     err.kind()
//! }
//! ```

// Re-export the unpack entry point and error types for convenience
#[doc(inline)]
pub use nme_types::{ErrorKind, NmeError, Result, UnpackStats, unpack};

// Re-export the entire nme_types module for advanced usage
#[doc(inline)]
pub use nme_types;
