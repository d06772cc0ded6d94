//! Internal crate for `nme-unpacker`.
//!
//! Kept separate from `nme_types` so the binary can depend on a thin
//! facade rather than the decoder crate directly, matching this corpus's
//! split between its decoder types and the crate the binary links.
//!
//! # Examples
//!
//! ```rust
//! use nme_internal::prelude::*;
//! use std::io::Cursor;
//!
//! let archive = Cursor::new(Vec::<u8>::new());
//! let _ = unpack(archive, std::path::Path::new("out"), false);
//! ```

/// `use nme_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export nme_types for convenience
pub use nme_types;
