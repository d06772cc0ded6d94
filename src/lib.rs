#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `nme-unpacker` recovers the embedded directory tree of a DIR archive and,
//! for nested WAD files, decodes their paletted and run-length-encoded
//! images to BMP/PNG.
//!
//! The library surface is a thin re-export of [`nme_internal`]; the binary
//! target (`src/main.rs`) is the intended entry point for most users.

pub mod alloc;

pub use nme_internal::*;
