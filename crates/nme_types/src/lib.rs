//! Core types for unpacking NME DIR/WAD archives: the wire format decoders,
//! the breadth-first traversal that walks a DIR container, and the image
//! codecs used to turn WAD-nested pixel data into BMP/PNG files on disk.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::path::Path;
//!
//! use nme_types::archive::unpack;
//!
//! let input = File::open("game.dir").unwrap();
//! let stats = unpack(input, Path::new("out"), false).unwrap();
//! println!("wrote {} files, {} images", stats.files_written, stats.images_written);
//! ```

pub mod archive;
pub mod error;

pub use archive::{UnpackStats, unpack};
pub use error::{ErrorKind, NmeError, Result};
