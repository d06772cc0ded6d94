//! Error types for archive decoding.
//!
//! Mirrors the error kinds of the format this crate decodes: I/O failure,
//! structural corruption in the archive, exhaustion of a fixed resource, and
//! misuse of the command-line surface. [`NmeError::kind`] maps every variant
//! onto one of those four kinds so callers can dispatch on it without
//! matching every variant by hand.

use std::fmt;

use thiserror::Error;

/// The four error kinds this system distinguishes, independent of which
/// specific variant produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Short read, seek past EOF, or inability to open an output file.
	Io,
	/// Corrupt entry type byte, out-of-range palette id, impossible image
	/// dimensions, or an RLE stream that overruns its pixel-data buffer.
	Format,
	/// A fixed-capacity resource (the traversal queue, the allocator) was
	/// exhausted.
	Resource,
	/// Missing input archive or an unrecognized flag.
	Usage,
}

/// Errors produced while decoding a DIR/WAD archive.
#[derive(Debug, Error)]
pub enum NmeError {
	/// Propagated I/O failure.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// A directory entry's `type` byte was not 0 (file), 1 (directory), or
	/// -1 (sentinel).
	#[error("corrupt entry type byte: {value}")]
	CorruptEntryType {
		/// The offending byte, as read from the wire.
		value: i8,
	},

	/// An image's `palette_id` does not index into the WAD's palette table.
	#[error("palette id {palette_id} out of range (palette count: {palette_count})")]
	PaletteIdOutOfRange {
		/// The id read from the image record.
		palette_id: u32,
		/// The number of palettes actually present in the WAD.
		palette_count: u32,
	},

	/// `width * height` does not fit in a `u32`, or either dimension is
	/// large enough that the corresponding pixel buffer cannot be
	/// allocated.
	#[error("image dimensions {width}x{height} are not representable")]
	ImpossibleDimensions {
		/// Declared width.
		width: u32,
		/// Declared height.
		height: u32,
	},

	/// A BMP image's declared `pixel_data_size` is too small for its
	/// declared dimensions and row stride.
	#[error(
		"BMP pixel data of {actual} bytes is too small for a {width}x{height} image (stride {stride})"
	)]
	PixelDataTooSmall {
		/// Declared width.
		width: u32,
		/// Declared height.
		height: u32,
		/// Row stride (`width + 2` for the BMP path).
		stride: u32,
		/// Bytes actually present.
		actual: u64,
	},

	/// The RLE opcode stream consumed more bytes than `pixel_data_size`
	/// makes available, or produced more pixels than `width * height`.
	#[error("RLE stream overran its pixel-data buffer at byte {index} of {size}")]
	RleOverrun {
		/// Index the decoder was about to read.
		index: usize,
		/// Declared size of the pixel-data buffer.
		size: usize,
	},

	/// The traversal queue reached its fixed capacity.
	#[error("directory queue overflowed its {capacity}-entry capacity")]
	QueueOverflow {
		/// The queue's configured capacity.
		capacity: usize,
	},

	/// No archive path was given on the command line.
	#[error("no input files")]
	NoInputFiles,

	/// An unrecognized command-line flag was given.
	#[error("unknown option: {0}")]
	UnknownOption(String),
}

impl NmeError {
	/// Classify this error into one of the four kinds the propagation
	/// policy dispatches on.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::CorruptEntryType { .. }
			| Self::PaletteIdOutOfRange { .. }
			| Self::ImpossibleDimensions { .. }
			| Self::PixelDataTooSmall { .. }
			| Self::RleOverrun { .. } => ErrorKind::Format,
			Self::QueueOverflow { .. } => ErrorKind::Resource,
			Self::NoInputFiles | Self::UnknownOption(_) => ErrorKind::Usage,
		}
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Io => "I/O error",
			Self::Format => "format error",
			Self::Resource => "resource error",
			Self::Usage => "usage error",
		};
		f.write_str(label)
	}
}

/// Convenience alias used throughout the decoder.
pub type Result<T> = std::result::Result<T, NmeError>;
