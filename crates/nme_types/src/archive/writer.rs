//! Image writer: the one place this crate depends on an external codec
//! library rather than a hand-rolled encoder, mirroring this corpus's own
//! image-writing utilities.

use std::path::Path;

use image::{ImageBuffer, Rgb, Rgba};

use crate::error::{NmeError, Result};

/// Writes a tightly packed row-major 24-bit RGB buffer as a BMP file.
pub fn write_bmp(path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
	let buffer: ImageBuffer<Rgb<u8>, _> = ImageBuffer::from_raw(width, height, pixels.to_vec())
		.ok_or_else(|| NmeError::ImpossibleDimensions { width, height })?;
	buffer.save(path).map_err(|err| NmeError::Io(std::io::Error::other(err)))
}

/// Writes a tightly packed row-major 32-bit RGBA buffer as a PNG file.
pub fn write_png(path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
	let buffer: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(width, height, pixels.to_vec())
		.ok_or_else(|| NmeError::ImpossibleDimensions { width, height })?;
	buffer.save(path).map_err(|err| NmeError::Io(std::io::Error::other(err)))
}
