//! Per-image header, line-offset record, and the two pixel decode paths.

use std::io::{Read, Seek};

use crate::archive::color::rgb565_to_rgb8;
use crate::archive::entry::NAME_SIZE;
use crate::archive::reader::ByteReader;
use crate::archive::wad::palette::Palette;
use crate::error::{NmeError, Result};

/// Bytes skipped immediately after the header fields, before pixel data.
const HEADER_TRAILING_SKIP: usize = 6;

/// One decoded image header.
#[derive(Debug, Clone)]
pub struct ImageHeader {
	/// Image name (NUL-clamped), used both for logging and to decide the
	/// decode path via its extension.
	pub name: String,
	/// Declared size of the pixel-data block that follows, in bytes.
	pub pixel_data_size: u64,
	/// Image height in pixels.
	pub height: u32,
	/// Image width in pixels.
	pub width: u32,
	/// Declared color depth; carried through for verbose logging, not
	/// otherwise consulted by either decode path.
	pub color_depth: u16,
}

impl ImageHeader {
	/// Reads one image header: the 58 literal fields (§3/§4.F) —
	/// `name(32) + pixel_data_size(8) + unused(8) + height(4) + width(4) +
	/// color_depth(2)` — then the 6-byte trailing skip.
	pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self> {
		let mut name_buf = [0u8; NAME_SIZE];
		reader.read_exact(&mut name_buf)?;
		name_buf[NAME_SIZE - 1] = 0;
		let end = name_buf.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
		let name = String::from_utf8_lossy(&name_buf[..end]).into_owned();

		let pixel_data_size = reader.read_u64()?;
		reader.read_vec(8)?; // unused
		let height = reader.read_u32()?;
		let width = reader.read_u32()?;
		let color_depth = reader.read_u16()?;

		reader.read_vec(HEADER_TRAILING_SKIP)?;

		Ok(Self { name, pixel_data_size, height, width, color_depth })
	}

	/// Whether this image's name has a case-insensitive `.rle` extension,
	/// which selects the RLE decode path instead of the BMP path.
	pub fn is_rle(&self) -> bool {
		has_extension(&self.name, "rle")
	}
}

/// Case-insensitive 3-character suffix check, matching the reference
/// tool's `has_extension` (compares exactly `strlen(extension)` characters
/// immediately following the last `.`).
fn has_extension(name: &str, extension: &str) -> bool {
	match name.rfind('.') {
		Some(dot) => name[dot + 1..].eq_ignore_ascii_case(extension),
		None => false,
	}
}

/// The optional per-scanline offset sub-record carried by `.rle` images.
///
/// Read and retained, never consulted for pixel production (§9: whether the
/// format intends these as integrity checks or seek hints is unresolved;
/// this implementation takes no position beyond exposing them to callers
/// who want to cross-check scanline boundaries themselves).
#[derive(Debug, Clone)]
pub struct LineOffsets {
	/// Size of the associated pixel-data block, as declared in the record.
	pub data_block_size: u32,
	/// Opaque 4-byte tag.
	pub tag: [u8; 4],
	/// Declared width (redundant with the image header in practice).
	pub width: u32,
	/// Declared height; when zero, `offsets` is empty.
	pub height: u32,
	/// Per-scanline offsets into the RLE pixel stream.
	pub offsets: Vec<u32>,
}

impl LineOffsets {
	/// Reads one line-offsets record.
	pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self> {
		let data_block_size = reader.read_u32()?;
		let mut tag = [0u8; 4];
		reader.read_exact(&mut tag)?;
		let width = reader.read_u32()?;
		let height = reader.read_u32()?;

		let mut offsets = Vec::with_capacity(height as usize);
		for _ in 0..height {
			offsets.push(reader.read_u32()?);
		}

		Ok(Self { data_block_size, tag, width, height, offsets })
	}
}

/// A decoded image, ready to hand to the image writer.
pub enum DecodedImage {
	/// 24-bit-per-pixel RGB, row-major, tightly packed.
	Rgb {
		/// Image width in pixels.
		width: u32,
		/// Image height in pixels.
		height: u32,
		/// Packed pixel bytes, 3 per pixel.
		pixels: Vec<u8>,
	},
	/// 32-bit-per-pixel RGBA, row-major, tightly packed.
	Rgba {
		/// Image width in pixels.
		width: u32,
		/// Image height in pixels.
		height: u32,
		/// Packed pixel bytes, 4 per pixel.
		pixels: Vec<u8>,
	},
}

/// Checked `width * height`, used by both decode paths to size their output
/// buffer and to satisfy invariant "`width * height` fits in 32 bits".
fn checked_pixel_count(width: u32, height: u32) -> Result<u64> {
	let count = u64::from(width) * u64::from(height);
	if count > u64::from(u32::MAX) {
		return Err(NmeError::ImpossibleDimensions { width, height });
	}
	Ok(count)
}

/// Decodes the paletted BMP path (§4.G).
///
/// Row stride is `width + 2` (two padding bytes per row); each source byte
/// is a palette index, expanded via [`rgb565_to_rgb8`] into the output RGB
/// buffer.
pub fn decode_bmp(
	header: &ImageHeader,
	pixel_data: &[u8],
	palette: &Palette,
) -> Result<DecodedImage> {
	let width = header.width;
	let height = header.height;
	checked_pixel_count(width, height)?;

	let stride = width + 2;
	let required = u64::from(stride) * u64::from(height);
	if (pixel_data.len() as u64) < required {
		return Err(NmeError::PixelDataTooSmall {
			width,
			height,
			stride,
			actual: pixel_data.len() as u64,
		});
	}

	let mut pixels = vec![0u8; (width as usize) * (height as usize) * 3];
	for y in 0..height {
		for x in 0..width {
			let from = (x + y * stride) as usize;
			let index = pixel_data[from];
			let rgb = rgb565_palette_lookup(palette, index);
			let to = 3 * (x + y * width) as usize;
			pixels[to] = rgb.r;
			pixels[to + 1] = rgb.g;
			pixels[to + 2] = rgb.b;
		}
	}

	Ok(DecodedImage::Rgb { width, height, pixels })
}

/// Decodes the RLE path (§4.G): a linear opcode stream producing 32-bit
/// RGBA, with three opcodes — transparent run (`0xFF`), half-alpha indexed
/// run (`0xFE`), and opaque indexed run (any other byte `n`, an `n`-pixel
/// count).
pub fn decode_rle(
	header: &ImageHeader,
	pixel_data: &[u8],
	palette: &Palette,
) -> Result<DecodedImage> {
	let width = header.width;
	let height = header.height;
	let pixel_count = checked_pixel_count(width, height)? as usize;

	let mut pixels = vec![0u8; pixel_count * 4];
	let mut cursor = 0usize; // pixel cursor `p`
	let mut i = 0usize; // byte cursor into pixel_data

	let next_byte = |i: &mut usize| -> Result<u8> {
		let value = *pixel_data.get(*i).ok_or(NmeError::RleOverrun { index: *i, size: pixel_data.len() })?;
		*i += 1;
		Ok(value)
	};

	let mut write_pixel = |cursor: &mut usize, r: u8, g: u8, b: u8, a: u8| {
		if *cursor < pixel_count {
			let to = *cursor * 4;
			pixels[to] = r;
			pixels[to + 1] = g;
			pixels[to + 2] = b;
			pixels[to + 3] = a;
		}
		*cursor += 1;
	};

	while i < pixel_data.len() {
		let opcode = next_byte(&mut i)?;
		match opcode {
			0xFF => {
				let run = next_byte(&mut i)?;
				for _ in 0..run {
					write_pixel(&mut cursor, 255, 0, 255, 0);
				}
			}
			0xFE => {
				let run = next_byte(&mut i)?;
				for _ in 0..run {
					let index = next_byte(&mut i)?;
					let rgb = rgb565_palette_lookup(palette, index);
					write_pixel(&mut cursor, rgb.r, rgb.g, rgb.b, 127);
				}
			}
			n => {
				for _ in 0..n {
					let index = next_byte(&mut i)?;
					let rgb = rgb565_palette_lookup(palette, index);
					write_pixel(&mut cursor, rgb.r, rgb.g, rgb.b, 255);
				}
			}
		}
	}

	Ok(DecodedImage::Rgba { width, height, pixels })
}

fn rgb565_palette_lookup(palette: &Palette, index: u8) -> crate::archive::color::Rgb8 {
	palette.get(index)
}

/// Output file name for a decoded image: `.rle` is rewritten to `.png`; any
/// other name is left with a `.bmp` suffix (appended if absent, left alone
/// if already present) — the spec's prescribed rewrite rule (§9), not the
/// original tool's raw never-rewrite BMP behavior.
pub fn output_file_name(header: &ImageHeader) -> String {
	if header.is_rle() {
		match header.name.rfind('.') {
			Some(dot) => format!("{}.png", &header.name[..dot]),
			None => format!("{}.png", header.name),
		}
	} else if header.name.contains('.') {
		header.name.clone()
	} else {
		format!("{}.bmp", header.name)
	}
}
