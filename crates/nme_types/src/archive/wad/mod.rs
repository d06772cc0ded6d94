//! WAD archive parsing: palette table, image record iteration, and dispatch
//! to the BMP or RLE decode path by filename extension.

pub mod image;
pub mod palette;

use std::io::{Read, Seek};
use std::path::Path;

use log::debug;

use crate::archive::reader::ByteReader;
use crate::archive::writer;
use crate::error::{NmeError, Result};
use image::{DecodedImage, ImageHeader, LineOffsets, decode_bmp, decode_rle, output_file_name};
use palette::Palette;

/// Bytes of opaque header preceding the palette/image records (§3).
const WAD_HEADER_SIZE: usize = 400;

/// Parses a WAD whose first byte the reader is already positioned at, and
/// writes every decoded image under `output_dir`.
///
/// Mirrors §4.F: skip the opaque header, read the palette table, then each
/// image record in turn — header, pixel data, optional line offsets,
/// palette id, dispatch, write.
pub fn process_wad<R: Read + Seek>(
	reader: &mut ByteReader<R>,
	output_dir: &Path,
	verbose: bool,
) -> Result<usize> {
	reader.read_vec(WAD_HEADER_SIZE)?;

	let palette_count = reader.read_u32()?;
	if palette_count == 0 {
		return Ok(0);
	}

	let mut palettes = Vec::with_capacity(palette_count as usize);
	for _ in 0..palette_count {
		palettes.push(Palette::read(reader)?);
	}

	let image_count = reader.read_u32()?;
	if image_count == 0 {
		return Ok(0);
	}

	let mut written = 0usize;
	for _ in 0..image_count {
		let header = ImageHeader::read(reader)?;
		let pixel_data = reader.read_vec(header.pixel_data_size as usize)?;

		let line_offsets: Option<LineOffsets> =
			if header.is_rle() { Some(LineOffsets::read(reader)?) } else { None };

		let palette_id = reader.read_u32()?;
		if palette_id >= palette_count {
			return Err(NmeError::PaletteIdOutOfRange { palette_id, palette_count });
		}
		let palette = &palettes[palette_id as usize];

		if verbose {
			println!(
				"{{$ {} # {} w {} h {} @ {} ~ {}}}",
				header.name,
				pixel_data.len(),
				header.width,
				header.height,
				header.color_depth,
				palette_id
			);
		}
		debug!(
			"wad image '{}' {}x{} depth {} palette {}",
			header.name, header.width, header.height, header.color_depth, palette_id
		);

		let decoded = if header.is_rle() {
			decode_rle(&header, &pixel_data, palette)?
		} else {
			decode_bmp(&header, &pixel_data, palette)?
		};
		// Line offsets are read above but intentionally not consulted here
		// (§9: unresolved whether they are integrity checks or seek hints).
		let _ = line_offsets;

		let out_path = output_dir.join(output_file_name(&header));
		write_decoded_image(&out_path, &decoded)?;
		written += 1;
	}

	Ok(written)
}

fn write_decoded_image(path: &Path, image: &DecodedImage) -> Result<()> {
	match image {
		DecodedImage::Rgb { width, height, pixels } => {
			writer::write_bmp(path, *width, *height, pixels)
		}
		DecodedImage::Rgba { width, height, pixels } => {
			writer::write_png(path, *width, *height, pixels)
		}
	}
}
