//! WAD palette table.

use std::io::{Read, Seek};

use crate::archive::color::{Rgb8, rgb565_to_rgb8};
use crate::archive::reader::ByteReader;
use crate::error::Result;

/// Number of colors in a palette.
pub const PALETTE_COLOR_COUNT: usize = 256;

/// Size of the trailing comment/label field, in bytes.
pub const PALETTE_COMMENT_SIZE: usize = 13;

/// Wire size of one palette record: 256 RGB565 colors plus the comment.
pub const PALETTE_SIZE: usize = PALETTE_COLOR_COUNT * 2 + PALETTE_COMMENT_SIZE;

/// A 256-color palette, already expanded from RGB565 to 8-bit-per-channel
/// RGB. The trailing 13-byte comment is read and discarded — it is opaque
/// to decoding (§3).
#[derive(Debug, Clone)]
pub struct Palette {
	colors: [Rgb8; PALETTE_COLOR_COUNT],
}

impl Palette {
	/// Reads one palette record from `reader`.
	pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self> {
		let mut colors = [Rgb8::default(); PALETTE_COLOR_COUNT];
		for color in &mut colors {
			let raw = reader.read_u16()?;
			*color = rgb565_to_rgb8(raw);
		}
		// Trailing comment/label; opaque to decoding.
		reader.read_vec(PALETTE_COMMENT_SIZE)?;
		Ok(Self { colors })
	}

	/// Returns the color at `index`. Always in range: a palette holds
	/// exactly 256 colors and `index` is a `u8`.
	pub fn get(&self, index: u8) -> Rgb8 {
		self.colors[index as usize]
	}
}
