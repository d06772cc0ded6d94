//! Benchmark helper utilities for `nme-unpacker`.
//!
//! Synthetic fixture generators for the decoder's three hot paths:
//! RGB565 conversion, RLE opcode decoding, and BFS traversal of a large
//! DIR archive. No checked-in binary fixtures — everything here is built
//! as a `Vec<u8>`, matching this corpus's own benchmark-fixture
//! convention.

/// Wire size of one directory entry (name 32, type 1, pad 3, size 4,
/// offset 4).
pub const ENTRY_SIZE: usize = 44;

/// Builds one 44-byte on-wire directory entry.
pub fn wire_entry(name: &str, type_byte: i8, size: u32, offset: u32) -> Vec<u8> {
	let mut buf = vec![0u8; ENTRY_SIZE];
	let bytes = name.as_bytes();
	let len = bytes.len().min(31);
	buf[..len].copy_from_slice(&bytes[..len]);
	buf[32] = type_byte as u8;
	buf[36..40].copy_from_slice(&size.to_le_bytes());
	buf[40..44].copy_from_slice(&offset.to_le_bytes());
	buf
}

/// The `type = -1` sentinel entry.
pub fn sentinel_entry() -> Vec<u8> {
	wire_entry("", -1, 0, 0)
}

/// Builds a synthetic DIR archive with `file_count` flat files under the
/// root directory, each holding `file_size` bytes of filler.
///
/// Lays out entries then payloads back-to-back so every offset is valid,
/// exercising the traverser's seek-then-read loop the way a real archive
/// would.
pub fn synthetic_dir_archive(file_count: usize, file_size: usize) -> Vec<u8> {
	let listing_size = (file_count + 1) * ENTRY_SIZE;
	let mut archive = Vec::with_capacity(listing_size + file_count * file_size);
	let mut offsets = Vec::with_capacity(file_count);

	let mut next_offset = listing_size as u32;
	for _ in 0..file_count {
		offsets.push(next_offset);
		next_offset += file_size as u32;
	}

	for (i, &offset) in offsets.iter().enumerate() {
		archive.extend(wire_entry(&format!("file{i}.bin"), 0, file_size as u32, offset));
	}
	archive.extend(sentinel_entry());

	for i in 0..file_count {
		archive.extend(vec![(i % 256) as u8; file_size]);
	}

	archive
}

/// Builds a synthetic RLE pixel-data stream of roughly `pixel_count`
/// pixels, cycling through all three opcodes (transparent run, half-alpha
/// run, opaque run) so a benchmark exercises every branch of the decoder.
pub fn synthetic_rle_stream(pixel_count: usize) -> Vec<u8> {
	let mut data = Vec::with_capacity(pixel_count * 2);
	let mut produced = 0usize;
	let mut cycle = 0usize;

	while produced < pixel_count {
		let run = 8usize.min(pixel_count - produced);
		match cycle % 3 {
			0 => {
				data.push(0xFF);
				data.push(run as u8);
			}
			1 => {
				data.push(0xFE);
				data.push(run as u8);
				for k in 0..run {
					data.push((k % 256) as u8);
				}
			}
			_ => {
				data.push(run as u8);
				for k in 0..run {
					data.push((k % 256) as u8);
				}
			}
		}
		produced += run;
		cycle += 1;
	}

	data
}

/// Common benchmark sizes.
pub mod sizes {
	/// Tiny archive: 16 files, 64 bytes each.
	pub const TINY: (usize, usize) = (16, 64);
	/// Medium archive: 256 files, 1 KiB each.
	pub const MEDIUM: (usize, usize) = (256, 1024);
	/// Large archive: 4096 files, 4 KiB each — near the traversal queue's
	/// default capacity.
	pub const LARGE: (usize, usize) = (4096, 4096);

	/// Sprite-sized RLE pixel counts.
	pub const RLE_SMALL_PIXELS: usize = 64 * 64;
	/// Full-screen-sized RLE pixel counts, matching a typical 640x480
	/// game-era frame.
	pub const RLE_LARGE_PIXELS: usize = 640 * 480;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn synthetic_archive_has_consistent_entry_count() {
		let archive = synthetic_dir_archive(4, 16);
		assert_eq!(archive.len(), (5 * ENTRY_SIZE) + 4 * 16);
	}

	#[test]
	fn synthetic_rle_stream_produces_requested_pixel_count() {
		// Every opcode consumes exactly `run` output pixels per its header
		// pair (or header pair + `run` index bytes); reconstructing the
		// pixel total from the stream directly would duplicate the
		// decoder's own logic, so this just asserts it terminates and
		// produces a non-empty stream for a representative size.
		let data = synthetic_rle_stream(sizes::RLE_SMALL_PIXELS);
		assert!(!data.is_empty());
	}
}
