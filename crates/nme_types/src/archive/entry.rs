//! Directory entry wire format and decoding.
//!
//! The on-wire entry is 44 bytes: a 32-byte name, a signed type byte, 3 pad
//! bytes, and two little-endian `u32`s (size, offset). This module reads
//! exactly that shape and nothing more — parent linkage and path
//! reconstruction are the traverser's concern ([`crate::archive::traverse`]),
//! kept separate from the wire record per this format's own design notes.

use crate::archive::reader::ByteReader;
use crate::error::{NmeError, Result};
use std::io::{Read, Seek};

/// Size of a directory entry on the wire, in bytes.
pub const ENTRY_SIZE: usize = 44;

/// Size of the fixed name field, in bytes.
pub const NAME_SIZE: usize = 32;

/// What a non-sentinel directory entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
	/// A regular file; `size` is the byte count of its payload.
	File,
	/// A directory; `size` is unused.
	Directory,
}

/// One decoded directory entry, with its name already NUL-clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
	/// Entry name (NUL-terminated string recovered from the padded field).
	pub name: String,
	/// Whether this is a file or a directory.
	pub kind: EntryKind,
	/// Byte count of the file payload (files only; unused for directories).
	pub size: u32,
	/// Absolute offset into the archive this entry addresses.
	pub offset: u32,
}

/// Result of decoding one wire entry: either a usable entry, or the
/// listing-terminating sentinel.
pub enum DecodedEntry {
	/// A file or directory entry.
	Entry(DirEntry),
	/// The `type = -1` sentinel marking the end of a listing.
	Sentinel,
}

/// Reads exactly one 44-byte entry from `reader`.
///
/// Clamps the name's final byte to NUL before decoding it as UTF-8-ish
/// bytes (lossily, since the format makes no charset guarantee), matching
/// the wire's own "non-NUL-terminated at full length" quirk (§3).
pub fn read_entry<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<DecodedEntry> {
	let mut name_buf = [0u8; NAME_SIZE];
	reader.read_exact(&mut name_buf)?;
	name_buf[NAME_SIZE - 1] = 0;

	let type_byte = reader.read_i8()?;

	let mut pad = [0u8; 3];
	reader.read_exact(&mut pad)?;

	let size = reader.read_u32()?;
	let offset = reader.read_u32()?;

	if type_byte == -1 {
		return Ok(DecodedEntry::Sentinel);
	}

	let kind = match type_byte {
		0 => EntryKind::File,
		1 => EntryKind::Directory,
		other => return Err(NmeError::CorruptEntryType { value: other }),
	};

	let name = decode_clamped_name(&name_buf);

	Ok(DecodedEntry::Entry(DirEntry { name, kind, size, offset }))
}

/// Decodes a NUL-clamped, NUL-padded fixed name field into a `String`,
/// stopping at the first NUL.
fn decode_clamped_name(buf: &[u8; NAME_SIZE]) -> String {
	let end = buf.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
	String::from_utf8_lossy(&buf[..end]).into_owned()
}
