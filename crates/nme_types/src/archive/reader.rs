//! Positioned reads against a seekable input.
//!
//! Every field in this archive format is read at an exact offset, so the
//! reader is kept deliberately small: it never buffers ahead of what it was
//! asked for, and every short read becomes an [`NmeError::Io`].

use std::io::{Read, Seek, SeekFrom};

use crate::error::{NmeError, Result};

/// Wraps a seekable byte source and exposes the handful of operations the
/// rest of the decoder needs: positioned reads, absolute/relative seeks, and
/// a position query.
pub struct ByteReader<R> {
	inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
	/// Wraps `inner`. The reader takes ownership of the current seek
	/// position from here on.
	pub fn new(inner: R) -> Self {
		Self { inner }
	}

	/// Reads exactly `buf.len()` bytes at the current position.
	///
	/// Fails with [`NmeError::Io`] on any short read, including a clean EOF
	/// encountered mid-record.
	pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
		self.inner.read_exact(buf).map_err(NmeError::Io)
	}

	/// Reads and returns exactly `len` bytes at the current position.
	pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut buf = vec![0u8; len];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	/// Reads a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(u32::from_le_bytes(buf))
	}

	/// Reads a little-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		let mut buf = [0u8; 8];
		self.read_exact(&mut buf)?;
		Ok(u64::from_le_bytes(buf))
	}

	/// Reads a little-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		let mut buf = [0u8; 2];
		self.read_exact(&mut buf)?;
		Ok(u16::from_le_bytes(buf))
	}

	/// Reads a single signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		let mut buf = [0u8; 1];
		self.read_exact(&mut buf)?;
		Ok(buf[0] as i8)
	}

	/// Seeks to an absolute offset from the start of the stream.
	pub fn seek_to(&mut self, offset: u64) -> Result<u64> {
		self.inner.seek(SeekFrom::Start(offset)).map_err(NmeError::Io)
	}

	/// Seeks by a relative offset from the current position.
	pub fn seek_relative(&mut self, delta: i64) -> Result<u64> {
		self.inner.seek(SeekFrom::Current(delta)).map_err(NmeError::Io)
	}

	/// Returns the current position.
	pub fn position(&mut self) -> Result<u64> {
		self.inner.seek(SeekFrom::Current(0)).map_err(NmeError::Io)
	}

	/// Returns `true` if the stream is positioned at its end.
	///
	/// Implemented by attempting a zero-effect probe read: peek one byte,
	/// then seek back if one was available.
	pub fn at_eof(&mut self) -> Result<bool> {
		let mut probe = [0u8; 1];
		match self.inner.read(&mut probe).map_err(NmeError::Io)? {
			0 => Ok(true),
			_ => {
				self.seek_relative(-1)?;
				Ok(false)
			}
		}
	}
}
