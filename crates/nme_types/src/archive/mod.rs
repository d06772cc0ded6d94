//! DIR/WAD archive decoding.
//!
//! [`unpack`] is the single entry point: it drives the BFS traversal
//! ([`traverse`]) over a seekable archive, writing directly stored files
//! verbatim and dispatching `.wad`-named files to the nested [`wad`]
//! parser. Every other module in this tree is a leaf component the
//! traversal composes.

pub mod color;
pub mod entry;
pub mod path;
pub mod queue;
pub mod reader;
pub mod traverse;
pub mod wad;
pub mod writer;

use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

use log::debug;

use crate::error::Result;
use reader::ByteReader;
use traverse::{Arena, EntrySink, NodeId, walk};

/// Tallies produced by a completed [`unpack`] call, useful for tests
/// asserting invariants 1 and 2 (§8) and for a CLI summary line.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnpackStats {
	/// Count of `type = 0` entries whose contents were written.
	pub files_written: usize,
	/// Count of images decoded out of nested WAD files.
	pub images_written: usize,
}

/// Drives a single archive traversal, writing every dispatched file to
/// `output_dir` and tallying the result.
///
/// The reader `walk` passes into `on_file` is already seeked to the
/// entry's offset, so a raw file is a plain `read_vec` and a `.wad` file
/// is handed straight to [`wad::process_wad`] — no second traversal, no
/// re-seeking.
struct Extractor<'a> {
	output_dir: &'a Path,
	verbose: bool,
	stats: UnpackStats,
}

impl<R: Read + Seek> EntrySink<R> for Extractor<'_> {
	fn on_file(&mut self, reader: &mut ByteReader<R>, arena: &Arena, id: NodeId) -> Result<()> {
		let entry = arena.entry(id);
		let out_path = path::path_for_entry(arena, id, self.output_dir);

		if has_extension(&entry.name, "wad") {
			ensure_parent_dir(&out_path)?;
			fs::create_dir_all(&out_path)?;
			debug!("entering wad '{}'", entry.name);
			let written = wad::process_wad(reader, &out_path, self.verbose)?;
			self.stats.images_written += written;
		} else {
			ensure_parent_dir(&out_path)?;
			let data = reader.read_vec(entry.size as usize)?;
			fs::write(&out_path, data)?;
			self.stats.files_written += 1;
		}

		Ok(())
	}

	fn on_verbose(&mut self, arena: &Arena, id: NodeId) {
		let entry = arena.entry(id);
		println!("[{} {} {}]", entry.name, entry.offset, entry.size);
	}
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	Ok(())
}

fn has_extension(name: &str, extension: &str) -> bool {
	match name.rfind('.') {
		Some(dot) => name[dot + 1..].eq_ignore_ascii_case(extension),
		None => false,
	}
}

/// Unpacks a DIR archive from `input` into `output_dir`.
///
/// Thin orchestration over [`traverse::walk`]: create the output root,
/// build one [`Extractor`], and let the traversal drive it.
pub fn unpack<R: Read + Seek>(input: R, output_dir: &Path, verbose: bool) -> Result<UnpackStats> {
	fs::create_dir_all(output_dir)?;
	let mut reader = ByteReader::new(input);
	let mut extractor = Extractor { output_dir, verbose, stats: UnpackStats::default() };

	walk(&mut reader, &mut extractor, verbose)?;

	Ok(extractor.stats)
}
