//! Arena-backed breadth-first traversal of the DIR archive.
//!
//! Entries are stored in a plain [`Vec`]-backed arena and referenced by
//! index; the ring buffer in [`crate::archive::queue`] holds only those
//! indices, not whole entries. Parents outlive children and the tree is
//! acyclic (§9), so an arena index is a sufficient, allocation-cheap
//! stand-in for the reference tool's raw parent pointer.

use std::io::{Read, Seek};

use log::debug;

use crate::archive::entry::{DecodedEntry, DirEntry, EntryKind, read_entry};
use crate::archive::queue::Queue;
use crate::archive::reader::ByteReader;
use crate::error::{NmeError, Result};

/// Index of a node within an [`Arena`].
pub type NodeId = usize;

/// One arena-resident entry: the decoded wire record plus a non-owning
/// back-reference to its parent.
struct Node {
	entry: DirEntry,
	parent: Option<NodeId>,
}

/// Owns every [`DirEntry`] discovered during a traversal, addressable by
/// [`NodeId`].
#[derive(Default)]
pub struct Arena {
	nodes: Vec<Node>,
}

impl Arena {
	/// Creates an empty arena.
	pub fn new() -> Self {
		Self::default()
	}

	fn push(&mut self, entry: DirEntry, parent: Option<NodeId>) -> NodeId {
		let id = self.nodes.len();
		self.nodes.push(Node { entry, parent });
		id
	}

	/// Returns the entry stored at `id`.
	pub fn entry(&self, id: NodeId) -> &DirEntry {
		&self.nodes[id].entry
	}

	/// Returns `id`'s ancestor chain, root-first, not including `id`
	/// itself.
	pub fn ancestors_root_first(&self, id: NodeId) -> Vec<&DirEntry> {
		let mut chain = Vec::new();
		let mut current = self.nodes[id].parent;
		while let Some(parent_id) = current {
			chain.push(&self.nodes[parent_id].entry);
			current = self.nodes[parent_id].parent;
		}
		chain.reverse();
		chain
	}
}

/// What the traverser does with a dequeued file entry: the caller supplies
/// this to receive dispatch without the traverser needing to know about
/// WAD parsing or raw extraction directly.
///
/// Parameterized over the same reader type `walk` was called with, so a
/// production sink can read the entry's bytes (or hand the reader to the
/// WAD parser) from exactly the position the traverser already seeked to,
/// with no second file handle and no re-seeking.
pub trait EntrySink<R> {
	/// Called once per dequeued file entry, in breadth-first order, with
	/// the reader positioned at the start of the entry's contents.
	///
	/// `arena` and `id` let the sink reconstruct the entry's full ancestor
	/// path via [`Arena::ancestors_root_first`].
	fn on_file(&mut self, reader: &mut ByteReader<R>, arena: &Arena, id: NodeId) -> Result<()>;

	/// Called once per dequeued entry (file or directory) after dispatch,
	/// only when verbose output is enabled. Sentinels are never passed
	/// here.
	fn on_verbose(&mut self, _arena: &Arena, _id: NodeId) {}
}

/// Walks the DIR archive breadth-first, dispatching file entries to `sink`.
///
/// Mirrors §4.E exactly: seek to 0, drain the root listing into the queue,
/// then repeatedly dequeue, seek to the entry's offset, and either expand a
/// directory's children into the queue or dispatch a file to `sink`. Any
/// entry type other than file/directory/sentinel aborts the whole
/// traversal — rejected at decode time by [`read_entry`] as
/// [`NmeError::CorruptEntryType`], which propagates straight out of this
/// function.
pub fn walk<R: Read + Seek>(
	reader: &mut ByteReader<R>,
	sink: &mut dyn EntrySink<R>,
	verbose: bool,
) -> Result<()> {
	let mut arena = Arena::new();
	let mut queue: Queue<NodeId> = Queue::new();

	reader.seek_to(0)?;
	enqueue_listing(reader, &mut arena, &mut queue, None)?;

	while let Some(id) = queue.dequeue() {
		let offset = u64::from(arena.entry(id).offset);
		debug!("dequeued '{}' at offset {offset}", arena.entry(id).name);
		reader.seek_to(offset)?;

		match arena.entry(id).kind {
			EntryKind::Directory => {
				enqueue_listing(reader, &mut arena, &mut queue, Some(id))?;
			}
			EntryKind::File => {
				if arena.entry(id).size > 0 {
					sink.on_file(reader, &arena, id)?;
				}
			}
		}

		if verbose {
			sink.on_verbose(&arena, id);
		}
	}

	Ok(())
}

/// Reads entries at the reader's current position until the sentinel is
/// seen, enqueuing each into `arena`/`queue` with `parent`.
fn enqueue_listing<R: Read + Seek>(
	reader: &mut ByteReader<R>,
	arena: &mut Arena,
	queue: &mut Queue<NodeId>,
	parent: Option<NodeId>,
) -> Result<()> {
	loop {
		match read_entry(reader)? {
			DecodedEntry::Sentinel => break,
			DecodedEntry::Entry(entry) => {
				let id = arena.push(entry, parent);
				queue.enqueue(id)?;
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::io::Cursor;

	use super::*;

	fn wire_entry(name: &str, type_byte: i8, size: u32, offset: u32) -> Vec<u8> {
		let mut buf = vec![0u8; crate::archive::entry::ENTRY_SIZE];
		let bytes = name.as_bytes();
		buf[..bytes.len()].copy_from_slice(bytes);
		buf[32] = type_byte as u8;
		buf[36..40].copy_from_slice(&size.to_le_bytes());
		buf[40..44].copy_from_slice(&offset.to_le_bytes());
		buf
	}

	fn sentinel() -> Vec<u8> {
		wire_entry("", -1, 0, 0)
	}

	struct RecordingSink {
		files: RefCell<Vec<String>>,
	}

	impl<R> EntrySink<R> for RecordingSink {
		fn on_file(&mut self, _reader: &mut ByteReader<R>, arena: &Arena, id: NodeId) -> Result<()> {
			self.files.borrow_mut().push(arena.entry(id).name.clone());
			Ok(())
		}
	}

	#[test]
	fn s1_empty_root_directory() {
		// Root listing: one dir entry pointing at offset 80, which
		// immediately contains the sentinel.
		let mut archive = wire_entry("sub", 1, 0, 80);
		archive.extend(sentinel()); // root sentinel at offset 44
		archive.resize(80, 0);
		archive.extend(sentinel()); // child listing at offset 80

		let mut reader = ByteReader::new(Cursor::new(archive));
		let mut sink = RecordingSink { files: RefCell::new(Vec::new()) };
		walk(&mut reader, &mut sink, false).unwrap();
		assert!(sink.files.borrow().is_empty());
	}

	#[test]
	fn s2_single_file_entry() {
		let mut archive = wire_entry("readme.txt", 0, 5, 88);
		archive.extend(sentinel());
		archive.resize(88, 0);
		archive.extend_from_slice(b"HELLO");

		let mut reader = ByteReader::new(Cursor::new(archive));
		let mut sink = RecordingSink { files: RefCell::new(Vec::new()) };
		walk(&mut reader, &mut sink, false).unwrap();
		assert_eq!(sink.files.into_inner(), vec!["readme.txt".to_string()]);
	}

	#[test]
	fn corrupt_type_byte_aborts_traversal() {
		let archive = wire_entry("bogus", 9, 0, 0);
		let mut reader = ByteReader::new(Cursor::new(archive));
		let mut sink = RecordingSink { files: RefCell::new(Vec::new()) };
		let err = walk(&mut reader, &mut sink, false).unwrap_err();
		assert!(matches!(err, NmeError::CorruptEntryType { value: 9 }));
	}

	#[test]
	fn ancestors_are_root_first() {
		let mut arena = Arena::new();
		let root = arena.push(
			DirEntry { name: "root".into(), kind: EntryKind::Directory, size: 0, offset: 0 },
			None,
		);
		let mid = arena.push(
			DirEntry { name: "mid".into(), kind: EntryKind::Directory, size: 0, offset: 0 },
			Some(root),
		);
		let leaf = arena.push(
			DirEntry { name: "leaf.txt".into(), kind: EntryKind::File, size: 0, offset: 0 },
			Some(mid),
		);
		let names: Vec<&str> =
			arena.ancestors_root_first(leaf).iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, vec!["root", "mid"]);
	}
}
