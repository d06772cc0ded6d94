//! Output path composition.
//!
//! Builds `D / e_0.name / … / e_k.name / e.name` from an entry's ancestor
//! chain, without touching the filesystem or mutating the arena — creating
//! the intermediate directories is the CLI's job (§4.B).

use std::path::{Path, PathBuf};

use crate::archive::traverse::{Arena, NodeId};

/// Composes the output path for `id` under base directory `base`,
/// prepending every ancestor's name root-first.
pub fn path_for_entry(arena: &Arena, id: NodeId, base: &Path) -> PathBuf {
	let mut path = base.to_path_buf();
	for ancestor in arena.ancestors_root_first(id) {
		path.push(&ancestor.name);
	}
	path.push(&arena.entry(id).name);
	path
}
