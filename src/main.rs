//! `nme-unpacker` binary entry point: argument parsing, logging setup, and
//! dispatch into [`nme_internal::unpack`].
//!
//! Kept deliberately thin — every decision with a correctness consequence
//! lives in `nme_types`; this file's only job is turning CLI flags into a
//! call to [`nme_internal::unpack`] and mapping the result onto an exit
//! code per §7's propagation policy.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use nme_internal::prelude::*;
use nme_internal::nme_types::archive::traverse::{Arena, EntrySink, NodeId, walk};
use nme_internal::nme_types::archive::reader::ByteReader;

use nme_unpacker::alloc::{current_bytes, TrackingAllocator};

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

/// `nme-unpacker [options] <archive-file>` — a flat flag set, no
/// subcommands, matching the reference tool's single-letter options (§6).
///
/// `-h`/`-v` are declared as plain booleans rather than clap's
/// auto-generated help/version flags: their banner text is bespoke and
/// both must run without requiring an archive argument.
#[derive(Parser)]
#[command(name = "nme-unpacker", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
	/// Print help banner and usage summary.
	#[arg(short = 'h')]
	help: bool,

	/// Print version line and feature list.
	#[arg(short = 'v')]
	version: bool,

	/// Enable extraction to the given directory (default `.` when given
	/// without a value; extraction is skipped entirely when `-e` is never
	/// passed).
	#[arg(short = 'e', num_args = 0..=1, default_missing_value = ".")]
	extract: Option<String>,

	/// Enable verbose metadata printing.
	#[arg(short = 'z')]
	verbose: bool,

	/// Input archive path. Any bare token not starting with `-`; if given
	/// more than once, the last one wins.
	#[arg(value_name = "FILE")]
	inputs: Vec<String>,
}

const HELP_BANNER: &str = "\
nme-unpacker - recovers a DIR archive's directory tree and decodes nested
WAD image data (paletted and run-length-encoded) to BMP/PNG.

USAGE:
    nme-unpacker [options] <archive-file>

OPTIONS:
    -h          Print this help banner and usage summary
    -v          Print version line and feature list
    -e[path]    Enable extraction to the given directory (default: .)
    -z          Enable verbose metadata printing";

fn print_version() {
	println!(
		"nme-unpacker ({}) version {} [dir, wad, rle, bmp, png]",
		env!("CARGO_PKG_NAME"),
		env!("CARGO_PKG_VERSION")
	);
	println!("authored in 2026 # released into the public domain");
}

/// Picks the archive path from the positional arguments: the last one,
/// warning if more than one was supplied (§6).
fn pick_archive_path(inputs: &[String]) -> Option<&str> {
	if inputs.len() > 1 {
		warn!("multiple input archives given; using the last ({})", inputs[inputs.len() - 1]);
	}
	inputs.last().map(String::as_str)
}

/// Traverses the archive without writing anything, for the `-z`-without-
/// `-e` case: the verbose line format in §6 is a standalone output
/// contract, not conditioned on extraction being enabled.
struct Lister;

impl<R> EntrySink<R> for Lister {
	fn on_file(&mut self, _reader: &mut ByteReader<R>, _arena: &Arena, _id: NodeId) -> Result<()> {
		Ok(())
	}

	fn on_verbose(&mut self, arena: &Arena, id: NodeId) {
		let entry = arena.entry(id);
		println!("[{} {} {}]", entry.name, entry.offset, entry.size);
	}
}

fn run(archive_path: &str, extract_dir: Option<&str>, verbose: bool) -> Result<()> {
	let Some(output_dir) = extract_dir else {
		let input = File::open(archive_path)?;
		let mut reader = ByteReader::new(input);
		let mut lister = Lister;
		return walk(&mut reader, &mut lister, verbose);
	};

	let input = File::open(archive_path)?;
	let stats = unpack(input, Path::new(output_dir), verbose)?;
	println!(
		"extracted {} file(s), decoded {} image(s) to {}",
		stats.files_written, stats.images_written, output_dir
	);
	Ok(())
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			let option = err.to_string().lines().next().unwrap_or_default().to_string();
			eprintln!("Error: {}", NmeError::UnknownOption(option));
			return ExitCode::FAILURE;
		}
	};

	if cli.help {
		println!("{HELP_BANNER}");
		return ExitCode::SUCCESS;
	}
	if cli.version {
		print_version();
		return ExitCode::SUCCESS;
	}

	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let Some(archive_path) = pick_archive_path(&cli.inputs) else {
		eprintln!("Error: {}", NmeError::NoInputFiles);
		return ExitCode::FAILURE;
	};
	let archive_path: PathBuf = archive_path.into();

	match run(archive_path.to_string_lossy().as_ref(), cli.extract.as_deref(), cli.verbose) {
		Ok(()) => {
			let leaked = current_bytes();
			assert_eq!(leaked, 0, "heap-byte-accounting assertion: {leaked} bytes still live at exit");
			ExitCode::SUCCESS
		}
		Err(err) => {
			error!("{err}");
			eprintln!("Error: {err}");
			match err.kind() {
				ErrorKind::Resource => std::process::abort(),
				_ => ExitCode::FAILURE,
			}
		}
	}
}
