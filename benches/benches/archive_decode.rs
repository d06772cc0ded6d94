//! Benchmark suite for the DIR/WAD decoder's hot paths.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nme_benches::{sizes, synthetic_dir_archive, synthetic_rle_stream};
use nme_types::archive::color::rgb565_to_rgb8;
use nme_types::archive::reader::ByteReader;
use nme_types::archive::traverse::{Arena, EntrySink, NodeId, walk};
use nme_types::archive::wad::image::{ImageHeader, decode_rle};
use nme_types::archive::wad::palette::{Palette, PALETTE_SIZE};
use nme_types::error::Result;

struct NullSink;

impl<R> EntrySink<R> for NullSink {
	fn on_file(&mut self, _reader: &mut ByteReader<R>, _arena: &Arena, _id: NodeId) -> Result<()> {
		Ok(())
	}
}

fn bench_rgb565_conversion(c: &mut Criterion) {
	let mut group = c.benchmark_group("rgb565_to_rgb8");
	group.throughput(Throughput::Elements(u64::from(u16::MAX) + 1));
	group.bench_function("full_range", |b| {
		b.iter(|| {
			for value in 0..=u16::MAX {
				black_box(rgb565_to_rgb8(black_box(value)));
			}
		});
	});
	group.finish();
}

fn bench_rle_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("rle_decode");

	let palette_bytes = vec![0u8; PALETTE_SIZE];
	let mut reader = ByteReader::new(Cursor::new(palette_bytes));
	let palette = Palette::read(&mut reader).unwrap();

	for (name, pixel_count) in
		[("small_sprite", sizes::RLE_SMALL_PIXELS), ("full_frame", sizes::RLE_LARGE_PIXELS)]
	{
		let pixel_data = synthetic_rle_stream(pixel_count);
		let width = 640u32;
		let height = (pixel_count as u32).div_ceil(width).max(1);
		let header = ImageHeader {
			name: "bench.rle".into(),
			pixel_data_size: pixel_data.len() as u64,
			height,
			width,
			color_depth: 8,
		};

		group.throughput(Throughput::Elements(pixel_count as u64));
		group.bench_with_input(BenchmarkId::new("decode", name), &pixel_data, |b, data| {
			b.iter(|| black_box(decode_rle(&header, data, &palette)));
		});
	}

	group.finish();
}

fn bench_bfs_traversal(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfs_traverse");

	for (name, (file_count, file_size)) in
		[("tiny", sizes::TINY), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)]
	{
		let archive = synthetic_dir_archive(file_count, file_size);
		group.throughput(Throughput::Elements(file_count as u64));
		group.bench_with_input(BenchmarkId::new("walk", name), &archive, |b, data| {
			b.iter(|| {
				let mut reader = ByteReader::new(Cursor::new(data.clone()));
				let mut sink = NullSink;
				black_box(walk(&mut reader, &mut sink, false))
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_rgb565_conversion, bench_rle_decode, bench_bfs_traversal);
criterion_main!(benches);
