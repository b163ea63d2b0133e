//! Benchmark suite for sheet tiling
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spritetint_benches::generate_frames;
use spritetint_types::sheet::tile_frames;
use std::hint::black_box;

fn bench_tile(c: &mut Criterion) {
	let mut group = c.benchmark_group("tile_frames");

	for count in [8usize, 64, 256] {
		let frames = generate_frames(count, 32);
		group.bench_with_input(BenchmarkId::new("32px", count), &frames, |b, frames| {
			b.iter(|| black_box(tile_frames(black_box(frames), 8, 2)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_tile);
criterion_main!(benches);
