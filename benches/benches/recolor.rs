//! Benchmark suite for palette remapping
//!
//! Measures the per-pixel remap over synthetic sheets of increasing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spritetint_benches::generate_gray_sheet;
use spritetint_types::color::TargetPalette;
use spritetint_types::recolor::Remapper;
use std::hint::black_box;

fn bench_remap(c: &mut Criterion) {
	let mut group = c.benchmark_group("remap");
	let palette = TargetPalette::from_csv("#F4E3C1,#7A3B2E,#C8763A,#E0A45C,#1A1020")
		.unwrap_or_default();
	let remapper = Remapper::new(palette);

	for size in [64u32, 256, 1024] {
		let sheet = generate_gray_sheet(size, size);
		group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
		group.bench_with_input(BenchmarkId::new("apply", size), &sheet, |b, sheet| {
			b.iter(|| black_box(remapper.apply(black_box(sheet))));
		});
	}

	group.finish();
}

fn bench_map_pixel(c: &mut Criterion) {
	let remapper = Remapper::default();
	let pixels = generate_gray_sheet(7, 1).into_raw();

	c.bench_function("map_pixel", |b| {
		b.iter(|| {
			for chunk in pixels.chunks_exact(4) {
				let pixel = image::Rgba([chunk[0], chunk[1], chunk[2], chunk[3]]);
				black_box(remapper.map_pixel(black_box(pixel)));
			}
		});
	});
}

criterion_group!(benches, bench_remap, bench_map_pixel);
criterion_main!(benches);
