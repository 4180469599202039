//! Benchmarks comparing serial and block-parallel extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marching_cubes::samplers::{DensitySource, MetaballsSampler, SphereSampler};
use marching_cubes::{
  extract, extract_into, extract_parallel, DensityBuffer, ExtractConfig, TriangleBuffer,
};

fn sphere_volume(samples_per_axis: u32) -> DensityBuffer {
  SphereSampler::centered_in(samples_per_axis)
    .sample_volume(samples_per_axis)
    .expect("valid volume")
}

/// Baseline: serial extraction of a 32³ sphere.
fn bench_serial_sphere(c: &mut Criterion) {
  let volume = sphere_volume(32);
  let field = volume.as_field();
  let config = ExtractConfig::default();

  c.bench_function("extract (32³ sphere)", |b| {
    b.iter(|| black_box(extract(black_box(&field), &config)))
  });
}

/// Serial extraction into a reused output buffer.
fn bench_buffer_reuse(c: &mut Criterion) {
  let volume = sphere_volume(32);
  let field = volume.as_field();
  let config = ExtractConfig::default();

  c.bench_function("extract_into (32³ sphere, reused buffer)", |b| {
    let mut output = TriangleBuffer::new();
    b.iter(|| {
      output.clear();
      extract_into(black_box(&field), &config, &mut output);
      black_box(output.triangle_count())
    })
  });
}

/// Serial vs parallel across resolutions.
fn bench_serial_vs_parallel(c: &mut Criterion) {
  let mut group = c.benchmark_group("serial_vs_parallel");

  for samples in [16u32, 32, 64] {
    let volume = sphere_volume(samples);
    let field = volume.as_field();
    let config = ExtractConfig::default();

    group.bench_with_input(
      BenchmarkId::new("serial", format!("{}³", samples)),
      &samples,
      |b, _| b.iter(|| black_box(extract(black_box(&field), &config))),
    );

    group.bench_with_input(
      BenchmarkId::new("parallel", format!("{}³", samples)),
      &samples,
      |b, _| b.iter(|| black_box(extract_parallel(black_box(&field), &config))),
    );
  }

  group.finish();
}

/// Denser surfaces: scattered metaballs instead of one sphere.
fn bench_metaballs(c: &mut Criterion) {
  let volume = MetaballsSampler::scattered(42, 8, 48)
    .sample_volume(48)
    .expect("valid volume");
  let field = volume.as_field();
  let config = ExtractConfig::default();

  let mut group = c.benchmark_group("metaballs");

  group.bench_function("serial (48³, 8 balls)", |b| {
    b.iter(|| black_box(extract(black_box(&field), &config)))
  });

  group.bench_function("parallel (48³, 8 balls)", |b| {
    b.iter(|| black_box(extract_parallel(black_box(&field), &config)))
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_serial_sphere,
  bench_buffer_reuse,
  bench_serial_vs_parallel,
  bench_metaballs
);
criterion_main!(benches);
