use std::cmp::Ordering;

use super::*;
use crate::field::DensityBuffer;
use crate::march::extract;
use crate::types::Triangle;

fn sphere_volume(samples_per_axis: u32, radius: f32) -> DensityBuffer {
  let center = (samples_per_axis - 1) as f32 * 0.5;
  DensityBuffer::from_fn(samples_per_axis, |c| {
    let dx = c.x as f32 - center;
    let dy = c.y as f32 - center;
    let dz = c.z as f32 - center;
    (dx * dx + dy * dy + dz * dz).sqrt() - radius
  })
  .expect("valid volume")
}

fn flatten(triangle: &Triangle) -> [f32; 18] {
  let mut flat = [0.0; 18];
  for (i, vertex) in triangle.vertices.iter().enumerate() {
    flat[i * 6..i * 6 + 3].copy_from_slice(&vertex.position);
    flat[i * 6 + 3..i * 6 + 6].copy_from_slice(&vertex.normal);
  }
  flat
}

fn sorted_triangles(buffer: &TriangleBuffer) -> Vec<[f32; 18]> {
  let mut flat: Vec<[f32; 18]> = buffer.triangles.iter().map(flatten).collect();
  flat.sort_by(|a, b| {
    for (x, y) in a.iter().zip(b.iter()) {
      let ord = x.total_cmp(y);
      if ord != Ordering::Equal {
        return ord;
      }
    }
    Ordering::Equal
  });
  flat
}

#[test]
fn test_blocks_per_axis_ceil_divides() {
  // 2 samples = 1 cell = 1 block
  assert_eq!(blocks_per_axis(Grid::new(2)), 1);
  // 9 samples = 8 cells = exactly 1 block
  assert_eq!(blocks_per_axis(Grid::new(9)), 1);
  // 10 samples = 9 cells = 2 blocks (second one partial)
  assert_eq!(blocks_per_axis(Grid::new(10)), 2);
  // 17 samples = 16 cells = 2 full blocks
  assert_eq!(blocks_per_axis(Grid::new(17)), 2);
  assert_eq!(blocks_per_axis(Grid::new(18)), 3);
}

#[test]
fn test_block_count_is_cubed() {
  assert_eq!(block_count(Grid::new(9)), 1);
  assert_eq!(block_count(Grid::new(10)), 8);
  assert_eq!(block_count(Grid::new(33)), 64);
}

#[test]
fn test_parallel_matches_serial_multiset() {
  // 18 samples = 17 cells = 3 blocks per axis, exercising partial blocks
  let buffer = sphere_volume(18, 6.5);
  let field = buffer.as_field();
  let config = ExtractConfig::default();

  let serial = extract(&field, &config);
  let parallel = extract_parallel(&field, &config);

  assert!(!serial.is_empty());
  assert_eq!(serial.triangle_count(), parallel.triangle_count());
  assert_eq!(
    sorted_triangles(&serial),
    sorted_triangles(&parallel),
    "Parallel path must emit the same triangles as the serial path"
  );
}

#[test]
fn test_parallel_bounds_match_serial() {
  let buffer = sphere_volume(12, 4.0);
  let field = buffer.as_field();
  let config = ExtractConfig::default();

  let serial = extract(&field, &config);
  let parallel = extract_parallel(&field, &config);

  assert!(parallel.bounds.is_valid());
  assert_eq!(serial.bounds.min, parallel.bounds.min);
  assert_eq!(serial.bounds.max, parallel.bounds.max);
}

#[test]
fn test_parallel_uniform_volume_is_empty() {
  let buffer = DensityBuffer::filled(16, 1.0).expect("valid volume");
  let output = extract_parallel(&buffer.as_field(), &ExtractConfig::default());

  assert!(output.is_empty());
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_minimum_grid_single_block() {
  let mut buffer = DensityBuffer::filled(2, -1.0).expect("valid volume");
  buffer.set(0, 1, 1, 1.0);

  let output = extract_parallel(&buffer.as_field(), &ExtractConfig::default());
  assert_eq!(output.triangle_count(), 1);
}

#[test]
fn test_timed_stats_are_consistent() {
  let buffer = sphere_volume(10, 3.0);
  let field = buffer.as_field();

  let (output, stats) = extract_parallel_timed(&field, &ExtractConfig::default());

  assert_eq!(stats.triangle_count, output.triangle_count());
  // 10 samples = 9 cells = 2 blocks per axis
  assert_eq!(stats.block_count, 8);
}
