use super::*;

fn vertex_at(x: f32, y: f32, z: f32) -> Vertex {
  Vertex {
    position: [x, y, z],
    normal: [0.0, 1.0, 0.0],
  }
}

fn triangle_at(base: f32) -> Triangle {
  Triangle::new(
    vertex_at(base, 0.0, 0.0),
    vertex_at(base + 1.0, 0.0, 0.0),
    vertex_at(base, 1.0, 0.0),
  )
}

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_empty_is_invalid() {
  assert!(!MinMaxAABB::empty().is_valid());
}

#[test]
fn test_aabb_encapsulate_aabb_ignores_empty() {
  let mut aabb = MinMaxAABB::new([0.0; 3], [1.0; 3]);
  aabb.encapsulate_aabb(&MinMaxAABB::empty());

  assert_eq!(aabb.min, [0.0; 3]);
  assert_eq!(aabb.max, [1.0; 3]);
}

#[test]
fn test_buffer_push_updates_counts_and_bounds() {
  let mut buffer = TriangleBuffer::new();
  assert!(buffer.is_empty());

  buffer.push(triangle_at(0.0));
  buffer.push(triangle_at(4.0));

  assert_eq!(buffer.triangle_count(), 2);
  assert_eq!(buffer.vertex_count(), 6);
  assert!(buffer.bounds.is_valid());
  assert_eq!(buffer.bounds.min, [0.0, 0.0, 0.0]);
  assert_eq!(buffer.bounds.max, [5.0, 1.0, 0.0]);
}

#[test]
fn test_buffer_merge() {
  let mut a = TriangleBuffer::new();
  a.push(triangle_at(0.0));

  let mut b = TriangleBuffer::new();
  b.push(triangle_at(10.0));
  b.push(triangle_at(-10.0));

  a.merge(b);
  assert_eq!(a.triangle_count(), 3);
  assert_eq!(a.bounds.min[0], -10.0);
  assert_eq!(a.bounds.max[0], 11.0);
}

#[test]
fn test_buffer_merge_empty_keeps_bounds() {
  let mut a = TriangleBuffer::new();
  a.push(triangle_at(0.0));
  let before = a.bounds;

  a.merge(TriangleBuffer::new());
  assert_eq!(a.triangle_count(), 1);
  assert_eq!(a.bounds.min, before.min);
  assert_eq!(a.bounds.max, before.max);
}

#[test]
fn test_buffer_clear() {
  let mut buffer = TriangleBuffer::new();
  buffer.push(triangle_at(0.0));
  buffer.clear();

  assert!(buffer.is_empty());
  assert_eq!(buffer.triangle_count(), 0);
  assert!(!buffer.bounds.is_valid());
}

#[test]
fn test_extract_config_builder() {
  let config = ExtractConfig::new()
    .with_surface_level(0.5)
    .with_cell_size(2.0);

  assert_eq!(config.surface_level, 0.5);
  assert_eq!(config.cell_size, 2.0);
}

#[test]
fn test_extract_config_defaults() {
  let config = ExtractConfig::default();
  assert_eq!(config.surface_level, 0.0);
  assert_eq!(config.cell_size, 1.0);
}
