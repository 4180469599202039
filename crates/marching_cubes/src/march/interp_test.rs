use glam::IVec3;

use super::*;
use crate::field::DensityBuffer;

const EPS: f32 = 1e-5;

fn assert_vec3_close(actual: [f32; 3], expected: [f32; 3], label: &str) {
  for i in 0..3 {
    assert!(
      (actual[i] - expected[i]).abs() < EPS,
      "{}: component {} was {}, expected {}",
      label,
      i,
      actual[i],
      expected[i]
    );
  }
}

/// 2^3 volume, all inside except the corner at (0,1,1).
fn single_outlier_volume() -> DensityBuffer {
  let mut buffer = DensityBuffer::filled(2, -1.0).expect("valid buffer");
  buffer.set(0, 1, 1, 1.0);
  buffer
}

#[test]
fn test_t_midpoint_for_symmetric_densities() {
  let buffer = single_outlier_volume();
  let field = buffer.as_field();

  let vertex = surface_vertex(
    &field,
    0.0,
    1.0,
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    -1.0,
    1.0,
  );
  assert_vec3_close(vertex.position, [0.5, 0.0, 0.0], "midpoint position");
}

#[test]
fn test_t_asymmetric_densities() {
  let buffer = single_outlier_volume();
  let field = buffer.as_field();

  // level crosses a quarter of the way from a to b
  let vertex = surface_vertex(
    &field,
    0.0,
    1.0,
    IVec3::new(0, 0, 0),
    IVec3::new(0, 1, 0),
    -1.0,
    3.0,
  );
  assert_vec3_close(vertex.position, [0.0, 0.25, 0.0], "asymmetric position");
}

#[test]
fn test_cell_size_scales_position_not_normal() {
  let buffer = single_outlier_volume();
  let field = buffer.as_field();
  let a = IVec3::new(0, 1, 1);
  let b = IVec3::new(0, 0, 1);

  let unit = surface_vertex(&field, 0.0, 1.0, a, b, 1.0, -1.0);
  let scaled = surface_vertex(&field, 0.0, 2.5, a, b, 1.0, -1.0);

  for i in 0..3 {
    assert!(
      (scaled.position[i] - unit.position[i] * 2.5).abs() < EPS,
      "position axis {} should scale with cell size",
      i
    );
  }
  assert_eq!(scaled.normal, unit.normal, "normal ignores cell size");
}

#[test]
fn test_corner_normal_linear_ramp() {
  // f = x: the gradient points straight +X everywhere, including at the
  // clamped boundary where the backward probe folds onto the sample itself
  let buffer = DensityBuffer::from_fn(3, |c| c.x as f32).expect("valid buffer");
  let field = buffer.as_field();

  let interior = corner_normal(&field, IVec3::new(1, 1, 1));
  assert_vec3_close(interior.to_array(), [1.0, 0.0, 0.0], "interior normal");

  let boundary = corner_normal(&field, IVec3::new(0, 1, 1));
  assert_vec3_close(boundary.to_array(), [1.0, 0.0, 0.0], "boundary normal");
}

#[test]
fn test_blended_normal_not_renormalized() {
  let buffer = single_outlier_volume();
  let field = buffer.as_field();

  // Endpoint normals differ in direction:
  //   at (0,1,1): normalize(-2, 2, 2)
  //   at (0,0,1): normalize( 0, 2, 0)
  // At t = 0.5 the blend is their average, which is shorter than unit.
  let vertex = surface_vertex(
    &field,
    0.0,
    1.0,
    IVec3::new(0, 1, 1),
    IVec3::new(0, 0, 1),
    1.0,
    -1.0,
  );

  let inv_sqrt3 = 1.0 / 3.0f32.sqrt();
  let expected = [
    0.5 * -inv_sqrt3,
    0.5 * inv_sqrt3 + 0.5,
    0.5 * inv_sqrt3,
  ];
  assert_vec3_close(vertex.normal, expected, "blended normal");

  let len = (vertex.normal[0] * vertex.normal[0]
    + vertex.normal[1] * vertex.normal[1]
    + vertex.normal[2] * vertex.normal[2])
    .sqrt();
  assert!(
    len < 0.95,
    "blend of diverging normals should be shorter than unit, got {}",
    len
  );
}

#[test]
fn test_equal_densities_divide_by_zero() {
  // No guard on the density delta: both corners exactly on the level makes
  // t = 0/0. The kernel never selects such an edge; direct calls see NaN.
  let buffer = single_outlier_volume();
  let field = buffer.as_field();

  let vertex = surface_vertex(
    &field,
    0.0,
    1.0,
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    0.0,
    0.0,
  );
  assert!(
    vertex.position.iter().any(|c| c.is_nan()),
    "equal corner densities should produce a non-finite vertex"
  );
}
