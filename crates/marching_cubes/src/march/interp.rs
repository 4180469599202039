//! Edge interpolation and gradient normal estimation.
//!
//! One call produces one output vertex: the linear zero-crossing of the
//! density along a cube edge, plus a normal blended from the two endpoint
//! gradients. Everything here is straight-line arithmetic with no fallback
//! branches; degenerate inputs propagate as non-finite floats rather than
//! being patched over (see the notes on [`surface_vertex`]).

use glam::{IVec3, Vec3A};

use crate::field::DensityField;
use crate::types::Vertex;

/// Unit gradient direction at a lattice point, from central differences of
/// the clamped field along the three axes.
///
/// The clamped accessor makes the ±1 probes safe on the volume boundary. A
/// zero gradient has no direction and normalizes to non-finite components;
/// cells the emitter visits always have a crossing nearby, so this only
/// arises for hand-crafted probe coordinates deep inside uniform regions.
#[inline]
pub fn corner_normal(field: &DensityField, coord: IVec3) -> Vec3A {
  let gx = field.sample(coord + IVec3::X) - field.sample(coord - IVec3::X);
  let gy = field.sample(coord + IVec3::Y) - field.sample(coord - IVec3::Y);
  let gz = field.sample(coord + IVec3::Z) - field.sample(coord - IVec3::Z);

  let gradient = Vec3A::new(gx, gy, gz);
  gradient * gradient.length_squared().sqrt().recip()
}

/// Interpolate the surface crossing on the edge between two corners.
///
/// * `t = (surface_level - density_a) / (density_b - density_a)`. The density
///   delta is not guarded: equal corner densities divide by zero and yield a
///   non-finite vertex. Edges selected by the triangulation tables always
///   have one endpoint at-or-below and one strictly above the level, so the
///   delta is nonzero on every emitter path; only direct calls can hit this.
/// * The position is lerped in lattice space, then scaled to world space by
///   `cell_size`.
/// * The normal is the `t`-blend of the two unit endpoint normals, left
///   unrenormalized. Its length is <= 1 and shrinks as the endpoint
///   directions diverge.
#[inline]
pub fn surface_vertex(
  field: &DensityField,
  surface_level: f32,
  cell_size: f32,
  corner_a: IVec3,
  corner_b: IVec3,
  density_a: f32,
  density_b: f32,
) -> Vertex {
  let t = (surface_level - density_a) / (density_b - density_a);

  let pos_a = corner_a.as_vec3a();
  let pos_b = corner_b.as_vec3a();
  let position = (pos_a + t * (pos_b - pos_a)) * cell_size;

  let normal_a = corner_normal(field, corner_a);
  let normal_b = corner_normal(field, corner_b);
  let normal = normal_a + t * (normal_b - normal_a);

  Vertex {
    position: position.to_array(),
    normal: normal.to_array(),
  }
}

#[cfg(test)]
#[path = "interp_test.rs"]
mod interp_test;
