//! Marching Cubes extraction kernel.
//!
//! Converts a scalar density volume into a triangle soup approximating the
//! isosurface at a configurable level. Each interior cell is classified by
//! which of its 8 corners sit at or below the level, and the resulting 8-bit
//! configuration selects a precomputed triangulation whose vertices are
//! interpolated along the crossed cube edges.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: DensityField     - S³ scalar samples, clamped access    │
//! │  config: ExtractConfig   - surface level, world cell size       │
//! │  tables                  - EDGE_TABLE / TRIANGLE_TABLE consts   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ per interior cell
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  PHASE 1: Classification                        │
//! │  Gather 8 corner coordinates and densities                      │
//! │  Build configuration: bit i set if density[i] <= level          │
//! │  Early-out when EDGE_TABLE[config] == 0 (uniform cell)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  PHASE 2: Triangulation                         │
//! │  Walk TRIANGLE_TABLE[config] in edge triples until -1           │
//! │  Per edge: resolve corners, interpolate position + normal       │
//! │  Collect one Triangle per triple (at most 5 per cell)           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  TriangleBuffer          - unordered triangles + bounds         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cells never share vertex data: adjacent cells re-interpolate their common
//! edges and arrive at numerically close but independently computed vertices.
//! That keeps every cell a straight-line computation with no cross-cell
//! state, which is what the parallel dispatch in [`crate::pipeline`] relies
//! on.

pub mod classify;
pub mod interp;

use glam::{IVec3, UVec3};
use smallvec::SmallVec;

use crate::field::DensityField;
use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRIANGLE_TABLE};
use crate::types::{ExtractConfig, Triangle, TriangleBuffer, Vertex};

/// Triangles emitted by a single cell. The canonical table tops out at 5.
pub type CellTriangles = SmallVec<[Triangle; 5]>;

/// March one cell: classify its corners and emit the configured triangles.
///
/// `base` addresses the cell by its minimum corner. Bases with any axis at or
/// beyond `S-1` are not valid cell origins and return an empty list, so a
/// caller may sweep the full sample range without its own bounds check.
pub fn march_cell(field: &DensityField, config: &ExtractConfig, base: UVec3) -> CellTriangles {
  let mut triangles = CellTriangles::new();

  if !field.grid().is_cell_origin(base) {
    return triangles;
  }

  let origin = base.as_ivec3();
  let corners: [IVec3; 8] = std::array::from_fn(|i| origin + CORNER_OFFSETS[i]);
  let densities: [f32; 8] = std::array::from_fn(|i| field.sample(corners[i]));

  let config_index = classify::classify(&densities, config.surface_level) as usize;

  // Uniform cells cross no edges
  if EDGE_TABLE[config_index] == 0 {
    return triangles;
  }

  let row = &TRIANGLE_TABLE[config_index];
  let mut slot = 0;
  while row[slot] >= 0 {
    let vertices: [Vertex; 3] = std::array::from_fn(|i| {
      let edge = row[slot + i] as usize;
      let [a, b] = EDGE_CORNERS[edge];
      interp::surface_vertex(
        field,
        config.surface_level,
        config.cell_size,
        corners[a as usize],
        corners[b as usize],
        densities[a as usize],
        densities[b as usize],
      )
    });
    triangles.push(Triangle { vertices });
    slot += 3;
  }

  triangles
}

/// Extract the full isosurface serially, cell by cell in layout order.
///
/// The parallel path in [`crate::pipeline`] produces the same multiset of
/// triangles; only the ordering differs.
pub fn extract(field: &DensityField, config: &ExtractConfig) -> TriangleBuffer {
  let mut output = TriangleBuffer::new();
  extract_into(field, config, &mut output);
  output
}

/// Extract into a caller-owned buffer, reusing its capacity.
pub fn extract_into(field: &DensityField, config: &ExtractConfig, output: &mut TriangleBuffer) {
  for base in field.grid().cell_origins() {
    for triangle in march_cell(field, config, base) {
      output.push(triangle);
    }
  }
}
