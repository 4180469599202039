//! Block-parallel extraction dispatch.
//!
//! Splits the cell grid into fixed-size cubic blocks and marches each block
//! on rayon's thread pool. Workers fill private [`TriangleBuffer`]s, so the
//! only shared state is the read-only density field; the per-block buffers
//! are merged into one output afterwards.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ Dispatch                                                         │
//! │                                                                  │
//! │  cell grid (S-1)³ ──► blocks of 8³ cells, ceil-divided per axis  │
//! │           │                                                      │
//! │           ▼  rayon par_iter                                      │
//! │  ┌─────────────────────────────────────────────┐                 │
//! │  │ march_block: march_cell over the block's    │  one buffer     │
//! │  │ cells, clipped to the grid                  │  per block      │
//! │  └─────────────────────────────────────────────┘                 │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  merge block buffers ──► TriangleBuffer                          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Block ordering is not preserved across runs with different thread counts;
//! the output multiset is identical to the serial path either way.

use glam::UVec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::field::DensityField;
use crate::grid::Grid;
use crate::march::march_cell;
use crate::types::{ExtractConfig, TriangleBuffer};

/// Cells per block along each axis; one block covers 8³ = 512 cells.
pub const BLOCK_EDGE: u32 = 8;

/// Number of blocks along each axis for a grid.
pub fn blocks_per_axis(grid: Grid) -> u32 {
  grid.cells_per_axis().div_ceil(BLOCK_EDGE)
}

/// Total number of blocks covering the cell grid.
pub fn block_count(grid: Grid) -> u32 {
  let per_axis = blocks_per_axis(grid);
  per_axis * per_axis * per_axis
}

/// Statistics from one extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionStats {
  /// Number of triangles produced.
  pub triangle_count: usize,

  /// Number of blocks dispatched.
  pub block_count: usize,

  /// Wall-clock extraction time in microseconds.
  pub extract_us: u64,
}

/// March every cell of one block into a private buffer.
///
/// `block` is the block coordinate, not a cell coordinate. Edge blocks are
/// clipped to the cell grid, so partial blocks at the high boundary never
/// march out-of-range bases.
fn march_block(field: &DensityField, config: &ExtractConfig, block: UVec3) -> TriangleBuffer {
  let cells = field.grid().cells_per_axis();
  let lo = block * BLOCK_EDGE;
  let hi = (lo + UVec3::splat(BLOCK_EDGE)).min(UVec3::splat(cells));

  let mut output = TriangleBuffer::new();
  for x in lo.x..hi.x {
    for y in lo.y..hi.y {
      for z in lo.z..hi.z {
        for triangle in march_cell(field, config, UVec3::new(x, y, z)) {
          output.push(triangle);
        }
      }
    }
  }
  output
}

/// Extract the isosurface with one rayon task per block.
///
/// Produces the same triangle multiset as [`crate::march::extract`]; only
/// the emission order differs.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "pipeline::extract_parallel")
)]
pub fn extract_parallel(field: &DensityField, config: &ExtractConfig) -> TriangleBuffer {
  let per_axis = blocks_per_axis(field.grid());

  let blocks: Vec<UVec3> = (0..per_axis)
    .flat_map(|x| {
      (0..per_axis).flat_map(move |y| (0..per_axis).map(move |z| UVec3::new(x, y, z)))
    })
    .collect();

  let buffers: Vec<TriangleBuffer> = blocks
    .into_par_iter()
    .map(|block| march_block(field, config, block))
    .collect();

  let mut output = TriangleBuffer::new();
  for buffer in buffers {
    output.merge(buffer);
  }
  output
}

/// Same as [`extract_parallel`] but returns timing stats alongside.
pub fn extract_parallel_timed(
  field: &DensityField,
  config: &ExtractConfig,
) -> (TriangleBuffer, ExtractionStats) {
  let start = Instant::now();
  let output = extract_parallel(field, config);
  let extract_us = start.elapsed().as_micros() as u64;

  let stats = ExtractionStats {
    triangle_count: output.triangle_count(),
    block_count: block_count(field.grid()) as usize,
    extract_us,
  };

  (output, stats)
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
