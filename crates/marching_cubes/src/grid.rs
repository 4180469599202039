//! Volume layout for S³ sample grids.
//!
//! Resolution is a runtime parameter, so indexing uses plain multiplies
//! rather than bit shifts; the layout itself is fixed.
//!
//! # Memory Layout
//!
//! ```text
//! Volume memory layout (row-major, Z innermost):
//!
//! Address:  0     1    ...  S-1    S   ...  S²-1   S²  ...
//! Content: [0,0,0][0,0,1]...[0,0,S-1][0,1,0]...[0,S-1,S-1][1,0,0]...
//!          └─────── Z ────────┘└──────── Z ────────┘
//!
//! index = x·S² + y·S + z
//! ```
//!
//! # Cells
//!
//! ```text
//! Sample index:   0     1     2    ...   S-2   S-1
//!                 │     │                 │     │
//!                 └─────┴── cell origins ─┘     │
//!                          [0, S-2]             └─ corner-only sample
//! ```
//!
//! A cell at base `(x,y,z)` spans samples `(x..=x+1, y..=y+1, z..=z+1)`, so
//! only bases with every axis below `S-1` are valid cell origins; the last
//! sample per axis exists purely as the +1 corner of the last cell.

use glam::{IVec3, UVec3};

/// Layout of an `S³` sample volume and its `(S-1)³` cell lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
  samples_per_axis: u32,
}

impl Grid {
  pub const fn new(samples_per_axis: u32) -> Self {
    Self { samples_per_axis }
  }

  #[inline(always)]
  pub const fn samples_per_axis(&self) -> u32 {
    self.samples_per_axis
  }

  /// Total samples in the volume (S³).
  #[inline(always)]
  pub const fn sample_count(&self) -> usize {
    let s = self.samples_per_axis as usize;
    s * s * s
  }

  /// Cell origins per axis (S-1).
  #[inline(always)]
  pub const fn cells_per_axis(&self) -> u32 {
    self.samples_per_axis.saturating_sub(1)
  }

  /// Total interior cells ((S-1)³).
  #[inline(always)]
  pub const fn cell_count(&self) -> usize {
    let c = self.cells_per_axis() as usize;
    c * c * c
  }

  /// Convert sample coordinates to a linear index.
  ///
  /// Layout: X is the major axis (stride S²), Y is middle (stride S), Z is
  /// minor (stride 1).
  #[inline(always)]
  pub const fn linearize(&self, x: u32, y: u32, z: u32) -> usize {
    let s = self.samples_per_axis as usize;
    x as usize * s * s + y as usize * s + z as usize
  }

  /// Convert a linear index back to sample coordinates.
  #[inline(always)]
  pub const fn delinearize(&self, index: usize) -> (u32, u32, u32) {
    let s = self.samples_per_axis as usize;
    let x = index / (s * s);
    let y = (index / s) % s;
    let z = index % s;
    (x as u32, y as u32, z as u32)
  }

  /// Clamp a signed coordinate per-axis into the valid sample range
  /// `[0, S-1]`. Out-of-range probes resolve to the nearest boundary sample;
  /// nothing wraps.
  #[inline(always)]
  pub fn clamp(&self, coord: IVec3) -> UVec3 {
    let max = self.samples_per_axis as i32 - 1;
    coord.clamp(IVec3::ZERO, IVec3::splat(max)).as_uvec3()
  }

  /// Whether `base` is a valid cell origin (all axes below S-1).
  #[inline(always)]
  pub const fn is_cell_origin(&self, base: UVec3) -> bool {
    let cells = self.cells_per_axis();
    base.x < cells && base.y < cells && base.z < cells
  }

  /// All valid cell origins, in layout order (X major, Z minor).
  pub fn cell_origins(&self) -> impl Iterator<Item = UVec3> {
    let cells = self.cells_per_axis();
    (0..cells).flat_map(move |x| {
      (0..cells).flat_map(move |y| (0..cells).map(move |z| UVec3::new(x, y, z)))
    })
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
