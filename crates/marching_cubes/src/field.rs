//! Density field access.
//!
//! [`DensityField`] is the read-only view the kernel samples from;
//! [`DensityBuffer`] is the owned counterpart for callers that build fields
//! programmatically or hand them to the async pipeline. Both validate their
//! dimensions once, at construction; every access after that is infallible.

use glam::IVec3;
use thiserror::Error;

use crate::grid::Grid;

/// Precondition violations caught at field construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
  /// A grid needs two samples per axis before it contains a single cell.
  #[error("grid needs at least 2 samples per axis, got {samples_per_axis}")]
  GridTooSmall { samples_per_axis: u32 },

  /// Sample storage does not match the declared resolution.
  #[error("expected {expected} samples for a {samples_per_axis}^3 grid, got {actual}")]
  SampleCountMismatch {
    samples_per_axis: u32,
    expected: usize,
    actual: usize,
  },
}

fn validate(len: usize, samples_per_axis: u32) -> Result<Grid, FieldError> {
  if samples_per_axis < 2 {
    return Err(FieldError::GridTooSmall { samples_per_axis });
  }
  let grid = Grid::new(samples_per_axis);
  if len != grid.sample_count() {
    return Err(FieldError::SampleCountMismatch {
      samples_per_axis,
      expected: grid.sample_count(),
      actual: len,
    });
  }
  Ok(grid)
}

/// Borrowed, read-only density volume.
///
/// Sampling clamps out-of-range coordinates per axis instead of failing,
/// which lets normal estimation probe one step outside a boundary cell
/// without a bounds branch.
#[derive(Clone, Copy)]
pub struct DensityField<'a> {
  samples: &'a [f32],
  grid: Grid,
}

impl<'a> DensityField<'a> {
  /// Wrap a flat sample slice laid out as `x·S² + y·S + z`.
  pub fn new(samples: &'a [f32], samples_per_axis: u32) -> Result<Self, FieldError> {
    let grid = validate(samples.len(), samples_per_axis)?;
    Ok(Self { samples, grid })
  }

  #[inline(always)]
  pub fn grid(&self) -> Grid {
    self.grid
  }

  #[inline(always)]
  pub fn samples_per_axis(&self) -> u32 {
    self.grid.samples_per_axis()
  }

  #[inline(always)]
  pub fn samples(&self) -> &'a [f32] {
    self.samples
  }

  /// Sample the field at a lattice coordinate, clamped into range.
  #[inline(always)]
  pub fn sample(&self, coord: IVec3) -> f32 {
    let c = self.grid.clamp(coord);
    self.samples[self.grid.linearize(c.x, c.y, c.z)]
  }
}

impl std::fmt::Debug for DensityField<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DensityField")
      .field("samples_per_axis", &self.grid.samples_per_axis())
      .field("samples", &self.samples.len())
      .finish()
  }
}

/// Owned density volume, same layout as [`DensityField`].
#[derive(Clone)]
pub struct DensityBuffer {
  samples: Vec<f32>,
  grid: Grid,
}

impl DensityBuffer {
  /// Take ownership of a flat sample vector laid out as `x·S² + y·S + z`.
  pub fn new(samples: Vec<f32>, samples_per_axis: u32) -> Result<Self, FieldError> {
    let grid = validate(samples.len(), samples_per_axis)?;
    Ok(Self { samples, grid })
  }

  /// Build a volume by evaluating `f` at every lattice coordinate, in layout
  /// order.
  pub fn from_fn<F>(samples_per_axis: u32, mut f: F) -> Result<Self, FieldError>
  where
    F: FnMut(IVec3) -> f32,
  {
    if samples_per_axis < 2 {
      return Err(FieldError::GridTooSmall { samples_per_axis });
    }
    let grid = Grid::new(samples_per_axis);
    let mut samples = Vec::with_capacity(grid.sample_count());
    for x in 0..samples_per_axis {
      for y in 0..samples_per_axis {
        for z in 0..samples_per_axis {
          samples.push(f(IVec3::new(x as i32, y as i32, z as i32)));
        }
      }
    }
    Ok(Self { samples, grid })
  }

  /// Build a volume with every sample set to `value`.
  pub fn filled(samples_per_axis: u32, value: f32) -> Result<Self, FieldError> {
    if samples_per_axis < 2 {
      return Err(FieldError::GridTooSmall { samples_per_axis });
    }
    let grid = Grid::new(samples_per_axis);
    Ok(Self {
      samples: vec![value; grid.sample_count()],
      grid,
    })
  }

  #[inline(always)]
  pub fn grid(&self) -> Grid {
    self.grid
  }

  #[inline(always)]
  pub fn samples_per_axis(&self) -> u32 {
    self.grid.samples_per_axis()
  }

  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  /// Overwrite one sample. `coord` must be within `[0, S)` per axis.
  pub fn set(&mut self, x: u32, y: u32, z: u32, value: f32) {
    let idx = self.grid.linearize(x, y, z);
    self.samples[idx] = value;
  }

  /// Borrow as the view type the kernel consumes.
  #[inline]
  pub fn as_field(&self) -> DensityField<'_> {
    DensityField {
      samples: &self.samples,
      grid: self.grid,
    }
  }
}

impl std::fmt::Debug for DensityBuffer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DensityBuffer")
      .field("samples_per_axis", &self.grid.samples_per_axis())
      .field("samples", &self.samples.len())
      .finish()
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
