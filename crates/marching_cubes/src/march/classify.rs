//! Corner classification.

/// Build the 8-bit configuration index for one cell.
///
/// Bit `i` is set when `densities[i] <= surface_level`; a sample exactly on
/// the level counts as inside. The bit order is the corner order assumed by
/// the triangulation tables.
#[inline(always)]
pub fn classify(densities: &[f32; 8], surface_level: f32) -> u8 {
  let mut config = 0u8;
  for (corner, &density) in densities.iter().enumerate() {
    if density <= surface_level {
      config |= 1 << corner;
    }
  }
  config
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
