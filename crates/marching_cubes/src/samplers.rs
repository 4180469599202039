//! Deterministic density samplers for testing and debugging.
//!
//! These samplers evaluate simple analytic fields that are easy to verify
//! visually. Use them to exercise extraction without hooking up a real
//! volume source. Positions are in lattice space: sample `(x, y, z)` of an
//! S³ volume sees the position `(x, y, z)` directly.

use glam::Vec3A;

use crate::field::{DensityBuffer, FieldError};

/// An analytic density field that can be baked into a volume.
pub trait DensitySource {
  /// Density at a lattice-space position. Negative means inside at the
  /// default surface level of zero.
  fn density(&self, position: Vec3A) -> f32;

  /// Bake the field into an owned S³ volume, in layout order.
  fn sample_volume(&self, samples_per_axis: u32) -> Result<DensityBuffer, FieldError> {
    DensityBuffer::from_fn(samples_per_axis, |c| self.density(c.as_vec3a()))
  }
}

/// Sphere distance field.
#[derive(Clone, Copy)]
pub struct SphereSampler {
  /// Center in lattice space.
  pub center: Vec3A,
  /// Radius in lattice units.
  pub radius: f32,
}

impl SphereSampler {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3A::ZERO,
      radius,
    }
  }

  /// Sphere centered in an S³ volume, sized to leave a margin around the
  /// surface on every side.
  pub fn centered_in(samples_per_axis: u32) -> Self {
    let extent = (samples_per_axis - 1) as f32;
    Self {
      center: Vec3A::splat(extent * 0.5),
      radius: extent * 0.35,
    }
  }

  pub fn with_center(mut self, center: Vec3A) -> Self {
    self.center = center;
    self
  }
}

impl DensitySource for SphereSampler {
  fn density(&self, position: Vec3A) -> f32 {
    (position - self.center).length() - self.radius
  }
}

/// Tilted plane distance field.
///
/// A plane tilted around the Z axis with normal `(-sin a, cos a, 0)`. The
/// surface crosses cell boundaries at a predictable angle, which makes seams
/// between parallel blocks easy to spot.
#[derive(Clone, Copy)]
pub struct TiltedPlaneSampler {
  /// Height offset of the plane.
  pub height: f32,
  /// Tilt angle in radians.
  pub angle: f32,
}

impl Default for TiltedPlaneSampler {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4, // 45 degrees
    }
  }
}

impl TiltedPlaneSampler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }
}

impl DensitySource for TiltedPlaneSampler {
  fn density(&self, position: Vec3A) -> f32 {
    (position.y - self.height) * self.angle.cos() - position.x * self.angle.sin()
  }
}

/// Metaball (blobby) field.
///
/// Each ball contributes `strength · r² / d²`; the surface sits where the
/// combined field equals the threshold. Not a true distance field, which is
/// fine for extraction: only the sign pattern and crossing points matter.
#[derive(Clone)]
pub struct MetaballsSampler {
  /// Individual metaballs.
  pub balls: Vec<Metaball>,
  /// Field threshold for the surface.
  pub threshold: f32,
}

/// A single metaball influence.
#[derive(Clone, Copy)]
pub struct Metaball {
  /// Center in lattice space.
  pub center: Vec3A,
  /// Radius of influence.
  pub radius: f32,
  /// Strength of the influence (typically 1.0).
  pub strength: f32,
}

impl MetaballsSampler {
  pub fn new(balls: Vec<Metaball>, threshold: f32) -> Self {
    Self { balls, threshold }
  }

  /// Scatter `count` balls inside an S³ volume using a seeded PRNG.
  ///
  /// Centers keep a margin from the volume faces so the blobs stay mostly
  /// interior; the same seed always produces the same arrangement.
  pub fn scattered(seed: u32, count: usize, samples_per_axis: u32) -> Self {
    let extent = (samples_per_axis - 1) as f32;
    let margin = extent * 0.2;
    let span = extent - 2.0 * margin;

    let mut rng = XorShift32::new(seed);
    let mut balls = Vec::with_capacity(count);
    for _ in 0..count {
      let center = Vec3A::new(
        margin + rng.next_f32() * span,
        margin + rng.next_f32() * span,
        margin + rng.next_f32() * span,
      );
      // Radius in [0.1, 0.25] of the volume extent
      let radius = extent * (0.1 + rng.next_f32() * 0.15);

      balls.push(Metaball {
        center,
        radius,
        strength: 1.0,
      });
    }

    Self {
      balls,
      threshold: 1.0,
    }
  }
}

impl DensitySource for MetaballsSampler {
  fn density(&self, position: Vec3A) -> f32 {
    let mut field = 0.0;
    for ball in &self.balls {
      let dist_sq = (position - ball.center).length_squared();
      let r_sq = ball.radius * ball.radius;

      if dist_sq < r_sq * 0.01 {
        // Near the center the falloff blows up; clamp the contribution
        field += ball.strength * 100.0;
      } else {
        field += ball.strength * r_sq / dist_sq;
      }
    }

    // Negative inside (field above threshold), positive outside
    self.threshold - field
  }
}

/// Simple xorshift32 PRNG for deterministic random generation.
struct XorShift32 {
  state: u32,
}

impl XorShift32 {
  fn new(seed: u32) -> Self {
    // Ensure non-zero state
    Self {
      state: if seed == 0 { 1 } else { seed },
    }
  }

  fn next(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }

  fn next_f32(&mut self) -> f32 {
    self.next() as f32 / u32::MAX as f32
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn straddles_zero(buffer: &DensityBuffer) -> bool {
    let has_positive = buffer.samples().iter().any(|&v| v > 0.0);
    let has_negative = buffer.samples().iter().any(|&v| v < 0.0);
    has_positive && has_negative
  }

  #[test]
  fn sphere_surface_exists() {
    let volume = SphereSampler::centered_in(16)
      .sample_volume(16)
      .expect("valid volume");

    assert!(straddles_zero(&volume), "Sphere surface should cross the volume");
  }

  #[test]
  fn tilted_plane_crosses_volume() {
    let volume = TiltedPlaneSampler::new()
      .with_height(8.0)
      .sample_volume(16)
      .expect("valid volume");

    assert!(straddles_zero(&volume), "Tilted plane should cross the volume");
  }

  #[test]
  fn metaballs_create_surface() {
    let volume = MetaballsSampler::scattered(42, 5, 24)
      .sample_volume(24)
      .expect("valid volume");

    assert!(straddles_zero(&volume), "Metaballs surface should cross the volume");
  }

  #[test]
  fn metaballs_deterministic() {
    // Same seed should produce same arrangement
    let first = MetaballsSampler::scattered(123, 3, 16);
    let second = MetaballsSampler::scattered(123, 3, 16);

    assert_eq!(first.balls.len(), second.balls.len());
    for (a, b) in first.balls.iter().zip(second.balls.iter()) {
      assert_eq!(a.center, b.center);
      assert_eq!(a.radius, b.radius);
    }
  }

  #[test]
  fn sample_volume_rejects_degenerate_grid() {
    assert!(SphereSampler::new(1.0).sample_volume(1).is_err());
  }
}
