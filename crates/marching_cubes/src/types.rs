//! Core data types for Marching Cubes extraction.

/// Output vertex: interpolated surface position plus gradient normal.
///
/// The normal is the t-blend of the two unit endpoint normals and is left
/// unrenormalized, so its length is at most 1 and shrinks as the endpoint
/// directions diverge. Consumers that need unit normals renormalize
/// themselves.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Position in world space (lattice coordinates scaled by cell size).
  pub position: [f32; 3],

  /// Blended gradient normal (length <= 1, see above).
  pub normal: [f32; 3],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
    }
  }
}

/// One output triangle. Owns its three vertices outright: adjacent cells
/// re-interpolate shared edges instead of sharing vertex data, so there is
/// no index buffer anywhere in this crate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub vertices: [Vertex; 3],
}

impl Triangle {
  pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
    Self {
      vertices: [a, b, c],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Expand AABB to include another AABB. Empty (invalid) AABBs are ignored.
  #[inline]
  pub fn encapsulate_aabb(&mut self, other: &MinMaxAABB) {
    if other.is_valid() {
      self.encapsulate(other.min);
      self.encapsulate(other.max);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extraction result: an unordered, append-only collection of triangles.
///
/// Emission order is not part of the contract. Parallel extraction fills one
/// buffer per worker and merges them, so the same input can legitimately
/// produce a different ordering run to run; compare contents, not sequences.
#[derive(Default, Clone, Debug)]
pub struct TriangleBuffer {
  /// Emitted triangles.
  pub triangles: Vec<Triangle>,

  /// Bounding box encompassing all emitted vertices.
  pub bounds: MinMaxAABB,
}

impl TriangleBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(triangles: usize) -> Self {
    Self {
      triangles: Vec::with_capacity(triangles),
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Append one triangle, growing the bounds.
  #[inline]
  pub fn push(&mut self, triangle: Triangle) {
    for vertex in &triangle.vertices {
      self.bounds.encapsulate(vertex.position);
    }
    self.triangles.push(triangle);
  }

  /// Move every triangle out of `other` into this buffer.
  pub fn merge(&mut self, mut other: TriangleBuffer) {
    self.triangles.append(&mut other.triangles);
    self.bounds.encapsulate_aabb(&other.bounds);
  }

  /// Clear the buffer, preserving capacity.
  pub fn clear(&mut self) {
    self.triangles.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Number of triangles.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Number of vertices (3 per triangle, none shared).
  pub fn vertex_count(&self) -> usize {
    self.triangles.len() * 3
  }
}

/// Configuration for isosurface extraction.
#[derive(Clone, Copy, Debug)]
pub struct ExtractConfig {
  /// Density threshold defining the surface. Samples at or below this value
  /// count as inside.
  pub surface_level: f32,

  /// World-space edge length of one lattice cell; scales vertex positions.
  pub cell_size: f32,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      surface_level: 0.0,
      cell_size: 1.0,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_surface_level(mut self, level: f32) -> Self {
    self.surface_level = level;
    self
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
