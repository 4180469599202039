//! marching_cubes - Table-driven isosurface extraction from density volumes
//!
//! This crate converts scalar density volumes into triangle meshes using the
//! classic Marching Cubes algorithm: each interior cell of an S³ sample grid
//! is classified into one of 256 configurations, and precomputed tables
//! drive per-edge vertex interpolation.
//!
//! # Features
//!
//! - **Table-Driven Kernel**: 256-configuration triangulation with linear
//!   edge interpolation and central-difference gradient normals
//! - **Runtime Resolution**: any grid of at least 2 samples per axis, with
//!   clamped out-of-range access for boundary cells
//! - **Block-Parallel Dispatch**: 8³-cell blocks marched on rayon, merged
//!   into one buffer
//! - **Async Wrapper**: non-blocking start/poll extraction for frame loops
//!
//! # Example
//!
//! ```ignore
//! use marching_cubes::{extract, DensityBuffer, ExtractConfig};
//!
//! // Signed distance to a sphere, baked into a 32³ volume
//! let volume = DensityBuffer::from_fn(32, |c| {
//!     let p = c.as_vec3a() - glam::Vec3A::splat(15.5);
//!     p.length() - 10.0
//! })?;
//!
//! let output = extract(&volume.as_field(), &ExtractConfig::default());
//!
//! println!("Extracted {} triangles ({} vertices)",
//!     output.triangle_count(), output.vertex_count());
//! ```

pub mod field;
pub mod grid;
pub mod tables;
pub mod types;

// Re-export commonly used items
pub use field::{DensityBuffer, DensityField, FieldError};
pub use grid::Grid;
pub use tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRIANGLE_TABLE};
pub use types::{ExtractConfig, MinMaxAABB, Triangle, TriangleBuffer, Vertex};

// Marching Cubes kernel
pub mod march;
pub use march::{extract, extract_into, march_cell, CellTriangles};

// Parallel and async dispatch
pub mod pipeline;
pub use pipeline::{
  extract_parallel, extract_parallel_timed, AsyncExtraction, ExtractionRequest, ExtractionResult,
  ExtractionStats,
};

// Deterministic density samplers for tests, benches and demos
pub mod samplers;
pub use samplers::{DensitySource, Metaball, MetaballsSampler, SphereSampler, TiltedPlaneSampler};

// Engine-agnostic metrics collection (feature-gated at runtime)
pub mod metrics;
