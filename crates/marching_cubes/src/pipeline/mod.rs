//! Extraction Dispatch Pipeline
//!
//! Parallel and asynchronous front-ends over the serial kernel in
//! [`crate::march`].
//!
//! ```text
//! ┌──────────┐     ┌────────────────┐     ┌───────────────┐
//! │ Dispatch ├────►│ Block marching ├────►│ Buffer merge  │
//! └──────────┘     └────────────────┘     └───────────────┘
//!      │                   │                     │
//!  8³-cell blocks    TriangleBuffer        TriangleBuffer
//!  (ceil-divided)     (per worker)           (combined)
//!
//!                  ┌─────────────────┐
//!                  │ AsyncExtraction │──► same path on rayon, polled by the caller
//!                  └─────────────────┘
//! ```
//!
//! # Entry Points
//!
//! - [`extract_parallel`]: blocking call, internally parallel via rayon
//! - [`extract_parallel_timed`]: same, plus [`ExtractionStats`]
//! - [`AsyncExtraction`]: non-blocking start/poll wrapper for frame loops
//!
//! Workers never share output state; each block fills its own buffer and the
//! buffers are merged at the end, so triangle order varies run to run while
//! the multiset never does.

pub mod async_extract;
pub mod dispatch;

// Re-exports
pub use async_extract::{AsyncExtraction, ExtractionRequest, ExtractionResult};
pub use dispatch::{
  block_count, blocks_per_axis, extract_parallel, extract_parallel_timed, BLOCK_EDGE,
  ExtractionStats,
};
