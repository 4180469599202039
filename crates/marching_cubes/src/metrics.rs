//! Engine-agnostic metrics collection for extraction statistics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use marching_cubes::metrics::{ExtractionMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record each completed run:
//! let (output, stats) = extract_parallel_timed(&field, &config);
//! metrics.record_extraction(&stats);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::pipeline::ExtractionStats;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  /// Get the number of values in the window.
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Check if the window is empty.
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Clear all values.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  /// Compute the sum of all values.
  pub fn sum(&self) -> T {
    self
      .buffer
      .iter()
      .copied()
      .fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = *self.buffer.iter().min()?;
    let max = *self.buffer.iter().max()?;
    Some((min, max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128) // ~2 seconds of per-frame runs at 60fps
  }
}

/// Aggregate statistics across extraction runs.
#[derive(Debug, Clone)]
pub struct ExtractionMetrics {
  /// Rolling window of extraction times in microseconds.
  pub extract_timings: RollingWindow<u64>,
  /// Rolling window of per-run triangle counts.
  pub triangle_counts: RollingWindow<u64>,

  /// Last extraction time in microseconds.
  pub last_extract_us: u64,
  /// Last run's triangle count.
  pub last_triangle_count: usize,
  /// Largest single-run triangle count seen.
  pub peak_triangle_count: usize,

  /// Total runs recorded this session.
  pub total_extractions: u64,
  /// Total triangles produced this session.
  pub total_triangles: u64,
}

impl Default for ExtractionMetrics {
  fn default() -> Self {
    Self {
      extract_timings: RollingWindow::new(128),
      triangle_counts: RollingWindow::new(128),
      last_extract_us: 0,
      last_triangle_count: 0,
      peak_triangle_count: 0,
      total_extractions: 0,
      total_triangles: 0,
    }
  }
}

impl ExtractionMetrics {
  /// Create new metrics with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset all metrics to zero.
  pub fn reset(&mut self) {
    self.extract_timings.clear();
    self.triangle_counts.clear();
    self.last_extract_us = 0;
    self.last_triangle_count = 0;
    self.peak_triangle_count = 0;
    // Don't reset totals - they're cumulative
  }

  /// Record one completed extraction run.
  pub fn record_extraction(&mut self, stats: &ExtractionStats) {
    if !is_enabled() {
      return;
    }

    self.extract_timings.push(stats.extract_us);
    self.triangle_counts.push(stats.triangle_count as u64);

    self.last_extract_us = stats.extract_us;
    self.last_triangle_count = stats.triangle_count;
    self.peak_triangle_count = self.peak_triangle_count.max(stats.triangle_count);

    self.total_extractions += 1;
    self.total_triangles += stats.triangle_count as u64;
  }

  /// Get average extraction timing in microseconds.
  pub fn avg_extract_us(&self) -> f64 {
    self.extract_timings.average()
  }

  /// Approximate memory of the last run's output, in bytes.
  ///
  /// Triangles carry 3 owned vertices of 24 bytes each.
  pub fn last_output_bytes(&self) -> u64 {
    self.last_triangle_count as u64 * 3 * 24
  }

  /// Format last output memory as megabytes.
  pub fn last_output_mb(&self) -> f64 {
    self.last_output_bytes() as f64 / 1_048_576.0
  }
}
