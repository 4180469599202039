//! Async extraction wrapper.
//!
//! Runs block-parallel extraction on rayon's thread pool without blocking
//! the caller. The request owns its density volume, so the worker never
//! borrows caller state.
//!
//! # Flow
//!
//! ```text
//! Caller Thread                     Async (rayon)
//! ┌────────────────┐
//! │ Build request  │
//! │ (volume, config)│
//! └───────┬────────┘
//!         │ start()
//!         ▼
//!                                  ┌────────────────┐
//!                                  │ extract_       │
//!                                  │ parallel_timed │
//!                                  └───────┬────────┘
//!                                          │ bounded(1) channel
//! ┌────────────────┐                       │
//! │ poll_result()  │◄──────────────────────┘
//! │ - TriangleBuffer│
//! │ - stats         │
//! └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut pipeline = AsyncExtraction::new();
//!
//! // Start (non-blocking)
//! pipeline.start(ExtractionRequest { volume, config });
//!
//! // Poll each frame
//! if let Some(result) = pipeline.poll_result() {
//!     upload_mesh(result.output);
//! }
//! ```

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use super::dispatch::{extract_parallel_timed, ExtractionStats};
use crate::field::DensityBuffer;
use crate::types::{ExtractConfig, TriangleBuffer};

/// Request to start an async extraction.
#[derive(Clone, Debug)]
pub struct ExtractionRequest {
  /// Density volume, moved to the worker thread.
  pub volume: DensityBuffer,
  /// Extraction parameters.
  pub config: ExtractConfig,
}

/// A completed extraction.
#[derive(Debug)]
pub struct ExtractionResult {
  /// Extracted triangle soup.
  pub output: TriangleBuffer,
  /// Timing and volume stats from the run.
  pub stats: ExtractionStats,
}

/// Non-blocking extraction pipeline.
///
/// Holds at most one in-flight request at a time.
pub struct AsyncExtraction {
  /// Receiver for the pending result.
  receiver: Option<Receiver<ExtractionResult>>,
}

impl AsyncExtraction {
  /// Create an idle pipeline.
  pub fn new() -> Self {
    Self { receiver: None }
  }

  /// Check if a request is in flight.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Start an extraction (non-blocking).
  ///
  /// Returns `true` if started, `false` if already busy.
  pub fn start(&mut self, request: ExtractionRequest) -> bool {
    if self.is_busy() {
      return false;
    }

    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);

    // Spawn on rayon thread pool
    rayon::spawn(move || {
      let result = run_extraction(request);
      // Send fails only after cancel() dropped the receiver
      let _ = sender.send(result);
    });

    true
  }

  /// Poll for the result (non-blocking).
  ///
  /// Returns `Some(result)` when complete, `None` while still running or
  /// when nothing was started.
  pub fn poll_result(&mut self) -> Option<ExtractionResult> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(result) => {
        self.receiver = None;
        Some(result)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        None
      }
    }
  }

  /// Cancel the pending request.
  ///
  /// The worker still runs to completion; its result is discarded.
  pub fn cancel(&mut self) {
    self.receiver = None;
  }
}

impl Default for AsyncExtraction {
  fn default() -> Self {
    Self::new()
  }
}

/// Run one extraction on the worker thread.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "pipeline::run_extraction")
)]
fn run_extraction(request: ExtractionRequest) -> ExtractionResult {
  let field = request.volume.as_field();
  let (output, stats) = extract_parallel_timed(&field, &request.config);
  ExtractionResult { output, stats }
}
