//! Compositing of combinations into output rasters, one by one or in batches.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::compose::backend::RasterBackend;
use crate::compose::size::resolve_canvas_size;
use crate::error::{Error, Result};
use crate::model::{Combination, GeneratorConfig};

/// Shared flag for cancelling a batch between combinations.
///
/// Cloning shares the flag; any clone can cancel. In-flight combinations are
/// never interrupted, only the step to the next combination observes the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new, uncancelled flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The failure that aborted a batch, tagged with its combination index.
#[derive(Debug)]
pub struct BatchFailure {
    /// Index of the combination that failed.
    pub index: usize,
    /// The composite error for that combination.
    pub error: Error,
}

/// Result of compositing a batch of combinations.
#[non_exhaustive]
#[derive(Debug)]
pub struct BatchResult<O> {
    /// Outputs completed before any failure or cancellation, with their
    /// combination indices.
    pub outputs: Vec<(usize, O)>,
    /// The failure that aborted the batch, if any.
    pub failure: Option<BatchFailure>,
    /// Whether the batch stopped because cancellation was requested.
    pub cancelled: bool,
}

impl<O> BatchResult<O> {
    /// Creates a new empty [`BatchResult`].
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            failure: None,
            cancelled: false,
        }
    }

    /// Whether every combination was composited.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && !self.cancelled
    }
}

impl<O> Default for BatchResult<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite one combination into an encoded output raster.
///
/// Canvas size is resolved first (see [`resolve_canvas_size`]), then each
/// layer's image is drawn in stack order, stretched to fill the canvas.
/// Drawing stops at the first backend failure; the error names the layer and
/// url that failed. No partial output is produced.
pub fn composite<B: RasterBackend>(
    combination: &Combination,
    config: &GeneratorConfig,
    backend: &mut B,
) -> Result<B::Output> {
    config.validate()?;

    let (width, height) = resolve_canvas_size(combination, config, backend)?;
    let mut canvas = backend.create_canvas(width, height)?;

    for (layer, url) in combination.iter() {
        backend
            .draw_scaled(&mut canvas, url, width, height)
            .map_err(|e| Error::composite(layer, url, e))?;
    }

    backend.encode(canvas)
}

/// Composite a batch of combinations sequentially.
///
/// Policy: abort on first failure. Outputs completed before the failure are
/// retained in the result, the failure carries its combination index, and
/// later combinations are not attempted. Callers needing resilience retry
/// failed indices individually.
pub fn composite_all<B: RasterBackend>(
    combinations: &[Combination],
    config: &GeneratorConfig,
    backend: &mut B,
) -> BatchResult<B::Output> {
    composite_all_with_cancel(combinations, config, backend, &CancelFlag::new())
}

/// Like [`composite_all`], checking `cancel` between combinations.
///
/// Outputs produced before cancellation are retained and returned with
/// [`BatchResult::cancelled`] set.
pub fn composite_all_with_cancel<B: RasterBackend>(
    combinations: &[Combination],
    config: &GeneratorConfig,
    backend: &mut B,
    cancel: &CancelFlag,
) -> BatchResult<B::Output> {
    let mut result = BatchResult::new();

    for (index, combination) in combinations.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!(
                "Batch cancelled after {} of {} combinations.",
                index,
                combinations.len()
            );
            result.cancelled = true;
            break;
        }

        info!(
            "Compositing combination {}: {} layers.",
            index,
            combination.len()
        );
        match composite(combination, config, backend) {
            Ok(output) => result.outputs.push((index, output)),
            Err(error) => {
                warn!("Combination {} failed: {}; aborting batch.", index, error);
                result.failure = Some(BatchFailure { index, error });
                break;
            }
        }
    }

    result
}
