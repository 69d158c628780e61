//! Partitions an ordered option sequence into fixed-size display pages.

use tracing::debug;

use selection_core::models::{Batch, BatchOption};

/// Split sorted options into contiguous batches of `batch_size`.
///
/// The final batch may be shorter. Concatenating the output in batch order
/// reproduces the input exactly. A non-positive `batch_size` or empty input
/// yields no batches; neither is an error (`batch_size` is signed because
/// the wire carries int32 and zero and negative must be representable).
pub fn create_batches(options: &[BatchOption], batch_size: i32) -> Vec<Batch> {
    if batch_size <= 0 || options.is_empty() {
        debug!(batch_size, count = options.len(), "no batches to create");
        return Vec::new();
    }

    let batches: Vec<Batch> = options
        .chunks(batch_size as usize)
        .map(|chunk| Batch {
            options: chunk.to_vec(),
        })
        .collect();

    debug!(
        batch_size,
        count = options.len(),
        batches = batches.len(),
        "created batches"
    );

    batches
}
