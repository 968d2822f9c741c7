//! Per-channel distance combination.

use crate::distance::DistanceBuffer;
use crate::util::{ObjMatchError, ObjMatchResult};

/// Per-channel result combination mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineMode {
    /// Per-index maximum across channels: an offset is only close if every
    /// channel is close.
    Max,
}

/// Combines per-channel distance buffers into a single buffer.
///
/// All buffers must have the same length (one entry per search-rectangle
/// offset). Extrema are recomputed over the combined values per mode;
/// max-combine can produce extrema that match no single channel's, so they
/// are never derived from per-channel extrema.
pub fn combine_distances(
    buffers: &[DistanceBuffer],
    mode: CombineMode,
) -> ObjMatchResult<DistanceBuffer> {
    let first = buffers.first().ok_or(ObjMatchError::NoDistanceBuffers)?;
    for buffer in &buffers[1..] {
        if buffer.len() != first.len() {
            return Err(ObjMatchError::BufferLengthMismatch {
                expected: first.len(),
                got: buffer.len(),
            });
        }
    }

    match mode {
        CombineMode::Max => {
            let mut values = first.values().to_vec();
            for buffer in &buffers[1..] {
                for (combined, &d) in values.iter_mut().zip(buffer.values()) {
                    if *combined < d {
                        *combined = d;
                    }
                }
            }
            DistanceBuffer::from_values(first.rect(), values)
        }
    }
}
