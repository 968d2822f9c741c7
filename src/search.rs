//! High-level search entry point.

use std::io::Write;

use crate::channel::{split_planes, ColorMode};
use crate::combine::{combine_distances, CombineMode};
use crate::distance::compute_distances;
use crate::hits::{find_hits, Hit};
use crate::image::ColorView;
use crate::progress::ProgressSink;
use crate::rect::SearchRect;
use crate::trace::{trace_event, trace_span};
use crate::util::{ObjMatchError, ObjMatchResult};

/// Parameters for one search invocation.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    /// Normalized score threshold in `(0, 1]`; exclusive upper bound for a
    /// hit.
    pub tolerance: f64,
    /// Chebyshev radius below which two detections merge; 0 disables merging.
    pub min_separation: usize,
    /// Channel extraction mode.
    pub color_mode: ColorMode,
    /// Per-channel combination mode.
    pub combine_mode: CombineMode,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            tolerance: 0.2,
            min_separation: 0,
            color_mode: ColorMode::Gray,
            combine_mode: CombineMode::Max,
        }
    }
}

/// Searches `field` for occurrences of `object` and returns ranked hits.
///
/// Hits are the top-left corners of detected placements, sorted ascending by
/// score (best match first) and de-duplicated by `params.min_separation`.
/// Every offset of `rect` is compared; `rect` must keep the object's
/// footprint inside `field` at all of its offsets.
///
/// `progress` optionally receives textual status while scanning (a newline,
/// carriage-return-prefixed percentages, a trailing newline, once per plane);
/// it is never required for correctness. Configuration errors are detected
/// before the compute phase and abort the call with no partial results. A
/// search holds no state across calls and independent searches may run
/// concurrently.
pub fn search(
    field: ColorView<'_>,
    object: ColorView<'_>,
    rect: SearchRect,
    params: SearchParams,
    progress: Option<&mut dyn Write>,
) -> ObjMatchResult<Vec<Hit>> {
    validate(field, object, rect, &params)?;
    let _span = trace_span!(
        "search",
        rect_width = rect.width(),
        rect_height = rect.height(),
        object_width = object.width(),
        object_height = object.height(),
    )
    .entered();

    let pairs = split_planes(field, object, params.color_mode)?;
    let mut sink = ProgressSink::new(progress);
    let mut buffers = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        buffers.push(compute_distances(
            pair.field.view(),
            pair.object.view(),
            rect,
            &mut sink,
        )?);
    }

    let combined = combine_distances(&buffers, params.combine_mode)?;
    let hits = find_hits(
        &combined,
        combined.min(),
        combined.max(),
        params.tolerance,
        params.min_separation,
    )?;
    trace_event!("hits_found", count = hits.len());
    Ok(hits)
}

fn validate(
    field: ColorView<'_>,
    object: ColorView<'_>,
    rect: SearchRect,
    params: &SearchParams,
) -> ObjMatchResult<()> {
    if !(params.tolerance > 0.0 && params.tolerance <= 1.0) {
        return Err(ObjMatchError::InvalidTolerance {
            tolerance: params.tolerance,
        });
    }
    crate::distance::check_placement(
        field.width(),
        field.height(),
        object.width(),
        object.height(),
        rect,
    )
}
