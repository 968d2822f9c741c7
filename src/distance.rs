//! Brute-force L1 distance scan over the search rectangle.
//!
//! For every offset in the rectangle the engine sums the absolute differences
//! between the object plane and the equally-sized field patch at that offset,
//! on intensities normalized to `[0, 1]`. This is the dominant cost of a
//! search, O(search area x object area).
//!
//! The parallel scan (`rayon` feature, on by default) partitions work by
//! column: every row of a column is an independent task writing exactly one
//! buffer slot, and the column's collect is the barrier that bounds task
//! fan-out and provides the progress checkpoint. The serial scan is always
//! compiled and produces bit-identical buffers; per-offset summation order is
//! fixed, so results never depend on task scheduling.

use crate::image::PlaneView;
use crate::progress::ProgressSink;
use crate::rect::SearchRect;
use crate::trace::trace_event;
use crate::util::{ObjMatchError, ObjMatchResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Per-offset L1 distances over a search rectangle, with observed extrema.
///
/// Values are ordered by the rectangle's index mapping and immutable once
/// computed.
pub struct DistanceBuffer {
    rect: SearchRect,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl DistanceBuffer {
    /// Wraps precomputed distances for `rect`, deriving the extrema.
    ///
    /// The value count must match the rectangle's offset count.
    pub fn from_values(rect: SearchRect, values: Vec<f64>) -> ObjMatchResult<Self> {
        if values.len() != rect.len() {
            return Err(ObjMatchError::BufferLengthMismatch {
                expected: rect.len(),
                got: values.len(),
            });
        }
        let mut min = values[0];
        let mut max = values[0];
        for &d in &values {
            if d < min {
                min = d;
            }
            if d > max {
                max = d;
            }
        }
        Ok(Self {
            rect,
            values,
            min,
            max,
        })
    }

    /// Returns the search rectangle the buffer covers.
    pub fn rect(&self) -> SearchRect {
        self.rect
    }

    /// Returns the distances in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Buffers are never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the smallest distance observed.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the largest distance observed.
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Computes the distance buffer for one field/object plane pair.
///
/// Dispatches to the parallel scan when the `rayon` feature is enabled and to
/// the serial scan otherwise; both produce bit-identical buffers.
pub fn compute_distances(
    field: PlaneView<'_>,
    object: PlaneView<'_>,
    rect: SearchRect,
    progress: &mut ProgressSink<'_>,
) -> ObjMatchResult<DistanceBuffer> {
    #[cfg(feature = "rayon")]
    {
        compute_distances_par(field, object, rect, progress)
    }
    #[cfg(not(feature = "rayon"))]
    {
        compute_distances_serial(field, object, rect, progress)
    }
}

/// Serial reference scan.
pub fn compute_distances_serial(
    field: PlaneView<'_>,
    object: PlaneView<'_>,
    rect: SearchRect,
    progress: &mut ProgressSink<'_>,
) -> ObjMatchResult<DistanceBuffer> {
    validate_placement(field, object, rect)?;
    trace_event!(
        "distance_scan",
        offsets = rect.len(),
        object_area = object.width() * object.height(),
    );

    let mut values = vec![0.0f64; rect.len()];
    progress.begin();
    for (done, u) in (rect.min_x()..rect.max_x()).enumerate() {
        for v in rect.min_y()..rect.max_y() {
            values[rect.offset_of(u, v)] = l1_distance_at(field, object, u, v);
        }
        progress.column_done(done + 1, rect.width());
    }
    progress.finish();
    DistanceBuffer::from_values(rect, values)
}

/// Column-parallel scan: one task per row of the current column.
#[cfg(feature = "rayon")]
pub fn compute_distances_par(
    field: PlaneView<'_>,
    object: PlaneView<'_>,
    rect: SearchRect,
    progress: &mut ProgressSink<'_>,
) -> ObjMatchResult<DistanceBuffer> {
    validate_placement(field, object, rect)?;
    trace_event!(
        "distance_scan",
        offsets = rect.len(),
        object_area = object.width() * object.height(),
    );

    let mut values = vec![0.0f64; rect.len()];
    progress.begin();
    for (done, u) in (rect.min_x()..rect.max_x()).enumerate() {
        // The collect is the per-column barrier; tasks share nothing mutable.
        let column: Vec<f64> = (rect.min_y()..rect.max_y())
            .into_par_iter()
            .map(|v| l1_distance_at(field, object, u, v))
            .collect();
        for (i, d) in column.into_iter().enumerate() {
            values[rect.offset_of(u, rect.min_y() + i)] = d;
        }
        progress.column_done(done + 1, rect.width());
    }
    progress.finish();
    DistanceBuffer::from_values(rect, values)
}

/// L1 distance between the object and the field patch with top-left `(u, v)`.
fn l1_distance_at(field: PlaneView<'_>, object: PlaneView<'_>, u: usize, v: usize) -> f64 {
    let mut sum = 0.0f64;
    for ty in 0..object.height() {
        let field_row = field.row(v + ty).expect("field row within validated bounds");
        let object_row = object.row(ty).expect("object row within bounds");
        for tx in 0..object.width() {
            let f = f64::from(field_row[u + tx]) / 255.0;
            let o = f64::from(object_row[tx]) / 255.0;
            sum += (f - o).abs();
        }
    }
    sum
}

fn validate_placement(
    field: PlaneView<'_>,
    object: PlaneView<'_>,
    rect: SearchRect,
) -> ObjMatchResult<()> {
    check_placement(
        field.width(),
        field.height(),
        object.width(),
        object.height(),
        rect,
    )
}

/// Rejects rectangles whose offsets would place the object outside the field.
pub(crate) fn check_placement(
    field_width: usize,
    field_height: usize,
    object_width: usize,
    object_height: usize,
    rect: SearchRect,
) -> ObjMatchResult<()> {
    let need_w = (rect.max_x() - 1).checked_add(object_width);
    let need_h = (rect.max_y() - 1).checked_add(object_height);
    let fits = match (need_w, need_h) {
        (Some(w), Some(h)) => w <= field_width && h <= field_height,
        _ => false,
    };
    if !fits {
        return Err(ObjMatchError::PlacementOutOfBounds {
            rect_max_x: rect.max_x() - 1,
            rect_max_y: rect.max_y() - 1,
            object_width,
            object_height,
            field_width,
            field_height,
        });
    }
    Ok(())
}
