//! Hit records and score-based extraction with non-maximum suppression.

use crate::distance::DistanceBuffer;
use crate::util::{ObjMatchError, ObjMatchResult};

/// A detected occurrence of the object in the field.
///
/// `(x, y)` is the top-left corner of the detected placement. `score` is the
/// normalized distance in `[0, 1]`; lower means a better match and 0 is
/// exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Placement x coordinate (column).
    pub x: usize,
    /// Placement y coordinate (row).
    pub y: usize,
    /// Normalized distance score.
    pub score: f64,
}

impl Hit {
    /// Chebyshev separation: the larger of the x- and y-distances to `other`.
    pub fn separation(&self, other: &Hit) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Extracts hits below `tolerance` from a distance buffer.
///
/// Distances equal to `min` normalize to score 0 and distances equal to `max`
/// to score 1; a score exactly at `tolerance` is excluded. Candidates are
/// visited in index order, and a candidate strictly closer than
/// `min_separation` (Chebyshev) to an already accepted hit merges with it,
/// the lower score surviving in place. `min_separation == 0` therefore
/// disables merging entirely. The result is sorted ascending by score with a
/// stable sort, so discovery order breaks ties.
///
/// A uniform distance field (`max <= min`) cannot be normalized and is a
/// fatal configuration error; zero candidates is an empty list, not an error.
pub fn find_hits(
    buffer: &DistanceBuffer,
    min: f64,
    max: f64,
    tolerance: f64,
    min_separation: usize,
) -> ObjMatchResult<Vec<Hit>> {
    if !(max > min) {
        return Err(ObjMatchError::DegenerateDistances { min, max });
    }
    let range = max - min;
    let rect = buffer.rect();

    let mut hits: Vec<Hit> = Vec::new();
    'candidates: for (i, &d) in buffer.values().iter().enumerate() {
        let p = (d - min) / range;
        if p >= tolerance {
            continue;
        }
        let (x, y) = rect.coords_of(i);
        let candidate = Hit { x, y, score: p };
        for kept in hits.iter_mut() {
            if candidate.separation(kept) < min_separation {
                // Same detection: keep whichever scores better.
                if candidate.score < kept.score {
                    *kept = candidate;
                }
                continue 'candidates;
            }
        }
        hits.push(candidate);
    }

    hits.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(hits)
}
