//! ObjMatch locates occurrences of a small reference image (the object)
//! inside a larger image (the field) by exhaustive pixel-distance comparison
//! at every candidate offset.
//!
//! The pipeline splits both images into single-channel planes, scans every
//! offset of a search rectangle with an L1 (sum of absolute differences)
//! kernel, in parallel via the default `rayon` feature, combines the
//! per-channel distance buffers, and extracts tolerance-filtered hits with
//! non-maximum suppression. There is no scale or rotation invariance; this
//! is exact-position sliding-window comparison only.

pub mod channel;
pub mod combine;
pub mod distance;
pub mod hits;
pub mod image;
mod progress;
pub mod rect;
pub mod search;
mod trace;
pub mod util;

pub use channel::{split_planes, ColorMode, PlanePair};
pub use combine::{combine_distances, CombineMode};
pub use distance::{compute_distances, compute_distances_serial, DistanceBuffer};
pub use hits::{find_hits, Hit};
pub use image::{ColorView, OwnedPlane, PlaneView};
pub use progress::ProgressSink;
pub use rect::SearchRect;
pub use search::{search, SearchParams};
pub use util::{ObjMatchError, ObjMatchResult};

#[cfg(feature = "rayon")]
pub use distance::compute_distances_par;

#[cfg(feature = "image-io")]
pub use image::io;
