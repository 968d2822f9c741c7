//! Error types for objmatch.

use thiserror::Error;

/// Result alias for objmatch operations.
pub type ObjMatchResult<T> = std::result::Result<T, ObjMatchError>;

/// Errors that can occur when configuring or running a search.
///
/// Every variant is a fatal configuration error: it is detected before the
/// compute-heavy phase starts and aborts the whole call with no partial
/// results. The core has no recoverable runtime failures: its operations are
/// deterministic functions of their inputs, so a failed precondition would
/// fail identically on retry.
#[derive(Debug, Error, PartialEq)]
pub enum ObjMatchError {
    /// A plane or view was described with a zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the described geometry requires.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Color views must carry at least three channels.
    #[error("too few channels: got {channels}, need at least 3")]
    TooFewChannels { channels: usize },
    /// The search rectangle has zero area.
    #[error("empty search rect: ({min_x}, {min_y})-({max_x}, {max_y})")]
    EmptySearchRect {
        min_x: usize,
        min_y: usize,
        max_x: usize,
        max_y: usize,
    },
    /// Some offset of the search rectangle places the object outside the field.
    #[error(
        "object placement out of bounds: rightmost offset ({rect_max_x}, {rect_max_y}) \
         with {object_width}x{object_height} object exceeds {field_width}x{field_height} field"
    )]
    PlacementOutOfBounds {
        rect_max_x: usize,
        rect_max_y: usize,
        object_width: usize,
        object_height: usize,
        field_width: usize,
        field_height: usize,
    },
    /// The tolerance is outside the accepted `(0, 1]` interval.
    #[error("tolerance {tolerance} outside (0, 1]")]
    InvalidTolerance { tolerance: f64 },
    /// The combine step received no distance buffers.
    #[error("no distance buffers to combine")]
    NoDistanceBuffers,
    /// Per-channel distance buffers disagree in length.
    #[error("mismatched buffer lengths: expected {expected}, got {got}")]
    BufferLengthMismatch { expected: usize, got: usize },
    /// The distance field is perfectly uniform; score normalization is undefined.
    #[error("degenerate distance range: min {min}, max {max}")]
    DegenerateDistances { min: f64, max: f64 },
    /// Failure loading or decoding an image via the `image` crate.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
