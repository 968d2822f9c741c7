//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoding failures are
//! the only I/O failure mode near the core and are mapped into
//! [`ObjMatchError::ImageIo`] at this boundary.

use crate::image::ColorView;
use crate::util::{ObjMatchError, ObjMatchResult};
use std::path::Path;

/// Creates a borrowed color view from an RGB image buffer.
pub fn view_from_rgb_image(img: &image::RgbImage) -> ObjMatchResult<ColorView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ColorView::new(img.as_raw(), width, height, 3)
}

/// Creates a borrowed color view from an RGBA image buffer.
///
/// The alpha channel is carried but ignored by the search pipeline.
pub fn view_from_rgba_image(img: &image::RgbaImage) -> ObjMatchResult<ColorView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ColorView::new(img.as_raw(), width, height, 4)
}

/// Loads an image from disk as owned RGB pixel data.
///
/// Borrow a [`ColorView`] from the result with [`view_from_rgb_image`].
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> ObjMatchResult<image::RgbImage> {
    let img = image::open(path).map_err(|err| ObjMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    Ok(img.to_rgb8())
}
