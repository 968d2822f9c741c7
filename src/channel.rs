//! Color modes and single-channel plane extraction.
//!
//! The search pipeline never compares color pixels directly; it runs the
//! distance engine over aligned single-channel plane pairs produced here.
//! Plane order is deterministic: field plane `i` always pairs with object
//! plane `i`.

use crate::image::{ColorView, OwnedPlane};
use crate::util::ObjMatchResult;

/// Color processing mode applied before the distance scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Convert field and object to a single luminance plane.
    Gray,
}

/// Aligned single-channel planes for one field/object channel.
pub struct PlanePair {
    /// Field plane scanned for occurrences.
    pub field: OwnedPlane,
    /// Object plane searched for.
    pub object: OwnedPlane,
}

/// Splits the field and object into aligned plane pairs for `mode`.
pub fn split_planes(
    field: ColorView<'_>,
    object: ColorView<'_>,
    mode: ColorMode,
) -> ObjMatchResult<Vec<PlanePair>> {
    match mode {
        ColorMode::Gray => Ok(vec![PlanePair {
            field: to_luma(field)?,
            object: to_luma(object)?,
        }]),
    }
}

/// Integer Rec.601 luminance with round-half-up:
/// `(299 R + 587 G + 114 B + 500) / 1000`.
fn to_luma(view: ColorView<'_>) -> ObjMatchResult<OwnedPlane> {
    let width = view.width();
    let height = view.height();
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let px = view.pixel(x, y).expect("pixel within validated bounds");
            let (r, g, b) = (u32::from(px[0]), u32::from(px[1]), u32::from(px[2]));
            data.push(((299 * r + 587 * g + 114 * b + 500) / 1000) as u8);
        }
    }
    OwnedPlane::new(data, width, height)
}
