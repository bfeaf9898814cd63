//! Global Otsu thresholding
//!
//! One histogram, one selected level, broadcast over the whole image.
//! The per-block and sliding-window algorithms apply exactly this
//! computation to their sub-regions.

use crate::error::ThresholdResult;
use crate::otsu::otsu_level;
use otsu_core::{GrayImage, Rect, ThresholdMask};

/// Otsu level of a rectangular sub-region.
///
/// `Ok(None)` means the region holds a single gray level and has no valid
/// split. Fails when the clipped region contains no pixels.
pub(crate) fn region_level(image: &GrayImage, region: &Rect) -> ThresholdResult<Option<u8>> {
    let histogram = image.histogram_in_rect(region)?;
    Ok(otsu_level(&histogram))
}

/// Otsu level of the whole image.
///
/// `None` means the image holds a single gray level and has no valid
/// split.
///
/// # Examples
///
/// ```
/// use otsu_core::GrayImage;
/// use otsu_threshold::global_level;
///
/// let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
/// assert_eq!(global_level(&image), Some(10));
/// ```
pub fn global_level(image: &GrayImage) -> Option<u8> {
    otsu_level(&image.histogram())
}

/// Compute a uniform threshold mask for the whole image.
///
/// Every cell of the returned mask holds the same value: the Otsu level
/// of the full-image histogram, or `None` for a single-valued image.
/// A caller binarizes with `out = 255 if pixel > mask else 0`.
///
/// # Examples
///
/// ```
/// use otsu_core::GrayImage;
/// use otsu_threshold::global_threshold;
///
/// let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
/// let mask = global_threshold(&image).unwrap();
/// assert_eq!(mask.get(1, 1).unwrap(), Some(10));
/// ```
pub fn global_threshold(image: &GrayImage) -> ThresholdResult<ThresholdMask> {
    let level = global_level(image);
    Ok(ThresholdMask::uniform(image.width(), image.height(), level)?)
}
