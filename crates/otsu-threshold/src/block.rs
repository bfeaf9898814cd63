//! Per-block Otsu thresholding
//!
//! Partitions the image into a grid of rectangular blocks and selects a
//! threshold for each block independently from its own histogram. Useful
//! when illumination varies across the image and a single global level
//! over- or under-thresholds entire areas.

use crate::error::{ThresholdError, ThresholdResult};
use crate::global::region_level;
use otsu_core::{GrayImage, Rect, ThresholdMask};

/// Compute a per-block threshold mask.
///
/// The image is partitioned into `vertical_segments` rows and
/// `horizontal_segments` columns of blocks. Block sizes are
/// `dimension / segments + 1`, so the grid always covers the full image;
/// trailing blocks are clamped to the image bounds and may be smaller.
/// Blocks are visited row-major, top to bottom then left to right, and
/// every cell of a block receives that block's Otsu level (`None` for a
/// single-valued block).
///
/// # Errors
///
/// Fails with [`ThresholdError::InvalidParameters`] if either segment
/// count is zero, before any computation is performed.
///
/// # Examples
///
/// ```
/// use otsu_core::GrayImage;
/// use otsu_threshold::block_threshold;
///
/// let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
/// let mask = block_threshold(&image, 1, 1).unwrap();
/// assert_eq!(mask.get(0, 0).unwrap(), Some(10));
/// ```
pub fn block_threshold(
    image: &GrayImage,
    vertical_segments: u32,
    horizontal_segments: u32,
) -> ThresholdResult<ThresholdMask> {
    if vertical_segments < 1 {
        return Err(ThresholdError::InvalidParameters(
            "there must be at least 1 vertical segment".to_string(),
        ));
    }
    if horizontal_segments < 1 {
        return Err(ThresholdError::InvalidParameters(
            "there must be at least 1 horizontal segment".to_string(),
        ));
    }

    let width = image.width();
    let height = image.height();

    // Integer-division-plus-one so that stepping by the block size always
    // covers the full image, even when the dimensions don't divide evenly.
    let block_height = height / vertical_segments + 1;
    let block_width = width / horizontal_segments + 1;

    let mut mask = ThresholdMask::new(width, height)?;

    let mut y0 = 0u32;
    while y0 < height {
        let h = block_height.min(height - y0);
        let mut x0 = 0u32;
        while x0 < width {
            let w = block_width.min(width - x0);
            let block = Rect::new(x0, y0, w, h);
            let level = region_level(image, &block)?;
            mask.fill_rect(&block, level);
            x0 += block_width;
        }
        y0 += block_height;
    }

    Ok(mask)
}
