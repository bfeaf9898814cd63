//! Sliding-window Otsu thresholding
//!
//! Slides a rectangular window across the image at fixed strides and
//! selects a threshold inside each placement. Where windows overlap, a
//! pixel's final value is the average of every contributing window's
//! level, which smooths the hard block edges the per-block algorithm
//! produces.

use crate::error::{ThresholdError, ThresholdResult};
use crate::global::region_level;
use otsu_core::{FMask, GrayImage, Rect};

/// Compute a sliding-window threshold mask.
///
/// Window placements start at offset 0 and advance by the stride in each
/// axis; the loop bound runs one stride past the last full placement so a
/// trailing partial window still covers the bottom/right edge. Placements
/// are clamped to the image extent. Each placement with a valid Otsu
/// level adds that level to every covered pixel's running sum and bumps
/// the pixel's contribution count; a single-valued window contributes
/// nothing. The final cell is `sum / count` as `f32`.
///
/// Cells without any contribution hold `f32::NAN`. That happens for all
/// cells of a single-valued image, and for coverage gaps when a stride
/// exceeds the window size in that axis.
///
/// # Errors
///
/// Fails with [`ThresholdError::InvalidParameters`] if any window
/// dimension or stride is zero, before any computation is performed.
///
/// # Examples
///
/// ```
/// use otsu_core::GrayImage;
/// use otsu_threshold::window_threshold;
///
/// let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
/// // One window covering the whole image: the global level everywhere.
/// let mask = window_threshold(&image, 2, 2, 2, 2).unwrap();
/// assert_eq!(mask.get(1, 1).unwrap(), 10.0);
/// ```
pub fn window_threshold(
    image: &GrayImage,
    window_height: u32,
    window_width: u32,
    vertical_stride: u32,
    horizontal_stride: u32,
) -> ThresholdResult<FMask> {
    if window_height < 1 {
        return Err(ThresholdError::InvalidParameters(
            "window height must be at least 1 pixel".to_string(),
        ));
    }
    if window_width < 1 {
        return Err(ThresholdError::InvalidParameters(
            "window width must be at least 1 pixel".to_string(),
        ));
    }
    if vertical_stride < 1 {
        return Err(ThresholdError::InvalidParameters(
            "vertical stride must be at least 1 pixel".to_string(),
        ));
    }
    if horizontal_stride < 1 {
        return Err(ThresholdError::InvalidParameters(
            "horizontal stride must be at least 1 pixel".to_string(),
        ));
    }

    let width = image.width();
    let height = image.height();
    let w = width as i64;
    let h = height as i64;

    // Running per-pixel sum of contributed levels and contribution count.
    // f64 sums keep full precision until the final division, as the
    // windowed-statistics accumulators do.
    let cells = (width as usize) * (height as usize);
    let mut sums = vec![0.0f64; cells];
    let mut counts = vec![0u32; cells];

    // The bounds extend one stride past the last full placement; signed
    // arithmetic because a window may be larger than the image.
    let v_end = h - window_height as i64 + vertical_stride as i64;
    let h_end = w - window_width as i64 + horizontal_stride as i64;

    let mut y0 = 0i64;
    while y0 < v_end {
        let mut x0 = 0i64;
        while x0 < h_end {
            if y0 < h && x0 < w {
                let top = y0 as u32;
                let left = x0 as u32;
                let wh = window_height.min(height - top);
                let ww = window_width.min(width - left);
                let window = Rect::new(left, top, ww, wh);
                if let Some(level) = region_level(image, &window)? {
                    accumulate(&mut sums, &mut counts, width, &window, level);
                }
            }
            x0 += horizontal_stride as i64;
        }
        y0 += vertical_stride as i64;
    }

    let data: Vec<f32> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| {
            if count == 0 {
                f32::NAN
            } else {
                (sum / count as f64) as f32
            }
        })
        .collect();

    Ok(FMask::from_data(width, height, data)?)
}

/// Add one window's level to every covered pixel.
fn accumulate(sums: &mut [f64], counts: &mut [u32], width: u32, window: &Rect, level: u8) {
    for y in window.y..window.bottom() as u32 {
        let row = (y as usize) * (width as usize);
        for x in window.x..window.right() as u32 {
            sums[row + x as usize] += level as f64;
            counts[row + x as usize] += 1;
        }
    }
}
