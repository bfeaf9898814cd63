//! Regression tests for the three threshold algorithms
//!
//! Covers the observable contracts:
//! - degenerate single-valued inputs select no level
//! - a two-population image splits exactly between the populations
//! - block(1,1) equals global; blocks are internally uniform
//! - a whole-image window equals global broadcast as floating point
//! - uneven partitions cover every pixel without going out of bounds
//! - invalid arguments fail before any computation
//! - reruns are bit-identical

use otsu_core::{GrayImage, Rect};
use otsu_threshold::{
    ThresholdError, block_threshold, global_level, global_threshold, otsu_level, window_threshold,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Create a uniform image
fn make_uniform_gray(val: u8, w: u32, h: u32) -> GrayImage {
    GrayImage::new_with_value(w, h, val).unwrap()
}

/// Create an image with the top half at `low` and the bottom half at `high`
fn make_two_band_gray(low: u8, high: u8, w: u32, h: u32) -> GrayImage {
    let mut image = GrayImage::new_with_value(w, h, low).unwrap();
    for y in h / 2..h {
        for x in 0..w {
            image.set_pixel_unchecked(x, y, high);
        }
    }
    image
}

/// Create an image with uniformly random pixel values
fn make_random_gray(w: u32, h: u32, seed: u64) -> GrayImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..(w as usize * h as usize))
        .map(|_| rng.random_range(0..=255u8))
        .collect();
    GrayImage::from_raw(w, h, data).unwrap()
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_uniform_image_has_no_level() {
    for val in [0u8, 128, 255] {
        let image = make_uniform_gray(val, 12, 9);
        assert_eq!(global_level(&image), None);
        let mask = global_threshold(&image).unwrap();
        assert!(mask.cells().iter().all(|c| c.is_none()));
    }
}

// ============================================================================
// Two-population split
// ============================================================================

#[test]
fn test_two_band_image_splits_between_populations() {
    let image = make_two_band_gray(10, 200, 16, 16);
    let level = global_level(&image).unwrap();
    // Smallest-level tie-break: every cut in 10..=199 separates the two
    // populations with zero intra-class variance, and the first one wins.
    assert_eq!(level, 10);
    // The split is exact under the `pixel > mask` binarization rule.
    assert!(image.pixels().iter().all(|&p| p <= level || p >= 200));
}

#[test]
fn test_two_band_intra_class_variance_is_zero_at_cut() {
    // With both classes single-valued, each pixel equals its class mean,
    // so the class variances vanish. Verify through the histogram: the
    // lower class holds exactly the low population.
    let image = make_two_band_gray(10, 200, 16, 16);
    let hist = image.histogram();
    let level = otsu_level(&hist).unwrap();
    let lower: u64 = hist.counts()[..=level as usize].iter().sum();
    assert_eq!(lower, 128);
    assert_eq!(hist.count(10), 128);
    assert_eq!(hist.count(200), 128);
}

// ============================================================================
// Block partitioning
// ============================================================================

#[test]
fn test_block_1x1_equals_global() {
    let image = make_random_gray(21, 17, 29);
    assert_eq!(
        block_threshold(&image, 1, 1).unwrap(),
        global_threshold(&image).unwrap()
    );
}

#[test]
fn test_block_cells_uniform_within_each_block() {
    let image = make_random_gray(23, 14, 31);
    let (v_segments, h_segments) = (4u32, 3u32);
    let mask = block_threshold(&image, v_segments, h_segments).unwrap();

    // Recompute the grid geometry and check cell agreement per block.
    let block_h = image.height() / v_segments + 1;
    let block_w = image.width() / h_segments + 1;
    let mut y0 = 0;
    while y0 < image.height() {
        let mut x0 = 0;
        while x0 < image.width() {
            let first = mask.get_unchecked(x0, y0);
            for y in y0..(y0 + block_h).min(image.height()) {
                for x in x0..(x0 + block_w).min(image.width()) {
                    assert_eq!(mask.get_unchecked(x, y), first);
                }
            }
            x0 += block_w;
        }
        y0 += block_h;
    }
}

#[test]
fn test_block_matches_regions_computed_directly() {
    let image = make_random_gray(19, 11, 37);
    let (v_segments, h_segments) = (3u32, 5u32);
    let mask = block_threshold(&image, v_segments, h_segments).unwrap();

    let block_h = image.height() / v_segments + 1;
    let block_w = image.width() / h_segments + 1;
    let mut y0 = 0;
    while y0 < image.height() {
        let mut x0 = 0;
        while x0 < image.width() {
            let rect = Rect::new(x0, y0, block_w, block_h);
            let hist = image.histogram_in_rect(&rect).unwrap();
            assert_eq!(mask.get_unchecked(x0, y0), otsu_level(&hist));
            x0 += block_w;
        }
        y0 += block_h;
    }
}

#[test]
fn test_uneven_block_partition_covers_all_cells() {
    // 13x7 with a 3x3 grid: blocks are 5/5/3 wide and 3/3/1 tall, so
    // neither axis divides evenly. A checkerboard puts both values in
    // every block, so every cell must have been written.
    let mut image = GrayImage::new(13, 7).unwrap();
    for y in 0..7 {
        for x in 0..13 {
            image.set_pixel_unchecked(x, y, if (x + y) % 2 == 0 { 15 } else { 230 });
        }
    }
    let mask = block_threshold(&image, 3, 3).unwrap();
    assert_eq!(mask.width(), 13);
    assert_eq!(mask.height(), 7);
    assert!(mask.cells().iter().all(|c| c.is_some()));
}

// ============================================================================
// Sliding window
// ============================================================================

#[test]
fn test_whole_image_window_equals_global_broadcast() {
    let image = make_random_gray(12, 10, 43);
    let expected = global_level(&image).unwrap() as f32;
    let mask = window_threshold(&image, 10, 12, 10, 12).unwrap();
    assert!(mask.data().iter().all(|&v| v == expected));

    // Strides larger than the image still place exactly one window.
    let mask = window_threshold(&image, 10, 12, 64, 64).unwrap();
    assert!(mask.data().iter().all(|&v| v == expected));
}

#[test]
fn test_window_mask_shape_matches_image() {
    let image = make_random_gray(17, 9, 47);
    let mask = window_threshold(&image, 4, 4, 2, 2).unwrap();
    assert_eq!(mask.width(), 17);
    assert_eq!(mask.height(), 9);
}

#[test]
fn test_overlapping_windows_cover_all_cells() {
    // Stride <= window in both axes leaves no gaps; random noise makes
    // degenerate windows implausible at 4x4.
    let image = make_random_gray(17, 9, 53);
    let mask = window_threshold(&image, 4, 4, 2, 2).unwrap();
    assert!(mask.data().iter().all(|v| !v.is_nan()));
}

// ============================================================================
// Invalid arguments
// ============================================================================

#[test]
fn test_invalid_arguments_fail_before_any_work() {
    let image = make_random_gray(8, 8, 59);
    assert!(matches!(
        block_threshold(&image, 0, 2),
        Err(ThresholdError::InvalidParameters(_))
    ));
    assert!(matches!(
        block_threshold(&image, 2, 0),
        Err(ThresholdError::InvalidParameters(_))
    ));
    for (wh, ww, vs, hs) in [(0, 4, 1, 1), (4, 0, 1, 1), (4, 4, 0, 1), (4, 4, 1, 0)] {
        assert!(matches!(
            window_threshold(&image, wh, ww, vs, hs),
            Err(ThresholdError::InvalidParameters(_))
        ));
    }
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_reruns_are_bit_identical() {
    let image = make_random_gray(15, 15, 61);

    assert_eq!(
        global_threshold(&image).unwrap(),
        global_threshold(&image).unwrap()
    );
    assert_eq!(
        block_threshold(&image, 3, 3).unwrap(),
        block_threshold(&image, 3, 3).unwrap()
    );

    // Compare window masks bit-wise so NaN cells also count as equal.
    let a = window_threshold(&image, 4, 4, 6, 6).unwrap();
    let b = window_threshold(&image, 4, 4, 6, 6).unwrap();
    let bits = |m: &otsu_core::FMask| -> Vec<u32> { m.data().iter().map(|v| v.to_bits()).collect() };
    assert_eq!(bits(&a), bits(&b));
}
