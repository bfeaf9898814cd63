//! Otsu threshold selection
//!
//! Finds the gray level that splits a histogram into two classes with
//! minimal weighted intra-class variance. This is the inner routine every
//! outer algorithm in this crate reuses; it is a pure function of the
//! histogram.

use otsu_core::Histogram;

/// Select the threshold level minimizing intra-class variance.
///
/// For a candidate level `t`, the lower class holds levels `<= t` and the
/// upper class levels `> t`. Candidates that leave either class empty are
/// skipped: a one-sided split has no defined class mean. Among the
/// remaining candidates the one with the smallest weighted intra-class
/// variance wins, ties going to the smallest level.
///
/// Returns `None` when every candidate is skipped, which happens exactly
/// when the histogram has at most one populated bin.
///
/// The scan is a single forward pass: class mass, mean and variance at
/// each candidate are derived from running prefix sums of the probability
/// mass, the level-weighted mass and the squared-level-weighted mass.
///
/// # Examples
///
/// ```
/// use otsu_core::GrayImage;
/// use otsu_threshold::otsu_level;
///
/// let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
/// assert_eq!(otsu_level(&image.histogram()), Some(10));
///
/// let flat = GrayImage::new_with_value(4, 4, 128).unwrap();
/// assert_eq!(otsu_level(&flat.histogram()), None);
/// ```
pub fn otsu_level(histogram: &Histogram) -> Option<u8> {
    let total = histogram.total();
    if total == 0 {
        return None;
    }
    let n = total as f64;

    // Whole-histogram moment sums; the upper class at each candidate is
    // the complement of the lower prefix.
    let mut sum_all = 0.0f64;
    let mut sum_sq_all = 0.0f64;
    for (level, count) in histogram.iter() {
        let p = count as f64 / n;
        let v = level as f64;
        sum_all += v * p;
        sum_sq_all += v * v * p;
    }

    let mut lower_count = 0u64;
    let mut lower_mass = 0.0f64;
    let mut lower_sum = 0.0f64;
    let mut lower_sum_sq = 0.0f64;

    let mut best: Option<u8> = None;
    let mut best_variance = f64::INFINITY;

    for (level, count) in histogram.iter() {
        let p = count as f64 / n;
        let v = level as f64;
        lower_count += count;
        lower_mass += p;
        lower_sum += v * p;
        lower_sum_sq += v * v * p;

        // The emptiness test runs on integer counts so it is exact.
        if lower_count == 0 || lower_count == total {
            continue;
        }

        let upper_mass = 1.0 - lower_mass;
        let lower_mean = lower_sum / lower_mass;
        let upper_mean = (sum_all - lower_sum) / upper_mass;
        let lower_variance = (lower_sum_sq / lower_mass - lower_mean * lower_mean).max(0.0);
        let upper_variance =
            ((sum_sq_all - lower_sum_sq) / upper_mass - upper_mean * upper_mean).max(0.0);

        let intra = lower_mass * lower_variance + upper_mass * upper_variance;
        if intra < best_variance {
            best_variance = intra;
            best = Some(level);
        }
    }

    best
}
