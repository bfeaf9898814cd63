//! Histogram construction for grayscale images
//!
//! Counts pixel value occurrences over the whole image or over a
//! rectangular region. Threshold selection operates on these counts.

use crate::error::{Error, Result};
use crate::gray::GrayImage;
use crate::rect::Rect;
use std::ops::Index;

/// Number of gray levels in an 8-bit image
pub const NUM_LEVELS: usize = 256;

/// A 256-bin frequency histogram of gray levels
///
/// `counts[v]` is the number of sampled pixels with value `v`. The counts
/// sum exactly to the number of pixels in the region the histogram was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; NUM_LEVELS],
}

impl Histogram {
    /// Create a histogram from raw per-level counts
    pub fn from_counts(counts: [u64; NUM_LEVELS]) -> Self {
        Self { counts }
    }

    /// Count for a single gray level
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// All 256 per-level counts, index = gray level
    #[inline]
    pub fn counts(&self) -> &[u64; NUM_LEVELS] {
        &self.counts
    }

    /// Total number of sampled pixels
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(level, count)` pairs in ascending level order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(level, &count)| (level as u8, count))
    }
}

impl Index<usize> for Histogram {
    type Output = u64;

    fn index(&self, level: usize) -> &u64 {
        &self.counts[level]
    }
}

impl GrayImage {
    /// Get the gray-level histogram of the whole image
    ///
    /// Counts the occurrence of each pixel value. Since images are never
    /// empty, the histogram always holds at least one sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use otsu_core::GrayImage;
    ///
    /// let image = GrayImage::new_with_value(100, 100, 37).unwrap();
    /// let hist = image.histogram();
    /// assert_eq!(hist.count(37), 10000);
    /// assert_eq!(hist.total(), 10000);
    /// ```
    pub fn histogram(&self) -> Histogram {
        let mut counts = [0u64; NUM_LEVELS];
        for &value in self.pixels() {
            counts[value as usize] += 1;
        }
        Histogram::from_counts(counts)
    }

    /// Get the gray-level histogram of a rectangular region
    ///
    /// The region is clipped to the image extent before scanning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegion`] if the clipped region contains no
    /// pixels.
    pub fn histogram_in_rect(&self, region: &Rect) -> Result<Histogram> {
        let clipped = region
            .clip_to(self.width(), self.height())
            .ok_or(Error::EmptyRegion)?;

        let mut counts = [0u64; NUM_LEVELS];
        for y in clipped.y..clipped.bottom() as u32 {
            for x in clipped.x..clipped.right() as u32 {
                counts[self.get_pixel_unchecked(x, y) as usize] += 1;
            }
        }
        Ok(Histogram::from_counts(counts))
    }
}
