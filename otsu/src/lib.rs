//! Otsu - grayscale threshold computation
//!
//! Computes binarization thresholds for 8-bit grayscale images with
//! Otsu's method, at three localities:
//!
//! - a single global threshold for the whole image
//! - an independent threshold per block of a tiled partition
//! - a locally-averaged threshold from overlapping sliding windows
//!
//! Callers supply decoded single-channel pixel data and consume a
//! same-shaped mask; applying the mask (`out = 255 if pixel > mask
//! else 0`) is the caller's comparison.
//!
//! # Example
//!
//! ```
//! use otsu::GrayImage;
//! use otsu::threshold::global_threshold;
//!
//! let image = GrayImage::from_raw(2, 2, vec![10, 10, 200, 200]).unwrap();
//! let mask = global_threshold(&image).unwrap();
//! assert_eq!(mask.get(0, 0).unwrap(), Some(10));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use otsu_core::*;

// Re-export the algorithm crate as a module
pub use otsu_threshold as threshold;
