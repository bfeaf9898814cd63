//! otsu-threshold - Otsu threshold selection at three localities
//!
//! This crate computes binarization thresholds for grayscale images using
//! Otsu's method: pick the gray level that minimizes the weighted
//! intra-class variance of the two pixel populations it separates. Three
//! algorithms share that inner selection:
//!
//! - [`global_threshold`] - one level for the whole image
//! - [`block_threshold`] - an independent level per block of a tiled grid
//! - [`window_threshold`] - per-pixel average over overlapping sliding
//!   windows
//!
//! The masks are same-shaped as the input; binarization itself is the
//! caller's comparison (`out = 255 if pixel > mask else 0`).

pub mod block;
mod error;
pub mod global;
pub mod otsu;
pub mod window;

pub use error::{ThresholdError, ThresholdResult};

// Re-export the function surface
pub use block::block_threshold;
pub use global::{global_level, global_threshold};
pub use otsu::otsu_level;
pub use window::window_threshold;
