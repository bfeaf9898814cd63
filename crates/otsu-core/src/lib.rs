//! Otsu Core - Basic data structures for threshold computation
//!
//! This crate provides the fundamental data structures used throughout
//! the Otsu thresholding library:
//!
//! - [`GrayImage`] - 8-bit grayscale image (the input)
//! - [`Rect`] - Rectangle regions
//! - [`Histogram`] - 256-bin gray-level frequency histogram
//! - [`ThresholdMask`] - Per-pixel integer threshold levels
//! - [`FMask`] - Floating-point threshold mask

pub mod error;
pub mod fmask;
pub mod gray;
pub mod histogram;
pub mod mask;
pub mod rect;

pub use error::{Error, Result};
pub use fmask::FMask;
pub use gray::GrayImage;
pub use histogram::{Histogram, NUM_LEVELS};
pub use mask::ThresholdMask;
pub use rect::Rect;
