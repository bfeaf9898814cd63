//! Error types for otsu-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("invalid data length: expected {expected}, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("index out of bounds: ({x}, {y})")]
    IndexOutOfBounds { x: u32, y: u32 },

    /// Region contains no pixels
    #[error("region contains no pixels")]
    EmptyRegion,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
