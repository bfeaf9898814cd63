//! FMask - floating-point threshold mask
//!
//! A 2D array of `f32` values, the output of the sliding-window algorithm
//! where each cell is the average of the thresholds of every window that
//! covered it. Cells no window contributed to hold `f32::NAN`.

use crate::error::{Error, Result};

/// Floating-point threshold mask
///
/// Unlike [`ThresholdMask`](crate::ThresholdMask) which stores one selected
/// level per cell, `FMask` stores a real-valued average of overlapping
/// window thresholds.
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The cell at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FMask {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Cell data (row-major, no padding)
    data: Vec<f32>,
}

impl FMask {
    /// Create a new FMask with all cells set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use otsu_core::FMask;
    ///
    /// let mask = FMask::new(640, 480).unwrap();
    /// assert_eq!(mask.width(), 640);
    /// assert_eq!(mask.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new FMask with all cells set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FMask {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an FMask from raw data
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `data` - Cell data in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidDataLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(FMask {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a cell value
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds { x, y });
        }
        Ok(self.get_unchecked(x, y))
    }

    /// Get a cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a cell value
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds { x, y });
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
        Ok(())
    }

    /// The raw cell data in row-major order
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
