//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Bounds are always checked before the underlying buffer is touched;
//! the `*_unchecked` variants skip the `Option`/`Result` wrapping but
//! still panic rather than read out of range.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get the pixel value at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get the pixel value at (x, y) without the bounds wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({x}, {y}) out of range"
        );
        self.inner.data[self.inner.index(x, y)]
    }
}

impl RasterMut {
    /// Get the pixel value at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get the pixel value at (x, y) without the bounds wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({x}, {y}) out of range"
        );
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set the pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Set the pixel value at (x, y) without the bounds wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({x}, {y}) out of range"
        );
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }
}
