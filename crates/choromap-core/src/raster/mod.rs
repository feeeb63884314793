//! Raster - the map image container
//!
//! The `Raster` structure is the fundamental image type in choromap: an
//! 8-bit grayscale grid addressable by `(x, y)` coordinate.
//!
//! # Pixel layout
//!
//! - One byte per pixel, intensity 0 (black) to 255 (white)
//! - Rows are stored contiguously, row-major, with no padding
//! - `(x, y)` maps to index `y * width + x`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To mutate pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. Fill
//! operations take `&mut RasterMut`, so a whole batch of fills holds the
//! raster exclusively for its duration.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel intensities, one byte per pixel
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Raster - main image container
///
/// An 8-bit grayscale raster with reference-counted pixel data.
///
/// # Examples
///
/// ```
/// use choromap_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// The pixel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u8; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a raster from an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get a single row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows in-place modification of pixel data. Convert back to an
/// immutable [`Raster`] using `Into<Raster>`. Exclusive access is
/// enforced at compile time, so no fill can observe a raster while
/// another mutation is in flight.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get a single row of pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Set every pixel to the given intensity.
    pub fn set_all(&mut self, val: u8) {
        self.inner.data.fill(val);
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.data().len(), 100 * 200);
        assert!(raster.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
    }

    #[test]
    fn test_from_vec() {
        let raster = Raster::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some(1));
        assert_eq!(raster.get_pixel(1, 2), Some(6));
        assert_eq!(raster.row(1), &[3, 4]);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Raster::from_vec(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferLengthMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.clone();
        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.deep_clone();
        assert_eq!(r1.ref_count(), 1);
        assert_eq!(r2.ref_count(), 1);
        assert_ne!(r1.data().as_ptr(), r2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut() {
        let raster = Raster::new(4, 4).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_pixel(1, 1, 42).unwrap();
        let raster: Raster = rm.into();
        assert_eq!(raster.get_pixel(1, 1), Some(42));
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let r1 = Raster::new(4, 4).unwrap();
        let _r2 = r1.clone();
        assert!(r1.try_into_mut().is_err());
    }

    #[test]
    fn test_set_all_and_clear() {
        let mut rm = Raster::new(3, 3).unwrap().to_mut();
        rm.set_all(7);
        assert!(rm.data().iter().all(|&v| v == 7));
        rm.clear();
        assert!(rm.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_sizes_equal() {
        let r1 = Raster::new(5, 6).unwrap();
        let r2 = Raster::new(5, 6).unwrap();
        let r3 = Raster::new(6, 5).unwrap();
        assert!(r1.sizes_equal(&r2));
        assert!(!r1.sizes_equal(&r3));
    }
}
