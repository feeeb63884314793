//! Data-value normalization
//!
//! Maps a raw per-region data value to the grayscale intensity used as
//! the fill value: the value is normalized against a fixed maximum,
//! scaled to 0..=255, and inverted so larger values paint darker.

use crate::error::{PaintError, PaintResult};

/// Linear normalization scale for choropleth shading.
///
/// # Clamping policy
///
/// Raw values outside `[0, max_value]` are clamped, not rejected: a
/// negative value shades as 255 (lightest) and a value above the
/// maximum shades as 0 (darkest). Non-finite values are treated as 0.
/// The data is cosmetic, so clamping beats failing the whole batch.
///
/// # Examples
///
/// ```
/// use choromap_paint::ShadeScale;
///
/// let scale = ShadeScale::new(30.0).unwrap();
/// assert_eq!(scale.shade(15.0), 127);
/// assert_eq!(scale.shade(0.0), 255);
/// assert_eq!(scale.shade(30.0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeScale {
    max_value: f64,
}

impl ShadeScale {
    /// Create a scale with the given normalization maximum.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::InvalidScale`] if `max_value` is not a
    /// positive finite number.
    pub fn new(max_value: f64) -> PaintResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(PaintError::InvalidScale(max_value));
        }
        Ok(Self { max_value })
    }

    /// Get the normalization maximum.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Map a raw data value to a fill intensity.
    pub fn shade(&self, value: f64) -> u8 {
        let ratio = if value.is_finite() {
            (value / self.max_value).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = (255.0 * ratio).round() as u8;
        255 - scaled
    }
}
