//! Error types for choromap-paint

use thiserror::Error;

/// Errors that can occur while shading and painting a map
#[derive(Debug, Error)]
pub enum PaintError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] choromap_core::Error),

    /// Region fill error
    #[error("region error: {0}")]
    Region(#[from] choromap_region::RegionError),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] choromap_io::IoError),

    /// Normalization maximum is not a positive finite number
    #[error("invalid shade scale maximum: {0}")]
    InvalidScale(f64),

    /// A data value names a region with no configured seed
    #[error("no seed configured for region: {0}")]
    UnknownRegion(String),
}

/// Result type for paint operations
pub type PaintResult<T> = Result<T, PaintError>;
