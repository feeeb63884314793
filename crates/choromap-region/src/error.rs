//! Error types for choromap-region

use thiserror::Error;

/// Errors that can occur during region fill operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] choromap_core::Error),

    /// Seed coordinate outside the raster bounds
    #[error("seed coordinate ({x}, {y}) out of range")]
    SeedOutOfRange { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
