//! Error types for choromap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// choromap-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the raster bounds
    #[error("coordinate ({x}, {y}) out of range for {width}x{height} raster")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
