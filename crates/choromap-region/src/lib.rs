//! choromap-region - Region fill operations for choromap
//!
//! This crate provides the seed-based flood fill that paints one
//! connected map region at a time.
//!
//! # Examples
//!
//! ```
//! use choromap_core::Raster;
//! use choromap_region::flood_fill;
//!
//! let mut rm = Raster::new(10, 10).unwrap().to_mut();
//! let count = flood_fill(&mut rm, 5, 5, 128).unwrap();
//! assert_eq!(count, 100); // all 100 pixels filled
//! ```

pub mod error;
pub mod fill;

// Re-export core types
pub use choromap_core;

pub use error::{RegionError, RegionResult};
pub use fill::{flood_fill, flood_fill_copy};
