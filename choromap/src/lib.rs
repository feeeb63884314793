//! choromap - Seed-fill choropleth map painter
//!
//! Paints named regions of a grayscale map image according to per-region
//! data values: each value is normalized to a fill intensity and applied
//! with a 4-connected flood fill from a seed coordinate inside the region.
//!
//! # Example
//!
//! ```
//! use choromap::{Raster, RegionSeed, ShadeScale};
//! use choromap::paint::paint_regions;
//! use std::collections::BTreeMap;
//!
//! let mut rm = Raster::new(50, 50).unwrap().to_mut();
//! let seeds = vec![RegionSeed::new("AL", 25, 25)];
//! let values = BTreeMap::from([("AL".to_string(), 10.5)]);
//! let scale = ShadeScale::new(30.0).unwrap();
//!
//! let report = paint_regions(&mut rm, &seeds, &values, &scale).unwrap();
//! assert_eq!(report.fills[0].pixels, 2500);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use choromap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use choromap_io as io;
pub use choromap_paint as paint;
pub use choromap_region as region;

// Most-used paint types at the crate root for convenience
pub use choromap_paint::{RegionSeed, ShadeScale};
pub use choromap_region::flood_fill;
