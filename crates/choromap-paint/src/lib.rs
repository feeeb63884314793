//! choromap-paint - Choropleth shading and orchestration
//!
//! Ties the workspace together: normalizes per-region data values into
//! fill intensities ([`ShadeScale`]) and drives one flood fill per
//! named region ([`paint_regions`]), either over an in-memory raster or
//! end to end between two image files ([`paint_map_file`]).
//!
//! # Examples
//!
//! ```
//! use choromap_core::Raster;
//! use choromap_paint::{RegionSeed, ShadeScale, paint_regions};
//! use std::collections::BTreeMap;
//!
//! let mut rm = Raster::new(20, 20).unwrap().to_mut();
//! let seeds = vec![RegionSeed::new("AZ", 10, 10)];
//! let values = BTreeMap::from([("AZ".to_string(), 23.4)]);
//! let scale = ShadeScale::new(30.0).unwrap();
//!
//! let report = paint_regions(&mut rm, &seeds, &values, &scale).unwrap();
//! assert_eq!(report.fills[0].pixels, 400);
//! ```

pub mod error;
pub mod painter;
pub mod shade;

// Re-export core types
pub use choromap_core;

pub use error::{PaintError, PaintResult};
pub use painter::{PaintReport, RegionFill, RegionSeed, paint_map_file, paint_regions};
pub use shade::ShadeScale;
