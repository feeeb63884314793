//! Batch choropleth painting
//!
//! Drives one flood fill per named region: each data value is shaded
//! through a [`ShadeScale`] and painted at the region's configured seed
//! coordinate. Seeds and values are explicit parameters, never ambient
//! state, so tests can run the painter over small synthetic grids.

use crate::error::{PaintError, PaintResult};
use crate::shade::ShadeScale;
use choromap_core::RasterMut;
use choromap_io::ImageFormat;
use choromap_region::flood_fill;
use std::collections::BTreeMap;
use std::path::Path;

/// Seed configuration for one named map region.
///
/// The coordinate must lie strictly inside the region it names, and
/// distinct seeds must address disjoint, mutually enclosed regions.
/// That geometry comes from the map artwork and is the caller's
/// responsibility; the painter cannot detect a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSeed {
    /// Region identifier, matched against the data map's keys
    pub name: String,
    /// Seed X coordinate
    pub x: u32,
    /// Seed Y coordinate
    pub y: u32,
}

impl RegionSeed {
    /// Create a seed for a named region.
    pub fn new(name: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// Outcome of painting one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFill {
    /// Region name
    pub name: String,
    /// Intensity the region was painted with
    pub shade: u8,
    /// Number of pixels painted
    pub pixels: u32,
}

/// Outcome of a whole batch of fills
#[derive(Debug, Clone, Default)]
pub struct PaintReport {
    /// Per-region results, in the order the regions were painted
    pub fills: Vec<RegionFill>,
}

impl PaintReport {
    /// Total number of pixels painted across all regions.
    pub fn total_pixels(&self) -> u64 {
        self.fills.iter().map(|f| u64::from(f.pixels)).sum()
    }
}

/// Paint every region that has a data value.
///
/// Values are iterated in key order, so the fill sequence is
/// deterministic; with disjoint regions the painted result does not
/// depend on the order anyway. Fills run sequentially and the raster
/// is exclusively borrowed for the whole batch.
///
/// # Errors
///
/// Returns [`PaintError::UnknownRegion`] if a value names a region with
/// no configured seed, or the underlying fill error (e.g. a seed
/// outside the raster). The raster may have been partially painted when
/// an error is returned; callers that must not publish partial results
/// should paint a copy, as [`paint_map_file`] does.
pub fn paint_regions(
    raster: &mut RasterMut,
    seeds: &[RegionSeed],
    values: &BTreeMap<String, f64>,
    scale: &ShadeScale,
) -> PaintResult<PaintReport> {
    let seed_index: BTreeMap<&str, &RegionSeed> =
        seeds.iter().map(|s| (s.name.as_str(), s)).collect();

    let mut report = PaintReport::default();
    for (name, &value) in values {
        let seed = seed_index
            .get(name.as_str())
            .ok_or_else(|| PaintError::UnknownRegion(name.clone()))?;
        let shade = scale.shade(value);
        let pixels = flood_fill(raster, seed.x, seed.y, shade)?;
        report.fills.push(RegionFill {
            name: name.clone(),
            shade,
            pixels,
        });
    }
    Ok(report)
}

/// Paint a map image file and write the result.
///
/// Reads the input (color input is reduced to grayscale by the
/// decoder), paints every region with a data value, and encodes the
/// result to `output`. The output format follows the output path's
/// extension, defaulting to PNG.
///
/// Fail-closed: decoding, painting, and encoding all happen before the
/// output file is created, so no partial output is written on error.
///
/// # Errors
///
/// Any decode, fill, or encode error from the underlying layers.
pub fn paint_map_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    seeds: &[RegionSeed],
    values: &BTreeMap<String, f64>,
    scale: &ShadeScale,
) -> PaintResult<PaintReport> {
    let raster = choromap_io::read_raster(input)?;
    let mut rm = raster.try_into_mut().unwrap_or_else(|r| r.to_mut());

    let report = paint_regions(&mut rm, seeds, values, scale)?;

    let format = match ImageFormat::from_path(&output) {
        ImageFormat::Unknown => ImageFormat::Png,
        known => known,
    };
    choromap_io::write_raster(&rm.into(), output, format)?;
    Ok(report)
}
