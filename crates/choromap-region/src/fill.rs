//! Seed-based flood fill
//!
//! Paints the maximal 4-connected region of uniform intensity around a
//! seed coordinate with a new intensity. This is the primitive the
//! choropleth painter uses to shade one named map region per data value.
//!
//! Connectivity is 4-way only (N, S, E, W). Diagonal traversal would
//! leak across region borders that touch only at a corner, so it is
//! deliberately not offered.

use crate::error::{RegionError, RegionResult};
use choromap_core::{Raster, RasterMut};

/// Flood fill a raster in place, starting from a seed coordinate.
///
/// Records the intensity at the seed (the start value), then repaints
/// every pixel reachable from the seed through 4-connected pixels of
/// that start value with `fill_value`. Pixels outside the connected
/// region are never modified.
///
/// The traversal is iterative: a work stack of candidate coordinates is
/// popped in unspecified order, and each popped pixel is overwritten
/// before its neighbors are enqueued. A pixel can only be enqueued
/// while it still holds the start value, which bounds the work list by
/// the region size and guarantees termination.
///
/// The seed must lie strictly inside its region and the region must be
/// fully enclosed by pixels of a different value; a seed on the border
/// of an unenclosed region makes the fill spill into neighboring area.
/// That is a caller precondition, not a detectable error.
///
/// # Arguments
///
/// * `raster` - Mutable grayscale raster
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `fill_value` - Intensity to assign to the reachable region
///
/// # Returns
///
/// The number of pixels that were painted. Filling a region with the
/// value it already holds is a no-op and returns 0.
///
/// # Errors
///
/// Returns [`RegionError::SeedOutOfRange`] if the seed lies outside the
/// raster bounds. The check happens before any pixel is read.
///
/// # Examples
///
/// ```
/// use choromap_core::Raster;
/// use choromap_region::flood_fill;
///
/// let mut rm = Raster::new(10, 10).unwrap().to_mut();
/// let painted = flood_fill(&mut rm, 5, 5, 200).unwrap();
/// assert_eq!(painted, 100); // uniform raster, everything reachable
/// ```
pub fn flood_fill(
    raster: &mut RasterMut,
    seed_x: u32,
    seed_y: u32,
    fill_value: u8,
) -> RegionResult<u32> {
    let width = raster.width();
    let height = raster.height();

    if seed_x >= width || seed_y >= height {
        return Err(RegionError::SeedOutOfRange {
            x: seed_x,
            y: seed_y,
        });
    }

    let start_value = raster.get_pixel_unchecked(seed_x, seed_y);

    // Repainting with the start value would visit every pixel and reset
    // it to what it already holds. Same observable result, no work.
    if fill_value == start_value {
        return Ok(0);
    }

    let mut painted = 0u32;
    let mut work = vec![(seed_x, seed_y)];

    while let Some((x, y)) = work.pop() {
        // A pixel may sit on the stack more than once; once overwritten
        // it no longer matches and the revisit is a no-op.
        if raster.get_pixel_unchecked(x, y) != start_value {
            continue;
        }

        raster.set_pixel_unchecked(x, y, fill_value);
        painted += 1;

        // 4-connected neighbors only, bounds-checked before any read.
        if x > 0 && raster.get_pixel_unchecked(x - 1, y) == start_value {
            work.push((x - 1, y));
        }
        if x + 1 < width && raster.get_pixel_unchecked(x + 1, y) == start_value {
            work.push((x + 1, y));
        }
        if y > 0 && raster.get_pixel_unchecked(x, y - 1) == start_value {
            work.push((x, y - 1));
        }
        if y + 1 < height && raster.get_pixel_unchecked(x, y + 1) == start_value {
            work.push((x, y + 1));
        }
    }

    Ok(painted)
}

/// Flood fill into a copy, leaving the input untouched.
///
/// Convenience wrapper over [`flood_fill`] for callers holding a shared
/// [`Raster`].
///
/// # Errors
///
/// Same as [`flood_fill`].
pub fn flood_fill_copy(
    raster: &Raster,
    seed_x: u32,
    seed_y: u32,
    fill_value: u8,
) -> RegionResult<Raster> {
    let mut output = raster.to_mut();
    flood_fill(&mut output, seed_x, seed_y, fill_value)?;
    Ok(output.into())
}
