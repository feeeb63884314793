//! Regression tests for the flood fill primitive
//!
//! Exercises the painting guarantees the choropleth layer relies on:
//! completeness and containment of one fill, idempotence of refills,
//! and boundary safety at the raster edges.

use choromap_core::Raster;
use choromap_region::{RegionError, flood_fill};

/// Build a raster from literal rows
fn make_raster(rows: &[&[u8]]) -> Raster {
    let width = rows[0].len() as u32;
    let height = rows.len() as u32;
    let data: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Raster::from_vec(width, height, data).unwrap()
}

// ============================================================================
// Ring scenario: 5x5, border ring of 1s around a 3x3 interior of 0s
// ============================================================================

#[test]
fn test_ring_interior_fill() {
    let raster = make_raster(&[
        &[1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1],
    ]);
    let before = raster.data().to_vec();
    let mut rm = raster.try_into_mut().unwrap();

    let painted = flood_fill(&mut rm, 2, 2, 9).unwrap();
    assert_eq!(painted, 9);

    let after: Raster = rm.into();
    for y in 0..5u32 {
        for x in 0..5u32 {
            let interior = (1..4).contains(&x) && (1..4).contains(&y);
            let expected = if interior {
                9
            } else {
                before[(y * 5 + x) as usize]
            };
            assert_eq!(after.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

// ============================================================================
// Completeness and containment
// ============================================================================

#[test]
fn test_containment_outside_region_unchanged() {
    // Two disjoint 0-regions separated by a full column of 1s.
    let raster = make_raster(&[
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[0, 0, 1, 0, 0],
    ]);
    let mut rm = raster.try_into_mut().unwrap();

    let painted = flood_fill(&mut rm, 0, 0, 200).unwrap();
    assert_eq!(painted, 6);

    // Left block repainted completely.
    for y in 0..3 {
        for x in 0..2 {
            assert_eq!(rm.get_pixel(x, y), Some(200));
        }
    }
    // Barrier and right block untouched.
    for y in 0..3 {
        assert_eq!(rm.get_pixel(2, y), Some(1));
        assert_eq!(rm.get_pixel(3, y), Some(0));
        assert_eq!(rm.get_pixel(4, y), Some(0));
    }
}

#[test]
fn test_sequential_fills_of_disjoint_regions() {
    // Painting one region then the other: each fill sees only its own
    // connected component.
    let raster = make_raster(&[
        &[0, 1, 0],
        &[0, 1, 0],
    ]);
    let mut rm = raster.try_into_mut().unwrap();

    assert_eq!(flood_fill(&mut rm, 0, 0, 50).unwrap(), 2);
    assert_eq!(flood_fill(&mut rm, 2, 0, 80).unwrap(), 2);

    assert_eq!(rm.get_pixel(0, 1), Some(50));
    assert_eq!(rm.get_pixel(2, 1), Some(80));
    assert_eq!(rm.get_pixel(1, 0), Some(1));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_second_fill_with_same_value_changes_nothing() {
    let raster = make_raster(&[
        &[1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1],
    ]);
    let mut rm = raster.try_into_mut().unwrap();

    flood_fill(&mut rm, 2, 2, 9).unwrap();
    let snapshot = rm.data().to_vec();

    let painted = flood_fill(&mut rm, 2, 2, 9).unwrap();
    assert_eq!(painted, 0);
    assert_eq!(rm.data(), snapshot.as_slice());
}

// ============================================================================
// Boundary safety
// ============================================================================

#[test]
fn test_seed_at_origin_and_far_corner() {
    let mut rm = Raster::new(7, 4).unwrap().to_mut();
    assert_eq!(flood_fill(&mut rm, 0, 0, 3).unwrap(), 28);

    let mut rm = Raster::new(7, 4).unwrap().to_mut();
    assert_eq!(flood_fill(&mut rm, 6, 3, 3).unwrap(), 28);
}

#[test]
fn test_seed_past_either_edge_is_rejected() {
    let mut rm = Raster::new(7, 4).unwrap().to_mut();
    assert!(matches!(
        flood_fill(&mut rm, 7, 0, 3),
        Err(RegionError::SeedOutOfRange { x: 7, y: 0 })
    ));
    assert!(matches!(
        flood_fill(&mut rm, 0, 4, 3),
        Err(RegionError::SeedOutOfRange { x: 0, y: 4 })
    ));
}
