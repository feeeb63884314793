//! choromap-core - Core data structures for the choromap library
//!
//! This crate provides the [`Raster`] image container used by the rest of
//! the workspace: an 8-bit grayscale grid with explicit bounds-checked
//! pixel access and an immutable/mutable ownership split
//! ([`Raster`] / [`RasterMut`]).

pub mod error;
mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};
