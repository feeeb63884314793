//! choromap-io - Image I/O for choromap
//!
//! Decodes map images into the grayscale [`Raster`](choromap_core::Raster)
//! and encodes painted rasters back to disk. PNG and PGM are supported;
//! input format is sniffed from the file's magic bytes, so the caller
//! does not need to know the format ahead of time.
//!
//! Writes are fail-closed: the image is encoded into memory first and
//! the output file is only created once encoding has succeeded, so an
//! encode error never leaves a partial file behind.

pub mod error;
pub mod format;
pub mod png;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use choromap_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an image file into a grayscale raster.
///
/// The format is detected from the file's magic bytes.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file is neither PNG
/// nor PGM, or the format-specific decode error otherwise.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path).map_err(IoError::Io)?);
    match format {
        ImageFormat::Png => png::read_png(reader),
        ImageFormat::Pnm => pnm::read_pnm(reader),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format!(
            "unrecognized image format: {}",
            path.as_ref().display()
        ))),
    }
}

/// Write a raster to a file in the given format.
///
/// The raster is encoded into an in-memory buffer first; the file is
/// only written after the whole encode succeeds.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for [`ImageFormat::Unknown`],
/// or the format-specific encode error otherwise.
pub fn write_raster<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let mut buffer = Vec::new();
    match format {
        ImageFormat::Png => png::write_png(raster, &mut buffer)?,
        ImageFormat::Pnm => pnm::write_pnm(raster, &mut buffer)?,
        ImageFormat::Unknown => {
            return Err(IoError::UnsupportedFormat(
                "cannot write an unknown image format".to_string(),
            ));
        }
    }
    std::fs::write(path, buffer).map_err(IoError::Io)
}
