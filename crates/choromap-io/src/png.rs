//! PNG image format support
//!
//! Decodes PNG into the 8-bit grayscale [`Raster`]. Color inputs are
//! reduced to luma so a scanned color map can be painted directly, the
//! same reduction the original workflow applies before filling.

use crate::{IoError, IoResult};
use choromap_core::Raster;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Rec. 601 luma weights used to reduce RGB input to grayscale.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8
}

/// Read a PNG image into a grayscale raster.
///
/// Supported layouts: 1-bit and 8-bit grayscale, 8-bit RGB and RGBA
/// (reduced to luma, alpha ignored). 1-bit input is expanded so that
/// set bits become 255.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other color types or bit
/// depths, and [`IoError::DecodeError`] if the stream is malformed.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Eight)
        | (ColorType::Rgb, BitDepth::Eight)
        | (ColorType::Rgba, BitDepth::Eight) => {}
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte_idx = row_start + (x / 8) as usize;
                    let bit_idx = 7 - (x % 8);
                    let bit = (data[byte_idx] >> bit_idx) & 1;
                    pixels.push(if bit != 0 { 255 } else { 0 });
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                pixels.extend_from_slice(&data[row_start..row_start + width as usize]);
            }
        }
        (ColorType::Rgb, _) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 3);
                    pixels.push(luma(data[idx], data[idx + 1], data[idx + 2]));
                }
            }
        }
        (ColorType::Rgba, _) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 4);
                    pixels.push(luma(data[idx], data[idx + 1], data[idx + 2]));
                }
            }
        }
        _ => unreachable!(),
    }

    Raster::from_vec(width, height, pixels).map_err(IoError::Core)
}

/// Write a raster as an 8-bit grayscale PNG.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
