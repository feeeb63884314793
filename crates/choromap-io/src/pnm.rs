//! PNM (Portable Any Map) format support
//!
//! Reads PGM images, both the binary (P5) and ASCII (P2) variants, and
//! writes binary PGM. Color PPM and bitmap PBM variants are not
//! supported; the painter works on grayscale maps only.

use crate::{IoError, IoResult};
use choromap_core::Raster;
use std::io::{BufRead, Read, Write};

/// Incremental token scanner over the raw PNM header bytes.
///
/// PNM headers are whitespace-separated decimal tokens with `#` line
/// comments allowed between them.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.data.len() {
            let b = self.data[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn next_u32(&mut self) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IoError::InvalidData(
                "expected decimal token in PNM header".to_string(),
            ));
        }
        let token = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| IoError::InvalidData("non-ASCII token in PNM header".to_string()))?;
        token
            .parse::<u32>()
            .map_err(|_| IoError::InvalidData(format!("bad numeric token: {}", token)))
    }
}

/// Read a PGM image (P2 or P5) from a reader.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for non-PGM magics or a
/// maxval above 255, and [`IoError::InvalidData`] for truncated or
/// malformed content.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(IoError::Io)?;

    if bytes.len() < 2 {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    let magic = &bytes[..2];
    if magic != b"P5" && magic != b"P2" {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM magic: {}",
            String::from_utf8_lossy(magic)
        )));
    }
    let binary = magic == b"P5";

    let mut tokens = Tokens::new(&bytes);
    tokens.pos = 2;
    let width = tokens.next_u32()?;
    let height = tokens.next_u32()?;
    let maxval = tokens.next_u32()?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PGM maxval: {}",
            maxval
        )));
    }

    let pixel_count = (width as usize) * (height as usize);
    let data = if binary {
        // Exactly one whitespace byte separates the maxval from the
        // raster data.
        let start = tokens.pos + 1;
        if start + pixel_count > bytes.len() {
            return Err(IoError::InvalidData("truncated PGM raster".to_string()));
        }
        bytes[start..start + pixel_count].to_vec()
    } else {
        let mut data = Vec::with_capacity(pixel_count);
        for _ in 0..pixel_count {
            let v = tokens.next_u32()?;
            if v > maxval {
                return Err(IoError::InvalidData(format!(
                    "sample {} exceeds maxval {}",
                    v, maxval
                )));
            }
            data.push(v as u8);
        }
        data
    };

    Raster::from_vec(width, height, data).map_err(IoError::Core)
}

/// Write a raster as binary PGM (P5, maxval 255).
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let header = format!("P5\n{} {}\n255\n", raster.width(), raster.height());
    writer.write_all(header.as_bytes()).map_err(IoError::Io)?;
    writer.write_all(raster.data()).map_err(IoError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pgm_binary_roundtrip() {
        let raster = Raster::from_vec(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();

        let mut buffer = Vec::new();
        write_pnm(&raster, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P5\n3 2\n255\n"));

        let decoded = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_pgm_ascii() {
        let src = b"P2\n# synthetic map\n3 2\n255\n0 10 20\n30 40 50\n";
        let decoded = read_pnm(Cursor::new(&src[..])).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.data(), &[0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_pgm_truncated_raster() {
        let src = b"P5\n4 4\n255\nabc";
        let err = read_pnm(Cursor::new(&src[..])).unwrap_err();
        assert!(matches!(err, IoError::InvalidData(_)));
    }

    #[test]
    fn test_ppm_rejected() {
        let src = b"P6\n1 1\n255\nabc";
        let err = read_pnm(Cursor::new(&src[..])).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_maxval_over_255_rejected() {
        let src = b"P2\n1 1\n65535\n1000\n";
        let err = read_pnm(Cursor::new(&src[..])).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }
}
