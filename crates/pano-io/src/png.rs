//! PNG format support.
//!
//! Decodes any PNG color type to 8-bit RGBA and encodes RGBA rasters
//! losslessly.
//!
//! # Example
//!
//! ```rust,ignore
//! use pano_io::png;
//!
//! let image = png::read("pano.png")?;
//! png::write("copy.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use pano_core::Raster;
use std::io::Cursor;
use std::path::Path;
use tracing::trace;

/// Decodes a PNG from memory.
///
/// 16-bit samples are stripped to 8 bits and palettes are expanded.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let (width, height) = (info.width, info.height);
    trace!(width, height, color = ?info.color_type, "png::decode");

    let raster = match info.color_type {
        png::ColorType::Rgba => Raster::from_rgba8(width, height, buf)?,
        png::ColorType::Rgb => Raster::from_rgb8(width, height, &buf)?,
        png::ColorType::Grayscale => Raster::from_luma8(width, height, &buf)?,
        png::ColorType::GrayscaleAlpha => {
            let rgba = buf
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            Raster::from_rgba8(width, height, rgba)?
        }
        other => {
            return Err(IoError::DecodeError(format!(
                "unexpected color type after expansion: {:?}",
                other
            )));
        }
    };

    Ok(raster)
}

/// Encodes a raster as an RGBA PNG.
pub fn encode(image: &Raster) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(buffer)
}

/// Reads a PNG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Writes a raster to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    std::fs::write(path.as_ref(), encode(image)?)?;
    Ok(())
}
