//! WebP format support.
//!
//! Read/write WebP images via the `image` crate. Fisheye renders are
//! delivered as WebP. The `image` crate only ships a lossless encoder, so
//! every write is lossless and alpha is preserved exactly.
//!
//! # Example
//!
//! ```ignore
//! use pano_io::webp;
//!
//! let img = webp::read("input.webp")?;
//! webp::write("output.webp", &img)?;
//! ```

use std::io::Cursor;
use std::path::Path;

use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::trace;

use crate::{IoError, IoResult};
use pano_core::Raster;

/// Decodes a WebP from memory into RGBA.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::WebP)
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    trace!(width, height, "webp::decode");

    let rgba = match img {
        DynamicImage::ImageRgba8(rgba) => rgba.into_raw(),
        other => other.to_rgba8().into_raw(),
    };
    Ok(Raster::from_rgba8(width, height, rgba)?)
}

/// Encodes a raster as lossless WebP.
pub fn encode(image: &Raster) -> IoResult<Vec<u8>> {
    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.data().to_vec())
        .ok_or_else(|| IoError::EncodeError("failed to create RGBA image".into()))?;

    let mut buffer = Vec::new();
    let encoder = WebPEncoder::new_lossless(&mut buffer);
    DynamicImage::ImageRgba8(rgba)
        .write_with_encoder(encoder)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(buffer)
}

/// Reads a WebP file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Writes a raster to a WebP file.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    std::fs::write(path.as_ref(), encode(image)?)?;
    Ok(())
}
