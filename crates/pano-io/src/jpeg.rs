//! JPEG format support.
//!
//! Cube faces are delivered as JPEG, so this is the main output path.
//! JPEG has no alpha channel: decoding yields opaque RGBA and encoding
//! drops alpha.
//!
//! # Example
//!
//! ```rust,ignore
//! use pano_io::jpeg::{self, JpegWriterOptions};
//!
//! let image = jpeg::read("pano.jpg")?;
//! let bytes = jpeg::encode(&image, &JpegWriterOptions { quality: 95 })?;
//! ```

use crate::{IoError, IoResult};
use pano_core::Raster;
use std::io::{BufReader, Cursor};
use std::path::Path;
use tracing::trace;

pub use crate::codec::JpegWriterOptions;

/// Decodes a JPEG from memory into opaque RGBA.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    trace!(width, height, format = ?info.pixel_format, "jpeg::decode");

    let raster = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => Raster::from_rgb8(width, height, &pixels)?,
        jpeg_decoder::PixelFormat::L8 => Raster::from_luma8(width, height, &pixels)?,
        jpeg_decoder::PixelFormat::L16 => {
            // big-endian samples, keep the high byte
            let luma: Vec<u8> = pixels.chunks_exact(2).map(|l16| l16[0]).collect();
            Raster::from_luma8(width, height, &luma)?
        }
        jpeg_decoder::PixelFormat::CMYK32 => {
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let k = 1.0 - cmyk[3] as f32 / 255.0;
                    let r = ((1.0 - cmyk[0] as f32 / 255.0) * k * 255.0) as u8;
                    let g = ((1.0 - cmyk[1] as f32 / 255.0) * k * 255.0) as u8;
                    let b = ((1.0 - cmyk[2] as f32 / 255.0) * k * 255.0) as u8;
                    [r, g, b]
                })
                .collect();
            Raster::from_rgb8(width, height, &rgb)?
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::DecodeError(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(raster)
}

/// Encodes a raster as baseline JPEG, discarding alpha.
pub fn encode(image: &Raster, options: &JpegWriterOptions) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let (Ok(width), Ok(height)) = (u16::try_from(image.width()), u16::try_from(image.height()))
    else {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG size limit of 65535",
            image.width(),
            image.height()
        )));
    };

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, options.quality.clamp(1, 100));
    encoder
        .encode(&image.to_rgb8(), width, height, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(buffer)
}

/// Reads a JPEG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Writes a raster to a JPEG file with default options.
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    std::fs::write(path.as_ref(), encode(image, &JpegWriterOptions::default())?)?;
    Ok(())
}
