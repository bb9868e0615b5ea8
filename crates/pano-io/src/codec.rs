//! Codec adapter seam.
//!
//! Projection code never talks to a format module directly; it goes
//! through a [`Codec`] so that decode, resize and encode can be swapped
//! (or failed on purpose in tests).
//!
//! # Example
//!
//! ```rust,ignore
//! use pano_io::{Codec, DefaultCodec, Format};
//!
//! let codec = DefaultCodec::default();
//! let source = codec.decode(&std::fs::read("pano.jpg")?)?;
//! let small = codec.resize(&source, 512, 256)?;
//! let bytes = codec.encode(&small, Format::WebP)?;
//! ```

use std::path::Path;

use pano_core::Raster;
use tracing::debug;

use crate::resize::Filter;
use crate::{Format, IoError, IoResult};

/// Decode / resize / encode contract used by the projectors.
pub trait Codec {
    /// Decodes compressed bytes to RGBA at native resolution.
    ///
    /// Alpha is always present in the result.
    fn decode(&self, bytes: &[u8]) -> IoResult<Raster>;

    /// Resamples a raster to exactly `width x height`.
    fn resize(&self, image: &Raster, width: u32, height: u32) -> IoResult<Raster>;

    /// Encodes a raster to the given format.
    fn encode(&self, image: &Raster, format: Format) -> IoResult<Vec<u8>>;

    /// Encodes a raster and writes it to `path`.
    fn encode_to_file(&self, image: &Raster, path: &Path, format: Format) -> IoResult<()> {
        let bytes = self.encode(image, format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Options for writing JPEG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    /// Default: 90.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

/// Codec backed by the `png`, `jpeg-*` and `image` crates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCodec {
    /// JPEG encoder settings.
    pub jpeg: JpegWriterOptions,
    /// Filter used by [`Codec::resize`].
    pub resize_filter: Filter,
}

impl DefaultCodec {
    /// Creates a codec with default settings (JPEG quality 90, Lanczos3 resize).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the JPEG quality (1-100).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg.quality = quality;
        self
    }

    /// Sets the resize filter.
    pub fn with_resize_filter(mut self, filter: Filter) -> Self {
        self.resize_filter = filter;
        self
    }
}

impl Codec for DefaultCodec {
    fn decode(&self, bytes: &[u8]) -> IoResult<Raster> {
        let format = Format::from_bytes(bytes);
        debug!(%format, bytes = bytes.len(), "Decoding image");

        match format {
            #[cfg(feature = "png")]
            Format::Png => crate::png::decode(bytes),

            #[cfg(feature = "jpeg")]
            Format::Jpeg => crate::jpeg::decode(bytes),

            #[cfg(feature = "webp")]
            Format::WebP => crate::webp::decode(bytes),

            #[allow(unreachable_patterns)]
            other => Err(IoError::UnsupportedFormat(format!(
                "cannot decode {} data",
                other
            ))),
        }
    }

    fn resize(&self, image: &Raster, width: u32, height: u32) -> IoResult<Raster> {
        crate::resize::resize(image, width, height, self.resize_filter)
    }

    fn encode(&self, image: &Raster, format: Format) -> IoResult<Vec<u8>> {
        debug!(%format, width = image.width(), height = image.height(), "Encoding image");

        match format {
            #[cfg(feature = "png")]
            Format::Png => crate::png::encode(image),

            #[cfg(feature = "jpeg")]
            Format::Jpeg => crate::jpeg::encode(image, &self.jpeg),

            #[cfg(feature = "webp")]
            Format::WebP => crate::webp::encode(image),

            #[allow(unreachable_patterns)]
            other => Err(IoError::UnsupportedFormat(format!(
                "cannot encode {} data",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dispatches_on_magic() {
        let codec = DefaultCodec::new();
        let image = Raster::filled(4, 2, [5, 6, 7, 255]).unwrap();

        for format in [Format::Png, Format::Jpeg, Format::WebP] {
            let bytes = codec.encode(&image, format).unwrap();
            assert_eq!(Format::from_bytes(&bytes), format);
            let decoded = codec.decode(&bytes).unwrap();
            assert_eq!(decoded.dimensions(), (4, 2));
            assert_eq!(decoded.pixel(0, 0)[3], 255);
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let codec = DefaultCodec::new();
        assert!(matches!(
            codec.decode(b"GIF89a......"),
            Err(IoError::UnsupportedFormat(_))
        ));

        let image = Raster::new(2, 2).unwrap();
        assert!(matches!(
            codec.encode(&image, Format::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_builder_settings() {
        let codec = DefaultCodec::new()
            .with_jpeg_quality(75)
            .with_resize_filter(Filter::Bilinear);
        assert_eq!(codec.jpeg.quality, 75);
        assert_eq!(codec.resize_filter, Filter::Bilinear);
    }

    #[test]
    fn test_encode_to_file() {
        let codec = DefaultCodec::new();
        let image = Raster::filled(3, 3, [0, 0, 255, 255]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");

        codec.encode_to_file(&image, &path, Format::Png).unwrap();
        let loaded = crate::read(&path).unwrap();
        assert_eq!(loaded, image);
    }
}
