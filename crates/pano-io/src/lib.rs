//! # pano-io
//!
//! Image codecs for the panorama projectors.
//!
//! Everything decodes to (and encodes from) an 8-bit RGBA
//! [`Raster`](pano_core::Raster):
//!
//! - **JPEG** - cube face output, equirectangular input
//! - **PNG** - lossless input/output with alpha
//! - **WebP** - fisheye output (lossless)
//!
//! # Architecture
//!
//! - [`Codec`] - decode / resize / encode seam used by `pano-ops`
//! - [`DefaultCodec`] - implementation backed by the format modules
//! - [`read`] / [`write`] - high-level functions with format auto-detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pano_io::{read, write};
//!
//! let pano = read("pano.jpg")?;
//! write("pano.png", &pano)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)
//! - `webp` - WebP support via the `image` crate (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod codec;
mod detect;
mod error;
pub mod resize;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "webp")]
pub mod webp;

pub use codec::{Codec, DefaultCodec, JpegWriterOptions};
pub use detect::Format;
pub use error::{IoError, IoResult};
pub use resize::Filter;

use pano_core::Raster;
use std::path::Path;
use tracing::debug;

/// Decodes an in-memory image, detecting the format from magic bytes.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] when the bytes match no enabled codec,
/// [`IoError::DecodeError`] when the data is corrupt.
pub fn decode(bytes: &[u8]) -> IoResult<Raster> {
    DefaultCodec::default().decode(bytes)
}

/// Encodes a raster to the given format with default settings.
pub fn encode(image: &Raster, format: Format) -> IoResult<Vec<u8>> {
    DefaultCodec::default().encode(image, format)
}

/// Reads an image file, detecting the format from magic bytes and extension.
///
/// # Example
///
/// ```rust,ignore
/// let pano = pano_io::read("pano.jpg")?;
/// println!("{}x{}", pano.width(), pano.height());
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), %format, "Reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        #[cfg(feature = "webp")]
        Format::WebP => webp::read(path),

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes a raster, choosing the format from the file extension.
///
/// # Example
///
/// ```rust,ignore
/// pano_io::write("front.jpg", &face)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), %format, "Writing image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        #[cfg(feature = "webp")]
        Format::WebP => webp::write(path, image),

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}
