//! Encoded entry points.
//!
//! Thin wrappers that run a projection and hand the raster to a [`Codec`]:
//! cube faces come out as JPEG, fisheyes as WebP.

use std::path::{Path, PathBuf};

use pano_core::Raster;
use pano_io::{Codec, DefaultCodec, Format, IoError, JpegWriterOptions};
use tracing::{debug, info};

use crate::cubemap::{FaceOptions, render_cubemap, render_face};
use crate::face::Face;
use crate::fisheye::render_fisheye_with;
use crate::OpsResult;

/// Renders one face and encodes it as JPEG.
///
/// # Example
///
/// ```rust
/// use pano_core::Raster;
/// use pano_io::JpegWriterOptions;
/// use pano_ops::{render_face_jpeg, Face, FaceOptions};
///
/// let pano = Raster::filled(64, 32, [255, 0, 0, 255]).unwrap();
/// let jpeg = render_face_jpeg(&pano, Face::NegZ, &FaceOptions::default(), &JpegWriterOptions::default()).unwrap();
/// assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
/// ```
pub fn render_face_jpeg(
    source: &Raster,
    face: Face,
    options: &FaceOptions,
    jpeg: &JpegWriterOptions,
) -> OpsResult<Vec<u8>> {
    let codec = DefaultCodec {
        jpeg: *jpeg,
        ..DefaultCodec::default()
    };
    render_face_encoded(&codec, source, face, options, Format::Jpeg)
}

/// Renders one face and encodes it with `codec` in `format`.
pub fn render_face_encoded<C: Codec + ?Sized>(
    codec: &C,
    source: &Raster,
    face: Face,
    options: &FaceOptions,
    format: Format,
) -> OpsResult<Vec<u8>> {
    let raster = render_face(source, face, options)?;
    let bytes = codec.encode(&raster, format)?;
    debug!(%face, %format, bytes = bytes.len(), "Encoded cube face");
    Ok(bytes)
}

/// Renders a fisheye and encodes it as WebP.
///
/// With `output` the file is written and `None` returned; without it the
/// encoded bytes are returned.
pub fn render_fisheye_webp(source: &Raster, size: u32, output: Option<&Path>) -> OpsResult<Option<Vec<u8>>> {
    render_fisheye_webp_with(&DefaultCodec::default(), source, size, output)
}

/// [`render_fisheye_webp`] with a caller-supplied codec.
pub fn render_fisheye_webp_with<C: Codec + ?Sized>(
    codec: &C,
    source: &Raster,
    size: u32,
    output: Option<&Path>,
) -> OpsResult<Option<Vec<u8>>> {
    let raster = render_fisheye_with(codec, source, size)?;

    match output {
        Some(path) => {
            codec.encode_to_file(&raster, path, Format::WebP)?;
            info!(path = %path.display(), size, "Wrote fisheye");
            Ok(None)
        }
        None => {
            let bytes = codec.encode(&raster, Format::WebP)?;
            debug!(size, bytes = bytes.len(), "Encoded fisheye");
            Ok(Some(bytes))
        }
    }
}

/// Renders all six faces into `dir` as `px.<ext>`, `nx.<ext>`, ...
///
/// The directory is created if missing. Returns the written paths in
/// [`Face::ALL`] order.
pub fn render_cubemap_files(
    source: &Raster,
    dir: &Path,
    options: &FaceOptions,
    format: Format,
) -> OpsResult<Vec<PathBuf>> {
    render_cubemap_files_with(&DefaultCodec::default(), source, dir, options, format)
}

/// [`render_cubemap_files`] with a caller-supplied codec.
pub fn render_cubemap_files_with<C: Codec + ?Sized>(
    codec: &C,
    source: &Raster,
    dir: &Path,
    options: &FaceOptions,
    format: Format,
) -> OpsResult<Vec<PathBuf>> {
    if format == Format::Unknown {
        return Err(IoError::UnsupportedFormat("unknown".into()).into());
    }
    std::fs::create_dir_all(dir).map_err(IoError::from)?;

    let cubemap = render_cubemap(source, options)?;
    let mut paths = Vec::with_capacity(Face::ALL.len());
    for (face, raster) in cubemap.iter() {
        let path = dir.join(format!("{}.{}", face.alias(), format.extension()));
        codec.encode_to_file(raster, &path, format)?;
        debug!(%face, path = %path.display(), "Wrote cube face");
        paths.push(path);
    }

    info!(dir = %dir.display(), size = cubemap.size(), %format, "Wrote cubemap");
    Ok(paths)
}
