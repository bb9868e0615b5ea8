//! Equirectangular to cube face projection.
//!
//! Every destination pixel is cast as a ray through its face, converted
//! to longitude/latitude and sampled from the source:
//!
//! ```text
//! u, v       = 2(x+0.5)/size - 1, 2(y+0.5)/size - 1
//! c          = face.direction(u, v)
//! lon        = wrap(atan2(cy, cx) + rotation, 2π)
//! lat        = acos(cz / |c|)
//! x_src      = w·lon/2π - 0.5
//! y_src      = h·lat/π - 0.5
//! ```
//!
//! When the `parallel` feature is enabled, rows of a face (and the six
//! faces of a cubemap) are rendered on the rayon pool.

use std::f64::consts::{PI, TAU};

use pano_core::{CHANNELS, Raster};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::face::Face;
use crate::kernel::Interpolation;
use crate::sample::Sampler;
use crate::{OpsError, OpsResult};

/// Remainder of `x` by `n` folded into `[0, n)`.
///
/// Computed as `((x % n) + n) % n`, not `rem_euclid`: the two disagree by
/// one ulp for some longitudes, which is enough to change pole samples.
///
/// ```rust
/// use pano_ops::cubemap::wrap;
///
/// assert_eq!(wrap(-1.0, 4.0), 3.0);
/// assert_eq!(wrap(9.0, 4.0), 1.0);
/// ```
#[inline]
pub fn wrap(x: f64, n: f64) -> f64 {
    ((x % n) + n) % n
}

/// Source-raster coordinates for face-local `(u, v)`.
#[inline]
pub fn source_coords(face: Face, u: f64, v: f64, rotation: f64, width: u32, height: u32) -> (f64, f64) {
    let c = face.direction(u, v);
    let r = c.length();
    let lon = wrap(c.y.atan2(c.x) + rotation, TAU);
    let lat = (c.z / r).acos();

    (
        width as f64 * lon / PI / 2.0 - 0.5,
        height as f64 * lat / PI - 0.5,
    )
}

/// Edge length of a face rendered from a source `source_width` wide.
pub fn face_size(source_width: u32, max_width: Option<u32>) -> u32 {
    let natural = source_width / 4;
    max_width.map_or(natural, |max| max.min(natural))
}

/// Options for [`render_face`] and [`render_cubemap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOptions {
    /// Longitude offset in radians. Default: π.
    pub rotation: f64,
    /// Source resampling mode. Default: nearest.
    pub interpolation: Interpolation,
    /// Upper bound on the face edge. Default: none (source width / 4).
    pub max_width: Option<u32>,
}

impl Default for FaceOptions {
    fn default() -> Self {
        Self {
            rotation: PI,
            interpolation: Interpolation::Nearest,
            max_width: None,
        }
    }
}

impl FaceOptions {
    /// Sets the rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the interpolation mode.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Caps the face edge length.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Renders one cube face from an equirectangular source.
///
/// The result is `size x size` with `size = min(max_width, width / 4)` and
/// fully opaque.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] when the face size comes out as zero.
///
/// # Example
///
/// ```rust
/// use pano_core::Raster;
/// use pano_ops::{render_face, Face, FaceOptions};
///
/// let pano = Raster::filled(64, 32, [0, 128, 255, 255]).unwrap();
/// let front = render_face(&pano, Face::PosZ, &FaceOptions::default()).unwrap();
/// assert_eq!(front.dimensions(), (16, 16));
/// ```
pub fn render_face(source: &Raster, face: Face, options: &FaceOptions) -> OpsResult<Raster> {
    let size = face_size(source.width(), options.max_width);
    if size == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "face size is zero for a {}x{} source (max width {:?})",
            source.width(),
            source.height(),
            options.max_width
        )));
    }

    debug!(
        %face,
        size,
        interpolation = %options.interpolation,
        rotation = options.rotation,
        "Rendering cube face"
    );

    let mut output = Raster::new(size, size)?;
    let sampler = Sampler::new(source, options.interpolation);
    let row_bytes = output.stride();

    let render_row = |(y, row): (usize, &mut [u8])| {
        let v = 2.0 * (y as f64 + 0.5) / size as f64 - 1.0;
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let u = 2.0 * (x as f64 + 0.5) / size as f64 - 1.0;
            let (sx, sy) = source_coords(face, u, v, options.rotation, source.width(), source.height());
            sampler.sample(sx, sy, px);
            px[3] = 255;
        }
    };

    #[cfg(feature = "parallel")]
    output
        .data_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(render_row);

    #[cfg(not(feature = "parallel"))]
    output
        .data_mut()
        .chunks_mut(row_bytes)
        .enumerate()
        .for_each(render_row);

    trace!(%face, size, "Cube face done");
    Ok(output)
}

/// The six faces of a cube, in [`Face::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubemap {
    size: u32,
    faces: Vec<Raster>,
}

impl Cubemap {
    /// Edge length shared by every face.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raster for `face`.
    pub fn face(&self, face: Face) -> &Raster {
        &self.faces[face.index()]
    }

    /// Iterates `(face, raster)` pairs in [`Face::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &Raster)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    /// Consumes the cubemap, yielding owned faces.
    pub fn into_faces(self) -> Vec<(Face, Raster)> {
        Face::ALL.into_iter().zip(self.faces).collect()
    }
}

/// Renders all six faces with shared options.
///
/// # Errors
///
/// Same as [`render_face`]; the first failing face aborts the whole cubemap.
pub fn render_cubemap(source: &Raster, options: &FaceOptions) -> OpsResult<Cubemap> {
    debug!(
        width = source.width(),
        height = source.height(),
        interpolation = %options.interpolation,
        "Rendering cubemap"
    );

    #[cfg(feature = "parallel")]
    let faces = Face::ALL
        .par_iter()
        .map(|&face| render_face(source, face, options))
        .collect::<OpsResult<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let faces = Face::ALL
        .iter()
        .map(|&face| render_face(source, face, options))
        .collect::<OpsResult<Vec<_>>>()?;

    let size = face_size(source.width(), options.max_width);
    Ok(Cubemap { size, faces })
}
