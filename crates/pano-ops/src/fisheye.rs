//! Equirectangular to circular fisheye projection.
//!
//! The source is first resized to `2·size x size`, then each output pixel
//! inside the inscribed disc picks one source pixel:
//!
//! ```text
//! theta = atan2(dy, dx)                 angle around the center
//! phi   = (distance / R) · π/2          0 at the center, π/2 at the rim
//! u     = (theta + π) / 2π
//! v     = 1 - phi / π
//! ```
//!
//! Pixels outside the disc stay fully transparent.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use pano_core::{CHANNELS, Raster};
use pano_io::{Codec, DefaultCodec};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{OpsError, OpsResult};

/// Renders a `size x size` fisheye using the default codec for the resize.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] for `size == 0`; resize failures are
/// returned as [`OpsError::Codec`].
///
/// # Example
///
/// ```rust
/// use pano_core::Raster;
/// use pano_ops::render_fisheye;
///
/// let pano = Raster::filled(64, 32, [0, 200, 0, 255]).unwrap();
/// let disc = render_fisheye(&pano, 16).unwrap();
/// assert_eq!(disc.pixel(0, 0), [0, 0, 0, 0]);
/// assert_eq!(disc.pixel(8, 8), [0, 200, 0, 255]);
/// ```
pub fn render_fisheye(source: &Raster, size: u32) -> OpsResult<Raster> {
    render_fisheye_with(&DefaultCodec::default(), source, size)
}

/// Renders a fisheye, resizing the source through `codec`.
pub fn render_fisheye_with<C: Codec + ?Sized>(codec: &C, source: &Raster, size: u32) -> OpsResult<Raster> {
    if size == 0 {
        return Err(OpsError::InvalidDimensions("fisheye size must be > 0".into()));
    }
    let width = size
        .checked_mul(2)
        .ok_or_else(|| OpsError::InvalidDimensions(format!("fisheye size {size} too large")))?;

    debug!(
        size,
        src_w = source.width(),
        src_h = source.height(),
        "Rendering fisheye"
    );

    let resized = codec.resize(source, width, size)?;
    if resized.dimensions() != (width, size) {
        return Err(OpsError::InvalidDimensions(format!(
            "resize returned {}x{}, expected {}x{}",
            resized.width(),
            resized.height(),
            width,
            size
        )));
    }

    let mut output = Raster::new(size, size)?;
    let row_bytes = output.stride();
    let center = size as f64 / 2.0;
    let radius = center;
    let data = resized.data();

    let render_row = |(y, row): (usize, &mut [u8])| {
        let dy = y as f64 - center;
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let dx = x as f64 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > radius {
                continue;
            }

            let theta = dy.atan2(dx);
            let phi = (distance / radius) * FRAC_PI_2;
            let u = (theta + PI) / TAU;
            let v = 1.0 - phi / PI;

            // u == 1 on the left half of the center row; longitude 2π is column 0
            let sx = (u * width as f64).floor() as u32 % width;
            let sy = ((v * size as f64).floor() as u32).min(size - 1);
            let idx = resized.offset(sx, sy);
            px.copy_from_slice(&data[idx..idx + CHANNELS]);
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

    Ok(output)
}
