//! Panorama pre-scaling for the fisheye projector.
//!
//! [`Codec::resize`](crate::Codec::resize) lands here: the fisheye first
//! scales the whole equirectangular source to exactly `2·size x size` and
//! then picks single pixels from it, so this resize is the only filtering
//! the disc gets. Width and height scale independently (no aspect
//! preservation) and all four RGBA channels are filtered alike.
//!
//! Rows are filtered first, then columns. Per-output weights are computed
//! once per axis and normalized, so a solid panorama stays solid at any
//! scale and edges clamp instead of darkening.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - box, blocky but exact on integer ratios
//! - [`Filter::Bilinear`] - tent
//! - [`Filter::Bicubic`] - Mitchell-Netravali cubic
//! - [`Filter::Lanczos3`] - the default, selectable from `pano fisheye --resize-filter`
//!
//! # Example
//!
//! ```rust
//! use pano_core::Raster;
//! use pano_io::resize::{resize, Filter};
//!
//! let src = Raster::filled(64, 32, [10, 20, 30, 255]).unwrap();
//! let dst = resize(&src, 16, 8, Filter::Lanczos3).unwrap();
//! assert_eq!(dst.dimensions(), (16, 8));
//! assert_eq!(dst.pixel(3, 3), [10, 20, 30, 255]);
//! ```

use crate::{IoError, IoResult};
use pano_core::{CHANNELS, Raster};
use tracing::trace;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    Bilinear,
    /// Bicubic interpolation (sharper than bilinear).
    Bicubic,
    /// Lanczos-3 (high quality, best for downscaling).
    #[default]
    Lanczos3,
}

impl Filter {
    /// Returns the support radius for this filter.
    #[inline]
    pub fn support(&self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Evaluates the filter kernel at position x.
    #[inline]
    pub fn weight(&self, x: f32) -> f32 {
        match self {
            Filter::Nearest => nearest_weight(x),
            Filter::Bilinear => bilinear_weight(x),
            Filter::Bicubic => bicubic_weight(x),
            Filter::Lanczos3 => lanczos_weight(x, 3.0),
        }
    }

    /// Parses a filter name (`nearest`, `bilinear`, `bicubic`, `lanczos`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "nearest" | "box" => Some(Filter::Nearest),
            "bilinear" | "linear" => Some(Filter::Bilinear),
            "bicubic" | "cubic" | "mitchell" => Some(Filter::Bicubic),
            "lanczos" | "lanczos3" => Some(Filter::Lanczos3),
            _ => None,
        }
    }
}

#[inline]
fn nearest_weight(x: f32) -> f32 {
    if x.abs() < 0.5 { 1.0 } else { 0.0 }
}

#[inline]
fn bilinear_weight(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

/// Mitchell-Netravali with B = C = 1/3.
#[inline]
fn bicubic_weight(x: f32) -> f32 {
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;

    let ax = x.abs();
    if ax < 1.0 {
        ((12.0 - 9.0 * B - 6.0 * C) * ax * ax * ax
            + (-18.0 + 12.0 * B + 6.0 * C) * ax * ax
            + (6.0 - 2.0 * B))
            / 6.0
    } else if ax < 2.0 {
        ((-B - 6.0 * C) * ax * ax * ax
            + (6.0 * B + 30.0 * C) * ax * ax
            + (-12.0 * B - 48.0 * C) * ax
            + (8.0 * B + 24.0 * C))
            / 6.0
    } else {
        0.0
    }
}

#[inline]
fn lanczos_weight(x: f32, a: f32) -> f32 {
    let ax = x.abs();
    if ax < 1e-8 {
        1.0
    } else if ax < a {
        let pi_x = std::f32::consts::PI * ax;
        let pi_x_a = pi_x / a;
        (pi_x.sin() / pi_x) * (pi_x_a.sin() / pi_x_a)
    } else {
        0.0
    }
}

/// Resizes a raster to exactly `dst_w x dst_h`.
///
/// All four channels are filtered. Resizing to the current size returns a
/// copy without resampling.
///
/// # Errors
///
/// Returns [`IoError::Core`] for a zero target size.
pub fn resize(src: &Raster, dst_w: u32, dst_h: u32, filter: Filter) -> IoResult<Raster> {
    trace!(src_w = src.width(), src_h = src.height(), dst_w, dst_h, ?filter, "resize");

    if dst_w == 0 || dst_h == 0 {
        return Err(IoError::Core(pano_core::Error::invalid_dimensions(
            dst_w,
            dst_h,
            "destination size must be > 0",
        )));
    }
    if src.dimensions() == (dst_w, dst_h) {
        return Ok(src.clone());
    }

    let (src_w, src_h) = (src.width() as usize, src.height() as usize);
    let plane: Vec<f32> = src.data().iter().map(|&v| v as f32).collect();

    let across = taps(src_w, dst_w as usize, filter);
    let down = taps(src_h, dst_h as usize, filter);
    let temp = resize_rows(&plane, src_w, &across);
    let result = resize_columns(&temp, dst_w as usize, &down);

    let bytes = result
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    Ok(Raster::from_rgba8(dst_w, dst_h, bytes)?)
}

/// Contributing source range and normalized weights for one output index.
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

/// Precomputes the taps mapping `src_len` samples onto `dst_len`.
///
/// When shrinking, the kernel is stretched by the scale factor so every
/// source sample contributes to some output.
fn taps(src_len: usize, dst_len: usize, filter: Filter) -> Vec<Taps> {
    let scale = src_len as f32 / dst_len as f32;
    let stretch = scale.max(1.0);
    let support = filter.support() * stretch;
    let last_index = src_len as isize - 1;

    (0..dst_len)
        .map(|i| {
            let center = (i as f32 + 0.5) * scale - 0.5;
            let first = ((center - support).floor() as isize).clamp(0, last_index) as usize;
            let last = ((center + support).ceil() as isize).clamp(0, last_index) as usize;

            let mut weights: Vec<f32> = (first..=last)
                .map(|s| filter.weight((s as f32 - center) / stretch))
                .collect();
            let total: f32 = weights.iter().sum();
            if total > 0.0 {
                weights.iter_mut().for_each(|w| *w /= total);
            }

            Taps { start: first, weights }
        })
        .collect()
}

/// Filters every row of `src` (rows of `src_w` pixels) down or up to `taps.len()` pixels.
fn resize_rows(src: &[f32], src_w: usize, taps: &[Taps]) -> Vec<f32> {
    let src_row = src_w * CHANNELS;
    let dst_row = taps.len() * CHANNELS;
    let mut dst = vec![0.0f32; src.len() / src_row * dst_row];

    for (row_in, row_out) in src.chunks_exact(src_row).zip(dst.chunks_exact_mut(dst_row)) {
        for (tap, out) in taps.iter().zip(row_out.chunks_exact_mut(CHANNELS)) {
            for (k, &w) in tap.weights.iter().enumerate() {
                let px = &row_in[(tap.start + k) * CHANNELS..][..CHANNELS];
                for (o, &v) in out.iter_mut().zip(px) {
                    *o += v * w;
                }
            }
        }
    }

    dst
}

/// Blends whole rows of `src` (each `width` pixels) into `taps.len()` rows.
fn resize_columns(src: &[f32], width: usize, taps: &[Taps]) -> Vec<f32> {
    let row = width * CHANNELS;
    let mut dst = vec![0.0f32; taps.len() * row];

    for (tap, row_out) in taps.iter().zip(dst.chunks_exact_mut(row)) {
        for (k, &w) in tap.weights.iter().enumerate() {
            let row_in = &src[(tap.start + k) * row..][..row];
            for (o, &v) in row_out.iter_mut().zip(row_in) {
                *o += v * w;
            }
        }
    }

    dst
}
