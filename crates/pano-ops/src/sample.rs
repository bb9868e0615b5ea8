//! Source-pixel addressing and resampling.
//!
//! A [`Sampler`] reads R,G,B at a fractional source coordinate. Coordinates
//! outside the raster are clamped to the nearest edge pixel; nothing is ever
//! skipped or wrapped here.
//!
//! # Example
//!
//! ```rust
//! use pano_core::Raster;
//! use pano_ops::{Interpolation, Sampler};
//!
//! let src = Raster::filled(8, 4, [255, 0, 0, 255]).unwrap();
//! let sampler = Sampler::new(&src, Interpolation::Cubic);
//!
//! let mut px = [0u8; 4];
//! sampler.sample(3.4, 1.7, &mut px);
//! assert_eq!(&px[..3], &[255, 0, 0]);
//! ```

use pano_core::{CHANNELS, Raster};

use crate::kernel::{self, Interpolation, LANCZOS_RADIUS};

/// Widest tap window any kernel needs.
const MAX_TAPS: usize = 2 * LANCZOS_RADIUS;

/// Rounds to the nearest integer, halves toward positive infinity.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn saturate(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[inline]
fn clamp_index(i: i64, len: u32) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

/// Reads interpolated colors from a borrowed raster.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    source: &'a Raster,
    mode: Interpolation,
}

impl<'a> Sampler<'a> {
    /// Creates a sampler over `source` using `mode`.
    pub fn new(source: &'a Raster, mode: Interpolation) -> Self {
        Self { source, mode }
    }

    /// Writes R,G,B for source position `(x, y)` into `out[0..3]`.
    ///
    /// `out[3]` (alpha) is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than 3 bytes.
    #[inline]
    pub fn sample(&self, x: f64, y: f64, out: &mut [u8]) {
        match self.mode {
            Interpolation::Nearest => self.nearest(x, y, out),
            Interpolation::Linear => self.bilinear(x, y, out),
            Interpolation::Cubic => self.convolve(x, y, kernel::CUBIC_RADIUS, kernel::cubic, out),
            Interpolation::Lanczos => {
                self.convolve(x, y, LANCZOS_RADIUS, kernel::lanczos, out)
            }
        }
    }

    fn nearest(&self, x: f64, y: f64, out: &mut [u8]) {
        let src = self.source;
        let sx = clamp_index(round_half_up(x) as i64, src.width());
        let sy = clamp_index(round_half_up(y) as i64, src.height());

        let idx = src.offset(sx as u32, sy as u32);
        out[..3].copy_from_slice(&src.data()[idx..idx + 3]);
    }

    fn bilinear(&self, x: f64, y: f64, out: &mut [u8]) {
        let src = self.source;
        let data = src.data();

        let xl = clamp_index(x.floor() as i64, src.width());
        let xr = clamp_index(x.ceil() as i64, src.width());
        let xf = x - xl as f64;

        let yl = clamp_index(y.floor() as i64, src.height());
        let yr = clamp_index(y.ceil() as i64, src.height());
        let yf = y - yl as f64;

        let p00 = src.offset(xl as u32, yl as u32);
        let p10 = src.offset(xr as u32, yl as u32);
        let p01 = src.offset(xl as u32, yr as u32);
        let p11 = src.offset(xr as u32, yr as u32);

        for c in 0..3 {
            let p0 = data[p00 + c] as f64 * (1.0 - xf) + data[p10 + c] as f64 * xf;
            let p1 = data[p01 + c] as f64 * (1.0 - xf) + data[p11 + c] as f64 * xf;
            out[c] = saturate((p0 * (1.0 - yf) + p1 * yf).ceil());
        }
    }

    /// Separable convolution over a `2·radius` square window.
    ///
    /// Weights are used as-is; a kernel whose taps do not sum to one shifts
    /// the overall level slightly.
    fn convolve<K>(&self, x: f64, y: f64, radius: usize, kernel: K, out: &mut [u8])
    where
        K: Fn(f64) -> f64,
    {
        let src = self.source;
        let data = src.data();
        let taps = 2 * radius;
        debug_assert!(taps <= MAX_TAPS);

        let x_start = x.floor() as i64 - radius as i64 + 1;
        let y_start = y.floor() as i64 - radius as i64 + 1;

        let mut x_kernel = [0.0f64; MAX_TAPS];
        let mut y_kernel = [0.0f64; MAX_TAPS];
        let mut x_index = [0usize; MAX_TAPS];
        let mut y_index = [0usize; MAX_TAPS];
        for i in 0..taps {
            let tx = x_start + i as i64;
            let ty = y_start + i as i64;
            x_kernel[i] = kernel(x - tx as f64);
            y_kernel[i] = kernel(y - ty as f64);
            x_index[i] = clamp_index(tx, src.width());
            y_index[i] = clamp_index(ty, src.height());
        }

        for c in 0..3 {
            let mut q = 0.0;
            for i in 0..taps {
                let row = src.offset(0, y_index[i] as u32);
                let mut p = 0.0;
                for j in 0..taps {
                    p += data[row + x_index[j] * CHANNELS + c] as f64 * x_kernel[j];
                }
                q += p * y_kernel[i];
            }
            out[c] = saturate(round_half_up(q));
        }
    }
}
