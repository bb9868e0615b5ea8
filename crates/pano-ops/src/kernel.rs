//! Interpolation kernels.
//!
//! Pure weight functions used by the separable convolution in
//! [`sample`](crate::sample), plus the [`Interpolation`] selector.
//!
//! # Kernels
//!
//! | Mode | Kernel | Radius |
//! |------|--------|--------|
//! | [`Interpolation::Nearest`] | none | 0 |
//! | [`Interpolation::Linear`] | tent | 1 |
//! | [`Interpolation::Cubic`] | Keys, `b = -0.5` | 2 |
//! | [`Interpolation::Lanczos`] | Lanczos-5 | 5 |

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::OpsError;

/// Support radius of [`cubic`].
pub const CUBIC_RADIUS: usize = 2;

/// Support radius of [`lanczos`].
pub const LANCZOS_RADIUS: usize = 5;

const CUBIC_B: f64 = -0.5;

/// Keys cubic convolution kernel with `b = -0.5`.
///
/// ```rust
/// use pano_ops::kernel::cubic;
///
/// assert_eq!(cubic(0.0), 1.0);
/// assert_eq!(cubic(1.0), 0.0);
/// assert_eq!(cubic(2.5), 0.0);
/// ```
#[inline]
pub fn cubic(x: f64) -> f64 {
    let b = CUBIC_B;
    let x = x.abs();
    let x2 = x * x;
    let x3 = x2 * x;

    if x <= 1.0 {
        (b + 2.0) * x3 - (b + 3.0) * x2 + 1.0
    } else if x < 2.0 {
        b * x3 - 5.0 * b * x2 + 8.0 * b * x - 4.0 * b
    } else {
        0.0
    }
}

/// Lanczos kernel with `a = 5`.
///
/// `1` at the origin, `a·sin(πx)·sin(πx/a) / (πx)²` inside the support,
/// `0` outside.
#[inline]
pub fn lanczos(x: f64) -> f64 {
    let a = LANCZOS_RADIUS as f64;
    if x == 0.0 {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }
    let xp = PI * x;
    a * xp.sin() * (xp / a).sin() / (xp * xp)
}

/// Resampling mode used when reading the equirectangular source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Closest source pixel.
    #[default]
    Nearest,
    /// Bilinear blend of four pixels, rounded up.
    Linear,
    /// 4x4 Keys cubic convolution.
    Cubic,
    /// 10x10 Lanczos-5 convolution.
    Lanczos,
}

impl Interpolation {
    /// All modes, cheapest first.
    pub const ALL: [Interpolation; 4] = [
        Interpolation::Nearest,
        Interpolation::Linear,
        Interpolation::Cubic,
        Interpolation::Lanczos,
    ];

    /// Kernel support radius in pixels.
    pub fn radius(&self) -> usize {
        match self {
            Interpolation::Nearest => 0,
            Interpolation::Linear => 1,
            Interpolation::Cubic => CUBIC_RADIUS,
            Interpolation::Lanczos => LANCZOS_RADIUS,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Linear => "linear",
            Interpolation::Cubic => "cubic",
            Interpolation::Lanczos => "lanczos",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Interpolation::Nearest),
            "linear" | "bilinear" => Ok(Interpolation::Linear),
            "cubic" | "bicubic" => Ok(Interpolation::Cubic),
            "lanczos" => Ok(Interpolation::Lanczos),
            _ => Err(OpsError::InvalidInterpolation(s.to_string())),
        }
    }
}
