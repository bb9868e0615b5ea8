//! # pano-ops
//!
//! Panorama projection for equirectangular (360°x180°) sources.
//!
//! # Modules
//!
//! - [`kernel`] - Cubic and Lanczos kernels, [`Interpolation`] modes
//! - [`sample`] - Edge-clamped source resampling
//! - [`face`] - Cube face identifiers and orientation
//! - [`cubemap`] - Cube face / cubemap projection
//! - [`fisheye`] - Circular fisheye projection
//! - [`render`] - Projection plus encoding (JPEG faces, WebP fisheye)
//!
//! # Example
//!
//! ```rust,ignore
//! use pano_ops::{render_cubemap, FaceOptions, Interpolation};
//!
//! let pano = pano_io::read("pano.jpg")?;
//! let options = FaceOptions::default().with_interpolation(Interpolation::Cubic);
//! let cubemap = render_cubemap(&pano, &options)?;
//! for (face, raster) in cubemap.iter() {
//!     pano_io::write(format!("{}.jpg", face.alias()), raster)?;
//! }
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - render rows and faces on the rayon pool (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod cubemap;
pub mod face;
pub mod fisheye;
pub mod kernel;
pub mod render;
pub mod sample;

pub use cubemap::{Cubemap, FaceOptions, render_cubemap, render_face};
pub use error::{OpsError, OpsResult};
pub use face::Face;
pub use fisheye::{render_fisheye, render_fisheye_with};
pub use kernel::Interpolation;
pub use render::{
    render_cubemap_files, render_cubemap_files_with, render_face_encoded, render_face_jpeg,
    render_fisheye_webp, render_fisheye_webp_with,
};
pub use sample::Sampler;
