//! # pano-core
//!
//! Core types shared by every pano-rs crate.
//!
//! - [`Raster`] - Interleaved 8-bit RGBA pixel buffer with size invariants
//! - [`Error`] / [`Result`] - Construction and validation errors
//!
//! ## Crate Structure
//!
//! ```text
//! pano-core (this crate)
//!    ^
//!    |
//!    +-- pano-io  (decode / resize / encode)
//!    +-- pano-ops (kernels, resampler, cubemap and fisheye projection)
//!    +-- pano-cli (`pano` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, CHANNELS};
