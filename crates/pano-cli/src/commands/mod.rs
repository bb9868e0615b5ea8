//! CLI command implementations

pub mod cubemap;
pub mod face;
pub mod fisheye;
pub mod info;

use anyhow::{Context, Result};
use pano_core::Raster;
use pano_ops::{FaceOptions, Interpolation};
use std::f64::consts::PI;
use std::path::Path;

use crate::ProjectionArgs;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Raster> {
    pano_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Builds face options from the shared projection flags.
pub fn face_options(args: &ProjectionArgs) -> Result<FaceOptions> {
    let interpolation: Interpolation = args.interpolation.parse()?;
    let rotation = match args.rotation {
        Some(r) if args.degrees => r.to_radians(),
        Some(r) => r,
        None => PI,
    };

    Ok(FaceOptions {
        rotation,
        interpolation,
        max_width: args.max_width,
    })
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
