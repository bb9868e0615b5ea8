//! Image info command.
//!
//! Prints resolution, format and the cube face size a panorama would produce.

use crate::InfoArgs;
use anyhow::{Context, Result};
use pano_core::Raster;
use pano_io::Format;
use pano_ops::cubemap::face_size;
use std::fs;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = super::load_image(path)?;

        print_text(path, &image, file_size, format, verbose);

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

fn print_text(path: &Path, image: &Raster, file_size: u64, format: Format, verbose: u8) {
    let (width, height) = image.dimensions();
    println!("{}", path.display());
    println!("  Resolution: {}x{}", width, height);
    println!("  Format:     {}", format);
    println!("  File size:  {}", super::format_size(file_size));
    println!("  Face size:  {}", face_size(width, None));

    if width != height * 2 {
        println!("  Warning:    not 2:1, projection will stretch");
    }

    if verbose > 0 {
        println!("  MIME type:  {}", format.mime_type());
        println!("  Pixels:     {}", image.pixel_count());
        println!("  Alpha:      {}", if format.supports_alpha() { "stored" } else { "none" });
    }
}
