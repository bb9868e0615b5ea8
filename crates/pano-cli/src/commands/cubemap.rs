//! Six-face cubemap command.

use crate::CubemapArgs;
use anyhow::{Context, Result, bail};
use pano_io::{DefaultCodec, Format};
use pano_ops::render_cubemap_files_with;

pub fn run(args: CubemapArgs) -> Result<()> {
    let format = Format::from_name(&args.format);
    if format == Format::Unknown {
        bail!("Unsupported face format: {} (expected jpg, png or webp)", args.format);
    }

    let options = super::face_options(&args.projection)?;
    let source = super::load_image(&args.input)?;
    let codec = DefaultCodec::new().with_jpeg_quality(args.quality);

    let paths = render_cubemap_files_with(&codec, &source, &args.output, &options, format)
        .with_context(|| format!("Failed to write cubemap to {}", args.output.display()))?;

    for path in &paths {
        println!("{}", path.display());
    }
    Ok(())
}
