//! Fisheye command.

use crate::FisheyeArgs;
use anyhow::{Context, Result, anyhow};
use pano_io::{DefaultCodec, Filter};
use pano_ops::render_fisheye_webp_with;

pub fn run(args: FisheyeArgs) -> Result<()> {
    let filter = resize_filter(&args.resize_filter)?;
    let codec = DefaultCodec::new().with_resize_filter(filter);
    let source = super::load_image(&args.input)?;

    render_fisheye_webp_with(&codec, &source, args.size, Some(&args.output))
        .with_context(|| format!("Failed to render fisheye to {}", args.output.display()))?;
    Ok(())
}

/// Parses the `--resize-filter` value.
fn resize_filter(name: &str) -> Result<Filter> {
    Filter::from_name(name).ok_or_else(|| {
        anyhow!("Unknown resize filter '{name}' (expected nearest, bilinear, bicubic or lanczos)")
    })
}
