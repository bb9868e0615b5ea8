//! Single cube face command.

use crate::FaceArgs;
use anyhow::{Context, Result};
use pano_io::{DefaultCodec, Format};
use pano_ops::{Face, render_face_encoded};
use tracing::info;

pub fn run(args: FaceArgs) -> Result<()> {
    let face: Face = args.face.parse()?;
    let options = super::face_options(&args.projection)?;
    let source = super::load_image(&args.input)?;

    let format = match Format::from_extension(&args.output) {
        Format::Unknown => Format::Jpeg,
        known => known,
    };
    let codec = DefaultCodec::new().with_jpeg_quality(args.quality);

    let bytes = render_face_encoded(&codec, &source, face, &options, format)
        .with_context(|| format!("Failed to render face {}", face))?;
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    info!(
        %face,
        output = %args.output.display(),
        bytes = bytes.len(),
        "Wrote cube face"
    );
    Ok(())
}
