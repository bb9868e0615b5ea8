//! pano - equirectangular panorama projection CLI
//!
//! Renders cube faces, full cubemaps and fisheye discs from a single
//! 360°x180° image.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "pano")]
#[command(author, version, about = "Equirectangular panorama projection")]
#[command(long_about = "
Projects a 360x180 equirectangular panorama onto cube faces or a fisheye disc.

Examples:
  pano info pano.jpg                         # Show image info
  pano face pano.jpg -f +z -o front.jpg      # One cube face as JPEG
  pano face pano.jpg -f px -i lanczos -o px.jpg --max-width 1024
  pano cubemap pano.jpg -o faces/ -i cubic   # px.jpg, nx.jpg, ... in faces/
  pano cubemap pano.jpg -o faces/ --format png -r 90 --degrees
  pano fisheye pano.jpg -s 1024 -o disc.webp
  pano fisheye pano.jpg -s 512 -o disc.webp --resize-filter bilinear
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Render a single cube face
    #[command(visible_alias = "f")]
    Face(FaceArgs),

    /// Render all six cube faces into a directory
    #[command(visible_alias = "c")]
    Cubemap(CubemapArgs),

    /// Render a circular fisheye as WebP
    Fisheye(FisheyeArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Options shared by the cube face commands.
#[derive(Args)]
struct ProjectionArgs {
    /// Interpolation: nearest, linear, cubic, lanczos
    #[arg(short, long, default_value = "nearest")]
    interpolation: String,

    /// Longitude rotation (radians unless --degrees; default: half a turn)
    #[arg(short, long, allow_negative_numbers = true)]
    rotation: Option<f64>,

    /// Interpret --rotation in degrees
    #[arg(long)]
    degrees: bool,

    /// Upper bound on the face edge length
    #[arg(long)]
    max_width: Option<u32>,
}

#[derive(Args)]
struct FaceArgs {
    /// Input equirectangular image
    input: PathBuf,

    /// Output image (format from extension, JPEG if unknown)
    #[arg(short, long)]
    output: PathBuf,

    /// Face: +x, -x, +y, -y, +z, -z (or px, nx, py, ny, pz, nz)
    #[arg(short, long, allow_hyphen_values = true)]
    face: String,

    #[command(flatten)]
    projection: ProjectionArgs,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value = "90")]
    quality: u8,
}

#[derive(Args)]
struct CubemapArgs {
    /// Input equirectangular image
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    projection: ProjectionArgs,

    /// Face file format: jpg, png, webp
    #[arg(long, default_value = "jpg")]
    format: String,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value = "90")]
    quality: u8,
}

#[derive(Args)]
struct FisheyeArgs {
    /// Input equirectangular image
    input: PathBuf,

    /// Output WebP file
    #[arg(short, long)]
    output: PathBuf,

    /// Output edge length in pixels
    #[arg(short, long)]
    size: u32,

    /// Filter for the pre-resize: nearest, bilinear, bicubic, lanczos
    #[arg(long, default_value = "lanczos")]
    resize_filter: String,
}

/// Default filter directive for a `-v` count.
fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Face(args) => commands::face::run(args),
        Commands::Cubemap(args) => commands::cubemap::run(args),
        Commands::Fisheye(args) => commands::fisheye::run(args),
    }
}
