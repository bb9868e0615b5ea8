//! Error types for projection operations.

use pano_io::IoError;
use thiserror::Error;

/// Error type for projection operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Face identifier is not one of the six cube faces.
    #[error("invalid face name: {0:?} (expected +x, -x, +y, -y, +z or -z)")]
    InvalidFaceName(String),

    /// Interpolation mode name is not recognized.
    #[error("invalid interpolation: {0:?} (expected nearest, linear, cubic or lanczos)")]
    InvalidInterpolation(String),

    /// Output or source dimensions cannot be rendered.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Decode, resize or encode failure from the codec adapter.
    #[error(transparent)]
    Codec(#[from] IoError),

    /// Raster construction failure.
    #[error(transparent)]
    Core(#[from] pano_core::Error),
}

/// Result type for projection operations.
pub type OpsResult<T> = Result<T, OpsError>;
