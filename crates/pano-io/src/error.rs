//! Error types for codec operations.
//!
//! Every decode, resize and encode failure surfaces as an [`IoError`];
//! projection code propagates it unchanged.

use std::io;
use thiserror::Error;

/// Codec operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported or unrecognized format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Invalid raster produced or requested.
    #[error(transparent)]
    Core(#[from] pano_core::Error),
}

/// Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;
