//! Thumbnail backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the build pipeline (which
//! decides what thumbnails to write) and the pixel work (decode, resize,
//! encode). The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use a recording
//! mock so orchestration logic can be exercised without encoding anything.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("cannot encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Dimensions of a written thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Full specification of one thumbnail operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Output width in pixels; height follows the source aspect ratio.
    pub target_width: u32,
}

/// Trait for thumbnail backends.
pub trait ImageBackend {
    /// Write a resized copy of `params.source` to `params.output`,
    /// overwriting any existing file, and return the written dimensions.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError>;
}
