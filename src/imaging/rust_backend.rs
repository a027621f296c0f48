//! Thumbnail backend built on the `image` crate.

use super::backend::{BackendError, Dimensions, ImageBackend, ThumbnailParams};
use super::calculations::thumbnail_dimensions;
use image::GenericImageView;
use image::ImageReader;
use image::imageops::FilterType;

/// Pure Rust backend: decode with the `image` crate, resize with Lanczos3,
/// encode back to JPEG. Everything is statically linked into the binary.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError> {
        let source = ImageReader::open(&params.source)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: params.source.clone(),
                message: e.to_string(),
            })?;

        let (width, height) = thumbnail_dimensions(source.dimensions(), params.target_width);
        let resized = source.resize_exact(width, height, FilterType::Lanczos3);

        // save() truncates, so an existing thumbnail is overwritten.
        resized
            .save(&params.output)
            .map_err(|e| BackendError::Encode {
                path: params.output.clone(),
                message: e.to_string(),
            })?;

        Ok(Dimensions { width, height })
    }
}
