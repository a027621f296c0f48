//! Site generation.
//!
//! Drives the whole build: scan the gallery root, then one sequential pass
//! over every album and image — extract metadata, write the thumbnail, write
//! the detail page — and finally emit the aggregate `index.html` and the
//! shared `style.css` at the root.
//!
//! ## Output Structure
//!
//! ```text
//! photos/
//! ├── index.html               # Aggregate index, one section per album
//! ├── style.css                # Fixed stylesheet
//! └── trip/
//!     ├── IMG_0001.jpg         # Source (untouched)
//!     ├── IMG_0001_thumb.jpg   # 256px-wide thumbnail
//!     └── IMG_0001.html        # Detail page
//! ```
//!
//! ## Failure Model
//!
//! Abort on first error. Any metadata, decode, or write failure stops the
//! run; artifacts already written stay on disk. There is no partial-success
//! reporting and no cleanup — rerunning the build regenerates everything.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::imaging::{BackendError, ImageBackend, ThumbnailParams};
use crate::metadata::{self, MetadataError};
use crate::render;
use crate::scan::{self, Gallery, ScanError};

/// Fixed thumbnail width; height follows each source's aspect ratio.
pub const THUMBNAIL_WIDTH: u32 = 256;

/// The shared stylesheet, embedded at compile time.
const CSS: &str = include_str!("../static/style.css");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("metadata extraction failed: {0}")]
    Metadata(#[from] MetadataError),
    #[error("thumbnail generation failed: {0}")]
    Backend(#[from] BackendError),
}

/// Counts reported after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub albums: usize,
    pub images: usize,
}

/// Run the full pipeline against a gallery root.
pub fn build(root: &Path, backend: &impl ImageBackend) -> Result<BuildSummary, GenerateError> {
    let gallery = scan::scan(root)?;
    build_gallery(root, &gallery, backend)
}

/// Generate every page and thumbnail for an already-scanned gallery.
pub fn build_gallery(
    root: &Path,
    gallery: &Gallery,
    backend: &impl ImageBackend,
) -> Result<BuildSummary, GenerateError> {
    let mut sections = Vec::with_capacity(gallery.albums.len());
    let mut images = 0;

    for album in &gallery.albums {
        log::info!("rendering album {}", album.name);
        let mut cards = Vec::with_capacity(album.images.len());

        for (idx, image) in album.images.iter().enumerate() {
            let shot = metadata::read_shot_info(&root.join(&image.source_rel))?;

            let dims = backend.thumbnail(&ThumbnailParams {
                source: root.join(&image.source_rel),
                output: root.join(&image.thumbnail_rel),
                target_width: THUMBNAIL_WIDTH,
            })?;
            log::debug!(
                "{}: thumbnail {}x{}",
                image.filename,
                dims.width,
                dims.height
            );

            let prev = if idx > 0 {
                Some(&album.images[idx - 1])
            } else {
                None
            };
            let next = album.images.get(idx + 1);

            let page = render::detail_page(image, prev, next);
            fs::write(root.join(&image.page_rel), page.into_string())?;

            cards.push(render::index_card(image, &shot));
            images += 1;
        }

        sections.push(render::album_section(&album.name, &cards));
    }

    fs::write(
        root.join("index.html"),
        render::index_page(&sections).into_string(),
    )?;
    fs::write(root.join("style.css"), CSS)?;
    log::info!("wrote index.html and style.css");

    Ok(BuildSummary {
        albums: gallery.albums.len(),
        images,
    })
}
