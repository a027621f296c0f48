//! Album and image discovery.
//!
//! First step of the build: walk the gallery root and turn the directory
//! layout into a [`Gallery`]. The filesystem is the data source — there is no
//! manifest, database, or ordering file.
//!
//! ## Directory Structure
//!
//! ```text
//! photos/                      # Gallery root
//! ├── 2019-iceland/            # Album (any directory name)
//! │   ├── IMG_0004.jpg         # Source image
//! │   ├── IMG_0004_thumb.jpg   # Generated thumbnail (ignored on rescan)
//! │   ├── IMG_0004.html        # Generated detail page (ignored on rescan)
//! │   └── IMG_0017.jpg
//! ├── trip/
//! │   └── IMG_0001.jpg
//! ├── index.html               # Generated (name contains "html" → skipped)
//! └── style.css                # Generated (name contains "css" → skipped)
//! ```
//!
//! ## Discovery Rules
//!
//! - Albums are the direct subdirectories of the root, in lexicographic
//!   order. Directories whose name contains `css`, `js`, or `html` are
//!   treated as generated artifacts and skipped.
//! - Source images are files named `IMG_` + exactly four ASCII digits +
//!   `.jpg`, case-sensitive. Anything else in an album directory (including
//!   the `_thumb.jpg` copies and `.html` pages from a previous run) is
//!   ignored.
//! - Albums that contain no source images are omitted.
//!
//! Thumbnail and detail-page locations are derived from the source filename
//! at construction and never change afterwards. All paths in the gallery are
//! relative to the root, so downstream rendering can emit browser-relative
//! links without any path rewriting.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("gallery root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// All albums discovered under a gallery root, in lexicographic order.
#[derive(Debug)]
pub struct Gallery {
    pub albums: Vec<Album>,
}

/// One directory of source images.
#[derive(Debug)]
pub struct Album {
    /// Directory name, used as the section heading on the index page.
    pub name: String,
    /// Images in lexicographic filename order. This order is the ordering
    /// guarantee for sibling links and index layout.
    pub images: Vec<ImageRecord>,
}

/// One source photo plus its derived artifact locations.
///
/// All paths are relative to the gallery root. The derived paths are pure
/// functions of the source filename: `IMG_0001.jpg` → `IMG_0001_thumb.jpg`
/// and `IMG_0001.html`, colocated with the source.
///
/// Neighbor images are not stored here — adjacent siblings are resolved from
/// the album's image order at render time, so links can never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Bare source filename, e.g. `IMG_0001.jpg`.
    pub filename: String,
    /// Root-relative source path, e.g. `trip/IMG_0001.jpg`.
    pub source_rel: PathBuf,
    /// Root-relative thumbnail destination, e.g. `trip/IMG_0001_thumb.jpg`.
    pub thumbnail_rel: PathBuf,
    /// Root-relative detail-page destination, e.g. `trip/IMG_0001.html`.
    pub page_rel: PathBuf,
}

impl ImageRecord {
    fn new(album: &str, filename: &str) -> Self {
        let path = Path::new(filename);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.to_string());
        let ext = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "jpg".to_string());

        Self {
            filename: filename.to_string(),
            source_rel: PathBuf::from(album).join(filename),
            thumbnail_rel: PathBuf::from(album).join(format!("{stem}_thumb.{ext}")),
            page_rel: PathBuf::from(album).join(format!("{stem}.html")),
        }
    }

    /// Filename component of the detail page, used for same-directory
    /// sibling links (`IMG_0001.html`).
    pub fn page_filename(&self) -> &str {
        self.page_rel
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.filename)
    }
}

/// Directory names containing any of these are generated artifacts, not
/// albums.
const ARTIFACT_MARKERS: &[&str] = &["css", "js", "html"];

fn is_artifact_name(name: &str) -> bool {
    ARTIFACT_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Check whether a filename names a source image.
///
/// The accepted pattern is `IMG_` + exactly four ASCII digits + `.jpg`,
/// case-sensitive and anchored at both ends:
/// - `IMG_0001.jpg` → accepted
/// - `IMG_12.jpg` → rejected (two digits)
/// - `img_0001.jpg` → rejected (wrong case)
/// - `IMG_0001.jpeg` → rejected (extension is fixed)
/// - `IMG_0001_thumb.jpg` → rejected (generated thumbnail)
pub fn is_source_image(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("IMG_") else {
        return false;
    };
    let Some(digits) = rest.strip_suffix(".jpg") else {
        return false;
    };
    digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Discover albums and images under `root`.
///
/// Fails immediately if `root` does not exist or is not a directory — no
/// partial gallery is ever returned.
pub fn scan(root: &Path) -> Result<Gallery, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut albums = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_artifact_name(&name) {
            log::debug!("skipping artifact directory {name}");
            continue;
        }

        let images = scan_album(entry.path(), &name)?;
        if images.is_empty() {
            log::debug!("skipping empty album {name}");
            continue;
        }

        log::info!("album {name}: {} images", images.len());
        albums.push(Album { name, images });
    }

    Ok(Gallery { albums })
}

fn scan_album(dir: &Path, album: &str) -> Result<Vec<ImageRecord>, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(filename) = entry.file_name().to_str() else {
            continue;
        };
        if is_source_image(filename) {
            images.push(ImageRecord::new(album, filename));
        }
    }

    Ok(images)
}
