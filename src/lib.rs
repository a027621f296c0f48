//! # Contact Sheet
//!
//! A static HTML gallery generator for directories of photo albums.
//! Your filesystem is the data source: each subdirectory of the gallery
//! root is an album, and every `IMG_####.jpg` inside it is a photo.
//!
//! # Pipeline
//!
//! One sequential pass per run, no state carried between runs:
//!
//! ```text
//! 1. Scan      root/        →  Gallery        (albums + images, sorted)
//! 2. Per image              →  EXIF metadata, 256px thumbnail, detail page
//! 3. Emit      index.html + style.css at the root
//! ```
//!
//! Every run regenerates everything. The generated artifacts live beside
//! their sources (`IMG_0001_thumb.jpg`, `IMG_0001.html`) and are filtered
//! back out on the next scan, so a gallery directory can be rebuilt in
//! place indefinitely.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the gallery root, derives artifact paths, produces the [`scan::Gallery`] |
//! | [`metadata`] | Extracts the required EXIF tags (exposure time, focal length, ISO) |
//! | [`imaging`] | Thumbnail backend: [`imaging::ImageBackend`] trait + pure-Rust implementation |
//! | [`render`] | Maud templates for detail pages, index cards, and the index page |
//! | [`generate`] | Orchestrates the pass and writes the site |
//!
//! # Design Decisions
//!
//! ## Maud Over String Concatenation
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, and every
//! interpolated value — filenames, EXIF text, album names — is escaped
//! automatically, so odd characters on disk can never break the output.
//!
//! ## Structural Paths, Not String Rewrites
//!
//! All gallery paths are stored relative to the root from the moment they
//! are discovered. Pages link to each other by joining those relative
//! paths, never by find-and-replace on assembled markup.
//!
//! ## Neighbors by Index, Not by Reference
//!
//! Previous/next navigation between photos is derived from each album's
//! sorted image order at render time. Records hold no sibling pointers, so
//! there is no cross-reference state to keep consistent if ordering logic
//! changes.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) for
//! decode, resize, and encode. No ImageMagick, no system dependencies; the
//! binary is fully self-contained.

pub mod generate;
pub mod imaging;
pub mod metadata;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
