//! EXIF metadata extraction.
//!
//! Every image carries three exposure tags that the index page displays:
//! exposure time, focal length, and the recommended exposure index (ISO).
//! All three are **required** — a photo without them aborts the build rather
//! than rendering a card with holes in it.
//!
//! Values are kept as opaque text in the form the tags are written in:
//! rationals are reduced and printed as `1/200` or, when the reduced
//! denominator is 1, as a bare number (`2`, `50`). The index page's
//! "second(s)" wording keys on that textual form, so the formatting here is
//! part of the output contract, not just cosmetics.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use exif::{Exif, In, Rational, Tag, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read EXIF from {path}: {source}")]
    Exif { path: PathBuf, source: exif::Error },
    #[error("missing EXIF tag {tag} in {path}")]
    MissingTag { tag: Tag, path: PathBuf },
    #[error("EXIF tag {tag} has an unexpected value type in {path}")]
    UnexpectedType { tag: Tag, path: PathBuf },
}

/// Exposure settings extracted from one photo, as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotInfo {
    /// Exposure time, e.g. `1/200` or `2`.
    pub exposure_time: String,
    /// Focal length in millimetres, without the unit, e.g. `50`.
    pub focal_length: String,
    /// Recommended exposure index, e.g. `400`.
    pub iso: String,
}

/// Read the required exposure tags from a photo on disk.
pub fn read_shot_info(path: &Path) -> Result<ShotInfo, MetadataError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|source| MetadataError::Exif {
            path: path.to_path_buf(),
            source,
        })?;
    let info = shot_info_from_exif(&exif, path)?;
    log::debug!(
        "{}: {}s, {}mm, ISO {}",
        path.display(),
        info.exposure_time,
        info.focal_length,
        info.iso
    );
    Ok(info)
}

/// Extract the required tags from an already-parsed EXIF block.
pub fn shot_info_from_exif(exif: &Exif, path: &Path) -> Result<ShotInfo, MetadataError> {
    Ok(ShotInfo {
        exposure_time: rational_field(exif, Tag::ExposureTime, path)?,
        focal_length: rational_field(exif, Tag::FocalLength, path)?,
        iso: uint_field(exif, Tag::RecommendedExposureIndex, path)?,
    })
}

fn require<'a>(exif: &'a Exif, tag: Tag, path: &Path) -> Result<&'a exif::Field, MetadataError> {
    exif.get_field(tag, In::PRIMARY)
        .ok_or_else(|| MetadataError::MissingTag {
            tag,
            path: path.to_path_buf(),
        })
}

fn rational_field(exif: &Exif, tag: Tag, path: &Path) -> Result<String, MetadataError> {
    let field = require(exif, tag, path)?;
    match &field.value {
        Value::Rational(values) if !values.is_empty() => Ok(rational_text(values[0])),
        _ => Err(MetadataError::UnexpectedType {
            tag,
            path: path.to_path_buf(),
        }),
    }
}

fn uint_field(exif: &Exif, tag: Tag, path: &Path) -> Result<String, MetadataError> {
    let field = require(exif, tag, path)?;
    field
        .value
        .get_uint(0)
        .map(|v| v.to_string())
        .ok_or_else(|| MetadataError::UnexpectedType {
            tag,
            path: path.to_path_buf(),
        })
}

/// Format a rational in its reduced native form: `1/200`, or `2` when the
/// reduced denominator is 1.
fn rational_text(value: Rational) -> String {
    if value.denom == 0 {
        // Malformed tag; show it raw rather than dividing by zero.
        return format!("{}/{}", value.num, value.denom);
    }
    let divisor = gcd(value.num, value.denom);
    let num = value.num / divisor;
    let denom = value.denom / divisor;
    if denom == 1 {
        num.to_string()
    } else {
        format!("{num}/{denom}")
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
