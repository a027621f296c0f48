//! Test support: synthetic JPEG fixtures.
//!
//! Tests need real decodable JPEGs that carry the three required EXIF tags,
//! without shipping binary fixtures in the repository. The helpers here
//! encode a small solid-color JPEG with the `image` crate and splice in a
//! hand-built EXIF APP1 segment (TIFF header → IFD0 → Exif sub-IFD) right
//! after the SOI marker.
//!
//! The TIFF block is little-endian and laid out at fixed offsets:
//!
//! ```text
//! 0   "II" 42, IFD0 offset = 8
//! 8   IFD0: 1 entry — ExifIFDPointer (0x8769) → 26
//! 26  Exif IFD: ExposureTime (rational @68), RecommendedExposureIndex
//!     (inline long), FocalLength (rational @76)
//! 68  exposure numerator/denominator
//! 76  focal numerator/denominator
//! ```

use std::io::Cursor;
use std::path::Path;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_EXPOSURE_TIME: u16 = 0x829a;
const TAG_RECOMMENDED_EXPOSURE_INDEX: u16 = 0x8832;
const TAG_FOCAL_LENGTH: u16 = 0x920a;

const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// One 12-byte IFD entry. `value` is either the inline value or the offset
/// of out-of-line data, depending on the field type.
fn push_entry(buf: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, value: u32) {
    push_u16(buf, tag);
    push_u16(buf, field_type);
    push_u32(buf, count);
    push_u32(buf, value);
}

fn tiff_header(buf: &mut Vec<u8>) {
    buf.extend_from_slice(b"II");
    push_u16(buf, 42);
    push_u32(buf, 8);
}

/// Raw TIFF Exif block carrying the three tags the pipeline requires.
pub fn exif_blob(exposure: (u32, u32), focal: (u32, u32), iso: u32) -> Vec<u8> {
    let mut tiff = Vec::with_capacity(84);
    tiff_header(&mut tiff);

    // IFD0: single entry pointing at the Exif sub-IFD at offset 26.
    push_u16(&mut tiff, 1);
    push_entry(&mut tiff, TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, 26);
    push_u32(&mut tiff, 0);

    // Exif sub-IFD, entries in ascending tag order.
    push_u16(&mut tiff, 3);
    push_entry(&mut tiff, TAG_EXPOSURE_TIME, TYPE_RATIONAL, 1, 68);
    push_entry(&mut tiff, TAG_RECOMMENDED_EXPOSURE_INDEX, TYPE_LONG, 1, iso);
    push_entry(&mut tiff, TAG_FOCAL_LENGTH, TYPE_RATIONAL, 1, 76);
    push_u32(&mut tiff, 0);

    // Out-of-line rational data.
    push_u32(&mut tiff, exposure.0);
    push_u32(&mut tiff, exposure.1);
    push_u32(&mut tiff, focal.0);
    push_u32(&mut tiff, focal.1);

    tiff
}

/// A valid TIFF Exif block whose Exif IFD has no entries at all.
pub fn empty_exif_blob() -> Vec<u8> {
    let mut tiff = Vec::with_capacity(32);
    tiff_header(&mut tiff);

    push_u16(&mut tiff, 1);
    push_entry(&mut tiff, TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, 26);
    push_u32(&mut tiff, 0);

    // Empty Exif sub-IFD.
    push_u16(&mut tiff, 0);
    push_u32(&mut tiff, 0);

    tiff
}

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(width, height, image::Rgb([120, 140, 160]));
    let mut jpeg = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
        .unwrap();
    jpeg
}

/// Write a decodable JPEG with no EXIF segment.
pub fn write_plain_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(width, height)).unwrap();
}

/// Write a decodable JPEG carrying the three required EXIF tags.
pub fn write_jpeg_with_exif(
    path: &Path,
    width: u32,
    height: u32,
    exposure: (u32, u32),
    focal: (u32, u32),
    iso: u32,
) {
    let jpeg = encode_jpeg(width, height);
    let tiff = exif_blob(exposure, focal, iso);

    // APP1 payload: length (2) + "Exif\0\0" (6) + TIFF block.
    let mut app1 = Vec::with_capacity(tiff.len() + 10);
    app1.extend_from_slice(&[0xFF, 0xE1]);
    app1.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&tiff);

    // Splice directly after the SOI marker.
    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, out).unwrap();
}
