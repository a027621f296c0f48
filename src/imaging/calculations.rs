//! Pure calculation functions for thumbnail dimensions.
//!
//! No I/O and no images here, so every rule is testable in isolation.

/// Calculate thumbnail dimensions: width fixed at `target_width`, height
/// scaled to preserve the source aspect ratio.
///
/// Height is rounded to the nearest pixel and clamped to at least 1 so a
/// pathologically wide source still produces an encodable image.
///
/// # Examples
/// ```
/// # use contact_sheet::imaging::thumbnail_dimensions;
/// // 4:3 landscape → 256x192
/// assert_eq!(thumbnail_dimensions((1024, 768), 256), (256, 192));
///
/// // 2:3 portrait → 256x384
/// assert_eq!(thumbnail_dimensions((2000, 3000), 256), (256, 384));
/// ```
pub fn thumbnail_dimensions(source: (u32, u32), target_width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        // Degenerate input a decoder should never produce.
        return (target_width, 1);
    }
    let height = (src_h as f64 * target_width as f64 / src_w as f64).round() as u32;
    (target_width, height.max(1))
}
