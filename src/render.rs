//! HTML rendering for detail pages and index cards.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic escaping — filenames and
//! EXIF text are interpolated as data, never spliced as markup.
//!
//! ## Pages
//!
//! - **Detail page**: one per image, written beside the source. Title is the
//!   source filename, the stylesheet lives one directory up, and a nav table
//!   links to the previous/next image in the album plus the index page.
//! - **Index card**: the per-image fragment on the index page — thumbnail
//!   link, filename, and the three exposure values.
//!
//! Sibling navigation is resolved by the caller from the album's image
//! order; this module only sees the already-chosen neighbors.

use crate::metadata::ShotInfo;
use crate::scan::ImageRecord;
use maud::{DOCTYPE, Markup, html};

/// Index page `<title>`.
pub const INDEX_TITLE: &str = "Photo Gallery";

/// Index cards per table row.
pub const CARDS_PER_ROW: usize = 6;

/// Unit wording for an exposure time.
///
/// Historical rule, kept for output fidelity: a value containing `/` is
/// worded "second", anything else "seconds". So `1/200` renders as
/// "1/200 second" and `2` as "2 seconds".
pub fn exposure_suffix(exposure_time: &str) -> &'static str {
    if exposure_time.contains('/') {
        "second"
    } else {
        "seconds"
    }
}

/// The PREV / Home / NEXT table on a detail page.
///
/// `prev` and `next` are sibling page filenames; at the ends of the album
/// the label renders as plain text with no anchor.
fn nav_menu(prev: Option<&str>, next: Option<&str>) -> Markup {
    html! {
        table.nav width="1024" {
            tr {
                td align="center" {
                    @if let Some(href) = prev {
                        a href=(href) { "PREV" }
                    } @else {
                        "PREV"
                    }
                }
                td align="center" {
                    a href="../index.html" { "Home" }
                }
                td align="center" {
                    @if let Some(href) = next {
                        a href=(href) { "NEXT" }
                    } @else {
                        "NEXT"
                    }
                }
            }
        }
    }
}

/// Render the detail page for one image.
///
/// The embedded `img src` is the bare filename — the page sits in the same
/// directory as the photo it shows.
pub fn detail_page(
    image: &ImageRecord,
    prev: Option<&ImageRecord>,
    next: Option<&ImageRecord>,
) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (image.filename) }
                link rel="stylesheet" href="../style.css";
            }
            body {
                (nav_menu(
                    prev.map(|p| p.page_filename()),
                    next.map(|n| n.page_filename()),
                ))
                table {
                    tr {
                        td {
                            img src=(image.filename);
                        }
                    }
                }
            }
        }
    }
}

/// Render one index card: thumbnail anchor, filename, exposure values.
///
/// Hrefs are root-relative, matching the index page's location at the
/// gallery root.
pub fn index_card(image: &ImageRecord, shot: &ShotInfo) -> Markup {
    let page_href = image.page_rel.to_string_lossy().into_owned();
    let thumb_src = image.thumbnail_rel.to_string_lossy().into_owned();
    html! {
        a href=(page_href) {
            img src=(thumb_src);
        }
        br;
        (image.filename)
        br;
        (shot.exposure_time) " " (exposure_suffix(&shot.exposure_time))
        br;
        "ISO " (shot.iso)
        br;
        (shot.focal_length) "mm"
    }
}

/// Render one album section of the index page: heading, rule, and the card
/// table at [`CARDS_PER_ROW`] cards per row.
pub fn album_section(name: &str, cards: &[Markup]) -> Markup {
    html! {
        h2 { (name) }
        hr;
        table {
            @for row in cards.chunks(CARDS_PER_ROW) {
                tr {
                    @for card in row {
                        td.bottom_description { (card) }
                    }
                }
            }
        }
    }
}

/// Render the full index page from its album sections.
pub fn index_page(sections: &[Markup]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (INDEX_TITLE) }
                link rel="stylesheet" href="style.css";
            }
            body {
                @for section in sections {
                    (section)
                }
            }
        }
    }
}
