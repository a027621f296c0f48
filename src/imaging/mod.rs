//! Thumbnail generation — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG)** | `image` crate |
//! | **Resize** | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | **Encode (JPEG)** | `image` crate, format from the output extension |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable without I/O)
//! - **Backend**: [`ImageBackend`] trait + parameter types
//! - **RustBackend**: the `image`-crate implementation

pub mod backend;
mod calculations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ThumbnailParams};
pub use calculations::thumbnail_dimensions;
pub use rust_backend::RustBackend;
