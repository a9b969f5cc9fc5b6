// SPDX-License-Identifier: MPL-2.0
//! Media handling: decoding, the built-in background, compositing and export.

pub mod assets;
pub mod compositor;
pub mod export;
pub mod image;
pub mod loader;

pub use export::{ExportJob, ExportKind, ExportedImage};
pub use image::{load_image, ImageData};
pub use loader::{LoadTicket, LoadTracker};

/// File extension lists shared by the photo picker and the loaders.
pub mod extensions {
    /// Image file extensions accepted by the photo picker.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}
