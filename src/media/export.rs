// SPDX-License-Identifier: MPL-2.0
//! Export of the composed booth image to PNG.
//!
//! The export pipeline is a single future with a fixed order: draw the
//! background, draw the photo (when there is one), encode, write. The heavy
//! part runs on the blocking thread pool so the UI loop stays responsive.

use crate::config::{BACKGROUND_FILENAME, COMPOSITE_FILENAME};
use crate::domain::booth::{FrameGeometry, Offset, Zoom};
use crate::error::{Error, Result};
use crate::media::compositor::{self, Scene};
use crate::media::image::{pixmap_to_rgba, ImageData};
use image_rs::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

/// What the exported file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Background with the framed photo.
    Composite,
    /// Background alone (no photo loaded).
    BackgroundOnly,
}

impl ExportKind {
    /// Returns the fixed file name for this kind of export.
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            ExportKind::Composite => COMPOSITE_FILENAME,
            ExportKind::BackgroundOnly => BACKGROUND_FILENAME,
        }
    }
}

/// A rendered export, as straight RGBA pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub kind: ExportKind,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ExportedImage {
    /// Converts a premultiplied pixmap into an exportable image.
    #[must_use]
    pub fn from_pixmap(kind: ExportKind, pixmap: &Pixmap) -> Self {
        Self {
            kind,
            width: pixmap.width(),
            height: pixmap.height(),
            rgba: pixmap_to_rgba(pixmap),
        }
    }

    fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or_else(|| Error::Encode("Failed to create image buffer from export data".into()))
    }

    /// Encodes the image as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the encoder rejects the buffer.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| Error::Encode(format!("Failed to encode PNG: {e}")))?;
        Ok(bytes)
    }

    /// Writes the PNG into `dir` under the kind's fixed file name, replacing
    /// any previous export of the same kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be encoded or written.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.kind.filename());
        fs::write(&path, self.encode_png()?)?;
        Ok(path)
    }
}

/// Snapshot of the editor state taken when the user asks for a download.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub background: ImageData,
    pub photo: Option<ImageData>,
    pub zoom: Zoom,
    /// Offset in preview pixels.
    pub offset: Offset,
    /// Width the preview was rendered at when the offset was recorded.
    pub preview_width: f32,
    pub output_dir: PathBuf,
}

impl ExportJob {
    fn scene(&self) -> Scene<'_> {
        Scene {
            background: &self.background,
            photo: self.photo.as_ref(),
            geometry: FrameGeometry::BOOTH,
            zoom: self.zoom,
            offset: self.offset,
        }
    }

    /// Renders and writes the export synchronously.
    ///
    /// Returns `Ok(None)` when there was no drawing surface; nothing is
    /// written in that case.
    ///
    /// # Errors
    ///
    /// Propagates encoding and file system failures.
    pub fn run(&self) -> Result<Option<PathBuf>> {
        let Some(image) = compositor::render_export(&self.scene(), self.preview_width) else {
            log::debug!("Export skipped: no drawing surface");
            return Ok(None);
        };
        let path = image.save_to_dir(&self.output_dir)?;
        log::info!("Exported {} to {}", image.kind.filename(), path.display());
        Ok(Some(path))
    }
}

/// Runs an export job on the blocking thread pool.
///
/// # Errors
///
/// Propagates [`ExportJob::run`] failures; a panicked worker is reported as
/// [`Error::Io`].
pub async fn export(job: ExportJob) -> Result<Option<PathBuf>> {
    tokio::task::spawn_blocking(move || job.run())
        .await
        .map_err(|e| Error::Io(format!("Export task failed: {e}")))?
}
