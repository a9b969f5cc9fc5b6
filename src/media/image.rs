// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).
//!
//! Decoded images are kept as premultiplied `tiny_skia` pixmaps because both
//! the preview and the export are drawn with `tiny_skia`.

use crate::error::{Error, Result};
use image_rs::metadata::Orientation;
use image_rs::{DynamicImage, ImageDecoder, ImageReader};
use resvg::usvg;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{ColorU8, Pixmap};

/// A decoded image together with its natural pixel dimensions.
///
/// The pixels and the dimensions are created together and never change
/// independently; replacing a photo means replacing the whole value.
#[derive(Clone)]
pub struct ImageData {
    width: u32,
    height: u32,
    /// Stored in Arc so clones handed to background tasks stay cheap.
    pixmap: Arc<Pixmap>,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Creates a new `ImageData` from straight (non-premultiplied) RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the dimensions are zero or do not match
    /// the pixel buffer length.
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::Decode(format!(
                "expected {expected} RGBA bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Decode("Image has empty dimensions".into()))?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(pixels.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }

        Ok(Self::from_pixmap(pixmap))
    }

    /// Wraps an already premultiplied pixmap.
    #[must_use]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            pixmap: Arc::new(pixmap),
        }
    }

    /// Natural `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the premultiplied pixmap for drawing.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Returns the pixels as straight RGBA bytes.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        pixmap_to_rgba(&self.pixmap)
    }
}

/// Converts a premultiplied pixmap into straight RGBA bytes.
#[must_use]
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        bytes.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    bytes
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path)?;

    if extension.eq_ignore_ascii_case("svg") {
        decode_svg(&bytes)
    } else {
        decode_raster(&bytes)
    }
}

/// Decodes raster bytes (PNG, JPEG, WebP, ...) into upright pixels.
///
/// The EXIF orientation tag is applied, so a rotated phone photo comes out
/// the way it is meant to be viewed and its dimensions are the upright ones.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown or the data is corrupt.
pub fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation().unwrap_or_else(|err| {
        log::debug!("Ignoring unreadable orientation: {err}");
        Orientation::NoTransforms
    });

    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    let rgba_img = img.to_rgba8();
    ImageData::from_rgba(rgba_img.width(), rgba_img.height(), rgba_img.as_raw())
}

/// Rasterizes SVG bytes at their intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Svg`] if parsing fails or the document has no area.
pub fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(pixmap_size.width(), pixmap_size.height())
        .ok_or_else(|| Error::Svg("SVG has empty dimensions".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_pixmap(pixmap))
}
