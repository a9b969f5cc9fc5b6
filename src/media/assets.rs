// SPDX-License-Identifier: MPL-2.0
//! Built-in booth artwork embedded in the binary.

use crate::error::{Error, Result};
use crate::media::image::{decode_raster, decode_svg, load_image, ImageData};
use rust_embed::RustEmbed;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/background/"]
struct BackgroundAsset;

/// Name of the embedded default background.
pub const DEFAULT_BACKGROUND: &str = "booth.svg";

/// Decodes an embedded background by file name.
///
/// # Errors
///
/// Returns [`Error::Io`] if no asset has that name, or a decode error if the
/// asset is malformed.
pub fn embedded_background(name: &str) -> Result<ImageData> {
    let asset = BackgroundAsset::get(name)
        .ok_or_else(|| Error::Io(format!("embedded background not found: {name}")))?;

    if Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        decode_svg(asset.data.as_ref())
    } else {
        decode_raster(asset.data.as_ref())
    }
}

/// Loads the background: the configured file when given, the embedded
/// artwork otherwise.
///
/// # Errors
///
/// Propagates read and decode failures of the chosen source.
pub fn load_background(override_path: Option<&Path>) -> Result<ImageData> {
    match override_path {
        Some(path) => load_image(path),
        None => embedded_background(DEFAULT_BACKGROUND),
    }
}
