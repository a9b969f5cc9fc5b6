// SPDX-License-Identifier: MPL-2.0
//! Frame geometry and the preview-to-output coordinate remap.
//!
//! The interactive preview records the photo offset in whatever pixel size the
//! preview happens to be laid out at, while the export canvas has a fixed size.
//! Everything that converts between those two spaces lives here as pure
//! functions so it can be tested without a renderer.

use super::newtypes::{Offset, Zoom};

/// Frame diameter as a fraction of the canvas width.
pub const FRAME_SIZE_FRACTION: f32 = 0.30;

/// Horizontal frame center as a fraction of the canvas width.
pub const FRAME_CENTER_X_FRACTION: f32 = 0.50;

/// Vertical frame center as a fraction of the canvas height.
pub const FRAME_CENTER_Y_FRACTION: f32 = 0.76;

/// Circular frame expressed as fractions of a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// Diameter as a fraction of the canvas width.
    pub size: f32,
    /// Center x as a fraction of the canvas width.
    pub center_x: f32,
    /// Center y as a fraction of the canvas height.
    pub center_y: f32,
}

impl FrameGeometry {
    /// The booth frame: 30% wide, centered horizontally, 76% down.
    pub const BOOTH: Self = Self {
        size: FRAME_SIZE_FRACTION,
        center_x: FRAME_CENTER_X_FRACTION,
        center_y: FRAME_CENTER_Y_FRACTION,
    };

    /// Resolves the frame into a circle on a `width × height` canvas.
    #[must_use]
    pub fn circle(&self, width: f32, height: f32) -> Circle {
        Circle {
            center_x: width * self.center_x,
            center_y: height * self.center_y,
            radius: self.diameter(width) / 2.0,
        }
    }

    /// Frame diameter in pixels for a canvas of the given width.
    #[must_use]
    pub fn diameter(&self, width: f32) -> f32 {
        width * self.size
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::BOOTH
    }
}

/// A circle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Where the photo lands on a canvas: top-left corner plus drawn size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Cover-fit zoom: the photo's smaller side spans exactly `frame_diameter`.
///
/// Landscape photos are fitted on their height, portrait and square photos on
/// their width, so the circle is covered with no gaps whatever the aspect
/// ratio. The raw factor is clamped into the zoom range; a degenerate photo
/// yields the default zoom.
#[must_use]
pub fn auto_fit_zoom(frame_diameter: f32, image_width: u32, image_height: u32) -> Zoom {
    if image_width == 0 || image_height == 0 {
        return Zoom::default();
    }

    let fitted_side = if image_width > image_height {
        image_height
    } else {
        image_width
    };

    Zoom::new(frame_diameter / fitted_side as f32)
}

/// Ratio between the output canvas width and the preview's rendered width.
///
/// A preview that has not been laid out yet (zero, negative or non-finite
/// width) is treated as if it were as wide as the output, giving a ratio of 1.
#[must_use]
pub fn preview_to_output_ratio(output_width: f32, preview_width: f32) -> f32 {
    if preview_width.is_finite() && preview_width > 0.0 {
        output_width / preview_width
    } else {
        1.0
    }
}

/// Converts an offset recorded in preview pixels into output pixels.
#[must_use]
pub fn to_output_offset(preview_offset: Offset, ratio: f32) -> Offset {
    preview_offset.scaled(ratio)
}

/// Computes where a photo of natural size `image_width × image_height` is
/// drawn when scaled by `scale` and displaced by `offset` from the circle
/// center. All values are in the target canvas' pixels.
#[must_use]
pub fn place_photo(
    circle: Circle,
    image_width: u32,
    image_height: u32,
    scale: f32,
    offset: Offset,
) -> Placement {
    let width = image_width as f32 * scale;
    let height = image_height as f32 * scale;

    Placement {
        x: circle.center_x - width / 2.0 + offset.x,
        y: circle.center_y - height / 2.0 + offset.y,
        width,
        height,
    }
}
