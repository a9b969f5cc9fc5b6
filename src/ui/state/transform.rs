// SPDX-License-Identifier: MPL-2.0
//! Photo transform state
//!
//! Holds the zoom factor and the drag offset of the photo inside the frame.
//! The offset is kept in preview pixels; conversion to output pixels happens
//! only when the export is composed.

use crate::config::OUTPUT_WIDTH;
use crate::domain::booth::{auto_fit_zoom, FrameGeometry, Offset, Zoom};

/// Zoom and offset applied to the loaded photo.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    pub zoom: Zoom,
    pub offset: Offset,
}

impl TransformState {
    /// Transform for a freshly loaded photo: cover-fit zoom, centered.
    #[must_use]
    pub fn fitted(image_width: u32, image_height: u32) -> Self {
        let diameter = FrameGeometry::BOOTH.diameter(OUTPUT_WIDTH as f32);
        Self {
            zoom: auto_fit_zoom(diameter, image_width, image_height),
            offset: Offset::ZERO,
        }
    }

    /// Resets to the fitted transform for `photo_dimensions`, or to neutral
    /// defaults when there is no photo.
    pub fn reset(&mut self, photo_dimensions: Option<(u32, u32)>) {
        *self = match photo_dimensions {
            Some((width, height)) => Self::fitted(width, height),
            None => Self::default(),
        };
    }

    /// Sets the zoom directly (slider input).
    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom = Zoom::new(factor);
    }

    /// Adjusts the zoom by `steps` wheel notches of `step_size` each.
    ///
    /// Returns `false` when the zoom was left untouched.
    pub fn zoom_by(&mut self, steps: f32, step_size: f32) -> bool {
        let pinned = (steps > 0.0 && self.zoom.is_max()) || (steps < 0.0 && self.zoom.is_min());
        if !steps.is_finite() || steps == 0.0 || pinned {
            return false;
        }
        self.zoom = self.zoom.step(steps * step_size);
        true
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }
}
