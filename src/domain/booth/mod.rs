// SPDX-License-Identifier: MPL-2.0
//! Booth domain types.
//!
//! Value objects for the photo transform and the fixed circular frame.

pub mod geometry;
pub mod newtypes;

// Re-export commonly used types
pub use geometry::{
    auto_fit_zoom, place_photo, preview_to_output_ratio, to_output_offset, Circle, FrameGeometry,
    Placement,
};
pub use newtypes::{zoom_bounds, Offset, Zoom};
