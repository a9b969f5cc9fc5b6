// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Output**: Export canvas size and filenames
//! - **Zoom**: Zoom bounds (re-exported from the domain) and wheel step
//! - **Preview**: Preview editor sizing

// ==========================================================================
// Output Defaults
// ==========================================================================

/// Width of the exported image in pixels.
pub const OUTPUT_WIDTH: u32 = 512;

/// Height of the exported image in pixels.
pub const OUTPUT_HEIGHT: u32 = 512;

/// Filename used when a photo is composited into the frame.
pub const COMPOSITE_FILENAME: &str = "onchain-summer-booth.png";

/// Filename used when only the background is exported.
pub const BACKGROUND_FILENAME: &str = "onchain-summer-bg.png";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum zoom factor.
pub const MIN_ZOOM: f32 = crate::domain::booth::zoom_bounds::MIN;

/// Maximum zoom factor.
pub const MAX_ZOOM: f32 = crate::domain::booth::zoom_bounds::MAX;

/// Zoom change per mouse wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

/// Smallest accepted wheel step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.01;

/// Largest accepted wheel step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 1.0;

/// Slider granularity.
pub const ZOOM_SLIDER_STEP: f32 = 0.01;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Largest edge of the square preview editor in logical pixels.
pub const PREVIEW_MAX_SIZE: f32 = 480.0;

/// Smallest edge of the preview editor; below it the frame gets too small to
/// grab.
pub const PREVIEW_MIN_SIZE: f32 = 160.0;

/// Horizontal space kept free on each side of the preview.
pub const PREVIEW_PADDING: f32 = 24.0;
