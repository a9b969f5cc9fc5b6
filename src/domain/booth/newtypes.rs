// SPDX-License-Identifier: MPL-2.0
//! Booth newtypes.
//!
//! This module provides type-safe wrappers for transform values,
//! ensuring they are always within valid ranges.

use std::ops::{Add, Sub};

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom scalar bounds (0.5x to 3.0x).
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN: f32 = 0.5;
    /// Maximum zoom factor.
    pub const MAX: f32 = 3.0;
    /// Default zoom factor (no photo loaded, or after a neutral reset).
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// Zoom
// =============================================================================

/// Zoom factor applied to the photo's natural size, guaranteed to be
/// within valid range (0.5x–3.0x).
///
/// Every constructor clamps, so no input sequence (wheel deltas, slider
/// values, auto-fit results) can leave the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f32);

impl Zoom {
    /// Creates a new zoom factor, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default factor.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// Adjusts the zoom by a signed increment.
    #[must_use]
    pub fn step(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

// =============================================================================
// Offset
// =============================================================================

/// Photo displacement relative to the frame center.
///
/// Interactive state stores this in preview pixels; the compositor converts it
/// to output pixels with [`to_output_offset`](super::to_output_offset).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiplies both components by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}
