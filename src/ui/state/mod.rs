// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the booth component so it can be tested
//! without a window.

pub mod drag;
pub mod transform;

pub use drag::DragState;
pub use transform::TransformState;
