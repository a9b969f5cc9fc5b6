// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core booth logic with ZERO external dependencies.
//!
//! This module contains pure value objects and the coordinate math that maps
//! the interactive preview onto the export canvas. It has no dependencies on
//! external crates (except `std`) so the fragile parts stay easy to test.
//!
//! # Modules
//!
//! - [`booth`]: Booth value objects ([`Zoom`](booth::Zoom), [`Offset`](booth::Offset))
//!   and frame geometry ([`FrameGeometry`](booth::FrameGeometry))

pub mod booth;
