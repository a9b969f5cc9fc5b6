// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for moving the photo inside the
//! frame. The offset baseline is captured on press so a second drag continues
//! from wherever the first one left the photo.

use crate::domain::booth::Offset;
use iced::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position where the drag started
    pub start_position: Option<Point>,

    /// Photo offset when the drag started
    pub start_offset: Option<Offset>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Offset) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Calculates the photo offset for the current pointer position.
    ///
    /// `offset = pointer - (pointer_at_press - baseline)`; the photo follows
    /// the pointer one to one.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Offset> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(Offset::new(
            current_position.x - (start_pos.x - start_offset.x),
            current_position.y - (start_pos.y - start_offset.y),
        ))
    }
}
