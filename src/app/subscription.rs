// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events (resize, file drop) are always routed. Pointer movement is
//! only listened to while the photo is being dragged.

use super::Message;
use crate::ui::booth;
use iced::{event, mouse, window, Event, Subscription};

/// Window-level events routed regardless of state.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

/// Pointer tracking for an active drag, or nothing when no drag is active.
///
/// Releasing the button or leaving the window ends the drag.
pub fn create_drag_subscription(is_dragging: bool) -> Subscription<Message> {
    if !is_dragging {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Booth(booth::Message::DragMoved(position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft) => Some(Message::Booth(booth::Message::DragEnded)),
        _ => None,
    })
}
