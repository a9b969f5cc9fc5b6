// SPDX-License-Identifier: MPL-2.0
//! Interaction overlay drawn on top of the rendered preview.
//!
//! The composed preview itself is a plain image; this canvas only strokes the
//! frame ring and turns presses and wheel scrolls over the preview into
//! booth messages. Pointer movement during a drag is tracked by a window
//! subscription, not here, so the overlay never needs to see the pointer once
//! it leaves the preview.

use super::Message;
use crate::domain::booth::FrameGeometry;
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Event, Point, Rectangle, Renderer, Theme};

const RING_WIDTH: f32 = 2.0;

/// Canvas program for the frame ring and preview input.
pub struct FrameOverlay<'a> {
    pub cache: &'a canvas::Cache,
    pub geometry: FrameGeometry,
    pub ring_color: Color,
    pub has_photo: bool,
    pub dragging: bool,
}

impl canvas::Program<Message> for FrameOverlay<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if self.has_photo => {
                // Window coordinates, to match the drag subscription's events.
                let position = cursor.position_over(bounds)?;
                Some(Action::publish(Message::DragStarted(position)).and_capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_over(bounds)?;
                Some(Action::publish(Message::WheelScrolled(scroll_steps(delta))).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let ring = self.cache.draw(renderer, bounds.size(), |frame| {
            let circle = self.geometry.circle(bounds.width, bounds.height);
            let path = Path::circle(Point::new(circle.center_x, circle.center_y), circle.radius);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(self.ring_color)
                    .with_width(RING_WIDTH),
            );
        });
        vec![ring]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if self.has_photo && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Converts a wheel delta into notches; trackpads report pixels.
#[must_use]
pub fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_deltas_are_notches() {
        assert_eq!(scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 }), -2.0);
    }

    #[test]
    fn pixel_deltas_are_scaled_down() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 5.0, y: 60.0 }),
            0.5
        );
    }
}
