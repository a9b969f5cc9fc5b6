// SPDX-License-Identifier: MPL-2.0
//! Booth editor layout.

use super::preview::FrameOverlay;
use super::{Message, State};
use crate::config::{MAX_ZOOM, MIN_ZOOM, ZOOM_SLIDER_STEP};
use crate::domain::booth::FrameGeometry;
use crate::i18n::I18n;
use iced::widget::{button, column, container, image, row, slider, text, Canvas, Space, Stack};
use iced::{Alignment, Color, Element, Length, Theme};

const SPACING: f32 = 12.0;
const HINT_TEXT_SIZE: f32 = 13.0;

impl State {
    /// Renders the preview, zoom slider, buttons and status line.
    pub fn view<'a>(&'a self, i18n: &'a I18n, ring_color: Color) -> Element<'a, Message> {
        let size = self.preview_width;

        let preview: Element<'a, Message> = match &self.preview {
            Some(handle) => Stack::new()
                .push(
                    image(handle.clone())
                        .width(Length::Fixed(size))
                        .height(Length::Fixed(size)),
                )
                .push(
                    Canvas::new(FrameOverlay {
                        cache: &self.frame_cache,
                        geometry: FrameGeometry::BOOTH,
                        ring_color,
                        has_photo: self.has_photo(),
                        dragging: self.is_dragging(),
                    })
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size)),
                )
                .into(),
            None => Space::new().width(Length::Fixed(size)).height(Length::Fixed(size)).into(),
        };

        let zoom = self.zoom().value();
        let zoom_row = row![
            text(i18n.tr("label-zoom")),
            slider(MIN_ZOOM..=MAX_ZOOM, zoom, Message::ZoomChanged)
                .step(ZOOM_SLIDER_STEP)
                .width(Length::Fill),
            text(format!("{zoom:.2}x")),
        ]
        .spacing(SPACING)
        .align_y(Alignment::Center)
        .width(Length::Fixed(size));

        let buttons = row![
            button(text(i18n.tr("button-upload"))).on_press(Message::UploadRequested),
            button(text(i18n.tr("button-reset"))).on_press(Message::ResetRequested),
            button(text(i18n.tr("button-download")))
                .on_press_maybe((!self.exporting).then_some(Message::DownloadRequested)),
            button(text(i18n.tr("button-mint")))
                .style(button::secondary)
                .on_press(Message::MintRequested),
        ]
        .spacing(SPACING);

        let status = self.status();
        let is_error = status.is_error();
        let status_line = text(status.text(i18n)).style(move |theme: &Theme| {
            if is_error {
                text::danger(theme)
            } else {
                text::default(theme)
            }
        });

        let mut content = column![preview].spacing(SPACING).align_x(Alignment::Center);
        if self.has_photo() {
            content = content.push(text(i18n.tr("hint-drag")).size(HINT_TEXT_SIZE));
        }
        content = content.push(zoom_row).push(buttons).push(status_line);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(SPACING)
            .into()
    }
}
