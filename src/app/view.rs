// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::booth;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub booth: &'a booth::State,
    pub theme_mode: ThemeMode,
    pub warning: Option<&'a str>,
}

/// Renders the booth, with the startup warning banner above it when set.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let booth = ctx
        .booth
        .view(ctx.i18n, ctx.theme_mode.frame_ring_color())
        .map(Message::Booth);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(key) = ctx.warning {
        let banner = row![
            text(ctx.i18n.tr(key)).style(text::danger),
            Space::new().width(Length::Fill),
            button(text("×")).style(button::text).on_press(Message::DismissWarning),
        ]
        .align_y(Alignment::Center)
        .padding(8);
        column = column.push(container(banner).width(Length::Fill));
    }

    column.push(booth).into()
}
