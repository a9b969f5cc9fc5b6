// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// User-selected theme mode, persisted in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode into an iced theme.
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Color of the frame ring drawn over the preview.
    #[must_use]
    pub fn frame_ring_color(self) -> Color {
        if self.is_dark() {
            Color::from_rgba(1.0, 1.0, 1.0, 0.85)
        } else {
            Color::from_rgba(0.0, 0.0, 0.0, 0.6)
        }
    }
}
