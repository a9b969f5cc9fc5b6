// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::media::ImageData;
use crate::ui::booth;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Booth(booth::Message),
    /// Result from the photo picker dialog.
    PhotoDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    WindowResized(Size),
    DismissWarning,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Settings loaded from `settings.toml` (defaults when absent).
    pub config: Config,
    /// i18n key of the warning raised while loading the config, if any.
    pub config_warning: Option<String>,
    /// Decoded background the booth draws behind the frame.
    pub background: ImageData,
    /// Optional photo to load on startup.
    pub photo: Option<PathBuf>,
}
