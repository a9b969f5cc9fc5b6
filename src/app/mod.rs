// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the booth editor.
//!
//! The `App` struct wires together the booth component, localization and the
//! persisted preferences, and translates top-level messages (dialogs, window
//! events) into component messages.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::ui::booth::{self, Effect, StateConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the booth, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    booth: booth::State,
    theme_mode: ThemeMode,
    /// i18n key of a startup warning, shown until dismissed.
    warning: Option<String>,
    /// Directory of the last picked photo, reused by the next dialog.
    last_photo_directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("booth", &self.booth)
            .field("theme_mode", &self.theme_mode)
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// photo loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
            background,
            photo,
        } = flags;

        let i18n = I18n::new(lang, &config);
        let mut booth = booth::State::new(StateConfig {
            background,
            wheel_zoom_step: config.booth.effective_wheel_zoom_step(),
            output_dir: config.booth.effective_output_dir(),
            available_width: WINDOW_DEFAULT_WIDTH as f32,
        });

        let task = match photo {
            Some(path) => booth.load_photo(path).map(Message::Booth),
            None => Task::none(),
        };

        let app = App {
            i18n,
            booth,
            theme_mode: config.general.theme_mode,
            warning: config_warning,
            last_photo_directory: None,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_drag_subscription(self.booth.is_dragging()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Booth(booth_message) => self.handle_booth_message(booth_message),
            Message::PhotoDialogResult(None) => Task::none(),
            Message::PhotoDialogResult(Some(path)) => self.pick_photo(path),
            Message::FileDropped(path) => {
                if update::is_supported_image(&path) {
                    self.pick_photo(path)
                } else {
                    log::debug!("Ignoring dropped file {}", path.display());
                    Task::none()
                }
            }
            Message::WindowResized(size) => {
                self.handle_booth_message(booth::Message::AvailableWidthChanged(size.width))
            }
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
        }
    }

    fn handle_booth_message(&mut self, message: booth::Message) -> Task<Message> {
        let (effect, task) = self.booth.handle_message(message);
        let task = task.map(Message::Booth);

        match effect {
            Effect::None => task,
            Effect::OpenPhotoDialog => Task::batch([
                task,
                update::handle_open_photo_dialog(
                    self.i18n.tr("dialog-pick-photo"),
                    self.i18n.tr("filter-images"),
                    self.last_photo_directory.clone(),
                ),
            ]),
        }
    }

    fn pick_photo(&mut self, path: PathBuf) -> Task<Message> {
        self.last_photo_directory = path.parent().map(PathBuf::from);
        self.handle_booth_message(booth::Message::PhotoPicked(Some(path)))
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            booth: &self.booth,
            theme_mode: self.theme_mode,
            warning: self.warning.as_deref(),
        })
    }
}
