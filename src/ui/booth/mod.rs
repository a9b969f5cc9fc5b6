// SPDX-License-Identifier: MPL-2.0
//! Booth editor component: the framed preview plus its controls.
//!
//! The component owns the interactive state (photo, transform, drag) and turns
//! user input into state changes and background tasks. Decoding and export run
//! through [`Task::perform`]; their results come back as messages and are
//! applied here, on the update loop, so there is a single owner of the state.

mod preview;
mod view;

pub use preview::scroll_steps;

use crate::config::{PREVIEW_MAX_SIZE, PREVIEW_MIN_SIZE, PREVIEW_PADDING};
use crate::domain::booth::{FrameGeometry, Offset, Zoom};
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::compositor::{self, Scene};
use crate::media::export::{self, ExportJob};
use crate::media::image::pixmap_to_rgba;
use crate::media::loader::{self, LoadTicket, LoadTracker};
use crate::media::ImageData;
use crate::ui::state::{DragState, TransformState};
use iced::widget::{canvas, image};
use iced::{Point, Task};
use std::fmt;
use std::path::PathBuf;
use tiny_skia::Pixmap;

/// Messages emitted by the booth editor.
#[derive(Debug, Clone)]
pub enum Message {
    /// The upload button was pressed.
    UploadRequested,
    /// The file picker closed; `None` when the user cancelled.
    PhotoPicked(Option<PathBuf>),
    /// A decode finished. Ignored unless `ticket` is still current.
    PhotoLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    /// Left button pressed over the preview, in window coordinates.
    DragStarted(Point),
    /// Pointer moved while a drag is active, in window coordinates.
    DragMoved(Point),
    DragEnded,
    /// Wheel scrolled over the preview, in notches (positive zooms in).
    WheelScrolled(f32),
    ZoomChanged(f32),
    ResetRequested,
    DownloadRequested,
    ExportFinished(Result<Option<PathBuf>, Error>),
    MintRequested,
    /// Width available to the editor changed (window resize).
    AvailableWidthChanged(f32),
}

/// Side effects the application must handle on behalf of the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the photo picker; the result comes back as
    /// [`Message::PhotoPicked`].
    OpenPhotoDialog,
}

/// What the status line under the controls currently reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Loading,
    Loaded,
    Exported(PathBuf),
    ExportSkipped,
    MintUnavailable,
    /// Failure, carrying the i18n key of the message to show.
    Failed(&'static str),
}

impl Status {
    /// Localized status line.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        match self {
            Status::Ready => i18n.tr("status-ready"),
            Status::Loading => i18n.tr("status-loading"),
            Status::Loaded => i18n.tr("status-loaded"),
            Status::Exported(path) => {
                let path = path.display().to_string();
                i18n.tr_with_args("status-exported", &[("path", &path)])
            }
            Status::ExportSkipped => i18n.tr("status-export-skipped"),
            Status::MintUnavailable => i18n.tr("status-mint-unavailable"),
            Status::Failed(key) => i18n.tr(key),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

/// Values the component is created with.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub background: ImageData,
    pub wheel_zoom_step: f32,
    pub output_dir: PathBuf,
    pub available_width: f32,
}

/// Booth editor state.
pub struct State {
    background: ImageData,
    photo: Option<ImageData>,
    transform: TransformState,
    drag: DragState,
    loads: LoadTracker,
    /// Rendered width of the preview in logical pixels.
    preview_width: f32,
    /// Background stretched to the preview size; rebuilt only on resize.
    backdrop: Option<Pixmap>,
    preview: Option<image::Handle>,
    frame_cache: canvas::Cache,
    wheel_zoom_step: f32,
    output_dir: PathBuf,
    status: Status,
    exporting: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("photo", &self.photo)
            .field("transform", &self.transform)
            .field("drag", &self.drag)
            .field("preview_width", &self.preview_width)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Preview edge length for the width available to the editor.
#[must_use]
pub fn preview_size_for(available_width: f32) -> f32 {
    if !available_width.is_finite() {
        return PREVIEW_MAX_SIZE;
    }
    (available_width - 2.0 * PREVIEW_PADDING).clamp(PREVIEW_MIN_SIZE, PREVIEW_MAX_SIZE)
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        let mut state = Self {
            background: config.background,
            photo: None,
            transform: TransformState::default(),
            drag: DragState::default(),
            loads: LoadTracker::default(),
            preview_width: preview_size_for(config.available_width),
            backdrop: None,
            preview: None,
            frame_cache: canvas::Cache::new(),
            wheel_zoom_step: config.wheel_zoom_step,
            output_dir: config.output_dir,
            status: Status::Ready,
            exporting: false,
        };
        state.rebuild_backdrop();
        state.refresh_preview();
        state
    }

    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn zoom(&self) -> Zoom {
        self.transform.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.transform.offset
    }

    #[must_use]
    pub fn preview_width(&self) -> f32 {
        self.preview_width
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Starts loading `path` as the photo, superseding any pending load.
    pub fn load_photo(&mut self, path: PathBuf) -> Task<Message> {
        let ticket = self.loads.begin();
        log::info!("Loading photo {}", path.display());
        self.status = Status::Loading;
        Task::perform(loader::load(path), move |result| Message::PhotoLoaded {
            ticket,
            result,
        })
    }

    /// Snapshot of everything the export needs.
    #[must_use]
    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            background: self.background.clone(),
            photo: self.photo.clone(),
            zoom: self.transform.zoom,
            offset: self.transform.offset,
            preview_width: self.preview_width,
            output_dir: self.output_dir.clone(),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::UploadRequested => return (Effect::OpenPhotoDialog, Task::none()),
            Message::PhotoPicked(None) => {}
            Message::PhotoPicked(Some(path)) => return (Effect::None, self.load_photo(path)),
            Message::PhotoLoaded { ticket, result } => self.apply_loaded(ticket, result),
            Message::DragStarted(position) => {
                if self.photo.is_some() {
                    self.drag.start(position, self.transform.offset);
                }
            }
            Message::DragMoved(position) => {
                if let Some(offset) = self.drag.calculate_offset(position) {
                    self.transform.set_offset(offset);
                    self.refresh_preview();
                }
            }
            Message::DragEnded => self.drag.stop(),
            Message::WheelScrolled(steps) => {
                if self.transform.zoom_by(steps, self.wheel_zoom_step) {
                    self.refresh_preview();
                }
            }
            Message::ZoomChanged(value) => {
                self.transform.set_zoom(value);
                self.refresh_preview();
            }
            Message::ResetRequested => {
                self.drag.stop();
                self.transform
                    .reset(self.photo.as_ref().map(ImageData::dimensions));
                self.refresh_preview();
            }
            Message::DownloadRequested => {
                if self.exporting {
                    return (Effect::None, Task::none());
                }
                self.exporting = true;
                return (
                    Effect::None,
                    Task::perform(export::export(self.export_job()), Message::ExportFinished),
                );
            }
            Message::ExportFinished(result) => {
                self.exporting = false;
                self.status = match result {
                    Ok(Some(path)) => Status::Exported(path),
                    Ok(None) => Status::ExportSkipped,
                    Err(err) => {
                        log::error!("Export failed: {err}");
                        Status::Failed(err.i18n_key())
                    }
                };
            }
            Message::MintRequested => {
                log::info!("Mint requested; minting is not implemented");
                self.status = Status::MintUnavailable;
            }
            Message::AvailableWidthChanged(available) => self.resize_preview(available),
        }
        (Effect::None, Task::none())
    }

    fn apply_loaded(&mut self, ticket: LoadTicket, result: Result<ImageData, Error>) {
        if !self.loads.is_current(ticket) {
            log::debug!("Discarding stale photo load");
            return;
        }

        match result {
            Ok(photo) => {
                log::info!("Photo loaded ({}x{})", photo.width(), photo.height());
                self.transform = TransformState::fitted(photo.width(), photo.height());
                self.photo = Some(photo);
                self.drag.stop();
                self.status = Status::Loaded;
                self.refresh_preview();
            }
            Err(err) => {
                log::warn!("Failed to load photo: {err}");
                self.status = Status::Failed(err.i18n_key());
            }
        }
    }

    fn resize_preview(&mut self, available_width: f32) {
        let width = preview_size_for(available_width);
        if (width - self.preview_width).abs() < 0.5 {
            return;
        }
        // Keep the photo at the same spot relative to the frame.
        let factor = width / self.preview_width;
        self.transform
            .set_offset(self.transform.offset.scaled(factor));
        // The press baseline was recorded at the old scale.
        self.drag.stop();
        self.preview_width = width;
        self.frame_cache.clear();
        self.rebuild_backdrop();
        self.refresh_preview();
    }

    fn rebuild_backdrop(&mut self) {
        self.backdrop = compositor::render_preview_backdrop(&self.background, self.preview_width);
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            background: &self.background,
            photo: self.photo.as_ref(),
            geometry: FrameGeometry::BOOTH,
            zoom: self.transform.zoom,
            offset: self.transform.offset,
        }
    }

    fn refresh_preview(&mut self) {
        let scene = self.scene();
        let rendered = self
            .backdrop
            .as_ref()
            .and_then(|backdrop| compositor::render_preview_on(backdrop, &scene, self.preview_width));
        self.preview = rendered.map(|pixmap| {
            image::Handle::from_rgba(pixmap.width(), pixmap.height(), pixmap_to_rgba(&pixmap))
        });
    }
}
