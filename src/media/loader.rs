// SPDX-License-Identifier: MPL-2.0
//! Asynchronous photo loading with stale-result protection.
//!
//! Every load request receives a [`LoadTicket`]. When a newer request is made
//! before an older decode finishes, the older result no longer matches the
//! tracker's current generation and is discarded instead of overwriting the
//! newer photo.

use crate::error::{Error, Result};
use crate::media::image::{load_image, ImageData};
use std::path::PathBuf;

/// Generation stamp attached to a single load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out tickets and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    generation: u64,
}

impl LoadTracker {
    /// Starts a new load, superseding every outstanding ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        LoadTicket(self.generation)
    }

    /// Returns whether `ticket` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Decodes the image at `path` on the blocking thread pool.
///
/// # Errors
///
/// Propagates read and decode failures; a panicked worker is reported as
/// [`Error::Io`].
pub async fn load(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(format!("Load task failed: {e}")))?
}
