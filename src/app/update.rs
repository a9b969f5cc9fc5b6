// SPDX-License-Identifier: MPL-2.0
//! Message handlers that need more than the booth component itself.

use super::Message;
use crate::media::extensions::IMAGE_EXTENSIONS;
use iced::Task;
use std::path::{Path, PathBuf};

/// Opens the photo picker filtered to supported image types.
pub fn handle_open_photo_dialog(
    title: String,
    filter_name: String,
    last_directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::PhotoDialogResult,
    )
}

/// Returns whether a dropped file looks like a supported image.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_are_recognized_case_insensitively() {
        assert!(is_supported_image(Path::new("/tmp/me.JPG")));
        assert!(is_supported_image(Path::new("beach.webp")));
        assert!(is_supported_image(Path::new("logo.svg")));
    }

    #[test]
    fn other_files_are_rejected() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
