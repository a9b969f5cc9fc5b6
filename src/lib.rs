// SPDX-License-Identifier: MPL-2.0
//! `summer_booth` is a photo booth editor built with the Iced GUI framework.
//!
//! A photo is framed in a circle over a background, positioned by dragging and
//! zooming, and exported as a 512×512 PNG. The same compositor renders the
//! live preview, the export and the headless `--export` mode.

#![doc(html_root_url = "https://docs.rs/summer_booth/0.1.0")]

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
