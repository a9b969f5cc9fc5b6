// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing and headless export.
//!
//! Usage:
//!   summer_booth [--lang fr] [--config-dir DIR] [--background IMG] [PHOTO]
//!   summer_booth --export DIR [--photo IMG] [--background IMG] [--zoom Z]
//!                [--offset-x X] [--offset-y Y] [--preview-width P]
//!
//! With `--export` no window is opened: the booth is composed once and the PNG
//! is written into `DIR`. Offsets are preview pixels relative to a preview of
//! width `P` (the output width when omitted). Without `--zoom` the photo is
//! auto-fitted to the frame.

use crate::config::{Config, OUTPUT_WIDTH};
use crate::domain::booth::{Offset, Zoom};
use crate::error::Result;
use crate::media::assets;
use crate::media::export::ExportJob;
use crate::media::image::load_image;
use crate::ui::state::TransformState;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

pub const HELP: &str = "\
Onchain Summer Booth

USAGE:
  summer_booth [OPTIONS] [PHOTO]
  summer_booth --export DIR [EXPORT OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang LANG             UI language (e.g. en-US, fr)
  --config-dir DIR        Directory holding settings.toml
  --background IMG        Background image replacing the built-in one
  --photo IMG             Photo to place in the frame

EXPORT OPTIONS:
  --export DIR            Write the composed PNG into DIR without opening a window
  --zoom Z                Zoom factor, 0.5 to 3.0 (default: auto-fit)
  --offset-x X            Horizontal offset in preview pixels (default: 0)
  --offset-y Y            Vertical offset in preview pixels (default: 0)
  --preview-width P       Width the offsets were measured at (default: 512)

  Negative offsets need the KEY=VALUE form, e.g. --offset-x=-12.

ENVIRONMENT:
  SUMMER_BOOTH_CONFIG_DIR Overrides the config directory
  RUST_LOG                Log filter (default: info)
";

/// Options of a headless export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub zoom: Option<f32>,
    pub offset: Offset,
    pub preview_width: f32,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub help: bool,
    pub lang: Option<String>,
    pub config_dir: Option<String>,
    pub background: Option<PathBuf>,
    pub photo: Option<PathBuf>,
    pub export: Option<ExportOptions>,
}

impl CliArgs {
    /// Parses the process arguments.
    ///
    /// # Errors
    ///
    /// Returns the `pico_args` error for malformed values or unknown flags.
    pub fn from_env() -> std::result::Result<Self, pico_args::Error> {
        Self::parse(pico_args::Arguments::from_env())
    }

    /// Parses an explicit argument list (without the program name).
    ///
    /// # Errors
    ///
    /// Returns the `pico_args` error for malformed values or unknown flags.
    pub fn from_vec(args: Vec<OsString>) -> std::result::Result<Self, pico_args::Error> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> std::result::Result<Self, pico_args::Error> {
        let help = args.contains(["-h", "--help"]);
        let lang = args.opt_value_from_str("--lang")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let background = args.opt_value_from_os_str("--background", parse_path)?;
        let photo = args.opt_value_from_os_str("--photo", parse_path)?;

        let export = match args.opt_value_from_os_str("--export", parse_path)? {
            Some(output_dir) => {
                let zoom = args.opt_value_from_str("--zoom")?;
                let offset_x: f32 = args.opt_value_from_str("--offset-x")?.unwrap_or(0.0);
                let offset_y: f32 = args.opt_value_from_str("--offset-y")?.unwrap_or(0.0);
                let preview_width: f32 = args
                    .opt_value_from_str("--preview-width")?
                    .unwrap_or(OUTPUT_WIDTH as f32);
                Some(ExportOptions {
                    output_dir,
                    zoom,
                    offset: Offset::new(offset_x, offset_y),
                    preview_width,
                })
            }
            None => None,
        };

        let rest = args.finish();
        if let Some(flag) = rest
            .iter()
            .find(|arg| arg.to_string_lossy().starts_with('-'))
        {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown option: {}", flag.to_string_lossy()),
            });
        }
        let mut rest = rest.into_iter();
        let photo = photo.or_else(|| rest.next().map(PathBuf::from));
        if let Some(extra) = rest.next() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument: {}", extra.to_string_lossy()),
            });
        }

        Ok(Self {
            help,
            lang,
            config_dir,
            background,
            photo,
            export,
        })
    }

    /// Background path: command line first, then the configured one.
    #[must_use]
    pub fn background_path(&self, config: &Config) -> Option<PathBuf> {
        self.background
            .clone()
            .or_else(|| config.booth.background_path.clone())
    }
}

#[allow(clippy::unnecessary_wraps)]
fn parse_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}

/// Builds the export job described by the command line.
///
/// # Errors
///
/// Propagates background and photo decode failures.
pub fn build_job(args: &CliArgs, options: &ExportOptions, config: &Config) -> Result<ExportJob> {
    let background = assets::load_background(args.background_path(config).as_deref())?;
    let photo = args.photo.as_deref().map(load_image).transpose()?;

    let zoom = match (options.zoom, &photo) {
        (Some(zoom), _) => Zoom::new(zoom),
        (None, Some(photo)) => TransformState::fitted(photo.width(), photo.height()).zoom,
        (None, None) => Zoom::default(),
    };

    Ok(ExportJob {
        background,
        photo,
        zoom,
        offset: options.offset,
        preview_width: options.preview_width,
        output_dir: options.output_dir.clone(),
    })
}

/// Runs a headless export and returns the process exit code.
pub fn run_export(args: &CliArgs, options: &ExportOptions, config: &Config) -> ExitCode {
    let job = match build_job(args, options, config) {
        Ok(job) => job,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match job.run() {
        Ok(Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("error: nothing to export");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BACKGROUND_FILENAME, COMPOSITE_FILENAME};
    use crate::test_utils::solid_image;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn gui_flags_and_positional_photo() {
        let parsed = CliArgs::from_vec(args(&["--lang", "fr", "--config-dir", "/cfg", "me.jpg"]))
            .expect("valid args");
        assert_eq!(parsed.lang.as_deref(), Some("fr"));
        assert_eq!(parsed.config_dir.as_deref(), Some("/cfg"));
        assert_eq!(parsed.photo, Some(PathBuf::from("me.jpg")));
        assert!(parsed.export.is_none());
    }

    #[test]
    fn export_flags_have_defaults() {
        let parsed = CliArgs::from_vec(args(&["--export", "/out"])).expect("valid args");
        assert_eq!(
            parsed.export,
            Some(ExportOptions {
                output_dir: PathBuf::from("/out"),
                zoom: None,
                offset: Offset::ZERO,
                preview_width: 512.0,
            })
        );
    }

    #[test]
    fn export_flags_are_parsed() {
        let parsed = CliArgs::from_vec(args(&[
            "--export",
            "/out",
            "--photo",
            "me.png",
            "--zoom",
            "1.5",
            "--offset-x",
            "10",
            "--offset-y",
            "4.5",
            "--preview-width",
            "256",
        ]))
        .expect("valid args");
        let export = parsed.export.expect("export mode");
        assert_eq!(export.zoom, Some(1.5));
        assert_eq!(export.offset, Offset::new(10.0, 4.5));
        assert_eq!(export.preview_width, 256.0);
        assert_eq!(parsed.photo, Some(PathBuf::from("me.png")));
    }

    #[test]
    fn malformed_zoom_is_rejected() {
        assert!(CliArgs::from_vec(args(&["--export", "/out", "--zoom", "big"])).is_err());
    }

    #[test]
    fn export_only_flag_without_export_is_rejected() {
        assert!(CliArgs::from_vec(args(&["--zoom", "1.5"])).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(CliArgs::from_vec(args(&["a.png", "b.png"])).is_err());
    }

    #[test]
    fn background_flag_overrides_config() {
        let mut config = Config::default();
        config.booth.background_path = Some(PathBuf::from("/cfg/bg.png"));

        let parsed = CliArgs::from_vec(args(&["--background", "/cli/bg.png"])).expect("valid");
        assert_eq!(
            parsed.background_path(&config),
            Some(PathBuf::from("/cli/bg.png"))
        );
        assert_eq!(
            CliArgs::default().background_path(&config),
            Some(PathBuf::from("/cfg/bg.png"))
        );
    }

    #[test]
    fn job_without_zoom_is_auto_fitted() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let photo_path = temp_dir.path().join("me.png");
        solid_image(200, 100, [9, 9, 9, 255])
            .save(&photo_path)
            .expect("write photo");

        let parsed = CliArgs::from_vec(args(&[
            "--export",
            temp_dir.path().to_str().expect("utf-8 temp path"),
            "--photo",
            photo_path.to_str().expect("utf-8 temp path"),
        ]))
        .expect("valid args");
        let options = parsed.export.clone().expect("export mode");
        let job = build_job(&parsed, &options, &Config::default()).expect("job");

        assert_eq!(job.zoom, TransformState::fitted(200, 100).zoom);
        assert_eq!(job.preview_width, 512.0);
    }

    #[test]
    fn run_export_writes_expected_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let options = ExportOptions {
            output_dir: temp_dir.path().to_path_buf(),
            zoom: Some(1.0),
            offset: Offset::ZERO,
            preview_width: 512.0,
        };

        let code = run_export(&CliArgs::default(), &options, &Config::default());
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(temp_dir.path().join(BACKGROUND_FILENAME).exists());

        let photo_path = temp_dir.path().join("me.png");
        solid_image(64, 64, [255, 0, 0, 255])
            .save(&photo_path)
            .expect("write photo");
        let args = CliArgs {
            photo: Some(photo_path),
            ..CliArgs::default()
        };
        assert_eq!(run_export(&args, &options, &Config::default()), ExitCode::SUCCESS);
        assert!(temp_dir.path().join(COMPOSITE_FILENAME).exists());
    }

    #[test]
    fn run_export_fails_on_missing_photo() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let options = ExportOptions {
            output_dir: temp_dir.path().to_path_buf(),
            zoom: None,
            offset: Offset::ZERO,
            preview_width: 512.0,
        };
        let args = CliArgs {
            photo: Some(temp_dir.path().join("missing.png")),
            ..CliArgs::default()
        };
        assert_eq!(run_export(&args, &options, &Config::default()), ExitCode::FAILURE);
    }
}
