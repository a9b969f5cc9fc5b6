// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use summer_booth::app::{self, paths, Flags};
use summer_booth::cli::{self, CliArgs};
use summer_booth::config;
use summer_booth::media::assets;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print!("{}", cli::HELP);
        return ExitCode::SUCCESS;
    }

    paths::init_cli_overrides(args.config_dir.clone());
    let (config, config_warning) = config::load();

    if let Some(options) = &args.export {
        return cli::run_export(&args, options, &config);
    }

    let background = match assets::load_background(args.background_path(&config).as_deref()) {
        Ok(background) => background,
        Err(err) => {
            log::warn!("Custom background unusable ({err}); using the built-in one");
            match assets::load_background(None) {
                Ok(background) => background,
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let flags = Flags {
        lang: args.lang,
        config,
        config_warning,
        background,
        photo: args.photo,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {err}");
            ExitCode::FAILURE
        }
    }
}
