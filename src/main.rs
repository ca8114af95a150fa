// SPDX-License-Identifier: MPL-2.0
use iced_hero::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Hero

USAGE:
  iced_hero [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <ID>         UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
      --video <PATH>      Local background video file

ENVIRONMENT:
  ICED_HERO_CONFIG_DIR    Config directory (overridden by --config-dir)
  RUST_LOG                Log filter (default: warn,iced_hero=info)
";

const DEFAULT_LOG_FILTER: &str = "warn,iced_hero=info";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        video: args.opt_value_from_os_str("--video", |value| {
            Ok::<PathBuf, String>(PathBuf::from(value))
        })?,
    })
}
