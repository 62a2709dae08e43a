// SPDX-License-Identifier: MPL-2.0
use notice_desk::app::{self, Flags};
use notice_desk::config;
use std::process::ExitCode;

const HELP: &str = "\
Usage: notice-desk [OPTIONS]

Options:
  --lang <ID>          UI language (en-US, tr)
  --config-dir <PATH>  Directory holding settings.toml
                       (overrides NOTICE_DESK_CONFIG_DIR)
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("notice-desk: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    config::paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notice-desk: {err}");
            ExitCode::FAILURE
        }
    }
}
