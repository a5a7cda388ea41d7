// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::gallery::Catalog;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Art Space - artwork gallery viewer

USAGE:
  art_space [OPTIONS] [CATALOG]

ARGS:
  <CATALOG>                     TOML manifest listing the artworks to show

OPTIONS:
  --lang <LANG>                 UI language (e.g. en-US, fr)
  --legacy-wrap                 Skip the last artwork when stepping forward
  --config-dir <DIR>            Directory holding settings.toml
  --data-dir <DIR>              Directory holding the sample gallery images
  --write-sample-catalog <FILE> Write the bundled catalog as a manifest and exit
  -h, --help                    Print this help
";

enum Command {
    Run(Flags),
    WriteSample(PathBuf),
    Help,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Command, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    if let Some(path) = args.opt_value_from_str::<_, PathBuf>("--write-sample-catalog")? {
        return Ok(Command::WriteSample(path));
    }

    let lang = args.opt_value_from_str("--lang")?;
    let legacy_wrap = args.contains("--legacy-wrap");
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;

    let mut positional = args.finish().into_iter();
    let catalog_path = positional.next().map(PathBuf::from);
    let ignored: Vec<_> = positional.collect();
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "ignoring extra command-line arguments");
    }

    Ok(Command::Run(Flags {
        lang,
        catalog_path,
        legacy_wrap,
        data_dir,
        config_dir,
    }))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let command = match parse_args(pico_args::Arguments::from_env()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Command::WriteSample(path) => {
            let image_dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default();
            match Catalog::sample(image_dir).save_to_path(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "wrote sample catalog");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "could not write sample catalog");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Run(flags) => match app::run(flags) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(error = %err, "application exited with an error");
                ExitCode::FAILURE
            }
        },
    }
}
