//! nook - text notes organized by topic

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use log::LevelFilter;

use cli::{
    Cli, Command, UsageError,
    config::{Config, Settings},
    handlers::{handle_completions, handle_edit, handle_help, handle_list, handle_new},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            _ => return Err(UsageError(err.to_string().trim_end().to_string()).into()),
        },
    };

    init_logging(cli.verbose);

    let Some(command) = &cli.command else {
        return handle_help();
    };

    match command {
        Command::New(args) => handle_new(args, &load_settings(&cli)?),
        Command::List(args) => handle_list(args, &load_settings(&cli)?),
        Command::Edit(args) => handle_edit(args, &load_settings(&cli)?),
        Command::Help => handle_help(),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Resolves settings once for commands that touch the notes tree.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let config = Config::load()?;
    let settings = config.settings(cli.dir.as_ref());
    log::debug!(
        "notes directory: {}, editor: {}",
        settings.notes_dir.display(),
        settings.editor
    );
    Ok(settings)
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
