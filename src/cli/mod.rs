//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod prompt;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use thiserror::Error;

use output::OutputFormat;

const AFTER_HELP: &str = "\
Examples:
  nook new                          prompt for topic and event
  nook new \"Project X\" \"Kickoff Call\"
  nook ls                           list topics
  nook ls proj                      list notes in the first topic containing 'proj'
  nook edit proj kickoff            open the first note containing 'kickoff'";

/// nook - notes organized by topic
#[derive(Parser, Debug)]
#[command(
    name = "nook",
    version,
    about,
    long_about = None,
    disable_help_subcommand = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Notes directory (overrides config file; default ~/notes)
    #[arg(short = 'd', long, global = true, env = "NOOK_DIR")]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new dated note, prompting for anything missing
    New(NewArgs),

    /// List topics, or the notes within a topic
    #[command(name = "ls")]
    List(ListArgs),

    /// Open an existing note in your editor
    Edit(EditArgs),

    /// Print usage information
    Help,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug, Default)]
pub struct NewArgs {
    /// Topic to file the note under (created if missing)
    pub topic: Option<String>,

    /// Event name used as the note title
    pub event: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Topic name substring; lists topics when omitted
    pub topic: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug, Default)]
pub struct EditArgs {
    /// Topic name substring
    pub topic: Option<String>,

    /// Note name substring (remaining words are joined)
    pub note: Vec<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Command line that names no known action or has the wrong number of arguments.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Renders the usage text shown by `help` and on usage errors.
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}
