//! Command handlers for the CLI.

mod edit;
mod editor;
mod list;
mod new;
mod resolve;


use anyhow::Result;
use clap::CommandFactory;
use std::io;

use super::{Cli, CompletionsArgs, usage};

// Re-export public items
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::{NewNoteResult, create_new_note, handle_new};
pub use resolve::{find_note, find_topic};

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::{handle_edit_impl, join_note_words};
#[cfg(test)]
pub(crate) use editor::EditorLauncher;
#[cfg(test)]
pub(crate) use list::{collect_notes, collect_topics};
#[cfg(test)]
pub(crate) use new::handle_new_impl;

pub fn handle_help() -> Result<()> {
    println!("{}", usage());
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "nook", &mut io::stdout());
    Ok(())
}
