//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use super::editor::{CommandEditor, EditorLauncher};
use super::resolve::{resolve_note, resolve_topic};
use crate::cli::EditArgs;
use crate::cli::config::Settings;
use crate::cli::prompt::{LinePrompter, Prompter};
use crate::domain::decode;
use crate::store::{DirStore, NoteStore};

/// Joins trailing note words into one substring.
///
/// Words are joined with a single space; resolution then normalizes spaces
/// to hyphens, so `edit work kickoff call` matches `kickoff-call`.
pub(crate) fn join_note_words(words: &[String]) -> String {
    words.join(" ")
}

/// Internal implementation that accepts its collaborators explicitly.
///
/// Returns the path handed to the editor.
pub(crate) fn handle_edit_impl<S, P, E>(
    args: &EditArgs,
    store: &S,
    prompter: &mut P,
    editor: &E,
) -> Result<PathBuf>
where
    S: NoteStore + ?Sized,
    P: Prompter + ?Sized,
    E: EditorLauncher + ?Sized,
{
    let topic_substring = match &args.topic {
        Some(topic) => topic.clone(),
        None => prompter
            .ask("What topic would you like to edit? ")
            .with_context(|| "failed to read the topic")?,
    };
    let topic = resolve_topic(store, &topic_substring)?;

    let note_substring = if args.note.is_empty() {
        let files = store
            .notes(&topic)
            .with_context(|| format!("failed to list notes in topic '{}'", topic))?;
        if files.is_empty() {
            bail!("no notes in topic '{}'", topic);
        }

        prompter.tell(&format!("Notes in {}:", topic))?;
        for file in &files {
            prompter.tell(&format!("  {}", decode(file)))?;
        }
        prompter
            .ask(&format!("What note would you like to edit in {}? ", topic))
            .with_context(|| "failed to read the note name")?
    } else {
        join_note_words(&args.note)
    };

    let file_name = resolve_note(store, &topic, &note_substring)?;
    let path = store.note_path(&topic, &file_name);

    editor.open(&path)?;

    Ok(path)
}

pub fn handle_edit(args: &EditArgs, settings: &Settings) -> Result<()> {
    let store = DirStore::new(&settings.notes_dir);
    let mut prompter = LinePrompter::stdio();
    let editor = CommandEditor::new(&settings.editor);

    handle_edit_impl(args, &store, &mut prompter, &editor).map(|_| ())
}
