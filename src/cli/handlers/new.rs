//! New note command handler.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use super::editor::{CommandEditor, EditorLauncher};
use crate::cli::NewArgs;
use crate::cli::config::Settings;
use crate::cli::prompt::{LinePrompter, Prompter};
use crate::domain::{NoteName, Topic};
use crate::store::{DirStore, NoteStore};

/// Result of creating a new note (for testability).
#[derive(Debug)]
pub struct NewNoteResult {
    pub topic: Topic,
    pub name: NoteName,
    pub path: PathBuf,
    /// False when a note with the same name already existed and was reused.
    pub created: bool,
}

/// Creates the topic directory and an empty dated note file.
///
/// The topic and title are normalized (spaces to hyphens) before anything
/// touches the disk. An existing note with the same name is left intact.
///
/// # Errors
///
/// Returns an error if:
/// - The topic or title is invalid
/// - The topic directory or note file cannot be created
pub fn create_new_note<S: NoteStore + ?Sized>(
    store: &S,
    topic: &str,
    event: &str,
    date: NaiveDate,
) -> Result<NewNoteResult> {
    let topic = Topic::new(topic).with_context(|| format!("invalid topic '{}'", topic))?;
    let name =
        NoteName::new(event, Some(date)).with_context(|| format!("invalid event name '{}'", event))?;

    store
        .create_topic(&topic)
        .with_context(|| format!("failed to create topic directory '{}'", topic))?;

    let (path, created) = store
        .create_note(&topic, &name)
        .with_context(|| format!("failed to create note '{}'", name.file_name()))?;

    Ok(NewNoteResult {
        topic,
        name,
        path,
        created,
    })
}

/// Internal implementation that accepts its collaborators explicitly.
pub(crate) fn handle_new_impl<S, P, E>(
    args: &NewArgs,
    store: &S,
    prompter: &mut P,
    editor: &E,
    today: NaiveDate,
) -> Result<NewNoteResult>
where
    S: NoteStore + ?Sized,
    P: Prompter + ?Sized,
    E: EditorLauncher + ?Sized,
{
    let topic = match &args.topic {
        Some(topic) => topic.clone(),
        None => prompter
            .ask("Enter the notes topic: ")
            .with_context(|| "failed to read the topic")?,
    };
    // Reject a bad topic before asking for the event.
    Topic::new(&topic).with_context(|| format!("invalid topic '{}'", topic))?;

    let event = match &args.event {
        Some(event) => event.clone(),
        None => prompter
            .ask("Enter the event name: ")
            .with_context(|| "failed to read the event name")?,
    };

    let result = create_new_note(store, &topic, &event, today)?;

    if result.created {
        println!("Created: {}", result.path.display());
    } else {
        println!("Opening existing note: {}", result.path.display());
    }

    editor.open(&result.path)?;

    Ok(result)
}

pub fn handle_new(args: &NewArgs, settings: &Settings) -> Result<()> {
    let store = DirStore::new(&settings.notes_dir);
    let mut prompter = LinePrompter::stdio();
    let editor = CommandEditor::new(&settings.editor);
    let today = Local::now().date_naive();

    handle_new_impl(args, &store, &mut prompter, &editor, today).map(|_| ())
}
