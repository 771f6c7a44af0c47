//! List command handler.

use anyhow::{Context, Result};

use super::resolve::resolve_topic;
use crate::cli::ListArgs;
use crate::cli::config::Settings;
use crate::cli::output::{NoteListing, Output, OutputFormat, TopicListing};
use crate::domain::decode;
use crate::infra::FsError;
use crate::store::{DirStore, NoteStore};

/// Collects every topic. A notes root that doesn't exist yet has no topics.
pub(crate) fn collect_topics<S: NoteStore + ?Sized>(
    store: &S,
    root_display: &str,
) -> Result<Vec<TopicListing>> {
    let topics = match store.topics() {
        Ok(topics) => topics,
        Err(FsError::NotFound { .. }) => {
            log::info!("notes directory {} does not exist yet", root_display);
            Vec::new()
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read notes directory {}", root_display));
        }
    };

    Ok(topics
        .into_iter()
        .map(|name| TopicListing {
            path: store.topic_path(&name).display().to_string(),
            name,
        })
        .collect())
}

/// Resolves a topic substring and collects its notes with decoded names.
///
/// Returns the resolved topic name alongside the listing.
pub(crate) fn collect_notes<S: NoteStore + ?Sized>(
    store: &S,
    topic_substring: &str,
) -> Result<(String, Vec<NoteListing>)> {
    let topic = resolve_topic(store, topic_substring)?;
    let files = store
        .notes(&topic)
        .with_context(|| format!("failed to list notes in topic '{}'", topic))?;

    let notes = files
        .into_iter()
        .map(|file_name| NoteListing {
            display: decode(&file_name),
            path: store.note_path(&topic, &file_name).display().to_string(),
            file_name,
        })
        .collect();

    Ok((topic, notes))
}

pub fn handle_list(args: &ListArgs, settings: &Settings) -> Result<()> {
    let store = DirStore::new(&settings.notes_dir);
    let root_display = settings.notes_dir.display().to_string();

    match &args.topic {
        None => {
            let topics = collect_topics(&store, &root_display)?;
            match args.format {
                OutputFormat::Human => {
                    if topics.is_empty() {
                        println!("No topics yet.");
                    } else {
                        println!("Topics:");
                        for topic in &topics {
                            println!("  {}", topic.name);
                        }
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&Output::new(topics))?);
                }
                OutputFormat::Paths => {
                    for topic in &topics {
                        println!("{}", topic.path);
                    }
                }
            }
        }
        Some(substring) => {
            let (topic, notes) = collect_notes(&store, substring)?;
            match args.format {
                OutputFormat::Human => {
                    if notes.is_empty() {
                        println!("No notes in {}.", topic);
                    } else {
                        println!("Notes in {}:", topic);
                        for note in &notes {
                            println!("  {}", note.display);
                        }
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&Output::new(notes))?);
                }
                OutputFormat::Paths => {
                    for note in &notes {
                        println!("{}", note.path);
                    }
                }
            }
        }
    }

    Ok(())
}
