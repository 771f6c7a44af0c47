//! Topic and note resolution by substring.

use anyhow::{Context, Result, bail};

use crate::store::{NoteStore, StoreResult};

/// Finds the first topic whose name contains `substring`.
///
/// Matching is literal and case-sensitive over the store's sorted listing,
/// so ambiguous input always resolves to the alphabetically first
/// containing topic. An empty substring matches the first topic.
///
/// # Errors
///
/// Returns the store error if the topics cannot be listed.
pub fn find_topic<S: NoteStore + ?Sized>(store: &S, substring: &str) -> StoreResult<Option<String>> {
    Ok(store
        .topics()?
        .into_iter()
        .find(|name| name.contains(substring)))
}

/// Finds the first note file in `topic` whose name contains `substring`.
///
/// Each space in the substring becomes a hyphen before matching, so
/// `"kickoff call"` finds `2024-01-05_kickoff-call.md`. Nothing else is
/// rewritten: leading hyphens and hyphen runs match literally.
///
/// # Errors
///
/// Returns the store error if the topic cannot be listed.
pub fn find_note<S: NoteStore + ?Sized>(
    store: &S,
    topic: &str,
    substring: &str,
) -> StoreResult<Option<String>> {
    let target = substring.replace(' ', "-");
    Ok(store
        .notes(topic)?
        .into_iter()
        .find(|name| name.contains(&target)))
}

/// Resolves a topic substring, failing when nothing matches.
pub(crate) fn resolve_topic<S: NoteStore + ?Sized>(store: &S, substring: &str) -> Result<String> {
    let topic = find_topic(store, substring).with_context(|| "failed to list topics")?;
    match topic {
        Some(topic) => {
            log::debug!("topic '{}' resolved to {}", substring, topic);
            Ok(topic)
        }
        None => bail!("topic not found: '{}'", substring),
    }
}

/// Resolves a note substring within a topic, failing when nothing matches.
pub(crate) fn resolve_note<S: NoteStore + ?Sized>(
    store: &S,
    topic: &str,
    substring: &str,
) -> Result<String> {
    let note = find_note(store, topic, substring)
        .with_context(|| format!("failed to list notes in topic '{}'", topic))?;
    match note {
        Some(note) => {
            log::debug!("note '{}' resolved to {}/{}", substring, topic, note);
            Ok(note)
        }
        None => bail!("note not found in '{}': '{}'", topic, substring),
    }
}
