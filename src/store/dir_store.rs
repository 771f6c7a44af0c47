//! Directory-backed note store.

use std::path::{Path, PathBuf};

use super::{NoteStore, StoreResult};
use crate::domain::{NoteName, Topic};
use crate::infra::{EntryKind, create_note_file, ensure_dir, list_entries};

/// A note store rooted at a directory on disk.
///
/// Layout: `<root>/<topic>/<note-file>.md`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Creates a store rooted at the given directory. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the notes root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NoteStore for DirStore {
    fn topic_path(&self, topic: &str) -> PathBuf {
        self.root.join(topic)
    }

    fn topics(&self) -> StoreResult<Vec<String>> {
        list_entries(&self.root, EntryKind::Dir)
    }

    fn notes(&self, topic: &str) -> StoreResult<Vec<String>> {
        list_entries(&self.topic_path(topic), EntryKind::File)
    }

    fn note_path(&self, topic: &str, file_name: &str) -> PathBuf {
        self.topic_path(topic).join(file_name)
    }

    fn create_topic(&self, topic: &Topic) -> StoreResult<PathBuf> {
        let dir = self.topic_path(topic.as_str());
        ensure_dir(&dir)?;
        log::debug!("topic directory ready: {}", dir.display());
        Ok(dir)
    }

    fn create_note(&self, topic: &Topic, name: &NoteName) -> StoreResult<(PathBuf, bool)> {
        let path = self.note_path(topic.as_str(), &name.file_name());
        let created = create_note_file(&path)?;
        if created {
            log::debug!("created note file: {}", path.display());
        } else {
            log::info!("note already exists, reusing: {}", path.display());
        }
        Ok((path, created))
    }
}
