//! NoteStore trait.

use std::path::PathBuf;

use crate::domain::{NoteName, Topic};
use crate::infra::FsError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, FsError>;

/// Storage operations over a tree of topics and notes.
///
/// Listings are returned in byte-wise name order so that first-match
/// resolution is reproducible.
pub trait NoteStore {
    /// Lists topic names.
    fn topics(&self) -> StoreResult<Vec<String>>;

    /// Lists note file names within a topic.
    fn notes(&self, topic: &str) -> StoreResult<Vec<String>>;

    /// Returns the directory of a topic.
    fn topic_path(&self, topic: &str) -> PathBuf;

    /// Returns the full path of a note file.
    fn note_path(&self, topic: &str, file_name: &str) -> PathBuf;

    /// Creates a topic if it doesn't exist yet (idempotent).
    fn create_topic(&self, topic: &Topic) -> StoreResult<PathBuf>;

    /// Creates an empty note file unless one already exists.
    ///
    /// Returns the note's path and whether it was newly created.
    fn create_note(&self, topic: &Topic, name: &NoteName) -> StoreResult<(PathBuf, bool)>;
}
