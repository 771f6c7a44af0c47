//! File I/O and name normalization

mod fs;
mod slug;

pub use fs::{EntryKind, FsError, create_note_file, ensure_dir, list_entries};
pub use slug::{dashify, undashify};
