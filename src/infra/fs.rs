//! File-system primitives for the notes tree.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations on the notes tree.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("path exists but is not a regular file: {path}")]
    NotAFile { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    fn from_walkdir(dir: &Path, error: walkdir::Error) -> Self {
        let path = error.path().unwrap_or(dir).to_path_buf();
        match error.into_io_error() {
            Some(io_err) => FsError::from_io(&path, io_err),
            None => FsError::Io {
                source: io::Error::other("filesystem loop detected"),
                path,
            },
        }
    }
}

/// Kind of directory entry to collect in [`list_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// Lists the immediate children of `dir` of the given kind, sorted by name.
///
/// Hidden entries (starting with `.`, e.g. `.git`) are skipped. File names
/// that are not valid UTF-8 are kept in lossy form (with `U+FFFD`) so they
/// still show up as unparsable notes; such directories are skipped since
/// they cannot be named as topics. Symlinks are classified by their target;
/// broken links are skipped.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
/// Returns `FsError::PermissionDenied` or `FsError::Io` if it cannot be read.
pub fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FsError::from_walkdir(dir, e))?;
        if is_hidden(&entry) || !has_kind(&entry, kind) {
            continue;
        }

        match (entry.file_name().to_str(), kind) {
            (Some(name), _) => names.push(name.to_string()),
            (None, EntryKind::File) => {
                log::warn!("non-UTF-8 note name: {}", entry.path().display());
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            (None, EntryKind::Dir) => {
                log::warn!("skipping non-UTF-8 topic: {}", entry.path().display())
            }
        }
    }

    Ok(names)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .starts_with('.')
}

fn has_kind(entry: &DirEntry, kind: EntryKind) -> bool {
    if entry.path_is_symlink() {
        return match kind {
            EntryKind::Dir => entry.path().is_dir(),
            EntryKind::File => entry.path().is_file(),
        };
    }
    match kind {
        EntryKind::Dir => entry.file_type().is_dir(),
        EntryKind::File => entry.file_type().is_file(),
    }
}

/// Creates a directory and any missing parents.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if something other than a directory
/// already occupies the path, or an I/O error if creation fails.
pub fn ensure_dir(path: &Path) -> Result<(), FsError> {
    if path.exists() && !path.is_dir() {
        return Err(FsError::NotADirectory { path: path.into() });
    }
    std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
}

/// Creates an empty note file if it does not exist yet.
///
/// Existing files are left untouched. Returns `true` when a new file was
/// created and `false` when one was already there.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::NotAFile` if a non-file occupies the path.
pub fn create_note_file(path: &Path) -> Result<bool, FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_file() {
                Ok(false)
            } else {
                Err(FsError::NotAFile { path: path.into() })
            }
        }
        Err(e) => Err(FsError::from_io(path, e)),
    }
}
