//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::NookCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes root.
///
/// Layout inside the temp directory:
/// - `notes/`  the notes root passed via `--dir`
/// - `config/` used as `XDG_CONFIG_HOME` so no real config file is read
/// - `bin/`    scratch space for stand-in editor scripts
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    base: PathBuf,
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path().to_path_buf();
        let notes_dir = base.join("notes");
        fs::create_dir_all(&notes_dir).expect("Failed to create notes dir");
        fs::create_dir_all(base.join("config")).expect("Failed to create config dir");
        fs::create_dir_all(base.join("bin")).expect("Failed to create bin dir");
        Self {
            _temp_dir: temp_dir,
            base,
            notes_dir,
        }
    }

    /// Returns the path to the notes root.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.base.join("config")
    }

    /// Creates a topic directory and returns its path.
    pub fn add_topic(&self, name: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        fs::create_dir_all(&path).expect("Failed to create topic");
        path
    }

    /// Writes a note file (creating its topic) and returns its path.
    pub fn add_note(&self, topic: &str, file_name: &str, content: &str) -> PathBuf {
        let path = self.add_topic(topic).join(file_name);
        fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Lists the file names in a topic, sorted.
    pub fn note_files(&self, topic: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.notes_dir.join(topic))
            .expect("Failed to read topic")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Writes an executable editor script that appends `marker` to the file it opens.
    ///
    /// Returns the script path, suitable for `NookCommand::editor`.
    #[cfg(unix)]
    pub fn marking_editor(&self, marker: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.base.join("bin").join("mark-editor");
        let script = format!("#!/bin/sh\necho '{}' >> \"$1\"\n", marker);
        fs::write(&path, script).expect("Failed to write editor script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make editor executable");
        path
    }

    /// Creates a NookCommand configured for this test environment.
    pub fn cmd(&self) -> NookCommand {
        self.cmd_without_dir().dir(&self.notes_dir)
    }

    /// Creates a NookCommand without `--dir`, isolated from the real config.
    pub fn cmd_without_dir(&self) -> NookCommand {
        NookCommand::new()
            .env("XDG_CONFIG_HOME", self.config_home().to_string_lossy())
            .env("HOME", self.base.to_string_lossy())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
