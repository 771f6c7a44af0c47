//! Configuration file support and runtime settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Editor used when neither the environment nor the config file names one.
pub const DEFAULT_EDITOR: &str = "vim";

/// Directory under the home directory used when no notes directory is configured.
pub const DEFAULT_NOTES_SUBDIR: &str = "notes";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Editor command for editing notes
    pub editor: Option<String>,
}

/// Runtime settings resolved once at startup and passed to every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root directory holding one subdirectory per topic.
    pub notes_dir: PathBuf,

    /// Editor command; may carry arguments (e.g. `code --wait`).
    pub editor: String,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/nook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nook")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument (or `NOOK_DIR`, which clap folds into it)
    /// 2. Config file `dir` setting
    /// 3. `~/notes`
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(DEFAULT_NOTES_SUBDIR)
            })
    }

    /// Resolve the editor command from the process environment.
    ///
    /// Precedence order:
    /// 1. $EDITOR environment variable
    /// 2. $VISUAL environment variable
    /// 3. Config file `editor` setting
    /// 4. "vim" as fallback
    pub fn editor(&self) -> String {
        self.editor_with(|key| std::env::var(key).ok())
    }

    /// Resolve the editor command using the given environment lookup.
    ///
    /// Empty or whitespace-only values are treated as unset.
    pub fn editor_with<F>(&self, env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |s: String| (!s.trim().is_empty()).then_some(s);
        env("EDITOR")
            .and_then(non_blank)
            .or_else(|| env("VISUAL").and_then(non_blank))
            .or_else(|| self.editor.clone().and_then(non_blank))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }

    /// Resolve all runtime settings.
    pub fn settings(&self, cli_dir: Option<&PathBuf>) -> Settings {
        Settings {
            notes_dir: self.notes_dir(cli_dir),
            editor: self.editor(),
        }
    }
}
