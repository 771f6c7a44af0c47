//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `nook` binary.
///
/// Ambient configuration (`EDITOR`, `VISUAL`, `NOOK_DIR`, `RUST_LOG`) is
/// cleared so the host environment never leaks into a test. The editor
/// defaults to `true`, which exits immediately.
pub struct NookCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl NookCommand {
    /// Creates a new command for the `nook` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![("EDITOR".to_string(), "true".to_string())],
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs.retain(|(k, _)| k != key);
        self.envs.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Sets the editor command.
    pub fn editor(self, command: impl AsRef<str>) -> Self {
        self.env("EDITOR", command)
    }

    /// Feeds text to the command's stdin (for interactive prompts).
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("nook").expect("Failed to find nook binary");
        for key in ["EDITOR", "VISUAL", "NOOK_DIR", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `new` command.
    pub fn new_note(self) -> Self {
        self.args(["new"])
    }

    /// Configures for the `edit` command.
    pub fn edit(self) -> Self {
        self.args(["edit"])
    }

    /// Configures for the `help` command.
    pub fn help(self) -> Self {
        self.args(["help"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for NookCommand {
    fn default() -> Self {
        Self::new()
    }
}
