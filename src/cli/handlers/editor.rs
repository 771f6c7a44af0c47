//! Launching the user's editor on a note.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Editor launched as a child process sharing this process's terminal.
pub(crate) struct CommandEditor<'a> {
    command: &'a str,
}

impl<'a> CommandEditor<'a> {
    pub(crate) fn new(command: &'a str) -> Self {
        Self { command }
    }
}

impl EditorLauncher for CommandEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        // Parse editor command (may include args like "code --wait")
        let parts: Vec<&str> = self.command.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        log::debug!("launching editor: {} {}", self.command, path.display());

        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", self.command))?;

        if !status.success() {
            bail!("editor '{}' exited with {}", self.command, status);
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_editor_returns_ok() {
        assert!(CommandEditor::new("true").open(Path::new("/tmp/x.md")).is_ok());
    }

    #[test]
    fn failing_editor_reports_status() {
        let err = CommandEditor::new("false")
            .open(Path::new("/tmp/x.md"))
            .unwrap_err();
        assert!(err.to_string().contains("editor 'false' exited with"));
    }

    #[test]
    fn missing_editor_reports_launch_failure() {
        let err = CommandEditor::new("nook-no-such-editor-binary")
            .open(Path::new("/tmp/x.md"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to launch editor"));
    }

    #[test]
    fn editor_arguments_are_passed_before_path() {
        // `test -n <path>` succeeds only when both words reach the child.
        assert!(CommandEditor::new("test -n").open(Path::new("/tmp/x.md")).is_ok());
    }

    #[test]
    fn blank_editor_is_rejected() {
        let err = CommandEditor::new("   ").open(Path::new("/tmp/x.md")).unwrap_err();
        assert_eq!(err.to_string(), "editor command is empty");
    }
}
