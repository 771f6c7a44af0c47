//! Interactive prompting for arguments missing from the command line.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Errors while reading an answer from the user.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended before a line was entered")]
    Eof,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Source of answers for interactive questions.
pub trait Prompter {
    /// Shows informational text ahead of a question.
    fn tell(&mut self, text: &str) -> Result<(), PromptError>;

    /// Asks a question and returns the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter reading from stdin and writing questions to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn tell(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        // A line without its terminator means stdin closed mid-answer.
        if !line.ends_with('\n') {
            return Err(PromptError::Eof);
        }

        Ok(line.trim().to_string())
    }
}
