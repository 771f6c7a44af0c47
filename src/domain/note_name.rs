//! Note file naming: encoding (date, title) into a file name and back.

use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::infra::{dashify, undashify};

/// File extension shared by every note.
pub const NOTE_EXTENSION: &str = "md";

/// Separator between the date prefix and the title in a dated note name.
pub const DATE_SEPARATOR: char = '_';

/// Date format used for note name prefixes (zero-padded, sorts lexically).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display string for stored names that match neither recognized shape.
pub const UNPARSABLE: &str = "unparsable filename";

static NOTE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:([^_]+)_)?([^_]+)\.md$").unwrap());

/// Error returned when a title cannot be encoded or a file name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoteNameError {
    #[error("note title cannot be empty")]
    EmptyTitle,

    #[error("note title cannot contain '{0}'")]
    ReservedCharacter(char),

    #[error("note title cannot start with '.'")]
    Hidden,

    #[error("not a note file name: {0}")]
    Unrecognized(String),
}

/// The name of a note file: an optional date prefix plus a dashed title.
///
/// Two shapes are recognized:
/// - `<title>.md` for undated notes
/// - `<date>_<title>.md` for dated notes
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nook::domain::NoteName;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let name = NoteName::new("Kickoff Call", Some(date)).unwrap();
/// assert_eq!(name.file_name(), "2024-01-05_Kickoff-Call.md");
/// assert_eq!(name.to_string(), "Kickoff Call (2024-01-05)");
///
/// let parsed: NoteName = "2024-2-1_retro.md".parse().unwrap();
/// assert_eq!(parsed.date(), Some("2024-2-1"));
/// assert_eq!(parsed.to_string(), "retro (2024-2-1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    date: Option<String>,
    title: String,
}

impl NoteName {
    /// Builds a note name from a user-supplied title and optional date.
    ///
    /// The title is normalized with [`dashify`] before validation.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteNameError` if the normalized title is empty, starts
    /// with `.`, or contains the date separator or a path separator.
    pub fn new(title: &str, date: Option<NaiveDate>) -> Result<Self, ParseNoteNameError> {
        let title = dashify(title);
        if title.is_empty() {
            return Err(ParseNoteNameError::EmptyTitle);
        }
        if title.starts_with('.') {
            return Err(ParseNoteNameError::Hidden);
        }
        if let Some(c) = title
            .chars()
            .find(|&c| c == DATE_SEPARATOR || c == '/' || c == '\\')
        {
            return Err(ParseNoteNameError::ReservedCharacter(c));
        }

        Ok(Self {
            date: date.map(|d| d.format(DATE_FORMAT).to_string()),
            title,
        })
    }

    /// Returns the date prefix exactly as stored, if any.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Returns the title in its on-disk (dashed) form.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title with hyphens turned back into spaces.
    pub fn display_title(&self) -> String {
        undashify(&self.title)
    }

    /// Returns the encoded file name.
    pub fn file_name(&self) -> String {
        match &self.date {
            Some(date) => format!(
                "{}{}{}.{}",
                date, DATE_SEPARATOR, self.title, NOTE_EXTENSION
            ),
            None => format!("{}.{}", self.title, NOTE_EXTENSION),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{} ({})", self.display_title(), date),
            None => write!(f, "{}", self.display_title()),
        }
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Lossy stand-in for a name that was not valid UTF-8 on disk.
        if s.contains(char::REPLACEMENT_CHARACTER) {
            return Err(ParseNoteNameError::Unrecognized(s.to_string()));
        }
        let caps = NOTE_NAME_RE
            .captures(s)
            .ok_or_else(|| ParseNoteNameError::Unrecognized(s.to_string()))?;

        Ok(Self {
            date: caps.get(1).map(|m| m.as_str().to_string()),
            title: caps[2].to_string(),
        })
    }
}

/// Encodes a title and optional date into a note file name.
///
/// # Errors
///
/// See [`NoteName::new`].
pub fn encode(title: &str, date: Option<NaiveDate>) -> Result<String, ParseNoteNameError> {
    NoteName::new(title, date).map(|name| name.file_name())
}

/// Decodes a stored file name into its display string.
///
/// Names that match neither recognized shape, or that carry `U+FFFD` from a
/// lossy non-UTF-8 conversion, yield [`UNPARSABLE`], so a listing never
/// aborts on a stray file.
pub fn decode(file_name: &str) -> String {
    file_name
        .parse::<NoteName>()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| UNPARSABLE.to_string())
}
