//! Topic directory name type.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::infra::dashify;

/// The name of a topic directory directly under the notes root.
///
/// # Validation Rules
/// - Non-empty after normalization
/// - No path separators (`/` or `\`)
/// - Must not start with `.` (hidden entries are never topics)
/// - Case-sensitive: `Work` ≠ `work`
///
/// # Normalization
/// - Surrounding whitespace is trimmed
/// - Whitespace runs become a single hyphen
///
/// # Examples
///
/// ```
/// use nook::domain::Topic;
///
/// let topic = Topic::new("Project X").unwrap();
/// assert_eq!(topic.as_str(), "Project-X");
/// assert!(Topic::new("a/b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic(String);

/// Error returned when parsing an invalid topic name.
#[derive(Debug, Clone)]
pub struct ParseTopicError(String);

impl fmt::Display for ParseTopicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTopicError {}

impl Topic {
    /// Creates a new Topic from user input, normalizing spaces to hyphens.
    ///
    /// # Errors
    ///
    /// Returns `ParseTopicError` if:
    /// - The name is empty or whitespace-only
    /// - The name contains a path separator
    /// - The name starts with `.`
    pub fn new(name: &str) -> Result<Self, ParseTopicError> {
        let normalized = dashify(name);

        if normalized.is_empty() {
            return Err(ParseTopicError("topic name cannot be empty".to_string()));
        }

        if normalized.contains(['/', '\\']) {
            return Err(ParseTopicError(format!(
                "invalid topic '{}': topic names cannot contain path separators",
                normalized
            )));
        }

        if normalized.starts_with('.') {
            return Err(ParseTopicError(format!(
                "invalid topic '{}': topic names cannot start with '.'",
                normalized
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the directory name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic(\"{}\")", self.0)
    }
}

impl FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
