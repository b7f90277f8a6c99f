//! Validated command paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CommandDomainError;

/// Maximum number of literal segments in a command path.
const MAX_DEPTH: usize = 16;

/// Ordered, non-empty sequence of literal segments naming a command.
///
/// Segments are trimmed, lowercased and limited to ASCII alphanumerics,
/// `-` and `_`. `user ban` and `config reload` are two-segment paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    /// Parses a whitespace-separated path such as `"user ban"`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError`] when the path is empty, too deep, or a
    /// segment contains invalid characters.
    pub fn parse(raw: &str) -> Result<Self, CommandDomainError> {
        Self::from_segments(raw.split_whitespace())
    }

    /// Creates a path from individual segments.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::EmptyPath`] when no segments are given,
    /// [`CommandDomainError::PathTooDeep`] beyond sixteen segments, or
    /// [`CommandDomainError::InvalidPathSegment`] for a malformed segment.
    pub fn from_segments<S>(segments: impl IntoIterator<Item = S>) -> Result<Self, CommandDomainError>
    where
        S: AsRef<str>,
    {
        let normalized = segments
            .into_iter()
            .map(|segment| normalize_segment(segment.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if normalized.is_empty() {
            return Err(CommandDomainError::EmptyPath);
        }
        if normalized.len() > MAX_DEPTH {
            return Err(CommandDomainError::PathTooDeep(normalized.join(" ")));
        }
        Ok(Self(normalized))
    }

    /// Builds a lookup key from input tokens without normalisation.
    ///
    /// Keys built this way only ever compare against registered paths, so an
    /// invalid token simply fails to match.
    pub(crate) fn lookup_key(tokens: &[String], fold_case: bool) -> Self {
        let segments = tokens
            .iter()
            .map(|token| {
                if fold_case {
                    token.to_ascii_lowercase()
                } else {
                    token.clone()
                }
            })
            .collect();
        Self(segments)
    }

    /// Returns the literal segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns the path without its last segment, or `None` for a
    /// single-segment path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Returns whether `self` begins with every segment of `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns whether `self` is nested strictly below `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        self.depth() > ancestor.depth() && self.starts_with(ancestor)
    }
}

fn normalize_segment(segment: &str) -> Result<String, CommandDomainError> {
    let normalized = segment.trim().to_ascii_lowercase();
    let is_valid = !normalized.is_empty()
        && normalized
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'));
    if is_valid {
        Ok(normalized)
    } else {
        Err(CommandDomainError::InvalidPathSegment(segment.to_owned()))
    }
}

impl TryFrom<String> for CommandPath {
    type Error = CommandDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CommandPath> for String {
    fn from(value: CommandPath) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
