//! Dispatcher configuration.
//!
//! Configuration is plain data deserialisable from JSON so hosts can ship it
//! alongside their command manifests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::help::domain::PageSize;

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid dispatch configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

/// Configuration for command dispatch.
///
/// # Examples
///
/// ```
/// use corbel::config::DispatchConfig;
///
/// let config = DispatchConfig::default();
/// assert!(config.case_insensitive_paths);
/// assert_eq!(config.help_page_size.get(), 7);
///
/// let lenient = DispatchConfig::lenient();
/// assert!(!lenient.reject_trailing_input);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Whether command path segments are matched case-insensitively.
    pub case_insensitive_paths: bool,
    /// Whether unconsumed input after the last parameter fails a candidate.
    pub reject_trailing_input: bool,
    /// Number of entries per help page.
    pub help_page_size: PageSize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            case_insensitive_paths: true,
            reject_trailing_input: true,
            help_page_size: PageSize::DEFAULT,
        }
    }
}

impl DispatchConfig {
    /// Creates a lenient configuration that ignores trailing input.
    ///
    /// Useful for chat-style front ends where users append free text.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            reject_trailing_input: false,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with exact-case paths.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            case_insensitive_paths: false,
            reject_trailing_input: true,
            help_page_size: PageSize::DEFAULT,
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is not valid JSON or a field
    /// has the wrong shape (including a zero page size).
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::DispatchConfig;
    use rstest::rstest;

    #[rstest]
    fn empty_document_yields_defaults() {
        let config = DispatchConfig::from_json("{}").expect("valid config");
        assert_eq!(config, DispatchConfig::default());
    }

    #[rstest]
    fn partial_document_overrides_named_fields() {
        let config = DispatchConfig::from_json(r#"{"help_page_size": 3, "case_insensitive_paths": false}"#)
            .expect("valid config");

        assert_eq!(config.help_page_size.get(), 3);
        assert!(!config.case_insensitive_paths);
        assert!(config.reject_trailing_input);
    }

    #[rstest]
    fn zero_page_size_is_rejected() {
        let result = DispatchConfig::from_json(r#"{"help_page_size": 0}"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn strict_preset_matches_exact_case() {
        let config = DispatchConfig::strict();
        assert!(!config.case_insensitive_paths);
        assert!(config.reject_trailing_input);
    }
}
