//! Session configuration.
//!
//! Applications configure a [`Session`](crate::session::Session) at startup
//! with a `SessionConfig`. Every field has a sensible default; the builder
//! methods override individual settings.

use serde::{Deserialize, Serialize};

/// On-disk format used by `save`/`load`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// Tagged tree document rendered as JSON (human-readable).
    #[default]
    Tagged,
    /// Compact bincode encoding of the memento tree.
    Binary,
}

impl DocumentFormat {
    /// File extension conventionally used for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tagged => "json",
            Self::Binary => "bin",
        }
    }
}

/// Configuration for an editing session.
///
/// ## Example
///
/// ```
/// use storymap::core::{DocumentFormat, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_history_limit(20)
///     .with_format(DocumentFormat::Binary);
///
/// assert_eq!(config.history_limit, 20);
/// assert!(config.pretty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of undo steps kept. Oldest entries are evicted first.
    pub history_limit: usize,

    /// Pretty-print tagged documents.
    pub pretty: bool,

    /// File name prefix for autosaves.
    pub autosave_prefix: String,

    /// Format used by `save` and `load`.
    pub format: DocumentFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 100,
            pretty: true,
            autosave_prefix: "storymap".to_string(),
            format: DocumentFormat::default(),
        }
    }
}

impl SessionConfig {
    /// Set the undo history limit.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Enable or disable pretty printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the autosave file prefix.
    #[must_use]
    pub fn with_autosave_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.autosave_prefix = prefix.into();
        self
    }

    /// Set the document format.
    #[must_use]
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_limit, 100);
        assert!(config.pretty);
        assert_eq!(config.autosave_prefix, "storymap");
        assert_eq!(config.format, DocumentFormat::Tagged);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_history_limit(3)
            .with_pretty(false)
            .with_autosave_prefix("lesson")
            .with_format(DocumentFormat::Binary);

        assert_eq!(config.history_limit, 3);
        assert!(!config.pretty);
        assert_eq!(config.autosave_prefix, "lesson");
        assert_eq!(config.format.extension(), "bin");
    }

    #[test]
    fn test_config_serialization() {
        let config = SessionConfig::default().with_history_limit(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
