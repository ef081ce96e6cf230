//! Error types.
//!
//! Every failure is surfaced to the caller. Nothing here substitutes a
//! default value for a failed restore or decode.

use std::path::PathBuf;

use thiserror::Error;

use crate::memento::MementoKind;

/// Reconstructing a live entity from a memento failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// A memento was required but none was supplied.
    #[error("null memento object: expected {expected}")]
    Null {
        /// The kind the caller asked for.
        expected: MementoKind,
    },

    /// A memento of another kind was supplied.
    #[error("wrong type of memento object: expected {expected}, found {found}")]
    WrongType {
        /// The kind the caller asked for.
        expected: MementoKind,
        /// The kind actually supplied.
        found: MementoKind,
    },

    /// The memento is of the right kind but its contents are unusable.
    #[error("malformed {kind} memento: {reason}")]
    Malformed {
        /// Kind of the offending memento.
        kind: MementoKind,
        /// What was wrong with it.
        reason: String,
    },
}

/// A [`Function`](crate::cards::Function) could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    /// The name is empty or whitespace only.
    #[error("function {number} has a blank name")]
    BlankName {
        /// Number of the offending function.
        number: u32,
    },
}

/// Loading a [`FunctionCatalog`](crate::cards::FunctionCatalog) failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two functions share a name.
    #[error("function `{0}` already registered")]
    DuplicateName(String),

    /// The catalog document could not be parsed.
    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reading a tagged document failed.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document contains a tag no codec was registered for.
    #[error("unknown tag `{0}`")]
    UnknownTag(String),

    /// The document is structurally corrupt.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The document parsed, but a memento in it could not be restored.
    #[error(transparent)]
    Restore(#[from] RestoreError),

    /// The underlying reader failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Shorthand for a [`DecodeError::Malformed`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Malformed(err.to_string())
        }
    }
}

/// Writing a tagged document failed.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No codec handles this memento kind.
    #[error("no codec registered for {0}")]
    Unregistered(MementoKind),

    /// Rendering or writing the document failed.
    #[error("write failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Building a [`SnapshotRegistry`](crate::snapshot::SnapshotRegistry) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A codec already owns this tag.
    #[error("tag `{0}` already registered")]
    DuplicateTag(String),

    /// A codec already handles this memento kind.
    #[error("{0} already registered")]
    DuplicateKind(MementoKind),
}

/// A story map operation referred to something that is not there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Slot index past the end of the map.
    #[error("slot {index} out of range (map has {len} slots)")]
    SlotOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slots.
        len: usize,
    },

    /// No card for this function is waiting in the deck.
    #[error("no card for function `{0}` in the deck")]
    NotInDeck(String),
}

/// Saving or loading a file failed.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Transport failure, with the path that was being accessed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The value could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The file contents could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Binary snapshot (de)serialization failed.
    #[error("binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),
}

impl From<RestoreError> for PersistError {
    fn from(err: RestoreError) -> Self {
        Self::Decode(DecodeError::Restore(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_error_messages() {
        let null = RestoreError::Null {
            expected: MementoKind::FilledCard,
        };
        assert_eq!(null.to_string(), "null memento object: expected FilledCard");

        let wrong = RestoreError::WrongType {
            expected: MementoKind::PlaceholderCard,
            found: MementoKind::Function,
        };
        assert!(wrong.to_string().contains("expected PlaceholderCard, found Function"));
    }

    #[test]
    fn test_function_and_catalog_messages() {
        assert_eq!(
            FunctionError::BlankName { number: 3 }.to_string(),
            "function 3 has a blank name"
        );
        assert_eq!(
            CatalogError::DuplicateName("Absentation".to_string()).to_string(),
            "function `Absentation` already registered"
        );
    }

    #[test]
    fn test_json_syntax_error_is_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(DecodeError::from(err), DecodeError::Malformed(_)));
    }

    #[test]
    fn test_restore_error_wraps_into_persist() {
        let err = PersistError::from(RestoreError::Null {
            expected: MementoKind::StoryMap,
        });
        assert!(matches!(err, PersistError::Decode(DecodeError::Restore(_))));
    }
}
