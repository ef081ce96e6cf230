//! Snapshot (memento) model.
//!
//! Each live entity type is an [`Originator`]: it can produce an immutable
//! snapshot of itself and be rebuilt from one. Per-type snapshots are plain
//! owned values that never point back into the live entity. They are also
//! gathered into the closed sum type [`Memento`] so that type-directed code
//! (the snapshot registry, the binary format) can handle any of them.
//!
//! ## Restore paths
//!
//! - Typed: [`Originator::from_memento`] takes the entity's own memento
//!   type, so passing the wrong kind does not compile.
//! - Dynamic: [`Originator::restore`] takes `Option<&Memento>` and reports
//!   [`RestoreError::Null`] or [`RestoreError::WrongType`].
//!
//! ```
//! use storymap::cards::{FilledCard, Function};
//! use storymap::memento::Originator;
//!
//! let card = FilledCard::with_text(Function::new(1, "Absentation"), "Grandma leaves");
//! let snapshot = card.snapshot();
//! let restored = FilledCard::restore(Some(&snapshot)).unwrap();
//! assert_eq!(restored, card);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardMemento, EditorMemento, FunctionMemento, PlaceholderMemento, StoryCardsMemento};
use crate::error::RestoreError;
use crate::map::{ApplicationMemento, StoryMapMemento};

/// The kinds of snapshot the crate knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MementoKind {
    /// [`FunctionMemento`]
    Function,
    /// [`EditorMemento`]
    ContentEditor,
    /// [`CardMemento`]
    FilledCard,
    /// [`PlaceholderMemento`]
    PlaceholderCard,
    /// [`StoryCardsMemento`]
    StoryCards,
    /// [`StoryMapMemento`]
    StoryMap,
    /// [`ApplicationMemento`]
    ApplicationState,
}

impl MementoKind {
    /// Every kind, leaves first.
    pub const ALL: [MementoKind; 7] = [
        Self::Function,
        Self::ContentEditor,
        Self::FilledCard,
        Self::PlaceholderCard,
        Self::StoryCards,
        Self::StoryMap,
        Self::ApplicationState,
    ];

    /// Human-readable name, also the default wire tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::ContentEditor => "ContentEditor",
            Self::FilledCard => "FilledCard",
            Self::PlaceholderCard => "PlaceholderCard",
            Self::StoryCards => "StoryCards",
            Self::StoryMap => "StoryMap",
            Self::ApplicationState => "ApplicationState",
        }
    }
}

impl std::fmt::Display for MementoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Any snapshot, as a closed tagged union.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Memento {
    /// Snapshot of a [`Function`](crate::cards::Function).
    Function(FunctionMemento),
    /// Snapshot of a [`ContentEditor`](crate::cards::ContentEditor).
    ContentEditor(EditorMemento),
    /// Snapshot of a [`FilledCard`](crate::cards::FilledCard).
    FilledCard(CardMemento),
    /// Snapshot of a [`PlaceholderCard`](crate::cards::PlaceholderCard).
    PlaceholderCard(PlaceholderMemento),
    /// Snapshot of the card deck.
    StoryCards(StoryCardsMemento),
    /// Snapshot of a [`StoryMap`](crate::map::StoryMap).
    StoryMap(StoryMapMemento),
    /// Snapshot of the whole [`ApplicationState`](crate::map::ApplicationState).
    ApplicationState(ApplicationMemento),
}

impl Memento {
    /// Which kind of snapshot this is.
    #[must_use]
    pub const fn kind(&self) -> MementoKind {
        match self {
            Self::Function(_) => MementoKind::Function,
            Self::ContentEditor(_) => MementoKind::ContentEditor,
            Self::FilledCard(_) => MementoKind::FilledCard,
            Self::PlaceholderCard(_) => MementoKind::PlaceholderCard,
            Self::StoryCards(_) => MementoKind::StoryCards,
            Self::StoryMap(_) => MementoKind::StoryMap,
            Self::ApplicationState(_) => MementoKind::ApplicationState,
        }
    }
}

/// A per-type snapshot that is one variant of [`Memento`].
pub trait MementoVariant: Clone + Into<Memento> {
    /// The variant this type occupies.
    const KIND: MementoKind;

    /// Borrow the typed snapshot out of a [`Memento`].
    fn from_memento(memento: &Memento) -> Result<&Self, RestoreError>;

    /// Take the typed snapshot out of a [`Memento`].
    fn try_from_memento(memento: Memento) -> Result<Self, RestoreError>;
}

macro_rules! memento_variant {
    ($ty:ty, $variant:ident) => {
        impl MementoVariant for $ty {
            const KIND: MementoKind = MementoKind::$variant;

            fn from_memento(memento: &Memento) -> Result<&Self, RestoreError> {
                match memento {
                    Memento::$variant(m) => Ok(m),
                    other => Err(RestoreError::WrongType {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }

            fn try_from_memento(memento: Memento) -> Result<Self, RestoreError> {
                match memento {
                    Memento::$variant(m) => Ok(m),
                    other => Err(RestoreError::WrongType {
                        expected: Self::KIND,
                        found: other.kind(),
                    }),
                }
            }
        }

        impl From<$ty> for Memento {
            fn from(m: $ty) -> Self {
                Memento::$variant(m)
            }
        }
    };
}

memento_variant!(FunctionMemento, Function);
memento_variant!(EditorMemento, ContentEditor);
memento_variant!(CardMemento, FilledCard);
memento_variant!(PlaceholderMemento, PlaceholderCard);
memento_variant!(StoryCardsMemento, StoryCards);
memento_variant!(StoryMapMemento, StoryMap);
memento_variant!(ApplicationMemento, ApplicationState);

/// An entity that can be captured in, and rebuilt from, a snapshot.
///
/// Producing a snapshot never mutates the entity. Restoring builds a new
/// entity that compares equal to the one the snapshot was taken from.
pub trait Originator: Sized {
    /// The entity's own snapshot type.
    type Memento: MementoVariant;

    /// Capture the current state.
    fn create_memento(&self) -> Self::Memento;

    /// Rebuild an entity from its own snapshot type.
    fn from_memento(memento: &Self::Memento) -> Result<Self, RestoreError>;

    /// Capture the current state as a [`Memento`].
    fn snapshot(&self) -> Memento {
        self.create_memento().into()
    }

    /// Rebuild an entity from an optional, dynamically typed snapshot.
    fn restore(memento: Option<&Memento>) -> Result<Self, RestoreError> {
        let expected = <Self::Memento as MementoVariant>::KIND;
        let result = match memento {
            None => Err(RestoreError::Null { expected }),
            Some(m) => <Self::Memento as MementoVariant>::from_memento(m).and_then(Self::from_memento),
        };
        if let Err(err) = &result {
            tracing::warn!(%expected, %err, "restore failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{FilledCard, Function, PlaceholderCard};

    #[test]
    fn test_kind_names_are_distinct() {
        let mut names: Vec<_> = MementoKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MementoKind::ALL.len());
    }

    #[test]
    fn test_variant_mismatch() {
        let snapshot = Function::new(1, "Absentation").snapshot();
        let err = CardMemento::from_memento(&snapshot).unwrap_err();
        assert_eq!(
            err,
            RestoreError::WrongType {
                expected: MementoKind::FilledCard,
                found: MementoKind::Function,
            }
        );
    }

    #[test]
    fn test_restore_null() {
        assert_eq!(
            FilledCard::restore(None).unwrap_err(),
            RestoreError::Null {
                expected: MementoKind::FilledCard
            }
        );
        assert_eq!(
            PlaceholderCard::restore(None).unwrap_err(),
            RestoreError::Null {
                expected: MementoKind::PlaceholderCard
            }
        );
    }

    #[test]
    fn test_restore_wrong_type() {
        let snapshot = FilledCard::new(Function::new(2, "Interdiction")).snapshot();
        let err = PlaceholderCard::restore(Some(&snapshot)).unwrap_err();
        assert!(matches!(err, RestoreError::WrongType { .. }));
    }

    #[test]
    fn test_memento_kind() {
        let snapshot = PlaceholderCard::new(Function::new(3, "Violation")).snapshot();
        assert_eq!(snapshot.kind(), MementoKind::PlaceholderCard);
    }
}
