//! Placeholder cards - slots on the story map.
//!
//! A placeholder stands for "a card about this function belongs here". It
//! is either empty or holds exactly one [`FilledCard`], which it owns.
//! The held card's function is independent of the placeholder's own.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::filled::{CardMemento, FilledCard};
use super::function::{Function, FunctionMemento};
use crate::core::{EntityId, EntityKind};
use crate::error::RestoreError;
use crate::memento::Originator;

/// A slot that may hold one filled card.
///
/// "Taken" is derived from the held card, so it can never disagree with
/// it. [`set_held`](Self::set_held) is the only way to change the slot.
///
/// ## Example
///
/// ```
/// use storymap::cards::{FilledCard, Function, PlaceholderCard};
///
/// let mut slot = PlaceholderCard::new(Function::new(1, "Absentation"));
/// assert!(!slot.is_taken());
///
/// let previous = slot.set_held(Some(FilledCard::with_text(Function::new(2, "Interdiction"), "hello")));
/// assert!(previous.is_none());
/// assert!(slot.is_taken());
/// assert_eq!(slot.held().unwrap().text(), "hello");
///
/// let removed = slot.set_held(None);
/// assert!(removed.is_some());
/// assert!(!slot.is_taken());
/// ```
#[derive(Debug)]
pub struct PlaceholderCard {
    id: EntityId,
    function: Function,
    held: Option<FilledCard>,
}

impl PlaceholderCard {
    /// Opacity renderers use for a placeholder, to set it apart from
    /// filled cards.
    pub const OPACITY: f32 = 0.4;

    /// Create an empty placeholder.
    #[must_use]
    pub fn new(function: Function) -> Self {
        Self {
            id: EntityId::new(),
            function,
            held: None,
        }
    }

    /// The held card, if any.
    #[must_use]
    pub fn held(&self) -> Option<&FilledCard> {
        self.held.as_ref()
    }

    /// Mutable access to the held card, for editing its text in place.
    pub fn held_mut(&mut self) -> Option<&mut FilledCard> {
        self.held.as_mut()
    }

    /// Put a card in the slot, or empty it with `None`.
    ///
    /// Returns the card previously held, which the caller now owns.
    #[must_use = "the displaced card is dropped unless the caller keeps it"]
    pub fn set_held(&mut self, card: Option<FilledCard>) -> Option<FilledCard> {
        std::mem::replace(&mut self.held, card)
    }

    /// Remove and return the held card.
    #[must_use = "the removed card is dropped unless the caller keeps it"]
    pub fn take(&mut self) -> Option<FilledCard> {
        self.set_held(None)
    }

    /// Whether a card is held.
    #[must_use]
    pub fn is_taken(&self) -> bool {
        self.held.is_some()
    }
}

impl Card for PlaceholderCard {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::PlaceholderCard
    }

    fn function(&self) -> &Function {
        &self.function
    }
}

impl PartialEq for PlaceholderCard {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function && self.held == other.held
    }
}

impl Eq for PlaceholderCard {}

/// Snapshot of a [`PlaceholderCard`].
///
/// `held` is `None` exactly when the placeholder was empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderMemento {
    function: FunctionMemento,
    #[serde(default)]
    held: Option<CardMemento>,
}

impl PlaceholderMemento {
    /// Assemble a snapshot from raw parts (used by decoders).
    #[must_use]
    pub fn new(function: FunctionMemento, held: Option<CardMemento>) -> Self {
        Self { function, held }
    }

    /// Snapshot of the placeholder's own function.
    #[must_use]
    pub fn function(&self) -> &FunctionMemento {
        &self.function
    }

    /// Snapshot of the held card, if one was held.
    #[must_use]
    pub fn held(&self) -> Option<&CardMemento> {
        self.held.as_ref()
    }
}

impl Originator for PlaceholderCard {
    type Memento = PlaceholderMemento;

    fn create_memento(&self) -> PlaceholderMemento {
        PlaceholderMemento {
            function: self.function.create_memento(),
            held: self.held.as_ref().map(FilledCard::create_memento),
        }
    }

    fn from_memento(memento: &PlaceholderMemento) -> Result<Self, RestoreError> {
        let mut placeholder = Self::new(Function::from_memento(&memento.function)?);
        if let Some(held) = &memento.held {
            let displaced = placeholder.set_held(Some(FilledCard::from_memento(held)?));
            debug_assert!(displaced.is_none());
        }
        Ok(placeholder)
    }
}
