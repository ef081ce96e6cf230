//! Whole-application state: the deck plus the map.

use serde::{Deserialize, Serialize};

use super::story_map::{StoryMap, StoryMapMemento};
use crate::cards::{FilledCard, Function, StoryCards, StoryCardsMemento};
use crate::error::{MapError, RestoreError};
use crate::memento::Originator;

/// Everything an author has built: unplaced cards and the map.
///
/// Moving cards between the deck and the map goes through this type so
/// that a card is always in exactly one of them.
#[derive(Debug, PartialEq, Eq)]
pub struct ApplicationState {
    /// Cards not on the map.
    pub deck: StoryCards,
    /// The map being authored.
    pub map: StoryMap,
}

impl ApplicationState {
    /// Fresh state: a blank card and an empty slot for every function.
    pub fn from_functions(title: impl Into<String>, functions: &[Function]) -> Self {
        Self {
            deck: StoryCards::from_functions(functions.iter().cloned()),
            map: StoryMap::from_functions(title, functions.iter().cloned()),
        }
    }

    /// Move the deck's card for `function_name` into slot `index`.
    ///
    /// A card displaced from the slot goes back to the deck. On error
    /// nothing moves.
    pub fn place_from_deck(&mut self, function_name: &str, index: usize) -> Result<(), MapError> {
        self.map.slot(index)?;
        let card = self
            .deck
            .take(function_name)
            .ok_or_else(|| MapError::NotInDeck(function_name.to_string()))?;
        match self.map.place(index, card) {
            Ok(displaced) => {
                if let Some(displaced) = displaced {
                    self.deck.insert(displaced);
                }
                Ok(())
            }
            Err((err, card)) => {
                self.deck.insert(card);
                Err(err)
            }
        }
    }

    /// Move the card in slot `index` back to the deck.
    ///
    /// Returns whether the slot held a card.
    pub fn return_to_deck(&mut self, index: usize) -> Result<bool, MapError> {
        match self.map.clear(index)? {
            Some(card) => {
                self.deck.insert(card);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Every filled card, wherever it is.
    pub fn cards(&self) -> impl Iterator<Item = &FilledCard> {
        self.deck
            .iter()
            .chain(self.map.slots().iter().filter_map(|s| s.held()))
    }
}

/// Snapshot of an [`ApplicationState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMemento {
    deck: StoryCardsMemento,
    map: StoryMapMemento,
}

impl ApplicationMemento {
    /// Assemble a snapshot from raw parts (used by decoders).
    #[must_use]
    pub fn new(deck: StoryCardsMemento, map: StoryMapMemento) -> Self {
        Self { deck, map }
    }

    /// Snapshot of the deck.
    #[must_use]
    pub fn deck(&self) -> &StoryCardsMemento {
        &self.deck
    }

    /// Snapshot of the map.
    #[must_use]
    pub fn map(&self) -> &StoryMapMemento {
        &self.map
    }
}

impl Originator for ApplicationState {
    type Memento = ApplicationMemento;

    fn create_memento(&self) -> ApplicationMemento {
        ApplicationMemento {
            deck: self.deck.create_memento(),
            map: self.map.create_memento(),
        }
    }

    fn from_memento(memento: &ApplicationMemento) -> Result<Self, RestoreError> {
        Ok(Self {
            deck: StoryCards::from_memento(&memento.deck)?,
            map: StoryMap::from_memento(&memento.map)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ApplicationState {
        ApplicationState::from_functions(
            "Cinderella",
            &[
                Function::new(1, "Absentation"),
                Function::new(2, "Interdiction"),
                Function::new(3, "Violation"),
            ],
        )
    }

    #[test]
    fn test_fresh_state() {
        let s = state();
        assert_eq!(s.deck.len(), 3);
        assert_eq!(s.map.len(), 3);
        assert_eq!(s.cards().count(), 3);
    }

    #[test]
    fn test_place_from_deck() {
        let mut s = state();
        s.place_from_deck("Interdiction", 0).unwrap();

        assert_eq!(s.deck.len(), 2);
        assert_eq!(
            s.map.slot(0).unwrap().held().unwrap().editor().function().name(),
            "Interdiction"
        );
        assert_eq!(s.cards().count(), 3);
    }

    #[test]
    fn test_displaced_card_returns_to_deck() {
        let mut s = state();
        s.place_from_deck("Interdiction", 0).unwrap();
        s.place_from_deck("Violation", 0).unwrap();

        assert_eq!(s.deck.len(), 2);
        assert!(s.deck.get("Interdiction").is_some());
        assert_eq!(s.cards().count(), 3);
    }

    #[test]
    fn test_errors_move_nothing() {
        let mut s = state();
        assert_eq!(
            s.place_from_deck("Absentation", 9),
            Err(MapError::SlotOutOfRange { index: 9, len: 3 })
        );
        assert_eq!(
            s.place_from_deck("Villainy", 0),
            Err(MapError::NotInDeck("Villainy".to_string()))
        );
        assert_eq!(s.deck.len(), 3);
        assert_eq!(s.map.taken_count(), 0);
    }

    #[test]
    fn test_return_to_deck() {
        let mut s = state();
        s.place_from_deck("Absentation", 2).unwrap();

        assert!(s.return_to_deck(2).unwrap());
        assert!(!s.return_to_deck(2).unwrap());
        assert_eq!(s.deck.len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let mut s = state();
        s.place_from_deck("Violation", 1).unwrap();
        s.map
            .slot_mut(1)
            .unwrap()
            .held_mut()
            .unwrap()
            .editor_mut()
            .set_text("The rule is broken.");

        let restored = ApplicationState::from_memento(&s.create_memento()).unwrap();
        assert_eq!(restored, s);
    }
}
