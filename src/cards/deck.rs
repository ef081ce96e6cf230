//! The deck of cards not yet placed on the map.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::filled::{CardMemento, FilledCard};
use super::function::Function;
use crate::error::RestoreError;
use crate::memento::Originator;

/// Filled cards waiting to be placed, kept in [`FilledCard::compare_to`]
/// order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StoryCards {
    cards: Vec<FilledCard>,
}

impl StoryCards {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One blank card per function.
    pub fn from_functions(functions: impl IntoIterator<Item = Function>) -> Self {
        let mut deck = Self::new();
        for function in functions {
            deck.insert(FilledCard::new(function));
        }
        deck
    }

    /// Add a card, keeping the deck ordered.
    pub fn insert(&mut self, card: FilledCard) {
        let index = self
            .cards
            .partition_point(|c| c.compare_to(&card) != std::cmp::Ordering::Greater);
        self.cards.insert(index, card);
    }

    /// Remove and return the first card for the named function.
    pub fn take(&mut self, function_name: &str) -> Option<FilledCard> {
        let index = self
            .cards
            .iter()
            .position(|c| c.function().name() == function_name)?;
        Some(self.cards.remove(index))
    }

    /// Look at the first card for the named function.
    #[must_use]
    pub fn get(&self, function_name: &str) -> Option<&FilledCard> {
        self.cards.iter().find(|c| c.function().name() == function_name)
    }

    /// Mutable access to the first card for the named function.
    pub fn get_mut(&mut self, function_name: &str) -> Option<&mut FilledCard> {
        self.cards
            .iter_mut()
            .find(|c| c.function().name() == function_name)
    }

    /// Iterate in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &FilledCard> {
        self.cards.iter()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Snapshot of a [`StoryCards`] deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCardsMemento {
    cards: Vec<CardMemento>,
}

impl StoryCardsMemento {
    /// Assemble a snapshot from card snapshots (used by decoders).
    #[must_use]
    pub fn new(cards: Vec<CardMemento>) -> Self {
        Self { cards }
    }

    /// Card snapshots in deck order.
    #[must_use]
    pub fn cards(&self) -> &[CardMemento] {
        &self.cards
    }
}

impl Originator for StoryCards {
    type Memento = StoryCardsMemento;

    fn create_memento(&self) -> StoryCardsMemento {
        StoryCardsMemento {
            cards: self.cards.iter().map(FilledCard::create_memento).collect(),
        }
    }

    fn from_memento(memento: &StoryCardsMemento) -> Result<Self, RestoreError> {
        let mut deck = Self::new();
        for card in &memento.cards {
            deck.insert(FilledCard::from_memento(card)?);
        }
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn functions() -> Vec<Function> {
        vec![
            Function::new(2, "Interdiction"),
            Function::new(1, "Absentation"),
            Function::new(3, "Violation"),
        ]
    }

    #[test]
    fn test_from_functions_is_ordered() {
        let deck = StoryCards::from_functions(functions());
        let numbers: Vec<_> = deck.iter().map(|c| c.function().number()).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_take_and_insert() {
        let mut deck = StoryCards::from_functions(functions());

        let card = deck.take("Interdiction").unwrap();
        assert_eq!(deck.len(), 2);
        assert!(deck.get("Interdiction").is_none());
        assert!(deck.take("Interdiction").is_none());

        deck.insert(card);
        let numbers: Vec<_> = deck.iter().map(|c| c.function().number()).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_functions_keep_insertion_order() {
        let mut deck = StoryCards::new();
        deck.insert(FilledCard::with_text(Function::new(1, "Absentation"), "first"));
        deck.insert(FilledCard::with_text(Function::new(1, "Absentation"), "second"));

        let texts: Vec<_> = deck.iter().map(FilledCard::text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_round_trip() {
        let mut deck = StoryCards::from_functions(functions());
        deck.get_mut("Violation").unwrap().editor_mut().set_text("broken rule");

        let restored = StoryCards::from_memento(&deck.create_memento()).unwrap();
        assert_eq!(restored, deck);
        assert_eq!(restored.get("Violation").unwrap().text(), "broken rule");
    }
}
