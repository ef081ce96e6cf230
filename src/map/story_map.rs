//! The story map: an ordered row of placeholder slots.

use serde::{Deserialize, Serialize};

use crate::cards::{FilledCard, Function, PlaceholderCard, PlaceholderMemento};
use crate::error::{MapError, RestoreError};
use crate::memento::Originator;

/// A titled sequence of placeholder slots.
#[derive(Debug, PartialEq, Eq)]
pub struct StoryMap {
    title: String,
    slots: Vec<PlaceholderCard>,
}

impl StoryMap {
    /// Create a map with no slots.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slots: Vec::new(),
        }
    }

    /// One empty slot per function, in the order given.
    pub fn from_functions(
        title: impl Into<String>,
        functions: impl IntoIterator<Item = Function>,
    ) -> Self {
        let mut map = Self::new(title);
        map.slots = functions.into_iter().map(PlaceholderCard::new).collect();
        map
    }

    /// Map title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the map.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append an empty slot.
    pub fn push_slot(&mut self, function: Function) {
        self.slots.push(PlaceholderCard::new(function));
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[PlaceholderCard] {
        &self.slots
    }

    /// One slot.
    pub fn slot(&self, index: usize) -> Result<&PlaceholderCard, MapError> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(MapError::SlotOutOfRange { index, len })
    }

    /// One slot, mutably.
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut PlaceholderCard, MapError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(MapError::SlotOutOfRange { index, len })
    }

    /// Put a card in a slot, returning whatever it displaced.
    ///
    /// On an out-of-range index the card comes back alongside the error.
    /// [`ApplicationState::place_from_deck`] is the deck-aware variant.
    ///
    /// [`ApplicationState::place_from_deck`]: super::ApplicationState::place_from_deck
    pub fn place(
        &mut self,
        index: usize,
        card: FilledCard,
    ) -> Result<Option<FilledCard>, (MapError, FilledCard)> {
        match self.slot_mut(index) {
            Ok(slot) => Ok(slot.set_held(Some(card))),
            Err(err) => Err((err, card)),
        }
    }

    /// Empty a slot, returning the card it held.
    pub fn clear(&mut self, index: usize) -> Result<Option<FilledCard>, MapError> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the map has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn taken_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_taken()).count()
    }

    /// Whether every slot holds a card.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(PlaceholderCard::is_taken)
    }
}

/// Snapshot of a [`StoryMap`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryMapMemento {
    title: String,
    slots: Vec<PlaceholderMemento>,
}

impl StoryMapMemento {
    /// Assemble a snapshot from raw parts (used by decoders).
    #[must_use]
    pub fn new(title: String, slots: Vec<PlaceholderMemento>) -> Self {
        Self { title, slots }
    }

    /// Captured title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Slot snapshots in order.
    #[must_use]
    pub fn slots(&self) -> &[PlaceholderMemento] {
        &self.slots
    }
}

impl Originator for StoryMap {
    type Memento = StoryMapMemento;

    fn create_memento(&self) -> StoryMapMemento {
        StoryMapMemento {
            title: self.title.clone(),
            slots: self
                .slots
                .iter()
                .map(PlaceholderCard::create_memento)
                .collect(),
        }
    }

    fn from_memento(memento: &StoryMapMemento) -> Result<Self, RestoreError> {
        let slots = memento
            .slots
            .iter()
            .map(PlaceholderCard::from_memento)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            title: memento.title.clone(),
            slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> StoryMap {
        StoryMap::from_functions(
            "Cinderella",
            vec![
                Function::new(1, "Absentation"),
                Function::new(2, "Interdiction"),
            ],
        )
    }

    #[test]
    fn test_from_functions() {
        let m = map();
        assert_eq!(m.title(), "Cinderella");
        assert_eq!(m.len(), 2);
        assert_eq!(m.taken_count(), 0);
        assert!(!m.is_complete());
    }

    #[test]
    fn test_place_and_clear() {
        let mut m = map();
        let displaced = m
            .place(0, FilledCard::with_text(Function::new(1, "Absentation"), "gone"))
            .unwrap();
        assert!(displaced.is_none());
        assert_eq!(m.taken_count(), 1);

        let cleared = m.clear(0).unwrap().unwrap();
        assert_eq!(cleared.text(), "gone");
        assert_eq!(m.taken_count(), 0);
    }

    #[test]
    fn test_place_out_of_range_returns_card() {
        let mut m = map();
        let (err, card) = m
            .place(5, FilledCard::with_text(Function::new(1, "Absentation"), "kept"))
            .unwrap_err();
        assert_eq!(err, MapError::SlotOutOfRange { index: 5, len: 2 });
        assert_eq!(card.text(), "kept");
    }

    #[test]
    fn test_complete() {
        let mut m = map();
        m.place(0, FilledCard::new(Function::new(1, "Absentation"))).unwrap();
        m.place(1, FilledCard::new(Function::new(2, "Interdiction"))).unwrap();
        assert!(m.is_complete());
    }

    #[test]
    fn test_round_trip() {
        let mut m = map();
        m.place(1, FilledCard::with_text(Function::new(2, "Interdiction"), "don't"))
            .unwrap();

        let restored = StoryMap::from_memento(&m.create_memento()).unwrap();
        assert_eq!(restored, m);
        assert!(!restored.slot(0).unwrap().is_taken());
        assert_eq!(restored.slot(1).unwrap().held().unwrap().text(), "don't");
    }
}
