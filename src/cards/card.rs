//! Behaviour shared by both card kinds.

use super::function::Function;
use crate::core::{EntityId, EntityKind, EntityRef};
use crate::notify::{Notification, Topic};

/// A card on the story map: a function with a live identity.
///
/// Implemented by [`FilledCard`](super::FilledCard) and
/// [`PlaceholderCard`](super::PlaceholderCard). Placement, scaling and
/// fading are the renderer's business, not this trait's.
pub trait Card {
    /// Live identity of this card.
    fn id(&self) -> EntityId;

    /// Which card kind this is.
    fn kind(&self) -> EntityKind;

    /// The function this card is about.
    fn function(&self) -> &Function;

    /// Typed reference for use in notifications.
    fn entity(&self) -> EntityRef {
        EntityRef::new(self.id(), self.kind())
    }

    /// Notification for the interaction layer to publish when the author
    /// double-clicks the card.
    fn activated(&self) -> Notification {
        Notification::new(Topic::CARD_ACTIVATED, self.entity())
    }
}
