//! Entity identification.
//!
//! Every live card (filled or placeholder) carries an `EntityId` so that
//! notifications can name it. Identities are deliberately outside the
//! value model:
//!
//! - They never take part in equality.
//! - They are never written into a memento.
//! - Restoring a memento yields fresh identities.
//!
//! ```
//! use storymap::core::EntityId;
//!
//! let a = EntityId::new();
//! let b = EntityId::new();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a live card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Allocate a fresh random identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the raw UUID.
    #[must_use]
    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Which kind of live card an [`EntityRef`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A card carrying authored content.
    FilledCard,
    /// A slot that may hold a filled card.
    PlaceholderCard,
}

/// A typed reference to a live card, used as notification source/payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Identity of the card.
    pub id: EntityId,
    /// Kind of the card.
    pub kind: EntityKind,
}

impl EntityRef {
    /// Create a reference.
    #[must_use]
    pub const fn new(id: EntityId, kind: EntityKind) -> Self {
        Self { id, kind }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.id.0)
    }
}
