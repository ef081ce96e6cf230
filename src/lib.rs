//! # storymap
//!
//! Authoring core for story maps: a deck of cards, one per narrative
//! function, that an author fills with text and places into ordered slots.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not graphs**: Every entity can produce a memento of its
//!    logical state and be rebuilt from one. Identity is not part of a
//!    memento; a restored entity is a fresh one.
//!
//! 2. **Explicit registry**: Wire tags map to codecs through a
//!    [`SnapshotRegistry`] built at startup and passed by reference. There
//!    is no global table.
//!
//! 3. **No hidden side effects**: Constructing a card publishes nothing.
//!    Notifications are values the caller hands to a [`NotificationBus`].
//!
//! ## Modules
//!
//! - `core`: Entity identity and session configuration
//! - `cards`: Functions, editors, filled cards, placeholders and the deck
//! - `map`: The story map and the whole application state
//! - `memento`: Originator/memento snapshot protocol
//! - `snapshot`: Tagged documents and the codec registry
//! - `notify`: Lifecycle notifications and the in-process bus
//! - `history`: Bounded undo/redo
//! - `persist`: Reading and writing snapshot files
//! - `session`: Live state plus history, notifications and persistence
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod history;
pub mod map;
pub mod memento;
pub mod notify;
pub mod persist;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{DocumentFormat, EntityId, EntityKind, EntityRef, SessionConfig};

pub use crate::cards::{
    Card, CardMemento, ContentEditor, EditorMemento, FilledCard, Function, FunctionCatalog,
    FunctionMemento, ImageRef, PlaceholderCard, PlaceholderMemento, StoryCards, StoryCardsMemento,
};

pub use crate::map::{ApplicationMemento, ApplicationState, StoryMap, StoryMapMemento};

pub use crate::memento::{Memento, MementoKind, MementoVariant, Originator};

pub use crate::snapshot::{Codec, Fields, Node, SnapshotRegistry, Value};

pub use crate::notify::{Messenger, Notification, NotificationBus, Topic};

pub use crate::history::History;

pub use crate::session::Session;

pub use crate::error::{
    CatalogError, DecodeError, EncodeError, FunctionError, MapError, PersistError, RegistryError,
    RestoreError,
};
