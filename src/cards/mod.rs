//! Card system: functions, editors, filled cards and placeholders.
//!
//! ## Key Types
//!
//! - `Function`: Immutable story fact a card is about
//! - `FunctionCatalog`: Function lookup by name
//! - `ContentEditor`: A function plus the author's text
//! - `Card`: Behaviour shared by both card kinds
//! - `FilledCard`: A card carrying authored content
//! - `PlaceholderCard`: A slot holding at most one filled card
//! - `StoryCards`: The deck of cards not yet placed
//!
//! ## Ownership
//!
//! A placeholder owns its held card, and a card owns its editor. Functions
//! are shared immutable values. Moving a card into a slot moves it out of
//! wherever it was before.

pub mod card;
pub mod catalog;
pub mod deck;
pub mod editor;
pub mod filled;
pub mod function;
pub mod placeholder;

pub use card::Card;
pub use catalog::FunctionCatalog;
pub use deck::{StoryCards, StoryCardsMemento};
pub use editor::{ContentEditor, EditorMemento};
pub use filled::{CardMemento, FilledCard};
pub use function::{Function, FunctionMemento, ImageRef};
pub use placeholder::{PlaceholderCard, PlaceholderMemento};
