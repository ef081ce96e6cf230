//! Filled cards - cards carrying authored content.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::editor::{ContentEditor, EditorMemento};
use super::function::Function;
use crate::core::{EntityId, EntityKind};
use crate::error::RestoreError;
use crate::memento::Originator;
use crate::notify::{Notification, Topic};

/// A card with an editor holding the author's text.
///
/// The function is fixed for the card's lifetime; only the text changes.
/// Equality compares editors (text and function) and ignores identity.
///
/// ## Ordering
///
/// [`compare_to`](Self::compare_to) orders cards by the *reverse* of their
/// functions' natural order. Cards with different text but the same
/// function compare `Equal` there while being unequal, so `FilledCard`
/// does not implement `Ord`.
///
/// ```
/// use std::cmp::Ordering;
/// use storymap::cards::{FilledCard, Function};
///
/// let early = FilledCard::new(Function::new(1, "Absentation"));
/// let late = FilledCard::new(Function::new(2, "Interdiction"));
/// assert_eq!(early.compare_to(&late), Ordering::Greater);
/// ```
///
/// Cards are not `Clone`: a card is owned by exactly one place (the deck
/// or a slot) and moves between them.
#[derive(Debug)]
pub struct FilledCard {
    id: EntityId,
    editor: ContentEditor,
}

impl FilledCard {
    /// Create a card with empty text.
    #[must_use]
    pub fn new(function: Function) -> Self {
        Self::with_text(function, "")
    }

    /// Create a card with initial text.
    #[must_use]
    pub fn with_text(function: Function, text: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            editor: ContentEditor::with_text(function, text),
        }
    }

    /// Read access to the editor.
    #[must_use]
    pub fn editor(&self) -> &ContentEditor {
        &self.editor
    }

    /// Mutable access to the editor, for [`ContentEditor::set_text`].
    pub fn editor_mut(&mut self) -> &mut ContentEditor {
        &mut self.editor
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Order by the reverse of the underlying functions' order.
    ///
    /// The inversion is deliberate: sorting with this comparator puts
    /// later functions first.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        other.function().cmp(self.function())
    }

    /// Notification for the caller to publish once the card exists.
    #[must_use]
    pub fn created(&self) -> Notification {
        Notification::new(Topic::CARD_CREATED, self.entity())
    }
}

impl Card for FilledCard {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::FilledCard
    }

    fn function(&self) -> &Function {
        self.editor.function()
    }
}

impl PartialEq for FilledCard {
    fn eq(&self, other: &Self) -> bool {
        self.editor == other.editor
    }
}

impl Eq for FilledCard {}

impl std::fmt::Display for FilledCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.function(), self.text())
    }
}

/// Snapshot of a [`FilledCard`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMemento {
    editor: EditorMemento,
}

impl CardMemento {
    /// Assemble a snapshot from its editor snapshot (used by decoders).
    #[must_use]
    pub fn new(editor: EditorMemento) -> Self {
        Self { editor }
    }

    /// Snapshot of the editor.
    #[must_use]
    pub fn editor(&self) -> &EditorMemento {
        &self.editor
    }
}

impl Originator for FilledCard {
    type Memento = CardMemento;

    fn create_memento(&self) -> CardMemento {
        CardMemento {
            editor: self.editor.create_memento(),
        }
    }

    fn from_memento(memento: &CardMemento) -> Result<Self, RestoreError> {
        let editor = ContentEditor::from_memento(&memento.editor)?;
        Ok(Self {
            id: EntityId::new(),
            editor,
        })
    }
}
