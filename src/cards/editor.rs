//! Content editor - the authored text attached to a function.

use serde::{Deserialize, Serialize};

use super::function::{Function, FunctionMemento};
use crate::error::RestoreError;
use crate::memento::Originator;

/// A function plus the free text the author wrote for it.
///
/// Any text is accepted, including the empty string. Two editors are equal
/// when their texts and their functions are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEditor {
    function: Function,
    text: String,
}

impl ContentEditor {
    /// Create an editor with empty text.
    #[must_use]
    pub fn new(function: Function) -> Self {
        Self::with_text(function, "")
    }

    /// Create an editor with initial text.
    #[must_use]
    pub fn with_text(function: Function, text: impl Into<String>) -> Self {
        Self {
            function,
            text: text.into(),
        }
    }

    /// The function being written about.
    #[must_use]
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Snapshot of a [`ContentEditor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorMemento {
    function: FunctionMemento,
    text: String,
}

impl EditorMemento {
    /// Assemble a snapshot from raw parts (used by decoders).
    #[must_use]
    pub fn new(function: FunctionMemento, text: String) -> Self {
        Self { function, text }
    }

    /// Snapshot of the function.
    #[must_use]
    pub fn function(&self) -> &FunctionMemento {
        &self.function
    }

    /// Captured text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Originator for ContentEditor {
    type Memento = EditorMemento;

    fn create_memento(&self) -> EditorMemento {
        EditorMemento {
            function: self.function.create_memento(),
            text: self.text.clone(),
        }
    }

    fn from_memento(memento: &EditorMemento) -> Result<Self, RestoreError> {
        let function = Function::from_memento(&memento.function)?;
        Ok(Self::with_text(function, memento.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ImageRef;

    fn absentation() -> Function {
        Function::new(1, "Absentation")
    }

    #[test]
    fn test_new_has_empty_text() {
        let editor = ContentEditor::new(absentation());
        assert_eq!(editor.text(), "");
        assert_eq!(editor.function().name(), "Absentation");
    }

    #[test]
    fn test_set_text() {
        let mut editor = ContentEditor::new(absentation());
        editor.set_text("Once upon a time");
        assert_eq!(editor.text(), "Once upon a time");
        editor.set_text("");
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_equality() {
        let a = ContentEditor::with_text(absentation(), "hello");
        let b = ContentEditor::with_text(absentation(), "hello");
        let different_text = ContentEditor::with_text(absentation(), "bye");
        let different_function = ContentEditor::with_text(Function::new(2, "Interdiction"), "hello");

        assert_eq!(a, b);
        assert_ne!(a, different_text);
        assert_ne!(a, different_function);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut editor = ContentEditor::with_text(absentation(), "before");
        let memento = editor.create_memento();
        editor.set_text("after");

        assert_eq!(memento.text(), "before");
        let restored = ContentEditor::from_memento(&memento).unwrap();
        assert_eq!(restored.text(), "before");
    }

    #[test]
    fn test_round_trip() {
        let editor = ContentEditor::with_text(absentation(), "multi\nline\ttext");
        let restored = ContentEditor::from_memento(&editor.create_memento()).unwrap();
        assert_eq!(editor, restored);
    }

    #[test]
    fn test_malformed_function_propagates() {
        let memento = EditorMemento::new(
            FunctionMemento::new(1, String::new(), String::new(), ImageRef::default()),
            "text".to_string(),
        );
        assert!(matches!(
            ContentEditor::from_memento(&memento),
            Err(RestoreError::Malformed { .. })
        ));
    }
}
