//! Functions - the immutable story facts cards are built around.
//!
//! A `Function` is a narrative building block ("Absentation", "Villainy",
//! ...) with a position in the canonical sequence, a description and an
//! illustration. Cards reference functions by value; the data sits behind
//! an `Arc` so that any number of cards can share one function without
//! anyone holding a mutable reference to it.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FunctionError, RestoreError};
use crate::memento::{MementoKind, Originator};

/// Reference to an illustration resource. Loading it is up to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Create an image reference from a resource path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The resource path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Whether no illustration is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every live `Function` has a non-blank name, so every snapshot of one
/// restores.
fn check_name(number: u32, name: &str) -> Result<(), FunctionError> {
    if name.trim().is_empty() {
        return Err(FunctionError::BlankName { number });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FunctionData {
    number: u32,
    name: String,
    description: String,
    image: ImageRef,
}

/// An immutable story function.
///
/// Equality is structural. The natural order is by `number`, then by the
/// remaining fields, so it is total and agrees with equality.
///
/// ## Example
///
/// ```
/// use storymap::cards::Function;
///
/// let absentation = Function::new(1, "Absentation")
///     .with_description("A member of the family leaves home.")
///     .with_image("/storymaps/data/absentation.png");
/// let interdiction = Function::new(2, "Interdiction");
///
/// assert!(absentation < interdiction);
/// assert_eq!(absentation.name(), "Absentation");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "FunctionMemento", into = "FunctionMemento")]
pub struct Function {
    data: Arc<FunctionData>,
}

impl Function {
    /// Create a function with an empty description and no illustration.
    ///
    /// Panics if the name is blank; use [`try_new`](Self::try_new) for
    /// names that come from input.
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        match Self::try_new(number, name) {
            Ok(function) => function,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a function, rejecting a blank name.
    pub fn try_new(number: u32, name: impl Into<String>) -> Result<Self, FunctionError> {
        let name = name.into();
        check_name(number, &name)?;
        Ok(Self {
            data: Arc::new(FunctionData {
                number,
                name,
                description: String::new(),
                image: ImageRef::default(),
            }),
        })
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.data).description = description.into();
        self
    }

    /// Set the illustration (builder pattern).
    #[must_use]
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.data).image = ImageRef::new(path);
        self
    }

    /// Position in the canonical sequence.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.data.number
    }

    /// Name, also the function's identity within a catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Description shown to the author.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.data.description
    }

    /// Illustration reference.
    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.data.image
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) || self.data == other.data
    }
}

impl Eq for Function {}

impl std::hash::Hash for Function {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.data.hash(hasher);
    }
}

impl Ord for Function {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&*self.data, &*other.data);
        a.number
            .cmp(&b.number)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.description.cmp(&b.description))
            .then_with(|| a.image.cmp(&b.image))
    }
}

impl PartialOrd for Function {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.data.number, self.data.name)
    }
}

/// Snapshot of a [`Function`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionMemento {
    number: u32,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: ImageRef,
}

impl FunctionMemento {
    /// Assemble a snapshot from raw parts (used by decoders).
    #[must_use]
    pub fn new(number: u32, name: String, description: String, image: ImageRef) -> Self {
        Self {
            number,
            name,
            description,
            image,
        }
    }

    /// Position in the canonical sequence.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Function description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Illustration reference.
    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

impl Originator for Function {
    type Memento = FunctionMemento;

    fn create_memento(&self) -> FunctionMemento {
        FunctionMemento {
            number: self.data.number,
            name: self.data.name.clone(),
            description: self.data.description.clone(),
            image: self.data.image.clone(),
        }
    }

    fn from_memento(memento: &FunctionMemento) -> Result<Self, RestoreError> {
        check_name(memento.number, &memento.name).map_err(|err| RestoreError::Malformed {
            kind: MementoKind::Function,
            reason: err.to_string(),
        })?;
        Ok(Self {
            data: Arc::new(FunctionData {
                number: memento.number,
                name: memento.name.clone(),
                description: memento.description.clone(),
                image: memento.image.clone(),
            }),
        })
    }
}

impl TryFrom<FunctionMemento> for Function {
    type Error = RestoreError;

    fn try_from(memento: FunctionMemento) -> Result<Self, Self::Error> {
        Self::from_memento(&memento)
    }
}

impl From<Function> for FunctionMemento {
    fn from(function: Function) -> Self {
        function.create_memento()
    }
}
