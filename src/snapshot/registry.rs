//! Snapshot registry: type-directed encode/decode.
//!
//! The registry maps each wire tag to a [`Codec`] and each memento kind to
//! its tag. Build it once at startup, then share it by reference with every
//! call site that reads or writes documents. Registration is append-only;
//! nothing can be removed or replaced.

use std::io::{Read, Write};

use rustc_hash::FxHashMap;

use super::codecs::{
    ApplicationCodec, EditorCodec, FilledCardCodec, FunctionCodec, PlaceholderCodec,
    StoryCardsCodec, StoryMapCodec,
};
use super::document::{Fields, Node};
use crate::error::{DecodeError, EncodeError, RegistryError};
use crate::memento::{Memento, MementoKind, MementoVariant, Originator};

/// Converts one memento type to and from node fields.
///
/// Codecs for composite mementos encode and decode their children through
/// the registry they are handed, so child types are dispatched by tag too.
pub trait Codec: Send + Sync + 'static {
    /// The memento type this codec handles.
    type Memento: MementoVariant;

    /// Produce the fields of a node for `memento`.
    fn encode(&self, memento: &Self::Memento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError>;

    /// Rebuild a memento from a node's fields.
    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<Self::Memento, DecodeError>;
}

trait ErasedCodec: Send + Sync {
    fn kind(&self) -> MementoKind;
    fn encode(&self, memento: &Memento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError>;
    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<Memento, DecodeError>;
}

impl<C: Codec> ErasedCodec for C {
    fn kind(&self) -> MementoKind {
        <C::Memento as MementoVariant>::KIND
    }

    fn encode(&self, memento: &Memento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        let typed = <C::Memento as MementoVariant>::from_memento(memento)
            .map_err(|_| EncodeError::Unregistered(memento.kind()))?;
        Codec::encode(self, typed, registry)
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<Memento, DecodeError> {
        Codec::decode(self, fields, registry).map(Into::into)
    }
}

/// Registry of codecs.
///
/// ## Example
///
/// ```
/// use storymap::cards::{FilledCard, Function, PlaceholderCard};
/// use storymap::snapshot::SnapshotRegistry;
///
/// let registry = SnapshotRegistry::standard();
///
/// let mut slot = PlaceholderCard::new(Function::new(1, "Absentation"));
/// let previous = slot.set_held(Some(FilledCard::with_text(Function::new(1, "Absentation"), "gone")));
/// assert!(previous.is_none());
///
/// let json = registry.to_string(&slot, false).unwrap();
/// let restored: PlaceholderCard = registry.from_str(&json).unwrap();
/// assert_eq!(restored, slot);
/// ```
#[derive(Default)]
pub struct SnapshotRegistry {
    codecs: FxHashMap<String, Box<dyn ErasedCodec>>,
    tags: FxHashMap<MementoKind, String>,
}

impl SnapshotRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with codecs for every built-in memento kind, each under
    /// its [`MementoKind::name`].
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(MementoKind::Function.name(), FunctionCodec);
        registry.register(MementoKind::ContentEditor.name(), EditorCodec);
        registry.register(MementoKind::FilledCard.name(), FilledCardCodec);
        registry.register(MementoKind::PlaceholderCard.name(), PlaceholderCodec);
        registry.register(MementoKind::StoryCards.name(), StoryCardsCodec);
        registry.register(MementoKind::StoryMap.name(), StoryMapCodec);
        registry.register(MementoKind::ApplicationState.name(), ApplicationCodec);
        registry
    }

    /// Register a codec under a tag.
    ///
    /// Fails if the tag or the codec's memento kind is already taken.
    pub fn try_register<C: Codec>(&mut self, tag: impl Into<String>, codec: C) -> Result<(), RegistryError> {
        let tag = tag.into();
        let kind = <C::Memento as MementoVariant>::KIND;
        if self.codecs.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }
        if self.tags.contains_key(&kind) {
            return Err(RegistryError::DuplicateKind(kind));
        }
        tracing::debug!(%tag, %kind, "registered codec");
        self.codecs.insert(tag.clone(), Box::new(codec));
        self.tags.insert(kind, tag);
        Ok(())
    }

    /// Register a codec under a tag.
    ///
    /// Panics if the tag or kind is already registered; duplicate
    /// registration is a startup bug.
    pub fn register<C: Codec>(&mut self, tag: impl Into<String>, codec: C) {
        if let Err(err) = self.try_register(tag, codec) {
            panic!("{err}");
        }
    }

    /// The tag a memento kind is written under.
    #[must_use]
    pub fn tag_for(&self, kind: MementoKind) -> Option<&str> {
        self.tags.get(&kind).map(String::as_str)
    }

    /// Whether a tag is registered.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.codecs.contains_key(tag)
    }

    /// Number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether no codec is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    // === Node level ===

    /// Encode any memento into a node.
    pub fn encode(&self, memento: &Memento) -> Result<Node, EncodeError> {
        let kind = memento.kind();
        let tag = self.tags.get(&kind).ok_or(EncodeError::Unregistered(kind))?;
        let codec = self.codecs.get(tag).ok_or(EncodeError::Unregistered(kind))?;
        let fields = codec.encode(memento, self)?;
        Ok(Node::with_fields(tag.clone(), fields))
    }

    /// Encode a typed memento into a node.
    pub fn encode_variant<M: MementoVariant>(&self, memento: &M) -> Result<Node, EncodeError> {
        self.encode(&memento.clone().into())
    }

    /// Decode a node into a memento. A null node is malformed here.
    pub fn decode(&self, node: &Node) -> Result<Memento, DecodeError> {
        self.decode_optional(node)?
            .ok_or_else(|| DecodeError::malformed("unexpected null node"))
    }

    /// Decode a node that may be null.
    pub fn decode_optional(&self, node: &Node) -> Result<Option<Memento>, DecodeError> {
        if node.is_null() {
            return Ok(None);
        }
        let codec = self
            .codecs
            .get(&node.tag)
            .ok_or_else(|| DecodeError::UnknownTag(node.tag.clone()))?;
        codec.decode(&node.fields, self).map(Some)
    }

    /// Decode a node that must hold a particular memento kind.
    ///
    /// A node of another registered kind yields a wrong-type restore error.
    pub fn decode_as<M: MementoVariant>(&self, node: &Node) -> Result<M, DecodeError> {
        Ok(M::try_from_memento(self.decode(node)?)?)
    }

    /// Snapshot a live value into a node.
    pub fn encode_value<T: Originator>(&self, value: &T) -> Result<Node, EncodeError> {
        self.encode(&value.snapshot())
    }

    /// Restore a live value from a node.
    pub fn decode_value<T: Originator>(&self, node: &Node) -> Result<T, DecodeError> {
        let memento = self.decode_optional(node)?;
        Ok(T::restore(memento.as_ref())?)
    }

    // === Text level ===

    /// Write a value's snapshot as a compact document.
    pub fn write<T: Originator>(&self, value: &T, dest: impl Write) -> Result<(), EncodeError> {
        let node = self.encode_value(value)?;
        serde_json::to_writer(dest, &node)?;
        Ok(())
    }

    /// Write a value's snapshot as a pretty-printed document.
    pub fn write_pretty<T: Originator>(&self, value: &T, dest: impl Write) -> Result<(), EncodeError> {
        let node = self.encode_value(value)?;
        serde_json::to_writer_pretty(dest, &node)?;
        Ok(())
    }

    /// Read a document and restore the value it holds.
    pub fn read<T: Originator>(&self, src: impl Read) -> Result<T, DecodeError> {
        let result = serde_json::from_reader::<_, Node>(src)
            .map_err(DecodeError::from)
            .and_then(|node| self.decode_value(&node));
        if let Err(err) = &result {
            tracing::warn!(%err, "failed to read document");
        }
        result
    }

    /// Render a value's snapshot to a string.
    pub fn to_string<T: Originator>(&self, value: &T, pretty: bool) -> Result<String, EncodeError> {
        Ok(self.encode_value(value)?.to_json(pretty)?)
    }

    /// Restore a value from a document string.
    pub fn from_str<T: Originator>(&self, document: &str) -> Result<T, DecodeError> {
        self.read(document.as_bytes())
    }
}

impl std::fmt::Debug for SnapshotRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.codecs.keys().collect();
        tags.sort();
        f.debug_struct("SnapshotRegistry").field("tags", &tags).finish()
    }
}
