//! Codecs for the built-in memento kinds.
//!
//! Field layout per tag:
//!
//! | Tag                | Fields                                              |
//! |--------------------|-----------------------------------------------------|
//! | `Function`         | `number` int, `name` text, `description`?, `image`? |
//! | `ContentEditor`    | `function` node, `text` text                        |
//! | `FilledCard`       | `editor` node                                       |
//! | `PlaceholderCard`  | `function` node, `held` node?                       |
//! | `StoryCards`       | `cards` list                                        |
//! | `StoryMap`         | `title` text, `slots` list                          |
//! | `ApplicationState` | `deck` node, `map` node                             |

use super::document::{Fields, Node};
use super::registry::{Codec, SnapshotRegistry};
use crate::cards::{
    CardMemento, EditorMemento, FunctionMemento, ImageRef, PlaceholderMemento, StoryCardsMemento,
};
use crate::error::{DecodeError, EncodeError};
use crate::map::{ApplicationMemento, StoryMapMemento};
use crate::memento::MementoVariant;

fn decode_list<M: MementoVariant>(
    nodes: &[Node],
    registry: &SnapshotRegistry,
) -> Result<Vec<M>, DecodeError> {
    nodes.iter().map(|node| registry.decode_as(node)).collect()
}

fn encode_list<'a, M: MementoVariant + 'a>(
    mementos: impl IntoIterator<Item = &'a M>,
    registry: &SnapshotRegistry,
) -> Result<Vec<Node>, EncodeError> {
    mementos
        .into_iter()
        .map(|m| registry.encode_variant(m))
        .collect()
}

/// Codec for [`FunctionMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionCodec;

impl Codec for FunctionCodec {
    type Memento = FunctionMemento;

    fn encode(&self, m: &FunctionMemento, _: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        let mut fields = Fields::new()
            .with_int("number", i64::from(m.number()))
            .with_text("name", m.name());
        if !m.description().is_empty() {
            fields = fields.with_text("description", m.description());
        }
        if !m.image().is_empty() {
            fields = fields.with_text("image", m.image().path());
        }
        Ok(fields)
    }

    fn decode(&self, fields: &Fields, _: &SnapshotRegistry) -> Result<FunctionMemento, DecodeError> {
        Ok(FunctionMemento::new(
            fields.u32("number")?,
            fields.text("name")?.to_string(),
            fields.text_or_empty("description")?.to_string(),
            ImageRef::new(fields.text_or_empty("image")?),
        ))
    }
}

/// Codec for [`EditorMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EditorCodec;

impl Codec for EditorCodec {
    type Memento = EditorMemento;

    fn encode(&self, m: &EditorMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        Ok(Fields::new()
            .with_node("function", registry.encode_variant(m.function())?)
            .with_text("text", m.text()))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<EditorMemento, DecodeError> {
        Ok(EditorMemento::new(
            registry.decode_as(fields.node("function")?)?,
            fields.text("text")?.to_string(),
        ))
    }
}

/// Codec for [`CardMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FilledCardCodec;

impl Codec for FilledCardCodec {
    type Memento = CardMemento;

    fn encode(&self, m: &CardMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        Ok(Fields::new().with_node("editor", registry.encode_variant(m.editor())?))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<CardMemento, DecodeError> {
        Ok(CardMemento::new(registry.decode_as(fields.node("editor")?)?))
    }
}

/// Codec for [`PlaceholderMemento`]. An empty slot omits `held`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderCodec;

impl Codec for PlaceholderCodec {
    type Memento = PlaceholderMemento;

    fn encode(&self, m: &PlaceholderMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        let held = m.held().map(|c| registry.encode_variant(c)).transpose()?;
        Ok(Fields::new()
            .with_node("function", registry.encode_variant(m.function())?)
            .with_optional("held", held))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<PlaceholderMemento, DecodeError> {
        let held = fields
            .optional_node("held")?
            .map(|node| registry.decode_as(node))
            .transpose()?;
        Ok(PlaceholderMemento::new(
            registry.decode_as(fields.node("function")?)?,
            held,
        ))
    }
}

/// Codec for [`StoryCardsMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StoryCardsCodec;

impl Codec for StoryCardsCodec {
    type Memento = StoryCardsMemento;

    fn encode(&self, m: &StoryCardsMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        Ok(Fields::new().with_list("cards", encode_list(m.cards(), registry)?))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<StoryCardsMemento, DecodeError> {
        Ok(StoryCardsMemento::new(decode_list(fields.list("cards")?, registry)?))
    }
}

/// Codec for [`StoryMapMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StoryMapCodec;

impl Codec for StoryMapCodec {
    type Memento = StoryMapMemento;

    fn encode(&self, m: &StoryMapMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        Ok(Fields::new()
            .with_text("title", m.title())
            .with_list("slots", encode_list(m.slots(), registry)?))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<StoryMapMemento, DecodeError> {
        Ok(StoryMapMemento::new(
            fields.text_or_empty("title")?.to_string(),
            decode_list(fields.list("slots")?, registry)?,
        ))
    }
}

/// Codec for [`ApplicationMemento`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ApplicationCodec;

impl Codec for ApplicationCodec {
    type Memento = ApplicationMemento;

    fn encode(&self, m: &ApplicationMemento, registry: &SnapshotRegistry) -> Result<Fields, EncodeError> {
        Ok(Fields::new()
            .with_node("deck", registry.encode_variant(m.deck())?)
            .with_node("map", registry.encode_variant(m.map())?))
    }

    fn decode(&self, fields: &Fields, registry: &SnapshotRegistry) -> Result<ApplicationMemento, DecodeError> {
        Ok(ApplicationMemento::new(
            registry.decode_as(fields.node("deck")?)?,
            registry.decode_as(fields.node("map")?)?,
        ))
    }
}
