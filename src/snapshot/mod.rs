//! Type-directed (de)serialization of memento trees.
//!
//! ## Key Components
//!
//! - [`Node`], [`Fields`], [`Value`]: the tagged tree document model
//! - [`Codec`]: converts one memento type to and from node fields
//! - [`SnapshotRegistry`]: tag → codec dispatch, plus read/write helpers
//!
//! ## Flow
//!
//! Writing: live value → [`Memento`](crate::memento::Memento) → registry
//! looks up the tag for the memento kind → codec produces fields, encoding
//! children through the registry → JSON.
//!
//! Reading: JSON → [`Node`] → registry looks up the codec by tag → codec
//! rebuilds the memento, decoding children through the registry → the
//! target type's [`Originator::restore`](crate::memento::Originator::restore).

mod codecs;
mod document;
mod registry;

pub use codecs::{
    ApplicationCodec, EditorCodec, FilledCardCodec, FunctionCodec, PlaceholderCodec,
    StoryCardsCodec, StoryMapCodec,
};
pub use document::{Fields, Node, Value, NULL_TAG};
pub use registry::{Codec, SnapshotRegistry};
