//! Tagged tree documents.
//!
//! A document is a tree of [`Node`]s. Each node has a type tag and a map of
//! named fields; a field is text, an integer, a child node, a list of child
//! nodes, or null. Rendered as JSON:
//!
//! ```json
//! {
//!   "tag": "PlaceholderCard",
//!   "fields": {
//!     "function": { "tag": "Function", "fields": { "number": 1, "name": "Absentation" } },
//!     "held": null
//!   }
//! }
//! ```
//!
//! An absent optional child may be written three ways: the field is
//! omitted, the field is `null`, or the field is a node tagged `"null"`.
//! Readers treat all three as "no value".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Tag marking an explicitly absent node.
pub const NULL_TAG: &str = "null";

/// One node of a tagged tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Type tag, resolved through the snapshot registry.
    pub tag: String,

    /// Named fields.
    #[serde(default, skip_serializing_if = "Fields::is_empty")]
    pub fields: Fields,
}

impl Node {
    /// Create a node with no fields.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: Fields::default(),
        }
    }

    /// Create a node with the given fields.
    #[must_use]
    pub fn with_fields(tag: impl Into<String>, fields: Fields) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }

    /// A node explicitly standing for "no value".
    #[must_use]
    pub fn null() -> Self {
        Self::new(NULL_TAG)
    }

    /// Whether this node stands for "no value".
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.tag == NULL_TAG
    }

    /// Render as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A field value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly nothing.
    Null,
    /// An integer.
    Int(i64),
    /// A string.
    Text(String),
    /// One child node.
    Node(Box<Node>),
    /// Several child nodes.
    List(Vec<Node>),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "an integer",
            Self::Text(_) => "text",
            Self::Node(_) => "a node",
            Self::List(_) => "a list",
        }
    }
}

/// The named fields of a [`Node`], with typed accessors for decoders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    /// Create an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access to a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Add a text field (builder pattern).
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, Value::Text(text.into()));
        self
    }

    /// Add an integer field (builder pattern).
    #[must_use]
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.insert(key, Value::Int(value));
        self
    }

    /// Add a child node (builder pattern).
    #[must_use]
    pub fn with_node(mut self, key: impl Into<String>, node: Node) -> Self {
        self.insert(key, Value::Node(Box::new(node)));
        self
    }

    /// Add an optional child node; `None` omits the field (builder pattern).
    #[must_use]
    pub fn with_optional(self, key: impl Into<String>, node: Option<Node>) -> Self {
        match node {
            Some(node) => self.with_node(key, node),
            None => self,
        }
    }

    /// Add a list of child nodes (builder pattern).
    #[must_use]
    pub fn with_list(mut self, key: impl Into<String>, nodes: Vec<Node>) -> Self {
        self.insert(key, Value::List(nodes));
        self
    }

    fn required(&self, key: &str) -> Result<&Value, DecodeError> {
        self.0
            .get(key)
            .ok_or_else(|| DecodeError::malformed(format!("missing field `{key}`")))
    }

    fn mismatch(key: &str, expected: &str, found: &Value) -> DecodeError {
        DecodeError::malformed(format!(
            "field `{key}`: expected {expected}, found {}",
            found.describe()
        ))
    }

    /// A required text field.
    pub fn text(&self, key: &str) -> Result<&str, DecodeError> {
        match self.required(key)? {
            Value::Text(s) => Ok(s),
            other => Err(Self::mismatch(key, "text", other)),
        }
    }

    /// An optional text field; missing or null reads as the empty string.
    pub fn text_or_empty(&self, key: &str) -> Result<&str, DecodeError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(""),
            Some(Value::Text(s)) => Ok(s),
            Some(other) => Err(Self::mismatch(key, "text", other)),
        }
    }

    /// A required integer field.
    pub fn int(&self, key: &str) -> Result<i64, DecodeError> {
        match self.required(key)? {
            Value::Int(v) => Ok(*v),
            other => Err(Self::mismatch(key, "an integer", other)),
        }
    }

    /// A required integer field that must fit in a `u32`.
    pub fn u32(&self, key: &str) -> Result<u32, DecodeError> {
        let value = self.int(key)?;
        u32::try_from(value)
            .map_err(|_| DecodeError::malformed(format!("field `{key}`: {value} out of range")))
    }

    /// A required child node. A null child is an error here.
    pub fn node(&self, key: &str) -> Result<&Node, DecodeError> {
        self.optional_node(key)?
            .ok_or_else(|| DecodeError::malformed(format!("field `{key}` is null")))
    }

    /// An optional child node: omitted, `null` and a `"null"`-tagged node
    /// all read as `None`.
    pub fn optional_node(&self, key: &str) -> Result<Option<&Node>, DecodeError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Node(node)) if node.is_null() => Ok(None),
            Some(Value::Node(node)) => Ok(Some(node)),
            Some(other) => Err(Self::mismatch(key, "a node", other)),
        }
    }

    /// A list of child nodes; missing or null reads as empty.
    pub fn list(&self, key: &str) -> Result<&[Node], DecodeError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::List(nodes)) => Ok(nodes),
            Some(other) => Err(Self::mismatch(key, "a list", other)),
        }
    }
}
