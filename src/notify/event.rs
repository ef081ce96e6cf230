//! Notification values.
//!
//! Cards never publish anything themselves. They hand back a
//! [`Notification`] value and the caller decides where it goes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::EntityRef;

/// Topic a notification is published under.
///
/// The core only produces the constants below; hosts may define more.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic(Cow<'static, str>);

impl Topic {
    /// A card was created and can now be dragged.
    pub const CARD_CREATED: Topic = Topic::from_static("card created");

    /// A card was double-clicked by the author.
    pub const CARD_ACTIVATED: Topic = Topic::from_static("StoryCard double-clicked");

    /// The interaction layer started dragging a card.
    pub const DRAG_STARTED: Topic = Topic::from_static("drag started");

    /// Create a topic from a static name.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a topic from any name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Topic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fire-and-forget lifecycle notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What happened.
    pub topic: Topic,

    /// The card the notification is about.
    pub source: EntityRef,

    /// A second card involved, if any.
    pub payload: Option<EntityRef>,
}

impl Notification {
    /// Create a notification with no payload.
    #[must_use]
    pub fn new(topic: Topic, source: EntityRef) -> Self {
        Self {
            topic,
            source,
            payload: None,
        }
    }

    /// Attach a payload (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: EntityRef) -> Self {
        self.payload = Some(payload);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityId, EntityKind};

    #[test]
    fn test_topic_constants() {
        assert_eq!(Topic::CARD_CREATED.name(), "card created");
        assert_eq!(Topic::CARD_ACTIVATED.name(), "StoryCard double-clicked");
        assert_eq!(Topic::new("drag started"), Topic::DRAG_STARTED);
    }

    #[test]
    fn test_notification_builder() {
        let source = EntityRef::new(EntityId::new(), EntityKind::FilledCard);
        let slot = EntityRef::new(EntityId::new(), EntityKind::PlaceholderCard);
        let n = Notification::new(Topic::DRAG_STARTED, source).with_payload(slot);

        assert_eq!(n.source, source);
        assert_eq!(n.payload, Some(slot));
    }

    #[test]
    fn test_notification_serialization() {
        let n = Notification::new(
            Topic::CARD_CREATED,
            EntityRef::new(EntityId::new(), EntityKind::FilledCard),
        );
        let json = serde_json::to_string(&n).unwrap();
        let deserialized: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(n, deserialized);
    }
}
