//! Publish/subscribe bus.
//!
//! `NotificationBus` is the seam the host's event system plugs into.
//! `Messenger` is a small in-process implementation: per-topic subscriber
//! lists, delivered in subscription order on the calling thread.

use rustc_hash::FxHashMap;

use super::event::{Notification, Topic};

/// Somewhere notifications can be published to.
///
/// Delivery is fire-and-forget; publishers get nothing back.
pub trait NotificationBus {
    /// Publish one notification.
    fn publish(&mut self, notification: Notification);
}

type Subscriber = Box<dyn FnMut(&Notification)>;

/// In-process notification bus.
///
/// ## Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use storymap::cards::{FilledCard, Function};
/// use storymap::notify::{Messenger, NotificationBus, Topic};
///
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
///
/// let mut bus = Messenger::new();
/// bus.subscribe(Topic::CARD_CREATED, move |_| counter.set(counter.get() + 1));
///
/// let card = FilledCard::new(Function::new(1, "Absentation"));
/// bus.publish(card.created());
///
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Default)]
pub struct Messenger {
    subscribers: FxHashMap<Topic, Vec<Subscriber>>,
    published: u64,
}

impl Messenger {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a topic.
    pub fn subscribe<F>(&mut self, topic: Topic, subscriber: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.subscribers
            .entry(topic)
            .or_default()
            .push(Box::new(subscriber));
    }

    /// Number of subscribers on a topic.
    #[must_use]
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.subscribers.get(topic).map_or(0, Vec::len)
    }

    /// Total notifications published so far, delivered or not.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl NotificationBus for Messenger {
    fn publish(&mut self, notification: Notification) {
        self.published += 1;
        let Some(subscribers) = self.subscribers.get_mut(&notification.topic) else {
            tracing::trace!(topic = %notification.topic, "no subscribers");
            return;
        };
        tracing::trace!(
            topic = %notification.topic,
            source = %notification.source,
            subscribers = subscribers.len(),
            "delivering notification"
        );
        for subscriber in subscribers.iter_mut() {
            subscriber(&notification);
        }
    }
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let topics: Vec<_> = self.subscribers.keys().map(Topic::name).collect();
        f.debug_struct("Messenger")
            .field("topics", &topics)
            .field("published", &self.published)
            .finish()
    }
}

/// A bus that just keeps everything it is given, in order.
impl NotificationBus for Vec<Notification> {
    fn publish(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::{EntityId, EntityKind, EntityRef};

    fn card_ref() -> EntityRef {
        EntityRef::new(EntityId::new(), EntityKind::FilledCard)
    }

    #[test]
    fn test_delivers_only_to_matching_topic() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = Messenger::new();

        let created_log = Rc::clone(&log);
        bus.subscribe(Topic::CARD_CREATED, move |n| {
            created_log.borrow_mut().push(n.topic.clone());
        });

        bus.publish(Notification::new(Topic::CARD_CREATED, card_ref()));
        bus.publish(Notification::new(Topic::CARD_ACTIVATED, card_ref()));

        assert_eq!(*log.borrow(), vec![Topic::CARD_CREATED]);
        assert_eq!(bus.published(), 2);
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = Messenger::new();

        for i in 0..3 {
            let log = Rc::clone(&log);
            bus.subscribe(Topic::DRAG_STARTED, move |_| log.borrow_mut().push(i));
        }
        assert_eq!(bus.subscriber_count(&Topic::DRAG_STARTED), 3);

        bus.publish(Notification::new(Topic::DRAG_STARTED, card_ref()));
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_vec_bus_records() {
        let mut recorded: Vec<Notification> = Vec::new();
        let source = card_ref();
        recorded.publish(Notification::new(Topic::CARD_ACTIVATED, source));

        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].source, source);
    }
}
