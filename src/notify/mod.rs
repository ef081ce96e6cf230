//! Lifecycle notifications.
//!
//! ## Key Components
//!
//! - [`Topic`]: Name a notification is published under
//! - [`Notification`]: Topic, source card and optional payload card
//! - [`NotificationBus`]: Where notifications go (host-provided)
//! - [`Messenger`]: In-process bus with per-topic subscribers
//!
//! Construction of a card has no side effects. The interaction layer
//! publishes [`FilledCard::created`](crate::cards::FilledCard::created)
//! and [`Card::activated`](crate::cards::Card::activated) values itself.

mod bus;
mod event;

pub use bus::{Messenger, NotificationBus};
pub use event::{Notification, Topic};
