//! Core types: entity identity and session configuration.

pub mod config;
pub mod entity;

pub use config::{DocumentFormat, SessionConfig};
pub use entity::{EntityId, EntityKind, EntityRef};
