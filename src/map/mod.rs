//! Top-level aggregates: the story map and the application state.
//!
//! - `StoryMap`: Title plus ordered placeholder slots
//! - `ApplicationState`: The deck of unplaced cards plus the map

pub mod application;
pub mod story_map;

pub use application::{ApplicationMemento, ApplicationState};
pub use story_map::{StoryMap, StoryMapMemento};
