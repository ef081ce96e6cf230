//! An editing session over one [`ApplicationState`].
//!
//! The session ties together the live state, its undo history, a
//! notification bus and the snapshot registry used for saving. The registry
//! is borrowed, so one registry built at startup serves every session.

use std::path::{Path, PathBuf};

use crate::cards::Card;
use crate::core::SessionConfig;
use crate::error::{PersistError, RestoreError};
use crate::history::History;
use crate::map::{ApplicationMemento, ApplicationState};
use crate::memento::Originator;
use crate::notify::{Messenger, Notification, NotificationBus};
use crate::persist;
use crate::snapshot::SnapshotRegistry;

/// Live state plus undo history, notifications and persistence.
///
/// ## Example
///
/// ```
/// use storymap::cards::Function;
/// use storymap::core::SessionConfig;
/// use storymap::map::ApplicationState;
/// use storymap::session::Session;
/// use storymap::snapshot::SnapshotRegistry;
///
/// let registry = SnapshotRegistry::standard();
/// let functions = [Function::new(1, "Absentation"), Function::new(2, "Interdiction")];
/// let state = ApplicationState::from_functions("Tale", &functions);
/// let mut session = Session::new(&registry, state, SessionConfig::default());
///
/// session.try_edit(|s| s.place_from_deck("Absentation", 0)).unwrap();
/// assert_eq!(session.state().map.taken_count(), 1);
///
/// assert!(session.undo().unwrap());
/// assert_eq!(session.state().map.taken_count(), 0);
/// ```
#[derive(Debug)]
pub struct Session<'r> {
    registry: &'r SnapshotRegistry,
    state: ApplicationState,
    history: History<ApplicationMemento>,
    bus: Messenger,
    config: SessionConfig,
}

impl<'r> Session<'r> {
    /// Start a session on `state`.
    pub fn new(registry: &'r SnapshotRegistry, state: ApplicationState, config: SessionConfig) -> Self {
        Self {
            registry,
            state,
            history: History::new(config.history_limit),
            bus: Messenger::new(),
            config,
        }
    }

    /// The live state.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// The registry used for saving and loading.
    pub fn registry(&self) -> &'r SnapshotRegistry {
        self.registry
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The undo history.
    pub fn history(&self) -> &History<ApplicationMemento> {
        &self.history
    }

    /// The notification bus, for subscribing.
    pub fn bus_mut(&mut self) -> &mut Messenger {
        &mut self.bus
    }

    /// Publish a notification on the session's bus.
    pub fn publish(&mut self, notification: Notification) {
        self.bus.publish(notification);
    }

    /// Publish a "card created" notification for every card in the state.
    ///
    /// Call after subscribers are attached.
    pub fn announce_cards(&mut self) {
        let notifications: Vec<_> = self.state.cards().map(|card| card.created()).collect();
        tracing::debug!(count = notifications.len(), "announcing cards");
        for notification in notifications {
            self.bus.publish(notification);
        }
    }

    /// Publish an activation notification for the card in slot `index`,
    /// if the slot holds one.
    pub fn activate_slot(&mut self, index: usize) -> bool {
        let notification = self
            .state
            .map
            .slot(index)
            .ok()
            .and_then(|slot| slot.held())
            .map(Card::activated);
        match notification {
            Some(notification) => {
                self.bus.publish(notification);
                true
            }
            None => false,
        }
    }

    /// Run a mutation, recording the prior state for undo.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut ApplicationState) -> R) -> R {
        self.history.record(self.state.create_memento());
        f(&mut self.state)
    }

    /// Run a fallible mutation; history is recorded only if it succeeds.
    ///
    /// The mutation must leave the state unchanged when it fails, as
    /// [`ApplicationState::place_from_deck`] does.
    pub fn try_edit<R, E>(
        &mut self,
        f: impl FnOnce(&mut ApplicationState) -> Result<R, E>,
    ) -> Result<R, E> {
        let before = self.state.create_memento();
        let result = f(&mut self.state);
        if result.is_ok() {
            self.history.record(before);
        }
        result
    }

    /// Undo the last edit. Returns `false` with nothing to undo.
    pub fn undo(&mut self) -> Result<bool, RestoreError> {
        if !self.history.can_undo() {
            return Ok(false);
        }
        let current = self.state.create_memento();
        let Some(previous) = self.history.undo(current) else {
            return Ok(false);
        };
        match ApplicationState::from_memento(&previous) {
            Ok(state) => {
                self.state = state;
                Ok(true)
            }
            Err(err) => {
                self.history.redo(previous);
                Err(err)
            }
        }
    }

    /// Redo the last undone edit. Returns `false` with nothing to redo.
    pub fn redo(&mut self) -> Result<bool, RestoreError> {
        if !self.history.can_redo() {
            return Ok(false);
        }
        let current = self.state.create_memento();
        let Some(next) = self.history.redo(current) else {
            return Ok(false);
        };
        match ApplicationState::from_memento(&next) {
            Ok(state) => {
                self.state = state;
                Ok(true)
            }
            Err(err) => {
                self.history.undo(next);
                Err(err)
            }
        }
    }

    /// Save the state in the configured format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        persist::save(
            self.registry,
            &self.state,
            path,
            self.config.format,
            self.config.pretty,
        )
    }

    /// Replace the state with one loaded from `path`.
    ///
    /// On success history is cleared. On failure nothing changes.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let state = persist::load(self.registry, path, self.config.format)?;
        self.state = state;
        self.history.clear();
        Ok(())
    }

    /// Save under a timestamped name in `dir` and return the path written.
    pub fn autosave(&self, dir: impl AsRef<Path>) -> Result<PathBuf, PersistError> {
        let path = persist::autosave_path(dir, &self.config.autosave_prefix, self.config.format);
        self.save(&path)?;
        Ok(path)
    }

    /// End the session, keeping the state.
    pub fn into_state(self) -> ApplicationState {
        self.state
    }
}
