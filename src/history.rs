//! Undo/redo history of snapshots.
//!
//! Both stacks are `im` persistent vectors, so cloning a `History` (for
//! example to keep a checkpoint) is O(1) regardless of depth.

use im::Vector;

/// Bounded undo and redo stacks of snapshots.
///
/// The caller owns the "current" snapshot; `undo` and `redo` swap it with
/// the top of the relevant stack.
///
/// ## Example
///
/// ```
/// use storymap::history::History;
///
/// let mut history = History::new(10);
/// history.record("v1");
/// history.record("v2");
///
/// // current state is "v3"
/// assert_eq!(history.undo("v3"), Some("v2"));
/// assert_eq!(history.redo("v2"), Some("v3"));
/// ```
#[derive(Clone, Debug)]
pub struct History<M: Clone> {
    undo: Vector<M>,
    redo: Vector<M>,
    limit: usize,
}

impl<M: Clone> History<M> {
    /// Create an empty history keeping at most `limit` undo steps.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            undo: Vector::new(),
            redo: Vector::new(),
            limit,
        }
    }

    /// Record the state from before a change.
    ///
    /// Clears the redo stack and evicts the oldest entries past the limit.
    pub fn record(&mut self, snapshot: M) {
        self.redo.clear();
        self.undo.push_back(snapshot);
        self.trim();
    }

    /// Step back. Returns the state to restore, or `None` with nothing to
    /// undo (in which case `current` is dropped and nothing changes).
    pub fn undo(&mut self, current: M) -> Option<M> {
        let previous = self.undo.pop_back()?;
        self.redo.push_back(current);
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: M) -> Option<M> {
        let next = self.redo.pop_back()?;
        self.undo.push_back(current);
        self.trim();
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Some(next)
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo steps available.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Maximum number of undo steps.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn trim(&mut self) {
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut h: History<u32> = History::new(5);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.undo(1), None);
        assert_eq!(h.redo(1), None);
        assert_eq!(h.redo_len(), 0);
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut h = History::new(5);
        h.record(1);
        h.record(2);

        assert_eq!(h.undo(3), Some(2));
        assert_eq!(h.undo(2), Some(1));
        assert!(!h.can_undo());
        assert_eq!(h.redo_len(), 2);

        assert_eq!(h.redo(1), Some(2));
        assert_eq!(h.redo(2), Some(3));
        assert!(!h.can_redo());
        assert_eq!(h.undo_len(), 2);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut h = History::new(5);
        h.record(1);
        h.undo(2);
        assert!(h.can_redo());

        h.record(1);
        assert!(!h.can_redo());
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut h = History::new(2);
        h.record(1);
        h.record(2);
        h.record(3);

        assert_eq!(h.undo_len(), 2);
        assert_eq!(h.undo(4), Some(3));
        assert_eq!(h.undo(3), Some(2));
        assert_eq!(h.undo(2), None);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut h = History::new(0);
        h.record(1);
        assert!(!h.can_undo());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut h = History::new(5);
        h.record(1);
        let checkpoint = h.clone();
        h.record(2);

        assert_eq!(checkpoint.undo_len(), 1);
        assert_eq!(h.undo_len(), 2);
    }
}
