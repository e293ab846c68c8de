//! Undo history as a LIFO stack of snapshots.
//!
//! A snapshot is pushed before every mutating session operation, so
//! popping one restores the table to exactly what it was before that
//! operation. The stack is unbounded within a session and cleared at
//! session boundaries.

use crate::core::{GameState, Snapshot};

/// Undo stack (index 0 = oldest, last = most recent).
#[derive(Clone, Debug, Default)]
pub struct SnapshotStack {
    entries: Vec<Snapshot>,
}

impl SnapshotStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the undoable part of `state`.
    pub fn push(&mut self, state: &GameState) {
        self.entries.push(state.snapshot());
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// Most recent snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    /// Pop the most recent snapshot into `state`.
    ///
    /// Returns `false` (state untouched) when the stack is empty.
    pub fn undo(&mut self, state: &mut GameState) -> bool {
        match self.pop() {
            Some(snapshot) => {
                state.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RosterEntry, SessionId};

    fn table() -> GameState {
        let roster = [
            RosterEntry::new("A", "A", "#fff"),
            RosterEntry::new("B", "B", "#fff"),
        ];
        GameState::new(SessionId::new("g"), &roster)
    }

    #[test]
    fn test_new_is_empty() {
        let stack = SnapshotStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.peek().is_none());
    }

    #[test]
    fn test_undo_restores_in_lifo_order() {
        let mut state = table();
        let mut stack = SnapshotStack::new();

        stack.push(&state);
        state.players[0].score = 3;
        state.players[1].score = -3;

        stack.push(&state);
        state.round = 2;
        let reversed = state.players.iter().rev().cloned().collect();
        state.players = reversed;

        assert_eq!(stack.len(), 2);

        assert!(stack.undo(&mut state));
        assert_eq!(state.round, 1);
        assert_eq!(state.scores(), vec![3, -3]);

        assert!(stack.undo(&mut state));
        assert_eq!(state.scores(), vec![0, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut state = table();
        state.players[0].score = 1;
        let before = state.clone();

        let mut stack = SnapshotStack::new();
        assert!(!stack.undo(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear() {
        let state = table();
        let mut stack = SnapshotStack::new();
        stack.push(&state);
        stack.push(&state);

        stack.clear();

        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_undo_keeps_session_id() {
        let mut state = table();
        let mut stack = SnapshotStack::new();
        stack.push(&state);

        state.round = 5;
        stack.undo(&mut state);

        assert_eq!(state.session_id, SessionId::new("g"));
        assert_eq!(stack.peek(), None);
    }
}
