//! Undo support.
//!
//! The session pushes a [`Snapshot`](crate::core::Snapshot) of the table
//! onto a [`SnapshotStack`] before each mutation. Undo pops the most
//! recent snapshot back into the live state.
//!
//! ```
//! use bilscore::core::{GameState, RosterEntry, SessionId};
//! use bilscore::stack::SnapshotStack;
//!
//! let roster = [RosterEntry::new("a", "Ann", "#fff"), RosterEntry::new("b", "Bo", "#000")];
//! let mut state = GameState::new(SessionId::new("game_1"), &roster);
//! let mut undo = SnapshotStack::new();
//!
//! undo.push(&state);
//! state.round += 1;
//!
//! assert!(undo.undo(&mut state));
//! assert_eq!(state.round, 1);
//! assert!(!undo.undo(&mut state));
//! ```

mod snapshot;

pub use snapshot::SnapshotStack;
