//! # bilscore
//!
//! Score-transfer and seat-rotation engine for turn-based scoring games.
//!
//! Players sit in a circle. When a player triggers a named event, the
//! event's rule moves points between that player and the previous
//! player, every other player, or a chosen player. Round-ending events
//! also reseat the table: winner first, loser second, everyone else
//! after them.
//!
//! ## Design Principles
//!
//! 1. **Zero-Sum**: Every event moves points; none are created or lost.
//!
//! 2. **Everything Undoable**: Each table mutation is preceded by a
//!    snapshot, and snapshots are O(1) `im` clones.
//!
//! 3. **No Ambient State**: All mutable data lives in one
//!    [`GameSession`] handle; randomness and storage are injected.
//!
//! ## Modules
//!
//! - `core`: Players, game state, snapshots, RNG, configuration
//! - `events`: Event rules and the mode-dependent catalog
//! - `rules`: Score engine and reordering engine
//! - `stack`: Undo stack
//! - `persist`: Storage backends, history log
//! - `session`: The orchestrating session handle

pub mod core;
pub mod events;
pub mod rules;
pub mod stack;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CatalogMode, GameRng, GameState, Player, PlayerId, RosterEntry, SeatRng, SessionConfig, SessionId, Snapshot,
};

pub use crate::events::{CatalogError, EventCatalog, EventId, EventRule, TargetType};

pub use crate::rules::{advance_round, apply_transfer, outcome_of, reorder, RoundOutcome};

pub use crate::stack::SnapshotStack;

pub use crate::persist::{FileStore, HistoryLog, HistoryRecord, KeyValueStore, MemoryStore, StoreError};

pub use crate::session::GameSession;
