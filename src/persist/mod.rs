//! Persistence boundary.
//!
//! The session keeps three values in a [`KeyValueStore`]:
//!
//! | key                 | value                          |
//! |---------------------|--------------------------------|
//! | `bilscore_history`  | `Vec<HistoryRecord>`           |
//! | `bilscore_events`   | `Vec<EventRule>` (catalog)     |
//! | `bilscore_players`  | `Vec<RosterEntry>` (roster)    |
//!
//! Values are bincode-encoded. Write failures never abort a game
//! operation: the in-memory state stays authoritative and the next
//! successful write supersedes the missed one.

pub mod store;
pub mod codec;
pub mod history;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use codec::{load, save};
pub use history::{now_millis, HistoryLog, HistoryRecord};

/// Key holding the recent-session history.
pub const HISTORY_KEY: &str = "bilscore_history";

/// Key holding the event catalog.
pub const EVENTS_KEY: &str = "bilscore_events";

/// Key holding the saved roster.
pub const ROSTER_KEY: &str = "bilscore_players";
