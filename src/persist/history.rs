//! Recent-session history.
//!
//! Every session-affecting operation upserts a [`HistoryRecord`] for the
//! active session. The log is kept most-recent-first and capped, so
//! resuming an old session or continuing the current one moves it to the
//! front and the oldest session falls off the end.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, SessionId};

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Persisted state of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: SessionId,

    /// Milliseconds since the Unix epoch.
    pub last_edited: i64,

    pub round: u32,
    pub players: Vector<Player>,
}

impl HistoryRecord {
    /// Capture `state` at time `last_edited`.
    #[must_use]
    pub fn from_state(state: &GameState, last_edited: i64) -> Self {
        Self {
            id: state.session_id.clone(),
            last_edited,
            round: state.round,
            players: state.players.clone(),
        }
    }

    /// Rebuild the live state this record describes.
    #[must_use]
    pub fn to_state(&self) -> GameState {
        GameState::from_parts(self.id.clone(), self.round, self.players.clone())
    }
}

/// Capped, most-recent-first list of session records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
    limit: usize,
}

impl HistoryLog {
    /// Create an empty log keeping at most `limit` sessions.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    /// Build from stored records, trimming to `limit`.
    #[must_use]
    pub fn from_records(mut records: Vec<HistoryRecord>, limit: usize) -> Self {
        records.truncate(limit);
        Self { records, limit }
    }

    /// Insert or refresh a record, moving it to the front.
    pub fn upsert(&mut self, record: HistoryRecord) {
        self.records.retain(|existing| existing.id != record.id);
        self.records.insert(0, record);
        self.records.truncate(self.limit);
    }

    /// Find a record by session id.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Check if a session is in the log.
    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.get(id).is_some()
    }

    /// Records, most recent first.
    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Iterate over records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records kept.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
