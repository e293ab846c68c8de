//! Game state and undo snapshots.
//!
//! ## GameState
//!
//! The single piece of live, mutable game data:
//! - Session identifier
//! - Round counter (starts at 1)
//! - Players in seating order
//!
//! Seating order is significant: the "previous player" of the acting
//! player is the one seated immediately before them, wrapping around.
//!
//! ## Snapshot
//!
//! Immutable copy of `{players, round}`. Players are held in an
//! `im::Vector`, so taking a snapshot is an O(1) structural clone and
//! later mutations of the live state never show through.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, RosterEntry};

/// Identifier of one game session in the history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Live state of the active session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub session_id: SessionId,

    /// Round number (starts at 1, only ever incremented outside undo).
    pub round: u32,

    /// Players in seating order.
    pub players: Vector<Player>,
}

impl GameState {
    /// Seat a roster at round 1 with zero scores.
    ///
    /// Later entries repeating an earlier id are skipped.
    #[must_use]
    pub fn new(session_id: SessionId, roster: &[RosterEntry]) -> Self {
        let mut players = Vector::new();
        for entry in roster {
            if !players.iter().any(|p: &Player| p.id == entry.id) {
                players.push_back(Player::from_roster(entry));
            }
        }

        Self {
            session_id,
            round: 1,
            players,
        }
    }

    /// Rebuild a state from persisted parts.
    #[must_use]
    pub fn from_parts(session_id: SessionId, round: u32, players: Vector<Player>) -> Self {
        Self {
            session_id,
            round,
            players,
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat index of the player before `acting`, wrapping around.
    ///
    /// Panics if no players are seated.
    #[must_use]
    pub fn prev_index(&self, acting: usize) -> usize {
        let n = self.players.len();
        (acting + n - 1) % n
    }

    /// Seat index of a player.
    #[must_use]
    pub fn index_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Whether a player is seated.
    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Sum of all scores, saturating at the `i64` bounds.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.players.iter().fold(0i64, |acc, p| acc.saturating_add(p.score))
    }

    /// Scores in seating order.
    #[must_use]
    pub fn scores(&self) -> Vec<i64> {
        self.players.iter().map(|p| p.score).collect()
    }

    /// Player ids in seating order.
    #[must_use]
    pub fn seating(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Capture `{players, round}`.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            round: self.round,
        }
    }

    /// Restore `{players, round}` from a snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.players = snapshot.players;
        self.round = snapshot.round;
    }
}

/// Immutable copy of the undoable part of [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    players: Vector<Player>,
    round: u32,
}

impl Snapshot {
    /// Players at capture time.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Round at capture time.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }
}
