//! Player identification and per-player score data.
//!
//! ## PlayerId
//!
//! Stable string identifier handed out by the roster. Seat position is
//! *not* part of a player's identity: the seating order lives in
//! [`GameState::players`](super::GameState) and changes between rounds.
//!
//! ## Player
//!
//! A seated player: roster identity plus the running score and a count of
//! every event the player has triggered this session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::events::EventId;

/// Roster-assigned player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
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

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A saved roster entry, used to seed new sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    /// CSS-style color string used by the presentation layer.
    pub display_color: String,
}

impl RosterEntry {
    /// Create a new roster entry.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, display_color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_color: display_color.into(),
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub display_color: String,

    /// Running score. Only the score engine (and explicit manual
    /// corrections) change it.
    pub score: i64,

    /// How many times this player has triggered each event.
    pub triggered_events: FxHashMap<EventId, u32>,
}

impl Player {
    /// Seat a roster entry with a zero score and no trigger history.
    #[must_use]
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            display_color: entry.display_color.clone(),
            score: 0,
            triggered_events: FxHashMap::default(),
        }
    }

    /// Number of times this player has triggered `event`.
    #[must_use]
    pub fn trigger_count(&self, event: &EventId) -> u32 {
        self.triggered_events.get(event).copied().unwrap_or(0)
    }

    /// Count one more trigger of `event`.
    pub fn record_trigger(&mut self, event: &EventId) {
        *self.triggered_events.entry(event.clone()).or_insert(0) += 1;
    }

    /// Replace the roster identity of this seat, keeping score and counts.
    pub fn assume_identity(&mut self, entry: &RosterEntry) {
        self.id = entry.id.clone();
        self.name = entry.name.clone();
        self.display_color = entry.display_color.clone();
    }
}

/// Palette offered to the roster provider for new entries.
pub const DISPLAY_PALETTE: [&str; 10] = [
    "#ff4757", "#5352ed", "#1e90ff", "#2ed573", "#ffa502",
    "#ff7f50", "#3742fa", "#2bcbba", "#eb4d4b", "#6c5ce7",
];

/// Pick a display color for a new roster entry.
pub fn pick_display_color<R: super::SeatRng>(rng: &mut R) -> &'static str {
    DISPLAY_PALETTE[rng.pick(DISPLAY_PALETTE.len())]
}
