//! Core types: players, game state, snapshots, RNG, configuration.
//!
//! Everything here is plain data plus small helpers. The rules that
//! change this data live in [`crate::rules`].

pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{pick_display_color, Player, PlayerId, RosterEntry, DISPLAY_PALETTE};
pub use rng::{GameRng, SeatRng};
pub use config::{CatalogMode, SessionConfig, DEFAULT_HISTORY_LIMIT};
pub use state::{GameState, SessionId, Snapshot};
