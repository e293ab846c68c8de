//! Scoring rules.
//!
//! - [`transfer`]: the score engine, moving points between players
//! - [`reorder`](mod@reorder): the reordering engine, reseating the table when a
//!   round ends
//!
//! Both operate on a `&mut GameState` and know nothing about undo or
//! persistence; [`GameSession`](crate::session::GameSession) wraps them.

pub mod transfer;
pub mod reorder;

pub use transfer::{apply_transfer, counterparty, indices_valid, Counterparty};
pub use reorder::{advance_round, outcome_of, reorder, RoundOutcome};
