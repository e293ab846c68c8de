//! Game session orchestration.
//!
//! [`GameSession`] ties the catalog, score engine, reordering engine,
//! undo stack and persistence together behind one handle.
//!
//! ```
//! use bilscore::core::{CatalogMode, RosterEntry, SessionConfig};
//! use bilscore::events::EventId;
//! use bilscore::persist::MemoryStore;
//! use bilscore::session::GameSession;
//!
//! let config = SessionConfig::new().with_mode(CatalogMode::Personal).with_seed(1);
//! let mut session = GameSession::open(MemoryStore::new(), config);
//!
//! session.start_game(&[
//!     RosterEntry::new("a", "Ann", "#ff4757"),
//!     RosterEntry::new("b", "Bo", "#5352ed"),
//!     RosterEntry::new("c", "Cy", "#1e90ff"),
//! ]);
//!
//! // Ann fouls: she pays the previous player (Cy) one point.
//! assert!(session.trigger_event(0, &EventId::new("b_foul"), None));
//! assert_eq!(session.state().unwrap().scores(), vec![-1, 0, 1]);
//!
//! assert!(session.undo());
//! assert_eq!(session.state().unwrap().scores(), vec![0, 0, 0]);
//! ```

mod game;

pub use game::GameSession;
