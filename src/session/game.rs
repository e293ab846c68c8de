//! The game session: the single handle the presentation layer drives.
//!
//! A [`GameSession`] owns everything mutable: the active [`GameState`],
//! its undo stack, the event catalog, the saved roster and the recent
//! history, plus the storage backend and random source they depend on.
//!
//! Every operation that changes the table follows the same path:
//!
//! 1. check the operation applies (otherwise return `false`, touching
//!    nothing)
//! 2. push a snapshot
//! 3. mutate
//! 4. persist the history from the now-current state
//!
//! so every visible change is individually undoable and recorded.

use tracing::{debug, info, warn};

use crate::core::{
    CatalogMode, GameRng, GameState, Player, PlayerId, RosterEntry, SeatRng, SessionConfig, SessionId,
};
use crate::events::{CatalogError, EventCatalog, EventId, EventRule};
use crate::persist::{
    load, now_millis, save, HistoryLog, HistoryRecord, KeyValueStore, EVENTS_KEY, HISTORY_KEY, ROSTER_KEY,
};
use crate::rules::{advance_round, apply_transfer, indices_valid};
use crate::stack::SnapshotStack;

/// Single-user scoring session.
pub struct GameSession<S, R = GameRng> {
    config: SessionConfig,
    store: S,
    rng: R,
    catalog: EventCatalog,
    history: HistoryLog,
    roster: Vec<RosterEntry>,
    active: Option<GameState>,
    snapshots: SnapshotStack,
    /// Millisecond stamp and suffix of the last issued session id.
    last_issued: (i64, u32),
}

impl<S: KeyValueStore> GameSession<S, GameRng> {
    /// Load catalog, roster and history from `store`.
    ///
    /// Reordering randomness is seeded from `config.seed`, or from
    /// entropy when unset.
    pub fn open(store: S, config: SessionConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        debug!(seed = rng.seed(), "seeded reordering rng");
        Self::open_with_rng(store, config, rng)
    }
}

impl<S: KeyValueStore, R: SeatRng> GameSession<S, R> {
    /// Load catalog, roster and history from `store`, reordering with `rng`.
    ///
    /// Missing keys load as empty. Undecodable values are logged and
    /// treated as empty.
    pub fn open_with_rng(store: S, config: SessionConfig, rng: R) -> Self {
        let saved_events: Vec<EventRule> = load_or_default(&store, EVENTS_KEY);
        let records: Vec<HistoryRecord> = load_or_default(&store, HISTORY_KEY);
        let roster: Vec<RosterEntry> = load_or_default(&store, ROSTER_KEY);

        let catalog = EventCatalog::load(config.mode, saved_events);
        let history = HistoryLog::from_records(records, config.history_limit);

        info!(
            mode = ?config.mode,
            events = catalog.len(),
            sessions = history.len(),
            roster = roster.len(),
            "opened score store"
        );

        Self {
            config,
            store,
            rng,
            catalog,
            history,
            roster,
            active: None,
            snapshots: SnapshotStack::new(),
            last_issued: (i64::MIN, 0),
        }
    }

    // === Queries ===

    /// The active session's state, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.active.as_ref()
    }

    /// Check if a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Check if there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.active.is_some() && !self.snapshots.is_empty()
    }

    /// Number of undoable steps.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Storage backend.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session and hand back the storage backend.
    pub fn into_store(self) -> S {
        self.store
    }

    // === Session Lifecycle ===

    /// Start a new session seating `roster` in order.
    ///
    /// Round resets to 1, scores to 0, and the undo stack is cleared.
    /// Any previously active session is replaced (its last persisted
    /// state stays in the history).
    pub fn start_game(&mut self, roster: &[RosterEntry]) -> SessionId {
        let id = self.fresh_session_id();
        self.snapshots.clear();
        self.active = Some(GameState::new(id.clone(), roster));
        self.persist_history();

        info!(session = %id, players = roster.len(), "started game");
        id
    }

    /// Resume a session from the history.
    ///
    /// Returns `false` if `id` is not in the history.
    pub fn resume_game(&mut self, id: &SessionId) -> bool {
        let Some(record) = self.history.get(id) else {
            debug!(session = %id, "resume of unknown session ignored");
            return false;
        };

        self.active = Some(record.to_state());
        self.snapshots.clear();
        self.persist_history();

        info!(session = %id, "resumed game");
        true
    }

    /// Persist and close the active session.
    ///
    /// Returns `false` if no session is active.
    pub fn end_game(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }

        self.persist_history();
        self.snapshots.clear();
        if let Some(state) = self.active.take() {
            info!(session = %state.session_id, round = state.round, "ended game");
        }
        true
    }

    /// Issue `game_<millis>`, suffixed `_<n>` when that id was already
    /// issued this millisecond or is still in use.
    fn fresh_session_id(&mut self) -> SessionId {
        let millis = now_millis();
        let mut suffix = match self.last_issued {
            (last, n) if last == millis => n + 1,
            _ => 0,
        };

        loop {
            let id = match suffix {
                0 => SessionId::new(format!("game_{}", millis)),
                n => SessionId::new(format!("game_{}_{}", millis, n)),
            };
            let active = self.active.as_ref().is_some_and(|s| s.session_id == id);
            if !active && !self.history.contains(&id) {
                self.last_issued = (millis, suffix);
                return id;
            }
            suffix += 1;
        }
    }

    // === Events ===

    /// Apply `event` triggered by the player at seat `acting`.
    ///
    /// `target` is the chosen counterparty seat for custom rules. Returns
    /// `false` (and changes nothing) if no session is active, the event
    /// is unknown, or a seat index is out of range.
    pub fn trigger_event(&mut self, acting: usize, event: &EventId, target: Option<usize>) -> bool {
        let Some(rule) = self.catalog.get(event).cloned() else {
            debug!(event = %event, "unknown event ignored");
            return false;
        };

        self.mutate(
            |state| indices_valid(state, acting, target),
            |state, rng| {
                apply_transfer(state, acting, &rule, target);
                let advanced = advance_round(state, acting, &rule, target, rng);
                debug!(
                    event = %rule.id,
                    acting,
                    ?target,
                    advanced,
                    round = state.round,
                    "applied event"
                );
            },
        )
    }

    /// Revert the most recent mutation.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.active.as_mut() else {
            return false;
        };
        if !self.snapshots.undo(state) {
            return false;
        }

        debug!(round = state.round, remaining = self.snapshots.len(), "undid last action");
        self.persist_history();
        true
    }

    // === Table Corrections ===

    /// Overwrite a player's score.
    pub fn set_player_score(&mut self, id: &PlayerId, score: i64) -> bool {
        self.mutate(
            |state| state.contains(id),
            |state, _| {
                if let Some(idx) = state.index_of(id) {
                    state.players[idx].score = score;
                }
            },
        )
    }

    /// Give the seat held by `old` to another roster entry.
    ///
    /// Score and trigger counts stay with the seat. Ignored if `entry`
    /// is already seated elsewhere.
    pub fn replace_player(&mut self, old: &PlayerId, entry: &RosterEntry) -> bool {
        self.mutate(
            |state| state.contains(old) && (&entry.id == old || !state.contains(&entry.id)),
            |state, _| {
                if let Some(idx) = state.index_of(old) {
                    state.players[idx].assume_identity(entry);
                }
            },
        )
    }

    /// Seat a new player at the end of the table.
    pub fn add_player(&mut self, entry: &RosterEntry) -> bool {
        self.mutate(
            |state| !state.contains(&entry.id),
            |state, _| state.players.push_back(Player::from_roster(entry)),
        )
    }

    /// Remove a player from the table.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        self.mutate(
            |state| state.contains(id),
            |state, _| {
                if let Some(idx) = state.index_of(id) {
                    state.players.remove(idx);
                }
            },
        )
    }

    /// Reseat the table in the given order.
    ///
    /// `order` must name every seated player exactly once.
    pub fn apply_custom_order(&mut self, order: &[PlayerId]) -> bool {
        self.mutate(
            |state| is_permutation_of(state, order),
            |state, _| {
                let reseated = order
                    .iter()
                    .filter_map(|id| state.index_of(id))
                    .map(|idx| state.players[idx].clone())
                    .collect();
                state.players = reseated;
            },
        )
    }

    /// Snapshot, mutate and persist the active state if `applies` holds.
    fn mutate<A, F>(&mut self, applies: A, op: F) -> bool
    where
        A: FnOnce(&GameState) -> bool,
        F: FnOnce(&mut GameState, &mut R),
    {
        let Some(state) = self.active.as_mut() else {
            return false;
        };
        if !applies(&*state) {
            return false;
        }

        self.snapshots.push(state);
        op(state, &mut self.rng);
        self.persist_history();
        true
    }

    // === Catalog ===

    /// Add a user-defined event rule.
    pub fn add_event(&mut self, rule: EventRule) -> Result<(), CatalogError> {
        self.catalog.add(rule)?;
        self.persist_catalog();
        Ok(())
    }

    /// Delete an event rule. Protected rules are refused in personal mode.
    pub fn delete_event(&mut self, id: &EventId) -> Result<EventRule, CatalogError> {
        let removed = self.catalog.remove(id)?;
        self.persist_catalog();
        Ok(removed)
    }

    /// Change an event rule's score.
    pub fn update_event_score(&mut self, id: &EventId, score: u32) -> Result<(), CatalogError> {
        self.catalog.set_score(id, score)?;
        self.persist_catalog();
        Ok(())
    }

    /// Switch the catalog operating mode and persist the result.
    pub fn switch_mode(&mut self, mode: CatalogMode) {
        self.config.mode = mode;
        self.catalog.switch_mode(mode);
        self.persist_catalog();
        info!(?mode, events = self.catalog.len(), "switched catalog mode");
    }

    // === Roster ===

    /// Save a roster entry. Returns `false` if the id is taken.
    pub fn add_roster_entry(&mut self, entry: RosterEntry) -> bool {
        if self.roster.iter().any(|e| e.id == entry.id) {
            return false;
        }
        self.roster.push(entry);
        self.persist_roster();
        true
    }

    /// Delete a roster entry. Returns `false` if the id is unknown.
    pub fn remove_roster_entry(&mut self, id: &PlayerId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|e| &e.id != id);
        if self.roster.len() == before {
            return false;
        }
        self.persist_roster();
        true
    }

    // === Persistence ===

    fn persist_history(&mut self) {
        let Some(state) = self.active.as_ref() else {
            return;
        };
        self.history.upsert(HistoryRecord::from_state(state, now_millis()));
        if let Err(err) = save(&mut self.store, HISTORY_KEY, self.history.records()) {
            warn!(error = %err, "failed to persist history; keeping in-memory state");
        }
    }

    fn persist_catalog(&mut self) {
        if let Err(err) = save(&mut self.store, EVENTS_KEY, &self.catalog.to_saved()) {
            warn!(error = %err, "failed to persist event catalog");
        }
    }

    fn persist_roster(&mut self) {
        if let Err(err) = save(&mut self.store, ROSTER_KEY, &self.roster) {
            warn!(error = %err, "failed to persist roster");
        }
    }
}

/// Load `key`, falling back to the default on absence or failure.
fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned + Default,
{
    match load(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, key, "discarding unreadable stored value");
            T::default()
        }
    }
}

fn is_permutation_of(state: &GameState, order: &[PlayerId]) -> bool {
    if order.len() != state.player_count() {
        return false;
    }
    let mut wanted: Vec<&PlayerId> = order.iter().collect();
    let mut seated: Vec<&PlayerId> = state.players.iter().map(|p| &p.id).collect();
    wanted.sort();
    seated.sort();
    wanted == seated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    fn roster(names: &[&str]) -> Vec<RosterEntry> {
        names.iter().map(|n| RosterEntry::new(*n, *n, "#fff")).collect()
    }

    fn session() -> GameSession<MemoryStore> {
        let config = SessionConfig::new().with_mode(CatalogMode::Personal).with_seed(7);
        GameSession::open(MemoryStore::new(), config)
    }

    #[test]
    fn test_operations_without_session_are_noops() {
        let mut session = session();

        assert!(!session.trigger_event(0, &EventId::new("b_foul"), None));
        assert!(!session.undo());
        assert!(!session.end_game());
        assert!(!session.add_player(&RosterEntry::new("x", "x", "#fff")));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_start_game_persists() {
        let mut session = session();
        let id = session.start_game(&roster(&["A", "B", "C"]));

        let state = session.state().unwrap();
        assert_eq!(state.session_id, id);
        assert_eq!(state.round, 1);
        assert_eq!(session.history().records()[0].id, id);
        assert!(session.store().contains(HISTORY_KEY));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let mut session = session();
        let first = session.start_game(&roster(&["A"]));
        let second = session.start_game(&roster(&["A"]));
        assert_ne!(first, second);
    }

    #[test]
    fn test_session_ids_stay_unique_past_history_cap() {
        let config = SessionConfig::new().with_history_limit(2).with_seed(7);
        let mut session = GameSession::open(MemoryStore::new(), config);

        let mut ids: Vec<_> = (0..25).map(|_| session.start_game(&roster(&["A"]))).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), 25);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_unknown_event_pushes_nothing() {
        let mut session = session();
        session.start_game(&roster(&["A", "B"]));

        assert!(!session.trigger_event(0, &EventId::new("nope"), None));
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_out_of_range_pushes_nothing() {
        let mut session = session();
        session.start_game(&roster(&["A", "B"]));

        assert!(!session.trigger_event(2, &EventId::new("b_foul"), None));
        assert!(!session.trigger_event(0, &EventId::new("b_ranggan"), Some(9)));
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_is_permutation_of() {
        let state = GameState::new(SessionId::new("g"), &roster(&["A", "B", "C"]));
        let ids = |names: &[&str]| names.iter().map(|n| PlayerId::new(*n)).collect::<Vec<_>>();

        assert!(is_permutation_of(&state, &ids(&["C", "A", "B"])));
        assert!(!is_permutation_of(&state, &ids(&["A", "B"])));
        assert!(!is_permutation_of(&state, &ids(&["A", "A", "B"])));
        assert!(!is_permutation_of(&state, &ids(&["A", "B", "Z"])));
    }

    #[test]
    fn test_roster_management() {
        let mut session = session();

        assert!(session.add_roster_entry(RosterEntry::new("a", "Ann", "#fff")));
        assert!(!session.add_roster_entry(RosterEntry::new("a", "Again", "#000")));
        assert_eq!(session.roster().len(), 1);
        assert!(session.store().contains(ROSTER_KEY));

        assert!(session.remove_roster_entry(&PlayerId::new("a")));
        assert!(!session.remove_roster_entry(&PlayerId::new("a")));
        assert!(session.roster().is_empty());
    }
}
