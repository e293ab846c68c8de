//! Score engine: applies an event rule's transfer to the table.
//!
//! With `N` seated players, acting seat `a`, previous seat
//! `p = (a - 1 + N) mod N` and rule score `S`:
//!
//! | target type   | effect                                     |
//! |---------------|--------------------------------------------|
//! | `give_prev`   | `a -= S`, `p += S`                         |
//! | `take_prev`   | `a += S`, `p -= S`                         |
//! | `give_all`    | `a -= S * (N - 1)`, every other `+= S`     |
//! | `take_all`    | `a += S * (N - 1)`, every other `-= S`     |
//! | `give_custom` | `a -= S`, `target += S`                    |
//! | `take_custom` | `a += S`, `target -= S`                    |
//!
//! Every transfer is zero-sum unless a score saturates at the `i64`
//! bounds, which only a manual score override can reach. A custom rule
//! without a target moves no points, but the acting player's trigger
//! count still goes up.

use crate::core::GameState;
use crate::events::{EventRule, TargetType};

/// Who the acting player trades points with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counterparty {
    /// A single seat.
    Seat(usize),
    /// Every seat except the acting one.
    Everyone,
}

/// Check that the acting seat exists and an explicit target is in range.
///
/// A missing target is fine; an out-of-range one is not.
#[must_use]
pub fn indices_valid(state: &GameState, acting: usize, target: Option<usize>) -> bool {
    let n = state.player_count();
    acting < n && target.map_or(true, |t| t < n)
}

/// Resolve the counterparty of a transfer.
///
/// Returns `None` for a custom rule with no target.
#[must_use]
pub fn counterparty(
    state: &GameState,
    acting: usize,
    target_type: TargetType,
    target: Option<usize>,
) -> Option<Counterparty> {
    match target_type {
        TargetType::GivePrev | TargetType::TakePrev => Some(Counterparty::Seat(state.prev_index(acting))),
        TargetType::GiveAll | TargetType::TakeAll => Some(Counterparty::Everyone),
        TargetType::GiveCustom | TargetType::TakeCustom => target.map(Counterparty::Seat),
    }
}

/// Apply `rule` triggered by the player at seat `acting`.
///
/// Returns `false` and leaves the state untouched if an index is out of
/// range. Otherwise moves points (when a counterparty exists), counts the
/// trigger for the acting player and returns `true`.
pub fn apply_transfer(state: &mut GameState, acting: usize, rule: &EventRule, target: Option<usize>) -> bool {
    if !indices_valid(state, acting, target) {
        return false;
    }

    let amount = if rule.target_type.is_take() {
        rule.amount()
    } else {
        -rule.amount()
    };

    match counterparty(state, acting, rule.target_type, target) {
        Some(Counterparty::Seat(other)) => {
            let actor = &mut state.players[acting].score;
            *actor = actor.saturating_add(amount);
            let counter = &mut state.players[other].score;
            *counter = counter.saturating_sub(amount);
        }
        Some(Counterparty::Everyone) => {
            let others = state.player_count() as i64 - 1;
            for (idx, player) in state.players.iter_mut().enumerate() {
                if idx != acting {
                    player.score = player.score.saturating_sub(amount);
                }
            }
            let actor = &mut state.players[acting].score;
            *actor = actor.saturating_add(amount.saturating_mul(others));
        }
        None => {}
    }

    state.players[acting].record_trigger(&rule.id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RosterEntry, SessionId};
    use crate::events::EventId;

    fn table(n: usize) -> GameState {
        let roster: Vec<_> = (0..n)
            .map(|i| {
                let id = format!("p{}", i);
                RosterEntry::new(id.as_str(), id.as_str(), "#fff")
            })
            .collect();
        GameState::new(SessionId::new("g"), &roster)
    }

    fn rule(target: TargetType, score: u32) -> EventRule {
        EventRule::new("e", "Event", target, score)
    }

    #[test]
    fn test_give_prev() {
        let mut state = table(4);
        assert!(apply_transfer(&mut state, 0, &rule(TargetType::GivePrev, 4), None));
        assert_eq!(state.scores(), vec![-4, 0, 0, 4]);
    }

    #[test]
    fn test_take_prev() {
        let mut state = table(3);
        assert!(apply_transfer(&mut state, 2, &rule(TargetType::TakePrev, 4), None));
        assert_eq!(state.scores(), vec![0, -4, 4]);
    }

    #[test]
    fn test_give_all() {
        let mut state = table(4);
        apply_transfer(&mut state, 1, &rule(TargetType::GiveAll, 7), None);
        assert_eq!(state.scores(), vec![7, -21, 7, 7]);
    }

    #[test]
    fn test_take_all() {
        let mut state = table(4);
        apply_transfer(&mut state, 0, &rule(TargetType::TakeAll, 10), None);
        assert_eq!(state.scores(), vec![30, -10, -10, -10]);
    }

    #[test]
    fn test_custom_with_target() {
        let mut state = table(4);
        apply_transfer(&mut state, 0, &rule(TargetType::GiveCustom, 1), Some(2));
        assert_eq!(state.scores(), vec![-1, 0, 1, 0]);

        apply_transfer(&mut state, 3, &rule(TargetType::TakeCustom, 2), Some(0));
        assert_eq!(state.scores(), vec![-3, 0, 1, 2]);
    }

    #[test]
    fn test_custom_without_target_still_counts() {
        let mut state = table(4);
        assert!(apply_transfer(&mut state, 1, &rule(TargetType::GiveCustom, 1), None));

        assert_eq!(state.scores(), vec![0, 0, 0, 0]);
        assert_eq!(state.players[1].trigger_count(&EventId::new("e")), 1);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = table(3);
        let before = state.clone();

        assert!(!apply_transfer(&mut state, 3, &rule(TargetType::TakeAll, 1), None));
        assert!(!apply_transfer(&mut state, 0, &rule(TargetType::TakeCustom, 1), Some(5)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_trigger_counted_for_actor_only() {
        let mut state = table(3);
        let r = rule(TargetType::TakeAll, 1);
        apply_transfer(&mut state, 1, &r, None);
        apply_transfer(&mut state, 1, &r, None);

        assert_eq!(state.players[1].trigger_count(&r.id), 2);
        assert_eq!(state.players[0].trigger_count(&r.id), 0);
        assert_eq!(state.players[2].trigger_count(&r.id), 0);
    }

    #[test]
    fn test_zero_sum_every_target_type() {
        for target in TargetType::ALL {
            for n in 1..=6 {
                let mut state = table(n);
                let custom = target.needs_target().then_some(n - 1);
                apply_transfer(&mut state, 0, &rule(target, 3), custom);
                assert_eq!(state.total_score(), 0, "{} with {} players", target, n);
            }
        }
    }

    #[test]
    fn test_scores_saturate_at_bounds() {
        let mut state = table(3);
        state.players[0].score = i64::MAX;
        state.players[1].score = i64::MIN;

        assert!(apply_transfer(&mut state, 0, &rule(TargetType::TakeAll, 10), None));
        assert_eq!(state.players[0].score, i64::MAX);
        assert_eq!(state.players[1].score, i64::MIN);
        assert_eq!(state.players[2].score, -10);

        assert!(apply_transfer(&mut state, 1, &rule(TargetType::GivePrev, 4), None));
        assert_eq!(state.players[1].score, i64::MIN);
        assert_eq!(state.players[0].score, i64::MAX);
    }
}
