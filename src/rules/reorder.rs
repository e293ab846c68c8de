//! Reordering engine: reseats the table after a round-advancing event.
//!
//! The round's winner sits first and its loser second. The remaining
//! players follow in an order that depends on table size:
//!
//! - **Four players**: the two remaining players keep a seat-rotation
//!   constraint. An ordering is rejected if its first player came from
//!   seat 2 or its second player came from seat 3. If both orderings are
//!   allowed one is picked at random; if neither is, the original
//!   relative order is kept.
//! - **Any other size**: the remaining players are shuffled.

use im::Vector;
use smallvec::SmallVec;

use super::transfer::indices_valid;
use crate::core::{GameState, Player, SeatRng};
use crate::events::{EventRule, TargetType};

/// Seats a four-player table forbids for the first and second
/// non-participant respectively.
const RESTRICTED_SEATS: [usize; 2] = [2, 3];

/// Winner and loser seats of a round-ending event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: usize,
    pub loser: usize,
}

/// Determine winner and loser seats.
///
/// - `give_prev`, `give_all`: the previous player wins, the actor loses.
/// - `take_prev`, `take_all`: the actor wins, the previous player loses.
/// - `take_custom`: the actor wins, the target loses.
/// - `give_custom`: the target wins, the actor loses.
///
/// Returns `None` for a custom rule with no target.
#[must_use]
pub fn outcome_of(
    state: &GameState,
    acting: usize,
    target_type: TargetType,
    target: Option<usize>,
) -> Option<RoundOutcome> {
    let prev = state.prev_index(acting);
    let (winner, loser) = match target_type {
        TargetType::GivePrev | TargetType::GiveAll => (prev, acting),
        TargetType::TakePrev | TargetType::TakeAll => (acting, prev),
        TargetType::TakeCustom => (acting, target?),
        TargetType::GiveCustom => (target?, acting),
    };
    Some(RoundOutcome { winner, loser })
}

/// Compute the new seating order for `outcome`.
pub fn reorder<R: SeatRng>(players: &Vector<Player>, outcome: RoundOutcome, rng: &mut R) -> Vector<Player> {
    let mut order: Vec<usize> = Vec::with_capacity(players.len());
    order.push(outcome.winner);
    if outcome.loser != outcome.winner {
        order.push(outcome.loser);
    }

    let mut remaining: Vec<usize> = (0..players.len())
        .filter(|&idx| idx != outcome.winner && idx != outcome.loser)
        .collect();

    if players.len() == 4 && remaining.len() == 2 {
        order.extend_from_slice(&rotate_pair([remaining[0], remaining[1]], rng));
    } else {
        rng.shuffle(&mut remaining);
        order.extend(remaining);
    }

    order.into_iter().map(|idx| players[idx].clone()).collect()
}

/// Pick the order of the two non-participants at a four-player table.
///
/// `pair` holds their original seats in original relative order.
fn rotate_pair<R: SeatRng>(pair: [usize; 2], rng: &mut R) -> [usize; 2] {
    let allowed = |candidate: &[usize; 2]| {
        candidate[0] != RESTRICTED_SEATS[0] && candidate[1] != RESTRICTED_SEATS[1]
    };

    let valid: SmallVec<[[usize; 2]; 2]> = [pair, [pair[1], pair[0]]]
        .into_iter()
        .filter(allowed)
        .collect();

    match valid.len() {
        0 => pair,
        1 => valid[0],
        len => valid[rng.pick(len)],
    }
}

/// Run the reordering step for `rule` if it advances the round.
///
/// Increments the round by one and reseats the table. Returns `false`
/// (state untouched) when the rule does not advance the round, an index
/// is out of range, or no winner/loser can be determined.
pub fn advance_round<R: SeatRng>(
    state: &mut GameState,
    acting: usize,
    rule: &EventRule,
    target: Option<usize>,
    rng: &mut R,
) -> bool {
    if !rule.advances_round || !indices_valid(state, acting, target) {
        return false;
    }
    let Some(outcome) = outcome_of(state, acting, rule.target_type, target) else {
        return false;
    };

    state.round += 1;
    state.players = reorder(&state.players, outcome, rng);
    true
}
