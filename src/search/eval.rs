//! Heuristic position evaluation for minimax cutoffs.

use crate::core::{GameState, Player};

/// Score a position from one side's perspective.
///
/// `(own_store + 0.5 * own_pit_sum) - (opp_store + 0.5 * opp_pit_sum)`:
/// banked seeds count fully, seeds still in play count half. Positive is
/// good for `perspective`. Terminal positions are scored with the same
/// formula as depth cutoffs, not with the exact finalized store margin.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Player) -> f64 {
    let opponent = perspective.opponent();

    let own = f64::from(state.board.store(perspective))
        + 0.5 * f64::from(state.board.side_sum(perspective));
    let opp = f64::from(state.board.store(opponent))
        + 0.5 * f64::from(state.board.side_sum(opponent));

    own - opp
}
