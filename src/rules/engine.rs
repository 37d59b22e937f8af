//! The Kalaha rules engine.
//!
//! All functions take a state by reference and return fresh values; no
//! argument is ever mutated. Both search strategies and the session layer
//! drive the game exclusively through this module.
//!
//! ## Move semantics
//!
//! A move lifts every seed from one of the mover's pits and sows them one
//! per slot in ascending index order, wrapping 13 -> 0. Sowing skips the
//! opponent's store and nothing else: the mover's own store and every
//! playable pit on both sides receive seeds.
//!
//! - **Capture**: the last seed lands in one of the mover's own pits and
//!   that pit now holds exactly one seed (it was empty before the sow).
//!   That seed and the entire opposite pit (`12 - last`) go to the mover's
//!   store. The check reads the post-sow count.
//! - **Extra turn**: the last seed lands in the mover's own store; the
//!   side to move does not change. Otherwise it flips.

use smallvec::SmallVec;

use crate::core::{Board, GameState, Player};
use crate::error::{EngineError, EngineResult};

/// Legal moves for one position. A side has at most six sowable pits.
pub type MoveList = SmallVec<[usize; 6]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOutcome {
    /// One side's store holds more seeds after the final sweep.
    Winner(Player),
    /// Equal stores.
    Draw,
}

impl GameOutcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Player) -> bool {
        matches!(self, GameOutcome::Winner(w) if *w == side)
    }

    /// Signed value of the outcome: +1.0 for a side-B win, -1.0 for a
    /// side-A win, 0.0 for a draw. Side B is the computer by convention,
    /// and MCTS rollouts accumulate this value directly.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            GameOutcome::Winner(Player::B) => 1.0,
            GameOutcome::Winner(Player::A) => -1.0,
            GameOutcome::Draw => 0.0,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(side) => write!(f, "{side} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Indices of the current player's non-empty pits, ascending.
///
/// An empty list means the mover's side is exhausted.
#[must_use]
pub fn valid_moves(state: &GameState) -> MoveList {
    state
        .to_move
        .pit_range()
        .filter(|&pit| state.board[pit] > 0)
        .collect()
}

/// Apply a move, returning the resulting position.
///
/// Fails with [`EngineError::InvalidMove`] if `pit` is not among
/// [`valid_moves`] for the current position.
pub fn apply_move(state: &GameState, pit: usize) -> EngineResult<GameState> {
    if !state.to_move.owns_pit(pit) || state.board[pit] == 0 {
        return Err(EngineError::InvalidMove { pit });
    }
    Ok(apply_move_unchecked(state, pit))
}

/// Apply a move already known to be legal.
///
/// Search loops draw moves from [`valid_moves`], so revalidating each one
/// would only add a branch per node. Legality is still asserted in debug
/// builds.
pub(crate) fn apply_move_unchecked(state: &GameState, pit: usize) -> GameState {
    debug_assert!(
        state.to_move.owns_pit(pit) && state.board[pit] > 0,
        "apply_move_unchecked on illegal pit {pit}"
    );

    let mover = state.to_move;
    let skipped = mover.opponent().store();

    let mut next = *state;
    let mut seeds = next.board[pit];
    next.board[pit] = 0;

    let mut index = pit;
    while seeds > 0 {
        index = (index + 1) % Board::SLOT_COUNT;
        if index == skipped {
            continue;
        }
        next.board[index] += 1;
        seeds -= 1;
    }

    // Capture: the post-sow count must be exactly one, meaning the pit was
    // empty before this sow.
    if mover.owns_pit(index) && next.board[index] == 1 {
        let opposite = 12 - index;
        let captured = next.board[index] + next.board[opposite];
        next.board[index] = 0;
        next.board[opposite] = 0;
        next.board[mover.store()] += captured;
    }

    if index != mover.store() {
        next.to_move = mover.opponent();
    }

    next
}

/// Whether the game is over: one side's six pits are all empty.
///
/// Stores are excluded from the check.
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    state.board.side_exhausted(Player::A) || state.board.side_exhausted(Player::B)
}

/// Sweep remaining seeds into their owners' stores and score the game.
///
/// Only meaningful on a terminal state; the sweep is one-way and must not
/// be applied mid-game. Conserves the seed total.
#[must_use]
pub fn finalize(state: &GameState) -> (GameState, GameOutcome) {
    debug_assert!(is_terminal(state), "finalize on a non-terminal state");

    let mut swept = *state;
    for side in [Player::A, Player::B] {
        let mut remaining = 0;
        for pit in side.pit_range() {
            remaining += swept.board[pit];
            swept.board[pit] = 0;
        }
        swept.board[side.store()] += remaining;
    }

    let outcome = match swept.board[Board::STORE_B].cmp(&swept.board[Board::STORE_A]) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Player::B),
        std::cmp::Ordering::Less => GameOutcome::Winner(Player::A),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    };

    (swept, outcome)
}
