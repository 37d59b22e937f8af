//! Complete game state: board plus side to move.
//!
//! `GameState` is a small `Copy` value (14 counts + 1 enum). Move
//! application in the rules engine produces a new state rather than
//! mutating, so any number of searches can branch from the same position
//! without defensive copying.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// A Kalaha position: the board and whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Pit and store counts.
    pub board: Board,

    /// Side to move.
    pub to_move: Player,
}

impl GameState {
    /// The standard starting position with side A to move.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::initial(),
            to_move: Player::A,
        }
    }

    /// Build a state from raw slot counts and a side to move.
    #[must_use]
    pub const fn new(slots: [u8; Board::SLOT_COUNT], to_move: Player) -> Self {
        Self {
            board: Board::from_slots(slots),
            to_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
