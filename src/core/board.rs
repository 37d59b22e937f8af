//! The Kalaha board: a fixed sequence of 14 seed counts.
//!
//! ## Layout
//!
//! ```text
//! index:   0  1  2  3  4  5  |  6  |  7  8  9 10 11 12 | 13
//!          side-A pits       | A's |  side-B pits       | B's
//!                            | store                    | store
//! ```
//!
//! Sowing proceeds in ascending index order, wrapping 13 -> 0. Seeds only
//! move between slots; the total across all 14 slots is invariant under
//! every legal transition.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;

/// A Kalaha board: 12 playable pits and 2 stores, copied by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u8; 14],
}

impl Board {
    /// Total number of board slots (12 pits + 2 stores).
    pub const SLOT_COUNT: usize = 14;

    /// Index of side A's store.
    pub const STORE_A: usize = 6;

    /// Index of side B's store.
    pub const STORE_B: usize = 13;

    /// Seeds placed in each playable pit at the start of a game.
    pub const SEEDS_PER_PIT: u8 = 4;

    /// Total seeds in play (12 pits x 4 seeds).
    pub const TOTAL_SEEDS: u32 = 48;

    /// The standard starting position: four seeds per pit, empty stores.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            pits: [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        }
    }

    /// Build a board from raw slot counts. Intended for tests and for a
    /// transport layer restoring a position.
    #[must_use]
    pub const fn from_slots(pits: [u8; Board::SLOT_COUNT]) -> Self {
        Self { pits }
    }

    /// Raw slot counts in board order.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[u8; Board::SLOT_COUNT] {
        &self.pits
    }

    /// Sum of all 14 slots. Equals `TOTAL_SEEDS` for every reachable state.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().map(|&s| u32::from(s)).sum()
    }

    /// Sum of one side's six playable pits (store excluded).
    #[must_use]
    pub fn side_sum(&self, side: Player) -> u32 {
        side.pit_range().map(|i| u32::from(self.pits[i])).sum()
    }

    /// Seed count in one side's store.
    #[inline]
    #[must_use]
    pub fn store(&self, side: Player) -> u8 {
        self.pits[side.store()]
    }

    /// Whether one side's six playable pits are all empty.
    #[must_use]
    pub fn side_exhausted(&self, side: Player) -> bool {
        self.side_sum(side) == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Index<usize> for Board {
    type Output = u8;

    #[inline]
    fn index(&self, slot: usize) -> &u8 {
        &self.pits[slot]
    }
}

impl IndexMut<usize> for Board {
    #[inline]
    fn index_mut(&mut self, slot: usize) -> &mut u8 {
        &mut self.pits[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(
            board.slots(),
            &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]
        );
        assert_eq!(board.total(), Board::TOTAL_SEEDS);
    }

    #[test]
    fn test_side_sums() {
        let board = Board::initial();
        assert_eq!(board.side_sum(Player::A), 24);
        assert_eq!(board.side_sum(Player::B), 24);
        assert_eq!(board.store(Player::A), 0);
        assert_eq!(board.store(Player::B), 0);
    }

    #[test]
    fn test_side_exhausted() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 10, 1, 0, 0, 0, 0, 0, 37]);
        assert!(board.side_exhausted(Player::A));
        assert!(!board.side_exhausted(Player::B));
    }

    #[test]
    fn test_indexing() {
        let mut board = Board::initial();
        board[0] = 0;
        board[Board::STORE_A] = 4;
        assert_eq!(board[0], 0);
        assert_eq!(board[Board::STORE_A], 4);
        assert_eq!(board.total(), Board::TOTAL_SEEDS);
    }

    #[test]
    fn test_serialization() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
