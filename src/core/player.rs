//! Player identification for the two sides of the board.
//!
//! Side A owns pits 0-5 and the store at index 6; side B owns pits 7-12
//! and the store at index 13. By convention side A is the human and side B
//! the computer, but nothing in the engine depends on that.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::board::Board;

/// One of the two sides of a Kalaha board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Bottom side: pits 0-5, store 6.
    A,
    /// Top side: pits 7-12, store 13.
    B,
}

impl Player {
    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Board index of this side's store.
    #[inline]
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::A => Board::STORE_A,
            Player::B => Board::STORE_B,
        }
    }

    /// Index range of this side's six playable pits.
    #[inline]
    #[must_use]
    pub fn pit_range(self) -> Range<usize> {
        match self {
            Player::A => 0..Board::STORE_A,
            Player::B => Board::STORE_A + 1..Board::STORE_B,
        }
    }

    /// Whether `pit` is one of this side's playable pits (stores excluded).
    #[inline]
    #[must_use]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pit_range().contains(&pit)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Side A"),
            Player::B => write!(f, "Side B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
    }

    #[test]
    fn test_stores() {
        assert_eq!(Player::A.store(), 6);
        assert_eq!(Player::B.store(), 13);
    }

    #[test]
    fn test_pit_ranges() {
        assert_eq!(Player::A.pit_range(), 0..6);
        assert_eq!(Player::B.pit_range(), 7..13);
    }

    #[test]
    fn test_owns_pit_excludes_stores() {
        assert!(Player::A.owns_pit(0));
        assert!(Player::A.owns_pit(5));
        assert!(!Player::A.owns_pit(6));
        assert!(!Player::A.owns_pit(7));

        assert!(Player::B.owns_pit(7));
        assert!(Player::B.owns_pit(12));
        assert!(!Player::B.owns_pit(13));
        assert!(!Player::B.owns_pit(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::A), "Side A");
        assert_eq!(format!("{}", Player::B), "Side B");
    }
}
