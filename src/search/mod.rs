//! Search strategies for the computer opponent.
//!
//! Both opponents implement [`SearchStrategy`] and are interchangeable:
//! minimax explores the game tree to a fixed depth and ranks cutoff
//! positions with a heuristic, while MCTS samples random playouts and
//! keeps statistics over the same rules engine. Callers that pick the
//! algorithm at runtime go through [`SearchAlgorithm`] and
//! [`search_best_move`].

pub mod eval;
pub mod minimax;

pub use eval::evaluate;
pub use minimax::{minimax, MinimaxSearch};

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::error::EngineResult;
use crate::mcts::{MctsConfig, MctsSearch};

/// A move picker for the current position.
///
/// Implementations never perform I/O and never mutate the state they are
/// given. A strategy may keep internal scratch data (tree arenas, RNG)
/// across calls, hence `&mut self`.
pub trait SearchStrategy {
    /// Pick a move for the side to move in `state`.
    ///
    /// Fails with [`crate::error::EngineError::NoValidMoves`] when invoked
    /// on a position with no legal move; check `is_terminal` first.
    fn pick_move(&mut self, state: &GameState) -> EngineResult<usize>;
}

/// Runtime-selectable search algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// Depth-limited minimax with alpha-beta pruning.
    Minimax { depth: u32 },
    /// Monte Carlo Tree Search with a fixed rollout budget.
    Mcts { iterations: u32 },
}

/// Run the chosen algorithm once and return its move.
///
/// Convenience for callers that hold a [`SearchAlgorithm`] value rather
/// than a strategy instance. Each call starts a fresh search; there is no
/// state carried across positions.
pub fn search_best_move(state: &GameState, algorithm: SearchAlgorithm) -> EngineResult<usize> {
    match algorithm {
        SearchAlgorithm::Minimax { depth } => MinimaxSearch::new(depth).pick_move(state),
        SearchAlgorithm::Mcts { iterations } => {
            MctsSearch::new(MctsConfig::default().with_iterations(iterations)).pick_move(state)
        }
    }
}
