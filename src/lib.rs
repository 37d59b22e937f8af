//! # kalaha-engine
//!
//! A two-player Kalaha (Mancala) rules engine with two interchangeable
//! computer opponents: depth-limited minimax with alpha-beta pruning, and
//! Monte Carlo Tree Search.
//!
//! ## Design Principles
//!
//! 1. **Pure computation**: The engine performs no I/O. Callers (a display
//!    or transport layer) poll state and submit moves.
//!
//! 2. **Value-type state**: A position is 14 pit counts plus the side to
//!    move, copied by value. Every move application returns a fresh
//!    `GameState`; the input is never mutated, so searches can branch from
//!    the same position without aliasing.
//!
//! 3. **Interchangeable search**: Both opponents implement `SearchStrategy`
//!    ("pick a move for the current state") and can be swapped at runtime
//!    via `SearchAlgorithm`.
//!
//! ## Modules
//!
//! - `core`: Board, players, game state, deterministic RNG
//! - `rules`: Sowing, capture, extra-turn, terminal and scoring logic
//! - `search`: Strategy seam, heuristic evaluator, minimax with alpha-beta
//! - `mcts`: Monte Carlo Tree Search over an arena-allocated tree
//! - `session`: Caller-side match orchestration (human move in, AI replies)

pub mod core;
pub mod error;
pub mod mcts;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, GameRng, GameState, Player};

pub use crate::error::{EngineError, EngineResult};

pub use crate::rules::{
    apply_move, finalize, is_terminal, valid_moves, GameOutcome,
};

pub use crate::search::{
    evaluate, minimax, search_best_move, MinimaxSearch, SearchAlgorithm, SearchStrategy,
};

pub use crate::mcts::{MctsConfig, MctsNode, MctsSearch, MctsTree, NodeId, SearchStats};

pub use crate::session::GameSession;
