//! Monte Carlo Tree Search for the Kalaha opponent.
//!
//! ## Overview
//!
//! One statistics tree is built per search, rooted at the current
//! position, and discarded once the recommended move is read:
//!
//! 1. **Selection** — descend while the node has children and its state is
//!    not terminal, maximizing UCB1 at each step.
//! 2. **Expansion** — a non-terminal node with no children gets one child
//!    per legal move, states produced by the rules engine. Idempotent.
//! 3. **Simulation** — uniformly-random legal moves from the reached
//!    node's state until terminal, then the finalized outcome value.
//! 4. **Backpropagation** — walk parent links to the root, adding the same
//!    signed result at every level.
//!
//! Two conventions are reproduced deliberately rather than "fixed":
//! backpropagation never inverts the sign per ply even though the
//! extra-turn rule makes turn alternation irregular, and the final move is
//! the child with the best value/visit ratio, not the most-visited child.
//!
//! ## Usage
//!
//! ```rust
//! use kalaha_engine::core::GameState;
//! use kalaha_engine::mcts::{MctsConfig, MctsSearch};
//!
//! let state = GameState::initial();
//! let mut search = MctsSearch::new(MctsConfig::default().with_seed(7));
//! let pit = search.search(&state, 1000).unwrap();
//! assert!(pit < 6);
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use search::MctsSearch;
pub use stats::SearchStats;
pub use tree::MctsTree;
