//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCB1 exploration constant (default: 1.4).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Small constant added to visit counts in UCB1 so unvisited children
    /// divide by epsilon instead of zero.
    pub epsilon: f64,

    /// Rollouts per search when driven through `SearchStrategy`.
    pub iterations: u32,

    /// Random seed for the rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.4,
            epsilon: 1e-6,
            iterations: 1000,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with a custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with a custom rollout budget.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
