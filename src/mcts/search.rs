//! Core MCTS search algorithm.

use std::time::Instant;

use crate::core::{GameRng, GameState};
use crate::error::{EngineError, EngineResult};
use crate::rules;
use crate::search::SearchStrategy;

use super::config::MctsConfig;
use super::node::{MctsNode, NodeId};
use super::stats::SearchStats;
use super::tree::MctsTree;

/// Main MCTS search context.
///
/// Owns the arena tree, configuration, rollout RNG, and per-search
/// statistics. One tree is built per `search` call and replaced on the
/// next; nothing is reused across positions.
pub struct MctsSearch {
    config: MctsConfig,
    tree: MctsTree,
    rng: GameRng,
    stats: SearchStats,
}

impl MctsSearch {
    /// Create a new MCTS search context.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        Self {
            config,
            tree: MctsTree::new(GameState::initial()),
            rng: GameRng::new(config.seed),
            stats: SearchStats::default(),
        }
    }

    /// Run MCTS for `iterations` rollouts and return the recommended pit.
    ///
    /// The recommendation is the root child with the highest value/visit
    /// ratio — deliberately not the most-visited child. Fails with
    /// [`EngineError::NoValidMoves`] on a terminal or exhausted position.
    pub fn search(&mut self, state: &GameState, iterations: u32) -> EngineResult<usize> {
        let start = Instant::now();
        self.stats.reset();

        if rules::is_terminal(state) || rules::valid_moves(state).is_empty() {
            return Err(EngineError::NoValidMoves);
        }

        self.tree.reset(*state);

        for _ in 0..iterations {
            self.iteration();
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        self.best_child(self.tree.root(), 0.0)
            .map(|(pit, _)| pit)
            .ok_or(EngineError::NoValidMoves)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self) {
        // === SELECTION ===
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if !node.is_expanded() || rules::is_terminal(&node.state) {
                break;
            }
            match self.best_child(current, self.config.exploration_constant) {
                Some((_, child)) => current = child,
                None => break,
            }
        }

        // === EXPANSION ===
        if !rules::is_terminal(&self.tree.get(current).state) {
            self.expand(current);
        }

        // === SIMULATION ===
        // From the reached node's own state; its fresh children are picked
        // up by later iterations' selection passes.
        let sim_state = self.tree.get(current).state;
        let result = self.simulate(sim_state);
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        self.backpropagate(current, result);
    }

    /// Populate a node with one child per legal move.
    ///
    /// Idempotent: a node whose children are already populated is left
    /// untouched.
    fn expand(&mut self, id: NodeId) {
        if self.tree.get(id).is_expanded() {
            return;
        }

        let state = self.tree.get(id).state;
        for pit in rules::valid_moves(&state) {
            let child_state = rules::apply_move_unchecked(&state, pit);
            let child = self.tree.alloc(MctsNode::new(child_state, id));
            self.tree.get_mut(id).children.push((pit, child));
        }

        self.stats.nodes_expanded += 1;
    }

    /// Play uniformly-random legal moves until terminal, then score.
    ///
    /// Forks the rollout RNG so the number of draws inside one rollout
    /// never shifts the sequence seen by later iterations.
    fn simulate(&mut self, mut state: GameState) -> f64 {
        let mut rollout_rng = self.rng.fork();

        while !rules::is_terminal(&state) {
            let moves = rules::valid_moves(&state);
            let pit = moves[rollout_rng.gen_range_usize(0..moves.len())];
            state = rules::apply_move_unchecked(&state, pit);
        }

        let (_, outcome) = rules::finalize(&state);
        outcome.value()
    }

    /// Walk parent links from `leaf` to the root, recording the result.
    ///
    /// The same signed value is added at every level regardless of which
    /// side was to move there. Turn alternation is irregular under the
    /// extra-turn rule, so this is a documented policy, not an oversight.
    fn backpropagate(&mut self, leaf: NodeId, result: f64) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.tree.get_mut(current);
            node.update(result);
            current = node.parent;
        }
    }

    /// Child of `id` maximizing UCB1 at the given exploration weight.
    ///
    /// `UCB1 = value / (visits + eps) + c * sqrt(ln(parent_visits + 1) /
    /// (visits + eps))`. With `exploration == 0` this degenerates to the
    /// value/visit ratio used for the final recommendation. The first
    /// child reaching the maximum wins ties; children are kept in
    /// ascending move order.
    fn best_child(&self, id: NodeId, exploration: f64) -> Option<(usize, NodeId)> {
        let node = self.tree.get(id);
        let eps = self.config.epsilon;
        let ln_parent = (f64::from(node.visits) + 1.0).ln();

        let mut best: Option<(usize, NodeId)> = None;
        let mut best_score = f64::NEG_INFINITY;

        for &(pit, child_id) in &node.children {
            let child = self.tree.get(child_id);
            let denom = f64::from(child.visits) + eps;
            let score = child.value / denom + exploration * (ln_parent / denom).sqrt();
            if score > best_score {
                best_score = score;
                best = Some((pit, child_id));
            }
        }

        best
    }

    /// Get search statistics for the most recent `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl SearchStrategy for MctsSearch {
    fn pick_move(&mut self, state: &GameState) -> EngineResult<usize> {
        let iterations = self.config.iterations;
        self.search(state, iterations)
    }
}
