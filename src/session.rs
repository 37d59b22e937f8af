//! Caller-side match orchestration.
//!
//! A transport or display layer owns one `GameSession` per match and
//! drives it through three operations: submit the human's move (the
//! computer replies until the turn comes back), restart, and poll state.
//! The session holds plain owned data; if it is shared across concurrent
//! requests the caller serializes access (single-writer discipline or a
//! mutex) — the engine itself needs no locking.
//!
//! Every applied move is logged through `tracing` with the board before
//! and after; logging never alters game behavior.

use tracing::{debug, info};

use crate::core::{GameState, Player};
use crate::error::EngineResult;
use crate::rules::{self, GameOutcome};
use crate::search::{search_best_move, SearchAlgorithm};

/// One Kalaha match: side A is the human, side B the computer.
#[derive(Clone, Copy, Debug)]
pub struct GameSession {
    state: GameState,
    algorithm: SearchAlgorithm,
}

impl GameSession {
    /// Start a match from the standard opening position, side A to move.
    #[must_use]
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self {
            state: GameState::initial(),
            algorithm,
        }
    }

    /// The current position, for a display layer to render.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply the human's move, then let the computer reply while it holds
    /// the turn (extra turns included).
    ///
    /// An extra-turn outcome for the human — `to_move` still side A on
    /// return — is a legitimate result, not an error. Illegal pits surface
    /// as [`crate::error::EngineError::InvalidMove`] for the boundary
    /// layer to reject.
    pub fn submit_move(&mut self, pit: usize) -> EngineResult<&GameState> {
        let before = self.state.board;
        self.state = rules::apply_move(&self.state, pit)?;
        info!(pit, "human move");
        debug!(before = ?before.slots(), after = ?self.state.board.slots(), "board");

        while self.state.to_move == Player::B && !rules::is_terminal(&self.state) {
            let reply = search_best_move(&self.state, self.algorithm)?;
            let before = self.state.board;
            self.state = rules::apply_move(&self.state, reply)?;
            info!(pit = reply, "computer move");
            debug!(before = ?before.slots(), after = ?self.state.board.slots(), "board");
        }

        Ok(&self.state)
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.state)
    }

    /// Final outcome, or `None` while the match is still running.
    ///
    /// Scoring sweeps a copy; the session's own state is left as the
    /// final sown position.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !rules::is_terminal(&self.state) {
            return None;
        }
        let (_, outcome) = rules::finalize(&self.state);
        Some(outcome)
    }

    /// Discard the match and return to the opening position.
    pub fn restart(&mut self) {
        info!("match restarted");
        self.state = GameState::initial();
    }
}
