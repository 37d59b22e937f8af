//! Error types for the Kalaha engine.
//!
//! The engine performs no I/O, so the taxonomy is small: a caller picked a
//! pit it may not sow, or a search was invoked on a position with nothing
//! to search. Nothing is retried internally; recovery belongs to the
//! caller.

use thiserror::Error;

/// Errors that can occur in the Kalaha engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The chosen pit is not a legal move in the current position: it is
    /// empty, a store, or on the opponent's side. Caller's fault; surface
    /// it to the boundary layer as a rejected request.
    #[error("invalid move: pit {pit} is not sowable for the side to move")]
    InvalidMove { pit: usize },

    /// A search was invoked on a position with no legal moves. This cannot
    /// happen when `is_terminal` is checked first, so it is treated as a
    /// contract violation rather than silently returning an arbitrary pit.
    #[error("no valid moves available for the side to move")]
    NoValidMoves,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
