//! Core engine types: board, players, game state, RNG.
//!
//! These are the fundamental value types the rules engine and both search
//! strategies operate on. Everything here is cheap to copy and free of
//! interior mutability.

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::Board;
pub use player::Player;
pub use rng::GameRng;
pub use state::GameState;
