//! Game rules: sowing, capture, extra turns, terminal detection, scoring.

pub mod engine;

pub use engine::{
    apply_move, finalize, is_terminal, valid_moves, GameOutcome, MoveList,
};

pub(crate) use engine::apply_move_unchecked;
