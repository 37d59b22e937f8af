//! Rules engine integration tests: sowing, capture, extra turns,
//! termination, and seed conservation across whole games.

use kalaha_engine::core::{Board, GameState, Player};
use kalaha_engine::error::EngineError;
use kalaha_engine::{apply_move, finalize, is_terminal, valid_moves};

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_opening_pit_two_scenario() {
    // Side A plays pit 2 from the initial board: pit 2 empties, seeds land
    // in pits 3, 4, 5 and A's store, and A keeps the turn.
    let state = GameState::initial();
    let next = apply_move(&state, 2).unwrap();

    assert_eq!(
        next.board.slots(),
        &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
    );
    assert_eq!(next.to_move, Player::A);
}

#[test]
fn test_opening_replies_flip_the_turn() {
    let state = GameState::initial();

    for pit in [0, 1] {
        let next = apply_move(&state, pit).unwrap();
        assert_eq!(next.to_move, Player::B, "pit {pit} should not earn an extra turn");
    }
    // Pit 2 is the only opening move reaching A's store exactly.
    assert_eq!(apply_move(&state, 2).unwrap().to_move, Player::A);
    for pit in [3, 4, 5] {
        let next = apply_move(&state, pit).unwrap();
        assert_eq!(next.to_move, Player::B, "pit {pit} should not earn an extra turn");
    }
}

#[test]
fn test_capture_accounting() {
    // A sows two seeds from pit 1 into the empty pit 3; the landing seed
    // plus the five seeds in the opposite pit (9) move to A's store.
    let state = GameState::new([4, 2, 4, 0, 4, 4, 3, 4, 0, 5, 4, 4, 4, 6], Player::A);
    let captured = state.board[9];
    let next = apply_move(&state, 1).unwrap();

    assert_eq!(next.board[3], 0);
    assert_eq!(next.board[9], 0);
    assert_eq!(
        next.board[Board::STORE_A],
        state.board[Board::STORE_A] + captured + 1
    );
}

#[test]
fn test_invalid_moves_are_rejected() {
    let state = GameState::initial();

    assert_eq!(apply_move(&state, 6), Err(EngineError::InvalidMove { pit: 6 }));
    assert_eq!(apply_move(&state, 7), Err(EngineError::InvalidMove { pit: 7 }));
    assert_eq!(apply_move(&state, 13), Err(EngineError::InvalidMove { pit: 13 }));
}

// =============================================================================
// Whole-Game Properties
// =============================================================================

/// Drive a full game, always picking the mover's lowest-indexed legal pit.
fn play_lowest_pit_game() -> Vec<GameState> {
    let mut states = vec![GameState::initial()];
    while !is_terminal(states.last().unwrap()) {
        let state = states.last().unwrap();
        let pit = valid_moves(state)[0];
        states.push(apply_move(state, pit).unwrap());
    }
    states
}

#[test]
fn test_conservation_across_a_full_game() {
    let states = play_lowest_pit_game();

    assert!(states.len() > 2, "game should take more than one move");
    for state in &states {
        assert_eq!(state.board.total(), Board::TOTAL_SEEDS);
    }
}

#[test]
fn test_finalize_conserves_and_empties_pits() {
    let states = play_lowest_pit_game();
    let terminal = states.last().unwrap();

    let (swept, _) = finalize(terminal);

    assert_eq!(swept.board.total(), Board::TOTAL_SEEDS);
    assert_eq!(swept.board.side_sum(Player::A), 0);
    assert_eq!(swept.board.side_sum(Player::B), 0);
    assert_eq!(
        u32::from(swept.board[Board::STORE_A]) + u32::from(swept.board[Board::STORE_B]),
        Board::TOTAL_SEEDS
    );
}

#[test]
fn test_terminal_iff_one_side_empty() {
    let states = play_lowest_pit_game();

    for state in &states {
        let either_side_empty = state.board.side_exhausted(Player::A)
            || state.board.side_exhausted(Player::B);
        assert_eq!(is_terminal(state), either_side_empty);
    }
}

#[test]
fn test_moves_always_drawn_from_mover_side() {
    let states = play_lowest_pit_game();

    for state in &states {
        for pit in valid_moves(state) {
            assert!(state.to_move.owns_pit(pit));
            assert!(state.board[pit] > 0);
        }
    }
}
