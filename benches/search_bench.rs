//! Engine benchmarks: move application and both search strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kalaha_engine::core::GameState;
use kalaha_engine::mcts::{MctsConfig, MctsSearch};
use kalaha_engine::{apply_move, minimax, valid_moves, Player};

fn bench_valid_moves(c: &mut Criterion) {
    let state = GameState::initial();

    c.bench_function("valid_moves_initial", |b| {
        b.iter(|| black_box(valid_moves(&state)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let state = GameState::initial();

    c.bench_function("apply_move_opening", |b| {
        b.iter(|| black_box(apply_move(&state, 2).unwrap()))
    });
}

fn bench_minimax_depth_six(c: &mut Criterion) {
    let state = GameState::initial();

    c.bench_function("minimax_depth_6_initial", |b| {
        b.iter(|| {
            black_box(minimax(
                &state,
                6,
                f64::NEG_INFINITY,
                f64::INFINITY,
                Player::A,
                true,
            ))
        })
    });
}

fn bench_mcts_thousand_rollouts(c: &mut Criterion) {
    let state = GameState::initial();

    c.bench_function("mcts_1000_rollouts_initial", |b| {
        b.iter(|| {
            let mut search = MctsSearch::new(MctsConfig::default().with_seed(42));
            black_box(search.search(&state, 1000).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_valid_moves,
    bench_apply_move,
    bench_minimax_depth_six,
    bench_mcts_thousand_rollouts,
);
criterion_main!(benches);
