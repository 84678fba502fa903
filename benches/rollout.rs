//! Rollout throughput on the opening Halma position.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use halma_rollout::core::{GameRng, PlayerId};
use halma_rollout::games::halma::HalmaBoardBuilder;
use halma_rollout::montecarlo::{moves_for_player, run_trial, MonteCarloConfig, ProgressHeuristic};
use halma_rollout::rules::Board;
use halma_rollout::GoalCorner;

fn bench_rollout(c: &mut Criterion) {
    let board = HalmaBoardBuilder::new().max_turns(200).build();
    let player = PlayerId::new(0);
    let candidates = moves_for_player(&board.legal_moves(), player);
    let goal = GoalCorner::for_player(player).unwrap().coord();
    let heuristic = ProgressHeuristic::new(goal, None);
    let config = MonteCarloConfig::default();
    let mut rng = GameRng::new(42);

    c.bench_function("rollout_200_turns", |b| {
        b.iter(|| {
            run_trial(black_box(&board), &candidates, player, &heuristic, &config, &mut rng).unwrap()
        })
    });

    c.bench_function("legal_moves_opening", |b| b.iter(|| black_box(&board).legal_moves()));
}

criterion_group!(benches, bench_rollout);
criterion_main!(benches);
