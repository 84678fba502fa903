//! Property tests for the heuristic, scoring and aggregation.

use proptest::prelude::*;

use halma_rollout::core::{Coord, GoalCorner, Move, PlayerId};
use halma_rollout::montecarlo::{score_rollout, ProgressHeuristic, ResultTable, ScoreWeights};

const ME: PlayerId = PlayerId::new(0);

fn cell() -> impl Strategy<Value = Coord> {
    (0i8..16, 0i8..16).prop_map(|(x, y)| Coord::new(x, y))
}

fn corner() -> impl Strategy<Value = GoalCorner> {
    prop::sample::select(GoalCorner::ALL.to_vec())
}

/// A small pool of seed moves so that repeats are common.
fn seed_move() -> impl Strategy<Value = Move> {
    (0i8..4, any::<bool>()).prop_map(|(x, hop)| {
        let from = Coord::new(x, 0);
        let to = Coord::new(x + 1, 1);
        if hop {
            Move::hop(ME, from, to)
        } else {
            Move::step(ME, from, to)
        }
    })
}

fn recordings() -> impl Strategy<Value = Vec<(Move, i32)>> {
    prop::collection::vec((seed_move(), -6i32..=11), 1..40)
}

/// First move to reach the overall maximum, computed directly.
fn expected_best(records: &[(Move, i32)]) -> Move {
    let top = records.iter().map(|&(_, s)| s).max().unwrap();
    records.iter().find(|&&(_, s)| s == top).unwrap().0
}

proptest! {
    #[test]
    fn placeholders_always_pass(goal in corner(), last_from in cell(), last_to in cell()) {
        let last = Move::step(ME, last_from, last_to);
        let heuristic = ProgressHeuristic::new(goal.coord(), Some(&last));

        prop_assert!(heuristic.accepts(&Move::end_turn(ME)));
        let half = Move { from: Some(last_from), to: None, player: ME, hop: false };
        prop_assert!(heuristic.accepts(&half));
    }

    #[test]
    fn rejects_exactly_retreats_and_reversals(
        goal in corner(),
        from in cell(),
        to in cell(),
        last_from in cell(),
    ) {
        let last = Move::step(ME, last_from, Coord::new(7, 7));
        let heuristic = ProgressHeuristic::new(goal.coord(), Some(&last));
        let mv = Move::step(ME, from, to);

        let g = goal.coord();
        let retreats = to.distance(g) > from.distance(g);
        let reverses = to == last_from;
        prop_assert_eq!(heuristic.accepts(&mv), !(retreats || reverses));
    }

    #[test]
    fn scoring_is_pure_and_bounded(
        from in cell(),
        to in cell(),
        hop in any::<bool>(),
        goal in corner(),
        winner in prop::option::of(0u8..4),
    ) {
        let seed = Move { from: Some(from), to: Some(to), player: ME, hop };
        let winner = winner.map(PlayerId::new);
        let weights = ScoreWeights::default();

        let a = score_rollout(&seed, winner, ME, goal.coord(), &weights);
        let b = score_rollout(&seed, winner, ME, goal.coord(), &weights);
        prop_assert_eq!(a, b);
        prop_assert!((-6..=11).contains(&a));
        if winner == Some(ME) {
            prop_assert!(a >= 6);
        }
    }

    #[test]
    fn best_is_first_to_reach_the_maximum(records in recordings()) {
        let mut table = ResultTable::new();
        for &(mv, score) in &records {
            table.record(mv, score);
        }

        let best = table.best().unwrap();
        prop_assert_eq!(best.seed, expected_best(&records));
        prop_assert_eq!(best.best_score, records.iter().map(|&(_, s)| s).max().unwrap());
        prop_assert_eq!(table.recorded(), records.len() as u64);
    }

    #[test]
    fn merge_matches_sequential_replay(left in recordings(), right in recordings()) {
        let mut a = ResultTable::new();
        for &(mv, score) in &left {
            a.record(mv, score);
        }
        let mut b = ResultTable::new();
        for &(mv, score) in &right {
            b.record(mv, score);
        }

        let all: Vec<_> = left.iter().chain(right.iter()).copied().collect();
        let merged = a.merge(b);

        prop_assert_eq!(merged.best().unwrap().seed, expected_best(&all));
        prop_assert_eq!(merged.recorded(), all.len() as u64);
        for candidate in merged.candidates() {
            let visits = all.iter().filter(|&&(mv, _)| mv == candidate.seed).count();
            prop_assert_eq!(candidate.visits as usize, visits);
        }
    }
}
