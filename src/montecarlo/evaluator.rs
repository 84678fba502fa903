//! Scoring a finished rollout against the move that seeded it.
//!
//! | Seed move / outcome                     | Score |
//! |-----------------------------------------|-------|
//! | Seed is a hop                           | +3    |
//! | Seed starts > 15 from the goal corner   | +2    |
//! | Controlled agent won the rollout        | +6    |
//! | Anyone else won                         | -6    |

use crate::core::{Coord, Move, PlayerId};

use super::config::ScoreWeights;

/// Score a rollout seeded by `seed` that ended with `winner`.
///
/// Pure: depends only on its arguments.
#[must_use]
pub fn score_rollout(
    seed: &Move,
    winner: Option<PlayerId>,
    player: PlayerId,
    goal: Coord,
    weights: &ScoreWeights,
) -> i32 {
    let mut score = 0;
    if seed.is_hop() {
        score += weights.hop;
    }
    if seed.from.is_some_and(|from| from.distance(goal) > weights.escape_distance) {
        score += weights.escape;
    }
    if winner == Some(player) {
        score + weights.win
    } else {
        score - weights.win
    }
}
