//! A single randomized play-out from a cloned position.

use crate::core::{GameRng, Move, PlayerId};
use crate::error::EngineError;
use crate::rules::Board;

use super::config::{MonteCarloConfig, RedrawMode};
use super::heuristic::ProgressHeuristic;

/// What one rollout produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialOutcome {
    /// The first move played, the one the outcome is credited to.
    pub seed: Move,

    /// Who won the play-out.
    pub winner: Option<PlayerId>,

    /// Moves applied, seed included.
    pub plies: u32,

    /// Heuristic draws that exhausted their redraw bound.
    pub fallbacks: u32,
}

/// Play one game to completion on a private copy of `board`.
///
/// The seed is drawn from `candidates` under the heuristic. Afterwards every
/// player moves uniformly at random, except that on `player`'s turns a draw
/// must first pass the heuristic; `RedrawMode` decides whether the passing
/// draw or a fresh one is applied.
pub fn run_trial<B: Board>(
    board: &B,
    candidates: &[Move],
    player: PlayerId,
    heuristic: &ProgressHeuristic,
    config: &MonteCarloConfig,
    rng: &mut GameRng,
) -> Result<TrialOutcome, EngineError> {
    let mut sim = board.clone();

    let seed = heuristic
        .draw(candidates, rng, config.max_redraws)
        .ok_or(EngineError::EmptyMoveSet { player })?;
    let mut fallbacks = u32::from(seed.fell_back);

    sim.apply_move(&seed.mv);
    let mut plies = 1;

    while sim.winner().is_none() {
        let mover = sim.turn();
        let moves = sim.legal_moves();
        let empty = EngineError::EmptyMoveSet { player: mover };

        let mv = if mover == player {
            let drawn = heuristic
                .draw(&moves, rng, config.max_redraws)
                .ok_or_else(|| empty.clone())?;
            fallbacks += u32::from(drawn.fell_back);
            match config.redraw_mode {
                RedrawMode::Validated => drawn.mv,
                RedrawMode::Preserved => *rng.choose(&moves).ok_or(empty)?,
            }
        } else {
            *rng.choose(&moves).ok_or(empty)?
        };

        sim.apply_move(&mv);
        plies += 1;
    }

    Ok(TrialOutcome {
        seed: seed.mv,
        winner: sim.winner(),
        plies,
        fallbacks,
    })
}
