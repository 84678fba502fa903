//! Time-boxed rollout search.
//!
//! Each decision runs independent rollouts from the current position until
//! the rollout cap is reached or the time budget has elapsed, scores every
//! rollout against its seed move, and plays the seed with the best score.
//! There is no tree: rollouts never share information with each other.

use std::time::Instant;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::core::{GameRng, Move, PlayerId};
use crate::error::EngineError;
use crate::rules::Board;

use super::aggregator::ResultTable;
use super::config::MonteCarloConfig;
use super::evaluator::score_rollout;
use super::filter::moves_for_player;
use super::heuristic::ProgressHeuristic;
use super::rollout::run_trial;
use super::session::AgentSession;
use super::stats::SearchStats;

/// Outcome of one decision.
#[derive(Clone, Debug)]
pub struct Decision {
    /// The move to play.
    pub mv: Move,

    /// Scores per seed move. Empty when there was only one move to play.
    pub results: ResultTable,

    /// Diagnostics.
    pub stats: SearchStats,
}

/// Rollout player for one seat.
///
/// Owns the agent's session and RNG. Call `choose_move` once per real turn.
pub struct MonteCarloPlayer {
    session: AgentSession,
    config: MonteCarloConfig,
    rng: GameRng,
}

impl MonteCarloPlayer {
    /// Create a player for `player`'s seat.
    pub fn new(player: PlayerId, config: MonteCarloConfig) -> Result<Self, EngineError> {
        Self::from_session(AgentSession::new(player)?, config)
    }

    /// Create a player from an existing session.
    pub fn from_session(session: AgentSession, config: MonteCarloConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self { session, config, rng })
    }

    /// Pick a move for the current position and remember it as the last move.
    pub fn choose_move<B: Board + Sync>(&mut self, board: &B) -> Result<Move, EngineError> {
        self.decide(board).map(|decision| decision.mv)
    }

    /// Like `choose_move`, returning the full score table and statistics.
    pub fn decide<B: Board + Sync>(&mut self, board: &B) -> Result<Decision, EngineError> {
        let start = Instant::now();
        let player = self.session.player();

        let turn = board.turn();
        if turn != player {
            return Err(EngineError::NotOurTurn { player, turn });
        }

        let candidates = moves_for_player(&board.legal_moves(), player);
        if candidates.is_empty() {
            return Err(EngineError::EmptyMoveSet { player });
        }

        // Only one move: no choice to make
        if candidates.len() == 1 {
            let mv = candidates[0];
            self.session.record_decision(mv);
            return Ok(Decision {
                mv,
                results: ResultTable::new(),
                stats: SearchStats::new(),
            });
        }

        let heuristic = ProgressHeuristic::new(self.session.goal().coord(), self.session.last_move());
        let job = Job {
            board,
            candidates: &candidates,
            player,
            heuristic,
            config: &self.config,
            start,
        };

        let (results, mut stats) = if self.config.workers == 1 {
            job.run(self.config.max_simulations, &mut self.rng)?
        } else {
            let workers = self.config.workers;
            let forks: Vec<GameRng> = (0..workers).map(|_| self.rng.fork()).collect();
            let shares = split_budget(self.config.max_simulations, workers);

            let partials = forks
                .into_par_iter()
                .zip(shares)
                .map(|(mut rng, budget)| job.run(budget, &mut rng))
                .collect::<Result<Vec<_>, _>>()?;

            let mut stats = SearchStats::new();
            let mut results = ResultTable::new();
            for (table, worker_stats) in partials {
                stats.absorb(&worker_stats);
                results = results.merge(table);
            }
            (results, stats)
        };

        let elapsed = start.elapsed();
        stats.time_us = elapsed.as_micros() as u64;
        stats.overrun = elapsed > self.config.turn_budget();

        let best = results.best().ok_or(EngineError::NoCandidates)?;
        let mv = best.seed;

        debug!(
            "{}: {} rollouts over {} seeds in {} ms, chose {} (score {})",
            player,
            stats.trials,
            results.len(),
            elapsed.as_millis(),
            mv,
            best.best_score
        );
        if stats.overrun {
            warn!(
                "{}: decision took {} ms, over the {} ms turn allowance",
                player,
                elapsed.as_millis(),
                self.config.turn_budget_ms
            );
        }
        if stats.fallbacks > 0 {
            debug!("{}: {} heuristic draws fell back to unfiltered moves", player, stats.fallbacks);
        }

        self.session.record_decision(mv);
        Ok(Decision { mv, results, stats })
    }

    /// The agent's session.
    #[must_use]
    pub fn session(&self) -> &AgentSession {
        &self.session
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }
}

/// Everything a rollout worker reads. Shared immutably between workers.
struct Job<'a, B> {
    board: &'a B,
    candidates: &'a [Move],
    player: PlayerId,
    heuristic: ProgressHeuristic,
    config: &'a MonteCarloConfig,
    start: Instant,
}

impl<B: Board> Job<'_, B> {
    /// Run up to `budget` rollouts, stopping after the first one that ends
    /// past the deadline.
    fn run(&self, budget: u32, rng: &mut GameRng) -> Result<(ResultTable, SearchStats), EngineError> {
        let goal = self.heuristic.goal();
        let timeout = self.config.timeout();
        let mut results = ResultTable::new();
        let mut stats = SearchStats::new();

        for _ in 0..budget {
            let outcome = run_trial(
                self.board,
                self.candidates,
                self.player,
                &self.heuristic,
                self.config,
                rng,
            )?;
            let score = score_rollout(
                &outcome.seed,
                outcome.winner,
                self.player,
                goal,
                &self.config.weights,
            );
            trace!(
                "rollout {}: seed {} winner {:?} after {} plies, score {}",
                stats.trials,
                outcome.seed,
                outcome.winner,
                outcome.plies,
                score
            );

            results.record(outcome.seed, score);
            stats.trials += 1;
            stats.plies += u64::from(outcome.plies);
            stats.fallbacks += outcome.fallbacks;

            if self.start.elapsed() > timeout {
                stats.timed_out = true;
                break;
            }
        }

        Ok((results, stats))
    }
}

/// Split `total` rollouts across `workers` as evenly as possible.
fn split_budget(total: u32, workers: usize) -> Vec<u32> {
    let workers = workers as u32;
    let base = total / workers;
    let extra = total % workers;
    (0..workers).map(|i| base + u32::from(i < extra)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    const ME: PlayerId = PlayerId::new(0);

    /// Player 0 picks among a fixed set of moves; the game ends right after.
    #[derive(Clone)]
    struct OneShot {
        moves: Vec<Move>,
        turn: PlayerId,
        winner: Option<PlayerId>,
        outcome: PlayerId,
    }

    impl OneShot {
        fn new(moves: Vec<Move>, outcome: PlayerId) -> Self {
            Self { moves, turn: ME, winner: None, outcome }
        }
    }

    impl Board for OneShot {
        fn legal_moves(&self) -> Vec<Move> {
            self.moves.clone()
        }

        fn turn(&self) -> PlayerId {
            self.turn
        }

        fn winner(&self) -> Option<PlayerId> {
            self.winner
        }

        fn apply_move(&mut self, _mv: &Move) {
            self.winner = Some(self.outcome);
        }
    }

    fn forward(i: i8) -> Move {
        Move::step(ME, Coord::new(i, 0), Coord::new(i + 1, 1))
    }

    #[test]
    fn test_split_budget() {
        assert_eq!(split_budget(10, 3), vec![4, 3, 3]);
        assert_eq!(split_budget(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(split_budget(8, 1), vec![8]);
    }

    #[test]
    fn test_single_move_returned_without_rollouts() {
        let only = forward(0);
        let board = OneShot::new(vec![only], PlayerId::new(1));
        let mut player = MonteCarloPlayer::new(ME, MonteCarloConfig::default()).unwrap();

        let decision = player.decide(&board).unwrap();
        assert_eq!(decision.mv, only);
        assert_eq!(decision.stats.trials, 0);
        assert_eq!(player.session().last_move(), Some(&only));
    }

    #[test]
    fn test_respects_rollout_cap() {
        let board = OneShot::new(vec![forward(0), forward(1), forward(2)], ME);
        let config = MonteCarloConfig::default().with_max_simulations(25);
        let mut player = MonteCarloPlayer::new(ME, config).unwrap();

        let decision = player.decide(&board).unwrap();
        assert_eq!(decision.stats.trials, 25);
        assert_eq!(decision.results.recorded(), 25);
        assert!(!decision.stats.timed_out);
    }

    #[test]
    fn test_updates_last_move() {
        let board = OneShot::new(vec![forward(0), forward(1)], ME);
        let config = MonteCarloConfig::default().with_max_simulations(10);
        let mut player = MonteCarloPlayer::new(ME, config).unwrap();

        let mv = player.choose_move(&board).unwrap();
        assert_eq!(player.session().last_move(), Some(&mv));
    }

    #[test]
    fn test_not_our_turn() {
        let mut board = OneShot::new(vec![forward(0)], ME);
        board.turn = PlayerId::new(2);
        let mut player = MonteCarloPlayer::new(ME, MonteCarloConfig::default()).unwrap();

        assert_eq!(
            player.choose_move(&board),
            Err(EngineError::NotOurTurn { player: ME, turn: PlayerId::new(2) })
        );
    }

    #[test]
    fn test_empty_move_set_fails_fast() {
        let other = Move::end_turn(PlayerId::new(1));
        let board = OneShot::new(vec![other], ME);
        let mut player = MonteCarloPlayer::new(ME, MonteCarloConfig::default()).unwrap();

        assert_eq!(player.choose_move(&board), Err(EngineError::EmptyMoveSet { player: ME }));
        assert_eq!(player.session().last_move(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MonteCarloConfig::default().with_workers(0);
        assert!(matches!(
            MonteCarloPlayer::new(ME, config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parallel_workers_cover_budget() {
        let board = OneShot::new(vec![forward(0), forward(1), forward(2)], ME);
        let config = MonteCarloConfig::default().with_max_simulations(40).with_workers(4);
        let mut player = MonteCarloPlayer::new(ME, config).unwrap();

        let decision = player.decide(&board).unwrap();
        assert_eq!(decision.stats.trials, 40);
        assert_eq!(decision.results.recorded(), 40);
        assert!(board.moves.contains(&decision.mv));
    }
}
