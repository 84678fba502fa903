//! Flat Monte Carlo rollout player.
//!
//! ## Overview
//!
//! Each decision samples many complete games from the current position and
//! credits each game's result to the first move played in it:
//!
//! - **Move filter**: only the controlled player's moves are candidates
//! - **Progress heuristic**: the controlled player never steps away from its
//!   goal corner or straight back where it came from
//! - **Rollouts**: opponents play uniformly at random until someone wins
//! - **Scoring**: hops and moves out of the home area earn a bonus on top of
//!   the win/loss result
//! - **Aggregation**: the seed move with the best single score is played
//!
//! Rollouts stop at the rollout cap or once the time budget has passed,
//! whichever comes first. With `workers > 1` the cap is split across the
//! rayon pool and the per-worker score tables are merged afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use halma_rollout::core::PlayerId;
//! use halma_rollout::games::halma::HalmaBoardBuilder;
//! use halma_rollout::montecarlo::{MonteCarloConfig, MonteCarloPlayer};
//! use halma_rollout::rules::Board;
//!
//! let board = HalmaBoardBuilder::new().max_turns(40).build();
//! let config = MonteCarloConfig::default().with_max_simulations(20);
//! let mut player = MonteCarloPlayer::new(PlayerId::new(0), config).unwrap();
//!
//! let mv = player.choose_move(&board).unwrap();
//! assert!(board.legal_moves().contains(&mv));
//! ```

pub mod aggregator;
pub mod config;
pub mod evaluator;
pub mod filter;
pub mod heuristic;
pub mod rollout;
pub mod search;
pub mod session;
pub mod stats;

// Re-export main types
pub use aggregator::{Candidate, ResultTable};
pub use config::{MonteCarloConfig, RedrawMode, ScoreWeights};
pub use evaluator::score_rollout;
pub use filter::moves_for_player;
pub use heuristic::{Drawn, ProgressHeuristic};
pub use rollout::{run_trial, TrialOutcome};
pub use search::{Decision, MonteCarloPlayer};
pub use session::AgentSession;
pub use stats::SearchStats;
